pub mod build;
pub mod error;
pub mod json;
pub mod list;
pub mod normalize;
pub mod types;

// Re-export commonly used types
pub use build::build;
pub use error::DescriptorError;
pub use json::{build_json, is_truthy, parse_descriptors};
pub use list::ClassList;
pub use normalize::{is_js_whitespace, normalize_whitespace};
pub use types::ClassDescriptor;
