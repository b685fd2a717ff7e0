/// 描述符解析错误类型
#[derive(Debug, Clone, PartialEq)]
pub enum DescriptorError {
    /// 输入不是合法的 JSON
    InvalidJson(String),
}

impl std::fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DescriptorError::InvalidJson(msg) => write!(f, "Invalid JSON: {}", msg),
        }
    }
}

impl std::error::Error for DescriptorError {}

impl From<serde_json::Error> for DescriptorError {
    fn from(err: serde_json::Error) -> Self {
        DescriptorError::InvalidJson(err.to_string())
    }
}
