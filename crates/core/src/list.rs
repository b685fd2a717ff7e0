use std::fmt;

use crate::build::build;
use crate::types::ClassDescriptor;

/// 逐步累积类名描述符的构建器
///
/// 只保存描述符，输出时交给 `build`，因此语义与直接调用 `build` 完全一致。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    descriptors: Vec<ClassDescriptor>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加描述符
    pub fn with(mut self, descriptor: impl Into<ClassDescriptor>) -> Self {
        self.push(descriptor);
        self
    }

    /// 条件添加类名
    pub fn with_if(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.push((name.into(), enabled));
        self
    }

    /// 批量添加描述符
    pub fn with_all<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ClassDescriptor>,
    {
        self.extend(items);
        self
    }

    pub fn push(&mut self, descriptor: impl Into<ClassDescriptor>) {
        self.descriptors.push(descriptor.into());
    }

    /// 是否没有任何描述符（即使非空，输出也可能为空字符串）
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn build(&self) -> String {
        build(&self.descriptors)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl<T: Into<ClassDescriptor>> FromIterator<T> for ClassList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            descriptors: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Into<ClassDescriptor>> Extend<T> for ClassList {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.descriptors.extend(iter.into_iter().map(Into::into));
    }
}

impl From<ClassList> for ClassDescriptor {
    fn from(list: ClassList) -> Self {
        ClassDescriptor::Sequence(list.descriptors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_chain() {
        let list = ClassList::new()
            .with("btn")
            .with_if("btn-primary", true)
            .with_if("btn-disabled", false)
            .with(None::<&str>)
            .with(Some("rounded"));

        assert_eq!(list.build(), "btn btn-primary rounded");
        assert_eq!(list.to_string(), "btn btn-primary rounded");
    }

    #[test]
    fn test_class_list_with_all() {
        let list = ClassList::new().with("a").with_all(["b", "", "c"]);
        assert_eq!(list.build(), "a b c");
        assert_eq!(list, ClassList::from_iter(["a", "b", "", "c"]));
    }

    #[test]
    fn test_class_list_from_iter() {
        let list: ClassList = vec!["p-4", "m-2"].into_iter().collect();
        assert_eq!(list.build(), "p-4 m-2");
    }

    #[test]
    fn test_class_list_nested_in_build() {
        let inner = ClassList::new().with("inner").with_if("hidden", false);
        let outer = ClassList::new().with("outer").with(inner);
        assert_eq!(outer.build(), "outer inner");
    }

    #[test]
    fn test_class_list_empty() {
        let list = ClassList::new();
        assert!(list.is_empty());
        assert_eq!(list.build(), "");

        let falsy = ClassList::new().with("").with(0);
        assert!(!falsy.is_empty());
        assert_eq!(falsy.build(), "");
    }
}
