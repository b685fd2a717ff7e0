use crate::normalize::normalize_whitespace;
use crate::types::ClassDescriptor;

/// 主 build 函数
///
/// 将一组类名描述符拼接为单个 `class` 属性字符串：
/// - `Empty` / 空文本：跳过，不产生分隔符
/// - `Text`：原样追加
/// - `Sequence`：递归展开
/// - `Mapping`：只保留启用的键，再递归处理
///
/// 最后把连续空白压缩为单个空格并去除首尾空白。
///
/// # 示例
///
/// ```
/// use classnames_core::{build, ClassDescriptor};
///
/// let class = build(&[
///     "btn".into(),
///     ClassDescriptor::mapping([("btn-active", true), ("btn-disabled", false)]),
///     vec!["p-4", "", "m-2"].into(),
/// ]);
/// assert_eq!(class, "btn btn-active p-4 m-2");
/// ```
pub fn build(args: &[ClassDescriptor]) -> String {
    let mut response = String::new();

    for arg in args {
        // 假值、空文本和空映射不产生任何内容，也不产生分隔符
        if arg.is_empty() {
            continue;
        }

        match arg {
            ClassDescriptor::Empty => {}
            ClassDescriptor::Text(text) => {
                response.push_str(text);
            }
            ClassDescriptor::Sequence(items) => {
                response.push_str(&build(items));
            }
            ClassDescriptor::Mapping(map) => {
                let enabled: Vec<ClassDescriptor> = map
                    .iter()
                    .filter(|(_, enabled)| **enabled)
                    .map(|(name, _)| ClassDescriptor::text(name.as_str()))
                    .collect();

                response.push_str(&build(&enabled));
            }
        }
        response.push(' ');
    }

    normalize_whitespace(&response)
}
