//! JSON 边界：把动态类型的值按 JavaScript 真值规则归类为 `ClassDescriptor`

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::build::build;
use crate::error::DescriptorError;
use crate::types::ClassDescriptor;

/// JavaScript 真值判断
///
/// null、false、0、NaN、空字符串为假；数组和对象（即使为空）总是为真。
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl From<Value> for ClassDescriptor {
    fn from(value: Value) -> Self {
        match value {
            // true 为真值，但不是类名
            Value::Null | Value::Bool(_) => ClassDescriptor::Empty,
            Value::String(s) => ClassDescriptor::text(s),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ClassDescriptor::from(i)
                } else if let Some(u) = n.as_u64() {
                    ClassDescriptor::from(u)
                } else {
                    n.as_f64()
                        .map_or(ClassDescriptor::Empty, ClassDescriptor::number)
                }
            }
            Value::Array(items) => ClassDescriptor::sequence(items),
            Value::Object(map) => ClassDescriptor::mapping(
                map.into_iter()
                    .map(|(name, flag)| {
                        let enabled = is_truthy(&flag);
                        (name, enabled)
                    }),
            ),
        }
    }
}

impl From<&Value> for ClassDescriptor {
    fn from(value: &Value) -> Self {
        ClassDescriptor::from(value.clone())
    }
}

impl<'de> Deserialize<'de> for ClassDescriptor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(ClassDescriptor::from)
    }
}

/// 从 JSON 文本解析参数列表
///
/// 顶层为数组时，数组元素即参数列表；否则整个值作为唯一参数。
pub fn parse_descriptors(json: &str) -> Result<Vec<ClassDescriptor>, DescriptorError> {
    let value: Value = serde_json::from_str(json)?;

    let descriptors = match value {
        Value::Array(items) => items.into_iter().map(ClassDescriptor::from).collect(),
        other => vec![ClassDescriptor::from(other)],
    };

    Ok(descriptors)
}

/// 解析 JSON 参数列表并直接生成类名字符串
pub fn build_json(json: &str) -> Result<String, DescriptorError> {
    let descriptors = parse_descriptors(json)?;
    Ok(build(&descriptors))
}
