use js_sys::{Array, Object};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use classnames_core::{build, ClassDescriptor};

// ── 类型转换 ──────────────────────────────────────────────────

/// 将单个 JS 值归类为描述符
///
/// 按 `typeof` 逐层判断，数组和对象逐个元素转换：
/// - string / number → 文本（0、NaN、空字符串为假值）
/// - 数组 → 序列
/// - 其他对象 → 映射，值只做真值判断（函数等同样为真）
/// - 布尔、null、undefined、函数、Symbol、BigInt → 不产生类名
fn to_descriptor(value: &JsValue) -> ClassDescriptor {
    if let Some(text) = value.as_string() {
        return ClassDescriptor::text(text);
    }

    if let Some(number) = value.as_f64() {
        return ClassDescriptor::number(number);
    }

    if Array::is_array(value) {
        let items: Array = value.clone().unchecked_into();
        return ClassDescriptor::Sequence(items.iter().map(|item| to_descriptor(&item)).collect());
    }

    if value.is_object() {
        let object: &Object = value.unchecked_ref();
        let entries = Object::entries(object);
        return ClassDescriptor::mapping(entries.iter().filter_map(|entry| {
            let pair: Array = entry.unchecked_into();
            let name = pair.get(0).as_string()?;
            Some((name, pair.get(1).is_truthy()))
        }));
    }

    ClassDescriptor::Empty
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 生成 `class` 属性字符串
///
/// @param args - 参数数组，元素可以是字符串、数字、布尔值、null/undefined、对象或嵌套数组
/// @returns 以单个空格分隔的类名
#[wasm_bindgen(js_name = "classnames")]
pub fn classnames(args: Vec<JsValue>) -> String {
    let descriptors: Vec<ClassDescriptor> = args.iter().map(to_descriptor).collect();
    build(&descriptors)
}
