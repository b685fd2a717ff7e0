/// 判断是否为 JavaScript 正则 `\s` 匹配的空白字符
///
/// `\s` 与 Unicode White_Space（`char::is_whitespace`）只差两个字符：
/// 包含 U+FEFF（BOM），不包含 U+0085（NEL）。
pub fn is_js_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}

/// 规范化空白字符
///
/// 功能：
/// 1. 按 JavaScript `\s` 空白字符拆分
/// 2. 去除空字符串
/// 3. 用单个空格连接，首尾不留空白
///
/// 与排序去重不同，这里保留原有顺序和重复项。
pub fn normalize_whitespace(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for token in input.split(is_js_whitespace) {
        if token.is_empty() {
            continue;
        }
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(token);
    }

    result
}
