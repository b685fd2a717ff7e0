use classnames_core::{build, build_json, ClassDescriptor, ClassList};
use pretty_assertions::assert_eq;

#[test]
fn test_end_to_end_only_falsy() {
    let args = [
        "".into(),
        0.into(),
        0.0.into(),
        false.into(),
        None::<&str>.into(),
        ClassDescriptor::Empty,
    ];
    assert_eq!(build(&args), "");
}

#[test]
fn test_end_to_end_mixed_arguments() {
    let args = [
        "btn".into(),
        ClassDescriptor::mapping([("btn-primary", true), ("btn-large", false)]),
        vec![ClassDescriptor::from("icon"), vec!["icon-left", ""].into()].into(),
        2.into(),
        None::<String>.into(),
    ];

    assert_eq!(build(&args), "btn btn-primary icon icon-left 2");
}

#[test]
fn test_end_to_end_json_arguments() {
    // 与 JS 调用 classnames("a", null, "b", false, 0, "") 等价
    assert_eq!(build_json(r#"["a", null, "b", false, 0, ""]"#).unwrap(), "a b");

    // 任意深度的嵌套
    assert_eq!(build_json(r#"[["a", ["b", "c"]]]"#).unwrap(), "a b c");

    // 对象只输出值为真的键
    assert_eq!(
        build_json(r#"[{"a": true, "b": false, "c": 1}]"#).unwrap(),
        "a c"
    );

    // 空对象和空数组不产生任何内容
    assert_eq!(build_json(r#"["a", {}, [], "b"]"#).unwrap(), "a b");
}

#[test]
fn test_end_to_end_whitespace_collapse() {
    assert_eq!(build(&["a   b".into()]), "a b");
    assert_eq!(build(&["  a   b  ".into(), "\tc\n".into()]), "a b c");
}

#[test]
fn test_end_to_end_idempotent() {
    let inputs: Vec<Vec<ClassDescriptor>> = vec![
        vec!["a".into(), "b".into()],
        vec!["  x   y ".into(), ClassDescriptor::mapping([("z", true)])],
        vec![vec![vec!["deep"]].into(), 7.into()],
        vec![],
    ];

    for args in inputs {
        let once = build(&args);
        let twice = build(&[once.clone().into()]);
        assert_eq!(twice, once, "build is not idempotent for {:?}", args);
    }
}

#[test]
fn test_end_to_end_class_list() {
    let is_active = true;
    let is_disabled = false;

    let class = ClassList::new()
        .with("nav-item")
        .with_if("active", is_active)
        .with_if("disabled", is_disabled)
        .with_all(["px-2", "py-1"])
        .to_string();

    assert_eq!(class, "nav-item active px-2 py-1");
}
