use pretty_assertions::assert_eq;
use tailmerge_core::{
    default_config, extend_from_json, merge_classes, tw_merge, ClassValue, TailwindMerge,
};

#[test]
fn test_idempotence() {
    let inputs = [
        "px-2 py-1 p-4",
        "text-red-500 hover:text-red-500 text-blue-500",
        "my-custom-class p-2 p-4",
        "w-full w-1/2 hover:w-full",
        "",
    ];

    for input in inputs {
        let once = merge_classes(input);
        let twice = merge_classes(&once);
        assert_eq!(once, twice, "merge must be idempotent for {input:?}");
    }
}

#[test]
fn test_last_one_wins() {
    assert_eq!(merge_classes("p-2 p-4"), "p-4");
    assert_eq!(merge_classes("p-4 p-2"), "p-2");
    assert_eq!(merge_classes("block flex"), "flex");
    assert_eq!(merge_classes("flex block"), "block");
}

#[test]
fn test_non_conflicting_classes_survive() {
    assert_eq!(merge_classes("p-4 m-2"), "p-4 m-2");
    assert_eq!(merge_classes("flex items-center gap-2"), "flex items-center gap-2");
}

#[test]
fn test_modifier_isolation() {
    assert_eq!(merge_classes("hover:p-2 p-4"), "hover:p-2 p-4");
    assert_eq!(merge_classes("hover:p-2 hover:p-4"), "hover:p-4");
    assert_eq!(merge_classes("hover:focus:p-2 focus:hover:p-4"), "focus:hover:p-4");
}

#[test]
fn test_pass_through_preservation() {
    assert_eq!(
        merge_classes("my-custom-class my-custom-class"),
        "my-custom-class my-custom-class"
    );
    assert_eq!(merge_classes("foo p-2 bar p-4"), "foo bar p-4");
}

#[test]
fn test_falsy_filtering() {
    let with_falsy = tw_merge!("a", None::<&str>, "", "b");
    assert_eq!(with_falsy, tw_merge!("a", "b"));
}

#[test]
fn test_important_marker_distinction() {
    assert_eq!(merge_classes("p-2 !p-2"), "p-2 !p-2");
    assert_eq!(merge_classes("!p-2 !p-4"), "!p-4");
    assert_eq!(merge_classes("p-2! p-4!"), "p-4!");
}

#[test]
fn test_broader_padding_supersedes_axes() {
    assert_eq!(merge_classes("px-2 py-1 p-4"), "p-4");
}

#[test]
fn test_conflict_table_is_directional() {
    // p 压制 px/py，反向不成立
    assert_eq!(merge_classes("p-4 px-2"), "p-4 px-2");
    assert_eq!(merge_classes("p-4 px-2 pl-1"), "p-4 px-2 pl-1");
    // 但 px 压制 pl/pr
    assert_eq!(merge_classes("pl-1 pr-3 px-2"), "px-2");
}

#[test]
fn test_text_color_scenario() {
    assert_eq!(
        merge_classes("text-red-500 hover:text-red-500 text-blue-500"),
        "hover:text-red-500 text-blue-500"
    );
}

#[test]
fn test_semantic_text_overload() {
    // text- 前缀同时承载字号、对齐和颜色，互不冲突
    assert_eq!(
        merge_classes("text-lg text-center text-red-500"),
        "text-lg text-center text-red-500"
    );
    assert_eq!(merge_classes("text-lg text-sm"), "text-sm");
    assert_eq!(merge_classes("text-red-500 text-blue-500"), "text-blue-500");
}

#[test]
fn test_arbitrary_values() {
    assert_eq!(merge_classes("w-[13px] w-4"), "w-4");
    assert_eq!(merge_classes("w-4 w-[13px]"), "w-[13px]");
    assert_eq!(merge_classes("bg-[#ff0000] bg-blue-500"), "bg-blue-500");
}

#[test]
fn test_arbitrary_property_declarations() {
    assert_eq!(
        merge_classes("[mask-type:luminance] [mask-type:alpha]"),
        "[mask-type:alpha]"
    );
    assert_eq!(
        merge_classes("[mask-type:alpha] [paint-order:stroke]"),
        "[mask-type:alpha] [paint-order:stroke]"
    );
}

#[test]
fn test_postfix_modifier() {
    assert_eq!(merge_classes("text-lg/7 text-xl/8"), "text-xl/8");
    assert_eq!(merge_classes("leading-6 text-lg/7"), "text-lg/7");
    assert_eq!(merge_classes("leading-6 text-lg"), "leading-6 text-lg");
}

#[test]
fn test_size_supersedes_width_and_height() {
    assert_eq!(merge_classes("w-4 h-4 size-8"), "size-8");
    assert_eq!(merge_classes("size-8 w-4"), "size-8 w-4");
}

#[test]
fn test_rounded_corners() {
    assert_eq!(merge_classes("rounded-tl-sm rounded-t-lg rounded-lg"), "rounded-lg");
    assert_eq!(merge_classes("rounded-lg rounded-t-none"), "rounded-lg rounded-t-none");
}

#[test]
fn test_cache_transparency() {
    let engine = TailwindMerge::with_default_config();
    let input = "px-2 py-1 p-4 hover:p-2";

    let cold = engine.merge_class_list(input);
    let warm = engine.merge_class_list(input);
    assert_eq!(cold, warm);

    // 另一个全新引擎（全新缓存）给出同样的结果
    let fresh = TailwindMerge::with_default_config();
    assert_eq!(fresh.merge_class_list(input), cold);
}

#[test]
fn test_variadic_entry_point() {
    let highlighted = true;
    let result = tw_merge!(
        "rounded px-2",
        Some("px-4"),
        None::<&str>,
        [("ring-2", highlighted), ("opacity-50", false)].as_slice(),
    );
    assert_eq!(result, "rounded px-4 ring-2");
}

#[test]
fn test_nested_list_values() {
    let values = [ClassValue::from(vec![
        ClassValue::from("p-2"),
        ClassValue::from(vec![ClassValue::from("p-4"), ClassValue::Null]),
    ])];
    assert_eq!(tailmerge_core::merge(&values), "p-4");
}

#[test]
fn test_empty_input_returns_empty_string() {
    assert_eq!(merge_classes(""), "");
    assert_eq!(tw_merge!(), "");
    assert_eq!(tw_merge!("", None::<&str>), "");
}

#[test]
fn test_extended_config_end_to_end() {
    let mut config = default_config();
    extend_from_json(
        &mut config,
        r#"{
            "classGroups": {
                "card": [{ "card": ["", "sm", "lg"] }]
            },
            "conflictingClassGroups": {
                "card": ["shadow"]
            }
        }"#,
    )
    .expect("valid extension JSON");

    let engine = TailwindMerge::new(config).expect("extended config compiles");

    assert_eq!(engine.merge_class_list("card-sm card-lg"), "card-lg");
    // 自定义 group 压制它声明冲突的内置 group
    assert_eq!(engine.merge_class_list("shadow-md card"), "card");
    assert_eq!(engine.merge_class_list("card shadow-md"), "card shadow-md");
}

#[test]
fn test_unbalanced_input_never_panics() {
    // 任何输入都要产出某个字符串，而不是报错
    for garbage in ["w-[13px", "]:p-4", "::", "!", "/", "a//b", "[", "p-4]"] {
        let _ = merge_classes(garbage);
    }
}
