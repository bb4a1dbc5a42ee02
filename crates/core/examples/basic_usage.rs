/// 基本使用示例：展示 tailmerge 的类名合并
///
/// 运行示例：
/// ```bash
/// cargo run --example basic_usage -p tailmerge-core
/// ```

use tailmerge_core::{
    default_config, extend_from_json, merge_classes, tw_merge, TailwindMerge,
};

fn main() {
    println!("=== tailmerge 基本使用示例 ===\n");

    // 1. 示例 1：后写的冲突类胜出
    println!("--- 示例 1: 冲突解决 ---");
    let merged = merge_classes("px-2 py-1 p-4");
    println!("输入类名: px-2 py-1 p-4");
    println!("合并结果: {}", merged);

    // 2. 示例 2：修饰符彼此隔离
    println!("\n--- 示例 2: 修饰符隔离 ---");
    let merged = merge_classes("text-red-500 hover:text-red-500 text-blue-500");
    println!("输入类名: text-red-500 hover:text-red-500 text-blue-500");
    println!("合并结果: {}", merged);

    // 3. 示例 3：变参宏与条件拼接
    println!("\n--- 示例 3: 条件拼接 ---");
    let highlighted = true;
    let merged = tw_merge!(
        "rounded px-2",
        Some("px-4"),
        None::<&str>,
        [("ring-2", highlighted), ("opacity-50", false)].as_slice(),
    );
    println!("highlighted = {}", highlighted);
    println!("合并结果: {}", merged);

    // 4. 示例 4：未知类原样透传
    println!("\n--- 示例 4: 未知类透传 ---");
    let merged = merge_classes("my-button p-2 p-4");
    println!("输入类名: my-button p-2 p-4");
    println!("合并结果: {}", merged);

    // 5. 示例 5：用 JSON 扩展配置
    println!("\n--- 示例 5: 扩展配置 ---");
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
    .expect("Failed to parse config extension");

    let engine = TailwindMerge::new(config).expect("Failed to compile config");
    let merged = engine.merge_class_list("shadow-md card-sm card-lg");
    println!("输入类名: shadow-md card-sm card-lg");
    println!("合并结果: {}", merged);

    println!("\n=== 示例完成 ===");
}
