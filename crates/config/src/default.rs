use crate::types::{lit, literals, nested, theme, validator, ClassGroupDef, MergeConfig};
use crate::validators::{
    is_arbitrary_image, is_arbitrary_length, is_arbitrary_number, is_arbitrary_position,
    is_arbitrary_shadow, is_arbitrary_size, is_arbitrary_value, is_arbitrary_variable,
    is_color_name, is_fraction, is_integer, is_number, is_percent, is_tshirt_size,
};
use indexmap::IndexMap;

/// 默认缓存容量
pub const DEFAULT_CACHE_SIZE: usize = 500;

/// 构建默认的 Tailwind 配置
///
/// 每次调用都返回新实例；编译后的引擎才是进程级共享的部分。
/// 表按官方插件分区组织：Layout、Flexbox & Grid、Spacing、Sizing、
/// Typography、Backgrounds、Borders、Effects、Filters、Tables、
/// Transitions、Transforms、Interactivity、SVG。
pub fn default_config() -> MergeConfig {
    MergeConfig {
        cache_size: DEFAULT_CACHE_SIZE,
        prefix: None,
        theme: default_theme(),
        class_groups: default_class_groups(),
        conflicting_class_groups: default_conflicts(),
        conflicting_class_group_modifiers: default_modifier_conflicts(),
        order_sensitive_modifiers: ORDER_SENSITIVE_MODIFIERS
            .iter()
            .map(|m| m.to_string())
            .collect(),
    }
}

/// 顺序敏感的修饰符：伪元素和位置选择器，交换顺序会改变 CSS 语义
const ORDER_SENSITIVE_MODIFIERS: &[&str] = &[
    "before",
    "after",
    "placeholder",
    "file",
    "marker",
    "selection",
    "first-line",
    "first-letter",
    "backdrop",
    "*",
    "**",
];

// ---------------------------------------------------------------------------
// 主题刻度 (theme scales)
// ---------------------------------------------------------------------------

fn default_theme() -> IndexMap<String, Vec<ClassGroupDef>> {
    let mut theme = IndexMap::new();

    // 颜色刻度兜底接受任何非任意、不含 `/` 的 token；带透明度斜杠的
    // 形式（red-500/50）在剥掉后缀修饰符之后的重试路径里归类
    theme.insert("color".to_string(), vec![validator(is_color_name)]);
    theme.insert(
        "spacing".to_string(),
        vec![validator(is_number), lit("px")],
    );
    theme.insert(
        "radius".to_string(),
        vec![validator(is_tshirt_size), lit("none"), lit("full")],
    );
    theme.insert(
        "shadow".to_string(),
        vec![validator(is_tshirt_size), lit("none"), lit("inner")],
    );
    theme.insert(
        "blur".to_string(),
        vec![validator(is_tshirt_size), lit("none")],
    );
    theme.insert(
        "font".to_string(),
        literals(&["sans", "serif", "mono"]),
    );
    theme.insert(
        "text".to_string(),
        vec![validator(is_tshirt_size), lit("base")],
    );
    theme.insert(
        "font-weight".to_string(),
        literals(&[
            "thin",
            "extralight",
            "light",
            "normal",
            "medium",
            "semibold",
            "bold",
            "extrabold",
            "black",
        ]),
    );
    theme.insert(
        "leading".to_string(),
        vec![
            lit("none"),
            lit("tight"),
            lit("snug"),
            lit("normal"),
            lit("relaxed"),
            lit("loose"),
            validator(is_number),
        ],
    );
    theme.insert(
        "tracking".to_string(),
        literals(&["tighter", "tight", "normal", "wide", "wider", "widest"]),
    );
    theme.insert(
        "ease".to_string(),
        literals(&["linear", "in", "out", "in-out"]),
    );
    theme.insert(
        "animate".to_string(),
        literals(&["none", "spin", "ping", "pulse", "bounce"]),
    );

    theme
}

// ---------------------------------------------------------------------------
// 复合刻度 (shared scales)
// ---------------------------------------------------------------------------

/// 无歧义的间距刻度：数字、px、任意值
fn scale_spacing() -> Vec<ClassGroupDef> {
    vec![
        theme("spacing"),
        validator(is_arbitrary_variable),
        validator(is_arbitrary_value),
    ]
}

/// 间距 + auto（margin 系列）
fn scale_margin() -> Vec<ClassGroupDef> {
    let mut scale = vec![lit("auto")];
    scale.extend(scale_spacing());
    scale
}

/// 定位偏移刻度（inset/top/...）：分数、auto、full + 间距
fn scale_inset() -> Vec<ClassGroupDef> {
    let mut scale = vec![validator(is_fraction), lit("auto"), lit("full")];
    scale.extend(scale_spacing());
    scale
}

/// 尺寸刻度（w/h/size）
fn scale_sizing() -> Vec<ClassGroupDef> {
    let mut scale = vec![
        validator(is_fraction),
        lit("auto"),
        lit("full"),
        lit("screen"),
        lit("min"),
        lit("max"),
        lit("fit"),
    ];
    scale.extend(scale_spacing());
    scale
}

/// 颜色刻度
fn scale_color() -> Vec<ClassGroupDef> {
    vec![
        theme("color"),
        validator(is_arbitrary_variable),
        validator(is_arbitrary_value),
    ]
}

/// 边框宽度刻度（空字面量表示默认宽度，如 `border`）
fn scale_border_width() -> Vec<ClassGroupDef> {
    vec![
        lit(""),
        validator(is_number),
        validator(is_arbitrary_length),
        validator(is_arbitrary_variable),
    ]
}

/// 圆角刻度
fn scale_radius() -> Vec<ClassGroupDef> {
    vec![
        lit(""),
        theme("radius"),
        validator(is_arbitrary_variable),
        validator(is_arbitrary_value),
    ]
}

/// 数字或任意值（opacity/brightness/...）
fn scale_number() -> Vec<ClassGroupDef> {
    vec![
        validator(is_number),
        validator(is_arbitrary_variable),
        validator(is_arbitrary_value),
    ]
}

/// 背景/对象位置关键字
fn scale_position() -> Vec<ClassGroupDef> {
    literals(&[
        "bottom",
        "center",
        "left",
        "left-bottom",
        "left-top",
        "right",
        "right-bottom",
        "right-top",
        "top",
    ])
}

/// 混合模式关键字
fn scale_blend_mode() -> Vec<ClassGroupDef> {
    literals(&[
        "normal",
        "multiply",
        "screen",
        "overlay",
        "darken",
        "lighten",
        "color-dodge",
        "color-burn",
        "hard-light",
        "soft-light",
        "difference",
        "exclusion",
        "hue",
        "saturation",
        "color",
        "luminosity",
    ])
}

/// 边框线型关键字
fn scale_line_style() -> Vec<ClassGroupDef> {
    literals(&["solid", "dashed", "dotted", "double", "none"])
}

// ---------------------------------------------------------------------------
// class groups
// ---------------------------------------------------------------------------

fn default_class_groups() -> IndexMap<String, Vec<ClassGroupDef>> {
    let mut groups: IndexMap<String, Vec<ClassGroupDef>> = IndexMap::new();
    let mut add = |id: &str, defs: Vec<ClassGroupDef>| {
        groups.insert(id.to_string(), defs);
    };
    // 单键嵌套组的简写
    fn one(key: &str, defs: Vec<ClassGroupDef>) -> Vec<ClassGroupDef> {
        vec![nested(key, defs)]
    }

    // Layout (布局)
    add(
        "aspect",
        one(
            "aspect",
            vec![
                lit("auto"),
                lit("square"),
                lit("video"),
                validator(is_fraction),
                validator(is_arbitrary_value),
            ],
        ),
    );
    add("container", vec![lit("container")]);
    add(
        "columns",
        one(
            "columns",
            vec![
                validator(is_number),
                validator(is_tshirt_size),
                validator(is_arbitrary_value),
            ],
        ),
    );
    add(
        "break-after",
        one(
            "break-after",
            literals(&[
                "auto",
                "avoid",
                "all",
                "avoid-page",
                "page",
                "left",
                "right",
                "column",
            ]),
        ),
    );
    add(
        "break-before",
        one(
            "break-before",
            literals(&[
                "auto",
                "avoid",
                "all",
                "avoid-page",
                "page",
                "left",
                "right",
                "column",
            ]),
        ),
    );
    add(
        "break-inside",
        one(
            "break-inside",
            literals(&["auto", "avoid", "avoid-page", "avoid-column"]),
        ),
    );
    add(
        "box-decoration",
        one("box-decoration", literals(&["slice", "clone"])),
    );
    add("box", one("box", literals(&["border", "content"])));
    add(
        "display",
        literals(&[
            "block",
            "inline-block",
            "inline",
            "flex",
            "inline-flex",
            "table",
            "inline-table",
            "table-caption",
            "table-cell",
            "table-column",
            "table-column-group",
            "table-footer-group",
            "table-header-group",
            "table-row-group",
            "table-row",
            "flow-root",
            "grid",
            "inline-grid",
            "contents",
            "list-item",
            "hidden",
        ]),
    );
    add("sr", literals(&["sr-only", "not-sr-only"]));
    add(
        "float",
        one("float", literals(&["right", "left", "none", "start", "end"])),
    );
    add(
        "clear",
        one(
            "clear",
            literals(&["left", "right", "both", "none", "start", "end"]),
        ),
    );
    add("isolation", literals(&["isolate", "isolation-auto"]));
    add(
        "object-fit",
        one(
            "object",
            literals(&["contain", "cover", "fill", "none", "scale-down"]),
        ),
    );
    add(
        "object-position",
        one("object", {
            let mut defs = scale_position();
            defs.push(validator(is_arbitrary_value));
            defs
        }),
    );
    add(
        "overflow",
        one(
            "overflow",
            literals(&["auto", "hidden", "clip", "visible", "scroll"]),
        ),
    );
    add(
        "overflow-x",
        one(
            "overflow-x",
            literals(&["auto", "hidden", "clip", "visible", "scroll"]),
        ),
    );
    add(
        "overflow-y",
        one(
            "overflow-y",
            literals(&["auto", "hidden", "clip", "visible", "scroll"]),
        ),
    );
    add(
        "overscroll",
        one("overscroll", literals(&["auto", "contain", "none"])),
    );
    add(
        "overscroll-x",
        one("overscroll-x", literals(&["auto", "contain", "none"])),
    );
    add(
        "overscroll-y",
        one("overscroll-y", literals(&["auto", "contain", "none"])),
    );
    add(
        "position",
        literals(&["static", "fixed", "absolute", "relative", "sticky"]),
    );
    add("inset", one("inset", scale_inset()));
    add("inset-x", one("inset-x", scale_inset()));
    add("inset-y", one("inset-y", scale_inset()));
    add("start", one("start", scale_inset()));
    add("end", one("end", scale_inset()));
    add("top", one("top", scale_inset()));
    add("right", one("right", scale_inset()));
    add("bottom", one("bottom", scale_inset()));
    add("left", one("left", scale_inset()));
    add("visibility", literals(&["visible", "invisible", "collapse"]));
    add(
        "z",
        one(
            "z",
            vec![validator(is_integer), lit("auto"), validator(is_arbitrary_value)],
        ),
    );

    // Flexbox & Grid
    add("basis", one("basis", scale_sizing()));
    add(
        "flex-direction",
        one(
            "flex",
            literals(&["row", "row-reverse", "col", "col-reverse"]),
        ),
    );
    add(
        "flex-wrap",
        one("flex", literals(&["wrap", "wrap-reverse", "nowrap"])),
    );
    add(
        "flex",
        one(
            "flex",
            vec![
                validator(is_number),
                validator(is_fraction),
                lit("auto"),
                lit("initial"),
                lit("none"),
                validator(is_arbitrary_value),
            ],
        ),
    );
    add(
        "grow",
        one("grow", vec![lit(""), validator(is_number), validator(is_arbitrary_value)]),
    );
    add(
        "shrink",
        one("shrink", vec![lit(""), validator(is_number), validator(is_arbitrary_value)]),
    );
    add(
        "order",
        one(
            "order",
            vec![
                validator(is_integer),
                lit("first"),
                lit("last"),
                lit("none"),
                validator(is_arbitrary_value),
            ],
        ),
    );
    add(
        "grid-cols",
        one(
            "grid-cols",
            vec![
                validator(is_integer),
                lit("none"),
                lit("subgrid"),
                validator(is_arbitrary_value),
            ],
        ),
    );
    add(
        "col-start-end",
        one(
            "col",
            vec![
                lit("auto"),
                nested(
                    "span",
                    vec![lit("full"), validator(is_integer), validator(is_arbitrary_value)],
                ),
                validator(is_arbitrary_value),
            ],
        ),
    );
    add(
        "col-start",
        one(
            "col-start",
            vec![validator(is_integer), lit("auto"), validator(is_arbitrary_value)],
        ),
    );
    add(
        "col-end",
        one(
            "col-end",
            vec![validator(is_integer), lit("auto"), validator(is_arbitrary_value)],
        ),
    );
    add(
        "grid-rows",
        one(
            "grid-rows",
            vec![
                validator(is_integer),
                lit("none"),
                lit("subgrid"),
                validator(is_arbitrary_value),
            ],
        ),
    );
    add(
        "row-start-end",
        one(
            "row",
            vec![
                lit("auto"),
                nested(
                    "span",
                    vec![lit("full"), validator(is_integer), validator(is_arbitrary_value)],
                ),
                validator(is_arbitrary_value),
            ],
        ),
    );
    add(
        "row-start",
        one(
            "row-start",
            vec![validator(is_integer), lit("auto"), validator(is_arbitrary_value)],
        ),
    );
    add(
        "row-end",
        one(
            "row-end",
            vec![validator(is_integer), lit("auto"), validator(is_arbitrary_value)],
        ),
    );
    add(
        "grid-flow",
        one(
            "grid-flow",
            literals(&["row", "col", "dense", "row-dense", "col-dense"]),
        ),
    );
    add(
        "auto-cols",
        one(
            "auto-cols",
            vec![
                lit("auto"),
                lit("min"),
                lit("max"),
                lit("fr"),
                validator(is_arbitrary_value),
            ],
        ),
    );
    add(
        "auto-rows",
        one(
            "auto-rows",
            vec![
                lit("auto"),
                lit("min"),
                lit("max"),
                lit("fr"),
                validator(is_arbitrary_value),
            ],
        ),
    );
    add("gap", one("gap", scale_spacing()));
    add("gap-x", one("gap-x", scale_spacing()));
    add("gap-y", one("gap-y", scale_spacing()));
    add(
        "justify-content",
        one(
            "justify",
            literals(&[
                "start", "end", "center", "between", "around", "evenly", "stretch", "normal",
            ]),
        ),
    );
    add(
        "justify-items",
        one(
            "justify-items",
            literals(&["start", "end", "center", "stretch", "normal"]),
        ),
    );
    add(
        "justify-self",
        one(
            "justify-self",
            literals(&["auto", "start", "end", "center", "stretch"]),
        ),
    );
    add(
        "align-content",
        one(
            "content",
            literals(&[
                "normal", "start", "end", "center", "between", "around", "evenly", "stretch",
                "baseline",
            ]),
        ),
    );
    add(
        "align-items",
        one(
            "items",
            literals(&["start", "end", "center", "baseline", "stretch"]),
        ),
    );
    add(
        "align-self",
        one(
            "self",
            literals(&["auto", "start", "end", "center", "stretch", "baseline"]),
        ),
    );
    add(
        "place-content",
        one(
            "place-content",
            literals(&[
                "start", "end", "center", "between", "around", "evenly", "stretch", "baseline",
            ]),
        ),
    );
    add(
        "place-items",
        one(
            "place-items",
            literals(&["start", "end", "center", "baseline", "stretch"]),
        ),
    );
    add(
        "place-self",
        one(
            "place-self",
            literals(&["auto", "start", "end", "center", "stretch"]),
        ),
    );

    // Spacing (间距)
    add("p", one("p", scale_spacing()));
    add("px", one("px", scale_spacing()));
    add("py", one("py", scale_spacing()));
    add("ps", one("ps", scale_spacing()));
    add("pe", one("pe", scale_spacing()));
    add("pt", one("pt", scale_spacing()));
    add("pr", one("pr", scale_spacing()));
    add("pb", one("pb", scale_spacing()));
    add("pl", one("pl", scale_spacing()));
    add("m", one("m", scale_margin()));
    add("mx", one("mx", scale_margin()));
    add("my", one("my", scale_margin()));
    add("ms", one("ms", scale_margin()));
    add("me", one("me", scale_margin()));
    add("mt", one("mt", scale_margin()));
    add("mr", one("mr", scale_margin()));
    add("mb", one("mb", scale_margin()));
    add("ml", one("ml", scale_margin()));
    add("space-x", one("space-x", scale_spacing()));
    add("space-x-reverse", vec![lit("space-x-reverse")]);
    add("space-y", one("space-y", scale_spacing()));
    add("space-y-reverse", vec![lit("space-y-reverse")]);

    // Sizing (尺寸)
    add("size", one("size", scale_sizing()));
    add("w", one("w", scale_sizing()));
    add(
        "min-w",
        one("min-w", {
            let mut defs = scale_sizing();
            defs.push(lit("none"));
            defs
        }),
    );
    add(
        "max-w",
        one("max-w", {
            let mut defs = scale_sizing();
            defs.push(lit("none"));
            defs.push(lit("prose"));
            defs.push(validator(is_tshirt_size));
            defs
        }),
    );
    add("h", one("h", scale_sizing()));
    add("min-h", one("min-h", scale_sizing()));
    add("max-h", one("max-h", scale_sizing()));

    // Typography (排版)
    add(
        "font-size",
        one(
            "text",
            vec![
                theme("text"),
                validator(is_arbitrary_length),
                validator(is_arbitrary_variable),
            ],
        ),
    );
    add(
        "font-smoothing",
        literals(&["antialiased", "subpixel-antialiased"]),
    );
    add("font-style", literals(&["italic", "not-italic"]));
    add(
        "font-weight",
        one(
            "font",
            vec![theme("font-weight"), validator(is_arbitrary_number)],
        ),
    );
    add(
        "font-family",
        one("font", vec![theme("font"), validator(is_arbitrary_value)]),
    );
    add(
        "tracking",
        one(
            "tracking",
            vec![theme("tracking"), validator(is_arbitrary_value)],
        ),
    );
    add(
        "line-clamp",
        one(
            "line-clamp",
            vec![validator(is_number), lit("none"), validator(is_arbitrary_value)],
        ),
    );
    add(
        "leading",
        one(
            "leading",
            vec![
                theme("leading"),
                validator(is_arbitrary_variable),
                validator(is_arbitrary_value),
            ],
        ),
    );
    add(
        "list-style-position",
        one("list", literals(&["inside", "outside"])),
    );
    add(
        "list-style-type",
        one(
            "list",
            vec![
                lit("none"),
                lit("disc"),
                lit("decimal"),
                validator(is_arbitrary_value),
            ],
        ),
    );
    add(
        "text-alignment",
        one(
            "text",
            literals(&["left", "center", "right", "justify", "start", "end"]),
        ),
    );
    add("text-color", one("text", scale_color()));
    add(
        "text-decoration",
        literals(&["underline", "overline", "line-through", "no-underline"]),
    );
    add(
        "text-decoration-style",
        one("decoration", {
            let mut defs = scale_line_style();
            defs.push(lit("wavy"));
            defs
        }),
    );
    add(
        "text-decoration-thickness",
        one(
            "decoration",
            vec![
                validator(is_number),
                lit("from-font"),
                lit("auto"),
                validator(is_arbitrary_length),
            ],
        ),
    );
    add("text-decoration-color", one("decoration", scale_color()));
    add(
        "underline-offset",
        one(
            "underline-offset",
            vec![validator(is_number), lit("auto"), validator(is_arbitrary_value)],
        ),
    );
    add(
        "text-transform",
        literals(&["uppercase", "lowercase", "capitalize", "normal-case"]),
    );
    add(
        "text-overflow",
        literals(&["truncate", "text-ellipsis", "text-clip"]),
    );
    add(
        "text-wrap",
        one("text", literals(&["wrap", "nowrap", "balance", "pretty"])),
    );
    add("indent", one("indent", scale_spacing()));
    add(
        "vertical-align",
        one(
            "align",
            vec![
                lit("baseline"),
                lit("top"),
                lit("middle"),
                lit("bottom"),
                lit("text-top"),
                lit("text-bottom"),
                lit("sub"),
                lit("super"),
                validator(is_arbitrary_value),
            ],
        ),
    );
    add(
        "whitespace",
        one(
            "whitespace",
            literals(&["normal", "nowrap", "pre", "pre-line", "pre-wrap", "break-spaces"]),
        ),
    );
    add("break", one("break", literals(&["normal", "words", "all", "keep"])));
    add("hyphens", one("hyphens", literals(&["none", "manual", "auto"])));
    add(
        "content",
        one("content", vec![lit("none"), validator(is_arbitrary_value)]),
    );

    // Backgrounds (背景)
    add(
        "bg-attachment",
        one("bg", literals(&["fixed", "local", "scroll"])),
    );
    add(
        "bg-clip",
        one("bg-clip", literals(&["border", "padding", "content", "text"])),
    );
    add(
        "bg-origin",
        one("bg-origin", literals(&["border", "padding", "content"])),
    );
    add(
        "bg-position",
        one("bg", {
            let mut defs = scale_position();
            defs.push(validator(is_arbitrary_position));
            defs
        }),
    );
    add(
        "bg-repeat",
        one(
            "bg",
            vec![
                lit("no-repeat"),
                nested("repeat", literals(&["", "x", "y", "round", "space"])),
            ],
        ),
    );
    add(
        "bg-size",
        one(
            "bg",
            vec![
                lit("auto"),
                lit("cover"),
                lit("contain"),
                validator(is_arbitrary_size),
            ],
        ),
    );
    add(
        "bg-image",
        one(
            "bg",
            vec![
                lit("none"),
                nested(
                    "gradient-to",
                    literals(&["t", "tr", "r", "br", "b", "bl", "l", "tl"]),
                ),
                validator(is_arbitrary_image),
            ],
        ),
    );
    add("bg-color", one("bg", scale_color()));
    add(
        "gradient-from-pos",
        one("from", vec![validator(is_percent), validator(is_arbitrary_value)]),
    );
    add(
        "gradient-via-pos",
        one("via", vec![validator(is_percent), validator(is_arbitrary_value)]),
    );
    add(
        "gradient-to-pos",
        one("to", vec![validator(is_percent), validator(is_arbitrary_value)]),
    );
    add("gradient-from", one("from", scale_color()));
    add("gradient-via", one("via", scale_color()));
    add("gradient-to", one("to", scale_color()));

    // Borders (边框)
    add("rounded", one("rounded", scale_radius()));
    add("rounded-t", one("rounded-t", scale_radius()));
    add("rounded-r", one("rounded-r", scale_radius()));
    add("rounded-b", one("rounded-b", scale_radius()));
    add("rounded-l", one("rounded-l", scale_radius()));
    add("rounded-tl", one("rounded-tl", scale_radius()));
    add("rounded-tr", one("rounded-tr", scale_radius()));
    add("rounded-br", one("rounded-br", scale_radius()));
    add("rounded-bl", one("rounded-bl", scale_radius()));
    add("border-w", one("border", scale_border_width()));
    add("border-w-x", one("border-x", scale_border_width()));
    add("border-w-y", one("border-y", scale_border_width()));
    add("border-w-t", one("border-t", scale_border_width()));
    add("border-w-r", one("border-r", scale_border_width()));
    add("border-w-b", one("border-b", scale_border_width()));
    add("border-w-l", one("border-l", scale_border_width()));
    add(
        "border-style",
        one("border", {
            let mut defs = scale_line_style();
            defs.push(lit("hidden"));
            defs
        }),
    );
    add("divide-x", one("divide-x", scale_border_width()));
    add("divide-x-reverse", vec![lit("divide-x-reverse")]);
    add("divide-y", one("divide-y", scale_border_width()));
    add("divide-y-reverse", vec![lit("divide-y-reverse")]);
    add("divide-style", one("divide", scale_line_style()));
    add("border-color", one("border", scale_color()));
    add("border-color-x", one("border-x", scale_color()));
    add("border-color-y", one("border-y", scale_color()));
    add("border-color-t", one("border-t", scale_color()));
    add("border-color-r", one("border-r", scale_color()));
    add("border-color-b", one("border-b", scale_color()));
    add("border-color-l", one("border-l", scale_color()));
    add("divide-color", one("divide", scale_color()));
    add(
        "outline-style",
        one("outline", {
            let mut defs = vec![lit("")];
            defs.extend(scale_line_style());
            defs.push(lit("hidden"));
            defs
        }),
    );
    add(
        "outline-offset",
        one(
            "outline-offset",
            vec![validator(is_number), validator(is_arbitrary_value)],
        ),
    );
    add(
        "outline-w",
        one(
            "outline",
            vec![validator(is_number), validator(is_arbitrary_length)],
        ),
    );
    add("outline-color", one("outline", scale_color()));
    add("ring-w", one("ring", scale_border_width()));
    add("ring-w-inset", vec![lit("ring-inset")]);
    add("ring-color", one("ring", scale_color()));
    add(
        "ring-offset-w",
        one(
            "ring-offset",
            vec![validator(is_number), validator(is_arbitrary_length)],
        ),
    );
    add("ring-offset-color", one("ring-offset", scale_color()));

    // Effects (效果)
    add(
        "shadow",
        one(
            "shadow",
            vec![lit(""), theme("shadow"), validator(is_arbitrary_shadow)],
        ),
    );
    add("shadow-color", one("shadow", vec![validator(is_color_name)]));
    add("opacity", one("opacity", scale_number()));
    add("mix-blend", one("mix-blend", scale_blend_mode()));
    add("bg-blend", one("bg-blend", scale_blend_mode()));

    // Filters (滤镜)
    add(
        "blur",
        one("blur", vec![lit(""), theme("blur"), validator(is_arbitrary_value)]),
    );
    add("brightness", one("brightness", scale_number()));
    add("contrast", one("contrast", scale_number()));
    add(
        "drop-shadow",
        one(
            "drop-shadow",
            vec![
                lit(""),
                lit("none"),
                validator(is_tshirt_size),
                validator(is_arbitrary_value),
            ],
        ),
    );
    add(
        "grayscale",
        one("grayscale", vec![lit(""), validator(is_number), validator(is_arbitrary_value)]),
    );
    add("hue-rotate", one("hue-rotate", scale_number()));
    add(
        "invert",
        one("invert", vec![lit(""), validator(is_number), validator(is_arbitrary_value)]),
    );
    add("saturate", one("saturate", scale_number()));
    add(
        "sepia",
        one("sepia", vec![lit(""), validator(is_number), validator(is_arbitrary_value)]),
    );
    add(
        "backdrop-blur",
        one(
            "backdrop-blur",
            vec![lit(""), theme("blur"), validator(is_arbitrary_value)],
        ),
    );
    add("backdrop-brightness", one("backdrop-brightness", scale_number()));
    add("backdrop-contrast", one("backdrop-contrast", scale_number()));
    add(
        "backdrop-grayscale",
        one(
            "backdrop-grayscale",
            vec![lit(""), validator(is_number), validator(is_arbitrary_value)],
        ),
    );
    add("backdrop-hue-rotate", one("backdrop-hue-rotate", scale_number()));
    add(
        "backdrop-invert",
        one(
            "backdrop-invert",
            vec![lit(""), validator(is_number), validator(is_arbitrary_value)],
        ),
    );
    add("backdrop-opacity", one("backdrop-opacity", scale_number()));
    add("backdrop-saturate", one("backdrop-saturate", scale_number()));
    add(
        "backdrop-sepia",
        one(
            "backdrop-sepia",
            vec![lit(""), validator(is_number), validator(is_arbitrary_value)],
        ),
    );

    // Tables (表格)
    add(
        "border-collapse",
        one("border", literals(&["collapse", "separate"])),
    );
    add("border-spacing", one("border-spacing", scale_spacing()));
    add("border-spacing-x", one("border-spacing-x", scale_spacing()));
    add("border-spacing-y", one("border-spacing-y", scale_spacing()));
    add("table-layout", one("table", literals(&["auto", "fixed"])));
    add("caption", one("caption", literals(&["top", "bottom"])));

    // Transitions & Animation (过渡和动画)
    add(
        "transition",
        one(
            "transition",
            vec![
                lit(""),
                lit("all"),
                lit("colors"),
                lit("opacity"),
                lit("shadow"),
                lit("transform"),
                lit("none"),
                validator(is_arbitrary_value),
            ],
        ),
    );
    add("duration", one("duration", scale_number()));
    add(
        "ease",
        one("ease", vec![theme("ease"), validator(is_arbitrary_value)]),
    );
    add("delay", one("delay", scale_number()));
    add(
        "animate",
        one("animate", vec![theme("animate"), validator(is_arbitrary_value)]),
    );

    // Transforms (变换)
    add("transform", one("transform", literals(&["", "gpu", "none"])));
    add("scale", one("scale", scale_number()));
    add("scale-x", one("scale-x", scale_number()));
    add("scale-y", one("scale-y", scale_number()));
    add(
        "rotate",
        one("rotate", vec![validator(is_integer), validator(is_arbitrary_value)]),
    );
    add(
        "translate",
        one("translate", {
            let mut defs = vec![validator(is_fraction), lit("full")];
            defs.extend(scale_spacing());
            defs
        }),
    );
    add(
        "translate-x",
        one("translate-x", {
            let mut defs = vec![validator(is_fraction), lit("full")];
            defs.extend(scale_spacing());
            defs
        }),
    );
    add(
        "translate-y",
        one("translate-y", {
            let mut defs = vec![validator(is_fraction), lit("full")];
            defs.extend(scale_spacing());
            defs
        }),
    );
    add("skew-x", one("skew-x", scale_number()));
    add("skew-y", one("skew-y", scale_number()));
    add(
        "transform-origin",
        one(
            "origin",
            vec![
                lit("center"),
                lit("top"),
                lit("top-right"),
                lit("right"),
                lit("bottom-right"),
                lit("bottom"),
                lit("bottom-left"),
                lit("left"),
                lit("top-left"),
                validator(is_arbitrary_value),
            ],
        ),
    );

    // Interactivity (交互)
    add(
        "accent",
        one("accent", {
            let mut defs = vec![lit("auto")];
            defs.extend(scale_color());
            defs
        }),
    );
    add("appearance", one("appearance", literals(&["none", "auto"])));
    add(
        "cursor",
        one(
            "cursor",
            vec![
                lit("auto"),
                lit("default"),
                lit("pointer"),
                lit("wait"),
                lit("text"),
                lit("move"),
                lit("help"),
                lit("not-allowed"),
                lit("none"),
                lit("progress"),
                lit("grab"),
                lit("grabbing"),
                validator(is_arbitrary_value),
            ],
        ),
    );
    add("caret-color", one("caret", scale_color()));
    add(
        "pointer-events",
        one("pointer-events", literals(&["none", "auto"])),
    );
    add("resize", one("resize", literals(&["none", "", "y", "x"])));
    add(
        "scroll-behavior",
        one("scroll", literals(&["auto", "smooth"])),
    );
    add("scroll-m", one("scroll-m", scale_spacing()));
    add("scroll-mx", one("scroll-mx", scale_spacing()));
    add("scroll-my", one("scroll-my", scale_spacing()));
    add("scroll-p", one("scroll-p", scale_spacing()));
    add("scroll-px", one("scroll-px", scale_spacing()));
    add("scroll-py", one("scroll-py", scale_spacing()));
    add(
        "snap-align",
        one("snap", literals(&["start", "end", "center", "align-none"])),
    );
    add("snap-stop", one("snap", literals(&["normal", "always"])));
    add("snap-type", one("snap", literals(&["none", "x", "y", "both"])));
    add(
        "snap-strictness",
        one("snap", literals(&["mandatory", "proximity"])),
    );
    add("touch", one("touch", literals(&["auto", "none", "manipulation"])));
    add("touch-x", one("touch-pan", literals(&["x", "left", "right"])));
    add("touch-y", one("touch-pan", literals(&["y", "up", "down"])));
    add("select", one("select", literals(&["none", "text", "all", "auto"])));
    add(
        "will-change",
        one(
            "will-change",
            vec![
                lit("auto"),
                lit("scroll"),
                lit("contents"),
                lit("transform"),
                validator(is_arbitrary_value),
            ],
        ),
    );

    // SVG
    add(
        "fill",
        one("fill", {
            let mut defs = vec![lit("none")];
            defs.extend(scale_color());
            defs
        }),
    );
    add(
        "stroke-w",
        one(
            "stroke",
            vec![
                validator(is_number),
                validator(is_arbitrary_length),
                validator(is_arbitrary_number),
            ],
        ),
    );
    add(
        "stroke",
        one("stroke", {
            let mut defs = vec![lit("none")];
            defs.extend(scale_color());
            defs
        }),
    );

    groups
}

// ---------------------------------------------------------------------------
// 冲突表 (conflict tables)
// ---------------------------------------------------------------------------

/// 冲突关系是有方向的：key 的出现使 value 列表中的 group 失效，
/// 反过来不成立（如后出现的 `px-2` 不会挤掉 `p-4`）。
fn default_conflicts() -> IndexMap<String, Vec<String>> {
    let mut conflicts: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut add = |id: &str, targets: &[&str]| {
        conflicts.insert(
            id.to_string(),
            targets.iter().map(|t| t.to_string()).collect(),
        );
    };

    add("overflow", &["overflow-x", "overflow-y"]);
    add("overscroll", &["overscroll-x", "overscroll-y"]);
    add(
        "inset",
        &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
    );
    add("inset-x", &["right", "left"]);
    add("inset-y", &["top", "bottom"]);
    add("flex", &["basis", "grow", "shrink"]);
    add("gap", &["gap-x", "gap-y"]);
    add("p", &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"]);
    add("px", &["pr", "pl"]);
    add("py", &["pt", "pb"]);
    add("m", &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"]);
    add("mx", &["mr", "ml"]);
    add("my", &["mt", "mb"]);
    add("size", &["w", "h"]);
    add("line-clamp", &["display", "overflow"]);
    add(
        "rounded",
        &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
    );
    add("rounded-t", &["rounded-tl", "rounded-tr"]);
    add("rounded-r", &["rounded-tr", "rounded-br"]);
    add("rounded-b", &["rounded-br", "rounded-bl"]);
    add("rounded-l", &["rounded-tl", "rounded-bl"]);
    add(
        "border-w",
        &["border-w-x", "border-w-y", "border-w-t", "border-w-r", "border-w-b", "border-w-l"],
    );
    add("border-w-x", &["border-w-r", "border-w-l"]);
    add("border-w-y", &["border-w-t", "border-w-b"]);
    add(
        "border-color",
        &[
            "border-color-x",
            "border-color-y",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
        ],
    );
    add("border-color-x", &["border-color-r", "border-color-l"]);
    add("border-color-y", &["border-color-t", "border-color-b"]);
    add("translate", &["translate-x", "translate-y"]);
    add("scroll-m", &["scroll-mx", "scroll-my"]);
    add("scroll-p", &["scroll-px", "scroll-py"]);
    add("touch", &["touch-x", "touch-y"]);

    conflicts
}

/// 仅在携带后缀修饰符时生效的冲突：`text-lg/7` 同时设置行高，
/// 因此覆盖先前的 `leading-*`
fn default_modifier_conflicts() -> IndexMap<String, Vec<String>> {
    let mut conflicts = IndexMap::new();
    conflicts.insert("font-size".to_string(), vec!["leading".to_string()]);
    conflicts
}
