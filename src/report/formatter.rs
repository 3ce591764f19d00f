//! # 统计报告格式化
//!
//! 按 Integers → Floats → Strings 的固定顺序生成文本报告。
//!
//! ## 输出格式
//! ```text
//! Statistics:
//!
//! Integers:
//!   count = 2
//!   min   = -7
//!   max   = 42
//!   sum   = 35
//!   avg   = 17.5
//!
//! Floats:
//!   no elements
//!
//! Strings:
//!   count = 2
//!   min length = 0
//!   max length = 5
//! ```
//!
//! 浮点数使用 `{:?}` 格式，整数值也保留小数点（如 `2.0`）。
//!
//! ## 依赖关系
//! - 被 `commands/sift.rs` 调用
//! - 使用 `models/stats.rs`, `models/config.rs`

use crate::models::{Category, FloatStats, IntegerStats, StatsMode, StringStats};

const NO_ELEMENTS: &str = "  no elements\n";

/// 生成完整报告
pub fn render_report(
    integers: &IntegerStats,
    floats: &FloatStats,
    strings: &StringStats,
    mode: StatsMode,
) -> String {
    let mut result = String::from("Statistics:\n");

    result.push_str(&format!("\n{}:\n", Category::Integer.section_title()));
    result.push_str(&render_integer_section(integers, mode));

    result.push_str(&format!("\n{}:\n", Category::Float.section_title()));
    result.push_str(&render_float_section(floats, mode));

    result.push_str(&format!("\n{}:\n", Category::String.section_title()));
    result.push_str(&render_string_section(strings, mode));

    result
}

fn render_integer_section(stats: &IntegerStats, mode: StatsMode) -> String {
    if stats.is_empty() {
        return NO_ELEMENTS.to_string();
    }

    let mut result = format!("  count = {}\n", stats.count());
    if mode == StatsMode::Full {
        if let (Some(min), Some(max), Some(avg)) = (stats.min(), stats.max(), stats.average()) {
            result.push_str(&format!("  min   = {}\n", min));
            result.push_str(&format!("  max   = {}\n", max));
            result.push_str(&format!("  sum   = {}\n", stats.sum()));
            result.push_str(&format!("  avg   = {}\n", format_float(avg)));
        }
    }
    result
}

fn render_float_section(stats: &FloatStats, mode: StatsMode) -> String {
    if stats.is_empty() {
        return NO_ELEMENTS.to_string();
    }

    let mut result = format!("  count = {}\n", stats.count());
    if mode == StatsMode::Full {
        if let (Some(min), Some(max), Some(avg)) = (stats.min(), stats.max(), stats.average()) {
            result.push_str(&format!("  min   = {}\n", format_float(min)));
            result.push_str(&format!("  max   = {}\n", format_float(max)));
            result.push_str(&format!("  sum   = {}\n", format_float(stats.sum())));
            result.push_str(&format!("  avg   = {}\n", format_float(avg)));
        }
    }
    result
}

fn render_string_section(stats: &StringStats, mode: StatsMode) -> String {
    if stats.is_empty() {
        return NO_ELEMENTS.to_string();
    }

    let mut result = format!("  count = {}\n", stats.count());
    if mode == StatsMode::Full {
        if let (Some(min), Some(max)) = (stats.min_len(), stats.max_len()) {
            result.push_str(&format!("  min length = {}\n", min));
            result.push_str(&format!("  max length = {}\n", max));
        }
    }
    result
}

/// 浮点数格式化，整数值保留 `.0`
pub fn format_float(value: f64) -> String {
    format!("{:?}", value)
}
