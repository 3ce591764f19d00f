//! # 行分类器
//!
//! 输入一行原始文本（不含换行符），输出 `ClassifiedLine`。
//!
//! 去除首尾空白时删除所有 `<= U+0020` 的字符（空格及 ASCII 控制字符）。
//! 去除后为空的行直接归为字符串，保留原始文本及其原始长度。
//!
//! ## 依赖关系
//! - 被 `batch/session.rs` 使用
//! - 使用 `parsers/numeric.rs`

use super::numeric::parse_numeric;
use crate::models::{ClassifiedLine, LineValue};

/// 对一行进行分类
pub fn classify_line(line: &str) -> ClassifiedLine {
    let trimmed = trim_line(line);
    if trimmed.is_empty() {
        return ClassifiedLine::new(line, trimmed, LineValue::Text);
    }

    let value = parse_numeric(trimmed).unwrap_or(LineValue::Text);
    ClassifiedLine::new(line, trimmed, value)
}

/// 删除首尾的空格和控制字符
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}
