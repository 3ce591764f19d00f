//! # 报告模块
//!
//! 将三个累加器渲染为简要或完整的文本统计报告。
//!
//! ## 依赖关系
//! - 被 `commands/sift.rs` 使用
//! - 子模块: formatter

pub mod formatter;

pub use formatter::render_report;
