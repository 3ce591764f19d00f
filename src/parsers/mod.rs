//! # 解析器模块
//!
//! 行分类的纯函数部分：数值解析与单行分类。
//!
//! ## 依赖关系
//! - 被 `batch/session.rs` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: numeric, line

pub mod line;
pub mod numeric;

pub use line::classify_line;
