//! # 导出模块
//!
//! 写入类别输出文件和统计 CSV。
//!
//! ## 依赖关系
//! - 被 `commands/sift.rs` 使用
//! - 子模块: category, stats_csv

pub mod category;
pub mod stats_csv;

pub use category::{prepare_output_dir, write_category};
