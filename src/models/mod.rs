//! # 数据模型模块
//!
//! 定义行类别、分类结果、统计累加器和运行配置。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `batch/`, `report/`, `export/` 使用
//! - 子模块: category, config, stats

pub mod category;
pub mod config;
pub mod stats;

pub use category::{Category, ClassifiedLine, LineValue};
pub use config::{SiftConfig, StatsMode, WriteMode};
pub use stats::{FloatStats, IntegerStats, StringStats};
