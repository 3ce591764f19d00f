//! # 批量处理模块
//!
//! 提供按顺序扫描多个输入文件的分类会话。
//!
//! ## 功能
//! - 按输入顺序逐个读取文件
//! - 单个文件失败不影响其他文件
//! - 扫描结果统计
//!
//! ## 依赖关系
//! - 被 `commands/sift.rs` 使用
//! - 使用 `parsers/`, `models/`

pub mod session;

pub use session::{ClassificationSession, ScanEvent, ScanSummary};
