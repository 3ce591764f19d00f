//! # 命令执行模块
//!
//! 实现命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `batch/`, `export/`, `report/`, `utils/`
//! - 子模块: sift

pub mod sift;

use crate::error::Result;
use crate::models::SiftConfig;

/// 执行命令
pub fn run(config: &SiftConfig) -> Result<()> {
    sift::execute(config)
}
