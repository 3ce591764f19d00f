//! # linesift - 按类型拆分文本行
//!
//! 逐行读取文本文件，把每一行归为整数、浮点数或字符串，
//! 分别写入独立的结果文件，并打印统计信息。
//!
//! ## 退出码
//! - `0`: 成功（包括个别输入文件缺失或读取失败）
//! - `1`: 无法准备输出目录
//! - `2`: 命令行参数错误（由 clap 处理）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (分类会话)
//!   │     ├── parsers/   (数值解析与行分类)
//!   │     ├── export/    (结果文件与 CSV)
//!   │     ├── report/    (统计报告)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod export;
mod models;
mod parsers;
mod report;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    if cli.no_color {
        utils::output::disable_color();
    }

    let config = cli.into_config();
    if let Err(e) = commands::run(&config) {
        utils::output::print_error(&format!("{}", e));
        if e.is_fatal() {
            std::process::exit(1);
        }
    }
}
