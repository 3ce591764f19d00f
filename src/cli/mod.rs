//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数，并解析为 `SiftConfig`。
//!
//! ## 参数
//! - `<FILES>...`: 输入文件（按顺序处理）
//! - `-o`: 输出目录，`-p`: 文件名前缀，`-a`: 追加模式
//! - `-s` / `-f`: 简要 / 完整统计（都未指定时为简要，同时指定时完整优先）
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 构造 `models/config.rs` 的 `SiftConfig`

use crate::models::{SiftConfig, StatsMode, WriteMode};

use clap::Parser;
use std::path::PathBuf;

/// linesift - 按类型拆分文本行并统计
#[derive(Parser, Debug)]
#[command(name = "linesift")]
#[command(version)]
#[command(
    about = "Split text lines into integers, floats and strings, with statistics",
    long_about = None
)]
pub struct Cli {
    /// Input files, processed in the order given
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Directory for the result files
    #[arg(short = 'o', long = "output", default_value = ".", env = "LINESIFT_OUTPUT")]
    pub output: PathBuf,

    /// Prefix for the result file names
    #[arg(short, long, env = "LINESIFT_PREFIX")]
    pub prefix: Option<String>,

    /// Append to existing result files instead of overwriting them
    #[arg(short, long, default_value_t = false)]
    pub append: bool,

    /// Show short statistics (counts only)
    #[arg(short, long, default_value_t = false)]
    pub short: bool,

    /// Show full statistics (min, max, sum, average)
    #[arg(short, long, default_value_t = false)]
    pub full: bool,

    /// Also export the statistics as CSV to this file
    #[arg(long, value_name = "FILE")]
    pub stats_csv: Option<PathBuf>,

    /// Print status messages to stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable colored diagnostics
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

impl Cli {
    /// 解析为运行配置
    pub fn into_config(self) -> SiftConfig {
        let stats_mode = if self.full {
            StatsMode::Full
        } else {
            StatsMode::Short
        };
        let write_mode = if self.append {
            WriteMode::Append
        } else {
            WriteMode::Truncate
        };

        SiftConfig {
            inputs: self.files,
            output_dir: self.output,
            prefix: self.prefix.unwrap_or_default(),
            write_mode,
            stats_mode,
            stats_csv: self.stats_csv,
            verbose: self.verbose,
        }
    }
}
