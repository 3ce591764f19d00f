//! # 运行配置
//!
//! 命令行参数解析后的不可变配置。
//!
//! ## 依赖关系
//! - 由 `cli/mod.rs` 构造
//! - 被 `commands/sift.rs`, `report/`, `export/` 使用

use std::path::PathBuf;

/// 统计输出模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsMode {
    /// 只输出个数
    #[default]
    Short,
    /// 个数、最小值、最大值、和、平均值
    Full,
}

/// 输出文件写入模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// 覆盖已有内容
    #[default]
    Truncate,
    /// 追加到已有内容之后
    Append,
}

/// linesift 运行配置
#[derive(Debug, Clone)]
pub struct SiftConfig {
    pub inputs: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub prefix: String,
    pub write_mode: WriteMode,
    pub stats_mode: StatsMode,
    pub stats_csv: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for SiftConfig {
    fn default() -> Self {
        SiftConfig {
            inputs: vec![],
            output_dir: PathBuf::from("."),
            prefix: String::new(),
            write_mode: WriteMode::default(),
            stats_mode: StatsMode::default(),
            stats_csv: None,
            verbose: false,
        }
    }
}

impl SiftConfig {
    /// 某类别输出文件的完整路径
    pub fn category_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(format!("{}{}", self.prefix, file_name))
    }
}
