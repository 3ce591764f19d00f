//! # 分类会话
//!
//! 按给定顺序扫描输入源，逐行分类，并把结果路由到对应的累加器和输出缓冲区。
//!
//! ## 功能
//! - 输入源不存在：报告后跳过，继续下一个
//! - 读取中途出错：报告后结束该文件，已累加的结果保留
//! - 严格顺序处理：缓冲区顺序和浮点求和顺序都等于输入顺序
//! - 行结束符：`\n`、`\r\n` 和单独的 `\r` 都结束一行
//!
//! ## 依赖关系
//! - 被 `commands/sift.rs` 调用
//! - 使用 `parsers/line.rs` 进行分类
//! - 使用 `models/stats.rs` 累加统计

use crate::error::{Result, SiftError};
use crate::models::{Category, FloatStats, IntegerStats, LineValue, StringStats};
use crate::parsers::classify_line;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// 三个类别的输出缓冲区，按遇到的顺序保存文本
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CategoryBuffers {
    integers: Vec<String>,
    floats: Vec<String>,
    strings: Vec<String>,
}

impl CategoryBuffers {
    pub fn push(&mut self, category: Category, text: String) {
        match category {
            Category::Integer => self.integers.push(text),
            Category::Float => self.floats.push(text),
            Category::String => self.strings.push(text),
        }
    }

    pub fn lines(&self, category: Category) -> &[String] {
        match category {
            Category::Integer => &self.integers,
            Category::Float => &self.floats,
            Category::String => &self.strings,
        }
    }
}

/// 单个输入源的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOutcome {
    /// 读到文件末尾
    Completed,
    /// 文件不存在
    Missing,
    /// 打开失败或读取中途出错
    Interrupted,
}

/// 扫描过程中的事件，供调用方显示进度和报告错误
#[derive(Debug)]
pub enum ScanEvent<'a> {
    Opening(&'a Path),
    Failed(&'a SiftError),
}

/// 扫描结果统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub completed: usize,
    pub missing: usize,
    pub interrupted: usize,
}

impl ScanSummary {
    /// 合并一个输入源的处理结果
    pub fn merge(&mut self, outcome: SourceOutcome) {
        match outcome {
            SourceOutcome::Completed => self.completed += 1,
            SourceOutcome::Missing => self.missing += 1,
            SourceOutcome::Interrupted => self.interrupted += 1,
        }
    }

    /// 输入源总数
    pub fn total(&self) -> usize {
        self.completed + self.missing + self.interrupted
    }

    pub fn failed(&self) -> usize {
        self.missing + self.interrupted
    }
}

/// 分类会话，独占三个累加器和输出缓冲区
#[derive(Debug)]
pub struct ClassificationSession {
    integers: IntegerStats,
    floats: FloatStats,
    strings: StringStats,
    buffers: CategoryBuffers,
    lines_read: u64,
}

impl ClassificationSession {
    pub fn new() -> Self {
        Self {
            integers: IntegerStats::new(),
            floats: FloatStats::new(),
            strings: StringStats::new(),
            buffers: CategoryBuffers::default(),
            lines_read: 0,
        }
    }

    /// 按顺序处理所有输入源，单个输入源失败不会中断整体运行
    pub fn process_sources<F>(&mut self, sources: &[PathBuf], mut observer: F) -> ScanSummary
    where
        F: FnMut(ScanEvent<'_>),
    {
        let mut summary = ScanSummary::default();

        for path in sources {
            observer(ScanEvent::Opening(path));

            let outcome = match self.process_source(path) {
                Ok(_) => SourceOutcome::Completed,
                Err(e) => {
                    observer(ScanEvent::Failed(&e));
                    match e {
                        SiftError::SourceNotFound { .. } => SourceOutcome::Missing,
                        _ => SourceOutcome::Interrupted,
                    }
                }
            };
            summary.merge(outcome);
        }

        summary
    }

    /// 处理单个文件，返回读取的行数
    pub fn process_source(&mut self, path: &Path) -> Result<u64> {
        if !path.exists() {
            return Err(SiftError::SourceNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path).map_err(|e| SiftError::SourceReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        self.process_reader(BufReader::new(file))
            .map_err(|e| SiftError::SourceReadError {
                path: path.display().to_string(),
                source: e,
            })
    }

    /// 从任意 `BufRead` 逐行读取
    ///
    /// 出错时已处理的行保留在会话中。非 UTF-8 的行按 `InvalidData` 报错。
    pub fn process_reader<R: BufRead>(&mut self, mut reader: R) -> io::Result<u64> {
        let mut count = 0;
        let mut chunk = Vec::new();
        loop {
            chunk.clear();
            // 每块以 `\n` 结尾（或到达末尾），所以 `\r\n` 不会跨块
            if reader.read_until(b'\n', &mut chunk)? == 0 {
                break;
            }
            for raw in split_lines(&chunk) {
                let line = std::str::from_utf8(raw)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                self.process_line(line);
                count += 1;
            }
        }
        Ok(count)
    }

    /// 分类一行并更新对应类别
    pub fn process_line(&mut self, line: &str) -> Category {
        let classified = classify_line(line);
        let category = classified.category();
        let (text, value) = classified.into_parts();

        match &value {
            LineValue::Integer(v) => self.integers.accept(v),
            LineValue::Float(v) => self.floats.accept(*v),
            LineValue::Text => self.strings.accept(&text),
        }
        self.buffers.push(category, text);
        self.lines_read += 1;

        category
    }

    pub fn integer_stats(&self) -> &IntegerStats {
        &self.integers
    }

    pub fn float_stats(&self) -> &FloatStats {
        &self.floats
    }

    pub fn string_stats(&self) -> &StringStats {
        &self.strings
    }

    pub fn buffers(&self) -> &CategoryBuffers {
        &self.buffers
    }

    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }
}

/// 按 `\n`、`\r\n` 或单独的 `\r` 切分，末尾未结束的部分也算一行
fn split_lines(chunk: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < chunk.len() {
        match chunk[i] {
            b'\n' => {
                lines.push(&chunk[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&chunk[start..i]);
                i += 1;
                if chunk.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < chunk.len() {
        lines.push(&chunk[start..]);
    }
    lines
}
