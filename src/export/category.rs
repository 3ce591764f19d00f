//! # 类别输出文件
//!
//! 准备输出目录，并把每个类别的行写入 `<prefix>integers.txt` 等文件。
//!
//! ## 规则
//! - 输出目录不存在时只创建一层（不递归创建父目录）
//! - 路径存在但不是目录视为致命错误
//! - 空类别不创建文件
//! - 每行以平台换行符结尾
//!
//! ## 依赖关系
//! - 被 `commands/sift.rs` 调用
//! - 使用 `models/config.rs` 的写入模式

use crate::error::{Result, SiftError};
use crate::models::{Category, SiftConfig, WriteMode};

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// 确保输出目录存在
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }

    if dir.exists() {
        return Err(SiftError::OutputDirectoryError {
            path: dir.display().to_string(),
            reason: "path exists but is not a directory".to_string(),
        });
    }

    fs::create_dir(dir).map_err(|e| SiftError::OutputDirectoryError {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })
}

/// 写入某一类别的输出文件
///
/// 类别为空时不创建文件，返回 `Ok(None)`。
pub fn write_category(
    config: &SiftConfig,
    category: Category,
    lines: &[String],
) -> Result<Option<PathBuf>> {
    if lines.is_empty() {
        return Ok(None);
    }

    let path = config.category_path(category.file_name());
    write_lines(&path, lines, config.write_mode)?;
    Ok(Some(path))
}

/// 按写入模式写入所有行
pub fn write_lines(path: &Path, lines: &[String], mode: WriteMode) -> Result<()> {
    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        WriteMode::Append => options.append(true),
        WriteMode::Truncate => options.write(true).truncate(true),
    };

    let to_write_error = |e: std::io::Error| SiftError::OutputWriteError {
        path: path.display().to_string(),
        source: e,
    };

    let file = options.open(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer.write_all(line.as_bytes()).map_err(to_write_error)?;
        writer
            .write_all(LINE_ENDING.as_bytes())
            .map_err(to_write_error)?;
    }
    writer.flush().map_err(to_write_error)?;

    Ok(())
}
