//! # 统一错误处理模块
//!
//! 定义 linesift 的所有错误类型，使用 `thiserror` 派生。
//!
//! 只有 `OutputDirectoryError` 是致命错误；其余错误都在本地报告后继续运行。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// linesift 统一错误类型
#[derive(Error, Debug)]
pub enum SiftError {
    // ─────────────────────────────────────────────────────────────
    // 输入错误（非致命）
    // ─────────────────────────────────────────────────────────────
    #[error("Input file not found: {path}")]
    SourceNotFound { path: String },

    #[error("Failed to read input file {path}: {source}")]
    SourceReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Cannot prepare output directory {path}: {reason}")]
    OutputDirectoryError { path: String, reason: String },

    #[error("Failed to write output file {path}: {source}")]
    OutputWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl SiftError {
    /// 是否为致命错误（需要以非零退出码结束进程）
    pub fn is_fatal(&self) -> bool {
        matches!(self, SiftError::OutputDirectoryError { .. })
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SiftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_output_directory_error_is_fatal() {
        let fatal = SiftError::OutputDirectoryError {
            path: "out".to_string(),
            reason: "exists but is not a directory".to_string(),
        };
        let missing = SiftError::SourceNotFound {
            path: "a.txt".to_string(),
        };
        let write = SiftError::OutputWriteError {
            path: "out/integers.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(fatal.is_fatal());
        assert!(!missing.is_fatal());
        assert!(!write.is_fatal());
    }

    #[test]
    fn test_error_messages_name_the_path() {
        let err = SiftError::SourceNotFound {
            path: "missing.txt".to_string(),
        };
        assert_eq!(err.to_string(), "Input file not found: missing.txt");
    }
}
