//! # 拆分命令实现
//!
//! 扫描输入文件，按类型拆分各行，写入结果文件并打印统计。
//!
//! ## 流程
//! 1. 按顺序扫描所有输入文件（单个文件失败只报告、不中断）
//! 2. 准备输出目录（唯一的致命错误）
//! 3. 写入非空类别的结果文件，可选导出统计 CSV
//! 4. 在标准输出打印统计报告
//!
//! 扫描在准备输出目录之前进行，所以即使目录失败，扫描阶段的诊断也会输出。
//! 标准输出不可写（例如管道已关闭）时只报告错误，不会 panic。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `batch/`, `export/`, `report/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{ClassificationSession, ScanEvent, ScanSummary};
use crate::error::{Result, SiftError};
use crate::export::{self, stats_csv};
use crate::models::{Category, SiftConfig};
use crate::report;
use crate::utils::{output, progress};

use std::io::{self, Write};

const STDOUT_NAME: &str = "<stdout>";

/// 执行拆分命令
pub fn execute(config: &SiftConfig) -> Result<()> {
    let session = scan_inputs(config);

    export::prepare_output_dir(&config.output_dir)?;

    write_results(config, &session);

    if let Some(csv_path) = &config.stats_csv {
        let rows = stats_csv::stats_rows(
            session.integer_stats(),
            session.float_stats(),
            session.string_stats(),
        );
        match stats_csv::to_csv(&rows, csv_path) {
            Ok(()) if config.verbose => {
                output::print_done(&format!("Statistics exported to '{}'", csv_path.display()))
            }
            Ok(()) => {}
            Err(e) => output::print_error(&e.to_string()),
        }
    }

    let report = report::render_report(
        session.integer_stats(),
        session.float_stats(),
        session.string_stats(),
        config.stats_mode,
    );
    write_report(&mut io::stdout().lock(), &report)
}

/// 写出统计报告
fn write_report<W: Write>(out: &mut W, report: &str) -> Result<()> {
    out.write_all(report.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| SiftError::OutputWriteError {
            path: STDOUT_NAME.to_string(),
            source: e,
        })
}

/// 扫描所有输入文件
fn scan_inputs(config: &SiftConfig) -> ClassificationSession {
    let mut session = ClassificationSession::new();
    let pb = progress::create_spinner("Scanning input files");

    let summary = session.process_sources(&config.inputs, |event| match event {
        ScanEvent::Opening(path) => pb.set_message(format!("Reading {}", path.display())),
        ScanEvent::Failed(e) => pb.suspend(|| report_scan_failure(e)),
    });

    pb.finish_and_clear();

    if config.verbose {
        print_scan_summary(&summary, session.lines_read());
    }

    session
}

fn report_scan_failure(e: &SiftError) {
    match e {
        SiftError::SourceNotFound { .. } => output::print_warning(&e.to_string()),
        _ => output::print_error(&e.to_string()),
    }
}

fn print_scan_summary(summary: &ScanSummary, lines: u64) {
    output::print_info(&format!(
        "Read {} lines from {} of {} input files",
        lines,
        summary.completed,
        summary.total()
    ));
    if summary.failed() > 0 {
        output::print_warning(&format!(
            "{} input files missing, {} interrupted",
            summary.missing, summary.interrupted
        ));
    }
}

/// 写入三个类别的结果文件，单个文件失败不影响其他类别
fn write_results(config: &SiftConfig, session: &ClassificationSession) {
    for category in Category::ALL {
        let lines = session.buffers().lines(category);
        match export::write_category(config, category, lines) {
            Ok(Some(path)) if config.verbose => output::print_done(&format!(
                "Wrote {} {} lines to '{}'",
                lines.len(),
                category,
                path.display()
            )),
            Ok(_) => {}
            Err(e) => output::print_error(&e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 总是写入失败的输出，模拟已关闭的管道
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_report_to_buffer() {
        let mut buf = Vec::new();
        write_report(&mut buf, "Statistics:\n").unwrap();
        assert_eq!(buf, b"Statistics:\n");
    }

    #[test]
    fn test_closed_stdout_is_an_error_not_a_panic() {
        let err = write_report(&mut ClosedPipe, "Statistics:\n").unwrap_err();
        assert!(!err.is_fatal());
        match err {
            SiftError::OutputWriteError { path, source } => {
                assert_eq!(path, "<stdout>");
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
