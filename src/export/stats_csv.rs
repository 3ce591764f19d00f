//! # 统计数据导出
//!
//! 将三个类别的统计导出为 CSV。
//!
//! ## 格式
//! ```text
//! category,count,min,max,sum,avg
//! Integers,2,-7,42,35,17.5
//! Floats,0,,,,
//! Strings,2,0,5,,
//! ```
//! 不存在的值留空；字符串行的 min/max 为长度。
//!
//! ## 依赖关系
//! - 被 `commands/sift.rs` 调用
//! - 使用 `csv` 与 `serde` 写入

use crate::error::{Result, SiftError};
use crate::models::{Category, FloatStats, IntegerStats, StringStats};
use crate::report::formatter::format_float;

use serde::Serialize;
use std::path::Path;

/// CSV 中的一行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsRow {
    pub category: &'static str,
    pub count: u64,
    pub min: Option<String>,
    pub max: Option<String>,
    pub sum: Option<String>,
    pub avg: Option<String>,
}

/// 根据累加器生成三行统计
pub fn stats_rows(
    integers: &IntegerStats,
    floats: &FloatStats,
    strings: &StringStats,
) -> Vec<StatsRow> {
    let integer_row = StatsRow {
        category: Category::Integer.section_title(),
        count: integers.count(),
        min: integers.min().map(|v| v.to_string()),
        max: integers.max().map(|v| v.to_string()),
        sum: (!integers.is_empty()).then(|| integers.sum().to_string()),
        avg: integers.average().map(format_float),
    };

    let float_row = StatsRow {
        category: Category::Float.section_title(),
        count: floats.count(),
        min: floats.min().map(format_float),
        max: floats.max().map(format_float),
        sum: (!floats.is_empty()).then(|| format_float(floats.sum())),
        avg: floats.average().map(format_float),
    };

    let string_row = StatsRow {
        category: Category::String.section_title(),
        count: strings.count(),
        min: strings.min_len().map(|v| v.to_string()),
        max: strings.max_len().map(|v| v.to_string()),
        sum: None,
        avg: None,
    };

    vec![integer_row, float_row, string_row]
}

/// 导出统计为 CSV 文件
pub fn to_csv(rows: &[StatsRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(|e| {
        SiftError::OutputWriteError {
            path: output_path.display().to_string(),
            source: std::io::Error::from(e),
        }
    })?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| SiftError::OutputWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::BigInt;

    #[test]
    fn test_rows_for_scenario() {
        let mut ints = IntegerStats::new();
        ints.accept(&BigInt::from(42));
        ints.accept(&BigInt::from(-7));
        let floats = FloatStats::new();
        let mut strings = StringStats::new();
        strings.accept("hello");
        strings.accept("");

        let rows = stats_rows(&ints, &floats, &strings);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].min.as_deref(), Some("-7"));
        assert_eq!(rows[0].sum.as_deref(), Some("35"));
        assert_eq!(rows[0].avg.as_deref(), Some("17.5"));
        assert_eq!(rows[1].count, 0);
        assert_eq!(rows[1].sum, None);
        assert_eq!(rows[2].max.as_deref(), Some("5"));
        assert_eq!(rows[2].avg, None);
    }

    #[test]
    fn test_csv_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.csv");

        let mut ints = IntegerStats::new();
        ints.accept(&BigInt::from(42));
        ints.accept(&BigInt::from(-7));
        let mut floats = FloatStats::new();
        floats.accept(3.14);
        let mut strings = StringStats::new();
        strings.accept("hello");
        strings.accept("");

        to_csv(&stats_rows(&ints, &floats, &strings), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "category,count,min,max,sum,avg",
                "Integers,2,-7,42,35,17.5",
                "Floats,1,3.14,3.14,3.14,3.14",
                "Strings,2,0,5,,",
            ]
        );
    }

    #[test]
    fn test_unopenable_csv_path_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("stats.csv");

        let err = to_csv(&[], &path).unwrap_err();
        assert!(matches!(err, SiftError::OutputWriteError { .. }));
        assert!(err.to_string().contains("stats.csv"));
        assert!(err.to_string().contains("no_such_dir"));
    }
}
