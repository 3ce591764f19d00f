//! # 行分类数据模型
//!
//! 定义三种互斥的行类别以及分类后的行。
//!
//! ## 依赖关系
//! - 被 `parsers/line.rs` 构造
//! - 被 `batch/session.rs`, `export/` 使用

use num::BigInt;

/// 行类别，每一行恰好属于其中一种
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Integer,
    Float,
    String,
}

impl Category {
    /// 按报告顺序排列的所有类别
    pub const ALL: [Category; 3] = [Category::Integer, Category::Float, Category::String];

    /// 输出文件名（不含前缀）
    pub fn file_name(&self) -> &'static str {
        match self {
            Category::Integer => "integers.txt",
            Category::Float => "floats.txt",
            Category::String => "strings.txt",
        }
    }

    /// 报告中的分节标题
    pub fn section_title(&self) -> &'static str {
        match self {
            Category::Integer => "Integers",
            Category::Float => "Floats",
            Category::String => "Strings",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Integer => write!(f, "integer"),
            Category::Float => write!(f, "float"),
            Category::String => write!(f, "string"),
        }
    }
}

/// 解析得到的值
#[derive(Debug, Clone, PartialEq)]
pub enum LineValue {
    Integer(BigInt),
    Float(f64),
    Text,
}

/// 分类后的行（构造后不可变）
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedLine {
    original: String,
    trimmed: String,
    value: LineValue,
}

impl ClassifiedLine {
    pub fn new(original: impl Into<String>, trimmed: impl Into<String>, value: LineValue) -> Self {
        ClassifiedLine {
            original: original.into(),
            trimmed: trimmed.into(),
            value,
        }
    }

    pub fn category(&self) -> Category {
        match self.value {
            LineValue::Integer(_) => Category::Integer,
            LineValue::Float(_) => Category::Float,
            LineValue::Text => Category::String,
        }
    }

    /// 拆分为输出文本和值
    ///
    /// 数字输出去除首尾空白后的形式，字符串保留原始行。
    pub fn into_parts(self) -> (String, LineValue) {
        let text = match self.value {
            LineValue::Integer(_) | LineValue::Float(_) => self.trimmed,
            LineValue::Text => self.original,
        };
        (text, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_keep_trimmed_text() {
        let line = ClassifiedLine::new("  42 ", "42", LineValue::Integer(BigInt::from(42)));
        assert_eq!(line.category(), Category::Integer);

        let (text, value) = line.into_parts();
        assert_eq!(text, "42");
        assert_eq!(value, LineValue::Integer(BigInt::from(42)));
    }

    #[test]
    fn test_strings_keep_original_text() {
        let line = ClassifiedLine::new("  hello ", "hello", LineValue::Text);
        assert_eq!(line.category(), Category::String);

        let (text, value) = line.into_parts();
        assert_eq!(text, "  hello ");
        assert_eq!(value, LineValue::Text);
    }

    #[test]
    fn test_category_file_names() {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.file_name()).collect();
        assert_eq!(names, vec!["integers.txt", "floats.txt", "strings.txt"]);
    }
}
