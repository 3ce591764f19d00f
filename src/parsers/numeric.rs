//! # 数值解析器
//!
//! 对已去除首尾空白的非空文本依次尝试：任意精度整数 → 64 位浮点数。
//!
//! ## 规则
//! - 整数：可选 `+`/`-`，随后是一个或多个 ASCII 数字，别无其他。
//!   允许前导零，位数不限。
//! - 浮点数：`f64::from_str` 的语法（小数、指数、可选符号、`1.`、`.5`）。
//!   `inf`/`infinity`/`nan` 这类特殊字面量（任意大小写、任意符号）不算浮点数；
//!   形式合法但溢出的字面量（如 `1e400`）仍是浮点数，值为无穷大。
//! - 都不成立时返回 `None`，由调用方归入字符串。
//!
//! ## 依赖关系
//! - 被 `parsers/line.rs` 使用
//! - 使用 `num` 的 `BigInt`

use crate::models::LineValue;

use num::BigInt;
use std::str::FromStr;

/// 按整数 → 浮点数顺序解析，失败返回 `None`
pub fn parse_numeric(text: &str) -> Option<LineValue> {
    if let Some(value) = parse_integer(text) {
        return Some(LineValue::Integer(value));
    }
    parse_float(text).map(LineValue::Float)
}

/// 解析任意精度整数
pub fn parse_integer(text: &str) -> Option<BigInt> {
    if !is_integer_literal(text) {
        return None;
    }
    // BigInt 的解析器会容忍下划线，上面的语法检查已排除这种情况
    BigInt::from_str(text).ok()
}

/// 解析 64 位浮点数，拒绝 inf/nan 字面量
pub fn parse_float(text: &str) -> Option<f64> {
    if is_special_float_literal(text) {
        return None;
    }
    f64::from_str(text).ok()
}

/// 可选符号 + 至少一位 ASCII 数字
fn is_integer_literal(text: &str) -> bool {
    let digits = text
        .strip_prefix('+')
        .or_else(|| text.strip_prefix('-'))
        .unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_special_float_literal(text: &str) -> bool {
    let body = text
        .strip_prefix('+')
        .or_else(|| text.strip_prefix('-'))
        .unwrap_or(text);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|literal| body.eq_ignore_ascii_case(literal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn int(text: &str) -> BigInt {
        text.parse().unwrap()
    }

    #[test]
    fn test_plain_integers() {
        assert_eq!(parse_integer("42"), Some(BigInt::from(42)));
        assert_eq!(parse_integer("-7"), Some(BigInt::from(-7)));
        assert_eq!(parse_integer("+15"), Some(BigInt::from(15)));
        assert_eq!(parse_integer("0"), Some(BigInt::from(0)));
        assert_eq!(parse_integer("-0"), Some(BigInt::from(0)));
    }

    #[test]
    fn test_leading_zeros_are_integers() {
        assert_eq!(parse_integer("007"), Some(BigInt::from(7)));
        assert_eq!(parse_integer("-000"), Some(BigInt::from(0)));
    }

    #[test]
    fn test_integers_beyond_64_bits() {
        let text = "99999999999999999999999999999999999999";
        assert_eq!(parse_integer(text), Some(int(text)));
        assert_eq!(
            parse_numeric("-18446744073709551617"),
            Some(LineValue::Integer(int("-18446744073709551617")))
        );
    }

    #[test]
    fn test_integer_rejects_malformed() {
        for text in ["", "+", "-", "--5", "+-5", "1_000", "12a", "1.0", "1e3", " 1", "0x10"] {
            assert_eq!(parse_integer(text), None, "{text:?} must not be an integer");
        }
    }

    #[test]
    fn test_float_forms() {
        assert_eq!(parse_numeric("3.14"), Some(LineValue::Float(3.14)));
        assert_eq!(parse_numeric("-2.5e3"), Some(LineValue::Float(-2500.0)));
        assert_eq!(parse_numeric("1E-2"), Some(LineValue::Float(0.01)));
        assert_eq!(parse_numeric("+.5"), Some(LineValue::Float(0.5)));
        assert_eq!(parse_numeric("1."), Some(LineValue::Float(1.0)));
        assert_eq!(parse_numeric("1e5"), Some(LineValue::Float(100000.0)));
    }

    #[test]
    fn test_integer_wins_over_float() {
        assert!(matches!(parse_numeric("10"), Some(LineValue::Integer(_))));
        assert!(matches!(parse_numeric("10.0"), Some(LineValue::Float(_))));
    }

    #[test]
    fn test_overflowing_float_is_still_float() {
        assert_eq!(parse_numeric("1e400"), Some(LineValue::Float(f64::INFINITY)));
        assert_eq!(
            parse_numeric("-1e400"),
            Some(LineValue::Float(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn test_special_literals_are_not_numbers() {
        for text in ["inf", "-inf", "+Infinity", "INFINITY", "NaN", "nan", "-NAN"] {
            assert_eq!(parse_numeric(text), None, "{text:?} must not be numeric");
        }
    }

    #[test]
    fn test_malformed_numbers_fall_through() {
        for text in ["1.2.3", "--5", "1e", "e5", ".", "abc", "1,5", "12abc", "1d", "0x1p3"] {
            assert_eq!(parse_numeric(text), None, "{text:?} must not be numeric");
        }
    }

    proptest! {
        #[test]
        fn prop_integer_literals_round_trip(sign in "[+-]?", digits in "[0-9]{1,60}") {
            let text = format!("{sign}{digits}");
            let parsed = parse_integer(&text).expect("integer literal must parse");

            let magnitude: BigInt = digits.parse().unwrap();
            let expected = if sign == "-" { -magnitude } else { magnitude };
            prop_assert_eq!(parsed, expected);
        }

        #[test]
        fn prop_decimal_point_means_float(whole in "[0-9]{1,8}", frac in "[0-9]{1,8}") {
            let text = format!("{whole}.{frac}");
            prop_assert!(matches!(parse_numeric(&text), Some(LineValue::Float(_))));
        }
    }
}
