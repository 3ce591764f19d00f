//! # 统计累加器
//!
//! 三种互相独立的累加器：整数、浮点数、字符串长度。
//! 每个累加器由会话独占，通过 `accept` 逐个接收值，O(1) 更新。
//! 只按输入顺序累加，不提供合并操作。
//!
//! ## 依赖关系
//! - 被 `batch/session.rs` 更新
//! - 被 `report/formatter.rs`, `export/stats_csv.rs` 读取
//! - 使用 `num` 的任意精度整数

use num::{BigInt, ToPrimitive};

/// 整数统计（任意精度）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegerStats {
    count: u64,
    min: Option<BigInt>,
    max: Option<BigInt>,
    sum: BigInt,
}

impl IntegerStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, value: &BigInt) {
        self.count += 1;
        if self.min.as_ref().map_or(true, |min| value < min) {
            self.min = Some(value.clone());
        }
        if self.max.as_ref().map_or(true, |max| value > max) {
            self.max = Some(value.clone());
        }
        self.sum += value;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn min(&self) -> Option<&BigInt> {
        self.min.as_ref()
    }

    pub fn max(&self) -> Option<&BigInt> {
        self.max.as_ref()
    }

    pub fn sum(&self) -> &BigInt {
        &self.sum
    }

    /// 平均值：和先转为 f64 再除以个数
    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        let sum = self.sum.to_f64().unwrap_or(f64::NAN);
        Some(sum / self.count as f64)
    }
}

/// 浮点数统计
///
/// 求和为朴素的顺序累加，结果依赖于输入顺序。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloatStats {
    count: u64,
    min: Option<f64>,
    max: Option<f64>,
    sum: f64,
}

impl FloatStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// 接收一个值
    ///
    /// 边界用 `f64::min`/`f64::max` 更新：NaN 计入个数和求和，
    /// 但不会取代已有的非 NaN 边界；只有全部为 NaN 时边界才是 NaN。
    pub fn accept(&mut self, value: f64) {
        self.count += 1;
        self.min = Some(self.min.map_or(value, |min| min.min(value)));
        self.max = Some(self.max.map_or(value, |max| max.max(value)));
        self.sum += value;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// 字符串长度统计（按字符计数）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringStats {
    count: u64,
    min_len: Option<usize>,
    max_len: Option<usize>,
}

impl StringStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, line: &str) {
        let len = line.chars().count();
        self.count += 1;
        self.min_len = Some(self.min_len.map_or(len, |min| min.min(len)));
        self.max_len = Some(self.max_len.map_or(len, |max| max.max(len)));
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// 最短长度；个数为 0 时为 `None`
    pub fn min_len(&self) -> Option<usize> {
        self.min_len
    }

    /// 最长长度；个数为 0 时为 `None`
    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }
}
