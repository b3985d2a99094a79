//! 时间类型模块
//!
//! `Timestamp`: 可序列化的毫秒时间戳，用于传输和会话存储。

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use std::time::Duration;

/// 毫秒时间戳
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// 创建新的时间戳
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    /// 当前时间
    ///
    /// 在 wasm32 上由 chrono 通过 `Date.now()` 获取
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }

    /// 获取毫秒值
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// 获取秒值
    #[inline]
    pub const fn as_secs(&self) -> i64 {
        self.0 / 1000
    }

    /// 转换为 RFC 3339 字符串，超出范围时返回 None
    pub fn to_rfc3339(&self) -> Option<String> {
        chrono::DateTime::from_timestamp_millis(self.0).map(|d| d.to_rfc3339())
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    /// 溢出时饱和到 `i64::MAX`
    fn add(self, rhs: Duration) -> Self::Output {
        let ms = i64::try_from(rhs.as_millis()).unwrap_or(i64::MAX);
        Self(self.0.saturating_add(ms))
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = Duration;

    /// 计算两个时间戳之间的差值（负值截断为 0）
    fn sub(self, rhs: Timestamp) -> Self::Output {
        let diff_ms = self.0.saturating_sub(rhs.0).max(0);
        Duration::from_millis(diff_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_sub_are_consistent() {
        let t = Timestamp::new(1_000);
        let later = t + Duration::from_secs(5);
        assert_eq!(later.as_millis(), 6_000);
        assert_eq!(later - t, Duration::from_secs(5));
        assert_eq!(t - later, Duration::ZERO);
    }

    #[test]
    fn huge_durations_saturate_instead_of_wrapping() {
        let t = Timestamp::new(1_700_000_000_000);
        assert_eq!((t + Duration::from_secs(u64::MAX)).as_millis(), i64::MAX);
        assert_eq!((t + Duration::from_millis(i64::MAX as u64)).as_millis(), i64::MAX);
        assert_eq!(Timestamp::new(i64::MIN) - Timestamp::new(i64::MAX), Duration::ZERO);
    }

    #[test]
    fn rfc3339_formats_epoch() {
        let s = Timestamp::new(0).to_rfc3339().unwrap();
        assert!(s.starts_with("1970-01-01T00:00:00"));
    }
}
