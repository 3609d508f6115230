//! # Clock（時刻プロバイダ）
//!
//! `created_at` の採時を抽象化し、テストで固定時刻を注入可能にする。
//! ユースケース層は `Utc::now()` を直接呼ばず、このトレイト経由で採時する。

use chrono::{DateTime, Utc};

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 実際のシステム時刻を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 固定時刻を返すテスト用実装
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// RFC 3339 文字列から固定時刻を生成する
    ///
    /// # Panics
    ///
    /// テスト専用のため、パース不能な文字列はパニックする。
    pub fn at(rfc3339: &str) -> Self {
        Self {
            now: rfc3339
                .parse()
                .unwrap_or_else(|e| panic!("不正な RFC 3339 文字列 '{rfc3339}': {e}")),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clockは現在時刻を返す() {
        let clock = SystemClock;
        let before = Utc::now();
        let result = clock.now();
        let after = Utc::now();

        assert!(result >= before);
        assert!(result <= after);
    }

    #[test]
    fn test_fixed_clockは何度呼んでも同じ時刻を返す() {
        let clock = FixedClock::at("2024-05-01T12:00:00Z");

        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }
}
