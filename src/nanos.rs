use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::time::Duration;

/// Signed Nanoseconds
///
/// Presentation time of a timecode. Signed, since frame indices may be negative.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nanos(i64);

impl Nanos {
    /// Zero.
    pub const ZERO: Self = Self(0);
    /// Creates a new instance of nanoseconds
    pub const fn new(nanoseconds: i64) -> Self {
        Self(nanoseconds)
    }
    /// Returns the nanoseconds as an i64
    pub const fn ns(&self) -> i64 {
        self.0
    }
    /// ms -> ns
    pub const fn from_ms(ms: i64) -> Self {
        Self(ms * 1_000_000)
    }
    /// s -> ns
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs * 1_000_000_000)
    }
    /// Returns seconds
    pub const fn as_secs_f64(&self) -> f64 {
        self.0 as f64 / 1_000_000_000.
    }
    /// Returns a [`Duration`]
    /// IF I am greater than or equal to zero.
    pub const fn to_duration(&self) -> Option<Duration> {
        if self.0 < 0 {
            return None;
        }
        Some(Duration::from_nanos(self.0 as u64))
    }
    /// Returns the absolute value as a [`Duration`]
    pub const fn abs_duration(&self) -> Duration {
        Duration::from_nanos(self.0.unsigned_abs())
    }
}

impl From<Duration> for Nanos {
    /// Saturates at [`i64::MAX`] nanoseconds, roughly 292 years.
    fn from(value: Duration) -> Self {
        Self(i64::try_from(value.as_nanos()).unwrap_or(i64::MAX))
    }
}

impl Add for Nanos {
    type Output = Nanos;
    fn add(self, rhs: Self) -> Self::Output {
        Nanos(self.0 + rhs.0)
    }
}

impl AddAssign for Nanos {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Nanos {
    type Output = Nanos;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Nanos {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul<i64> for Nanos {
    type Output = Nanos;
    fn mul(self, rhs: i64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Neg for Nanos {
    type Output = Nanos;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

#[test]
fn duration_conversions() {
    use pretty_assertions::assert_eq;

    let two_minutes = Nanos::from(Duration::from_secs(120));
    assert_eq!(two_minutes, Nanos::from_secs(120));
    assert_eq!(two_minutes.to_duration(), Some(Duration::from_secs(120)));

    let before_zero = -Nanos::from_ms(500);
    assert_eq!(before_zero.to_duration(), None);
    assert_eq!(before_zero.abs_duration(), Duration::from_millis(500));

    assert_eq!(Nanos::from(Duration::MAX), Nanos::new(i64::MAX));
}
