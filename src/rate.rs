#![doc = r#"
Frame rates for SMPTE timecode

# Nominal vs. exact rates

Every rate has two faces:

1. **Nominal** - The whole number of frame codes counted per second of timecode text.
   23.976 fps footage still counts `00` through `23` in its frame field, so its nominal rate is 24.
2. **Exact** - The true playback rate as a fraction (`24000/1001`). This is only used to
   figure out how much wall-clock time a number of frames occupies.

# Drop-frame

Counting 24 codes per second while only 23.976 frames actually play means the
timecode slowly runs ahead of the clock. Drop-frame timecode corrects this by
skipping the first few frame codes of every minute, except minutes that are a
multiple of ten. No picture is ever dropped; only labels are skipped.
"#]

use core::fmt;

use crate::Nanos;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Drop incidents in one hour of timecode: 9 out of every 10 minutes.
const DROP_INCIDENTS_PER_HOUR: u64 = 54;

#[doc = r#"
A frame rate used to count and label frames.

`Rate` is a small `Copy` value. Use one of the built-in broadcast rates, or
derive one from a fraction with [`Rate::from_fraction`].

# Example
```rust
# use timecodex::prelude::*;
let rate = Rate::from_fraction(30000, 1001);

assert_eq!(rate, Rate::FPS_29_97);
assert_eq!(rate.nominal(), 30);
assert_eq!(rate.drop_count(), 2);
assert_eq!(rate.to_string(), "29.97");
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RateFraction", into = "RateFraction")
)]
pub struct Rate {
    nominal: u32,
    drop: u32,
    num: u32,
    den: u32,
}

impl Rate {
    /// 24000/1001 fps, counted as 24 with 2 codes dropped per incident
    pub const FPS_23_976: Self = Self::new_unchecked(24, 2, 24000, 1001);
    /// 24 fps - Standard film rate
    pub const FPS_24: Self = Self::new_unchecked(24, 0, 24, 1);
    /// 30000/1001 fps - NTSC color television, 2 codes dropped per incident
    pub const FPS_29_97: Self = Self::new_unchecked(30, 2, 30000, 1001);
    /// 30 fps
    pub const FPS_30: Self = Self::new_unchecked(30, 0, 30, 1);
    /// 60000/1001 fps, 4 codes dropped per incident
    pub const FPS_59_94: Self = Self::new_unchecked(60, 4, 60000, 1001);
    /// 60 fps
    pub const FPS_60: Self = Self::new_unchecked(60, 0, 60, 1);

    /// All built-in broadcast rates
    pub const BUILT_IN: [Self; 6] = [
        Self::FPS_23_976,
        Self::FPS_24,
        Self::FPS_29_97,
        Self::FPS_30,
        Self::FPS_59_94,
        Self::FPS_60,
    ];

    const fn new_unchecked(nominal: u32, drop: u32, num: u32, den: u32) -> Self {
        Self {
            nominal,
            drop,
            num,
            den,
        }
    }

    /// Create a rate from an exact `num/den` frames per second.
    ///
    /// Fractions matching a built-in rate (after reduction) return that rate.
    /// Anything else gets a nominal rate of `ceil(num / den)` and a drop count of
    /// `round((nominal * 3600 - num * 3600 / den) / 54)`.
    ///
    /// A fractional rate does not imply drop-frame: if the drift per hour rounds
    /// to fewer than one code per incident, [`Rate::drop_count`] is 0.
    ///
    /// An incident never skips a whole second of codes, so the drop count is
    /// at most `nominal - 1`. Below 1 fps that leaves nothing to drop.
    ///
    /// Zero is not a frame rate. A zero numerator or denominator is read as 1.
    pub const fn from_fraction(num: u32, den: u32) -> Self {
        let num = if num == 0 { 1 } else { num };
        let den = if den == 0 { 1 } else { den };

        let divisor = gcd(num, den);
        let num = num / divisor;
        let den = den / divisor;

        let mut i = 0;
        while i < Self::BUILT_IN.len() {
            let rate = Self::BUILT_IN[i];
            if rate.num == num && rate.den == den {
                return rate;
            }
            i += 1;
        }

        let nominal = num.div_ceil(den);

        // how far the nominal count runs ahead of the exact rate in one hour,
        // scaled by `den` to stay in integers
        let excess = nominal as u64 * 3600 * den as u64 - num as u64 * 3600;
        let divisor = DROP_INCIDENTS_PER_HOUR * den as u64;
        let drop = ((excess * 2 + divisor) / (divisor * 2)) as u32;
        let drop = if drop < nominal { drop } else { nominal - 1 };

        Self::new_unchecked(nominal, drop, num, den)
    }

    /// The number of frame codes counted per second of timecode.
    pub const fn nominal(&self) -> u32 {
        self.nominal
    }

    /// The number of frame codes skipped at each drop incident.
    ///
    /// Zero if this rate has no drop-frame notation.
    pub const fn drop_count(&self) -> u32 {
        self.drop
    }

    /// True if timecodes at this rate skip codes when labelled drop-frame
    pub const fn is_drop_frame(&self) -> bool {
        self.drop > 0
    }

    /// Numerator of the exact playback rate
    pub const fn num(&self) -> u32 {
        self.num
    }

    /// Denominator of the exact playback rate
    pub const fn den(&self) -> u32 {
        self.den
    }

    /// Get the exact playback rate as a floating-point value.
    pub const fn as_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// The width of the zero-padded frame field when printed.
    ///
    /// This is the number of digits in the largest frame code, `nominal - 1`.
    pub const fn frame_digits(&self) -> usize {
        match self.nominal.saturating_sub(1).checked_ilog10() {
            Some(log) => log as usize + 1,
            None => 1,
        }
    }

    /// The playback duration of a single frame, rounded up to the nanosecond.
    pub const fn frame_duration(&self) -> Nanos {
        self.presentation_time(1)
    }

    /// The playback time taken by `frames` frames at the exact rate.
    ///
    /// Rounds up to the next whole nanosecond, so that
    /// [`Rate::frames_in`] gives back `frames`.
    pub const fn presentation_time(&self, frames: i64) -> Nanos {
        let scaled = frames as i128 * self.den as i128 * NANOS_PER_SECOND;
        let num = self.num as i128;
        let mut nanos = scaled.div_euclid(num);
        if scaled.rem_euclid(num) != 0 {
            nanos += 1;
        }
        Nanos::new(nanos as i64)
    }

    /// The number of whole frames played in `duration`, rounded down.
    pub const fn frames_in(&self, duration: Nanos) -> i64 {
        let scaled = duration.ns() as i128 * self.num as i128;
        scaled.div_euclid(self.den as i128 * NANOS_PER_SECOND) as i64
    }
}

impl Default for Rate {
    fn default() -> Self {
        Self::FPS_24
    }
}

impl fmt::Display for Rate {
    /// Formats the exact rate to at most three decimal places, without trailing zeros.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let den = self.den as u64;
        let millis = (self.num as u64 * 2000 + den) / (den * 2);
        let whole = millis / 1000;
        let mut frac = millis % 1000;
        if frac == 0 {
            return write!(f, "{whole}");
        }
        let mut digits: usize = 3;
        while frac % 10 == 0 {
            frac /= 10;
            digits -= 1;
        }
        write!(f, "{whole}.{frac:0digits$}")
    }
}

/// The serialized form of a [`Rate`]: only the exact fraction is stored, and
/// the nominal rate and drop count are derived again on the way back in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RateFraction {
    num: u32,
    den: u32,
}

#[cfg(feature = "serde")]
impl From<RateFraction> for Rate {
    fn from(value: RateFraction) -> Self {
        Self::from_fraction(value.num, value.den)
    }
}

#[cfg(feature = "serde")]
impl From<Rate> for RateFraction {
    fn from(value: Rate) -> Self {
        Self {
            num: value.num,
            den: value.den,
        }
    }
}

const fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
