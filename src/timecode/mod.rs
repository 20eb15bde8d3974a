#![doc = r#"
SMPTE timecode values

A [`Timecode`] is a frame index bound to a [`Rate`] and a drop-frame flag.
The hours, minutes, seconds and frames you see in `HH:MM:SS:FF` are computed
from the frame index whenever they are needed; they are never stored.

# Drop-frame labels

With drop-frame active, labels `;00` and `;01` (or `;00` to `;03` at 59.94) do
not exist in any minute that is not a multiple of ten:

```text
00:00:59;23  ->  00:01:00;02     (23.976, two codes skipped)
00:09:59;23  ->  00:10:00;00     (minute 10, nothing skipped)
```

Drop-frame is active when the timecode is flagged drop-frame *and* its rate
skips codes. A drop-frame flag on a rate like [`Rate::FPS_24`] only changes
the separator.
"#]

mod parse;
pub use parse::*;

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{
    Components, FrameIndex, Nanos, Rate,
    drop_frame::{count_dropped_codes, count_frames_to_drop},
};

#[doc = r#"
A timecode value, either a duration or a position in some media.

# Example
```rust
# use timecodex::prelude::*;
let tc = Timecode::parse("00:01:02;23", Rate::FPS_23_976).unwrap();
assert_eq!(tc.frame(), 1509);
assert_eq!(tc.to_string(), "00:01:02;23");

let tc = Timecode::from_frame_index(2878, Rate::FPS_23_976, true);
assert_eq!(tc.to_string(), "00:02:00;02");
```

Comparisons and arithmetic only look at frame indices. Adding a timecode counted
at one rate to a timecode at another is allowed, but the result is meaningless.
"#]
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timecode {
    frame: i64,
    rate: Rate,
    drop_frame: bool,
}

impl Timecode {
    fn new(frame: i64, rate: Rate, drop_frame: bool) -> Self {
        #[cfg(feature = "tracing")]
        if drop_frame && !rate.is_drop_frame() {
            tracing::warn!(
                "Drop-frame requested at {} fps, which skips no codes. Only the separator will change.",
                rate
            );
        }
        Self {
            frame,
            rate,
            drop_frame,
        }
    }

    /// Create a timecode from a frame index.
    pub fn from_frame_index(frame: i64, rate: Rate, drop_frame: bool) -> Self {
        Self::new(frame, rate, drop_frame)
    }

    /// Create a timecode from hours, minutes, seconds and frames.
    ///
    /// This never fails. With drop-frame active, a frame code that the count
    /// skips (such as `00:02:00;00` at 23.976) is moved up to the first code
    /// that exists in that second, `00:02:00;02`.
    pub fn from_components(components: Components, rate: Rate, drop_frame: bool) -> Self {
        let mut components = components;
        let drop = rate.drop_count() as i64;
        let drops_codes = drop_frame && drop > 0;

        if drops_codes
            && components.minutes % 10 != 0
            && components.seconds == 0
            && components.frames < drop
        {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                "Frame code {:02}:{:02}:{:02};{} is skipped at {} fps drop-frame. Using ;{} instead.",
                components.hours,
                components.minutes,
                components.seconds,
                components.frames,
                rate,
                drop
            );
            components.frames = drop;
        }

        let mut frame = components.raw_frames(rate);
        if drops_codes {
            frame -= count_dropped_codes(components.total_minutes(), rate);
        }

        Self::new(frame, rate, drop_frame)
    }

    /// Create a timecode from a presentation duration, rounding down to a whole frame.
    ///
    /// The duration is measured at the exact rate, so 10 minutes at 29.97 is not
    /// 18000 frames but 17982. The timecode is drop-frame if the rate is.
    pub fn from_presentation_duration(duration: impl Into<Nanos>, rate: Rate) -> Self {
        Self::new(rate.frames_in(duration.into()), rate, rate.is_drop_frame())
    }

    /// The frame index of this timecode
    pub const fn frame(&self) -> i64 {
        self.frame
    }

    /// The rate this timecode is counted at
    pub const fn rate(&self) -> Rate {
        self.rate
    }

    /// True if this timecode is labelled drop-frame
    pub const fn is_drop_frame(&self) -> bool {
        self.drop_frame
    }

    /// The separator written before the frame field
    pub const fn separator(&self) -> Separator {
        if self.drop_frame {
            Separator::DropFrame
        } else {
            Separator::NonDropFrame
        }
    }

    const fn drops_codes(&self) -> bool {
        self.drop_frame && self.rate.is_drop_frame()
    }

    /// Returns the hours, minutes, seconds and frames of this timecode.
    pub fn components(&self) -> Components {
        if !self.drops_codes() || self.frame < 0 {
            return Components::decompose(self.frame, self.rate);
        }

        // The skipped codes decide which minute we land in, and the minute decides
        // how many codes were skipped. Iterate until the two agree.
        let mut dropped = count_frames_to_drop(self.frame, self.rate);
        loop {
            let components = Components::decompose(self.frame + dropped, self.rate);
            let settled = count_dropped_codes(components.total_minutes(), self.rate);
            if settled == dropped {
                return components;
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(
                frame = self.frame,
                dropped,
                settled,
                "drop-frame correction crossed another minute"
            );
            dropped = settled;
        }
    }

    /// Returns a new timecode `frames` later, at the same rate.
    pub const fn add_frames(&self, frames: i64) -> Self {
        Self {
            frame: self.frame + frames,
            rate: self.rate,
            drop_frame: self.drop_frame,
        }
    }

    /// The wall-clock time this timecode represents, at the exact rate.
    ///
    /// With drop-frame, this drifts from the time written in the timecode and
    /// snaps back every ten minutes.
    pub const fn presentation_duration(&self) -> Nanos {
        self.rate.presentation_time(self.frame)
    }
}

impl FrameIndex for Timecode {
    fn frame_index(&self) -> i64 {
        self.frame
    }
}

impl fmt::Display for Timecode {
    /// Hours are padded to two digits but never wrapped, so from 100 hours on
    /// (and before frame 0) the text no longer fits the shape that
    /// [`Timecode::parse`] accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Components {
            hours,
            minutes,
            seconds,
            frames,
        } = self.components();
        write!(
            f,
            "{hours:02}:{minutes:02}:{seconds:02}{}{frames:0width$}",
            self.separator(),
            width = self.rate.frame_digits()
        )
    }
}

impl<F: FrameIndex> PartialEq<F> for Timecode {
    fn eq(&self, other: &F) -> bool {
        self.frame == other.frame_index()
    }
}

impl Eq for Timecode {}

impl<F: FrameIndex> PartialOrd<F> for Timecode {
    fn partial_cmp(&self, other: &F) -> Option<Ordering> {
        Some(self.frame.cmp(&other.frame_index()))
    }
}

impl Ord for Timecode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frame.cmp(&other.frame)
    }
}

impl Hash for Timecode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.frame.hash(state);
    }
}

impl<F: FrameIndex> Add<F> for Timecode {
    type Output = Timecode;
    fn add(self, rhs: F) -> Self::Output {
        self.add_frames(rhs.frame_index())
    }
}

impl<F: FrameIndex> AddAssign<F> for Timecode {
    fn add_assign(&mut self, rhs: F) {
        self.frame += rhs.frame_index();
    }
}

impl<F: FrameIndex> Sub<F> for Timecode {
    type Output = Timecode;
    fn sub(self, rhs: F) -> Self::Output {
        self.add_frames(-rhs.frame_index())
    }
}

impl<F: FrameIndex> SubAssign<F> for Timecode {
    fn sub_assign(&mut self, rhs: F) {
        self.frame -= rhs.frame_index();
    }
}
