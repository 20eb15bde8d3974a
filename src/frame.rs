use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Sub, SubAssign};

#[doc = r#"
Anything that resolves to a single frame index.

Implemented by [`Frame`] and [`Timecode`](crate::Timecode), so either can be
added to or compared with the other.

Frame indices carry no rate. Mixing values counted at different rates is
allowed, and gives a number that means nothing at either rate.
"#]
pub trait FrameIndex {
    /// The frame index, counted from zero
    fn frame_index(&self) -> i64;
}

impl<T: FrameIndex + ?Sized> FrameIndex for &T {
    fn frame_index(&self) -> i64 {
        (**self).frame_index()
    }
}

#[doc = r#"
A bare frame index within some media.

# Example
```rust
# use timecodex::prelude::*;
let tc = Timecode::parse("00:01:02:23", Rate::FPS_24).unwrap();

let later = tc + Frame(3);
assert_eq!(later.to_string(), "00:01:03:02");
assert_eq!(later, Frame(1514));
```
"#]
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub i64);

impl Frame {
    /// Zero.
    pub const ZERO: Self = Self(0);
}

impl FrameIndex for Frame {
    fn frame_index(&self) -> i64 {
        self.0
    }
}

impl From<i64> for Frame {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Frame> for i64 {
    fn from(value: Frame) -> Self {
        value.0
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<F: FrameIndex> PartialEq<F> for Frame {
    fn eq(&self, other: &F) -> bool {
        self.0 == other.frame_index()
    }
}

impl Eq for Frame {}

impl<F: FrameIndex> PartialOrd<F> for Frame {
    fn partial_cmp(&self, other: &F) -> Option<Ordering> {
        Some(self.0.cmp(&other.frame_index()))
    }
}

impl Ord for Frame {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Hash for Frame {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<F: FrameIndex> Add<F> for Frame {
    type Output = Frame;
    fn add(self, rhs: F) -> Self::Output {
        Frame(self.0 + rhs.frame_index())
    }
}

impl<F: FrameIndex> AddAssign<F> for Frame {
    fn add_assign(&mut self, rhs: F) {
        self.0 += rhs.frame_index();
    }
}

impl<F: FrameIndex> Sub<F> for Frame {
    type Output = Frame;
    fn sub(self, rhs: F) -> Self::Output {
        Frame(self.0 - rhs.frame_index())
    }
}

impl<F: FrameIndex> SubAssign<F> for Frame {
    fn sub_assign(&mut self, rhs: F) {
        self.0 -= rhs.frame_index();
    }
}
