use crate::Rate;

/// The hours, minutes, seconds and frames of a timecode.
///
/// Components are a view computed from a [`Timecode`](crate::Timecode), or
/// the raw input to [`Timecode::from_components`](crate::Timecode::from_components).
/// Any components are accepted as input, including frame codes a drop-frame
/// count would have skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Components {
    /// Hour component of the time code.
    ///
    /// Not wrapped at 24. Negative only for frame indices before zero.
    pub hours: i64,
    /// Minute component of the time code (0-59).
    pub minutes: i64,
    /// Second component of the time code (0-59).
    pub seconds: i64,
    /// Frame number within the current second.
    ///
    /// Valid range depends on the rate: `0..nominal`.
    pub frames: i64,
}

impl Components {
    /// Create components from hours, minutes, seconds and frames
    pub const fn new(hours: i64, minutes: i64, seconds: i64, frames: i64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// Split a frame count into components, without any drop-frame correction.
    pub(crate) const fn decompose(frames: i64, rate: Rate) -> Self {
        let nominal = rate.nominal() as i64;

        let total_seconds = frames.div_euclid(nominal);
        let total_minutes = total_seconds.div_euclid(60);

        Self {
            hours: total_minutes.div_euclid(60),
            minutes: total_minutes.rem_euclid(60),
            seconds: total_seconds.rem_euclid(60),
            frames: frames.rem_euclid(nominal),
        }
    }

    /// Minutes elapsed since `00:00:00`, counting hours.
    pub const fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }

    /// The frame count these components label, without any drop-frame correction.
    pub(crate) const fn raw_frames(&self, rate: Rate) -> i64 {
        (self.total_minutes() * 60 + self.seconds) * rate.nominal() as i64 + self.frames
    }
}
