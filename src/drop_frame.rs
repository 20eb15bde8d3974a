#![doc = r#"
Drop-frame arithmetic

A drop-frame timecode skips [`Rate::drop_count`] frame codes at the start of
every minute, except minutes that are a multiple of 10. Each such minute
boundary is a *drop incident*.

Two questions need answering to convert between frame indices and timecode text:

- Parsing: given the minutes written in a timecode, how many codes were skipped
  before it? See [`count_drop_incidents`].
- Formatting: given a frame index, how many codes must be skipped to reach its
  label? See [`count_frames_to_drop`].
"#]

use crate::Rate;

/// Counts the drop incidents that have happened once `total_minutes` whole
/// minutes of timecode have elapsed.
///
/// This is the number of minutes in `1..=total_minutes` that are not a
/// multiple of 10. Non-positive inputs have no incidents.
///
/// ```rust
/// # use timecodex::drop_frame::count_drop_incidents;
/// assert_eq!(count_drop_incidents(9), 9);
/// assert_eq!(count_drop_incidents(10), 9);
/// assert_eq!(count_drop_incidents(11), 10);
/// ```
pub const fn count_drop_incidents(total_minutes: i64) -> i64 {
    if total_minutes <= 0 {
        return 0;
    }
    total_minutes - total_minutes / 10
}

/// The number of frame codes skipped by the time `total_minutes` whole minutes
/// of timecode have elapsed at `rate`.
pub const fn count_dropped_codes(total_minutes: i64, rate: Rate) -> i64 {
    count_drop_incidents(total_minutes) * rate.drop_count() as i64
}

/// Counts the frame codes that must be skipped to label frame `frames`.
///
/// Adding the result to `frames` gives the position of its label in a count
/// without skips. Skipped codes push the count forward, which can cross more
/// minute boundaries, so minutes are consumed one at a time and every drop
/// incident inflates what is left to consume.
///
/// Returns 0 for rates without drop-frame, and for negative frames.
/// [`Rate`] keeps its drop count below its nominal rate, so every minute
/// consumed shrinks what is left and the count always finishes.
pub const fn count_frames_to_drop(frames: i64, rate: Rate) -> i64 {
    let drop = rate.drop_count() as i64;
    if drop == 0 {
        return 0;
    }
    let frames_per_minute = rate.nominal() as i64 * 60;

    let mut remaining = frames;
    let mut minutes = 0;
    let mut dropped = 0;

    loop {
        remaining -= frames_per_minute;
        if remaining < 0 {
            break;
        }
        minutes += 1;
        if minutes % 10 != 0 {
            dropped += drop;
            remaining += drop;
        }
    }

    dropped
}
