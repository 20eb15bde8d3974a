use std::time::Duration;

use pretty_assertions::assert_eq;
use timecodex::prelude::*;

/// Counts one frame forward the slow way, then skips any code dropped at `rate`.
fn brute_force_add_one(mut c: Components, rate: Rate, drop_frame: bool) -> Components {
    c.frames += 1;
    if c.frames >= rate.nominal() as i64 {
        c.frames -= rate.nominal() as i64;
        c.seconds += 1;
        if c.seconds >= 60 {
            c.seconds -= 60;
            c.minutes += 1;
            if c.minutes >= 60 {
                c.minutes -= 60;
                c.hours += 1;
            }
        }
    }
    let drop = rate.drop_count() as i64;
    if drop_frame && c.minutes % 10 > 0 && c.seconds == 0 && c.frames < drop {
        c.frames = drop;
    }
    c
}

/// Walks `iterations` frames forward from `start`, checking every step against
/// a brute-force count and checking that every label parses back to its frame.
fn walk(start: &str, rate: Rate, iterations: usize) {
    let mut prev = Timecode::parse(start, rate).unwrap();
    let mut prev_components = prev.components();
    let drop_frame = prev.is_drop_frame();

    for _ in 0..iterations {
        let tc = prev + Frame(1);
        let components = tc.components();
        assert_eq!(
            components,
            brute_force_add_one(prev_components, rate, drop_frame),
            "adding 1 frame to {prev}"
        );

        let text = tc.to_string();
        let parsed = Timecode::parse(&text, rate).unwrap();
        assert_eq!(parsed.frame(), tc.frame(), "timecode {text}");
        assert!(parsed > prev, "{text} should come after {prev}");

        prev = tc;
        prev_components = components;
    }
}

#[test]
fn test_sequence_non_drop_frame() {
    walk("00:00:00:00", Rate::FPS_24, 100_000);
    walk("03:59:59:00", Rate::FPS_24, 100_000);
    walk("00:00:00:00", Rate::FPS_60, 50_000);
}

#[test]
fn test_sequence_drop_frame_23_976() {
    walk("00:00:00;00", Rate::FPS_23_976, 100_000);
    walk("03:59:59;00", Rate::FPS_23_976, 100_000);
    walk("01:05:59;23", Rate::FPS_23_976, 100_000);
}

#[test]
fn test_sequence_drop_frame_29_97() {
    walk("00:00:00;00", Rate::FPS_29_97, 100_000);
    walk("23:59:00;02", Rate::FPS_29_97, 10_000);
}

#[test]
fn test_sequence_drop_frame_59_94() {
    walk("00:00:00;00", Rate::FPS_59_94, 100_000);
    walk("14:55:41;22", Rate::FPS_59_94, 10_000);
}

#[test]
fn test_sequence_derived_rates() {
    // 119.88 drops 8 codes per incident
    let hfr = Rate::from_fraction(120_000, 1001);
    walk("00:00:00;000", hfr, 100_000);

    // 47.952 drops 3
    let double_film = Rate::from_fraction(48_000, 1001);
    walk("00:08:59;00", double_film, 50_000);

    // 2.5 fps counts 3 codes a second and drops 2 of them per incident
    let slow = Rate::from_fraction(5, 2);
    walk("00:00:00;0", slow, 20_000);
}

#[test]
fn test_round_trip_by_frame_index() {
    for rate in Rate::BUILT_IN {
        for drop_frame in [false, true] {
            for frame in (0..5_000_000).step_by(9_973) {
                let text = Timecode::from_frame_index(frame, rate, drop_frame).to_string();
                let parsed = Timecode::parse(&text, rate).unwrap();
                assert_eq!(parsed.frame(), frame, "{text} at {rate}");
            }
        }
    }
}

#[test]
fn test_add_frames_matches_from_frame_index() {
    let rate = Rate::FPS_29_97;
    let mut tc = Timecode::from_frame_index(0, rate, true);
    for frame in 1..40_000 {
        tc = tc.add_frames(1);
        assert_eq!(
            tc.to_string(),
            Timecode::from_frame_index(frame, rate, true).to_string()
        );
    }
}

#[test]
fn test_known_frames() {
    let df = |frame: i64| Timecode::from_frame_index(frame, Rate::FPS_23_976, true).to_string();
    assert_eq!(df(0), "00:00:00;00");
    assert_eq!(df(2878), "00:02:00;02");
    assert_eq!(df(4318), "00:03:00;04");

    let tc = Timecode::parse("14:56:59;59", Rate::FPS_59_94).unwrap();
    assert_eq!(tc.add_frames(1).to_string(), "14:57:00;04");
    assert_eq!(
        Timecode::from_frame_index(3600, Rate::FPS_59_94, true).to_string(),
        "00:01:00;04"
    );

    let add_one = |text: &str| {
        (Timecode::parse(text, Rate::FPS_23_976).unwrap() + Frame(1)).to_string()
    };
    assert_eq!(add_one("00:00:59;23"), "00:01:00;02");
    assert_eq!(add_one("00:03:59;23"), "00:04:00;02");
    assert_eq!(add_one("00:01:59;23"), "00:02:00;02");
    assert_eq!(add_one("00:09:59;23"), "00:10:00;00");
}

#[test]
fn test_frame_field_width() {
    let rate = Rate::from_fraction(120, 1);
    assert_eq!(
        Timecode::from_frame_index(5, rate, false).to_string(),
        "00:00:00:005"
    );
    assert_eq!(
        Timecode::from_frame_index(120 * 61 + 42, rate, false).to_string(),
        "00:01:01:042"
    );
}

#[test]
fn test_hours_do_not_wrap() {
    let tc = Timecode::from_frame_index(24 * 3600 * 24, Rate::FPS_24, false);
    assert_eq!(tc.to_string(), "24:00:00:00");
    assert_eq!(Timecode::parse("24:00:00:00", Rate::FPS_24).unwrap(), tc);

    // three hour digits print fine but are not a parseable timecode
    let tc = Timecode::from_frame_index(100 * 3600 * 24, Rate::FPS_24, false);
    assert_eq!(tc.to_string(), "100:00:00:00");
    assert!(matches!(
        Timecode::parse(&tc.to_string(), Rate::FPS_24),
        Err(ParseError::InvalidFormat(_))
    ));
    let tc = Timecode::from_frame_index(99 * 3600 * 24 + 5, Rate::FPS_24, false);
    assert_eq!(Timecode::parse("99:00:00:05", Rate::FPS_24).unwrap(), tc);
}

#[test]
fn test_from_presentation_duration() {
    let cases = [
        (Duration::from_secs(120), "00:02:00:00"),
        (Duration::from_secs(600), "00:10:00:00"),
        (Duration::from_secs(6), "00:00:06:00"),
        (Duration::from_secs(6 * 3600) + Duration::from_millis(500), "06:00:00:12"),
    ];
    for (duration, expected) in cases {
        let tc = Timecode::from_presentation_duration(duration, Rate::FPS_24);
        assert_eq!(tc.to_string(), expected, "{duration:?}");
    }

    // a drop-frame rate gives a drop-frame timecode
    let tc = Timecode::from_presentation_duration(Duration::from_secs(600), Rate::FPS_29_97);
    assert_eq!(tc.frame(), 17_982);
    assert_eq!(tc.to_string(), "00:10:00;00");
}

#[test]
fn test_presentation_duration_round_trip() {
    for rate in Rate::BUILT_IN {
        for frame in (0..2_000_000).step_by(7_919) {
            let tc = Timecode::from_frame_index(frame, rate, rate.is_drop_frame());
            let back = Timecode::from_presentation_duration(tc.presentation_duration(), rate);
            assert_eq!(back, tc, "{tc} at {rate}");
        }
    }
}
