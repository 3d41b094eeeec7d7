use super::*;

#[test]
fn endpoints_map_to_length_and_zero() {
    assert_eq!(progress_to_offset(0.0, 200.0), 200.0);
    assert_eq!(progress_to_offset(1.0, 200.0), 0.0);
    assert_eq!(progress_to_offset(0.5, 200.0), 100.0);
}

#[test]
fn out_of_range_progress_is_not_clamped() {
    assert_eq!(progress_to_offset(1.5, 200.0), -100.0);
    assert_eq!(progress_to_offset(-0.5, 200.0), 300.0);
    assert_eq!(offset_to_progress(-100.0, 200.0), 1.5);
}

#[test]
fn round_trip_within_tolerance() {
    for length in [1.0, 3.7, 200.0, 1234.5678] {
        for i in 0..=100 {
            let p = i as f64 / 100.0;
            let back = offset_to_progress(progress_to_offset(p, length), length);
            assert!((back - p).abs() <= 1e-6, "p={p} length={length} back={back}");
        }
    }
}

#[test]
fn progress_is_rounded_to_six_decimals() {
    let p = offset_to_progress(100.0 + 1e-9, 200.0);
    assert_eq!(p, 0.5);
    assert_eq!(offset_to_progress(200.0 / 3.0, 200.0), 0.666667);
}
