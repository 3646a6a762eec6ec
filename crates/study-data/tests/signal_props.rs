//! Property tests for request body parsing.
//!
//! Whatever the client sends, parsing must not fail.

use proptest::prelude::*;
use study_data::signal::{optional_signal, parse_body, signal_from_map};

proptest! {
    #[test]
    fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let map = parse_body(&bytes);
        let _ = signal_from_map(&map);
    }

    #[test]
    fn numeric_fields_round_trip(rate in 0.0f64..1.0, minutes in 0u32..600) {
        let body = format!(
            r#"{{"completion_rate": {rate}, "average_session_time": {minutes}}}"#
        );
        let signal = optional_signal(body.as_bytes()).expect("object body");

        prop_assert!((signal.completion_rate() - rate).abs() < 1e-12);
        prop_assert_eq!(signal.average_session_time_minutes(), minutes as f64);
    }
}
