use data_capture::{Capture, CaptureError};
use proptest::prelude::*;

const CEILING: u32 = 200;

proptest! {
    #[test]
    fn total_is_number_of_accepted_inserts(values in prop::collection::vec(-5i64..250, 0..300)) {
        let mut capture = Capture::with_max_value(CEILING);
        let mut accepted = 0u64;
        for value in &values {
            if capture.add(*value).is_ok() {
                accepted += 1;
            }
        }
        prop_assert_eq!(capture.total(), accepted);
        let summed: u64 = (0..=u64::from(CEILING)).map(|v| capture.count(v)).sum();
        prop_assert_eq!(summed, accepted);
    }

    #[test]
    fn rejections_follow_rule_order(value in -1_000i64..1_000) {
        let mut capture = Capture::with_max_value(CEILING);
        match capture.add(value) {
            Ok(()) => prop_assert!((1..=i64::from(CEILING)).contains(&value)),
            Err(CaptureError::OutOfRange { .. }) => prop_assert!(value < 1),
            Err(CaptureError::DomainExceeded { ceiling, .. }) => {
                prop_assert_eq!(ceiling, CEILING);
                prop_assert!(value > i64::from(CEILING));
            }
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }

    #[test]
    fn between_is_difference_of_less(
        values in prop::collection::vec(1u32..=CEILING, 0..200),
        a in 1u32..=CEILING + 20,
        b in 1u32..=CEILING + 20,
    ) {
        let mut capture = Capture::with_max_value(CEILING);
        for value in &values {
            capture.add(*value).unwrap();
        }
        let stats = capture.build();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let expected = stats.less(high + 1).unwrap() - stats.less(low).unwrap();
        prop_assert_eq!(stats.between(a, b).unwrap(), expected);
    }
}
