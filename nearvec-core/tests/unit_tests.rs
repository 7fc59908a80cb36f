//! Unit tests for nearvec-core

use nearvec_core::{BucketSchedule, Error};

mod error_tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = Error::dimension_mismatch(768, 512);
        assert_eq!(
            err.to_string(),
            "dimension mismatch: expected 768 components, got 512"
        );

        let err = Error::width_mismatch(32, 64);
        assert!(err.to_string().contains("32-bit"));
        assert!(err.to_string().contains("64-bit"));
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(
            Error::dimension_mismatch(1, 2).error_code(),
            "DIMENSION_MISMATCH"
        );
        assert_eq!(
            Error::invalid_argument("bits").error_code(),
            "INVALID_ARGUMENT"
        );
    }

    #[test]
    fn contract_violations_are_not_recoverable() {
        assert!(!Error::dimension_mismatch(1, 2).is_recoverable());
        assert!(!Error::invalid_argument("bits").is_recoverable());
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn schedule_roundtrips_through_serde() {
        let schedule = BucketSchedule::new([(100, 0), (1000, 4), (usize::MAX, 16)]).unwrap();
        let json = serde_json::to_string(&schedule).unwrap();
        let decoded: BucketSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(schedule, decoded);
    }

    #[test]
    fn single_entry_schedule_is_constant() {
        let schedule = BucketSchedule::new([(usize::MAX, 8)]).unwrap();
        for size in [0, 1, 10_000, 1_000_000] {
            assert_eq!(schedule.bits_for(size), 8);
        }
    }
}
