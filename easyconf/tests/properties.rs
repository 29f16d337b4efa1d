//! Property tests for value coercion

use easyconf::{ConfigError, FromEnvStr, Populate};
use proptest::prelude::*;

#[derive(Debug, Default, Populate)]
struct Sample {
    #[conf(env = "NAME", required)]
    name: String,

    #[conf(env = "COUNT")]
    count: u32,

    #[conf(env = "OFFSET")]
    offset: i64,
}

proptest! {
    /// Property: integers survive a trip through their decimal form
    #[test]
    fn prop_signed_round_trip(v in any::<i64>()) {
        prop_assert_eq!(i64::from_env_str(&v.to_string()).unwrap(), v);
    }

    #[test]
    fn prop_unsigned_round_trip(v in any::<u16>()) {
        prop_assert_eq!(u16::from_env_str(&v.to_string()).unwrap(), v);
    }

    /// Property: values outside the declared width are rejected
    #[test]
    fn prop_narrow_width_overflow(v in (i64::from(i8::MAX) + 1)..i64::MAX) {
        prop_assert!(i8::from_env_str(&v.to_string()).is_err());
    }

    #[test]
    fn prop_bool_round_trip(v in any::<bool>()) {
        prop_assert_eq!(bool::from_env_str(&v.to_string()).unwrap(), v);
        prop_assert_eq!(bool::from_env_str(&v.to_string().to_uppercase()).unwrap(), v);
    }

    /// Property: finite floats survive a trip through their shortest form
    #[test]
    fn prop_float_round_trip(v in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        prop_assert_eq!(f64::from_env_str(&v.to_string()).unwrap(), v);
    }

    /// Property: coercing a joined list equals coercing each segment in order
    #[test]
    fn prop_list_equals_segments(values in prop::collection::vec(any::<i32>(), 1..16)) {
        let segments: Vec<String> = values.iter().map(ToString::to_string).collect();
        let joined = segments.join(",");

        let whole = Vec::<i32>::from_env_str(&joined).unwrap();
        let each: Vec<i32> = segments
            .iter()
            .map(|s| i32::from_env_str(s).unwrap())
            .collect();

        prop_assert_eq!(whole.len(), segments.len());
        prop_assert_eq!(whole, each);
    }

    /// Property: string lists keep every segment verbatim
    #[test]
    fn prop_string_list_verbatim(values in prop::collection::vec("[^,]{0,8}", 1..8)) {
        let joined = values.join(",");
        prop_assume!(!joined.is_empty());

        let parsed = Vec::<String>::from_env_str(&joined).unwrap();
        prop_assert_eq!(parsed, values);
    }

    /// Property: a missing required key fails regardless of its siblings
    #[test]
    fn prop_required_missing_regardless_of_siblings(
        count in proptest::option::of(any::<u32>()),
        offset in proptest::option::of(any::<i64>()),
    ) {
        let mut env: Vec<(String, String)> = Vec::new();
        if let Some(count) = count {
            env.push(("COUNT".to_string(), count.to_string()));
        }
        if let Some(offset) = offset {
            env.push(("OFFSET".to_string(), offset.to_string()));
        }

        let err = Sample::from_lookup(&env).unwrap_err();
        prop_assert_eq!(err, ConfigError::missing("NAME"));
    }

    /// Property: absent optional fields keep their previous value
    #[test]
    fn prop_absent_keeps_previous(count in any::<u32>(), offset in any::<i64>()) {
        let mut sample = Sample {
            name: String::new(),
            count,
            offset,
        };
        sample.populate_from(&[("NAME", "svc")]).unwrap();

        prop_assert_eq!(sample.name.as_str(), "svc");
        prop_assert_eq!(sample.count, count);
        prop_assert_eq!(sample.offset, offset);
    }
}
