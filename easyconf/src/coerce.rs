//! Conversion of raw environment strings into typed field values

use crate::error::CoerceError;

/// Conversion from a raw environment value into a field type.
///
/// Implemented for the supported primitive types, for `Vec<T>` (comma-separated
/// lists) and for `Option<T>`. A field whose type does not implement this trait
/// cannot be annotated with `#[conf(env = "...")]` unless it names a
/// `deserializer`.
pub trait FromEnvStr: Sized {
    /// Parse `raw` into `Self`.
    ///
    /// `raw` is never empty when called by the populator; empty values are
    /// treated as absent before coercion.
    fn from_env_str(raw: &str) -> Result<Self, CoerceError>;
}

impl FromEnvStr for String {
    fn from_env_str(raw: &str) -> Result<Self, CoerceError> {
        Ok(raw.to_string())
    }
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromEnvStr for $ty {
                fn from_env_str(raw: &str) -> Result<Self, CoerceError> {
                    raw.parse::<$ty>().map_err(|e| CoerceError::new::<$ty>(raw, e))
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize);
impl_integer!(u8, u16, u32, u64, u128, usize);

/// `true`/`false`/`t`/`f` in any case, or `1`/`0`.
impl FromEnvStr for bool {
    fn from_env_str(raw: &str) -> Result<Self, CoerceError> {
        const TRUE: [&str; 3] = ["true", "t", "1"];
        const FALSE: [&str; 3] = ["false", "f", "0"];

        if TRUE.iter().any(|s| raw.eq_ignore_ascii_case(s)) {
            Ok(true)
        } else if FALSE.iter().any(|s| raw.eq_ignore_ascii_case(s)) {
            Ok(false)
        } else {
            Err(CoerceError::new::<bool>(
                raw,
                "expected one of true, false, t, f, 1, 0",
            ))
        }
    }
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromEnvStr for $ty {
                fn from_env_str(raw: &str) -> Result<Self, CoerceError> {
                    let value = raw.parse::<$ty>().map_err(|e| CoerceError::new::<$ty>(raw, e))?;
                    // finite literals that round to infinity overflowed the width
                    if value.is_infinite() && !is_infinity_literal(raw) {
                        return Err(CoerceError::new::<$ty>(raw, "value out of range"));
                    }
                    Ok(value)
                }
            }
        )*
    };
}

impl_float!(f32, f64);

/// Comma-separated list. Segments are neither trimmed nor unescaped.
impl<T: FromEnvStr> FromEnvStr for Vec<T> {
    fn from_env_str(raw: &str) -> Result<Self, CoerceError> {
        raw.split(',').map(T::from_env_str).collect()
    }
}

impl<T: FromEnvStr> FromEnvStr for Option<T> {
    fn from_env_str(raw: &str) -> Result<Self, CoerceError> {
        T::from_env_str(raw).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_verbatim() {
        assert_eq!(String::from_env_str(" a b ").unwrap(), " a b ");
        assert_eq!(String::from_env_str("x,y").unwrap(), "x,y");
    }

    #[test]
    fn test_signed_integers() {
        assert_eq!(i32::from_env_str("42").unwrap(), 42);
        assert_eq!(i32::from_env_str("-42").unwrap(), -42);
        assert_eq!(i64::from_env_str("+7").unwrap(), 7);
        assert_eq!(i8::from_env_str("-128").unwrap(), i8::MIN);
        assert!(i32::from_env_str("4.2").is_err());
        assert!(i32::from_env_str(" 42").is_err());
    }

    #[test]
    fn test_integer_overflow_per_width() {
        assert_eq!(i8::from_env_str("127").unwrap(), 127);
        let err = i8::from_env_str("128").unwrap_err();
        assert_eq!(err.value, "128");
        assert_eq!(err.type_name, "i8");

        assert_eq!(u16::from_env_str("65535").unwrap(), u16::MAX);
        assert!(u16::from_env_str("65536").is_err());
        assert!(u64::from_env_str("18446744073709551616").is_err());
    }

    #[test]
    fn test_unsigned_rejects_negative() {
        let err = u32::from_env_str("-1").unwrap_err();
        assert_eq!(err.type_name, "u32");
        assert_eq!(usize::from_env_str("100").unwrap(), 100);
    }

    #[test]
    fn test_bool_vocabulary() {
        for raw in ["true", "TRUE", "True", "t", "T", "1"] {
            assert!(bool::from_env_str(raw).unwrap(), "{raw}");
        }
        for raw in ["false", "FALSE", "False", "f", "F", "0"] {
            assert!(!bool::from_env_str(raw).unwrap(), "{raw}");
        }
        for raw in ["yes", "no", "on", "2", "tru"] {
            assert!(bool::from_env_str(raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn test_floats() {
        assert_eq!(f64::from_env_str("2.75").unwrap(), 2.75);
        assert_eq!(f64::from_env_str("1e3").unwrap(), 1000.0);
        assert_eq!(f32::from_env_str("-2.5").unwrap(), -2.5);
        assert!(f64::from_env_str("inf").unwrap().is_infinite());
        assert!(f64::from_env_str("-Infinity").unwrap().is_infinite());
        assert!(f64::from_env_str("NaN").unwrap().is_nan());
        assert!(f64::from_env_str("pi").is_err());
    }

    #[test]
    fn test_float_overflow_per_width() {
        assert!(f64::from_env_str("1e39").is_ok());
        let err = f32::from_env_str("1e39").unwrap_err();
        assert_eq!(err.message, "value out of range");
        assert!(f64::from_env_str("1e400").is_err());
    }

    #[test]
    fn test_list_splits_without_trimming() {
        assert_eq!(
            Vec::<String>::from_env_str("a, b,c").unwrap(),
            vec!["a", " b", "c"]
        );
        assert_eq!(Vec::<i32>::from_env_str("1,2,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(Vec::<String>::from_env_str("a,,b").unwrap(), vec!["a", "", "b"]);
    }

    #[test]
    fn test_list_reports_failing_segment() {
        let err = Vec::<u8>::from_env_str("1,300,3").unwrap_err();
        assert_eq!(err.value, "300");
        assert_eq!(err.type_name, "u8");
    }

    #[test]
    fn test_option_wraps() {
        assert_eq!(Option::<u16>::from_env_str("80").unwrap(), Some(80));
        assert!(Option::<u16>::from_env_str("x").is_err());
    }
}
