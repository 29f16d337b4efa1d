//! Field population functions called by macro-generated code

use crate::coerce::FromEnvStr;
use crate::error::{CoerceError, ConfigError};
use crate::lookup::Lookup;

/// Read `key` from `lookup`, treating an empty value as absent.
///
/// Returns `Ok(None)` for an absent optional key and
/// [`ConfigError::MissingRequired`] for an absent required one.
#[doc(hidden)]
pub fn read<L>(lookup: &L, key: &str, required: bool) -> Result<Option<String>, ConfigError>
where
    L: Lookup + ?Sized,
{
    let value = lookup.lookup(key).filter(|v| !v.is_empty());

    #[cfg(feature = "tracing")]
    tracing::trace!(key, present = value.is_some(), required, "resolved environment key");

    if required && value.is_none() {
        #[cfg(feature = "tracing")]
        tracing::debug!(key, "required environment variable is missing");
        return Err(ConfigError::missing(key));
    }
    Ok(value)
}

/// Populate `slot` from `key` using its [`FromEnvStr`] rule.
///
/// An absent or empty value leaves `slot` untouched.
#[doc(hidden)]
pub fn fill<T, L>(lookup: &L, key: &str, required: bool, slot: &mut T) -> Result<(), ConfigError>
where
    T: FromEnvStr,
    L: Lookup + ?Sized,
{
    if let Some(raw) = read(lookup, key, required)? {
        *slot = T::from_env_str(&raw).map_err(|e| coercion_failed(key, e))?;
    }
    Ok(())
}

/// Populate `slot` from `key` using a custom deserializer function.
///
/// Used for `#[conf(deserializer = "...")]` fields.
#[doc(hidden)]
pub fn fill_with<T, E, F, L>(
    lookup: &L,
    key: &str,
    required: bool,
    slot: &mut T,
    deserializer: F,
) -> Result<(), ConfigError>
where
    E: std::fmt::Display,
    F: FnOnce(&str) -> Result<T, E>,
    L: Lookup + ?Sized,
{
    if let Some(raw) = read(lookup, key, required)? {
        *slot = deserializer(&raw)
            .map_err(|e| coercion_failed(key, CoerceError::new::<T>(raw, e)))?;
    }
    Ok(())
}

fn coercion_failed(key: &str, err: CoerceError) -> ConfigError {
    #[cfg(feature = "tracing")]
    tracing::debug!(key, type_name = %err.type_name, "environment value failed to coerce");
    ConfigError::coercion(key, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_treats_empty_as_absent() {
        let env = [("EMPTY", "")];
        assert_eq!(read(&env, "EMPTY", false).unwrap(), None);
        assert_eq!(
            read(&env, "EMPTY", true).unwrap_err(),
            ConfigError::missing("EMPTY")
        );
    }

    #[test]
    fn test_fill_assigns_present_value() {
        let env = [("PORT", "8080")];
        let mut port: u16 = 0;
        fill(&env, "PORT", false, &mut port).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_fill_leaves_absent_untouched() {
        let env: [(&str, &str); 0] = [];
        let mut port: u16 = 1234;
        fill(&env, "PORT", false, &mut port).unwrap();
        assert_eq!(port, 1234);
    }

    #[test]
    fn test_fill_required_missing() {
        let env: [(&str, &str); 0] = [];
        let mut name = String::from("initial");
        let err = fill(&env, "NAME", true, &mut name).unwrap_err();
        assert_eq!(err, ConfigError::missing("NAME"));
        assert_eq!(name, "initial");
    }

    #[test]
    fn test_fill_coercion_error() {
        let env = [("PORT", "not-a-number")];
        let mut port: i32 = 0;
        match fill(&env, "PORT", false, &mut port) {
            Err(ConfigError::TypeCoercion {
                key,
                value,
                type_name,
                ..
            }) => {
                assert_eq!(key, "PORT");
                assert_eq!(value, "not-a-number");
                assert_eq!(type_name, "i32");
            }
            other => panic!("Expected TypeCoercion error, got {other:?}"),
        }
        assert_eq!(port, 0);
    }

    #[test]
    fn test_fill_with_custom_deserializer() {
        let env = [("RATIO", "3/4")];
        let mut ratio = (0u32, 0u32);
        fill_with(&env, "RATIO", true, &mut ratio, |s: &str| -> Result<(u32, u32), String> {
            let (a, b) = s.split_once('/').ok_or("missing '/'")?;
            Ok((
                a.parse::<u32>().map_err(|e| e.to_string())?,
                b.parse::<u32>().map_err(|e| e.to_string())?,
            ))
        })
        .unwrap();
        assert_eq!(ratio, (3, 4));
    }

    #[test]
    fn test_fill_with_error_maps_to_coercion() {
        let env = [("TAGS", "not json")];
        let mut tags: Vec<String> = Vec::new();
        let err = fill_with(&env, "TAGS", false, &mut tags, |s: &str| {
            serde_json::from_str::<Vec<String>>(s)
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TypeCoercion { ref key, ref value, .. } if key == "TAGS" && value == "not json"
        ));
    }
}
