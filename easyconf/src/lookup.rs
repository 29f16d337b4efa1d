//! Environment-like key/value sources

use std::collections::{BTreeMap, HashMap};
use std::env;

/// A read-only key/value source queried by exact key.
///
/// The populator treats `None` and `Some("")` the same way: the key is absent.
pub trait Lookup {
    /// Returns the value stored under `key`, if any.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The process environment.
///
/// Values that are not valid UTF-8 are converted lossily, so they still count
/// as present and fail coercion instead of silently looking unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Lookup for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        // such keys can never name a variable
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<S: std::hash::BuildHasher> Lookup for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Lookup for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Lookup for [(&str, &str)] {
    fn lookup(&self, key: &str) -> Option<String> {
        self.iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string())
    }
}

impl<const N: usize> Lookup for [(&str, &str); N] {
    fn lookup(&self, key: &str) -> Option<String> {
        self.as_slice().lookup(key)
    }
}

impl Lookup for Vec<(String, String)> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

/// Adapts a closure into a [`Lookup`].
///
/// ```rust
/// use easyconf::{from_fn, Lookup};
///
/// let lookup = from_fn(|key| (key == "PORT").then(|| "8080".to_string()));
/// assert_eq!(lookup.lookup("PORT").as_deref(), Some("8080"));
/// assert_eq!(lookup.lookup("HOST"), None);
/// ```
pub fn from_fn<F>(f: F) -> FnLookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    FnLookup(f)
}

/// A [`Lookup`] backed by a closure. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnLookup<F>(F);

impl<F> Lookup for FnLookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }
}

impl<F> std::fmt::Debug for FnLookup<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnLookup").finish_non_exhaustive()
    }
}
