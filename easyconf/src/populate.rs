//! The [`Populate`] trait implemented by `#[derive(Populate)]`

use crate::error::ConfigError;
use crate::lookup::{Lookup, ProcessEnv};

/// A configuration record that can be filled in place from a [`Lookup`].
///
/// Usually derived. Fields are visited depth-first in declaration order and the
/// walk stops at the first error; fields assigned before the failure keep their
/// new values.
pub trait Populate {
    /// Populate `self` from `lookup`.
    ///
    /// # Errors
    ///
    /// - A `required` field has no present, non-empty value
    /// - A present value cannot be coerced into the field's type
    fn populate_from<L>(&mut self, lookup: &L) -> Result<(), ConfigError>
    where
        L: Lookup + ?Sized;

    /// Populate `self` from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Populate::populate_from`].
    fn populate(&mut self) -> Result<(), ConfigError> {
        self.populate_from(&ProcessEnv)
    }

    /// Build a record from its default value and populate it from `lookup`.
    ///
    /// # Errors
    ///
    /// See [`Populate::populate_from`].
    fn from_lookup<L>(lookup: &L) -> Result<Self, ConfigError>
    where
        Self: Default + Sized,
        L: Lookup + ?Sized,
    {
        let mut config = Self::default();
        config.populate_from(lookup)?;
        Ok(config)
    }

    /// Build a record from its default value and populate it from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// See [`Populate::populate_from`].
    fn from_env() -> Result<Self, ConfigError>
    where
        Self: Default + Sized,
    {
        Self::from_lookup(&ProcessEnv)
    }
}

impl<T: Populate + ?Sized> Populate for Box<T> {
    fn populate_from<L>(&mut self, lookup: &L) -> Result<(), ConfigError>
    where
        L: Lookup + ?Sized,
    {
        (**self).populate_from(lookup)
    }
}
