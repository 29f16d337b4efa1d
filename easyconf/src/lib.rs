//! Populate typed configuration structs from environment variables
//!
//! `easyconf` fills an existing configuration value in place. Each field names
//! the environment variable it is read from, may be marked `required`, and is
//! converted from the raw string into its declared type. Nested records are
//! walked recursively.
//!
//! # Features
//!
//! - **Declarative**: `#[derive(Populate)]` generates the field walk
//! - **In place**: fields without a value keep whatever the caller put there
//! - **Typed**: strings, integers of every width, booleans, floats and
//!   comma-separated lists of those
//! - **Pluggable source**: anything implementing [`Lookup`], the process
//!   environment by default
//! - **Runtime shapes**: [`dynamic::Shape`] for configurations only known at runtime
//!
//! # Value Parsing
//!
//! - Strings: taken verbatim
//! - Integers: base 10, rejected when out of range for the field's width
//! - Booleans: `true`/`false`/`t`/`f` in any case, or `1`/`0`
//! - Floats: decimal or scientific notation, plus `inf` and `nan`
//! - Lists (`Vec<T>`): split on `,` without trimming, each segment parsed as `T`
//!
//! An empty value is treated exactly like an unset one, for every type. As a
//! consequence an empty list cannot be expressed through the environment.
//!
//! # Example
//!
//! ```rust
//! use easyconf::Populate;
//!
//! #[derive(Debug, Default, Populate)]
//! struct Config {
//!     #[conf(env = "NAME", required)]
//!     pub name: String,
//!
//!     #[conf(env = "PORT")]
//!     pub port: i32,
//!
//!     #[conf(env = "TAGS")]
//!     pub tags: Vec<String>,
//! }
//!
//! # fn main() -> Result<(), easyconf::ConfigError> {
//! let env = [("NAME", "svc"), ("TAGS", "a,b,c")];
//!
//! let mut config = Config::default();
//! config.populate_from(&env)?;
//!
//! assert_eq!(config.name, "svc");
//! assert_eq!(config.port, 0);
//! assert_eq!(config.tags, vec!["a", "b", "c"]);
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[conf(env = "KEY")]`
//!
//! Read the field from `KEY`. Unset or empty leaves the field untouched.
//!
//! ## `#[conf(env = "KEY", required)]`
//!
//! Fail with [`ConfigError::MissingRequired`] when `KEY` is unset or empty.
//!
//! ## `#[conf(nested)]`
//!
//! The field is itself a [`Populate`] record. It has no key of its own and is
//! always walked.
//!
//! ```rust
//! # use easyconf::Populate;
//! #[derive(Default, Populate)]
//! struct Database {
//!     #[conf(env = "DB_HOST")]
//!     pub host: String,
//! }
//!
//! #[derive(Default, Populate)]
//! struct Config {
//!     #[conf(nested)]
//!     pub database: Database,
//! }
//! # let config = Config::from_lookup(&[("DB_HOST", "db.internal")]).unwrap();
//! # assert_eq!(config.database.host, "db.internal");
//! ```
//!
//! ## `#[conf(env = "KEY", deserializer = "function")]`
//!
//! Parse the value with `function(&str) -> Result<FieldType, E>` instead of the
//! built-in rules. `E` only needs to implement `Display`; failures are reported
//! as [`ConfigError::TypeCoercion`].
//!
//! ```rust
//! # use easyconf::Populate;
//! #[derive(Default, Populate)]
//! struct Config {
//!     #[conf(env = "LIMITS", deserializer = "serde_json::from_str")]
//!     pub limits: std::collections::HashMap<String, u32>,
//! }
//! # let config = Config::from_lookup(&[("LIMITS", r#"{"rps":10}"#)]).unwrap();
//! # assert_eq!(config.limits["rps"], 10);
//! ```
//!
//! # Errors
//!
//! Population stops at the first error. There is no rollback: fields assigned
//! before the failing field keep their new values.

mod coerce;
#[doc(hidden)]
pub mod de;
pub mod dynamic;
mod error;
mod lookup;
mod populate;

pub use coerce::FromEnvStr;
pub use easyconf_derive::Populate;
pub use error::{CoerceError, ConfigError};
pub use lookup::{from_fn, FnLookup, Lookup, ProcessEnv};
pub use populate::Populate;
