//! Configuration shapes declared at runtime
//!
//! [`Shape`] is the builder counterpart of `#[derive(Populate)]` for shapes that
//! are only known at runtime. Fields are registered in order with a source key
//! and a type name, and population fills a [`Value::Record`] tree following the
//! same rules as the derive macro.
//!
//! ```rust
//! use easyconf::dynamic::{Shape, Value};
//!
//! let shape = Shape::new()
//!     .required("name", "NAME", "String")
//!     .field("port", "PORT", "u16")
//!     .field("tags", "TAGS", "Vec<String>")
//!     .nested("inner", Shape::new().field("x", "X", "i32"));
//!
//! let env = [("NAME", "svc"), ("TAGS", "a,b"), ("X", "5")];
//! let mut config = shape.zero()?;
//! shape.populate_from(&mut config, &env)?;
//!
//! assert_eq!(config.get("name"), Some(&Value::Str("svc".into())));
//! assert_eq!(config.get("port"), Some(&Value::Uint(0)));
//! assert_eq!(config.get("inner").and_then(|v| v.get("x")), Some(&Value::Int(5)));
//! # Ok::<(), easyconf::ConfigError>(())
//! ```

use std::collections::BTreeMap;

use crate::coerce::FromEnvStr;
use crate::de;
use crate::error::{CoerceError, ConfigError};
use crate::lookup::{Lookup, ProcessEnv};

/// A dynamically typed configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string value.
    Str(String),

    /// A signed integer of any declared width.
    Int(i128),

    /// An unsigned integer of any declared width.
    Uint(u128),

    /// A boolean value.
    Bool(bool),

    /// A floating-point value of any declared width.
    Float(f64),

    /// A comma-separated list.
    List(Vec<Value>),

    /// A record of named fields.
    Record(BTreeMap<String, Value>),
}

impl Value {
    /// An empty record.
    pub fn record() -> Self {
        Self::Record(BTreeMap::new())
    }

    /// Field `name` of a record; `None` for other values.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Record(fields) => fields.get(name),
            _ => None,
        }
    }

    /// Short name of the value's variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "signed integer",
            Self::Uint(_) => "unsigned integer",
            Self::Bool(_) => "boolean",
            Self::Float(_) => "float",
            Self::List(_) => "list",
            Self::Record(_) => "record",
        }
    }
}

/// Resolved field type.
#[derive(Debug, Clone, PartialEq)]
enum Kind {
    Str,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    Bool,
    F32,
    F64,
    List(Box<Kind>),
}

impl Kind {
    fn parse(type_name: &str) -> Result<Self, ConfigError> {
        let name = type_name.trim();
        if let Some(inner) = name.strip_prefix("Vec<").and_then(|s| s.strip_suffix('>')) {
            return Self::parse(inner)
                .map(|kind| Self::List(Box::new(kind)))
                .map_err(|_| ConfigError::unsupported(type_name));
        }

        let kind = match name {
            "String" | "string" | "str" => Self::Str,
            "i8" => Self::I8,
            "i16" => Self::I16,
            "i32" => Self::I32,
            "i64" => Self::I64,
            "i128" => Self::I128,
            "isize" => Self::Isize,
            "u8" => Self::U8,
            "u16" => Self::U16,
            "u32" => Self::U32,
            "u64" => Self::U64,
            "u128" => Self::U128,
            "usize" => Self::Usize,
            "bool" => Self::Bool,
            "f32" => Self::F32,
            "f64" => Self::F64,
            _ => return Err(ConfigError::unsupported(type_name)),
        };
        Ok(kind)
    }

    fn zero(&self) -> Value {
        match self {
            Self::Str => Value::Str(String::new()),
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::I128 | Self::Isize => Value::Int(0),
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::U128 | Self::Usize => {
                Value::Uint(0)
            }
            Self::Bool => Value::Bool(false),
            Self::F32 | Self::F64 => Value::Float(0.0),
            Self::List(_) => Value::List(Vec::new()),
        }
    }

    fn coerce(&self, raw: &str) -> Result<Value, CoerceError> {
        let value = match self {
            Self::Str => Value::Str(String::from_env_str(raw)?),
            Self::I8 => Value::Int(i8::from_env_str(raw)?.into()),
            Self::I16 => Value::Int(i16::from_env_str(raw)?.into()),
            Self::I32 => Value::Int(i32::from_env_str(raw)?.into()),
            Self::I64 => Value::Int(i64::from_env_str(raw)?.into()),
            Self::I128 => Value::Int(i128::from_env_str(raw)?),
            Self::Isize => Value::Int(isize::from_env_str(raw)? as i128),
            Self::U8 => Value::Uint(u8::from_env_str(raw)?.into()),
            Self::U16 => Value::Uint(u16::from_env_str(raw)?.into()),
            Self::U32 => Value::Uint(u32::from_env_str(raw)?.into()),
            Self::U64 => Value::Uint(u64::from_env_str(raw)?.into()),
            Self::U128 => Value::Uint(u128::from_env_str(raw)?),
            Self::Usize => Value::Uint(usize::from_env_str(raw)? as u128),
            Self::Bool => Value::Bool(bool::from_env_str(raw)?),
            Self::F32 => Value::Float(f32::from_env_str(raw)?.into()),
            Self::F64 => Value::Float(f64::from_env_str(raw)?),
            Self::List(inner) => Value::List(
                raw.split(',')
                    .map(|segment| inner.coerce(segment))
                    .collect::<Result<_, _>>()?,
            ),
        };
        Ok(value)
    }
}

#[derive(Debug, Clone)]
enum Field {
    Leaf {
        name: String,
        key: String,
        type_name: String,
        required: bool,
    },
    Nested {
        name: String,
        shape: Shape,
    },
}

/// A configuration shape registered field by field.
///
/// Type names are resolved during population, so an unsupported type only
/// fails once the walk reaches a present value for that field.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    fields: Vec<Field>,
}

impl Shape {
    /// An empty shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an optional field read from `key`.
    pub fn field(
        mut self,
        name: impl Into<String>,
        key: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        self.fields.push(Field::Leaf {
            name: name.into(),
            key: key.into(),
            type_name: type_name.into(),
            required: false,
        });
        self
    }

    /// Register a field that must be present and non-empty.
    pub fn required(
        mut self,
        name: impl Into<String>,
        key: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        self.fields.push(Field::Leaf {
            name: name.into(),
            key: key.into(),
            type_name: type_name.into(),
            required: true,
        });
        self
    }

    /// Register a nested record. It has no key of its own.
    pub fn nested(mut self, name: impl Into<String>, shape: Shape) -> Self {
        self.fields.push(Field::Nested {
            name: name.into(),
            shape,
        });
        self
    }

    /// A record holding the zero value of every field.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedType`] if a field's type name is not recognised.
    pub fn zero(&self) -> Result<Value, ConfigError> {
        let mut fields = BTreeMap::new();
        for field in &self.fields {
            match field {
                Field::Leaf {
                    name, type_name, ..
                } => {
                    fields.insert(name.clone(), Kind::parse(type_name)?.zero());
                }
                Field::Nested { name, shape } => {
                    fields.insert(name.clone(), shape.zero()?);
                }
            }
        }
        Ok(Value::Record(fields))
    }

    /// Populate `target` from `lookup`.
    ///
    /// Fields missing from the record are inserted when a value is found;
    /// nested records missing from it are created empty.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidTarget`] if `target`, or the current value of a
    ///   nested field, is not a record
    /// - [`ConfigError::MissingRequired`] for an absent or empty required key
    /// - [`ConfigError::TypeCoercion`] for a value that does not parse
    /// - [`ConfigError::UnsupportedType`] for an unrecognised type name
    pub fn populate_from<L>(&self, target: &mut Value, lookup: &L) -> Result<(), ConfigError>
    where
        L: Lookup + ?Sized,
    {
        let Value::Record(record) = target else {
            return Err(ConfigError::invalid_target(target.kind_name()));
        };

        for field in &self.fields {
            match field {
                Field::Nested { name, shape } => {
                    let entry = record.entry(name.clone()).or_insert_with(Value::record);
                    shape.populate_from(entry, lookup)?;
                }
                Field::Leaf {
                    name,
                    key,
                    type_name,
                    required,
                } => {
                    if let Some(raw) = de::read(lookup, key, *required)? {
                        let value = Kind::parse(type_name)?
                            .coerce(&raw)
                            .map_err(|e| ConfigError::coercion(key.as_str(), e))?;
                        record.insert(name.clone(), value);
                    }
                }
            }
        }
        Ok(())
    }

    /// Populate `target` from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Shape::populate_from`].
    pub fn populate(&self, target: &mut Value) -> Result<(), ConfigError> {
        self.populate_from(target, &ProcessEnv)
    }
}
