//! Attribute parsing for `#[conf(...)]` annotations.
//!
//! This module extracts and validates configuration attributes from struct fields
//! during macro expansion.

use syn::{ExprPath, Field, LitStr};

/// Parsed `#[conf(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Environment variable the field is read from.
    pub env: Option<LitStr>,

    /// Fail when the variable is unset or empty.
    pub required: bool,

    /// The field is a nested record walked recursively.
    pub nested: bool,

    /// Custom deserializer function replacing the built-in coercion.
    pub deserializer: Option<ExprPath>,
}

/// How the generated code treats one field.
#[derive(Debug)]
pub enum FieldRole {
    /// No `#[conf]` attribute; population never touches the field.
    Skip,

    /// Read from an environment variable.
    Env {
        key: LitStr,
        required: bool,
        deserializer: Option<ExprPath>,
    },

    /// Recurse into the field.
    Nested,
}

impl FieldAttrs {
    /// Extract and parse `#[conf(...)]` attributes from a struct field.
    ///
    /// Attributes may be split across several `#[conf]` annotations on the same
    /// field. Unknown or repeated keys are errors.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("conf") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // env = "KEY"
                if meta.path.is_ident("env") {
                    if attrs.env.is_some() {
                        return Err(meta.error("duplicate `env` attribute"));
                    }
                    let key: LitStr = meta.value()?.parse()?;
                    if key.value().is_empty() {
                        return Err(syn::Error::new_spanned(
                            &key,
                            "`env` key must not be empty",
                        ));
                    }
                    attrs.env = Some(key);
                    return Ok(());
                }

                if meta.path.is_ident("required") {
                    if attrs.required {
                        return Err(meta.error("duplicate `required` attribute"));
                    }
                    attrs.required = true;
                    return Ok(());
                }

                if meta.path.is_ident("nested") {
                    if attrs.nested {
                        return Err(meta.error("duplicate `nested` attribute"));
                    }
                    attrs.nested = true;
                    return Ok(());
                }

                // deserializer = "function::path"
                if meta.path.is_ident("deserializer") {
                    if attrs.deserializer.is_some() {
                        return Err(meta.error("duplicate `deserializer` attribute"));
                    }
                    let func: LitStr = meta.value()?.parse()?;
                    attrs.deserializer = Some(func.parse()?);
                    return Ok(());
                }

                Err(meta.error("unsupported conf attribute"))
            })?;
        }

        Ok(attrs)
    }

    /// Validate attribute combinations and decide the field's role.
    pub fn into_role(self, field: &Field) -> syn::Result<FieldRole> {
        if self.nested {
            if self.env.is_some() || self.required || self.deserializer.is_some() {
                return Err(syn::Error::new_spanned(
                    field,
                    "`nested` fields have no key of their own and cannot be combined with `env`, `required` or `deserializer`",
                ));
            }
            return Ok(FieldRole::Nested);
        }

        match self.env {
            Some(key) => Ok(FieldRole::Env {
                key,
                required: self.required,
                deserializer: self.deserializer,
            }),
            None if self.required => Err(syn::Error::new_spanned(
                field,
                "`required` needs an `env` key to check",
            )),
            None if self.deserializer.is_some() => Err(syn::Error::new_spanned(
                field,
                "`deserializer` needs an `env` key to read from",
            )),
            None => Ok(FieldRole::Skip),
        }
    }
}
