//! Derive macro implementation for easyconf

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;

use attrs::{FieldAttrs, FieldRole};

/// `Populate` derive macro
///
/// Implements `easyconf::Populate` for a struct with named fields. Fields are
/// populated in declaration order.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[conf(env = "KEY")]`: Read the field from `KEY`
/// - `#[conf(env = "KEY", required)]`: Fail when `KEY` is unset or empty
/// - `#[conf(nested)]`: Populate the field as a nested record
/// - `#[conf(env = "KEY", deserializer = "func")]`: Parse with a custom function
///
/// Fields without `#[conf]` are left untouched.
///
/// # Example
///
/// See the `easyconf` crate documentation for usage examples.
#[proc_macro_derive(Populate, attributes(conf))]
pub fn derive_populate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;

    if let Some(attr) = input.attrs.iter().find(|attr| attr.path().is_ident("conf")) {
        return Err(syn::Error::new_spanned(
            attr,
            "conf attributes are only supported on fields",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Populate only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Populate only supports structs",
            ));
        }
    };

    let mut steps = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };

        let step = match FieldAttrs::from_field(field)?.into_role(field)? {
            FieldRole::Skip => continue,
            FieldRole::Nested => quote! {
                ::easyconf::Populate::populate_from(&mut self.#field_name, __lookup)?;
            },
            FieldRole::Env {
                key,
                required,
                deserializer: None,
            } => quote! {
                ::easyconf::de::fill(__lookup, #key, #required, &mut self.#field_name)?;
            },
            FieldRole::Env {
                key,
                required,
                deserializer: Some(func),
            } => quote! {
                ::easyconf::de::fill_with(
                    __lookup,
                    #key,
                    #required,
                    &mut self.#field_name,
                    |__raw: &str| #func(__raw),
                )?;
            },
        };
        steps.push(step);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::easyconf::Populate for #struct_name #ty_generics #where_clause {
            fn populate_from<__L>(
                &mut self,
                __lookup: &__L,
            ) -> ::core::result::Result<(), ::easyconf::ConfigError>
            where
                __L: ::easyconf::Lookup + ?::core::marker::Sized,
            {
                #(#steps)*
                ::core::result::Result::Ok(())
            }
        }
    })
}
