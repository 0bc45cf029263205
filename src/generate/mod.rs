//! Construction strategies.
//!
//! Each strategy turns the collected field list into generated items. The
//! set is closed: adding a strategy means adding a [`Strategy`] case and a
//! new [`Generator`] implementation, never open-ended dispatch.

mod all_args;
mod builder;

pub use all_args::AllArgsGenerator;
pub use builder::BuilderGenerator;

use std::fmt;

use proc_macro2::TokenStream;
use quote::quote;
use syn::Item;

use crate::collect::{Directive, Field, Shape, Target};
use crate::error::Error;

/// A requested construction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    AllArgs,
    Builder,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::AllArgs => "all-args",
            Strategy::Builder => "builder",
        }
    }

    /// Parse one strategy identifier.
    pub fn parse(name: &str) -> Result<Strategy, Error> {
        match name {
            "all-args" => Ok(Strategy::AllArgs),
            "builder" => Ok(Strategy::Builder),
            other => Err(Error::UnknownConstructorType {
                given: other.to_string(),
            }),
        }
    }

    /// Parse a comma-separated strategy list.
    ///
    /// Runs before any source is loaded: an unknown name or an empty list
    /// fails here, without touching the package.
    pub fn parse_list(list: &str) -> Result<Vec<Strategy>, Error> {
        let names: Vec<&str> = list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            return Err(Error::UnknownConstructorType {
                given: String::new(),
            });
        }
        names.into_iter().map(Strategy::parse).collect()
    }

    pub fn generator(&self) -> &'static dyn Generator {
        match self {
            Strategy::AllArgs => &AllArgsGenerator,
            Strategy::Builder => &BuilderGenerator,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One construction strategy over a collected target.
pub trait Generator {
    fn generate(&self, target: &Target) -> Vec<Item>;
}

/// Assemble the target instance: a struct literal in which every member the
/// strategy does not supply is filled with `Default::default()`, followed
/// by the `init` directive calls in field order.
///
/// `value_of` returns the supplying expression for a field, or `None` if
/// this strategy leaves the field to its default.
pub(crate) fn assemble(
    target: &Target,
    value_of: impl Fn(&Field) -> Option<TokenStream>,
) -> TokenStream {
    let literal = literal(target, &value_of);
    let init_calls: Vec<&syn::Ident> = target
        .fields
        .iter()
        .filter_map(|field| match &field.directive {
            Directive::Init(method) => Some(method),
            _ => None,
        })
        .collect();

    if init_calls.is_empty() {
        literal
    } else {
        quote! {
            let mut value = #literal;
            #(value.#init_calls();)*
            value
        }
    }
}

fn literal(target: &Target, value_of: &impl Fn(&Field) -> Option<TokenStream>) -> TokenStream {
    let ident = &target.ident;
    match target.shape {
        Shape::Unit => quote!(#ident),
        Shape::Named => {
            // Merge constructible and skipped members back into declaration order.
            let mut entries: Vec<(usize, TokenStream)> = Vec::new();
            for field in &target.fields {
                let name = &field.name;
                let value = value_of(field).unwrap_or_else(default_value);
                entries.push((field.index, quote!(#name: #value)));
            }
            for member in &target.skipped {
                if let Some(name) = &member.name {
                    let value = default_value();
                    entries.push((member.index, quote!(#name: #value)));
                }
            }
            entries.sort_by_key(|(index, _)| *index);
            let entries = entries.into_iter().map(|(_, tokens)| tokens);
            quote!(#ident { #(#entries),* })
        }
        Shape::Tuple => {
            let mut slots: Vec<TokenStream> =
                (0..target.arity()).map(|_| default_value()).collect();
            for field in &target.fields {
                if let Some(value) = value_of(field) {
                    slots[field.index] = value;
                }
            }
            quote!(#ident(#(#slots),*))
        }
    }
}

fn default_value() -> TokenStream {
    quote!(Default::default())
}
