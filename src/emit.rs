//! The generated unit and its rendering.
//!
//! Generation produces structure (`syn` items); this module is the one
//! place that turns it into text. The rendered file opens with the
//! provenance header and `use super::*;` so it can be declared as a
//! sibling module of the package it was generated from
//! (`mod point_gen;`), with the target type and field types in scope.

use syn::parse_quote;

/// One complete generated source unit.
///
/// Owned by the emission root until rendered; immutable afterward.
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    /// Name of the package the unit was generated from
    pub package: String,
    /// Deterministic provenance comment (no timestamps), first line of the
    /// rendered file
    pub header: String,
    /// Generated declarations, in request order
    pub items: Vec<syn::Item>,
}

impl GeneratedUnit {
    /// Render to formatted source text.
    pub fn render(&self) -> String {
        let mut items: Vec<syn::Item> = Vec::with_capacity(self.items.len() + 1);
        items.push(parse_quote!(
            use super::*;
        ));
        items.extend(self.items.iter().cloned());

        let file = syn::File {
            shebang: None,
            attrs: Vec::new(),
            items,
        };
        format!("{}\n\n{}", self.header, prettyplease::unparse(&file))
    }
}
