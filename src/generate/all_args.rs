use proc_macro2::TokenStream;
use quote::quote;
use syn::{Item, parse_quote};

use super::{Generator, assemble};
use crate::collect::{Directive, Field, Target};

/// Emits a single `Type::new(...)` taking one argument per eligible field,
/// in declaration order, and returning the fully initialized instance.
pub struct AllArgsGenerator;

impl Generator for AllArgsGenerator {
    fn generate(&self, target: &Target) -> Vec<Item> {
        let ident = &target.ident;
        let vis = &target.vis;
        let (impl_generics, ty_generics, where_clause) = target.generics.split_for_impl();

        let params: Vec<TokenStream> = target
            .fields
            .iter()
            .filter(|field| takes_parameter(field))
            .map(|field| {
                let name = &field.name;
                let ty = &field.ty;
                quote!(#name: #ty)
            })
            .collect();

        let body = assemble(target, |field| {
            if takes_parameter(field) {
                let name = &field.name;
                Some(quote!(#name))
            } else {
                None
            }
        });

        let item: Item = parse_quote! {
            impl #impl_generics #ident #ty_generics #where_clause {
                #vis fn new(#(#params),*) -> #ident #ty_generics {
                    #body
                }
            }
        };
        vec![item]
    }
}

/// `builder_only` fields default here; `init` fields become a
/// post-assignment call rather than a parameter.
fn takes_parameter(field: &Field) -> bool {
    !matches!(field.directive, Directive::BuilderOnly | Directive::Init(_))
}
