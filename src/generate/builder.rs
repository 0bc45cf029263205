use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Item, parse_quote};

use super::{Generator, assemble};
use crate::collect::{Directive, Field, Target};

/// Emits a `TypeBuilder`: a mutable accumulator with one chainable setter
/// per staged field and a consuming `build()` finalizer.
///
/// Every staged field is seeded with `Default::default()` by
/// `TypeBuilder::new()`, so fields never set retain their default. Because
/// `build` takes `self` by value, finalizing the same builder twice does
/// not compile.
pub struct BuilderGenerator;

impl Generator for BuilderGenerator {
    fn generate(&self, target: &Target) -> Vec<Item> {
        let ident = &target.ident;
        let vis = &target.vis;
        let builder_ident = format_ident!("{}Builder", ident);
        let generics = &target.generics;
        let (impl_generics, ty_generics, where_clause) = target.generics.split_for_impl();

        let staged: Vec<&Field> = target.fields.iter().filter(|field| is_staged(field)).collect();

        let struct_fields: Vec<TokenStream> = staged
            .iter()
            .map(|field| {
                let name = &field.name;
                let ty = &field.ty;
                quote!(#name: #ty)
            })
            .collect();
        let builder_struct: Item = parse_quote! {
            #vis struct #builder_ident #generics #where_clause {
                #(#struct_fields),*
            }
        };

        let seeds: Vec<TokenStream> = staged
            .iter()
            .map(|field| {
                let name = &field.name;
                quote!(#name: Default::default())
            })
            .collect();

        let setters: Vec<TokenStream> = staged
            .iter()
            .map(|field| {
                let name = &field.name;
                let ty = &field.ty;
                let setter = setter_ident(name);
                quote! {
                    #vis fn #setter(mut self, #name: #ty) -> #builder_ident #ty_generics {
                        self.#name = #name;
                        self
                    }
                }
            })
            .collect();

        let body = assemble(target, |field| {
            if is_staged(field) {
                let name = &field.name;
                Some(quote!(self.#name))
            } else {
                None
            }
        });

        let builder_impl: Item = parse_quote! {
            impl #impl_generics #builder_ident #ty_generics #where_clause {
                #vis fn new() -> #builder_ident #ty_generics {
                    #builder_ident { #(#seeds),* }
                }

                #(#setters)*

                #vis fn build(self) -> #ident #ty_generics {
                    #body
                }
            }
        };

        vec![builder_struct, builder_impl]
    }
}

/// `all_args_only` fields default here; `init` fields are never staged and
/// become a post-assignment call inside `build`.
fn is_staged(field: &Field) -> bool {
    !matches!(field.directive, Directive::AllArgsOnly | Directive::Init(_))
}

/// Setter names are derived deterministically from the field name, so
/// regeneration is diff-free. The raw-identifier prefix is dropped:
/// `r#box` gets `with_box`.
fn setter_ident(name: &syn::Ident) -> syn::Ident {
    let bare = name.to_string();
    format_ident!("with_{}", bare.trim_start_matches("r#"))
}
