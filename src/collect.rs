//! Field collector: resolves a struct declaration into the ordered list of
//! constructible fields both generators consume.
//!
//! Collection is a pure function of the parsed package. Fields come out in
//! exact declaration order, positional (tuple-struct) members get names
//! synthesized from their types, and `#[constructor(...)]` attributes are
//! parsed once into a closed [`Directive`] — never re-parsed downstream.

use std::collections::HashSet;

use heck::ToSnakeCase;
use proc_macro2::Span;
use quote::ToTokens;
use syn::{Attribute, Generics, Ident, Item, ItemStruct, Type, Visibility};

use crate::error::Error;
use crate::loader::Package;

/// Per-field construction directive, parsed from `#[constructor(...)]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Directive {
    #[default]
    None,
    /// `#[constructor(skip)]` — excluded from every generated constructor
    Skip,
    /// `#[constructor(all_args_only)]` — excluded from the builder
    AllArgsOnly,
    /// `#[constructor(builder_only)]` — excluded from the all-args constructor
    BuilderOnly,
    /// `#[constructor(init = "method")]` — populated by calling the named
    /// zero-argument method on the freshly assembled instance
    Init(Ident),
}

/// One constructible member of the target struct.
#[derive(Debug, Clone)]
pub struct Field {
    /// Constructor-facing name: declared, or synthesized for positional members
    pub name: Ident,
    pub ty: Type,
    /// True for tuple-struct members, which are addressed by type rather
    /// than by a declared field name
    pub embedded: bool,
    pub directive: Directive,
    /// Declaration position, significant for parameter order and for
    /// positional construction
    pub index: usize,
}

/// How the struct declares its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Named,
    Tuple,
    Unit,
}

/// A member excluded from construction entirely but still present in the
/// struct literal, where it is filled with `Default::default()`.
#[derive(Debug, Clone)]
pub struct SkippedMember {
    pub index: usize,
    /// `None` for positional members
    pub name: Option<Ident>,
}

/// Collector output: the struct's identity plus its collected field list.
///
/// Both strategies consume one `Target` per run, so they are guaranteed to
/// see the same fields. Never mutated after collection.
#[derive(Debug, Clone)]
pub struct Target {
    pub ident: Ident,
    /// Generated items inherit the struct's own visibility
    pub vis: Visibility,
    pub generics: Generics,
    pub shape: Shape,
    /// Constructible fields in declaration order, `skip` members dropped
    pub fields: Vec<Field>,
    pub skipped: Vec<SkippedMember>,
}

impl Target {
    /// Total declared member count, including skipped members.
    pub fn arity(&self) -> usize {
        self.fields.len() + self.skipped.len()
    }
}

/// Resolve `type_name` in the package and collect its constructible fields.
pub fn collect(type_name: &str, package: &Package) -> Result<Target, Error> {
    let decl = find_struct(type_name, package)?;

    let (shape, members): (Shape, Vec<(Option<&Ident>, &Type, &[Attribute])>) = match &decl.fields {
        syn::Fields::Named(named) => (
            Shape::Named,
            named
                .named
                .iter()
                .map(|f| (f.ident.as_ref(), &f.ty, f.attrs.as_slice()))
                .collect(),
        ),
        syn::Fields::Unnamed(unnamed) => (
            Shape::Tuple,
            unnamed
                .unnamed
                .iter()
                .map(|f| (None, &f.ty, f.attrs.as_slice()))
                .collect(),
        ),
        syn::Fields::Unit => (Shape::Unit, Vec::new()),
    };

    let mut fields = Vec::new();
    let mut skipped = Vec::new();

    for (index, (declared, ty, attrs)) in members.into_iter().enumerate() {
        // Visibility is deliberately not inspected: private members are
        // collected exactly like public ones.
        let name = match declared {
            Some(ident) => ident.clone(),
            None => synthesized_name(ty, index),
        };
        let directive = field_directive(attrs, type_name, &name)?;

        if directive == Directive::Skip {
            skipped.push(SkippedMember {
                index,
                name: declared.cloned(),
            });
            continue;
        }

        fields.push(Field {
            name,
            ty: (*ty).clone(),
            embedded: declared.is_none(),
            directive,
            index,
        });
    }

    let mut seen = HashSet::new();
    for field in &fields {
        if !seen.insert(field.name.to_string()) {
            return Err(Error::DuplicateFieldName {
                type_name: type_name.to_string(),
                field: field.name.to_string(),
            });
        }
    }

    Ok(Target {
        ident: decl.ident.clone(),
        vis: decl.vis.clone(),
        generics: decl.generics.clone(),
        shape,
        fields,
        skipped,
    })
}

fn find_struct<'a>(type_name: &str, package: &'a Package) -> Result<&'a ItemStruct, Error> {
    let mut saw_non_struct = false;
    for file in &package.files {
        if let Some(decl) = search_items(&file.ast.items, type_name, &mut saw_non_struct) {
            return Ok(decl);
        }
    }
    if saw_non_struct {
        Err(Error::TypeNotRecord {
            type_name: type_name.to_string(),
        })
    } else {
        Err(Error::TypeNotFound {
            type_name: type_name.to_string(),
        })
    }
}

fn search_items<'a>(
    items: &'a [Item],
    type_name: &str,
    saw_non_struct: &mut bool,
) -> Option<&'a ItemStruct> {
    for item in items {
        match item {
            Item::Struct(decl) if decl.ident == type_name => return Some(decl),
            Item::Mod(module) => {
                if let Some((_, inner)) = &module.content {
                    if let Some(decl) = search_items(inner, type_name, saw_non_struct) {
                        return Some(decl);
                    }
                }
            }
            other => {
                if declared_ident(other).is_some_and(|ident| ident == type_name) {
                    *saw_non_struct = true;
                }
            }
        }
    }
    None
}

fn declared_ident(item: &Item) -> Option<&Ident> {
    match item {
        Item::Enum(i) => Some(&i.ident),
        Item::Union(i) => Some(&i.ident),
        Item::Trait(i) => Some(&i.ident),
        Item::TraitAlias(i) => Some(&i.ident),
        Item::Type(i) => Some(&i.ident),
        Item::Fn(i) => Some(&i.sig.ident),
        Item::Const(i) => Some(&i.ident),
        Item::Static(i) => Some(&i.ident),
        _ => None,
    }
}

fn field_directive(attrs: &[Attribute], type_name: &str, field: &Ident) -> Result<Directive, Error> {
    let mut directive = Directive::None;
    for attr in attrs {
        if !attr.path().is_ident("constructor") {
            continue;
        }
        let mut unknown: Option<String> = None;
        let parsed = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                directive = Directive::Skip;
                Ok(())
            } else if meta.path.is_ident("all_args_only") {
                directive = Directive::AllArgsOnly;
                Ok(())
            } else if meta.path.is_ident("builder_only") {
                directive = Directive::BuilderOnly;
                Ok(())
            } else if meta.path.is_ident("init") {
                let method: syn::LitStr = meta.value()?.parse()?;
                directive = Directive::Init(method.parse()?);
                Ok(())
            } else {
                unknown = Some(meta.path.to_token_stream().to_string().replace(' ', ""));
                Err(meta.error("unknown constructor directive"))
            }
        });
        if let Err(e) = parsed {
            return Err(Error::UnknownDirective {
                type_name: type_name.to_string(),
                field: field.to_string(),
                directive: unknown.unwrap_or_else(|| e.to_string()),
            });
        }
    }
    Ok(directive)
}

/// Synthesize a constructor-facing name for a positional member from its
/// type: strip references, take the last path segment without generic
/// arguments, convert to snake_case. Types with no usable name (tuples,
/// slices, ...) fall back to a position-derived name.
fn synthesized_name(ty: &Type, index: usize) -> Ident {
    match type_base_name(ty) {
        Some(base) => safe_ident(&base.to_snake_case()),
        None => Ident::new(&format!("arg{}", index), Span::call_site()),
    }
}

fn type_base_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Reference(r) => type_base_name(&r.elem),
        Type::Paren(p) => type_base_name(&p.elem),
        Type::Group(g) => type_base_name(&g.elem),
        Type::Path(p) => p.path.segments.last().map(|s| s.ident.to_string()),
        _ => None,
    }
}

/// Names that collide with Rust keywords become raw identifiers.
fn safe_ident(name: &str) -> Ident {
    syn::parse_str::<Ident>(name).unwrap_or_else(|_| Ident::new_raw(name, Span::call_site()))
}
