//! structor — generates constructor-style functions for Rust structs.
//!
//! Given the name of a struct declared somewhere in a source directory,
//! structor collects its fields and emits constructors for it into a new
//! source file:
//!
//! - the **all-args** strategy emits `Type::new(...)`, one argument per
//!   field in declaration order;
//! - the **builder** strategy emits a `TypeBuilder` with chainable
//!   `with_*` setters and a consuming `build()`.
//!
//! Per-field `#[constructor(...)]` attributes opt fields out (`skip`),
//! restrict them to one strategy (`all_args_only`, `builder_only`), or
//! replace the parameter with a post-assembly method call
//! (`init = "method"`). Tuple-struct members are addressed by a name
//! synthesized from their type.
//!
//! The pipeline is loader → collector → generators → emitter; see the
//! individual modules. [`run`] is the orchestration entry point.

pub mod collect;
pub mod emit;
pub mod error;
pub mod generate;
pub mod loader;

pub use collect::{Directive, Field, Shape, Target, collect};
pub use emit::GeneratedUnit;
pub use error::Error;
pub use generate::{AllArgsGenerator, BuilderGenerator, Generator, Strategy};
pub use loader::{Package, load};

/// One generation request: a single target type and the ordered set of
/// requested strategies.
#[derive(Debug, Clone)]
pub struct Request {
    pub type_name: String,
    pub strategies: Vec<Strategy>,
}

impl Request {
    pub fn new(type_name: impl Into<String>, strategies: Vec<Strategy>) -> Self {
        Request {
            type_name: type_name.into(),
            strategies,
        }
    }
}

/// Emission root: collect the target once, run every requested strategy
/// over the identical field list, and concatenate the generated items in
/// request order.
pub fn run(request: &Request, package: &Package) -> Result<GeneratedUnit, Error> {
    if request.strategies.is_empty() {
        return Err(Error::UnknownConstructorType {
            given: String::new(),
        });
    }

    let target = collect::collect(&request.type_name, package)?;

    let mut items = Vec::new();
    for strategy in &request.strategies {
        items.extend(strategy.generator().generate(&target));
    }

    Ok(GeneratedUnit {
        package: package.name.clone(),
        header: header(request),
        items,
    })
}

/// Provenance header: records the invocation, deterministically — no
/// timestamps, so regeneration stays diff-free.
fn header(request: &Request) -> String {
    let strategies: Vec<&str> = request.strategies.iter().map(|s| s.as_str()).collect();
    format!(
        "// Code generated by structor --type {} --constructors {}; DO NOT EDIT.",
        request.type_name,
        strategies.join(",")
    )
}
