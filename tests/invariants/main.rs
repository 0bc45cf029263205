//! Cross-cutting properties of the generation pipeline, checked over
//! inline sources rather than committed fixtures: deterministic output,
//! directive routing, and fail-fast validation.

use libtest_mimic::{Arguments, Failed, Trial};
use structor::{Request, Strategy, loader::Package, loader::SourceFile};
use syn::{FnArg, ImplItem, Item, Pat};

fn main() {
    let args = Arguments::from_args();

    let trials = vec![
        Trial::test("regeneration_is_byte_identical", || {
            regeneration_is_byte_identical()
        }),
        Trial::test("all_args_parameter_count_matches_eligibility", || {
            all_args_parameter_count_matches_eligibility()
        }),
        Trial::test("excluded_field_never_surfaces", || {
            excluded_field_never_surfaces()
        }),
        Trial::test("routing_is_strategy_local", || routing_is_strategy_local()),
        Trial::test("strategy_list_validated_without_source", || {
            strategy_list_validated_without_source()
        }),
        Trial::test("duplicate_names_produce_no_output", || {
            duplicate_names_produce_no_output()
        }),
        Trial::test("request_order_is_emission_order", || {
            request_order_is_emission_order()
        }),
    ];

    libtest_mimic::run(&args, trials).exit();
}

fn package(source: &str) -> Package {
    Package {
        name: "inline".to_string(),
        files: vec![SourceFile {
            path: "inline.rs".into(),
            ast: syn::parse_file(source).expect("inline source must parse"),
        }],
    }
}

fn generate(source: &str, type_name: &str, strategies: Vec<Strategy>) -> Result<String, Failed> {
    let request = Request::new(type_name, strategies);
    let unit = structor::run(&request, &package(source))
        .map_err(|e| Failed::from(format!("generation failed: {}", e)))?;
    Ok(unit.render())
}

/// Names of the parameters of every `fn new` in the rendered output.
fn new_param_names(code: &str) -> Result<Vec<String>, Failed> {
    let file =
        syn::parse_file(code).map_err(|e| Failed::from(format!("output does not parse: {}", e)))?;
    let mut names = Vec::new();
    for item in &file.items {
        let Item::Impl(item_impl) = item else { continue };
        for impl_item in &item_impl.items {
            let ImplItem::Fn(method) = impl_item else { continue };
            if method.sig.ident != "new" {
                continue;
            }
            for input in &method.sig.inputs {
                if let FnArg::Typed(pat_type) = input {
                    if let Pat::Ident(pat_ident) = &*pat_type.pat {
                        names.push(pat_ident.ident.to_string());
                    }
                }
            }
        }
    }
    Ok(names)
}

/// Names of every method in the rendered output.
fn method_names(code: &str) -> Result<Vec<String>, Failed> {
    let file =
        syn::parse_file(code).map_err(|e| Failed::from(format!("output does not parse: {}", e)))?;
    let mut names = Vec::new();
    for item in &file.items {
        let Item::Impl(item_impl) = item else { continue };
        for impl_item in &item_impl.items {
            if let ImplItem::Fn(method) = impl_item {
                names.push(method.sig.ident.to_string());
            }
        }
    }
    Ok(names)
}

fn regeneration_is_byte_identical() -> Result<(), Failed> {
    let source = "pub struct Job { id: u64, #[constructor(skip)] retries: u8, label: String }";
    let first = generate(source, "Job", vec![Strategy::AllArgs, Strategy::Builder])?;
    let second = generate(source, "Job", vec![Strategy::AllArgs, Strategy::Builder])?;
    if first != second {
        return Err(Failed::from("two runs over identical input diverged"));
    }
    Ok(())
}

fn all_args_parameter_count_matches_eligibility() -> Result<(), Failed> {
    // Five members; skip, builder_only and init are not all-args parameters.
    let source = "pub struct Job { \
                  id: u64, \
                  #[constructor(skip)] retries: u8, \
                  #[constructor(builder_only)] label: String, \
                  #[constructor(init = \"prime\")] slots: Vec<u8>, \
                  owner: String }";
    let code = generate(source, "Job", vec![Strategy::AllArgs])?;
    let params = new_param_names(&code)?;
    if params != ["id", "owner"] {
        return Err(Failed::from(format!(
            "expected parameters [id, owner], got {:?}",
            params
        )));
    }
    Ok(())
}

fn excluded_field_never_surfaces() -> Result<(), Failed> {
    let source = "pub struct Job { id: u64, #[constructor(skip)] secret: String }";
    let code = generate(source, "Job", vec![Strategy::AllArgs, Strategy::Builder])?;

    if new_param_names(&code)?.iter().any(|name| name == "secret") {
        return Err(Failed::from("excluded field appeared as a parameter"));
    }
    if method_names(&code)?.iter().any(|name| name == "with_secret") {
        return Err(Failed::from("excluded field appeared as a setter"));
    }
    Ok(())
}

fn routing_is_strategy_local() -> Result<(), Failed> {
    let source = "pub struct Job { \
                  #[constructor(all_args_only)] id: u64, \
                  #[constructor(builder_only)] label: String }";
    let code = generate(source, "Job", vec![Strategy::AllArgs, Strategy::Builder])?;

    let params = new_param_names(&code)?;
    if params.iter().any(|name| name == "label") {
        return Err(Failed::from("builder_only field became an all-args parameter"));
    }
    let methods = method_names(&code)?;
    if methods.iter().any(|name| name == "with_id") {
        return Err(Failed::from("all_args_only field received a setter"));
    }
    if !methods.iter().any(|name| name == "with_label") {
        return Err(Failed::from("builder_only field is missing its setter"));
    }
    Ok(())
}

fn strategy_list_validated_without_source() -> Result<(), Failed> {
    // No package is ever constructed here; the list alone must fail.
    match Strategy::parse_list("all-args,buildr") {
        Err(structor::Error::UnknownConstructorType { given }) if given == "buildr" => Ok(()),
        other => Err(Failed::from(format!(
            "expected unknown-constructor-type error, got {:?}",
            other
        ))),
    }
}

fn duplicate_names_produce_no_output() -> Result<(), Failed> {
    let source = "pub struct Pair(String, String);";
    let result = structor::run(
        &Request::new("Pair", vec![Strategy::AllArgs]),
        &package(source),
    );
    match result {
        Err(structor::Error::DuplicateFieldName { type_name, field }) => {
            if type_name == "Pair" && field == "string" {
                Ok(())
            } else {
                Err(Failed::from(format!(
                    "wrong duplicate reported: {} / {}",
                    type_name, field
                )))
            }
        }
        Ok(_) => Err(Failed::from("duplicate names were accepted")),
        Err(other) => Err(Failed::from(format!("unexpected error: {}", other))),
    }
}

fn request_order_is_emission_order() -> Result<(), Failed> {
    let source = "pub struct Job { id: u64 }";
    let code = generate(source, "Job", vec![Strategy::Builder, Strategy::AllArgs])?;
    let builder_at = code
        .find("struct JobBuilder")
        .ok_or_else(|| Failed::from("builder struct missing"))?;
    let all_args_at = code
        .find("impl Job {")
        .ok_or_else(|| Failed::from("all-args impl missing"))?;
    if builder_at > all_args_at {
        return Err(Failed::from(
            "builder was requested first but emitted second",
        ));
    }
    Ok(())
}
