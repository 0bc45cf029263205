//! Regenerates the `.expected.rs` / `.expected.err` files next to each
//! golden fixture in `tests/fixtures/`. Run after an intentional change to
//! the generated output:
//!
//! ```text
//! cargo run --bin accept_expected            # all fixtures
//! cargo run --bin accept_expected point      # fixtures whose name contains "point"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use structor::{Request, Strategy, loader};

fn main() {
    let filter = env::args().nth(1);

    let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures");

    let mut accepted = 0;
    for path in fixtures(&dir) {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();
        if let Some(filter) = &filter {
            if !name.contains(filter.as_str()) {
                continue;
            }
        }
        if let Err(message) = accept(&path) {
            eprintln!("error: {}: {}", name, message);
            process::exit(1);
        }
        eprintln!("  ✓ {}", name);
        accepted += 1;
    }

    eprintln!("\n✨ Accepted {} fixture(s)", accepted);
}

fn fixtures(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let name = entry.file_name().to_string_lossy().to_string();
        if name.ends_with(".rs") && !name.ends_with(".expected.rs") {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    files
}

fn accept(path: &Path) -> Result<(), String> {
    let source = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let (type_name, constructors) = parse_invocation(&source)?;

    let result = Strategy::parse_list(&constructors).and_then(|strategies| {
        let package = loader::load_file(path)?;
        structor::run(&Request::new(type_name, strategies), &package)
    });

    let expected_rs = path.with_extension("expected.rs");
    let expected_err = path.with_extension("expected.err");

    match result {
        Ok(unit) => {
            fs::write(&expected_rs, unit.render()).map_err(|e| e.to_string())?;
            remove_stale(&expected_err)?;
        }
        Err(e) => {
            fs::write(&expected_err, format!("{}\n", e)).map_err(|err| err.to_string())?;
            remove_stale(&expected_rs)?;
        }
    }
    Ok(())
}

fn remove_stale(path: &Path) -> Result<(), String> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Parse the `//@ --type NAME [--constructors LIST]` directive line.
fn parse_invocation(source: &str) -> Result<(String, String), String> {
    let first = source.lines().next().unwrap_or("");
    let rest = first
        .strip_prefix("//@")
        .ok_or("fixture is missing the //@ directive line")?;

    let tokens: Vec<&str> = rest.split_whitespace().collect();
    let mut type_name = None;
    let mut constructors = "all-args".to_string();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "--type" => {
                type_name = tokens.get(i + 1).map(|s| s.to_string());
                i += 2;
            }
            "--constructors" => {
                if let Some(list) = tokens.get(i + 1) {
                    constructors = list.to_string();
                }
                i += 2;
            }
            other => return Err(format!("unknown token `{}` in directive line", other)),
        }
    }

    let type_name = type_name.ok_or("directive line has no --type")?;
    Ok((type_name, constructors))
}
