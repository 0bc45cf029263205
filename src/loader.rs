//! Source loader: reads one package's worth of Rust sources and parses them.
//!
//! A "package" is a single directory of `.rs` files (non-recursive), or a
//! single file. Declaration order and per-field attributes are preserved
//! exactly as `syn` parsed them; the collector relies on both.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Error;

/// One parsed source file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub ast: syn::File,
}

/// A parsed package: the declarations the collector searches.
#[derive(Debug, Clone)]
pub struct Package {
    /// Package name, derived from the source directory
    pub name: String,
    pub files: Vec<SourceFile>,
}

/// Load a package from a file or directory path.
pub fn load(path: &Path) -> Result<Package, Error> {
    if path.is_dir() {
        load_dir(path)
    } else {
        load_file(path)
    }
}

/// Load every `.rs` file in `dir` (non-recursive). Previously generated
/// `*_gen.rs` files are skipped so regeneration never reads its own output.
pub fn load_dir(dir: &Path) -> Result<Package, Error> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        if is_generated_output(path) {
            continue;
        }
        files.push(parse_source(path)?);
    }

    if files.is_empty() {
        return Err(Error::SourceLoad {
            path: dir.to_path_buf(),
            message: "no .rs source files found".to_string(),
        });
    }

    Ok(Package {
        name: package_name(dir),
        files,
    })
}

/// Load a single-file package.
pub fn load_file(path: &Path) -> Result<Package, Error> {
    let file = parse_source(path)?;
    let name = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(package_name)
        .unwrap_or_else(|| stem_name(path));
    Ok(Package {
        name,
        files: vec![file],
    })
}

fn parse_source(path: &Path) -> Result<SourceFile, Error> {
    let source = fs::read_to_string(path).map_err(|e| Error::SourceLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let ast = syn::parse_file(&source).map_err(|e| Error::SourceLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(SourceFile {
        path: path.to_path_buf(),
        ast,
    })
}

fn is_generated_output(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with("_gen.rs"))
}

/// Package name from a directory: the last path component of the
/// canonicalized path, so `.` resolves to the actual directory name.
fn package_name(dir: &Path) -> String {
    let resolved = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
    resolved
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("crate")
        .to_string()
}

fn stem_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("crate")
        .to_string()
}
