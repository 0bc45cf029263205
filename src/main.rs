use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser;
use heck::ToSnakeCase;
use serde::Serialize;
use structor::{Request, Strategy, loader};

#[derive(Parser)]
#[command(name = "structor")]
#[command(about = "structor - generate constructors and builders for Rust structs")]
struct Cli {
    /// Name of the target struct
    #[arg(long = "type", value_name = "NAME")]
    type_name: String,

    /// Comma-separated constructor types: "all-args" and/or "builder"
    #[arg(long, value_name = "LIST", default_value = "all-args")]
    constructors: String,

    /// Output file (default: "<srcdir>/<type>_gen.rs")
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print a JSON report to stdout instead of writing the file
    #[arg(long)]
    json: bool,

    /// Source file or directory containing the struct
    #[arg(default_value = ".")]
    path: PathBuf,
}

#[derive(Serialize)]
struct Report<'a> {
    package: &'a str,
    type_name: &'a str,
    constructors: Vec<&'static str>,
    code: &'a str,
}

fn main() {
    let cli = Cli::parse();

    // Constructor types are validated before any source file is read.
    let strategies = match Strategy::parse_list(&cli.constructors) {
        Ok(strategies) => strategies,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };

    let start = Instant::now();

    let package = match loader::load(&cli.path) {
        Ok(package) => package,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let request = Request::new(cli.type_name.clone(), strategies);
    let unit = match structor::run(&request, &package) {
        Ok(unit) => unit,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    let code = unit.render();

    if cli.json {
        let report = Report {
            package: &unit.package,
            type_name: &request.type_name,
            constructors: request.strategies.iter().map(|s| s.as_str()).collect(),
            code: &code,
        };
        match serde_json::to_string(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize report: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let output = cli
        .output
        .unwrap_or_else(|| output_path(&cli.path, &request.type_name));
    if let Err(e) = fs::write(&output, &code) {
        eprintln!("error: failed to write {}: {}", output.display(), e);
        process::exit(1);
    }

    print_generated(&output.display().to_string());
    print_summary(start.elapsed());
}

fn output_path(source: &Path, type_name: &str) -> PathBuf {
    let dir = if source.is_dir() {
        source.to_path_buf()
    } else {
        source
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    };
    dir.join(format!("{}_gen.rs", type_name.to_snake_case()))
}

fn print_generated(path: &str) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("  \x1b[32m✓\x1b[0m {}", path);
    } else {
        eprintln!("  ✓ {}", path);
    }
}

fn print_summary(elapsed: std::time::Duration) {
    let is_tty = io::stderr().is_terminal();
    let time_str = format_duration(elapsed);

    if is_tty {
        eprintln!("\n\x1b[1m✨ Generated 1 file in {}\x1b[0m", time_str);
    } else {
        eprintln!("\n✨ Generated 1 file in {}", time_str);
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}μs", micros)
    } else if micros < 1_000_000 {
        format!("{:.1}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
