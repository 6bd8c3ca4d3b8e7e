//! Symscan CLI
//!
//! General driver over all six dialects. The per-dialect scanners in
//! `src/bin/` take no arguments; this one takes the dialect and an optional
//! path.

use std::path::PathBuf;

use symscanc::commands::{lex_file, scan_file};
use symscanc::{init_tracing, Dialect, ScanError};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: symscan lex <dialect> [file]");
                std::process::exit(1);
            }
            let dialect = parse_dialect(&args[2]);
            let path = input_path(dialect, args.get(3));
            finish(lex_file(dialect, &path));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("symscan {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            let Some(dialect) = Dialect::from_name(command) else {
                eprintln!("Unknown command or dialect: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            };
            let path = input_path(dialect, args.get(2));
            finish(scan_file(dialect, &path));
        }
    }
}

fn parse_dialect(name: &str) -> Dialect {
    Dialect::from_name(name).unwrap_or_else(|| {
        eprintln!("error: unknown dialect '{name}'");
        eprintln!("Valid dialects: c, cs, java, js, perl, ruby");
        std::process::exit(1);
    })
}

/// The explicit path, or the dialect's fixed filename.
fn input_path(dialect: Dialect, arg: Option<&String>) -> PathBuf {
    arg.map_or_else(|| PathBuf::from(dialect.source_file()), PathBuf::from)
}

fn finish(result: Result<String, ScanError>) {
    match result {
        Ok(text) => print!("{text}"),
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Symscan - symbol table scanner");
    println!();
    println!("Usage: symscan <command> [options]");
    println!();
    println!("Commands:");
    println!("  <dialect> [file]      Print the symbol table of a source file");
    println!("  lex <dialect> [file]  Print the token stream of a source file");
    println!("  help                  Show this help message");
    println!("  version               Show version information");
    println!();
    println!("Dialects:");
    for dialect in Dialect::ALL {
        println!("  {:<12}default input: {}", dialect.name(), dialect.source_file());
    }
    println!();
    println!("Dialect names are case-insensitive; aliases: cs, csharp, js, pl, rb.");
    println!();
    println!("Examples:");
    println!("  symscan c                 # scan ./source.c");
    println!("  symscan java Main.java");
    println!("  symscan lex ruby app.rb");
    println!();
    println!("Set RUST_LOG=symscan_decl=trace to log each declaration on stderr.");
}
