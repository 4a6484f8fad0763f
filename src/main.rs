use std::fs;

use calcite::{Calculator, DEFAULT_MAX_DEPTH};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// calcite evaluates arithmetic expressions with `+ - * / % ^`, parentheses
/// and `$name` variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calcite to read expressions from a file, one per line, instead
    /// of evaluating the argument. Blank lines and lines starting with `#`
    /// are skipped.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable for `$name` references, e.g. `--var x=5`. May be
    /// repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Maximum parenthesis nesting depth.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    contents: String,
}

/// Parses a `NAME=VALUE` variable binding.
fn parse_binding(binding: &str) -> Result<(String, f64), String> {
    let (name, value) = binding.split_once('=')
                               .ok_or_else(|| format!("expected NAME=VALUE, found '{binding}'"))?;
    let name = name.trim().trim_start_matches('$');
    if name.is_empty() || !name.chars().all(calcite::interpreter::variables::is_name_char) {
        return Err(format!("invalid variable name '{name}'"));
    }
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.to_string(), value))
}

/// Installs a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let calculator = Calculator::new().with_max_depth(args.max_depth);
    let expressions: Vec<&str> = if args.file {
        script.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty() && !line.starts_with('#'))
              .collect()
    } else {
        vec![script.as_str()]
    };

    for expression in expressions {
        match calculator.parse(expression, args.vars.as_slice()) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    }
}
