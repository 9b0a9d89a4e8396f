//! rehl - highlight a file and print it as RTF
//!
//! A headless host for the highlighter: the file's text is loaded into a
//! `MemoryHost`, one change notification is delivered, and whatever the
//! host ends up displaying is written to stdout.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use rehl::syntax::builtin;
use rehl::{Config, HighlightError, MemoryHost, Result, SyntaxHighlighter, TextHost};

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    language: Option<String>,
    plain: bool,
    file: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = Args::default();
    let mut iter = env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--config" | "-c" => args.config = Some(PathBuf::from(required(&mut iter, &arg)?)),
            "--language" | "-l" => args.language = Some(required(&mut iter, &arg)?),
            "--plain" => args.plain = true,
            _ if arg.starts_with('-') => {
                return Err(HighlightError::Message(format!("unknown option: {}", arg)));
            }
            _ => args.file = Some(PathBuf::from(&arg)),
        }
    }

    let Some(file) = args.file else {
        print_usage();
        process::exit(2);
    };

    let text = fs::read_to_string(&file)?;
    let mut host = MemoryHost::new(text);

    let config = match &args.config {
        Some(path) => Some(Config::load(path)?),
        None if args.language.is_none() => Config::load_default()?,
        None => None,
    };

    let highlighter = match &config {
        Some(config) => {
            if let Some(color) = config.default_color()? {
                host = host.with_default_color(color);
            }
            SyntaxHighlighter::from_registry(config.build_registry()?)
                .with_render_options(config.render_options())
        }
        None => {
            let name = args.language.as_deref().unwrap_or("c");
            let registry = builtin::by_name(name).ok_or_else(|| {
                HighlightError::Message(format!(
                    "unknown language '{}' (available: {})",
                    name,
                    builtin::names().join(", ")
                ))
            })??;
            SyntaxHighlighter::from_registry(registry)
        }
    };

    highlighter.set_disable_highlighting(args.plain);
    highlighter.on_text_changed(&mut host);

    match host.rich_content() {
        Some(markup) => println!("{}", markup),
        None => print!("{}", host.text()),
    }

    Ok(())
}

fn required(iter: &mut impl Iterator<Item = String>, option: &str) -> Result<String> {
    iter.next()
        .ok_or_else(|| HighlightError::Message(format!("{} needs a value", option)))
}

fn print_usage() {
    println!("rehl {} - syntax highlighting to RTF", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: rehl [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -c, --config FILE      Load patterns from a TOML file");
    println!(
        "  -l, --language NAME    Use a built-in pattern set ({})",
        builtin::names().join(", ")
    );
    println!("      --plain            Disable highlighting, print the text unchanged");
    println!("  -h, --help             Show this help message");
    println!("  -V, --version          Show version information");
    println!();
    println!("Without --config or --language, ~/.rehl.toml is used if present,");
    println!("otherwise the built-in 'c' set.");
    println!("Set RUST_LOG=rehl=debug to trace highlight passes on stderr.");
}

fn print_version() {
    println!("rehl {}", env!("CARGO_PKG_VERSION"));
}
