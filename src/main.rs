use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode, str::FromStr, time::Instant};

use lexico::{normalize_mapped, render_error, write_tokens, Scanner, ScannerConfig};
use log::{LevelFilter, Log, Metadata, Record};

const DEFAULT_OUTPUT: &str = "saida_tokens.txt";

/// Writes log records to stderr. The level comes from `LEXICO_LOG`
/// (`error`, `warn`, `info`, `debug`, `trace`); logging is off without it.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logger() {
    let level = env::var("LEXICO_LOG")
        .ok()
        .and_then(|value| LevelFilter::from_str(&value).ok())
        .unwrap_or(LevelFilter::Off);

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() -> ExitCode {
    init_logger();

    let args: Vec<String> = env::args().skip(1).collect();

    let strict = args.iter().any(|arg| arg == "--strict");
    let paths: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|arg| *arg != "--strict")
        .collect();

    if paths.is_empty() || paths.len() > 2 {
        eprintln!("Usage: lexico <input> [output] [--strict]");
        return ExitCode::from(2);
    }

    let input = PathBuf::from(paths[0]);
    let output = PathBuf::from(paths.get(1).copied().unwrap_or(DEFAULT_OUTPUT));

    let source = match read_to_string(&input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", input.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    println!("=== Step 1: Normalization ===");
    let normalized = normalize_mapped(&source);
    println!("{}", normalized.text);
    println!();

    println!("=== Step 2: Lexical analysis ===");
    let mut scanner = Scanner::with_config(normalized.text.clone(), ScannerConfig { strict });
    let scan = scanner.scan_all();

    for token in &scan.tokens {
        println!("{}", token);
    }

    // Block comments never reach the scanner; their diagnostics come from
    // normalization and already point into the original file.
    let mut diagnostics = if strict {
        normalized.comment_diagnostics()
    } else {
        vec![]
    };
    diagnostics.extend(scan.diagnostics.iter().map(|error| normalized.remap_error(error)));
    diagnostics.sort_by_key(|error| error.get_position().offset);

    let file_name = input.as_os_str().to_string_lossy();
    for error in &diagnostics {
        eprint!("{}", render_error(error, &source, &file_name));
    }

    println!("Tokenized in {:?}", start.elapsed());

    if let Err(err) = write_tokens(&output, &scan.tokens) {
        eprintln!("Failed to write {}: {}", output.display(), err);
        return ExitCode::FAILURE;
    }

    println!("Output saved to {}", output.display());
    println!("Total tokens: {}", scan.tokens.len());

    ExitCode::SUCCESS
}
