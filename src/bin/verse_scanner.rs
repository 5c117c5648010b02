//! `verse_scanner` - interactive hexameter scansion.
//!
//! Reads one verse per prompt, applies elision, scans the meter, and prints
//! the three aligned result lines.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin verse_scanner
//! cargo run --bin verse_scanner -- --once < verse.txt
//! cargo run --bin verse_scanner -- --no-drop-h
//! ```

use hexameter::{LogLevel, RulePolicy, elide_with, scan_with, set_log_callback};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const HELP_TEXT: &str = "verse_scanner - dactylic hexameter scansion

USAGE:
    verse_scanner [OPTIONS]

OPTIONS:
    -h, --help                Print this help message and exit
    --once                    Scan a single verse and exit
    --no-drop-h               Keep silent h characters when copying words
                              through elision
    --no-hiatus-exceptions    Treat the ei/eis/mei/meis vowel pairs as
                              ordinary diphthongs

Verses are read from stdin; end with EOF or answer 'n' at the prompt.
";

#[derive(Clone, Copy, Debug)]
struct Options {
    once: bool,
    policy: RulePolicy,
}

enum Parsed {
    Run(Options),
    Help,
}

fn parse_args<I: Iterator<Item = String>>(args: I) -> Result<Parsed, String> {
    let mut options = Options {
        once: false,
        policy: RulePolicy::default(),
    };
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Parsed::Help),
            "--once" => options.once = true,
            "--no-drop-h" => options.policy.remove(RulePolicy::DROP_H),
            "--no-hiatus-exceptions" => options.policy.remove(RulePolicy::HIATUS_EXCEPTIONS),
            other => return Err(format!("unknown option: {other}")),
        }
    }
    Ok(Parsed::Run(options))
}

fn prompt(text: &str) -> bool {
    print!("{text}");
    io::stdout().flush().is_ok()
}

fn main() -> ExitCode {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(Parsed::Run(options)) => options,
        Ok(Parsed::Help) => {
            print!("{HELP_TEXT}");
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("error: {message}");
            eprint!("{HELP_TEXT}");
            return ExitCode::FAILURE;
        }
    };

    set_log_callback(|level, message| {
        let tag = match level {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warning",
            LogLevel::Error => "error",
        };
        eprintln!("[{tag}] {message}");
    });

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if !prompt("Intrare versum: ") {
            return ExitCode::FAILURE;
        }
        let Some(Ok(line)) = lines.next() else {
            break;
        };
        println!();

        let elided = match elide_with(&line, options.policy) {
            Ok(elided) => elided,
            Err(error) => {
                eprintln!("error: {error}");
                if options.once {
                    return ExitCode::FAILURE;
                }
                continue;
            }
        };
        println!("Elision: {elided}");
        println!();

        match scan_with(&elided, options.policy) {
            Ok(scansion) => {
                println!("{}", scansion.numbers);
                println!("{}", scansion.lengths);
                println!("{}", scansion.text);
            }
            Err(error) => {
                eprintln!("error: {error}");
                if options.once {
                    return ExitCode::FAILURE;
                }
                continue;
            }
        }
        println!();

        if options.once {
            break;
        }
        if !prompt("Do you want to scan another verse? [Y/n] ") {
            return ExitCode::FAILURE;
        }
        let Some(Ok(answer)) = lines.next() else {
            break;
        };
        if answer.trim().to_ascii_lowercase().starts_with('n') {
            break;
        }
    }
    ExitCode::SUCCESS
}
