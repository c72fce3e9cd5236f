//! CLI argument definition and parsing.

use std::env;
use std::process;

use owo_colors::OwoColorize;

#[derive(Clone, Debug)]
pub struct Args {
    pub key: String,
    pub origin: String,
    pub add_wildcards: bool,
    pub ignore_too_long: bool,
    pub verbose: bool,
}

impl Args {
    pub fn parse() -> Self {
        // skip executable name
        let args: Vec<String> = env::args().skip(1).collect();

        let mut key = None;
        let mut origin = None;
        let mut add_wildcards = false;
        let mut ignore_too_long = false;
        let mut verbose = false;

        enum ConsumeNext {
            Key,
            Origin,
        }
        let mut consume_next = None;

        for arg in args {
            if let Some(to_consume) = &consume_next {
                match to_consume {
                    ConsumeNext::Key => key = Some(arg),
                    ConsumeNext::Origin => origin = Some(arg),
                }
                consume_next = None;
                continue;
            }

            match arg.strip_prefix("--") {
                Some("key") => consume_next = Some(ConsumeNext::Key),
                Some("origindomain") => consume_next = Some(ConsumeNext::Origin),
                Some("addwildcards") => add_wildcards = true,
                Some("ignoretoolong") => ignore_too_long = true,
                Some("verbose") => verbose = true,
                Some("help") => {
                    print_help();
                    process::exit(0);
                }
                Some("version") => {
                    print_version();
                    process::exit(0);
                }
                Some(x) => err(format!("Invalid option: --{}.", x)),
                None => err(format!("Invalid argument: {}.", arg)),
            }
        }

        let key = key.unwrap_or_else(|| err("Missing required option: --key <key>."));
        let origin =
            origin.unwrap_or_else(|| err("Missing required option: --origindomain <domain>."));

        Self {
            key,
            origin,
            add_wildcards,
            ignore_too_long,
            verbose,
        }
    }
}

fn print_help() {
    let output = owo_colors::Stream::Stdout;
    println!(
        "{} hashedrpz --key <key> --origindomain <domain> [options]",
        "Usage:".if_supports_color(output, |s| s.purple())
    );
    println!();
    println!("Reads left-hand-sides to hash from stdin, one per line, and writes");
    println!("\"<input> => <hashed>\" lines to stdout.");
    println!();
    println!("{}", "Options:".if_supports_color(output, |s| s.purple()));
    println!(
        "\t{:<28} ({})",
        "--key <key>".if_supports_color(output, |s| s.yellow()),
        "the shared secret key to derive hashes from"
    );
    println!(
        "\t{:<28} ({})",
        "--origindomain <domain>".if_supports_color(output, |s| s.yellow()),
        "the RPZ zone the hashed names will be published under"
    );
    println!(
        "\t{:<28} ({})",
        "--addwildcards".if_supports_color(output, |s| s.yellow()),
        "fall back to a wildcard label for inputs that are too long to hash in full"
    );
    println!(
        "\t{:<28} ({})",
        "--ignoretoolong".if_supports_color(output, |s| s.yellow()),
        "skip (rather than abort on) a line that is too long to hash"
    );
    println!(
        "\t{:<28} ({})",
        "--verbose".if_supports_color(output, |s| s.yellow()),
        "print per-label callback invocations to stderr"
    );
    println!(
        "\t{:<28} ({})",
        "--help".if_supports_color(output, |s| s.yellow()),
        "print this help message"
    );
    println!(
        "\t{:<28} ({})",
        "--version".if_supports_color(output, |s| s.yellow()),
        "print the version of hashedrpz"
    );
}

fn print_version() {
    println!("hashedrpz v{}", env!("CARGO_PKG_VERSION"));
}

fn err(msg: impl AsRef<str>) -> ! {
    eprintln!("{}", msg.as_ref());
    process::exit(1)
}
