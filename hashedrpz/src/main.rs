use std::io::{self, BufRead};
use std::process::ExitCode;

use hashedrpz_core::{HashBuf, HashedRpzErrorCode, Hasher};
use owo_colors::OwoColorize;

mod args;

use args::Args;

// TODO: read left-hand-sides from a file argument instead of only stdin

fn main() -> ExitCode {
    let args = Args::parse();
    let mut hasher = Hasher::new(args.key.clone());
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("FAIL: could not read input line: {}", e);
                return ExitCode::FAILURE;
            }
        };
        if line.is_empty() {
            continue;
        }

        match hash_one(&mut hasher, &line, &args) {
            Ok(hashed) => eprintln!("{} => {}", line, hashed),
            Err(e) => {
                let msg = format!("Error: {} ({:?})", e, e.code());
                eprintln!("{}", msg.if_supports_color(owo_colors::Stream::Stderr, |s| s.red()));
                if !args.ignore_too_long || e.code() != HashedRpzErrorCode::TooLong {
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}

fn hash_one(
    hasher: &mut Hasher,
    lhs: &str,
    args: &Args,
) -> Result<String, hashedrpz_core::HashedRpzError> {
    let mut buf = HashBuf::with_capacity(1024);

    let mut callback_count = 0;
    let mut log_callback = |subdomain: &str, hashed: &str| {
        callback_count += 1;
        eprintln!("  [{}] {} => {}", callback_count, subdomain, hashed);
    };
    let callback: Option<&mut dyn FnMut(&str, &str)> =
        if args.verbose { Some(&mut log_callback) } else { None };

    if args.add_wildcards {
        hasher.hash_with_wildcard(lhs, &args.origin, &mut buf, callback)?;
    } else {
        hasher.hash(lhs, &args.origin, &mut buf, callback)?;
    }

    Ok(buf.as_str().to_owned())
}
