use std::{fs, io::Read, path::PathBuf};

use clap::Parser;

/// tally is a tiny calculator language: a brace-delimited block of
/// assignment statements over floats, with arithmetic and bitwise
/// operators.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a script file. When omitted, the script is read from
    /// standard input.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let (text, name) = match &args.script {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|_| {
                           eprintln!("Failed to read the script '{}'. Perhaps this file does not exist?",
                                     path.display());
                           std::process::exit(1);
                       });
            (text, Some(path.display().to_string()))
        },
        None => {
            let mut text = String::new();
            if std::io::stdin().read_to_string(&mut text).is_err() {
                eprintln!("Failed to read a script from standard input.");
                std::process::exit(1);
            }
            (text, None)
        },
    };

    match tally::interpret(&text, name.as_deref()) {
        Ok(scope) => {
            for (name, value) in &scope {
                println!("{name}: {value}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
