//! flip CLI
//!
//! Reverses the words of each input through the scanner/assembler
//! pipeline and prints the result.

mod cli;
mod report;
mod tracing_setup;

use std::io::Read;
use std::process::ExitCode;

use flip_lexer::{ParseError, Pipeline};
use rayon::prelude::*;

use cli::{Command, Source, DEMO_INPUTS, USAGE};

/// Exit code for a failed parse.
const EXIT_PARSE_ERROR: u8 = 2;
/// Exit code for bad usage or unreadable input.
const EXIT_USAGE: u8 = 1;

fn main() -> ExitCode {
    tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match cli::parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let inputs: Vec<Vec<u8>> = match &options.source {
        Source::Demo => DEMO_INPUTS.iter().map(|s| s.as_bytes().to_vec()).collect(),
        Source::Args(texts) => texts.iter().map(|t| t.as_bytes().to_vec()).collect(),
        Source::Stdin => {
            let mut buf = Vec::new();
            if let Err(e) = std::io::stdin().read_to_end(&mut buf) {
                eprintln!("error: failed to read stdin: {e}");
                return ExitCode::from(EXIT_USAGE);
            }
            vec![buf]
        }
    };

    let pipeline = Pipeline::new(options.config);
    tracing::debug!(inputs = inputs.len(), config = ?options.config, "processing inputs");

    // Each call owns its own scanner thread and channel; rayon keeps
    // results in input order.
    let results: Vec<Result<String, ParseError>> = inputs
        .par_iter()
        .map(|input| pipeline.run_bytes(input))
        .collect();

    for (i, (input, result)) in inputs.iter().zip(results).enumerate() {
        let index = i + 1;
        match result {
            Ok(parsed) => {
                let given = String::from_utf8_lossy(input);
                print!("{}", report::render(index, &given, &parsed, options.compare));
            }
            Err(err) => {
                eprintln!("Unable to parse input {index}: {err}");
                if let ParseError::Spawn(source) = &err {
                    eprintln!("  caused by: {source}");
                }
                return ExitCode::from(EXIT_PARSE_ERROR);
            }
        }
    }

    ExitCode::SUCCESS
}
