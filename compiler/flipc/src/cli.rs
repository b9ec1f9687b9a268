//! Argument parsing for the `flip` binary.

use flip_lexer::PipelineConfig;

pub const USAGE: &str = "\
Usage: flip [options] [TEXT...]
       flip [options] -

Reverses every word of each TEXT, keeping whitespace exactly as given.
With no TEXT, runs the built-in demo sentences. `-` reads one input from stdin.

Options:
  --inline            Scan on the calling thread instead of a scanner thread
  --capacity=<n>      Segments buffered between scanner and assembler
  --compare           Also show the space-only fallback and whether it agrees
  -h, --help          Show this help";

/// Sentences run when no input is given.
pub const DEMO_INPUTS: [&str; 2] = [
    "when we have a lot of words we want to preserve the white space",
    "  which   is  harder to   do for     some examples    than others",
];

/// Where inputs come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Demo,
    Args(Vec<String>),
    Stdin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub config: PipelineConfig,
    pub compare: bool,
    pub source: Source,
}

/// Result of parsing the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut config = PipelineConfig::default();
    let mut compare = false;
    let mut stdin = false;
    let mut texts = Vec::new();
    let mut only_texts = false;

    for arg in args {
        if only_texts {
            texts.push(arg.clone());
            continue;
        }
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--inline" => config = PipelineConfig::inline(),
            "--compare" => compare = true,
            "--" => only_texts = true,
            "-" => stdin = true,
            _ => {
                if let Some(value) = arg.strip_prefix("--capacity=") {
                    let capacity = value
                        .parse::<usize>()
                        .map_err(|e| format!("invalid --capacity value {value:?}: {e}"))?;
                    config = config.with_capacity(capacity);
                } else if arg.starts_with('-') && arg.len() > 1 {
                    return Err(format!("unknown option: {arg}"));
                } else {
                    texts.push(arg.clone());
                }
            }
        }
    }

    let source = match (stdin, texts.is_empty()) {
        (true, true) => Source::Stdin,
        (true, false) => return Err("cannot combine `-` with TEXT arguments".to_string()),
        (false, true) => Source::Demo,
        (false, false) => Source::Args(texts),
    };

    Ok(Command::Run(Options {
        config,
        compare,
        source,
    }))
}
