mod debug_report;

use petalex::{Empty, Options, Symbol, Tokenizer, common, symbols};
use std::io::{self, IsTerminal, Read};

symbols! {
    /// Arithmetic operators and brackets, enabled with `--operators`.
    enum Operator {
        Add => "+",
        Sub => "-",
        Mul => "*",
        Div => "/",
        Pow => "**",
        Mod => "%",
        Eq => "=",
        LParen => "(",
        RParen => ")",
    }
}

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let code = if config.operators { run::<Operator>(&config) } else { run::<Empty>(&config) };
    std::process::exit(code);
}

fn run<S: Symbol>(config: &CliConfig) -> i32 {
    let tokenizer = match Tokenizer::<S>::new(config.options.clone()) {
        Ok(tokenizer) => tokenizer,
        Err(err) => {
            eprintln!("error: {err}");
            return 2;
        }
    };

    let outcome = if config.lines {
        tokenizer.tokenize_lines(&config.input).map(|lines| debug_report::print_lines(&config.input, &lines, config.color))
    } else {
        tokenizer
            .tokenize_with_metrics(&config.input)
            .map(|result| debug_report::print_run(&config.input, &result, config.color))
    };

    match outcome {
        Ok(()) => 0,
        Err(err) => {
            debug_report::print_error(&config.input, &err, config.color);
            1
        }
    }
}

struct CliConfig {
    input: String,
    options: Options,
    operators: bool,
    lines: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut options = Options::default();
    let mut operators = false;
    let mut lines = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("petalex {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--operators" => operators = true,
            "--lines" => lines = true,
            "-w" | "--ignore-whitespace" => options.ignore_whitespace = true,
            "--suppress-unknown" => options.suppress_unknown = true,
            "--keep-crlf" => options.convert_crlf = false,
            "--ignore" => {
                let value = args.next().ok_or_else(|| "error: --ignore expects a value".to_string())?;
                options.ignored_characters.push_str(&value);
            }
            "--rule" => {
                let value = args.next().ok_or_else(|| "error: --rule expects a value".to_string())?;
                options.rules.push(parse_rule(&value)?);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--rule=") => {
                options.rules.push(parse_rule(arg.trim_start_matches("--rule="))?);
            }
            _ if arg.starts_with("--ignore=") => {
                options.ignored_characters.push_str(arg.trim_start_matches("--ignore="));
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, options, operators, lines, color })
}

fn parse_rule(name: &str) -> Result<petalex::RuleGroup, String> {
    common::named(&name.to_ascii_lowercase())
        .ok_or_else(|| format!("error: unknown rule '{name}' (known: {})", common::NAMES.join(", ")))
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "petalex {version}

Rule-driven tokenizer CLI.

Usage:
  petalex [OPTIONS] [--] <input...>
  petalex [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text to tokenize. If omitted, reads remaining
                             args or stdin when no args are provided.
  --rule <name>              Add a library rule (repeatable, tried in order).
                             Known: {rules}
  --operators                Recognize arithmetic operators and brackets.
  -w, --ignore-whitespace    Skip spaces, tabs and line breaks.
  --ignore <chars>           Skip these characters.
  --suppress-unknown         Drop characters nothing matches instead of failing.
  --keep-crlf                Do not convert \\r\\n to \\n.
  --lines                    Tokenize each line on its own.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Logging:
  RUST_LOG=petalex=debug     Tokenizer construction details.
  RUST_LOG=petalex=trace     Every recognized or suppressed character.

Exit codes:
  0  Success.
  1  Tokenization failed.
  2  Invalid arguments, configuration or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        rules = common::NAMES.join(", ")
    )
}
