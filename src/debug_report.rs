use petalex::{Error, ScanResult, Symbol, Token};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run<S: Symbol>(input: &str, result: &ScanResult<S>, color: bool) {
    let palette = ansi::Palette::new(color);
    print_header(input, &palette);

    println!("\n{}", palette.paint("━━━ Tokens ━━━", ansi::GRAY));
    if result.tokens.is_empty() {
        println!("{}", palette.dim("  No tokens produced"));
    } else {
        print_tokens(&result.tokens, &palette);
    }

    let m = &result.metrics;
    println!("\n{}", palette.paint("━━━ Scan ━━━", ansi::GRAY));
    println!(
        "  Path: {}  │  Symbols: {}  │  Rules: {}  │  Ignored: {}  │  Suppressed: {}",
        palette.paint(m.path.to_string(), ansi::CYAN),
        palette.paint(m.symbol_hits.to_string(), ansi::BLUE),
        palette.paint(m.rule_hits.to_string(), ansi::BLUE),
        palette.dim(m.ignored_matches.to_string()),
        palette.paint(m.suppressed.to_string(), if m.suppressed > 0 { ansi::YELLOW } else { ansi::GRAY }),
    );
    println!("  Total: {}", palette.paint(format!("{:?}", m.elapsed), ansi::GREEN));
    println!();
}

pub fn print_lines<S: Symbol>(input: &str, lines: &[Vec<Token<S>>], color: bool) {
    let palette = ansi::Palette::new(color);
    print_header(input, &palette);

    println!("\n{}", palette.paint("━━━ Lines ━━━", ansi::GRAY));
    if lines.is_empty() {
        println!("{}", palette.dim("  No lines"));
    }
    for (idx, tokens) in lines.iter().enumerate() {
        println!("  {}", palette.paint(format!("line {}", idx + 1), ansi::BLUE));
        if tokens.is_empty() {
            println!("    {}", palette.dim("(empty)"));
        }
        for token in tokens {
            println!("    {}", fmt_token(token, &palette));
        }
    }
    println!();
}

pub fn print_error(input: &str, err: &Error, color: bool) {
    let palette = ansi::Palette::new(color);
    print_header(input, &palette);
    println!("\n{} {}", palette.bold(palette.paint("✗", ansi::RED)), palette.paint(err.to_string(), ansi::RED));
    if let Error::InvalidToken { .. } = err {
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • No symbol literal or rule matches at this position");
        println!("  • The character should be ignored (--ignore, --ignore-whitespace)");
        println!("  • Unknown input should be dropped (--suppress-unknown)");
        println!("\n{}", palette.dim("  Tip: Set RUST_LOG=petalex=trace to see every recognized token"));
    }
    println!();
}

fn print_header(input: &str, palette: &ansi::Palette) {
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Tokenizing: {:?}", input), ansi::CYAN)));
}

fn print_tokens<S: Symbol>(tokens: &[Token<S>], palette: &ansi::Palette) {
    for (idx, token) in tokens.iter().enumerate() {
        println!("  {} {}", palette.paint(format!("[{}]", idx), ansi::GRAY), fmt_token(token, palette));
    }
}

fn fmt_token<S: Symbol>(token: &Token<S>, palette: &ansi::Palette) -> String {
    match token {
        Token::Symbol(_) => format!("{} {}", palette.bold(palette.paint(token.to_string(), ansi::GREEN)), palette.dim("symbol")),
        Token::Value(_) => format!("{} {}", palette.paint(token.to_string(), ansi::YELLOW), palette.dim("value")),
    }
}
