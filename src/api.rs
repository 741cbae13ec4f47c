use crate::RuleGroup;

/// Characters skipped when [`Options::ignore_whitespace`] is set.
pub(crate) const WHITESPACE: &str = " \u{c}\t\u{b}\r\n";

/// Tokenizer construction options.
///
/// Literal symbols always take priority over rules; rules are tried in the
/// order they were added.
///
/// ```
/// use petalex::{Options, RuleTokenizer, common};
///
/// let tokenizer = RuleTokenizer::new(Options::default().with_rule(&*common::WORD).ignoring_whitespace()).unwrap();
/// assert_eq!(tokenizer.tokenize("hello there").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Replace `\r\n` with `\n` before scanning.
    pub convert_crlf: bool,
    /// Add the whitespace set (` \f\t\v\r\n`) to the ignored characters.
    pub ignore_whitespace: bool,
    /// Characters skipped between tokens.
    pub ignored_characters: String,
    /// Drop characters nothing matches instead of failing.
    pub suppress_unknown: bool,
    /// Rules in priority order (highest first). Groups are flattened.
    pub rules: Vec<RuleGroup>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            convert_crlf: true,
            ignore_whitespace: false,
            ignored_characters: String::new(),
            suppress_unknown: false,
            rules: Vec::new(),
        }
    }
}

impl Options {
    /// Append a rule or a group of rules.
    pub fn with_rule(mut self, rule: impl Into<RuleGroup>) -> Self {
        self.rules.push(rule.into());
        self
    }

    /// Append several rules or groups, keeping their order.
    pub fn with_rules<R: Into<RuleGroup>>(mut self, rules: impl IntoIterator<Item = R>) -> Self {
        self.rules.extend(rules.into_iter().map(Into::into));
        self
    }

    /// Add `chars` to the ignored characters.
    pub fn with_ignored(mut self, chars: &str) -> Self {
        self.ignored_characters.push_str(chars);
        self
    }

    pub fn ignoring_whitespace(mut self) -> Self {
        self.ignore_whitespace = true;
        self
    }

    pub fn suppressing_unknown(mut self) -> Self {
        self.suppress_unknown = true;
        self
    }

    /// Leave `\r\n` sequences untouched.
    pub fn keeping_crlf(mut self) -> Self {
        self.convert_crlf = false;
        self
    }

    /// All configured rules, flattened into one ordered group.
    pub(crate) fn flattened_rules(&self) -> RuleGroup {
        self.rules.iter().flat_map(|group| group.iter().cloned()).collect()
    }

    /// The effective ignored character set, whitespace included when asked.
    pub(crate) fn ignored_set(&self) -> impl Iterator<Item = char> + '_ {
        let whitespace = if self.ignore_whitespace { WHITESPACE } else { "" };
        whitespace.chars().chain(self.ignored_characters.chars())
    }
}
