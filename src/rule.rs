//! Pattern rules and rule groups.
//!
//! A [`Rule`] pairs one regular expression with an action. It only ever
//! matches at the very start of the text it is given (an anchored match, never
//! a search), and reports how many bytes it consumed:
//!
//! ```text
//! apply("123abc") with INT  ──▶ Applied(Int(123), 3)
//! apply("abc")    with INT  ──▶ NotApplied
//! apply("  x")    with \s+ (ignored) ──▶ Ignored(2)
//! ```
//!
//! A [`RuleGroup`] is an ordered, immutable list of rules where the first
//! rule that applies wins. Groups are composed with `|`:
//!
//! ```text
//! SINGLE_QUOTED | DOUBLE_QUOTED  ──▶ [SINGLE_QUOTED, DOUBLE_QUOTED]
//! (a | b) | (c | d)              ──▶ [a, b, c, d]
//! ```

use crate::Value;
use crate::error::{ConfigError, ConvertError};
use regex::{Regex, RegexBuilder};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::BitOr;
use std::sync::Arc;

type Converter = Arc<dyn Fn(&str) -> Result<Value, ConvertError> + Send + Sync>;

bitflags::bitflags! {
    /// Regex flags a rule is compiled with.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RuleFlags: u8 {
        /// Letters match both cases.
        const IGNORE_CASE = 1 << 0;
        /// `^` and `$` match at line boundaries.
        const MULTI_LINE  = 1 << 1;
        /// `.` also matches `\n`.
        const DOT_ALL     = 1 << 2;
        /// Whitespace in the pattern is insignificant and `#` starts a comment.
        const VERBOSE     = 1 << 3;
    }
}

/// What a rule does with the text it matched.
#[derive(Clone)]
enum Action {
    /// Emit the matched substring as [`Value::Str`].
    Emit,
    /// Consume the match, emit nothing.
    Ignore,
    /// Emit whatever the converter makes of the matched substring.
    Convert(Converter),
}

/// Result of applying a rule (or group) at the start of some text.
///
/// Lengths are byte lengths of the consumed prefix.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// The pattern does not match here.
    NotApplied,
    /// Matched, but the rule produces no token.
    Ignored(usize),
    /// Matched and produced a value.
    Applied(Value, usize),
}

impl MatchOutcome {
    pub fn is_applied(&self) -> bool {
        !matches!(self, MatchOutcome::NotApplied)
    }

    /// Consumed length, if the rule matched.
    pub fn len(&self) -> Option<usize> {
        match self {
            MatchOutcome::NotApplied => None,
            MatchOutcome::Ignored(len) | MatchOutcome::Applied(_, len) => Some(*len),
        }
    }
}

// --- Rule ----------------------------------------------------------------------

/// A regex-driven, position-anchored match-and-convert unit.
#[derive(Clone)]
pub struct Rule {
    pattern: String,
    flags: RuleFlags,
    regex: Regex,
    action: Action,
}

impl Rule {
    /// A rule that emits the matched substring.
    pub fn new(pattern: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder(pattern).build()
    }

    /// A rule that emits `converter(matched)`.
    pub fn convert<F, V, E>(pattern: impl Into<String>, converter: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<V, E> + Send + Sync + 'static,
        V: Into<Value>,
        E: Into<ConvertError>,
    {
        Self::builder(pattern).converter(converter).build()
    }

    /// A rule that consumes its match and emits nothing.
    pub fn ignored(pattern: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder(pattern).ignore(true).build()
    }

    pub fn builder(pattern: impl Into<String>) -> RuleBuilder {
        RuleBuilder { pattern: pattern.into(), flags: RuleFlags::empty(), converter: None, ignore: false }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> RuleFlags {
        self.flags
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self.action, Action::Ignore)
    }

    pub fn has_converter(&self) -> bool {
        matches!(self.action, Action::Convert(_))
    }

    /// Whether the rule changes what is emitted (ignores or converts).
    fn has_effect(&self) -> bool {
        !matches!(self.action, Action::Emit)
    }

    /// Match the rule at the start of `target`.
    ///
    /// Converter failures are returned unchanged.
    pub fn apply(&self, target: &str) -> Result<MatchOutcome, ConvertError> {
        let Some(m) = self.regex.find(target).filter(|m| m.start() == 0) else {
            return Ok(MatchOutcome::NotApplied);
        };
        let len = m.end();
        let outcome = match &self.action {
            Action::Ignore => MatchOutcome::Ignored(len),
            Action::Emit => MatchOutcome::Applied(Value::Str(m.as_str().to_string()), len),
            Action::Convert(convert) => MatchOutcome::Applied(convert(m.as_str())?, len),
        };
        Ok(outcome)
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.flags == other.flags && self.has_effect() == other.has_effect()
    }
}

impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.flags.hash(state);
        self.has_effect().hash(state);
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self.action {
            Action::Emit => "emit",
            Action::Ignore => "ignore",
            Action::Convert(_) => "<converter>",
        };
        f.debug_struct("Rule")
            .field("pattern", &self.pattern)
            .field("flags", &self.flags)
            .field("action", &action)
            .finish()
    }
}

/// Builder for [`Rule`]; validation happens in [`RuleBuilder::build`].
pub struct RuleBuilder {
    pattern: String,
    flags: RuleFlags,
    converter: Option<Converter>,
    ignore: bool,
}

impl RuleBuilder {
    pub fn flags(mut self, flags: RuleFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn converter<F, V, E>(mut self, converter: F) -> Self
    where
        F: Fn(&str) -> Result<V, E> + Send + Sync + 'static,
        V: Into<Value>,
        E: Into<ConvertError>,
    {
        let converter: Converter = Arc::new(move |s: &str| -> Result<Value, ConvertError> {
            converter(s).map(Into::into).map_err(Into::into)
        });
        self.converter = Some(converter);
        self
    }

    pub fn ignore(mut self, ignore: bool) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn build(self) -> Result<Rule, ConfigError> {
        let action = match (self.ignore, self.converter) {
            (true, Some(_)) => return Err(ConfigError::ConflictingAction { pattern: self.pattern }),
            (true, None) => Action::Ignore,
            (false, Some(convert)) => Action::Convert(convert),
            (false, None) => Action::Emit,
        };
        let regex = compile_anchored(&self.pattern, self.flags)
            .map_err(|source| ConfigError::InvalidPattern { pattern: self.pattern.clone(), source })?;
        Ok(Rule { pattern: self.pattern, flags: self.flags, regex, action })
    }
}

/// Compile `pattern` so it can only match at the start of the haystack.
///
/// The bare pattern must compile on its own first: one with unbalanced
/// parentheses such as `x)|(y` would otherwise close the anchoring group early
/// and turn the rest into an unanchored alternative.
///
/// In verbose mode the group is closed on its own line; otherwise a trailing
/// `# comment` in the pattern would swallow the closing parenthesis.
fn compile_anchored(pattern: &str, flags: RuleFlags) -> Result<Regex, regex::Error> {
    compile(pattern, flags)?;
    let anchored = if flags.contains(RuleFlags::VERBOSE) {
        format!("\\A(?:{pattern}\n)")
    } else {
        format!("\\A(?:{pattern})")
    };
    compile(&anchored, flags)
}

fn compile(pattern: &str, flags: RuleFlags) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(flags.contains(RuleFlags::IGNORE_CASE))
        .multi_line(flags.contains(RuleFlags::MULTI_LINE))
        .dot_matches_new_line(flags.contains(RuleFlags::DOT_ALL))
        .ignore_whitespace(flags.contains(RuleFlags::VERBOSE))
        .build()
}

// --- RuleGroup -------------------------------------------------------------------

/// An ordered, first-match-wins collection of rules.
///
/// Members sit behind an `Arc`, so clones share them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RuleGroup {
    rules: Arc<[Rule]>,
}

impl RuleGroup {
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
        RuleGroup { rules: rules.into_iter().collect() }
    }

    /// Apply member rules in order and return the first one that matches.
    pub fn apply(&self, target: &str) -> Result<MatchOutcome, ConvertError> {
        for rule in self.rules.iter() {
            let outcome = rule.apply(target)?;
            if outcome.is_applied() {
                return Ok(outcome);
            }
        }
        Ok(MatchOutcome::NotApplied)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn concat(&self, other: &RuleGroup) -> RuleGroup {
        RuleGroup::new(self.iter().chain(other.iter()).cloned())
    }
}

impl<'a> IntoIterator for &'a RuleGroup {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl FromIterator<Rule> for RuleGroup {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        RuleGroup::new(iter)
    }
}

impl From<Rule> for RuleGroup {
    fn from(rule: Rule) -> Self {
        RuleGroup::new([rule])
    }
}

impl From<&Rule> for RuleGroup {
    fn from(rule: &Rule) -> Self {
        RuleGroup::new([rule.clone()])
    }
}

impl From<&RuleGroup> for RuleGroup {
    fn from(group: &RuleGroup) -> Self {
        group.clone()
    }
}

// `a | b` for any mix of rules, groups and references to either. Operands are
// never modified; the result is a new flattened group.

impl<R: Into<RuleGroup>> BitOr<R> for Rule {
    type Output = RuleGroup;

    fn bitor(self, rhs: R) -> RuleGroup {
        RuleGroup::from(self).concat(&rhs.into())
    }
}

impl<R: Into<RuleGroup>> BitOr<R> for &Rule {
    type Output = RuleGroup;

    fn bitor(self, rhs: R) -> RuleGroup {
        RuleGroup::from(self).concat(&rhs.into())
    }
}

impl<R: Into<RuleGroup>> BitOr<R> for RuleGroup {
    type Output = RuleGroup;

    fn bitor(self, rhs: R) -> RuleGroup {
        self.concat(&rhs.into())
    }
}

impl<R: Into<RuleGroup>> BitOr<R> for &RuleGroup {
    type Output = RuleGroup;

    fn bitor(self, rhs: R) -> RuleGroup {
        self.concat(&rhs.into())
    }
}
