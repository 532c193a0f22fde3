//! A tiny command-line tokenizer.
//!
//! Tokens are sorted into three buckets: `--long` options, `-short` options
//! and positional arguments. An option either carries its value inline
//! (`--name=value`) or takes the very next token as its value, whatever that
//! token looks like. A lone `--` ends option parsing.
//!
//! ```
//! let result = telltale::parse(&["--foo", "bar", "-boo", "far", "-fiz=faz", "x", "--biz=baz", "y"]);
//! assert_eq!(result.long["foo"], "bar");
//! assert_eq!(result.long["biz"], "baz");
//! assert_eq!(result.short["boo"], "far");
//! assert_eq!(result.short["fiz"], "faz");
//! assert_eq!(result.args, vec!["x", "y"]);
//! ```
//!
//! There is no notion of arity, flags or validation. An option with no token
//! after it is simply dropped.
use std::collections::HashMap;

mod parse;
pub use parse::{from_env, parse, parse_argv};

/// Ends option parsing, everything after it is positional
pub const TERMINATOR: &str = "--";
pub const LONG_PREFIX: &str = "--";
pub const SHORT_PREFIX: &str = "-";

/// The classified tokens
#[derive(Default, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult {
    /// `--name value` and `--name=value`, keyed without the dashes
    pub long: HashMap<String, String>,
    /// `-name value` and `-name=value`, keyed without the dash
    pub short: HashMap<String, String>,
    /// positional arguments, in order
    pub args: Vec<String>,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.long.is_empty() && self.short.is_empty() && self.args.is_empty()
    }
}

impl<S> std::iter::FromIterator<S> for ParseResult
where
    S: AsRef<str>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        parse(iter)
    }
}
