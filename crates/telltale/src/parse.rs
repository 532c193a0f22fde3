use crate::{ParseResult, LONG_PREFIX, SHORT_PREFIX, TERMINATOR};
use std::collections::HashMap;

/// What the previous token left us waiting on
#[derive(Clone, Debug, PartialEq, Eq)]
enum State {
    Idle,
    AwaitingLong(String),
    AwaitingShort(String),
}

/// Tokenize `tokens`, which should not include the program path.
///
/// This never fails. Anything that doesn't look like an option is a
/// positional argument, and a pending option always consumes the next token
/// as its value (even `-x` or `--y`). Later values overwrite earlier ones.
pub fn parse<I>(tokens: I) -> ParseResult
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = ParseResult::default();
    let mut state = State::Idle;

    let mut iter = tokens.into_iter().map(|token| token.as_ref().to_string());
    while let Some(token) = iter.next() {
        if token == TERMINATOR {
            out.args.extend(iter);
            log::trace!("terminator reached, {} positional args", out.args.len());
            break;
        }

        state = match state {
            State::AwaitingLong(name) => {
                out.long.insert(name, token);
                State::Idle
            }
            State::AwaitingShort(name) => {
                out.short.insert(name, token);
                State::Idle
            }
            State::Idle => out.classify(token),
        };
    }

    // a pending option at this point never got its value
    match state {
        State::AwaitingLong(name) => log::trace!("dropping dangling option: --{}", name),
        State::AwaitingShort(name) => log::trace!("dropping dangling option: -{}", name),
        State::Idle => {}
    }

    out
}

/// Like [`parse`], but skips the first two entries of `argv` (the executable
/// and the script path)
pub fn parse_argv<I>(argv: I) -> ParseResult
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    parse(argv.into_iter().skip(2))
}

/// Tokenize the arguments of the current process, skipping the program path.
///
/// Arguments that aren't valid UTF-8 are converted lossily.
pub fn from_env() -> ParseResult {
    parse(
        std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned()),
    )
}

impl ParseResult {
    fn classify(&mut self, token: String) -> State {
        // the long prefix has to be checked first, it also starts with the short one
        if let Some(rest) = token.strip_prefix(LONG_PREFIX) {
            return assign(&mut self.long, rest).map_or(State::Idle, State::AwaitingLong);
        }

        if let Some(rest) = token.strip_prefix(SHORT_PREFIX) {
            return assign(&mut self.short, rest).map_or(State::Idle, State::AwaitingShort);
        }

        self.args.push(token);
        State::Idle
    }
}

/// Stores `name=value` right away, otherwise hands back the name that is
/// waiting on a value
fn assign(map: &mut HashMap<String, String>, option: &str) -> Option<String> {
    match option.split_once('=') {
        Some((name, value)) => {
            map.insert(name.to_string(), value.to_string());
            None
        }
        None => Some(option.to_string()),
    }
}
