//! Command-line option lookup over a strategy description.

use crate::error::{Error, Result};
use crate::ingest::COMMENT_MARKER;

/// The whitespace-separated words of a description, comment markers removed.
///
/// Later occurrences of an option override earlier ones, as on the prover's
/// own command line.
#[derive(Debug, Clone)]
pub(crate) struct OptionWords<'a> {
    words: Vec<&'a str>,
}

impl<'a> OptionWords<'a> {
    pub(crate) fn new(description: &'a str) -> Self {
        Self {
            words: description
                .split_whitespace()
                .filter(|word| !word.starts_with(COMMENT_MARKER))
                .collect(),
        }
    }

    /// Whether any of the exact spellings is present.
    pub(crate) fn flag(&self, spellings: &[&str]) -> bool {
        self.words.iter().any(|word| spellings.contains(word))
    }

    /// Argument of `-X<arg>`, `-X <arg>` or `--long=<arg>`.
    pub(crate) fn value(&self, short: Option<&str>, long: &str) -> Result<Option<&'a str>> {
        let mut found = None;
        let mut words = self.words.iter().copied().peekable();

        while let Some(word) = words.next() {
            let arg = if let Some(rest) = word.strip_prefix(long) {
                rest
            } else if let Some(short) = short.filter(|s| is_short_form(word, s)) {
                if word == short {
                    words
                        .next_if(|next| !next.starts_with('-'))
                        .unwrap_or_default()
                } else {
                    &word[short.len()..]
                }
            } else {
                continue;
            };

            let arg = arg.trim_matches('\'');
            if arg.is_empty() {
                return Err(Error::MissingArgument {
                    option: word.to_string(),
                });
            }
            found = Some(arg);
        }

        Ok(found)
    }

    /// Argument parsed with `FromStr`.
    pub(crate) fn parsed<T>(&self, short: Option<&str>, long: &str) -> Result<Option<T>>
    where
        T: std::str::FromStr,
    {
        self.value(short, long)?
            .map(|arg| {
                arg.parse().map_err(|_| Error::InvalidArgument {
                    option: long.trim_end_matches('=').to_string(),
                    value: arg.to_string(),
                })
            })
            .transpose()
    }

    /// Argument looked up in a closed code table.
    pub(crate) fn code<T>(&self, short: Option<&str>, long: &str) -> Result<Option<T>>
    where
        T: std::str::FromStr<Err = Error>,
    {
        self.value(short, long)?
            .map(|arg| arg.parse::<T>())
            .transpose()
    }
}

fn is_short_form(word: &str, short: &str) -> bool {
    word.starts_with(short) && !word.starts_with("--")
}
