// crates/geostring-core/src/tokenize.rs
use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;

/// Delimiters that separate place names in free text.
pub const DEFAULT_DELIMITERS: [&str; 7] = [",", ";", "|", "&", " and ", "/", "\\"];

/// Every delimiter is rewritten to this separator before splitting.
const SEPARATOR: &str = ",";

static DEFAULT_DELIMITER_RE: Lazy<Regex> = Lazy::new(|| {
    delimiter_regex(&DEFAULT_DELIMITERS)
        .expect("invalid DEFAULT_DELIMITER_RE")
        .expect("DEFAULT_DELIMITERS is not empty")
});

fn delimiter_regex<S: AsRef<str>>(delimiters: &[S]) -> Result<Option<Regex>> {
    let alternation = delimiters
        .iter()
        .map(AsRef::as_ref)
        .filter(|d| !d.is_empty())
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    if alternation.is_empty() {
        return Ok(None);
    }
    Ok(Some(Regex::new(&alternation)?))
}

/// Splits raw input into place-name tokens.
///
/// Delimiters are literal strings (`" and "` is matched case-sensitively,
/// with its surrounding spaces). The comma always splits, even when it is
/// not part of the configured set.
///
/// Empty tokens are kept: `"Paris,,Lyon"` yields three tokens, the middle
/// one empty. The matcher is responsible for turning those into no-match
/// results.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    delimiters: Option<Regex>,
}

impl Tokenizer {
    pub fn new<S: AsRef<str>>(delimiters: &[S]) -> Result<Self> {
        Ok(Self {
            delimiters: delimiter_regex(delimiters)?,
        })
    }

    pub fn split(&self, input: &str) -> Vec<String> {
        let collapsed = match &self.delimiters {
            Some(re) => re.replace_all(input, SEPARATOR),
            None => input.into(),
        };
        collapsed.split(SEPARATOR).map(str::to_string).collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            delimiters: Some(DEFAULT_DELIMITER_RE.clone()),
        }
    }
}
