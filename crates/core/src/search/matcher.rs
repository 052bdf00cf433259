use crate::error::{CodataError, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Upper bound on the compiled size of a single search regex.
const REGEX_SIZE_LIMIT: usize = 1 << 20;

/// How a free-text query is turned into a name matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Whitespace-separated literal terms that must all occur, in any order.
    #[default]
    Terms,
    /// The whole query is a regular expression.
    Pattern,
}

impl std::str::FromStr for SearchMode {
    type Err = CodataError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "terms" => Ok(SearchMode::Terms),
            "pattern" => Ok(SearchMode::Pattern),
            other => Err(CodataError::Config(format!("unknown search mode '{}'", other))),
        }
    }
}

/// Case-insensitive predicate over display names.
#[derive(Debug, Clone)]
pub enum NameMatcher {
    /// Blank query: everything matches.
    Any,
    Terms(Vec<Regex>),
    Pattern(Regex),
}

impl NameMatcher {
    pub fn build(query: &str, mode: SearchMode, max_pattern_len: usize) -> Result<Self> {
        match mode {
            SearchMode::Terms => Self::terms(query, max_pattern_len),
            SearchMode::Pattern => Self::pattern(query, max_pattern_len),
        }
    }

    /// `"speed light"` matches "speed of light in vacuum": every term has to
    /// appear somewhere in the name. Terms are literal text, so `(` or `.`
    /// carry no regex meaning.
    pub fn terms(query: &str, max_len: usize) -> Result<Self> {
        check_len(query, max_len)?;
        let terms = query
            .split_whitespace()
            .map(|term| compile(&regex::escape(term)))
            .collect::<Result<Vec<_>>>()?;

        if terms.is_empty() {
            Ok(NameMatcher::Any)
        } else {
            Ok(NameMatcher::Terms(terms))
        }
    }

    pub fn pattern(query: &str, max_len: usize) -> Result<Self> {
        if query.trim().is_empty() {
            return Ok(NameMatcher::Any);
        }
        check_len(query, max_len)?;
        compile(query).map(NameMatcher::Pattern)
    }

    pub fn is_match(&self, name: &str) -> bool {
        match self {
            NameMatcher::Any => true,
            NameMatcher::Terms(terms) => terms.iter().all(|re| re.is_match(name)),
            NameMatcher::Pattern(re) => re.is_match(name),
        }
    }
}

fn check_len(query: &str, max_len: usize) -> Result<()> {
    let len = query.chars().count();
    if len > max_len {
        return Err(CodataError::InvalidPattern(format!(
            "query is {} characters long, the limit is {}",
            len, max_len
        )));
    }
    Ok(())
}

fn compile(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| CodataError::InvalidPattern(e.to_string()))
}
