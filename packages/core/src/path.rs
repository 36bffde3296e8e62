//! Dot paths: `a.b.list[2].c`.

use std::fmt;
use std::str::FromStr;

use crate::grammar::is_whole_number;

/// Errors related to dot path tokenizing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("The path is empty or blank")]
    Empty,
    #[error("The path {path:?} has an empty or blank token at position #{position}")]
    BlankToken { path: String, position: usize },
}

// Breaking whitespace only. The no-break spaces are ordinary key characters,
// so `"\u{a0}"` is a usable token while `" "` is not.
fn is_blank(text: &str) -> bool {
    text.chars().all(|c| match c {
        '\u{a0}' | '\u{2007}' | '\u{202f}' => false,
        '\t' | '\n' | '\u{b}' | '\u{c}' | '\r' | '\u{1c}'..='\u{1f}' | ' ' => true,
        '\u{1680}' | '\u{2000}'..='\u{200a}' | '\u{2028}' | '\u{2029}' | '\u{205f}' | '\u{3000}' => true,
        _ => false,
    })
}

/// A tokenized dot path.
///
/// Tokens are the `.`-separated pieces of the path string, kept verbatim
/// (no trimming). Every token is guaranteed non-blank, so a `DotPath` is
/// never empty.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DotPath {
    pub tokens: Vec<String>,
}

impl DotPath {
    /// Split a path string on `.`, rejecting empty and blank tokens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nodepath_core::DotPath;
    ///
    /// let path = DotPath::parse("a.b.list[2].c").unwrap();
    /// assert_eq!(path.len(), 4);
    ///
    /// // Leading, trailing and doubled dots all leave a blank token behind
    /// assert!(DotPath::parse(".a").is_err());
    /// assert!(DotPath::parse("a.").is_err());
    /// assert!(DotPath::parse("a..b").is_err());
    /// ```
    pub fn parse(path: &str) -> Result<Self, PathError> {
        if is_blank(path) {
            return Err(PathError::Empty);
        }

        let mut tokens = Vec::new();
        for (position, token) in path.split('.').enumerate() {
            if is_blank(token) {
                return Err(PathError::BlankToken {
                    path: path.to_string(),
                    position,
                });
            }
            tokens.push(token.to_string());
        }

        Ok(DotPath { tokens })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false for a parsed path; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tokens.iter()
    }

    /// Iterate over tokens classified as plain keys or list indices.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
        self.tokens.iter().map(|t| Segment::parse(t))
    }
}

impl FromStr for DotPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DotPath::parse(s)
    }
}

impl fmt::Display for DotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join("."))
    }
}

impl std::ops::Index<usize> for DotPath {
    type Output = String;

    fn index(&self, i: usize) -> &Self::Output {
        &self.tokens[i]
    }
}

/// One path token, classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Plain map key, e.g. `b`.
    Key(&'a str),
    /// `key[index]`: look up `key`, then take element `index` of that list.
    Indexed { key: &'a str, index: i64 },
    /// Ends with `]` but is not `key[whole-number]`.
    Malformed(&'a str),
}

impl<'a> Segment<'a> {
    /// Classify a token.
    ///
    /// Only a token ending in `]` is an index attempt. With the `]`
    /// removed it must split on `[` into exactly a key and a whole number
    /// (optionally signed) that fits an `i64`.
    pub fn parse(token: &'a str) -> Segment<'a> {
        let Some(body) = token.strip_suffix(']') else {
            return Segment::Key(token);
        };

        let mut parts = body.split('[');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(index), None) if is_whole_number(index) => {
                match index.parse::<i64>() {
                    Ok(index) => Segment::Indexed { key, index },
                    Err(_) => Segment::Malformed(token),
                }
            }
            _ => Segment::Malformed(token),
        }
    }
}

/// Map a possibly-negative index onto a list of `len` elements.
///
/// `0 <= index < len` counts from the start. `-len <= index < 0` counts from
/// the end, so `-1` is the last element and `-len` the first. Anything else
/// is out of bounds.
pub fn resolve_index(len: usize, index: i64) -> Option<usize> {
    if index >= 0 {
        let index = usize::try_from(index).ok()?;
        (index < len).then_some(index)
    } else {
        let from_end = usize::try_from(index.unsigned_abs()).ok()?;
        len.checked_sub(from_end)
    }
}

/// Macro for dot path literals.
///
/// # Example
///
/// ```rust
/// use nodepath_core::dot_path;
///
/// let p = dot_path!("users[0].name");
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! dot_path {
    ($s:expr) => {
        $crate::DotPath::parse($s).expect("invalid dot path literal")
    };
}
