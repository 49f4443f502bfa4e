//! Substitute named variables into an expression string before parsing.
//!
//! A variable is written as the configured prefix, a name made of
//! alphanumerics, `_` and `-`, and an optional suffix. With the default
//! `{`/`}` identifiers:
//!
//! ```
//! use xpr_core::bind::bind;
//!
//! let s = bind(
//!     "{price} - ({price} * {discount-percentage})",
//!     &[("price", 100.into()), ("discount-percentage", 0.1.into())],
//! )
//! .unwrap();
//! assert_eq!(s, "100 - (100 * 0.1)");
//! ```
//!
//! Values render in expression syntax (strings are quoted), so the result is
//! ready to feed to the parser. Unknown names substitute to an empty string.

use core::fmt;

use hashbrown::HashMap;
use thiserror::Error;

use crate::{String, ToString, format};

/// A value that can be substituted for a variable.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for BindValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindValue::Bool(b) => write!(f, "{b}"),
            BindValue::Int(n) => write!(f, "{n}"),
            BindValue::Float(x) => write!(f, "{x}"),
            // Quoted so the substituted text parses as a string literal.
            BindValue::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

impl From<bool> for BindValue {
    fn from(v: bool) -> Self {
        BindValue::Bool(v)
    }
}
impl From<i64> for BindValue {
    fn from(v: i64) -> Self {
        BindValue::Int(v)
    }
}
impl From<i32> for BindValue {
    fn from(v: i32) -> Self {
        BindValue::Int(v.into())
    }
}
impl From<f64> for BindValue {
    fn from(v: f64) -> Self {
        BindValue::Float(v)
    }
}
impl From<&str> for BindValue {
    fn from(v: &str) -> Self {
        BindValue::Str(v.to_string())
    }
}
impl From<String> for BindValue {
    fn from(v: String) -> Self {
        BindValue::Str(v)
    }
}

/// Binding errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindError {
    /// No variable pairs were supplied.
    #[error("pairs is empty")]
    EmptyPairs,
    /// The prefix identifier is mandatory.
    #[error("prefix identifier is empty")]
    EmptyPrefix,
    /// A variable pattern did not terminate the way the identifier requires.
    #[error("{message} [value: \"{value}\", begin: {begin}, end: {end}]: malformed variable pattern")]
    MalformedPattern {
        message: String,
        value: String,
        begin: usize,
        end: usize,
    },
}

/// Variable name identifier. The prefix is mandatory, the suffix optional:
/// `{price}` uses `{`/`}`, `:price` uses `:` and no suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub prefix: String,
    pub suffix: String,
}

impl Default for Ident {
    fn default() -> Self {
        Self {
            prefix: "{".to_string(),
            suffix: "}".to_string(),
        }
    }
}

/// Binds variable values into a string expression using its [`Ident`] to
/// locate variable names.
#[derive(Debug, Clone, Default)]
pub struct Binder {
    pub ident: Ident,
}

/// Bind `pairs` into `s` using the default `{`/`}` identifier.
pub fn bind(s: &str, pairs: &[(&str, BindValue)]) -> Result<String, BindError> {
    Binder::default().bind(s, pairs)
}

impl Binder {
    pub fn new(ident: Ident) -> Self {
        Self { ident }
    }

    /// Bind `pairs` into `s`. Names may contain alphanumerics, `_` and `-`.
    ///
    /// When the identifier has no suffix a variable ends at the first
    /// character that cannot be part of a name, or at the end of the input.
    /// When a suffix is configured, a variable broken by a non-name character
    /// before its suffix is an error.
    pub fn bind(&self, s: &str, pairs: &[(&str, BindValue)]) -> Result<String, BindError> {
        if pairs.is_empty() {
            return Err(BindError::EmptyPairs);
        }
        if self.ident.prefix.is_empty() {
            return Err(BindError::EmptyPrefix);
        }

        let prefix = self.ident.prefix.as_bytes();
        let suffix = self.ident.suffix.as_bytes();

        let mut values: HashMap<&str, String> = HashMap::with_capacity(pairs.len());
        for (key, value) in pairs {
            values.insert(*key, value.to_string());
        }
        let lookup = |name: &str| values.get(name).map(String::as_str).unwrap_or("").to_string();

        let bytes = s.as_bytes();
        let mut out = String::new();
        let mut in_variable = false;
        let mut broke_by_suffix = false;
        let mut begin = 0usize;
        let mut cur = 0usize;

        let mut i = 0usize;
        while i < bytes.len() {
            if !in_variable {
                if i + prefix.len() < bytes.len() && &bytes[i..i + prefix.len()] == prefix {
                    in_variable = true;
                    broke_by_suffix = false;
                    begin = i;
                    i += prefix.len();
                    continue;
                }
                i += 1;
                continue;
            }

            if !suffix.is_empty()
                && i + suffix.len() <= bytes.len()
                && &bytes[i..i + suffix.len()] == suffix
            {
                let end = i + suffix.len();
                out.push_str(&s[cur..begin]);
                out.push_str(&lookup(&s[begin + prefix.len()..end - suffix.len()]));
                cur = end;
                i = end;
                in_variable = false;
                broke_by_suffix = true;
                continue;
            }

            let b = bytes[i];
            // Non-ASCII bytes stay part of the name, which also keeps every
            // slice boundary on an ASCII character.
            if !(b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b >= 0x80) {
                let end = i;
                in_variable = false;
                broke_by_suffix = false;
                if !suffix.is_empty() {
                    return Err(BindError::MalformedPattern {
                        message: format!(
                            "suffix is specified but the variable is broken by '{}' before reaching it",
                            b as char
                        ),
                        value: s[begin..end].to_string(),
                        begin,
                        end,
                    });
                }
                out.push_str(&s[cur..begin]);
                out.push_str(&lookup(&s[begin + prefix.len()..end]));
                cur = end;
                continue;
            }
            i += 1;
        }

        if in_variable && !suffix.is_empty() && !broke_by_suffix {
            return Err(BindError::MalformedPattern {
                message: "suffix is specified but missing at the end of the input".to_string(),
                value: s[begin..].to_string(),
                begin,
                end: s.len(),
            });
        }

        // With no suffix configured, close a variable that runs to the end of
        // the input.
        if in_variable && suffix.is_empty() {
            out.push_str(&s[cur..begin]);
            out.push_str(&lookup(&s[begin + prefix.len()..]));
            cur = s.len();
        }

        out.push_str(&s[cur..]);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bind_default_ident() {
        let s = bind(
            "{price} - ({price} * {discount})",
            &[("price", 100.into()), ("discount", 0.1.into())],
        )
        .unwrap();
        assert_eq!(s, "100 - (100 * 0.1)");
    }

    #[test]
    fn test_bind_value_rendering() {
        let s = bind(
            "{a} {b} {c} {d}",
            &[
                ("a", 1.into()),
                ("b", 2.5.into()),
                ("c", true.into()),
                ("d", "abc".into()),
            ],
        )
        .unwrap();
        assert_eq!(s, "1 2.5 true \"abc\"");
    }

    #[test]
    fn test_bind_unknown_name_becomes_empty() {
        let s = bind("{price} + {unknown}", &[("price", 1.into())]).unwrap();
        assert_eq!(s, "1 + ");
    }

    #[test]
    fn test_bind_dashed_names() {
        let s = bind(
            "{discount-percentage}",
            &[("discount-percentage", 0.25.into())],
        )
        .unwrap();
        assert_eq!(s, "0.25");
    }

    #[test]
    fn test_bind_empty_pairs() {
        assert_eq!(bind("{a}", &[]), Err(BindError::EmptyPairs));
    }

    #[test]
    fn test_bind_empty_prefix() {
        let binder = Binder::new(Ident {
            prefix: String::new(),
            suffix: String::new(),
        });
        assert_eq!(
            binder.bind("{a}", &[("a", 1.into())]),
            Err(BindError::EmptyPrefix)
        );
    }

    #[test]
    fn test_bind_broken_suffix_is_error() {
        let err = bind("{price - 10}", &[("price", 1.into())]).unwrap_err();
        assert!(matches!(err, BindError::MalformedPattern { .. }));
    }

    #[test]
    fn test_bind_missing_suffix_at_end_is_error() {
        let err = bind("cost: {price", &[("price", 1.into())]).unwrap_err();
        assert!(matches!(err, BindError::MalformedPattern { .. }));
    }

    #[test]
    fn test_bind_prefix_only_ident() {
        let binder = Binder::new(Ident {
            prefix: ":".to_string(),
            suffix: String::new(),
        });
        let s = binder
            .bind(":price - 10", &[("price", 100.into())])
            .unwrap();
        assert_eq!(s, "100 - 10");
    }

    #[test]
    fn test_bind_prefix_only_trailing_variable() {
        let binder = Binder::new(Ident {
            prefix: ":".to_string(),
            suffix: String::new(),
        });
        let s = binder.bind("10 - :price", &[("price", 3.into())]).unwrap();
        assert_eq!(s, "10 - 3");
    }
}
