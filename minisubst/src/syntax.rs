//! Documents the template syntax and provides ways to reconfigure it.
//!
//! # Synopsis
//!
//! A template is plain text with placeholder tags.  A tag is an opening
//! delimiter, a name and a closing delimiter.  By default the delimiters are
//! `${` and `}`:
//!
//! ```text
//! https://example.com/?user=${USER}&lang=${ LANG }
//! ```
//!
//! Whitespace around the name is ignored, so `${ LANG }` and `${LANG}` refer
//! to the same variable.  There are no expressions, filters, escapes or
//! control structures: everything between the delimiters is the name.
//!
//! # Matching Rules
//!
//! Delimiters are matched as plain substrings, left to right, always taking
//! the first occurrence.  There is no nesting or balancing, which matters
//! when the delimiters overlap with the text around them.  With `{{` / `}}`
//! the template `{{{X}}}` contains a tag named `{X` followed by the literal
//! text `}`.
//!
//! An opening delimiter without a matching closing delimiter does not start
//! a tag.  The text after it is kept as literal text, but the opening
//! delimiter itself is dropped: `a${b` renders as `ab`.
//!
//! Tags whose name is not provided at render time are written back out as
//! `open + name + close` using the trimmed name.
//!
//! # Custom Delimiters
//!
//! Any pair of non-empty strings can be used as delimiters:
//!
//! ```
//! # use minisubst::Syntax;
//! let syntax = Syntax::new("{{", "}}").unwrap();
//! let tmpl = syntax.parse("Hello {{ name }}!");
//! assert_eq!(tmpl.render(&[("name", "World")]), "Hello World!");
//! ```
//!
//! With the `serde` feature a [`Syntax`] can also be loaded from a config
//! file.  Missing fields fall back to the defaults and empty delimiters are
//! rejected.
use std::borrow::Cow;

use crate::error::{Error, ErrorKind};
use crate::template::Template;

/// The delimiter configuration for the parser.
///
/// The fields are public so a syntax can be built literally, but such a
/// value is not validated.  Empty delimiters are still handled without
/// looping forever: an empty opening delimiter disables tags entirely and
/// an empty closing delimiter ends every tag right where it starts.  Use
/// [`Syntax::new`] to reject them instead.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SyntaxDef")
)]
pub struct Syntax {
    /// The start of a tag. By default it is `${`.
    pub open: Cow<'static, str>,
    /// The end of a tag. By default it is `}`.
    pub close: Cow<'static, str>,
}

const DEFAULT_SYNTAX: Syntax = Syntax {
    open: Cow::Borrowed("${"),
    close: Cow::Borrowed("}"),
};

impl Default for Syntax {
    fn default() -> Self {
        DEFAULT_SYNTAX
    }
}

impl Syntax {
    /// Creates a syntax configuration with custom delimiters.
    ///
    /// Fails with [`ErrorKind::InvalidDelimiter`] if either delimiter is
    /// empty.
    pub fn new<O, C>(open: O, close: C) -> Result<Syntax, Error>
    where
        O: Into<Cow<'static, str>>,
        C: Into<Cow<'static, str>>,
    {
        let syntax = Syntax {
            open: open.into(),
            close: close.into(),
        };
        ok!(syntax.check_delimiters());
        Ok(syntax)
    }

    /// Parses a template with this syntax.
    ///
    /// This is the same as [`Template::from_syntax`].
    pub fn parse(&self, source: &str) -> Template {
        Template::from_syntax(source, self)
    }

    fn check_delimiters(&self) -> Result<(), Error> {
        if self.open.is_empty() {
            Err(Error::new(
                ErrorKind::InvalidDelimiter,
                "opening delimiter must not be empty",
            ))
        } else if self.close.is_empty() {
            Err(Error::new(
                ErrorKind::InvalidDelimiter,
                "closing delimiter must not be empty",
            ))
        } else {
            Ok(())
        }
    }
}

/// Unvalidated form of [`Syntax`] used for deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SyntaxDef {
    open: Cow<'static, str>,
    close: Cow<'static, str>,
}

#[cfg(feature = "serde")]
impl Default for SyntaxDef {
    fn default() -> Self {
        SyntaxDef {
            open: DEFAULT_SYNTAX.open,
            close: DEFAULT_SYNTAX.close,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<SyntaxDef> for Syntax {
    type Error = Error;

    fn try_from(value: SyntaxDef) -> Result<Self, Self::Error> {
        Syntax::new(value.open, value.close)
    }
}

#[test]
fn test_check_delimiters() {
    assert!(Syntax::default().check_delimiters().is_ok());
    assert!(Syntax::new("<%", "%>").is_ok());

    let err = Syntax::new("", "}").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDelimiter);
    assert_eq!(err.detail(), Some("opening delimiter must not be empty"));

    let err = Syntax::new("${", String::new()).unwrap_err();
    assert_eq!(err.detail(), Some("closing delimiter must not be empty"));
}
