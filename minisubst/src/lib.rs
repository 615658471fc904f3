//! minisubst is a tiny placeholder substitution engine.  A template is
//! parsed once into a [`Template`] and can then be rendered any number of
//! times against different sets of variables:
//!
//! ```
//! use minisubst::vars;
//!
//! let tmpl = minisubst::parse("https://example.com/?aa=${AB_CD}&bb=${ SOME }");
//! let rv = tmpl.render(&vars! { AB_CD => "1234", SOME => "ssss" });
//! assert_eq!(rv, "https://example.com/?aa=1234&bb=ssss");
//! ```
//!
//! There are no expressions, filters, loops or conditions.  A tag is a name
//! between two delimiters and rendering swaps it for a value.  Tags without
//! a value are left in the output, so templates can be filled in several
//! passes:
//!
//! ```
//! let tmpl = minisubst::parse("${scheme}://${host}/");
//! let partial = tmpl.render(&[("scheme", "https")]);
//! assert_eq!(partial, "https://${host}/");
//!
//! let full = minisubst::parse(&partial).render(&[("host", "example.com")]);
//! assert_eq!(full, "https://example.com/");
//! ```
//!
//! Parsing and rendering never fail.  See the [`syntax`] module for how
//! delimiters are matched, how unterminated tags are treated and how to use
//! custom delimiters.
//!
//! # Variables
//!
//! Anything implementing [`Vars`] can provide variables: the standard
//! `HashMap` and `BTreeMap` with string keys and values, lists of
//! `(name, value)` pairs, `()` for nothing at all, or your own types.  The
//! [`vars!`] macro is a shorthand for building a map inline.
//!
//! # Optional Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`Syntax`] so
//!   delimiters can be loaded from configuration files, and `Serialize` for
//!   [`Template`] and [`Segment`].  This feature is enabled by default.
//! - `tracing`: emits parser and renderer diagnostics through the
//!   [`tracing`](https://docs.rs/tracing) crate.  Parsing logs a trace event
//!   per template and rendering a debug event per unresolved tag.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

#[macro_use]
mod macros;

mod error;
mod parser;
mod template;
mod vars;

pub mod syntax;

pub use self::error::{Error, ErrorKind};
pub use self::parser::{Scanner, Segment};
pub use self::syntax::Syntax;
pub use self::template::Template;
pub use self::vars::Vars;

pub use self::macros::__vars;

/// Parses a template with the default `${` / `}` delimiters.
///
/// ```
/// let tmpl = minisubst::parse("A${X}B");
/// assert_eq!(tmpl.render(&[("X", "1")]), "A1B");
/// ```
pub fn parse(source: &str) -> Template {
    Template::new(source, Syntax::default())
}

/// Parses a template with custom delimiters.
///
/// The delimiters are matched literally.  They are not validated: an empty
/// opening delimiter means no tags are recognized and an empty closing
/// delimiter ends every tag immediately.  Use [`Syntax::new`] to reject
/// empty delimiters up front.
///
/// ```
/// let tmpl = minisubst::parse_with_delimiters("a{{X}}b", "{{", "}}");
/// assert_eq!(tmpl.render(&[("X", "1")]), "a1b");
/// ```
pub fn parse_with_delimiters(source: &str, open: &str, close: &str) -> Template {
    Template::new(
        source,
        Syntax {
            open: open.to_string().into(),
            close: close.to_string().into(),
        },
    )
}
