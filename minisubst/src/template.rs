use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;

use crate::parser::{parse, Segment};
use crate::syntax::Syntax;
use crate::vars::Vars;

/// A parsed template.
///
/// Templates are created with [`parse`](crate::parse),
/// [`parse_with_delimiters`](crate::parse_with_delimiters) or
/// [`Template::from_syntax`] and can then be rendered any number of times.
/// They own all their data and are never modified by rendering, so one
/// template can be shared between threads and rendered concurrently with
/// different variables.
///
/// ```
/// let tmpl = minisubst::parse("Hello ${name}!");
/// assert_eq!(tmpl.render(&[("name", "John")]), "Hello John!");
/// assert_eq!(tmpl.render(&[("name", "Jane")]), "Hello Jane!");
/// ```
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Template {
    syntax: Syntax,
    segments: Vec<Segment>,
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("open", &self.syntax.open)
            .field("close", &self.syntax.close)
            .field("segments", &self.segments)
            .finish()
    }
}

/// Writes the canonical source form of the template.
///
/// Literal text is written as is and every tag is written with its trimmed
/// name between the template's delimiters.  This is exactly what rendering
/// with no variables produces.
impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_segments(&(), |s| f.write_str(s))
    }
}

impl Template {
    /// Parses a template with a syntax configuration.
    pub fn from_syntax(source: &str, syntax: &Syntax) -> Template {
        Template::new(source, syntax.clone())
    }

    pub(crate) fn new(source: &str, syntax: Syntax) -> Template {
        Template {
            segments: parse(source, &syntax),
            syntax,
        }
    }

    /// Returns the delimiters the template was parsed with.
    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// Returns the parsed segments in source order.
    ///
    /// Literal segments can be empty, for instance between two adjacent tags.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Renders the template into a string.
    ///
    /// Every tag is replaced by the value `vars` holds for its name.  Tags
    /// without a value are written back out wrapped in the template's
    /// delimiters.
    ///
    /// ```
    /// # use minisubst::vars;
    /// let tmpl = minisubst::parse("${X}${Y}");
    /// assert_eq!(tmpl.render(&vars! { Y => "2" }), "${X}2");
    /// ```
    pub fn render<V: Vars + ?Sized>(&self, vars: &V) -> String {
        let mut rv = String::with_capacity(self.size_hint());
        match self.write_segments(vars, |s| {
            rv.push_str(s);
            Ok::<_, Infallible>(())
        }) {
            Ok(()) => rv,
            Err(never) => match never {},
        }
    }

    /// Renders the template into a [`fmt::Write`].
    ///
    /// This writes the same output as [`render`](Self::render) but lets the
    /// caller provide the buffer.  The only errors returned are the ones of
    /// the writer.
    ///
    /// ```
    /// let tmpl = minisubst::parse("${a}-${b}");
    /// let mut out = String::from("> ");
    /// tmpl.render_to(&[("a", "1"), ("b", "2")], &mut out).unwrap();
    /// assert_eq!(out, "> 1-2");
    /// ```
    pub fn render_to<V, W>(&self, vars: &V, w: &mut W) -> fmt::Result
    where
        V: Vars + ?Sized,
        W: fmt::Write + ?Sized,
    {
        self.write_segments(vars, |s| w.write_str(s))
    }

    /// Returns the distinct tag names in order of first appearance.
    ///
    /// ```
    /// let tmpl = minisubst::parse("${b} ${a} ${ b }");
    /// assert_eq!(tmpl.tag_names(), ["b", "a"]);
    /// ```
    pub fn tag_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.segments
            .iter()
            .filter_map(Segment::as_tag)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Returns the tag names `vars` has no value for.
    ///
    /// The names are distinct and in order of first appearance.  An empty
    /// result means rendering with `vars` replaces every tag.
    ///
    /// ```
    /// let tmpl = minisubst::parse("${user}@${host}:${port}");
    /// assert_eq!(tmpl.missing_vars(&[("host", "localhost")]), ["user", "port"]);
    /// ```
    pub fn missing_vars<V: Vars + ?Sized>(&self, vars: &V) -> Vec<&str> {
        self.tag_names()
            .into_iter()
            .filter(|name| vars.get_var(name).is_none())
            .collect()
    }

    fn write_segments<V, F, E>(&self, vars: &V, mut write: F) -> Result<(), E>
    where
        V: Vars + ?Sized,
        F: FnMut(&str) -> Result<(), E>,
    {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => ok!(write(text.as_str())),
                Segment::Tag(name) => match vars.get_var(name) {
                    Some(value) => ok!(write(value)),
                    None => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(name = %name, "unresolved template tag");
                        ok!(write(self.syntax.open.as_ref()));
                        ok!(write(name.as_str()));
                        ok!(write(self.syntax.close.as_ref()));
                    }
                },
            }
        }
        Ok(())
    }

    /// Estimates the rendered size from the literal text and tag names.
    fn size_hint(&self) -> usize {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.len(),
                Segment::Tag(name) => name.len(),
            })
            .sum()
    }
}

#[test]
fn test_template_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Template>();
}
