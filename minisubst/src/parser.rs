use crate::syntax::Syntax;

/// One unit of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", content = "value", rename_all = "snake_case")
)]
pub enum Segment {
    /// Text that is copied verbatim into the output.
    Literal(String),
    /// A placeholder, holding the tag name with surrounding whitespace
    /// removed.
    Tag(String),
}

impl Segment {
    /// Returns the literal text, or `None` for tags.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Segment::Literal(text) => Some(text),
            Segment::Tag(_) => None,
        }
    }

    /// Returns the tag name, or `None` for literal text.
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            Segment::Literal(_) => None,
            Segment::Tag(name) => Some(name),
        }
    }
}

/// Splits `s` at the first occurrence of `delim`.
///
/// Returns the text before and after the delimiter, or `None` if the
/// delimiter does not occur.  Both halves are always on char boundaries.
fn chomp<'s>(s: &'s str, delim: &str) -> Option<(&'s str, &'s str)> {
    s.split_once(delim)
}

/// Splits a template source into segments.
///
/// The scanner alternates between text and tag mode.  A text step either
/// consumes a non-empty opening delimiter or takes the rest of the input,
/// and every tag step switches back to text mode.  An empty closing
/// delimiter makes the tag step consume nothing, but the next text step
/// still makes progress, so the scanner ends on every finite input.
pub struct Scanner<'s> {
    rest: &'s str,
    in_tag: bool,
    open: &'s str,
    close: &'s str,
}

impl<'s> Scanner<'s> {
    /// Creates a scanner over `source` with the given delimiters.
    pub fn new(source: &'s str, open: &'s str, close: &'s str) -> Scanner<'s> {
        Scanner {
            rest: source,
            in_tag: false,
            open,
            close,
        }
    }

    /// Returns the part of the input that has not been consumed yet.
    pub fn rest(&self) -> &'s str {
        self.rest
    }

    fn take_rest(&mut self) -> &'s str {
        std::mem::take(&mut self.rest)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.rest.is_empty() {
            return None;
        }

        if self.in_tag {
            self.in_tag = false;
            match chomp(self.rest, self.close) {
                Some((name, after)) => {
                    self.rest = after;
                    Some(Segment::Tag(name.trim().to_string()))
                }
                // unterminated tags turn into text, minus their opening delimiter
                None => Some(Segment::Literal(self.take_rest().to_string())),
            }
        } else if self.open.is_empty() {
            Some(Segment::Literal(self.take_rest().to_string()))
        } else {
            match chomp(self.rest, self.open) {
                Some((text, after)) => {
                    self.rest = after;
                    self.in_tag = true;
                    Some(Segment::Literal(text.to_string()))
                }
                None => Some(Segment::Literal(self.take_rest().to_string())),
            }
        }
    }
}

/// Parses a template source into its segments.
pub fn parse(source: &str, syntax: &Syntax) -> Vec<Segment> {
    let segments: Vec<_> = Scanner::new(source, &syntax.open, &syntax.close).collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        open = %syntax.open,
        close = %syntax.close,
        segments = segments.len(),
        "parsed template"
    );

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    use similar_asserts::assert_eq;

    fn lit(s: &str) -> Segment {
        Segment::Literal(s.into())
    }

    fn tag(s: &str) -> Segment {
        Segment::Tag(s.into())
    }

    fn scan(source: &str, open: &str, close: &str) -> Vec<Segment> {
        Scanner::new(source, open, close).collect()
    }

    #[test]
    fn test_chomp() {
        assert_eq!(chomp("aaaa{{bbb", "{{"), Some(("aaaa", "bbb")));
        assert_eq!(chomp("aaaa{{", "{{"), Some(("aaaa", "")));
        assert_eq!(chomp("aaaa{{", "{"), Some(("aaaa", "{")));
        assert_eq!(chomp("", "{"), None);
        assert_eq!(chomp("{", "{"), Some(("", "")));
        assert_eq!(chomp("{bb", "{"), Some(("", "bb")));
        assert_eq!(chomp("あいううう", "うう"), Some(("あい", "う")));
        assert_eq!(chomp("no marker", "${"), None);
    }

    #[test]
    fn test_scan_basic() {
        assert_eq!(
            scan("http//wwww.com?aa=${AB_CD}&bb=${SOME}", "${", "}"),
            vec![
                lit("http//wwww.com?aa="),
                tag("AB_CD"),
                lit("&bb="),
                tag("SOME"),
            ]
        );
    }

    #[test]
    fn test_scan_empty_and_plain() {
        assert_eq!(scan("", "${", "}"), Vec::<Segment>::new());
        assert_eq!(scan("just text", "${", "}"), vec![lit("just text")]);
        assert_eq!(scan("a}b", "${", "}"), vec![lit("a}b")]);
    }

    #[test]
    fn test_scan_adjacent_tags() {
        assert_eq!(
            scan("${X}${Y}", "${", "}"),
            vec![lit(""), tag("X"), lit(""), tag("Y")]
        );
    }

    #[test]
    fn test_scan_unterminated() {
        assert_eq!(scan("a${bNOCLOSE", "${", "}"), vec![lit("a"), lit("bNOCLOSE")]);
        // nothing is left after the opening delimiter
        assert_eq!(scan("a${", "${", "}"), vec![lit("a")]);
        assert_eq!(
            scan("x=${AB_CD&bb=${SOME}", "${", "}"),
            vec![lit("x="), tag("AB_CD&bb=${SOME")]
        );
    }

    #[test]
    fn test_scan_trims_names() {
        assert_eq!(
            scan("${  X  }|${\tY\n}|${}", "${", "}"),
            vec![
                lit(""),
                tag("X"),
                lit("|"),
                tag("Y"),
                lit("|"),
                tag(""),
            ]
        );
        // unicode whitespace is trimmed as well
        assert_eq!(
            scan("${\u{3000}名前\u{3000}}", "${", "}"),
            vec![lit(""), tag("名前")]
        );
    }

    #[test]
    fn test_scan_overlapping_delimiters() {
        assert_eq!(
            scan("aa={{{AB_CD}}}&bb={{{SOME}}}", "{{", "}}"),
            vec![
                lit("aa="),
                tag("{AB_CD"),
                lit("}&bb="),
                tag("{SOME"),
                lit("}"),
            ]
        );
    }

    #[test]
    fn test_scan_multibyte() {
        assert_eq!(
            scan("あい«うう»えお«お", "«", "»"),
            vec![lit("あい"), tag("うう"), lit("えお"), lit("お")]
        );
    }

    #[test]
    fn test_scan_empty_delimiters() {
        assert_eq!(scan("a${b}", "", "}"), vec![lit("a${b}")]);
        assert_eq!(scan("", "", ""), Vec::<Segment>::new());
        assert_eq!(scan("a${b", "${", ""), vec![lit("a"), tag(""), lit("b")]);
        // tag steps consume nothing here, text steps still advance
        assert_eq!(
            scan("${a${b", "${", ""),
            vec![lit(""), tag(""), lit("a"), tag(""), lit("b")]
        );
    }

    #[test]
    fn test_scanner_rest() {
        let mut scanner = Scanner::new("a${b}c", "${", "}");
        assert_eq!(scanner.next(), Some(lit("a")));
        assert_eq!(scanner.rest(), "b}c");
        assert_eq!(scanner.next(), Some(tag("b")));
        assert_eq!(scanner.rest(), "c");
        assert_eq!(scanner.next(), Some(lit("c")));
        assert_eq!(scanner.rest(), "");
        assert_eq!(scanner.next(), None);
    }
}
