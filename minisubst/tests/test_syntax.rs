use minisubst::{ErrorKind, Syntax, Template};

use similar_asserts::assert_eq;

#[test]
fn test_default_syntax() {
    let syntax = Syntax::default();
    assert_eq!(syntax.open, "${");
    assert_eq!(syntax.close, "}");
}

#[test]
fn test_custom_syntax() {
    let syntax = Syntax::new("\\VAR{", "}").unwrap();
    let tmpl = Template::from_syntax("\\section{\\VAR{ title }}", &syntax);
    assert_eq!(tmpl.render(&[("title", "Intro")]), "\\section{Intro}");
    assert_eq!(tmpl.syntax(), &syntax);
    assert_eq!(syntax.parse("\\section{\\VAR{ title }}"), tmpl);
}

#[test]
fn test_invalid_syntax() {
    let err = Syntax::new("", "}").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDelimiter);
    assert_eq!(
        err.to_string(),
        "invalid delimiter: opening delimiter must not be empty"
    );

    let err = Syntax::new("${", "").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid delimiter: closing delimiter must not be empty"
    );
    insta::assert_debug_snapshot!(err, @r###"
    Error {
        kind: InvalidDelimiter,
        detail: Some(
            "closing delimiter must not be empty",
        ),
    }
    "###);
}

#[test]
fn test_unvalidated_empty_delimiters() {
    let no_open = Syntax {
        open: "".into(),
        close: "}".into(),
    };
    assert_eq!(no_open.parse("a${b}c").render(&[("b", "x")]), "a${b}c");

    let no_close = Syntax {
        open: "${".into(),
        close: "".into(),
    };
    assert_eq!(no_close.parse("a${b").render(&()), "a${b");
    assert_eq!(no_close.parse("a${b").render(&[("", "-")]), "a-b");
}

#[cfg(feature = "serde")]
mod serde_support {
    use minisubst::{parse, Syntax};

    use similar_asserts::assert_eq;

    #[test]
    fn test_deserialize() {
        let syntax: Syntax = serde_json::from_str(r#"{"open": "{{", "close": "}}"}"#).unwrap();
        assert_eq!(syntax, Syntax::new("{{", "}}").unwrap());

        let syntax: Syntax = serde_json::from_str(r#"{"open": "<%"}"#).unwrap();
        assert_eq!(syntax, Syntax::new("<%", "}").unwrap());

        let syntax: Syntax = serde_json::from_str("{}").unwrap();
        assert_eq!(syntax, Syntax::default());
    }

    #[test]
    fn test_deserialize_invalid() {
        let err = serde_json::from_str::<Syntax>(r#"{"open": ""}"#).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("invalid delimiter: opening delimiter must not be empty"));

        let err = serde_json::from_str::<Syntax>(r#"{"begin": "{{"}"#).unwrap_err();
        assert!(err.to_string().starts_with("unknown field `begin`"));
    }

    #[test]
    fn test_serialize_syntax() {
        let syntax = Syntax::new("{{", "}}").unwrap();
        let json = serde_json::to_string(&syntax).unwrap();
        insta::assert_snapshot!(json, @r###"{"open":"{{","close":"}}"}"###);
        assert_eq!(serde_json::from_str::<Syntax>(&json).unwrap(), syntax);
    }

    #[test]
    fn test_serialize_template() {
        let tmpl = parse("a${ b }");
        let json = serde_json::to_string_pretty(&tmpl).unwrap();
        insta::assert_snapshot!(json, @r###"
        {
          "syntax": {
            "open": "${",
            "close": "}"
          },
          "segments": [
            {
              "kind": "literal",
              "value": "a"
            },
            {
              "kind": "tag",
              "value": "b"
            }
          ]
        }
        "###);
    }
}
