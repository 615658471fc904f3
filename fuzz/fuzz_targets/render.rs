#![no_main]
use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    source: &'a str,
    delimiters: Option<(&'a str, &'a str)>,
    vars: BTreeMap<&'a str, &'a str>,
}

fuzz_target!(|input: Input| {
    let syntax = match input.delimiters {
        Some((open, close)) => match minisubst::Syntax::new(open.to_string(), close.to_string()) {
            Ok(syntax) => syntax,
            Err(_) => return,
        },
        None => minisubst::Syntax::default(),
    };
    let tmpl = syntax.parse(input.source);

    // rendering leaves no state behind
    let first = tmpl.render(&input.vars);
    assert_eq!(tmpl.render(&()), tmpl.to_string());
    assert_eq!(tmpl.render(&input.vars), first);

    let missing = tmpl.missing_vars(&input.vars);
    assert!(missing.iter().all(|name| !input.vars.contains_key(name)));
    assert_eq!(tmpl.missing_vars(&()), tmpl.tag_names());
});
