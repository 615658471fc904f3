#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str, &str)| {
    let (source, open, close) = data;
    let tmpl = minisubst::parse_with_delimiters(source, open, close);

    // text without an opening delimiter comes back unchanged
    if open.is_empty() || !source.contains(open) {
        assert_eq!(tmpl.render(&()), source);
    }

    // rendering without variables writes the canonical form
    assert_eq!(tmpl.render(&()), tmpl.to_string());
});
