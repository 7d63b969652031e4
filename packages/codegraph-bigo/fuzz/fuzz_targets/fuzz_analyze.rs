#![no_main]

use codegraph_bigo::analyze;
use libfuzzer_sys::fuzz_target;

const TAGS: &[&str] = &["javascript", "typescript", "java", "c", "cpp", "python", "unknown"];

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(code) = std::str::from_utf8(rest) else {
        return;
    };

    let results = analyze(code, TAGS[selector as usize % TAGS.len()]);

    let mut previous = None;
    for result in &results {
        assert!(result.span.is_well_formed(code.len()));
        assert_eq!(&code[result.span.decl_range()], result.span.name);
        if let Some(prev) = previous {
            assert!(prev < result.span.decl_start);
        }
        previous = Some(result.span.decl_start);
    }
});
