#![no_main]

use jsontree::parse;
use libfuzzer_sys::fuzz_target;

// Any input the parser accepts must re-render to text that parses back to
// the identical tree. Rejections just need to not panic.
fuzz_target!(|data: &str| {
    if let Ok(v) = parse(data) {
        let rendered = v.to_string();
        let reparsed = parse(&rendered).expect("rendered tree must reparse");
        assert_eq!(reparsed, v);
    }
});
