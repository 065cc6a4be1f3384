#![no_main]

use libfuzzer_sys::fuzz_target;
use shale::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 is not a source text
    if let Ok(s) = std::str::from_utf8(data) {
        let lexed = lexer::lex(s);
        let parsed = parser::parse(s);
        // The parser pulls from the same lexer, so a lexical failure must surface
        if lexed.is_err() {
            assert!(parsed.is_err());
        }
    }
});
