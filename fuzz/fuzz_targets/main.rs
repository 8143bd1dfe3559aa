#![no_main]

use citrine::location::{comment_span, directive_span, simple_span};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        for span in [simple_span(1, 0, text), comment_span(1, 0, text), directive_span(1, 0, text)] {
            assert!(span.start_line <= span.end_line);
            if span.start_line == span.end_line {
                assert!(span.start_column <= span.end_column);
            }
        }
    }
});
