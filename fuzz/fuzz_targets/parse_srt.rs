#![no_main]
use libfuzzer_sys::fuzz_target;

use rill_srt::parse_streaming;

fuzz_target!(|data: &[u8]| {
    // Only valid UTF-8 can reach the parser.
    if let Ok(s) = std::str::from_utf8(data) {
        // Drain the iterator; any panic is a bug.
        if let Ok(parser) = parse_streaming(s) {
            let _ = parser.count();
        }
    }
});
