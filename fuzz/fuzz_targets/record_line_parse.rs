//! Fuzz target for single-line annotation record parsing.
//!
//! This fuzzer feeds arbitrary UTF-8 lines to the dual-format record
//! parser, checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use visdrone2yolo::anno::fuzz_parse_line;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    fuzz_parse_line(line);
});
