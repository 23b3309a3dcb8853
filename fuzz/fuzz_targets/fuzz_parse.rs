#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let first = jsonatom::parse(data);
    // Parsing is pure: the same bytes must always give the same outcome.
    assert_eq!(first, jsonatom::parse(data));
});
