#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probe and full decode must never panic
    let _ = zenbmp::probe(data);
    let _ = zenbmp::decode(data, enough::Unstoppable);
});
