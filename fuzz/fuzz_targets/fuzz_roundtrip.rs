#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce
    // identical pixels
    let Ok(decoded) = zenbmp::decode(data, enough::Unstoppable) else {
        return;
    };

    let reencoded =
        zenbmp::encode(&decoded, enough::Unstoppable).expect("decoded grid failed to encode");
    let decoded2 = zenbmp::decode(&reencoded, enough::Unstoppable)
        .expect("re-encoded data failed to decode");

    assert_eq!(decoded, decoded2, "roundtrip pixel mismatch");
});
