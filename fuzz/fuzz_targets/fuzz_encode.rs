#![no_main]

use base64_external::{engine::general_purpose::STANDARD, Engine};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Test encode roundtrip
    let encoded = radix64::encode(data, &radix64::STANDARD, true);
    assert_eq!(encoded.len(), radix64::encoded_len(data.len(), true));
    let decoded = radix64::decode_result(&encoded, &radix64::STANDARD).expect("Roundtrip failed");
    assert_eq!(data, &decoded[..], "Roundtrip failed");

    // Test without padding
    let encoded_no_pad = radix64::encode(data, &radix64::URL_SAFE, false);
    let decoded = radix64::decode_result_with(&encoded_no_pad, &radix64::URL_SAFE, false)
        .expect("Roundtrip without padding failed");
    assert_eq!(data, &decoded[..], "Roundtrip without padding failed");

    // Conformance with external crate
    let external_encoded = STANDARD.encode(data);
    assert_eq!(encoded, external_encoded, "External crate encode mismatch");
});
