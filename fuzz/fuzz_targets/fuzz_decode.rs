#![no_main]

use arbitrary::Arbitrary;
use base64_external::{engine::general_purpose::STANDARD, Engine};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    text: &'a str,
    url_safe: bool,
    pad: bool,
}

fuzz_target!(|input: Input| {
    let alphabet = if input.url_safe { &radix64::URL_SAFE } else { &radix64::STANDARD };

    // Arbitrary text never panics and never overruns the size estimate
    if let Ok(decoded) = radix64::decode_result_with(input.text, alphabet, input.pad) {
        assert!(decoded.len() <= radix64::decoded_len(input.text.len()));
        if input.pad {
            assert_eq!(input.text.len() % 4, 0, "Accepted unaligned input");
        }
    }

    // Whatever the external crate accepts, we accept with the same bytes
    if let Ok(expected) = STANDARD.decode(input.text) {
        assert_eq!(radix64::decode_result(input.text, &radix64::STANDARD), Ok(expected));
    }
});
