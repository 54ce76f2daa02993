#![no_main]
use libfuzzer_sys::fuzz_target;

// Decode the input, and if that succeeds, re-encode and require a
// byte-identical, fully-consumed round trip.
fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }
    if let Ok((value, consumed)) = hsdt::decode(data) {
        let encoded = hsdt::encode(&value);
        assert_eq!(encoded.len() as u64, hsdt::encoded_size(&value));
        assert_eq!(&encoded[..], &data[..consumed]);
    }
});
