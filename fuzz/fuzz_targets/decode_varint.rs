#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut slice = data;
    if let Ok(value) = veriform::vint64::decode(&mut slice) {
        // Whatever decodes must re-encode to the bytes we consumed
        let mut reencoded = Vec::new();
        veriform::vint64::encode(&mut reencoded, value);
        assert_eq!(reencoded, data[..data.len() - slice.len()]);
    }
});
