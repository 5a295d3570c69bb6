#![no_main]
use libfuzzer_sys::fuzz_target;
use veriform::{Decoder, Parser};

fuzz_target!(|data: &[u8]| {
    let mut parser = Parser::new(Decoder::new());
    if parser.parse(data).is_ok() {
        let _ = parser.finish();
    }
});
