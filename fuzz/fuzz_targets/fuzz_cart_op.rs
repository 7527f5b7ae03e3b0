#![no_main]

use libfuzzer_sys::fuzz_target;
use pujan::presentation::CartOp;

fuzz_target!(|data: &[u8]| {
    if let Ok(op) = std::str::from_utf8(data) {
        let _ = op.parse::<CartOp>();
    }
});
