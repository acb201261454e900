#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let split = data.len().min(256);
    let _ = entroscan::classify_file(&data[..split], data, "fuzz.bin");
});
