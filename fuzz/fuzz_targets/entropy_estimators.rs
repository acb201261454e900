#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let h = entroscan::entropy::shannon_entropy(data);
    assert!((0.0..=8.0 + 1e-9).contains(&h));
    let r = entroscan::entropy::renyi_entropy(data, 2.0);
    assert!(r <= h + 1e-9);
    let _ = entroscan::entropy::tsallis_entropy(data, 2.0);
});
