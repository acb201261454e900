//! Estimator properties over realistic inputs.

use entroscan::entropy::{renyi_entropy, shannon_entropy, tsallis_entropy, Histogram};

use crate::common::test_data::*;

#[test]
fn test_bounds_hold_for_mixed_inputs() {
    let inputs: Vec<Vec<u8>> = vec![
        vec![],
        vec![0x41],
        plain_text(10),
        uniform_blocks(3),
        (0..5000u32).map(|i| (i * i % 251) as u8).collect(),
    ];
    for data in &inputs {
        let h = shannon_entropy(data);
        assert!((0.0..=8.0 + 1e-9).contains(&h), "shannon out of range: {h}");
        for alpha in [0.5, 2.0, 3.0] {
            let r = renyi_entropy(data, alpha);
            assert!((-1e-9..=8.0 + 1e-9).contains(&r), "renyi({alpha}) = {r}");
        }
        let t = tsallis_entropy(data, 2.0);
        assert!(t >= -1e-12 && t < 1.0, "tsallis = {t}");
    }
}

#[test]
fn test_uniform_content_reaches_eight_bits() {
    let data = uniform_blocks(8);
    assert!((shannon_entropy(&data) - 8.0).abs() < 1e-9);
    assert!((renyi_entropy(&data, 2.0) - 8.0).abs() < 1e-9);
    assert!((tsallis_entropy(&data, 2.0) - (1.0 - 1.0 / 256.0)).abs() < 1e-9);
}

#[test]
fn test_renyi_is_non_increasing_in_alpha() {
    let data = plain_text(5);
    let r_half = renyi_entropy(&data, 0.5);
    let h = shannon_entropy(&data);
    let r2 = renyi_entropy(&data, 2.0);
    let r4 = renyi_entropy(&data, 4.0);
    assert!(r_half + 1e-9 >= h);
    assert!(h + 1e-9 >= r2);
    assert!(r2 + 1e-9 >= r4);
}

#[test]
fn test_order_one_matches_shannon() {
    let data = plain_text(3);
    assert_eq!(renyi_entropy(&data, 1.0), shannon_entropy(&data));
    assert_eq!(tsallis_entropy(&data, 1.0), shannon_entropy(&data));
}

#[test]
fn test_streamed_histogram_matches_one_shot() {
    let data = plain_text(20);
    let mut streamed = Histogram::new();
    for chunk in data.chunks(7) {
        streamed.update(chunk);
    }
    assert_eq!(streamed, Histogram::from_bytes(&data));
    assert_eq!(streamed.shannon(), shannon_entropy(&data));
}
