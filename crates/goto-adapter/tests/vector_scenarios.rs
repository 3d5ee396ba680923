//! Integration test: end-to-end container scenarios.
//!
//! Covers the self-test sequence, growth across the small preset's first
//! doubling, and multi-byte elements that survive several growth events.

use goto_adapter::prelude::*;
use goto_test_utils::{filled_array, sequential_bytes, ElementStream};

// ── Self-test sequence ───────────────────────────────────────────

#[test]
fn twenty_five_sequential_bytes_round_trip() {
    let bytes = sequential_bytes(25);
    let mut arr = DynamicArray::new(1).unwrap();
    for byte in &bytes {
        arr.append(std::slice::from_ref(byte)).unwrap();
    }

    assert_eq!(arr.len(), 25);
    for (i, byte) in bytes.iter().enumerate() {
        assert_eq!(arr.at(i)[0], *byte);
        assert_eq!(arr.at(i)[0] as usize, i);
    }

    arr.destroy();
    arr.destroy();
    assert!(arr.is_destroyed());
}

#[test]
fn selftest_output_is_stable() {
    let mut out = Vec::new();
    goto_adapter::selftest::run_all(&mut out, &VectorConfig::new(CapacityPreset::Small), 25)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        ["Running tests", "\t- Testing vectors", "Success"]
    );
}

// ── Growth boundary ──────────────────────────────────────────────

#[test]
fn element_twenty_triggers_doubling_to_forty() {
    let config = VectorConfig::with_initial_capacity(20);
    let bytes = sequential_bytes(21);
    let mut arr = DynamicArray::with_config(1, &config).unwrap();

    for (i, byte) in bytes.iter().enumerate() {
        let before = arr.capacity();
        arr.append(&[*byte]).unwrap();
        if i == 20 {
            assert_eq!(before, 20);
            assert_eq!(arr.capacity(), 40);
        } else {
            assert_eq!(arr.capacity(), 20);
        }
    }
    assert_eq!(arr.as_bytes(), bytes.as_slice());
}

#[test]
fn random_elements_survive_repeated_growth() {
    let elements = ElementStream::new(12, 0xB0C).take_elements(1_000);
    let arr = filled_array(12, &VectorConfig::with_initial_capacity(3), &elements).unwrap();

    assert_eq!(arr.len(), 1_000);
    // 3 -> 6 -> 12 -> ... -> 1536
    assert_eq!(arr.capacity(), 1_536);
    for (stored, expected) in arr.iter().zip(&elements) {
        assert_eq!(stored, expected.as_slice());
    }
}

#[test]
fn explicit_reserve_avoids_growth_events() {
    let mut arr = DynamicArray::with_config(2, &VectorConfig::with_initial_capacity(4)).unwrap();
    arr.reserve(500).unwrap();
    for element in ElementStream::new(2, 9).take(500) {
        arr.append(&element).unwrap();
    }
    assert_eq!(arr.capacity(), 500);

    let err = arr.reserve(500).unwrap_err();
    assert!(err.is_contract_violation());
    assert_eq!(arr.len(), 500);
}

#[test]
fn typed_and_dynamic_arrays_agree() {
    let values: Vec<u32> = (0..300).map(|v| v * 7).collect();
    let config = VectorConfig::with_initial_capacity(5);

    let mut typed = TypedArray::with_config(&config).unwrap();
    let mut dynamic = DynamicArray::with_config(4, &config).unwrap();
    for &v in &values {
        typed.push(v).unwrap();
        dynamic.append(&v.to_le_bytes()).unwrap();
    }

    assert_eq!(typed.capacity(), dynamic.capacity());
    for (i, bytes) in dynamic.iter().enumerate() {
        let decoded = u32::from_le_bytes(bytes.try_into().unwrap());
        assert_eq!(*typed.get(i).unwrap(), decoded);
    }
}
