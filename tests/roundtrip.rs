//! Round-trip and boundary properties, exercised over randomly generated
//! values in the style of the teacher's own randomized document tests.
use std::collections::BTreeMap;

use hsdt::Value;
use rand::distributions::{Alphanumeric, Standard};
use rand::seq::SliceRandom;
use rand::Rng;

fn random_value(rng: &mut impl Rng, depth_remaining: u32) -> Value {
    let max_kind = if depth_remaining == 0 { 5 } else { 7 };
    match rng.gen_range(0..=max_kind) {
        0 => Value::Null,
        1 => Value::True,
        2 => Value::False,
        3 => {
            let len = rng.gen_range(0..32);
            Value::byte_string((0..len).map(|_| rng.gen::<u8>()).collect::<Vec<u8>>())
        }
        4 => {
            let len = rng.gen_range(0..16);
            let s: String = (0..len).map(|_| rng.sample(Alphanumeric) as char).collect();
            Value::utf8_string(s)
        }
        5 => Value::float(random_finite_or_special_float(rng)),
        6 => {
            let len = rng.gen_range(0..4);
            let elems = (0..len)
                .map(|_| random_value(rng, depth_remaining - 1))
                .collect::<Vec<_>>();
            Value::array(elems)
        }
        _ => {
            let len = rng.gen_range(0..4);
            let mut map = BTreeMap::new();
            for _ in 0..len {
                let key_len = rng.gen_range(1..8);
                let key: String = (0..key_len)
                    .map(|_| rng.sample(Alphanumeric) as char)
                    .collect();
                map.insert(key, random_value(rng, depth_remaining - 1));
            }
            Value::map(map)
        }
    }
}

fn random_finite_or_special_float(rng: &mut impl Rng) -> f64 {
    match rng.gen_range(0..4) {
        0 => f64::INFINITY,
        1 => f64::NEG_INFINITY,
        2 => f64::NAN,
        _ => rng.sample(Standard),
    }
}

#[test]
fn encode_then_decode_round_trips() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let value = random_value(&mut rng, 4);
        let bytes = hsdt::encode(&value);
        let decoded = hsdt::decode_exact(&bytes).unwrap();
        assert_eq!(decoded, value);
    }
}

#[test]
fn decode_then_encode_reproduces_bytes() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let value = random_value(&mut rng, 4);
        let bytes = hsdt::encode(&value);
        let (decoded, consumed) = hsdt::decode(&bytes).unwrap();
        assert_eq!(consumed, bytes.len());
        assert_eq!(hsdt::encode(&decoded), bytes);
    }
}

#[test]
fn encoded_size_always_matches_actual_length() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let value = random_value(&mut rng, 4);
        assert_eq!(
            hsdt::encode(&value).len() as u64,
            hsdt::encoded_size(&value)
        );
    }
}

#[test]
fn equality_is_reflexive_over_random_values() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let value = random_value(&mut rng, 4);
        assert_eq!(value, value.clone());
    }
}

#[test]
fn length_codec_boundaries_round_trip() {
    for &len in &[0usize, 23, 24, 255, 256, 65535, 65536] {
        let bytes: Vec<u8> = vec![0u8; len];
        let value = Value::byte_string(bytes);
        let encoded = hsdt::encode(&value);
        assert_eq!(hsdt::decode_exact(&encoded).unwrap(), value);
    }
}

#[test]
fn deeply_nested_array_at_the_cap_round_trips() {
    let mut value = Value::Null;
    for _ in 0..hsdt::MAX_DEPTH {
        value = Value::array(vec![value]);
    }
    let bytes = hsdt::encode(&value);
    assert_eq!(hsdt::decode_exact(&bytes).unwrap(), value);
}

#[test]
fn nesting_one_past_the_cap_is_rejected_on_decode() {
    let mut value = Value::Null;
    for _ in 0..hsdt::MAX_DEPTH + 1 {
        value = Value::array(vec![value]);
    }
    let bytes = hsdt::encode(&value);
    assert_eq!(hsdt::decode_exact(&bytes), Err(hsdt::Error::DepthLimit));
}

#[test]
fn encoding_a_value_nested_beyond_decode_cap_does_not_panic() {
    // Two independently decoded, MAX_DEPTH-deep values nested one level
    // further: each half is within the decoder's cap, but the combined
    // value is not. `encode`/`equal` must still handle it without panicking.
    let mut deep = Value::Null;
    for _ in 0..hsdt::MAX_DEPTH {
        deep = Value::array(vec![deep]);
    }
    let bytes = hsdt::encode(&deep);
    let v1 = hsdt::decode_exact(&bytes).unwrap();
    let v2 = hsdt::decode_exact(&bytes).unwrap();
    let combined = Value::array(vec![v1, v2]);

    let combined_bytes = hsdt::encode(&combined);
    assert_eq!(combined_bytes.len() as u64, hsdt::encoded_size(&combined));
    assert_eq!(combined, combined.clone());
}

#[test]
fn shuffled_map_construction_preserves_canonical_order() {
    let mut rng = rand::thread_rng();
    let mut keys: Vec<String> = (0..10).map(|i| format!("key{i:02}")).collect();
    keys.shuffle(&mut rng);
    let mut map = BTreeMap::new();
    for key in keys {
        map.insert(key, Value::Null);
    }
    let value = Value::map(map.clone());
    let bytes = hsdt::encode(&value);
    let decoded = hsdt::decode_exact(&bytes).unwrap();
    assert_eq!(decoded.as_map().unwrap().keys().collect::<Vec<_>>(),
        map.keys().collect::<Vec<_>>());
}
