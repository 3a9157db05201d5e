//! Golden vectors and behavioral checks for MurmurHash2.

use super::murmur2::{c_str_key, murmurhash2, murmurhash2_with_len};

/// Reference values computed once from the algorithm and pinned here.
/// Any change to these breaks compatibility with persisted filters.
const GOLDEN: &[(&[u8], u32, u32)] = &[
    (b"", 0, 0x0000_0000),
    (b"a", 0, 0x9268_5f5e),
    (b"a", 1, 0x2550_b18c),
    (b"abcd", 0, 0x2687_3021),
    (b"apple", 0, 0xbac7_dbfc),
    (b"apple", 1337, 0x33de_5014),
    (b"", 1337, 0x8b4d_fdb4),
    (b"hello world", 0, 0x44a8_1419),
    (b"hello", 0xdead_beef, 0x0408_7042),
];

#[test]
fn test_golden_vectors() {
    for &(data, seed, expected) in GOLDEN {
        assert_eq!(
            murmurhash2(data, seed),
            expected,
            "hash of {:?} with seed {seed}",
            String::from_utf8_lossy(data)
        );
    }
}

#[test]
fn test_empty_input_seed_zero_is_zero() {
    assert_eq!(murmurhash2(&[], 0), 0);
}

#[test]
fn test_determinism() {
    fastrand::seed(0x6d75_726d);
    for _ in 0..1000 {
        let len = fastrand::usize(0..64);
        let data: Vec<u8> = (0..len).map(|_| fastrand::u8(..)).collect();
        let seed = fastrand::u32(..);
        assert_eq!(murmurhash2(&data, seed), murmurhash2(&data, seed));
    }
}

#[test]
fn test_seed_sensitivity() {
    let samples = ["a", "apple", "orange", "key_000123", "hello world"];
    for sample in samples {
        assert_ne!(
            murmurhash2(sample.as_bytes(), 0),
            murmurhash2(sample.as_bytes(), 1337),
            "seed should affect hash of '{sample}'"
        );
    }
}

#[test]
fn test_every_tail_length_contributes() {
    // Lengths 4..=7 exercise the full-chunk path followed by 0..=3 tail bytes.
    let data = b"abcdefg";
    let hashes: Vec<u32> = (0..=data.len()).map(|n| murmurhash2(&data[..n], 0)).collect();
    for i in 0..hashes.len() {
        for j in (i + 1)..hashes.len() {
            assert_ne!(hashes[i], hashes[j], "prefix {i} vs {j}");
        }
    }
}

#[test]
fn test_with_len_matches_slice() {
    let data = b"hello world";
    for len in 0..=data.len() {
        assert_eq!(
            murmurhash2_with_len(data, len as i64, 37).unwrap(),
            murmurhash2(&data[..len], 37)
        );
    }
}

#[test]
fn test_with_len_rejects_negative() {
    let err = murmurhash2_with_len(b"abc", -1, 0).unwrap_err();
    assert!(err.is_invalid_arg());
}

#[test]
fn test_with_len_rejects_overrun() {
    let err = murmurhash2_with_len(b"abc", 4, 0).unwrap_err();
    assert!(err.is_invalid_arg());
}

#[test]
fn test_c_str_key() {
    assert_eq!(c_str_key(b"apple"), b"apple");
    assert_eq!(c_str_key(b"ab\0cd"), b"ab");
    assert_eq!(c_str_key(b"\0abc"), b"");
    assert_eq!(c_str_key(b""), b"");
}
