//! Polynomial string hash used to address buckets.

const MULTIPLIER: u64 = 31;

/// Rolling `acc * 31 + code_point` over the key's chars, wrapping on overflow.
#[inline]
pub fn polynomial_hash(key: &str) -> u64 {
    key.chars().fold(0u64, |acc, c| {
        acc.wrapping_mul(MULTIPLIER).wrapping_add(c as u64)
    })
}

/// Bucket index for `key` in a table of `bucket_count` buckets.
///
/// The result depends on `bucket_count`, so it must be recomputed after
/// every resize rather than stored alongside the entry.
#[inline]
pub fn bucket_index(key: &str, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0, "bucket_count must be non-zero");
    (polynomial_hash(key) % bucket_count as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_hashes_to_zero() {
        assert_eq!(polynomial_hash(""), 0);
        assert_eq!(bucket_index("", 16), 0);
    }

    #[test]
    fn matches_hand_computed_values() {
        // 'a' = 97
        assert_eq!(polynomial_hash("a"), 97);
        // 97 * 31 + 98
        assert_eq!(polynomial_hash("ab"), 3105);
        // "name": ((110*31 + 97)*31 + 109)*31 + 101
        assert_eq!(polynomial_hash("name"), 3_373_707);
        assert_eq!(bucket_index("name", 16), 3_373_707 % 16);
    }

    #[test]
    fn index_is_always_in_range() {
        for count in [1usize, 2, 3, 16, 17, 1024] {
            for key in ["", "a", "zzzz", "a much longer key that overflows the accumulator"] {
                assert!(bucket_index(key, count) < count);
            }
        }
    }

    #[test]
    fn uses_code_points_not_bytes() {
        // U+00E9 is two bytes in UTF-8 but a single code point.
        assert_eq!(polynomial_hash("é"), 0xE9);
    }

    #[test]
    fn long_keys_wrap_consistently() {
        let key = "x".repeat(256);
        assert_eq!(polynomial_hash(&key), polynomial_hash(&key.clone()));
        assert!(bucket_index(&key, 32) < 32);
    }
}
