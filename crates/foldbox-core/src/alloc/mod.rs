//! Hash collections keyed with AHash.
//!
//! Animation tracks and freeze flags are looked up by pane id every frame; the keys
//! are small integers that never come from untrusted input.

pub use ahash::AHashMap as HashMap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_keys_round_trip() {
        let mut tracks: HashMap<u64, i32> = HashMap::new();
        tracks.insert(7, 120);
        *tracks.entry(7).or_default() += 5;
        assert_eq!(tracks.get(&7), Some(&125));
        assert!(tracks.remove(&3).is_none());
    }
}
