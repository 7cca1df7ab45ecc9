use proptest::prelude::*;
use spellbloom::hash::seeded_family;
use spellbloom::{BloomError, BloomFilter};

fn keys() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 0..24), 0..64)
}

proptest! {
    #[test]
    fn no_false_negatives(capacity in 1usize..4096, keys in keys()) {
        let mut bf = BloomFilter::new(capacity).unwrap();
        for key in &keys {
            bf.add(key);
            prop_assert!(bf.contains(key));
        }
        // still present after every later insertion
        for key in &keys {
            prop_assert!(bf.contains(key));
        }
    }

    #[test]
    fn count_matches_add_calls(keys in keys(), repeats in 1usize..4) {
        let mut bf = BloomFilter::new(512).unwrap();
        for _ in 0..repeats {
            for key in &keys {
                bf.add(key);
            }
        }
        prop_assert_eq!(bf.count(), keys.len() * repeats);
        prop_assert_eq!(bf.size(), 512);
    }

    #[test]
    fn set_bits_never_shrink(keys in keys()) {
        let mut bf = BloomFilter::new(300).unwrap();
        let mut previous = 0;
        for key in &keys {
            bf.add(key);
            let now = bf.bits_set();
            prop_assert!(now >= previous);
            prop_assert!(now - previous <= bf.hash_count());
            previous = now;
        }
    }

    #[test]
    fn identical_histories_answer_identically(
        keys in keys(),
        probes in keys(),
        k in 1usize..8,
    ) {
        let mut a = BloomFilter::with_hash_functions(200, seeded_family(k)).unwrap();
        let mut b = BloomFilter::with_hash_functions(200, seeded_family(k)).unwrap();
        for key in &keys {
            a.add(key);
            b.add(key);
        }
        for probe in probes.iter().chain(&keys) {
            prop_assert_eq!(a.contains(probe), b.contains(probe));
        }
    }

    #[test]
    fn re_adding_does_not_change_membership(keys in keys(), probes in keys()) {
        let mut bf = BloomFilter::new(128).unwrap();
        for key in &keys {
            bf.add(key);
        }
        let before: Vec<bool> = probes.iter().map(|p| bf.contains(p)).collect();
        for key in &keys {
            bf.add(key);
        }
        let after: Vec<bool> = probes.iter().map(|p| bf.contains(p)).collect();
        prop_assert_eq!(before, after);
    }
}

#[test]
fn fruit_scenario() {
    let mut bf = BloomFilter::new(1000).unwrap();
    bf.add("apple");
    bf.add("banana");

    assert!(bf.contains("apple"));
    assert!(bf.contains("banana"));
    assert_eq!(bf.count(), 2);
    assert_eq!(bf.size(), 1000);
    // absent keys such as "cherry" are only probably rejected; at this load
    // the expected false positive rate is tiny
    assert!(bf.false_positive_rate() < 0.01);
    assert!(bf.load_factor() < 0.01);
}

#[test]
fn capacity_of_one_still_works() {
    let mut bf = BloomFilter::new(1).unwrap();
    bf.add("only");
    assert!(bf.contains("only"));
    assert_eq!(bf.size(), 1);
}

#[test]
fn invalid_construction_is_an_error() {
    assert_eq!(BloomFilter::new(0).unwrap_err(), BloomError::ZeroCapacity);
    assert_eq!(
        BloomFilter::with_hash_functions(8, Vec::new()).unwrap_err(),
        BloomError::NoHashFunctions
    );
}
