//! Property-Based Tests for Cache Module
//!
//! Uses proptest with a manual clock so expiry properties are deterministic.

use proptest::prelude::*;
use std::collections::HashMap;

use serde_json::{json, Value};

use crate::cache::{CacheConfig, Clock, ManualClock, SessionCache, DEFAULT_TTL_MS};

// == Strategies ==
/// Generates resource keys (non-empty)
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z_]{1,16}(_[0-9]{1,4})?"
}

/// Generates small JSON payloads
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z ]{0,32}".prop_map(|s| json!(s)),
        (any::<u32>(), "[A-Z][a-z]{0,8}").prop_map(|(id, name)| json!({"id": id, "name": name})),
    ]
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: Value },
    Get { key: String },
    Invalidate { key: Option<String> },
    Advance { ms: u64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        4 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => proptest::option::of(key_strategy()).prop_map(|key| CacheOp::Invalidate { key }),
        2 => (0u64..DEFAULT_TTL_MS).prop_map(|ms| CacheOp::Advance { ms }),
    ]
}

fn new_cache() -> (SessionCache<Value, ManualClock>, ManualClock) {
    let clock = ManualClock::new(0);
    let cache = SessionCache::with_clock(CacheConfig::default(), clock.clone());
    (cache, clock)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // After a write, an immediate read returns the written value.
    #[test]
    fn prop_fresh_read_after_write(key in key_strategy(), value in value_strategy()) {
        let (mut cache, _clock) = new_cache();

        cache.set(key.clone(), value.clone());
        let retrieved = cache.get(&key);
        prop_assert_eq!(retrieved.as_deref(), Some(&value));
    }

    // Reads before the TTL see the value; reads at or after it do not.
    #[test]
    fn prop_expiry_boundary(
        key in key_strategy(),
        value in value_strategy(),
        elapsed in 0u64..(3 * DEFAULT_TTL_MS)
    ) {
        let (mut cache, clock) = new_cache();

        cache.set(key.clone(), value.clone());
        clock.advance(elapsed);

        let retrieved = cache.get(&key);
        if elapsed < DEFAULT_TTL_MS {
            prop_assert_eq!(retrieved.as_deref(), Some(&value));
        } else {
            prop_assert!(retrieved.is_none());
            prop_assert!(cache.is_empty(), "Expired entry should be evicted");
        }
    }

    // Rewriting a key restarts its freshness window.
    #[test]
    fn prop_overwrite_resets_age(
        key in key_strategy(),
        first in value_strategy(),
        second in value_strategy(),
        before in 0u64..DEFAULT_TTL_MS,
        after in 0u64..DEFAULT_TTL_MS
    ) {
        let (mut cache, clock) = new_cache();

        cache.set(key.clone(), first);
        clock.advance(before);
        cache.set(key.clone(), second.clone());
        clock.advance(after);

        let retrieved = cache.get(&key);
        prop_assert_eq!(retrieved.as_deref(), Some(&second));
        prop_assert_eq!(cache.len(), 1);
    }

    // Targeted invalidation removes exactly one key.
    #[test]
    fn prop_targeted_invalidate(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 1..20),
        pick in any::<prop::sample::Index>()
    ) {
        let (mut cache, _clock) = new_cache();
        for (key, value) in &entries {
            cache.set(key.clone(), value.clone());
        }

        let keys: Vec<&String> = entries.keys().collect();
        let victim = keys[pick.index(keys.len())].clone();
        cache.invalidate(Some(&victim));

        for (key, value) in &entries {
            if *key == victim {
                prop_assert!(cache.get(key).is_none());
            } else {
                let retrieved = cache.get(key);
                prop_assert_eq!(retrieved.as_deref(), Some(value));
            }
        }
    }

    // The cache agrees with a simple timestamped model over any op sequence.
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let (mut cache, clock) = new_cache();
        let mut model: HashMap<String, (Value, u64)> = HashMap::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    model.insert(key.clone(), (value.clone(), clock.now_ms()));
                    cache.set(key, value);
                }
                CacheOp::Get { key } => {
                    let now = clock.now_ms();
                    let expected = match model.get(&key) {
                        Some((value, stored_at)) if now - stored_at < DEFAULT_TTL_MS => {
                            Some(value.clone())
                        }
                        Some(_) => {
                            model.remove(&key);
                            None
                        }
                        None => None,
                    };
                    match &expected {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                    let retrieved = cache.get(&key);
                    prop_assert_eq!(retrieved.as_deref(), expected.as_ref());
                }
                CacheOp::Invalidate { key } => {
                    match &key {
                        Some(key) => {
                            model.remove(key);
                        }
                        None => model.clear(),
                    }
                    cache.invalidate(key.as_deref());
                }
                CacheOp::Advance { ms } => clock.advance(ms),
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, cache.len());
        prop_assert_eq!(cache.len(), model.len(), "Entry count mismatch");
    }
}
