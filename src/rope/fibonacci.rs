use log::*;

use std::sync::*;

///
/// The start of the Fibonacci-like sequence used to bound the depth of a balanced rope.
/// The duplicate leading 1 is omitted, so every value is distinct.
///
const FIBONACCI_SEED: [u64; 30] = [
    1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987,
    1597, 2584, 4181, 6765, 10946, 17711, 28657, 46368, 75025, 121393,
    196418, 317811, 514229, 832040, 1346269
];

///
/// The cached sequence, shared by every thread. Extending the sequence replaces the `Arc`, so
/// a snapshot that has been handed out stays valid forever.
///
static FIBONACCI_CACHE: LazyLock<RwLock<Arc<Vec<u64>>>> = LazyLock::new(|| RwLock::new(Arc::new(FIBONACCI_SEED.to_vec())));

///
/// Returns the Fibonacci sequence, extended so that its largest value is at least `at_least`
///
/// The sequence stops growing at `u64::MAX`, which is larger than any rope length.
///
pub fn fibonacci_bounds(at_least: u64) -> Arc<Vec<u64>> {
    {
        // The cache only ever grows, so a poisoned lock still holds a valid sequence
        let cache = FIBONACCI_CACHE.read().unwrap_or_else(PoisonError::into_inner);

        if cache.last().copied().unwrap_or(0) >= at_least {
            return Arc::clone(&cache);
        }
    }

    let mut cache = FIBONACCI_CACHE.write().unwrap_or_else(PoisonError::into_inner);

    // Another thread might have extended the sequence while we were waiting for the lock
    if cache.last().copied().unwrap_or(0) < at_least {
        let mut extended = Vec::clone(&cache);

        loop {
            let len     = extended.len();
            let (a, b)  = (extended[len-2], extended[len-1]);

            if b >= at_least {
                break;
            }

            extended.push(a.checked_add(b).unwrap_or(u64::MAX));
        }

        trace!("Extended Fibonacci bounds from {} to {} values", cache.len(), extended.len());
        *cache = Arc::new(extended);
    }

    Arc::clone(&cache)
}

///
/// Returns the index of the smallest value in `bounds` that is `>= length`, or `bounds.len()`
/// if there is no such value
///
#[inline]
pub fn fibonacci_index(length: u64, bounds: &[u64]) -> usize {
    bounds.partition_point(|bound| *bound < length)
}

///
/// Returns the index of the largest value in `bounds` that is `<= length`, which is the slot that
/// the rebalancer uses for a node of that length. `length` must be at least 1.
///
#[inline]
pub fn fibonacci_slot(length: u64, bounds: &[u64]) -> usize {
    bounds.partition_point(|bound| *bound <= length).saturating_sub(1)
}

///
/// The deepest a balanced rope of a particular length can be
///
/// This is the index of the first value in the sequence that is at least as long as the rope,
/// which keeps the depth within `O(log_φ(length))`.
///
pub fn max_balanced_depth(length: usize) -> usize {
    let length = length as u64;
    let bounds = fibonacci_bounds(length);

    fibonacci_index(length, &bounds)
}
