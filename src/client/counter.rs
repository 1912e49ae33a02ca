//! Per-thread count of issued API calls.
//!
//! Every counted HTTP call bumps the count of the thread that issued it,
//! whether the call succeeded or not. Threads never see each other's
//! counts, so callers running operations in parallel can still measure
//! what each one cost.

use std::cell::Cell;

thread_local! {
    static REQUEST_COUNT: Cell<u64> = const { Cell::new(0) };
}

/// Number of counted API calls made on the current thread since it started
/// or since the last [`reset_request_count`].
pub fn request_count() -> u64 {
    REQUEST_COUNT.with(Cell::get)
}

/// Zero the current thread's request count.
pub fn reset_request_count() {
    REQUEST_COUNT.with(|count| count.set(0));
}

pub(crate) fn increment() {
    REQUEST_COUNT.with(|count| count.set(count.get().saturating_add(1)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_reset() {
        reset_request_count();
        increment();
        increment();
        assert_eq!(request_count(), 2);

        reset_request_count();
        assert_eq!(request_count(), 0);
    }

    #[test]
    fn test_threads_are_isolated() {
        reset_request_count();
        increment();

        let other = std::thread::spawn(|| {
            assert_eq!(request_count(), 0);
            for _ in 0..5 {
                increment();
            }
            reset_request_count();
            increment();
            request_count()
        })
        .join()
        .unwrap();

        assert_eq!(other, 1);
        assert_eq!(request_count(), 1);
    }
}
