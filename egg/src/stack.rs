//! Stack growth for the recursive parser and evaluator.
//!
//! Nesting depth follows the input program, so both recursions grow the
//! stack on demand instead of relying on the size of the calling thread's
//! stack (2 MiB for spawned threads).

/// Grow when less than this much stack is left.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_recursion_on_a_spawned_thread() {
        fn depth(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
        }
        let handle = std::thread::spawn(|| depth(100_000));
        assert_eq!(handle.join().ok(), Some(100_000));
    }
}
