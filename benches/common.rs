use rand::{distributions::Uniform, prelude::*};

/// Same 4 byte element as the benchmark binary
pub type Element = u32;

/// Identity buffer - serves both as value buffer and as sequential indices
#[allow(dead_code)]
pub fn create_identity(size: usize) -> Vec<Element> {
    (0..size as Element).collect()
}

/// Uniform random indices into a buffer of the given size
#[allow(dead_code)]
pub fn create_random_indices(size: usize) -> Vec<Element> {
    let dist = Uniform::new_inclusive(0, (size - 1) as Element);
    rand::thread_rng().sample_iter(dist).take(size).collect()
}

/// From fitting into L1 up to far beyond the last level cache
#[allow(dead_code)]
pub const SIZE_ARRAY: [usize; 4] = [1_000, 100_000, 1_000_000, 10_000_000];
