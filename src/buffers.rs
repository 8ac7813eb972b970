use log::debug;
use rand::{
    distributions::{Distribution, Uniform},
    rngs::StdRng,
    SeedableRng,
};

use crate::config::{BenchConfig, ConfigError};

/// Integer type of all buffers - 4 bytes keep the footprint of the classic `int` array
pub type Element = u32;

/// Value array and the two indirection arrays used to walk it
#[derive(Debug)]
pub struct Buffers {
    values: Vec<Element>,
    sequential: Vec<Element>,
    random: Vec<Element>,
}

impl Buffers {
    /// Allocate and populate all three buffers
    ///
    /// The random indices are generated here, so that the generator never runs inside a timed
    /// region.
    pub fn generate(config: &BenchConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => {
                debug!("Seeding random indices with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Ok(Self::populate(config.elements, &mut rng))
    }

    fn populate(elements: usize, rng: &mut StdRng) -> Self {
        // validated before - every index fits into the element type
        let max_index = (elements - 1) as Element;
        let dist = Uniform::new_inclusive(0, max_index);

        // reserve upfront, so the vectors never reallocate while filling
        let mut values = Vec::with_capacity(elements);
        let mut sequential = Vec::with_capacity(elements);
        let mut random = Vec::with_capacity(elements);
        for i in 0..=max_index {
            values.push(i);
            sequential.push(i);
            random.push(dist.sample(rng));
        }

        Buffers { values, sequential, random }
    }

    /// Build buffers with caller provided random indices
    ///
    /// # Panics
    ///
    /// If any index is outside the value buffer
    #[cfg(test)]
    pub fn from_random_indices(random: Vec<Element>) -> Self {
        let len = random.len() as Element;
        assert!(random.iter().all(|&index| index < len));

        let values: Vec<Element> = (0..len).collect();
        let sequential = values.clone();
        Buffers { values, sequential, random }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[Element] {
        &self.values
    }

    pub fn sequential(&self) -> &[Element] {
        &self.sequential
    }

    pub fn random(&self) -> &[Element] {
        &self.random
    }
}
