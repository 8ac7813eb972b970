use std::{
    fmt,
    hint::black_box,
    thread,
    time::{Duration, Instant},
};

use log::{debug, trace};

use crate::{
    buffers::{Buffers, Element},
    config::{BenchConfig, ConfigError},
};

/// Result of one timed summation pass
#[derive(Debug, Clone, Copy)]
pub struct TimedPass {
    pub sum: u64,
    pub start: Instant,
    pub end: Instant,
}

impl TimedPass {
    pub fn elapsed(&self) -> Duration {
        self.end.duration_since(self.start)
    }
}

/// Both passes of a run
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub sequential: TimedPass,
    pub random: TimedPass,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // printing the sums keeps the compiler from eliminating the loops as dead code
        writeln!(f, "Sum 1: {}", self.sequential.sum)?;
        writeln!(f, "Sum 2: {}", self.random.sum)?;
        writeln!(f)?;

        // as_millis truncates like a duration cast to whole milliseconds
        writeln!(f, "Sequential milliseconds: {}ms", self.sequential.elapsed().as_millis())?;
        writeln!(f, "Random milliseconds: {}ms", self.random.elapsed().as_millis())
    }
}

#[derive(Debug)]
pub struct Harness {
    buffers: Buffers,
    cooldown: Duration,
}

impl Harness {
    /// Allocate and fill the buffers - nothing here is timed
    pub fn setup(config: &BenchConfig) -> Result<Self, ConfigError> {
        debug!("Allocating 3 buffers with {} elements each", config.elements);
        let buffers = Buffers::generate(config)?;
        debug!("Populated {} elements per buffer", buffers.len());

        Ok(Self::with_buffers(buffers, config.cooldown))
    }

    pub fn with_buffers(buffers: Buffers, cooldown: Duration) -> Self {
        Harness { buffers, cooldown }
    }

    #[cfg(test)]
    pub fn buffers(&self) -> &Buffers {
        &self.buffers
    }

    /// Contiguous walk - the best case for the hardware prefetcher
    pub fn sequential_pass(&self) -> TimedPass {
        trace!("Starting sequential pass");
        let pass = timed_sum(self.buffers.values(), self.buffers.sequential());
        debug!("Sequential pass took {:?}", pass.elapsed());
        pass
    }

    /// Walk in the pre-generated random order - frequent cache misses
    pub fn random_pass(&self) -> TimedPass {
        trace!("Starting random pass");
        let pass = timed_sum(self.buffers.values(), self.buffers.random());
        debug!("Random pass took {:?}", pass.elapsed());
        pass
    }

    /// Block the current thread between the passes to reduce carryover from the first pass
    pub fn cooldown(&self) {
        trace!("Cooling down for {:?}", self.cooldown);
        thread::sleep(self.cooldown);
    }

    pub fn run(&self) -> Report {
        let sequential = self.sequential_pass();
        self.cooldown();
        let random = self.random_pass();

        Report { sequential, random }
    }
}

/// Sum `values[indices[i]]` over all indices and time the loop
///
/// Both passes go through this function, so they pay for exactly the same indirection and bounds
/// checks. Only the order of the memory accesses differs.
#[inline(never)]
fn timed_sum(values: &[Element], indices: &[Element]) -> TimedPass {
    let start = Instant::now();

    let mut sum: u64 = 0;
    for &index in indices {
        sum += u64::from(values[index as usize]);
    }

    // observe the sum before taking the end timestamp, so the loop can't sink past it
    let sum = black_box(sum);
    let end = Instant::now();
    TimedPass { sum, start, end }
}
