//! Rolling pop statistics for the debug overlay graph.

use std::collections::VecDeque;

/// The most recent samples of one overlay series, oldest first. Pushing past
/// capacity drops the oldest sample.
pub struct RingBuffer {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: f32) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Newest sample, shown as the graph's corner label.
    pub fn last(&self) -> Option<f32> {
        self.samples.back().copied()
    }

    /// Graph ceiling. Never below zero so an empty series still scales.
    pub fn max(&self) -> f32 {
        self.iter().fold(0.0, f32::max)
    }
}

/// Pops per sampling window, plus the live particle load.
pub struct PopStats {
    pub pops: RingBuffer,
    pub particles: RingBuffer,
    pub sample_interval: u32,
    pops_this_window: u32,
    tick_counter: u32,
}

impl PopStats {
    pub fn new(capacity: usize, sample_interval: u32) -> Self {
        Self {
            pops: RingBuffer::new(capacity),
            particles: RingBuffer::new(capacity),
            sample_interval: sample_interval.max(1),
            pops_this_window: 0,
            tick_counter: 0,
        }
    }

    /// Called once per simulation step.
    pub fn record(&mut self, pops_this_tick: u32, particle_count: usize) {
        self.pops_this_window += pops_this_tick;

        self.tick_counter += 1;
        if self.tick_counter % self.sample_interval != 0 {
            return;
        }

        self.pops.push(self.pops_this_window as f32);
        self.particles.push(particle_count as f32);
        self.pops_this_window = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_buffer_drops_oldest_sample_when_full() {
        let mut buf = RingBuffer::new(3);
        buf.push(1.0);
        buf.push(2.0);
        buf.push(3.0);
        buf.push(4.0);

        let values: Vec<f32> = buf.iter().collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0]);
        assert_eq!(buf.last(), Some(4.0));
        assert_eq!(buf.max(), 4.0);
    }

    #[test]
    fn pops_accumulate_until_the_window_closes() {
        let mut stats = PopStats::new(8, 3);

        stats.record(1, 20);
        stats.record(0, 15);
        assert_eq!(stats.pops.len(), 0);

        stats.record(2, 40);
        assert_eq!(stats.pops.iter().collect::<Vec<_>>(), vec![3.0]);
        assert_eq!(stats.particles.last(), Some(40.0));

        for _ in 0..3 {
            stats.record(0, 0);
        }
        assert_eq!(stats.pops.iter().collect::<Vec<_>>(), vec![3.0, 0.0]);
    }
}
