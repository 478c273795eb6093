use std::collections::VecDeque;

use crate::models::VitalSample;

/// Bounded, time-ordered buffer of recent samples for trend display.
/// Strictly FIFO: once at capacity, the oldest entry is evicted on append.
#[derive(Debug)]
pub struct HistoryRing {
    buf: VecDeque<VitalSample>,
    capacity: usize,
}

impl HistoryRing {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn append(&mut self, sample: VitalSample) {
        if self.buf.len() == self.capacity {
            self.buf.pop_front();
        }
        self.buf.push_back(sample);
    }

    pub fn latest(&self) -> Option<&VitalSample> {
        self.buf.back()
    }

    /// Snapshot in insertion order, most recent last.
    pub fn to_vec(&self) -> Vec<VitalSample> {
        self.buf.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VitalSample> {
        self.buf.iter()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_with_rate(heart_rate: f64) -> VitalSample {
        let mut sample = VitalSample::baseline(Utc::now());
        sample.heart_rate = heart_rate;
        sample
    }

    #[test]
    fn append_grows_until_capacity() {
        let mut ring = HistoryRing::new(120);
        for i in 0..120 {
            ring.append(sample_with_rate(i as f64));
        }
        assert_eq!(ring.len(), 120);
        assert_eq!(ring.latest().unwrap().heart_rate, 119.0);
    }

    #[test]
    fn overflow_evicts_oldest_first() {
        let mut ring = HistoryRing::new(120);
        for i in 0..200 {
            ring.append(sample_with_rate(i as f64));
        }
        assert_eq!(ring.len(), 120);

        // Exactly the last 120 appended, in order.
        let rates: Vec<f64> = ring.iter().map(|s| s.heart_rate).collect();
        let expected: Vec<f64> = (80..200).map(|i| i as f64).collect();
        assert_eq!(rates, expected);
    }

    #[test]
    fn clear_empties_the_ring() {
        let mut ring = HistoryRing::new(4);
        ring.append(sample_with_rate(70.0));
        assert!(!ring.is_empty());
        ring.clear();
        assert!(ring.is_empty());
        assert!(ring.latest().is_none());
    }
}
