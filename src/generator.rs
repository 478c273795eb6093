use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{FieldWalk, WalkConfig};
use crate::models::{BloodPressure, VitalSample};

/// Source of the per-tick perturbations driving the random walk. Injectable
/// so tests can script deterministic sequences without touching the clamping
/// logic.
pub trait PerturbationSource {
    /// Returns a value uniformly distributed in `[-half_range, +half_range]`.
    fn jitter(&mut self, half_range: f64) -> f64;
}

/// Default perturbation source backed by a seedable RNG. `StdRng` keeps the
/// walk `Send` so it can live inside the spawned monitor loop.
pub struct RandomWalk {
    rng: StdRng,
}

impl RandomWalk {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl PerturbationSource for RandomWalk {
    fn jitter(&mut self, half_range: f64) -> f64 {
        if half_range <= 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-half_range..=half_range)
    }
}

/// Produces the next vital-sign sample from the previous one. Pure aside
/// from consuming randomness; the caller owns the result.
pub struct SampleGenerator<P: PerturbationSource> {
    walk: WalkConfig,
    source: P,
}

impl<P: PerturbationSource> SampleGenerator<P> {
    pub fn new(walk: WalkConfig, source: P) -> Self {
        Self { walk, source }
    }

    pub fn next_sample(&mut self, prev: &VitalSample, now: DateTime<Utc>) -> VitalSample {
        let source = &mut self.source;
        VitalSample {
            timestamp: now,
            // Heart rate is reported as whole bpm; the other fields keep
            // their fractional drift.
            heart_rate: step(source, prev.heart_rate, &self.walk.heart_rate).round(),
            blood_pressure: BloodPressure {
                systolic: step(source, prev.blood_pressure.systolic, &self.walk.systolic),
                diastolic: step(source, prev.blood_pressure.diastolic, &self.walk.diastolic),
            },
            sp_o2: step(source, prev.sp_o2, &self.walk.sp_o2),
        }
    }
}

fn step<P: PerturbationSource>(source: &mut P, prev: f64, field: &FieldWalk) -> f64 {
    (prev + source.jitter(field.jitter)).clamp(field.min, field.max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WalkConfig;

    /// Replays a fixed list of offsets, then repeats the last one.
    struct Scripted {
        offsets: Vec<f64>,
        index: usize,
    }

    impl Scripted {
        fn new(offsets: Vec<f64>) -> Self {
            Self { offsets, index: 0 }
        }
    }

    impl PerturbationSource for Scripted {
        fn jitter(&mut self, _half_range: f64) -> f64 {
            let offset = self.offsets[self.index.min(self.offsets.len() - 1)];
            self.index += 1;
            offset
        }
    }

    #[test]
    fn walk_never_leaves_physiological_bounds() {
        let mut generator =
            SampleGenerator::new(WalkConfig::default(), RandomWalk::seeded(42));
        let mut sample = VitalSample::baseline(Utc::now());

        for _ in 0..10_000 {
            sample = generator.next_sample(&sample, Utc::now());
            assert!((40.0..=160.0).contains(&sample.heart_rate), "hr out of range");
            assert!((70.0..=190.0).contains(&sample.blood_pressure.systolic));
            assert!((40.0..=120.0).contains(&sample.blood_pressure.diastolic));
            assert!((85.0..=100.0).contains(&sample.sp_o2));
        }
    }

    #[test]
    fn extreme_perturbations_saturate_at_the_bounds() {
        let mut up = SampleGenerator::new(
            WalkConfig::default(),
            Scripted::new(vec![1000.0]),
        );
        let high = up.next_sample(&VitalSample::baseline(Utc::now()), Utc::now());
        assert_eq!(high.heart_rate, 160.0);
        assert_eq!(high.blood_pressure.systolic, 190.0);
        assert_eq!(high.blood_pressure.diastolic, 120.0);
        assert_eq!(high.sp_o2, 100.0);

        let mut down = SampleGenerator::new(
            WalkConfig::default(),
            Scripted::new(vec![-1000.0]),
        );
        let low = down.next_sample(&VitalSample::baseline(Utc::now()), Utc::now());
        assert_eq!(low.heart_rate, 40.0);
        assert_eq!(low.blood_pressure.systolic, 70.0);
        assert_eq!(low.blood_pressure.diastolic, 40.0);
        assert_eq!(low.sp_o2, 85.0);
    }

    #[test]
    fn heart_rate_is_rounded_to_whole_bpm() {
        let mut generator = SampleGenerator::new(
            WalkConfig::default(),
            Scripted::new(vec![1.4]),
        );
        let next = generator.next_sample(&VitalSample::baseline(Utc::now()), Utc::now());
        assert_eq!(next.heart_rate, 76.0);
        // Blood pressure keeps the fractional step.
        assert!((next.blood_pressure.systolic - 121.4).abs() < 1e-9);
    }

    #[test]
    fn scripted_walk_tracks_offsets_exactly() {
        let mut generator = SampleGenerator::new(
            WalkConfig::default(),
            Scripted::new(vec![3.0, -2.0, 0.0]),
        );
        let start = VitalSample::baseline(Utc::now());
        let first = generator.next_sample(&start, Utc::now());
        assert_eq!(first.heart_rate, 78.0);
    }
}
