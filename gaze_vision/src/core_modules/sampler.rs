// THEORY:
// The `sampler` module is the data source for both demos. It separates the
// "dumb" data record (`GazeSample`) from the machinery that produces it
// (`SampleSource` implementations), the same container/analyzer split used
// throughout this library.
//
// Key architectural principles:
// 1.  **Extension Seam**: `SampleSource` is the one place a real eye tracker
//     would plug in. Everything downstream (classification, dwell accounting,
//     heatmap stamping) consumes samples through this trait and never learns
//     where they came from.
// 2.  **Owned Randomness**: `SyntheticSampler` owns its RNG instead of
//     reaching for a process-global one. The demos seed it from OS entropy;
//     tests seed it with a fixed value and get a reproducible sequence.
// 3.  **Lazy Production**: sources hand out one sample at a time and may be
//     finite or infinite. The synthetic source never runs dry; the callers
//     decide how many samples a run consumes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Duration range for synthetic fixations, in seconds.
const DURATION_RANGE: std::ops::Range<f64> = 0.25..1.5;
/// Rendered circle radius at zero duration, in pixels.
const MIN_FIXATION_RADIUS: f64 = 12.0;
/// Additional circle radius per second of fixation, in pixels.
const RADIUS_PER_SECOND: f64 = 55.0;

/// A single simulated fixation: where the participant looked and for how long.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazeSample {
    /// Horizontal position in pixels, origin at the top-left of the frame.
    pub x: f32,
    /// Vertical position in pixels, origin at the top-left of the frame.
    pub y: f32,
    /// How long the gaze rested at this position, in seconds. Always positive.
    pub duration_seconds: f64,
}

impl GazeSample {
    /// Radius of the rendered fixation circle, in pixels.
    ///
    /// Strictly increasing in duration with a fixed floor, so a longer stare
    /// always draws a larger circle.
    pub fn fixation_radius(&self) -> f64 {
        MIN_FIXATION_RADIUS + RADIUS_PER_SECOND * self.duration_seconds
    }
}

/// A lazy sequence of gaze samples, finite or infinite.
///
/// Substituting a real eye tracker for the synthetic generator means
/// implementing this trait; the accumulation and rendering layers stay
/// untouched.
pub trait SampleSource {
    /// Produces the next sample, or `None` once the source is exhausted.
    fn next_sample(&mut self) -> Option<GazeSample>;
}

/// Generates fixations uniformly distributed over a frame's pixel extent,
/// with durations uniform in `DURATION_RANGE`. Never exhausted.
pub struct SyntheticSampler {
    rng: StdRng,
    width: u32,
    height: u32,
}

impl SyntheticSampler {
    /// Creates a sampler for the given frame extent, seeded from OS entropy.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            width,
            height,
        }
    }

    /// Creates a deterministic sampler. Two samplers built with the same
    /// seed and extent produce identical sequences.
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            width,
            height,
        }
    }
}

impl SampleSource for SyntheticSampler {
    fn next_sample(&mut self) -> Option<GazeSample> {
        Some(GazeSample {
            x: self.rng.gen_range(0.0..self.width as f32),
            y: self.rng.gen_range(0.0..self.height as f32),
            duration_seconds: self.rng.gen_range(DURATION_RANGE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_inside_the_frame_extent() {
        let mut source = SyntheticSampler::with_seed(1280, 720, 7);
        for _ in 0..500 {
            let sample = source.next_sample().unwrap();
            assert!((0.0..1280.0).contains(&sample.x));
            assert!((0.0..720.0).contains(&sample.y));
            assert!(
                DURATION_RANGE.contains(&sample.duration_seconds),
                "duration {} out of range",
                sample.duration_seconds
            );
        }
    }

    #[test]
    fn identical_seeds_produce_identical_sequences() {
        let mut a = SyntheticSampler::with_seed(640, 480, 42);
        let mut b = SyntheticSampler::with_seed(640, 480, 42);
        for _ in 0..20 {
            assert_eq!(a.next_sample(), b.next_sample());
        }
    }

    #[test]
    fn fixation_radius_grows_with_duration_from_a_fixed_floor() {
        let at = |duration_seconds: f64| GazeSample {
            x: 0.0,
            y: 0.0,
            duration_seconds,
        };
        assert_eq!(at(0.0).fixation_radius(), 12.0);
        let mut previous = at(0.0).fixation_radius();
        for step in 1..=15 {
            let radius = at(step as f64 * 0.1).fixation_radius();
            assert!(radius > previous);
            previous = radius;
        }
        assert_eq!(at(1.0).fixation_radius(), 67.0);
    }
}
