// THEORY:
// The `dwell` module is the temporal half of the AOI analysis. It owns one
// non-negative counter per region and answers the only question the demo
// asks: "what share of the observed time went to each region so far?"
//
// Key architectural principles:
// 1.  **Monotonic State**: counters start at zero and only ever grow. There
//     is no reset within a run, so percentages are always computed from the
//     full history of recorded samples.
// 2.  **Zero-Safe Queries**: before any time has been recorded the percentage
//     query returns 0.0 for every region rather than dividing by zero. Once
//     total time is positive, the four percentages sum to 100.

use crate::core_modules::quadrant::Aoi;

/// Accumulates per-region dwell time and serves percentage-of-total queries.
#[derive(Debug, Clone, Default)]
pub struct DwellAccumulator {
    /// Seconds of observed dwell per region, indexed by `Aoi::index`.
    seconds: [f64; 4],
}

impl DwellAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits a classified sample's duration to its region.
    pub fn record(&mut self, region: Aoi, duration_seconds: f64) {
        self.seconds[region.index()] += duration_seconds;
    }

    /// Raw seconds recorded for one region.
    pub fn seconds(&self, region: Aoi) -> f64 {
        self.seconds[region.index()]
    }

    /// Total seconds recorded across all regions.
    pub fn total_seconds(&self) -> f64 {
        self.seconds.iter().sum()
    }

    /// This region's share of the running total, in percent.
    /// Returns 0.0 for every region while the total is zero.
    pub fn percentage(&self, region: Aoi) -> f64 {
        let total = self.total_seconds();
        if total <= 0.0 {
            return 0.0;
        }
        self.seconds[region.index()] / total * 100.0
    }
}
