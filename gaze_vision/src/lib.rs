// THEORY:
// This file is the main entry point for the `gaze_vision` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (the `aoi_demo` and
// `heatmap_demo` binaries).
//
// The primary goal is to export the sample source, the AOI classifier, the
// dwell accumulator, and the heatmap buffer as the clean, high-level interface
// for the gaze analysis core. The library is deliberately free of any video or
// GUI dependency: everything that touches a camera, a window, or an OpenCV
// call lives in the demo binaries, which keeps this crate's invariants
// unit-testable in isolation.

pub mod core_modules;

pub use core_modules::dwell::DwellAccumulator;
pub use core_modules::heatmap::HeatmapBuffer;
pub use core_modules::quadrant::Aoi;
pub use core_modules::sampler::{GazeSample, SampleSource, SyntheticSampler};
