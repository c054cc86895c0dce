pub mod dwell;
pub mod heatmap;
pub mod quadrant;
pub mod sampler;
pub mod utils;
