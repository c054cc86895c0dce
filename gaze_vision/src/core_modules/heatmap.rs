// THEORY:
// The `heatmap` module owns the persistent intensity field behind the overlay
// demo. It is a plain frame-sized grid of `f32` values with exactly two
// mutations: a multiplicative decay that gradually forgets old fixations, and
// an additive disc stamp that records new ones. The expensive visual steps
// (Gaussian blur, normalization, colormap, blending) are deliberately *not*
// here: they are per-frame display concerns and run on a copy in the demo
// binary, so the persistent buffer only ever sees decay and stamps and never
// accumulates blur error.
//
// Key architectural principles:
// 1.  **Non-Negativity**: values start at zero, decay multiplies by a factor
//     in (0, 1], and stamps add non-negative intensity. Any sequence of the
//     two operations keeps every cell >= 0.
// 2.  **Flat Storage**: the grid is a single row-major `Vec<f32>`, which the
//     demo hands straight to OpenCV as a `width x height` single-channel
//     matrix without copying per cell.

/// A frame-sized grid of non-negative gaze intensity values.
#[derive(Debug, Clone)]
pub struct HeatmapBuffer {
    width: u32,
    height: u32,
    /// Row-major intensity values, `width * height` entries.
    values: Vec<f32>,
}

impl HeatmapBuffer {
    /// Creates a zero-filled buffer matching the video frame's dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw row-major intensity values.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// The intensity at one cell. Panics if the cell is out of bounds.
    pub fn value_at(&self, x: u32, y: u32) -> f32 {
        assert!(x < self.width && y < self.height);
        self.values[(y * self.width + x) as usize]
    }

    /// Multiplies every cell by `factor`, modelling gradual forgetting of old
    /// fixations. `factor` must lie in `(0, 1]`.
    pub fn decay(&mut self, factor: f32) {
        debug_assert!(factor > 0.0 && factor <= 1.0);
        for value in &mut self.values {
            *value *= factor;
        }
    }

    /// Adds `intensity` to every cell within `radius` of `(cx, cy)`.
    ///
    /// The disc is clipped at the buffer edge; stamping near or past the
    /// border simply contributes less. `intensity` must be non-negative.
    pub fn stamp(&mut self, cx: f32, cy: f32, radius: f32, intensity: f32) {
        debug_assert!(intensity >= 0.0);
        let min_x = (cx - radius).floor().max(0.0) as u32;
        let min_y = (cy - radius).floor().max(0.0) as u32;
        let max_x = ((cx + radius).ceil() as i64).min(self.width as i64 - 1);
        let max_y = ((cy + radius).ceil() as i64).min(self.height as i64 - 1);
        if max_x < min_x as i64 || max_y < min_y as i64 {
            return;
        }

        let radius_sq = radius * radius;
        for y in min_y..=max_y as u32 {
            let dy = y as f32 - cy;
            let row = (y * self.width) as usize;
            for x in min_x..=max_x as u32 {
                let dx = x as f32 - cx;
                if dx * dx + dy * dy <= radius_sq {
                    self.values[row + x as usize] += intensity;
                }
            }
        }
    }

    /// Scales the buffer to 8-bit grayscale (peak value maps to 255), for
    /// snapshot output. An all-zero buffer yields an all-zero image.
    pub fn to_gray_bytes(&self) -> Vec<u8> {
        let peak = self.values.iter().cloned().fold(0.0_f32, f32::max);
        if peak <= 0.0 {
            return vec![0; self.values.len()];
        }
        self.values
            .iter()
            .map(|v| (v / peak * 255.0).round() as u8)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decay_of_an_all_zero_buffer_is_idempotent() {
        let mut buffer = HeatmapBuffer::new(64, 48);
        for _ in 0..100 {
            buffer.decay(0.97);
        }
        assert!(buffer.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn values_stay_non_negative_under_decay_and_stamp_cycles() {
        let mut buffer = HeatmapBuffer::new(80, 60);
        for i in 0..50 {
            buffer.decay(0.97);
            let offset = i as f32;
            buffer.stamp(10.0 + offset, 5.0 + offset, 8.0, 1.0);
            buffer.stamp(-20.0, 70.0, 8.0, 1.0);
        }
        assert!(buffer.as_slice().iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn stamp_lands_at_the_disc_center_and_nowhere_far_away() {
        let mut buffer = HeatmapBuffer::new(100, 100);
        buffer.stamp(50.0, 50.0, 10.0, 1.0);
        assert_eq!(buffer.value_at(50, 50), 1.0);
        assert_eq!(buffer.value_at(50, 41), 1.0);
        assert_eq!(buffer.value_at(0, 0), 0.0);
        assert_eq!(buffer.value_at(50, 39), 0.0);
    }

    #[test]
    fn stamps_past_the_border_clip_instead_of_panicking() {
        let mut buffer = HeatmapBuffer::new(32, 32);
        buffer.stamp(0.0, 0.0, 5.0, 1.0);
        buffer.stamp(31.0, 31.0, 5.0, 1.0);
        buffer.stamp(100.0, 100.0, 5.0, 1.0);
        buffer.stamp(-100.0, 16.0, 5.0, 1.0);
        assert_eq!(buffer.value_at(0, 0), 1.0);
        assert_eq!(buffer.value_at(31, 31), 1.0);
    }

    #[test]
    fn decay_shrinks_stamped_intensity_geometrically() {
        let mut buffer = HeatmapBuffer::new(16, 16);
        buffer.stamp(8.0, 8.0, 2.0, 1.0);
        buffer.decay(0.5);
        buffer.decay(0.5);
        assert_eq!(buffer.value_at(8, 8), 0.25);
    }

    #[test]
    fn gray_conversion_maps_the_peak_to_full_white() {
        let mut buffer = HeatmapBuffer::new(8, 8);
        assert!(buffer.to_gray_bytes().iter().all(|&b| b == 0));

        buffer.stamp(2.0, 2.0, 0.5, 2.0);
        buffer.stamp(6.0, 6.0, 0.5, 1.0);
        let gray = buffer.to_gray_bytes();
        assert_eq!(gray[(2 * 8 + 2) as usize], 255);
        assert_eq!(gray[(6 * 8 + 6) as usize], 128);
    }
}
