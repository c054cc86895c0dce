// Writes 8-bit grayscale buffers out as PNG. Used to snapshot heatmap
// buffers when eyeballing the decay/stamp behavior from tests.

use image::ImageEncoder;
use std::path::Path;

pub fn save_gray(
    path: &Path,
    width: u32,
    height: u32,
    buffer: &[u8],
) -> Result<(), image::error::ImageError> {
    let output = std::fs::File::create(path)?;
    let encoder = image::codecs::png::PngEncoder::new(output);

    encoder.write_image(buffer, width, height, image::ExtendedColorType::L8)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::heatmap::HeatmapBuffer;

    #[test]
    fn save_stamped_heatmap_snapshot() {
        let mut buffer = HeatmapBuffer::new(320, 240);
        buffer.stamp(80.0, 60.0, 40.0, 1.0);
        buffer.stamp(240.0, 180.0, 40.0, 0.5);
        buffer.decay(0.97);

        let path = std::env::temp_dir().join("gaze_vision_heatmap_snapshot.png");
        save_gray(&path, buffer.width(), buffer.height(), &buffer.to_gray_bytes())
            .expect("Error saving snapshot.");
        assert!(path.exists());
    }

    #[test]
    fn save_gradient_file() {
        let width = 256u32;
        let height = 64u32;
        let mut buffer = vec![0u8; (width * height) as usize];
        for (i, value) in buffer.iter_mut().enumerate() {
            *value = (i % width as usize) as u8;
        }

        let path = std::env::temp_dir().join("gaze_vision_gradient.png");
        save_gray(&path, width, height, &buffer).expect("Error saving gradient.");
        assert!(path.exists());
    }
}
