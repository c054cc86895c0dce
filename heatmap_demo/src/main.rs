use anyhow::{Context, Result, bail};
use gaze_vision::{HeatmapBuffer, SampleSource, SyntheticSampler};
use log::{info, warn};
use opencv::{
    core::{self, Mat, Point, Scalar, Size},
    highgui, imgproc,
    prelude::*,
    videoio::{self, VideoCapture},
};
use std::env;

const POINTS_PER_FRAME: usize = 3;
const STAMP_RADIUS: f32 = 40.0;
const STAMP_INTENSITY: f32 = 1.0;
const DECAY_FACTOR: f32 = 0.97;
const BLUR_SIGMA: f64 = 25.0;
const HEAT_ALPHA: f64 = 0.4; // 60% live frame, 40% heat layer.
const POLL_DELAY_MS: i32 = 15;
const WINDOW_NAME: &str = "Gaze Heatmap Demo";

fn main() -> Result<()> {
    env_logger::init();

    // --- 1. Argument Parsing & Capture Setup ---
    // A literal "0" selects the default camera; anything else is a file path.
    let source = env::args().nth(1).unwrap_or_else(|| String::from("0"));
    let mut cap = if source == "0" {
        VideoCapture::new(0, videoio::CAP_ANY).context("failed to create camera capture")?
    } else {
        VideoCapture::from_file(&source, videoio::CAP_ANY)
            .with_context(|| format!("failed to open video file '{source}'"))?
    };
    if !cap.is_opened()? {
        bail!("could not open video source '{source}'");
    }

    // --- 2. First Frame & Buffer Initialization ---
    let mut frame = Mat::default();
    if !cap.read(&mut frame)? || frame.empty() {
        bail!("could not read an initial frame from '{source}'");
    }
    let width = frame.cols();
    let height = frame.rows();
    info!("video source '{source}' opened at {width}x{height}");

    let mut heat = HeatmapBuffer::new(width as u32, height as u32);
    let mut sampler = SyntheticSampler::new(width as u32, height as u32);

    println!("Synthetic gaze heatmap over a live feed. Press Esc or 'q' to quit.");

    // --- 3. Main Processing Loop ---
    loop {
        // --- 4. Decay & Stamp ---
        heat.decay(DECAY_FACTOR);
        for _ in 0..POINTS_PER_FRAME {
            if let Some(sample) = sampler.next_sample() {
                heat.stamp(sample.x, sample.y, STAMP_RADIUS, STAMP_INTENSITY);
            }
        }

        // --- 5. Blur, Normalize, Colorize ---
        // All display-side processing runs on a copy; the persistent buffer
        // only ever sees decay and stamps.
        let flat = Mat::from_slice(heat.as_slice())?;
        let heat_mat = flat.reshape(1, height)?;
        let mut blurred = Mat::default();
        imgproc::gaussian_blur(
            &heat_mat,
            &mut blurred,
            Size::new(0, 0),
            BLUR_SIGMA,
            BLUR_SIGMA,
            core::BORDER_DEFAULT,
        )?;
        let mut normalized = Mat::default();
        core::normalize(
            &blurred,
            &mut normalized,
            0.0,
            255.0,
            core::NORM_MINMAX,
            core::CV_8U,
            &core::no_array(),
        )?;
        let mut colored = Mat::default();
        imgproc::apply_color_map(&normalized, &mut colored, imgproc::COLORMAP_JET)?;

        // --- 6. Blend & Annotate ---
        let mut blended = Mat::default();
        core::add_weighted(
            &frame,
            1.0 - HEAT_ALPHA,
            &colored,
            HEAT_ALPHA,
            0.0,
            &mut blended,
            -1,
        )?;
        for (text, y) in [
            ("Synthetic gaze heatmap (decays every frame)", 40),
            ("Press Esc or 'q' to quit", 70),
        ] {
            imgproc::put_text(
                &mut blended,
                text,
                Point::new(20, y),
                imgproc::FONT_HERSHEY_SIMPLEX,
                0.8,
                Scalar::new(255.0, 255.0, 255.0, 0.0),
                2,
                imgproc::LINE_AA,
                false,
            )?;
        }

        // --- 7. Display & Quit Polling ---
        highgui::imshow(WINDOW_NAME, &blended)?;
        let key = highgui::wait_key(POLL_DELAY_MS)?;
        if key == 'q' as i32 || key == 27 {
            info!("quit key pressed, ending");
            break;
        }

        // --- 8. Next Frame ---
        // A failed or empty read ends the run gracefully (end of file,
        // camera unplugged); only the initial open/read is treated as an error.
        match cap.read(&mut frame) {
            Ok(true) if !frame.empty() => {}
            Ok(_) => {
                info!("video source exhausted, ending");
                break;
            }
            Err(e) => {
                warn!("frame read failed ({e}), ending");
                break;
            }
        }
    }

    Ok(())
}
