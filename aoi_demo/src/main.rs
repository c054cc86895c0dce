use anyhow::Result;
use gaze_vision::{Aoi, DwellAccumulator, GazeSample, SampleSource, SyntheticSampler};
use log::info;
use opencv::{
    core::{Mat, Point, Scalar},
    highgui, imgproc,
};

const WIDTH: i32 = 1280;
const HEIGHT: i32 = 720;
const SAMPLE_COUNT: usize = 20;
const FRAME_DELAY_MS: i32 = 450; // One animation step per sample.
const WINDOW_NAME: &str = "AOI Gaze Demo";

fn main() -> Result<()> {
    env_logger::init();

    // --- 1. Sample Generation ---
    let mut source = SyntheticSampler::new(WIDTH as u32, HEIGHT as u32);
    let samples: Vec<GazeSample> = (0..SAMPLE_COUNT)
        .map_while(|_| source.next_sample())
        .collect();
    info!(
        "generated {} synthetic samples on a {}x{} canvas",
        samples.len(),
        WIDTH,
        HEIGHT
    );

    // --- 2. Static Canvas & State Setup ---
    let base_canvas = make_base_canvas()?;
    let mut dwell = DwellAccumulator::new();
    let mut drawn: Vec<(GazeSample, Aoi)> = Vec::with_capacity(samples.len());

    println!("Demo: synthetic gaze samples across four AOIs (center as origin).");
    println!("Each circle radius reflects how long the participant stared at that location.");

    // --- 3. Animation Loop ---
    for sample in samples {
        let region = Aoi::classify(sample.x, sample.y, WIDTH as u32, HEIGHT as u32);
        dwell.record(region, sample.duration_seconds);
        drawn.push((sample, region));

        // Each step fully re-renders every fixation observed so far.
        let mut frame = base_canvas.clone();
        for (fixation, region) in &drawn {
            imgproc::circle(
                &mut frame,
                Point::new(fixation.x as i32, fixation.y as i32),
                fixation.fixation_radius() as i32,
                color_for_aoi(*region),
                -1,
                imgproc::LINE_AA,
                0,
            )?;
        }

        // --- 4. Dwell Readout Overlay ---
        let text_y_start = HEIGHT - 80;
        for (i, region) in Aoi::ALL.into_iter().enumerate() {
            let line = format!(
                "{}: {:5.1}% ({:.2}s)",
                region.label(),
                dwell.percentage(region),
                dwell.seconds(region)
            );
            imgproc::put_text(
                &mut frame,
                &line,
                Point::new(20, text_y_start + i as i32 * 20),
                imgproc::FONT_HERSHEY_SIMPLEX,
                0.75,
                color_for_aoi(region),
                2,
                imgproc::LINE_AA,
                false,
            )?;
        }
        for (text, y) in [
            ("Press Esc or 'q' to quit early", 40),
            ("Synthetic gaze sequence (one circle per fixation)", 70),
        ] {
            imgproc::put_text(
                &mut frame,
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

        // --- 5. Display & Quit Polling ---
        highgui::imshow(WINDOW_NAME, &frame)?;
        let key = highgui::wait_key(FRAME_DELAY_MS)?;
        if key == 'q' as i32 || key == 27 {
            info!("quit key pressed, ending playback early");
            break;
        }
    }

    // --- 6. Final Summary ---
    println!();
    println!("Summary (percentage of observed time in each AOI):");
    for region in Aoi::ALL {
        println!(
            "  {}: {:.1}% ({:.2}s)",
            region.label(),
            dwell.percentage(region),
            dwell.seconds(region)
        );
    }
    println!();
    println!(
        "Replace the synthetic samples with real eye-tracker coordinates and durations \
         to turn this into a live analysis demo."
    );

    Ok(())
}

/// Draws the static quadrant grid: dark background, center lines, AOI labels.
fn make_base_canvas() -> opencv::Result<Mat> {
    let mut canvas = Mat::new_rows_cols_with_default(
        HEIGHT,
        WIDTH,
        opencv::core::CV_8UC3,
        Scalar::new(20.0, 20.0, 20.0, 0.0),
    )?;
    let center = Point::new(WIDTH / 2, HEIGHT / 2);
    let grid_color = Scalar::new(80.0, 80.0, 80.0, 0.0);
    imgproc::line(
        &mut canvas,
        Point::new(center.x, 0),
        Point::new(center.x, HEIGHT),
        grid_color,
        1,
        imgproc::LINE_AA,
        0,
    )?;
    imgproc::line(
        &mut canvas,
        Point::new(0, center.y),
        Point::new(WIDTH, center.y),
        grid_color,
        1,
        imgproc::LINE_AA,
        0,
    )?;

    let padding = 12;
    let label_color = Scalar::new(180.0, 180.0, 180.0, 0.0);
    let label_origins = [
        (Aoi::Aoi1, Point::new(padding, padding + 20)),
        (Aoi::Aoi2, Point::new(center.x + padding, padding + 20)),
        (Aoi::Aoi3, Point::new(center.x + padding, center.y + padding + 20)),
        (Aoi::Aoi4, Point::new(padding, center.y + padding + 20)),
    ];
    for (region, origin) in label_origins {
        imgproc::put_text(
            &mut canvas,
            region.label(),
            origin,
            imgproc::FONT_HERSHEY_SIMPLEX,
            0.8,
            label_color,
            2,
            imgproc::LINE_AA,
            false,
        )?;
    }

    Ok(canvas)
}

/// Fixed per-quadrant palette, BGR.
fn color_for_aoi(region: Aoi) -> Scalar {
    match region {
        Aoi::Aoi1 => Scalar::new(0.0, 128.0, 255.0, 0.0),   // Orange
        Aoi::Aoi2 => Scalar::new(0.0, 255.0, 0.0, 0.0),     // Green
        Aoi::Aoi3 => Scalar::new(255.0, 0.0, 0.0, 0.0),     // Blue
        Aoi::Aoi4 => Scalar::new(255.0, 255.0, 0.0, 0.0),   // Cyan-ish
    }
}
