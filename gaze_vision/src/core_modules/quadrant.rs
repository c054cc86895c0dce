// THEORY:
// The `quadrant` module divides the frame into four areas of interest (AOIs)
// along its vertical and horizontal center lines and assigns every point to
// exactly one of them. It is the spatial half of the dwell analysis: the
// classifier decides *where* a fixation belongs, and the `dwell` module
// decides *how much* time that region has collected.
//
// Key architectural principles:
// 1.  **Total Function**: classification never fails and has no edge-case
//     escape hatch. Points exactly on a center line belong to the region
//     right of / below it, so the four regions tile the plane.
// 2.  **Quadrant Naming**: AOI1 through AOI4 run clockwise starting at the
//     top-left quadrant, matching the on-screen labels and the summary
//     printout.

/// The four areas of interest, named clockwise from the top-left quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aoi {
    /// Top-left quadrant.
    Aoi1,
    /// Top-right quadrant.
    Aoi2,
    /// Bottom-right quadrant.
    Aoi3,
    /// Bottom-left quadrant.
    Aoi4,
}

impl Aoi {
    /// All regions in label order, for iteration in overlays and summaries.
    pub const ALL: [Aoi; 4] = [Aoi::Aoi1, Aoi::Aoi2, Aoi::Aoi3, Aoi::Aoi4];

    /// Assigns a point to its region relative to the frame's center lines.
    ///
    /// Boundary rule: a point exactly on the vertical center line counts as
    /// "right", and one exactly on the horizontal center line counts as
    /// "bottom".
    pub fn classify(x: f32, y: f32, width: u32, height: u32) -> Aoi {
        let center_x = width as f32 / 2.0;
        let center_y = height as f32 / 2.0;
        let right = x >= center_x;
        let bottom = y >= center_y;

        match (right, bottom) {
            (false, false) => Aoi::Aoi1,
            (true, false) => Aoi::Aoi2,
            (true, true) => Aoi::Aoi3,
            (false, true) => Aoi::Aoi4,
        }
    }

    /// Stable zero-based index, used for counter slots and color palettes.
    pub fn index(self) -> usize {
        match self {
            Aoi::Aoi1 => 0,
            Aoi::Aoi2 => 1,
            Aoi::Aoi3 => 2,
            Aoi::Aoi4 => 3,
        }
    }

    /// The on-screen label for this region.
    pub fn label(self) -> &'static str {
        match self {
            Aoi::Aoi1 => "AOI1",
            Aoi::Aoi2 => "AOI2",
            Aoi::Aoi3 => "AOI3",
            Aoi::Aoi4 => "AOI4",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: u32 = 1280;
    const HEIGHT: u32 = 720;

    #[test]
    fn corners_map_clockwise_from_top_left() {
        assert_eq!(Aoi::classify(0.0, 0.0, WIDTH, HEIGHT), Aoi::Aoi1);
        assert_eq!(Aoi::classify(1279.0, 0.0, WIDTH, HEIGHT), Aoi::Aoi2);
        assert_eq!(Aoi::classify(1279.0, 719.0, WIDTH, HEIGHT), Aoi::Aoi3);
        assert_eq!(Aoi::classify(0.0, 719.0, WIDTH, HEIGHT), Aoi::Aoi4);
    }

    #[test]
    fn center_line_points_go_right_and_bottom() {
        // The exact center belongs to the bottom-right region.
        assert_eq!(Aoi::classify(640.0, 360.0, WIDTH, HEIGHT), Aoi::Aoi3);
        // On the vertical center line, above center: right wins.
        assert_eq!(Aoi::classify(640.0, 100.0, WIDTH, HEIGHT), Aoi::Aoi2);
        // On the horizontal center line, left of center: bottom wins.
        assert_eq!(Aoi::classify(100.0, 360.0, WIDTH, HEIGHT), Aoi::Aoi4);
        // Just shy of both lines stays top-left.
        assert_eq!(Aoi::classify(639.9, 359.9, WIDTH, HEIGHT), Aoi::Aoi1);
    }

    #[test]
    fn indices_and_labels_line_up() {
        for (i, region) in Aoi::ALL.iter().enumerate() {
            assert_eq!(region.index(), i);
            assert_eq!(region.label(), format!("AOI{}", i + 1));
        }
    }
}
