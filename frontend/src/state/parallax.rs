/// Maximum travel of the hero decoration in pixels, edge to edge.
pub const PARALLAX_RANGE_PX: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParallaxOffset {
    pub x: f64,
    pub y: f64,
}

impl ParallaxOffset {
    /// Offset for a pointer at (`x`, `y`) relative to the hero's top-left
    /// corner. A zero-sized hero yields no offset.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            x: (x / width - 0.5) * PARALLAX_RANGE_PX,
            y: (y / height - 0.5) * PARALLAX_RANGE_PX,
        }
    }

    pub fn transform(&self) -> String {
        if *self == Self::default() {
            "translate(0, 0)".to_string()
        } else {
            format!("translate({}px, {}px)", self.x, self.y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_neutral() {
        let offset = ParallaxOffset::from_pointer(400.0, 300.0, 800.0, 600.0);
        assert_eq!(offset, ParallaxOffset::default());
        assert_eq!(offset.transform(), "translate(0, 0)");
    }

    #[test]
    fn corners_reach_half_the_range() {
        let top_left = ParallaxOffset::from_pointer(0.0, 0.0, 800.0, 600.0);
        assert_eq!(top_left, ParallaxOffset { x: -10.0, y: -10.0 });
        let bottom_right = ParallaxOffset::from_pointer(800.0, 600.0, 800.0, 600.0);
        assert_eq!(bottom_right.transform(), "translate(10px, 10px)");
    }

    #[test]
    fn leaving_after_a_move_is_neutral_again() {
        let moved = ParallaxOffset::from_pointer(0.0, 0.0, 100.0, 100.0);
        assert_eq!(moved.transform(), "translate(-10px, -10px)");
        assert_eq!(ParallaxOffset::default().transform(), "translate(0, 0)");
    }

    #[test]
    fn degenerate_hero_does_not_divide_by_zero() {
        assert_eq!(ParallaxOffset::from_pointer(10.0, 10.0, 0.0, 600.0), ParallaxOffset::default());
    }
}
