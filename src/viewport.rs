/// Drawable area in screen pixels. Never smaller than 1x1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        // NaN fails the comparison and lands on 1.0 as well.
        Self {
            width: if width >= 1.0 { width } else { 1.0 },
            height: if height >= 1.0 { height } else { 1.0 },
        }
    }

    /// Whole-pixel size, for allocating render targets.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width.round() as u32, self.height.round() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_dimensions_clamp_to_one_pixel() {
        let vp = Viewport::new(0.0, -40.0);
        assert_eq!(vp.width, 1.0);
        assert_eq!(vp.height, 1.0);

        let vp = Viewport::new(f32::NAN, 300.0);
        assert_eq!(vp.width, 1.0);
        assert_eq!(vp.height, 300.0);
        assert_eq!(vp.pixel_size(), (1, 300));
    }
}
