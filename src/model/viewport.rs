use crate::config::TimelineConfig;

/// Live canvas size and zoom level. Everything else is derived per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Visible canvas width in pixels.
    pub canvas_width: f32,
    /// Visible canvas height in pixels.
    pub canvas_height: f32,
    /// Multiplier on the physical scale. Unbounded.
    pub zoom_factor: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}

impl Viewport {
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            zoom_factor: 1.0,
        }
    }

    /// Pixel length of one row (`scale_length_cm` at the current zoom).
    pub fn row_length_px(&self, config: &TimelineConfig) -> f32 {
        config.scale_length_cm as f32 * config.pixels_per_cm() * self.zoom_factor
    }

    /// Track the size the shell gives us this frame.
    pub fn resize(&mut self, canvas_width: f32, canvas_height: f32) {
        self.canvas_width = canvas_width;
        self.canvas_height = canvas_height;
    }

    /// One wheel notch up.
    pub fn zoom_in(&mut self, config: &TimelineConfig) {
        self.apply_zoom(config, self.zoom_factor * config.zoom_step);
    }

    /// One wheel notch down.
    pub fn zoom_out(&mut self, config: &TimelineConfig) {
        self.apply_zoom(config, self.zoom_factor / config.zoom_step);
    }

    /// A step whose factor or row length would leave the normal `f32` range
    /// (overflow to infinity, underflow towards zero) is skipped, so the
    /// factor stays usable in both directions.
    fn apply_zoom(&mut self, config: &TimelineConfig, zoom_factor: f32) {
        let row_length = Self { zoom_factor, ..*self }.row_length_px(config);
        if zoom_factor.is_normal() && row_length.is_normal() {
            self.zoom_factor = zoom_factor;
        } else {
            log::debug!("Zoom step to {} skipped", zoom_factor);
        }
    }

    pub fn reset_zoom(&mut self) {
        self.zoom_factor = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_cm_at_96_dpi() {
        let config = TimelineConfig::default();
        let viewport = Viewport::default();
        let expected = 30.0 * 96.0 / 2.54;
        assert!((viewport.row_length_px(&config) - expected).abs() < 1e-3);
    }

    #[test]
    fn zoom_scales_row_length() {
        let config = TimelineConfig::default();
        let mut viewport = Viewport::default();
        let base = viewport.row_length_px(&config);
        viewport.zoom_in(&config);
        assert!((viewport.row_length_px(&config) - base * 1.1).abs() < 1e-2);
        viewport.zoom_out(&config);
        viewport.zoom_out(&config);
        assert!(viewport.zoom_factor < 1.0);
        viewport.reset_zoom();
        assert_eq!(viewport.zoom_factor, 1.0);
    }

    #[test]
    fn zoom_has_no_bounds() {
        let config = TimelineConfig::default();
        let mut viewport = Viewport::default();
        for _ in 0..100 {
            viewport.zoom_in(&config);
        }
        assert!(viewport.zoom_factor > 10_000.0);
    }

    #[test]
    fn zoom_stays_finite_after_many_notches() {
        let config = TimelineConfig::default();
        let mut viewport = Viewport::default();
        for _ in 0..2000 {
            viewport.zoom_in(&config);
        }
        assert!(viewport.zoom_factor.is_finite());
        assert!(viewport.row_length_px(&config).is_finite());

        let top = viewport.zoom_factor;
        viewport.zoom_out(&config);
        assert!(viewport.zoom_factor < top);

        for _ in 0..4000 {
            viewport.zoom_out(&config);
        }
        assert!(viewport.zoom_factor > 0.0);
        let bottom = viewport.zoom_factor;
        viewport.zoom_in(&config);
        assert!(viewport.zoom_factor > bottom);
    }
}
