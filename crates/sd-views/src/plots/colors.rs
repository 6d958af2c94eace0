//! Color utilities for the chart panels

use egui::Color32;

/// Get a categorical color from the panel palette
pub fn categorical_color(index: usize) -> Color32 {
    const PALETTE: &[Color32] = &[
        Color32::from_rgb(96, 156, 246),  // Blue
        Color32::from_rgb(242, 160, 90),  // Orange
        Color32::from_rgb(120, 200, 120), // Green
        Color32::from_rgb(230, 110, 150), // Pink
        Color32::from_rgb(160, 120, 240), // Purple
        Color32::from_rgb(236, 210, 100), // Yellow
    ];
    PALETTE[index % PALETTE.len()]
}

/// Red-to-yellow-to-green ramp for the salary map
pub fn red_yellow_green(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);

    if t < 0.5 {
        let s = t * 2.0;
        Color32::from_rgb(
            (211.0 * (1.0 - s) + 244.0 * s) as u8,
            (47.0 * (1.0 - s) + 214.0 * s) as u8,
            (47.0 * (1.0 - s) + 80.0 * s) as u8,
        )
    } else {
        let s = (t - 0.5) * 2.0;
        Color32::from_rgb(
            (244.0 * (1.0 - s) + 46.0 * s) as u8,
            (214.0 * (1.0 - s) + 150.0 * s) as u8,
            (80.0 * (1.0 - s) + 66.0 * s) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_endpoints_are_red_and_green() {
        let low = red_yellow_green(0.0);
        let high = red_yellow_green(1.0);
        assert!(low.r() > low.g());
        assert!(high.g() > high.r());
    }

    #[test]
    fn palette_wraps_around() {
        assert_eq!(categorical_color(0), categorical_color(6));
    }
}
