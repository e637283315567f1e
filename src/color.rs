use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Blue for positive, red for negative correlations, fading to grey at zero.
pub fn diverging(value: f64) -> Color32 {
    let t = value.clamp(-1.0, 1.0).abs() as f32;
    let (r, g, b) = if value >= 0.0 { (33, 102, 172) } else { (178, 24, 43) };
    let mix = |c: u8| (90.0 + (c as f32 - 90.0) * t) as u8;
    Color32::from_rgb(mix(r), mix(g), mix(b))
}

// ---------------------------------------------------------------------------
// Color mapping: region → Color32
// ---------------------------------------------------------------------------

/// Maps each region to a distinct colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new<'a>(regions: impl IntoIterator<Item = &'a String>) -> Self {
        let regions: Vec<&String> = regions.into_iter().collect();
        let palette = generate_palette(regions.len());
        ColorMap {
            mapping: regions.into_iter().cloned().zip(palette).collect(),
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, region: &str) -> Color32 {
        self.mapping
            .get(region)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_get_distinct_colours() {
        let regions = vec!["South Asia".to_string(), "Western Europe".to_string()];
        let map = ColorMap::new(&regions);
        assert_ne!(map.color_for("South Asia"), map.color_for("Western Europe"));
        assert_eq!(map.color_for("Atlantis"), Color32::GRAY);
    }

    #[test]
    fn empty_palette() {
        assert!(generate_palette(0).is_empty());
    }
}
