use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::CurveKind;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: curve category → Color32
// ---------------------------------------------------------------------------

/// Fixed colour per curve category so a p-y trace looks the same at every
/// depth step.
#[derive(Debug, Clone)]
pub struct CategoryColors {
    colors: [Color32; 3],
}

impl Default for CategoryColors {
    fn default() -> Self {
        let palette = generate_palette(3);
        CategoryColors {
            colors: [palette[0], palette[1], palette[2]],
        }
    }
}

impl CategoryColors {
    /// Look up the colour for a curve category.
    pub fn color_for(&self, kind: CurveKind) -> Color32 {
        let idx = CurveKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default();
        self.colors[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_entries() {
        let palette = generate_palette(3);
        assert_eq!(palette.len(), 3);
        assert_ne!(palette[0], palette[1]);
        assert_ne!(palette[1], palette[2]);
    }

    #[test]
    fn categories_get_distinct_colors() {
        let colors = CategoryColors::default();
        assert_ne!(
            colors.color_for(CurveKind::Py),
            colors.color_for(CurveKind::Qz)
        );
    }
}
