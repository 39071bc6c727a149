use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

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

// ---------------------------------------------------------------------------
// Category colours: label → Color32
// ---------------------------------------------------------------------------

/// Maps category labels (sites, booster versions) to distinct colours.
/// Keeps the category order it was built with so legends stay stable.
#[derive(Debug, Clone, Default)]
pub struct CategoryColors {
    mapping: Vec<(String, Color32)>,
}

impl CategoryColors {
    pub fn new<S: AsRef<str>>(categories: &[S]) -> Self {
        let palette = generate_palette(categories.len());
        let mapping = categories
            .iter()
            .zip(palette)
            .map(|(label, color)| (label.as_ref().to_string(), color))
            .collect();
        CategoryColors { mapping }
    }

    /// Colour for a label; grey for anything not seen at construction.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
            .unwrap_or(Color32::GRAY)
    }

    /// Legend entries (label, colour) in category order.
    pub fn legend_entries(&self) -> &[(String, Color32)] {
        &self.mapping
    }
}

/// Fixed colours for the two outcome classes in single-site mode.
pub fn outcome_color(label: &str) -> Option<Color32> {
    match label {
        "0" => Some(Color32::from_rgb(230, 85, 75)),
        "1" => Some(Color32::from_rgb(80, 200, 120)),
        _ => None,
    }
}
