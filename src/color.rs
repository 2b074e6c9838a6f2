use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Fixed colours
// ---------------------------------------------------------------------------

/// Colour of a number the user clicked directly on the hundreds square.
pub const MANUAL_SELECTION: Color32 = Color32::from_rgb(0x64, 0x19, 0xE6);

/// Even-number highlight on the number line.
pub const EVEN_HIGHLIGHT: Color32 = Color32::from_rgb(0x10, 0xB9, 0x81);

/// Odd-number highlight on the number line.
pub const ODD_HIGHLIGHT: Color32 = Color32::from_rgb(0xF5, 0x9E, 0x0B);

/// Explicitly selected values on the number line.
pub const SELECTED_MARKER: Color32 = Color32::from_rgb(0x43, 0x38, 0xCA);

/// Bars and line series on the chart page.
pub const SERIES: Color32 = Color32::from_rgb(70, 130, 180);

/// Times-table colours for multipliers 1 through 12, in order.
pub const TIMES_TABLE: [Color32; 12] = [
    Color32::from_rgb(128, 128, 128),
    Color32::from_rgb(255, 99, 132),
    Color32::from_rgb(54, 162, 235),
    Color32::from_rgb(255, 206, 86),
    Color32::from_rgb(75, 192, 192),
    Color32::from_rgb(153, 102, 255),
    Color32::from_rgb(255, 159, 64),
    Color32::from_rgb(199, 199, 199),
    Color32::from_rgb(83, 102, 255),
    Color32::from_rgb(255, 102, 102),
    Color32::from_rgb(102, 255, 178),
    Color32::from_rgb(178, 102, 255),
];

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

/// Cycle through a generated palette of `size` colours, so item `i` always
/// gets the same colour for a given palette size.
pub fn cycled(palette: &[Color32], i: usize) -> Color32 {
    if palette.is_empty() {
        return Color32::GRAY;
    }
    palette[i % palette.len()]
}

/// Convert to an RGBA pixel for the raster canvas.
pub fn to_rgba(c: Color32) -> [u8; 4] {
    [c.r(), c.g(), c.b(), c.a()]
}
