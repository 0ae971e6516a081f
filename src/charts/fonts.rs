//! Embedded fonts for text rendering.
//!
//! plotters is built with its `ab_glyph` backend, which only knows the fonts
//! registered here. DejaVu Sans ships inside the binary so charts render the
//! same on every machine, with no fontconfig lookup.

use super::palette::FONT;
use super::ChartError;
use plotters::style::{register_font, FontStyle};
use std::sync::OnceLock;

static REGULAR: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
static BOLD: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");

static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();

/// Registers the chart font family once per process.
pub(crate) fn register_fonts() -> Result<(), ChartError> {
    REGISTERED
        .get_or_init(|| {
            for (style, bytes) in [(FontStyle::Normal, REGULAR), (FontStyle::Bold, BOLD)] {
                register_font(FONT, style, bytes)
                    .map_err(|_| format!("invalid {} font data", style.as_str()))?;
            }
            Ok(())
        })
        .clone()
        .map_err(ChartError::Font)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_fonts_is_idempotent() {
        register_fonts().unwrap();
        register_fonts().unwrap();
    }
}
