//! Colors and fonts shared by every chart.

use crate::model::{Category, StockStatus};
use plotters::style::RGBColor;

pub const FONT: &str = "sans-serif";
pub const TITLE_SIZE: f64 = 28.0;
pub const CAPTION_SIZE: f64 = 22.0;
pub const LABEL_SIZE: f64 = 15.0;

/// One qualitative color per category, indexed by [`Category::index`].
const CATEGORY_COLORS: [RGBColor; 8] = [
    RGBColor(102, 194, 165),
    RGBColor(252, 141, 98),
    RGBColor(141, 160, 203),
    RGBColor(231, 138, 195),
    RGBColor(166, 216, 84),
    RGBColor(255, 217, 47),
    RGBColor(229, 196, 148),
    RGBColor(179, 179, 179),
];

pub fn category_color(category: Category) -> RGBColor {
    CATEGORY_COLORS[category.index()]
}

pub fn stock_color(status: StockStatus) -> RGBColor {
    match status {
        StockStatus::InStock => RGBColor(46, 204, 113),
        StockStatus::LowStock => RGBColor(243, 156, 18),
        StockStatus::OutOfStock => RGBColor(231, 76, 60),
    }
}

/// Shades for the 1st, 2nd and 3rd best seller of a group.
pub const RANK_COLORS: [RGBColor; 3] = [
    RGBColor(31, 119, 180),
    RGBColor(107, 174, 214),
    RGBColor(189, 215, 238),
];

/// Rating bar color: green from 4.2, orange from 4.0, red below.
pub fn rating_color(rating: f64) -> RGBColor {
    if rating >= 4.2 {
        RGBColor(46, 204, 113)
    } else if rating >= 4.0 {
        RGBColor(243, 156, 18)
    } else {
        RGBColor(231, 76, 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(rating_color(4.2), RGBColor(46, 204, 113));
        assert_eq!(rating_color(4.19), RGBColor(243, 156, 18));
        assert_eq!(rating_color(4.0), RGBColor(243, 156, 18));
        assert_eq!(rating_color(3.99), RGBColor(231, 76, 60));
    }

    #[test]
    fn test_every_category_has_a_distinct_color() {
        let colors: Vec<RGBColor> = Category::ALL.iter().map(|c| category_color(*c)).collect();
        for (i, a) in colors.iter().enumerate() {
            assert!(colors[i + 1..].iter().all(|b| b != a));
        }
    }
}
