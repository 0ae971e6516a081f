//! The human-readable analysis report.
//!
//! [`ConsoleReport`] borrows a finished [`CatalogAnalysis`] and renders it
//! through `Display`. Every number it prints comes from the analysis; the
//! report itself computes nothing except formatting.

use super::format::{fixed, inr, percent, thousands};
use crate::analysis::{CatalogAnalysis, Describe};
use crate::model::StockStatus;
use chrono::NaiveDate;
use std::fmt::{self, Display, Formatter};

const RULE_WIDTH: usize = 80;

pub struct ConsoleReport<'a> {
    analysis: &'a CatalogAnalysis,
    generated_on: NaiveDate,
    critical_preview: usize,
}

impl<'a> ConsoleReport<'a> {
    pub fn new(analysis: &'a CatalogAnalysis, generated_on: NaiveDate, critical_preview: usize) -> Self {
        Self {
            analysis,
            generated_on,
            critical_preview,
        }
    }

    fn banner(f: &mut Formatter<'_>, title: &str) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "{title}")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f)
    }

    fn describe(f: &mut Formatter<'_>, stats: &Describe) -> fmt::Result {
        writeln!(f, "  count  {:>12}", stats.count)?;
        for (label, value) in [
            ("mean", stats.mean),
            ("std", stats.std),
            ("min", stats.min),
            ("25%", stats.q25),
            ("50%", stats.median),
            ("75%", stats.q75),
            ("max", stats.max),
        ] {
            writeln!(f, "  {label:<6} {:>12}", fixed(value, 2))?;
        }
        Ok(())
    }

    fn overview(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let overview = &self.analysis.overview;
        Self::banner(f, "SECTION 1: DATASET OVERVIEW")?;
        writeln!(f, "Total Products: {}", overview.product_count)?;
        writeln!(f, "Categories: {}", overview.category_count)?;
        match (overview.first_added, overview.last_added) {
            (Some(first), Some(last)) => writeln!(f, "Date Range: {first} to {last}")?,
            _ => writeln!(f, "Date Range: n/a")?,
        }
        writeln!(f)?;
        writeln!(f, "Price Statistics (INR):")?;
        Self::describe(f, &overview.price)?;
        writeln!(f)?;
        writeln!(f, "Sales Performance (Last 30 Days):")?;
        Self::describe(f, &overview.units_sold)
    }

    fn categories(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let analysis = self.analysis;
        Self::banner(f, "SECTION 2: CATEGORY PERFORMANCE ANALYSIS")?;
        writeln!(f, "Category Performance (Last 30 Days):")?;
        writeln!(
            f,
            "{:<14}{:>10}{:>16}{:>12}{:>12}{:>10}{:>10}",
            "Category", "Products", "Revenue", "Units", "Avg Price", "Rating", "Share"
        )?;
        for row in &analysis.categories {
            writeln!(
                f,
                "{:<14}{:>10}{:>16}{:>12}{:>12}{:>10}{:>10}",
                row.category.as_str(),
                row.product_count,
                inr(row.total_revenue),
                thousands(row.total_units as f64),
                inr(row.avg_price),
                fixed(row.avg_rating, 2),
                percent(row.revenue_share_pct, 2),
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Key Insights:")?;
        if let Some(top) = analysis.categories.first() {
            writeln!(
                f,
                "• Top Revenue Category: {} ({} - {} of total)",
                top.category,
                inr(top.total_revenue),
                percent(top.revenue_share_pct, 1)
            )?;
        }
        let summary = &analysis.summary;
        if let Some(row) = summary
            .highest_rated_category
            .and_then(|c| analysis.categories.iter().find(|r| r.category == c))
        {
            writeln!(
                f,
                "• Highest Rated Category: {} ({}/5.0)",
                row.category,
                fixed(row.avg_rating, 2)
            )?;
        }
        if let Some(row) = summary
            .premium_category
            .and_then(|c| analysis.categories.iter().find(|r| r.category == c))
        {
            writeln!(
                f,
                "• Premium Category (Highest Avg Price): {} ({})",
                row.category,
                inr(row.avg_price)
            )?;
        }
        Ok(())
    }

    fn top_sellers(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Self::banner(f, "SECTION 3: BEST-SELLING PRODUCTS BY CATEGORY")?;
        for group in &self.analysis.top_sellers {
            writeln!(
                f,
                "{} - Top {} Best Sellers:",
                group.category.as_str().to_uppercase(),
                group.products.len()
            )?;
            writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
            for product in &group.products {
                writeln!(f, "{}: {}", product.id, product.name)?;
                writeln!(f, "  • Sub-Category: {}", product.sub_category)?;
                writeln!(f, "  • Price: {}", inr(product.price))?;
                writeln!(f, "  • Units Sold (30 days): {}", product.units_sold)?;
                writeln!(f, "  • Revenue (30 days): {}", inr(product.revenue))?;
                writeln!(
                    f,
                    "  • Rating: {}/5.0 ({} reviews)",
                    fixed(product.rating, 2),
                    product.num_reviews
                )?;
                writeln!(f, "  • Stock: {}", product.stock_status)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn price_bands(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let analysis = self.analysis;
        Self::banner(f, "SECTION 4: PRICE DISTRIBUTION ANALYSIS")?;
        writeln!(f, "Price Band Performance:")?;
        writeln!(
            f,
            "{:<20}{:>10}{:>12}{:>16}{:>18}",
            "Band", "Products", "Units", "Revenue", "Revenue/Product"
        )?;
        for row in &analysis.price_bands {
            writeln!(
                f,
                "{:<20}{:>10}{:>12}{:>16}{:>18}",
                row.band.label(),
                row.product_count,
                thousands(row.units_sold as f64),
                inr(row.revenue),
                inr(row.revenue_per_product),
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Key Insights:")?;
        let summary = &analysis.summary;
        if let Some(row) = summary
            .highest_volume_band
            .and_then(|b| analysis.price_bands.iter().find(|r| r.band == b))
        {
            writeln!(f, "• Highest Volume: {} ({} units)", row.band, row.units_sold)?;
        }
        if let Some(row) = summary
            .highest_revenue_band
            .and_then(|b| analysis.price_bands.iter().find(|r| r.band == b))
        {
            writeln!(f, "• Highest Revenue: {} ({})", row.band, inr(row.revenue))?;
        }
        Ok(())
    }

    fn stock(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let analysis = self.analysis;
        Self::banner(f, "SECTION 5: INVENTORY & STOCK ANALYSIS")?;
        writeln!(f, "Stock Status by Category:")?;
        writeln!(
            f,
            "{:<14}{:>10}{:>11}{:>14}{:>8}{:>16}",
            "Category", "In Stock", "Low Stock", "Out of Stock", "Total", "Out of Stock %"
        )?;
        for row in &analysis.stock.by_category {
            writeln!(
                f,
                "{:<14}{:>10}{:>11}{:>14}{:>8}{:>16}",
                row.category.as_str(),
                row.count(StockStatus::InStock),
                row.count(StockStatus::LowStock),
                row.count(StockStatus::OutOfStock),
                row.total,
                percent(row.out_of_stock_pct, 2),
            )?;
        }

        if !analysis.critical.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "CRITICAL: {} Best-Selling Products Out of Stock!",
                analysis.critical.len()
            )?;
            writeln!(f, "These represent lost revenue opportunities:")?;
            writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
            for entry in analysis.critical.iter().take(self.critical_preview) {
                let product = &entry.product;
                writeln!(f, "• {}: {}", product.id, product.name)?;
                writeln!(f, "  Category: {} > {}", product.category, product.sub_category)?;
                writeln!(
                    f,
                    "  Estimated Lost Revenue (if in stock): {}/month",
                    inr(entry.estimated_lost_revenue)
                )?;
            }
        }
        Ok(())
    }

    fn ratings(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let analysis = self.analysis;
        Self::banner(f, "SECTION 6: CUSTOMER SATISFACTION ANALYSIS")?;
        writeln!(f, "Customer Ratings by Category:")?;
        writeln!(
            f,
            "{:<14}{:>12}{:>12}{:>12}{:>15}",
            "Category", "Avg Rating", "Min Rating", "Max Rating", "Total Reviews"
        )?;
        for row in &analysis.ratings {
            writeln!(
                f,
                "{:<14}{:>12}{:>12}{:>12}{:>15}",
                row.category.as_str(),
                fixed(row.avg_rating, 2),
                fixed(row.min_rating, 2),
                fixed(row.max_rating, 2),
                row.total_reviews,
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Top {} Highest Rated Products:", analysis.top_rated.len())?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for product in &analysis.top_rated {
            writeln!(f, "• {} ({})", product.name, product.category)?;
            writeln!(
                f,
                "  Rating: {}/5.0 ({} reviews) | Price: {}",
                fixed(product.rating, 2),
                product.num_reviews,
                inr(product.price)
            )?;
        }
        Ok(())
    }

    fn executive_summary(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let summary = &self.analysis.summary;
        let name = |c: Option<crate::model::Category>| {
            c.map(|c| c.to_string()).unwrap_or_else(|| "n/a".to_string())
        };
        let band = |b: Option<crate::analysis::PriceBand>| {
            b.map(|b| b.to_string()).unwrap_or_else(|| "n/a".to_string())
        };

        Self::banner(f, "EXECUTIVE SUMMARY & RECOMMENDATIONS")?;
        writeln!(f, "KEY METRICS:")?;
        writeln!(f, "• Total Products Analyzed: {}", summary.product_count)?;
        writeln!(f, "• Total Revenue (30 days): {}", inr(summary.total_revenue))?;
        writeln!(
            f,
            "• Total Units Sold (30 days): {}",
            thousands(summary.total_units as f64)
        )?;
        writeln!(f, "• Average Order Value: {}", inr(summary.avg_order_value))?;
        writeln!(
            f,
            "• Overall Customer Rating: {}/5.0",
            fixed(summary.overall_rating, 2)
        )?;
        writeln!(f)?;

        writeln!(f, "TOP PERFORMERS:")?;
        writeln!(f, "• Best Revenue Category: {}", name(summary.top_revenue_category))?;
        writeln!(f, "• Best Rated Category: {}", name(summary.highest_rated_category))?;
        writeln!(f, "• Most Reviewed Category: {}", name(summary.most_reviewed_category))?;
        writeln!(f)?;

        writeln!(f, "STRATEGIC RECOMMENDATIONS:")?;
        writeln!(f)?;
        writeln!(f, "1. INVENTORY OPTIMIZATION:")?;
        writeln!(
            f,
            "   • Restock {} out-of-stock bestsellers immediately",
            summary.critical_count
        )?;
        writeln!(
            f,
            "   • Focus on {} category (highest revenue)",
            name(summary.top_revenue_category)
        )?;
        writeln!(f)?;

        writeln!(f, "2. PRICING STRATEGY:")?;
        writeln!(
            f,
            "   • {} generates highest revenue",
            band(summary.highest_revenue_band)
        )?;
        writeln!(f, "   • Consider expanding product range in this price segment")?;
        writeln!(f)?;

        writeln!(f, "3. CATEGORY EXPANSION:")?;
        let lowest = summary.lowest_revenue_category.and_then(|c| {
            self.analysis
                .categories
                .iter()
                .find(|r| r.category == c)
        });
        if let Some(row) = lowest {
            writeln!(
                f,
                "   • {} has growth potential (currently {} products)",
                row.category, row.product_count
            )?;
        }
        writeln!(
            f,
            "   • Consider adding premium/bestselling items to underperforming categories"
        )?;
        writeln!(f)?;

        writeln!(f, "4. CUSTOMER SATISFACTION:")?;
        writeln!(
            f,
            "   • {} highly-rated products have low sales",
            summary.opportunity_count
        )?;
        writeln!(f, "   • Opportunity for better marketing/promotion")?;
        writeln!(f)?;

        writeln!(f, "5. QUICK WINS:")?;
        writeln!(
            f,
            "   • Promote bestsellers in {} category",
            name(summary.top_revenue_category)
        )?;
        writeln!(f, "   • Bundle high-rated slow-movers with bestsellers")?;
        writeln!(f, "   • Run targeted campaigns for price-sensitive customer segment")
    }
}

impl Display for ConsoleReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "THE SHOP INDIA - E-COMMERCE PRODUCT ANALYTICS")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "Analysis Date: {}", self.generated_on.format("%B %d, %Y"))?;

        self.overview(f)?;
        self.categories(f)?;
        self.top_sellers(f)?;
        self.price_bands(f)?;
        self.stock(f)?;
        self.ratings(f)?;
        self.executive_summary(f)?;

        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "Analysis Complete!")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::small_catalog;
    use crate::config::AnalysisConfig;
    use crate::model::Catalog;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let analysis = CatalogAnalysis::from_catalog(&small_catalog(), &AnalysisConfig::default());
        let text = ConsoleReport::new(&analysis, date(), 5).to_string();

        let headings = [
            "SECTION 1: DATASET OVERVIEW",
            "SECTION 2: CATEGORY PERFORMANCE ANALYSIS",
            "SECTION 3: BEST-SELLING PRODUCTS BY CATEGORY",
            "SECTION 4: PRICE DISTRIBUTION ANALYSIS",
            "SECTION 5: INVENTORY & STOCK ANALYSIS",
            "SECTION 6: CUSTOMER SATISFACTION ANALYSIS",
            "EXECUTIVE SUMMARY & RECOMMENDATIONS",
        ];
        let positions: Vec<usize> = headings
            .iter()
            .map(|h| text.find(h).unwrap_or_else(|| panic!("missing {h}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("Analysis Date: February 14, 2026"));
    }

    #[test]
    fn test_report_values_match_analysis() {
        let analysis = CatalogAnalysis::from_catalog(&small_catalog(), &AnalysisConfig::default());
        let text = ConsoleReport::new(&analysis, date(), 5).to_string();

        assert!(text.contains("CRITICAL: 1 Best-Selling Products Out of Stock!"));
        assert!(text.contains("Estimated Lost Revenue (if in stock): ₹160,000/month"));
        assert!(text.contains("• Top Revenue Category: Bedroom"));
        assert!(text.contains("2 highly-rated products have low sales"));
    }

    #[test]
    fn test_product_ratings_use_two_decimals() {
        let analysis = CatalogAnalysis::from_catalog(&small_catalog(), &AnalysisConfig::default());
        let text = ConsoleReport::new(&analysis, date(), 5).to_string();

        assert!(text.contains("  • Rating: 4.60/5.0 (16 reviews)"));
        assert!(text.contains("  Rating: 4.90/5.0 (24 reviews) | Price: ₹6,000"));
        assert!(!text.contains("Rating: 4.6/"));
    }

    #[test]
    fn test_empty_catalog_renders_not_available() {
        let analysis = CatalogAnalysis::from_catalog(&Catalog::default(), &AnalysisConfig::default());
        let text = ConsoleReport::new(&analysis, date(), 5).to_string();
        assert!(text.contains("Date Range: n/a"));
        assert!(text.contains("• Average Order Value: n/a"));
        assert!(!text.contains("CRITICAL"));
    }
}
