//! Plain-text quote summaries.

use print_pricing::{
    MemoBreakdown, MemoConfiguration, ProductGroup, VisitingCardBreakdown,
    VisitingCardConfiguration,
};
use std::fmt;

pub struct VisitingCardQuote<'a> {
    config: &'a VisitingCardConfiguration,
    breakdown: &'a VisitingCardBreakdown,
}

impl<'a> VisitingCardQuote<'a> {
    pub fn new(config: &'a VisitingCardConfiguration, breakdown: &'a VisitingCardBreakdown) -> Self {
        Self { config, breakdown }
    }
}

impl fmt::Display for VisitingCardQuote<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (config, b) = (self.config, self.breakdown);

        writeln!(f, "Visiting Card Quote")?;
        writeln!(
            f,
            "Detailed calculation for {} visiting cards",
            config.total_quantity
        )?;
        writeln!(
            f,
            "  {} on {} ({}\" × {}\" sheet, {}\" × {}\" card)",
            config.side_selection.name(),
            config.paper_type,
            config.sheet_width,
            config.sheet_height,
            config.card_width,
            config.card_height
        )?;
        writeln!(f)?;

        writeln!(f, "Sheet Calculation:")?;
        writeln!(f, "  Required sheets: {} sheets", b.sheets_required)?;
        writeln!(
            f,
            "  Wastage sheets ({} colors): +{} sheets",
            config.colors, b.wastage_sheets
        )?;
        writeln!(f, "  Total sheets: {} sheets", b.total_sheets)?;
        writeln!(f, "  Total sheet cost: {} BDT", b.sheet_cost)?;
        writeln!(f)?;

        writeln!(f, "Costs:")?;
        writeln!(f, "  Design fee: {} BDT", config.design_fee)?;
        writeln!(f, "  Plate cost ({} colors): {} BDT", config.colors, b.plate_cost)?;
        writeln!(f, "  Printing cost: {} BDT", b.printing_cost)?;
        if config.matt_lamination {
            writeln!(f, "  Matt lamination: {:.2} BDT", b.matt_cost)?;
        }
        if config.spot_uv {
            writeln!(f, "  Spot UV: {:.2} BDT", b.spot_cost)?;
            writeln!(f, "  Film cost: {} BDT", b.film_cost)?;
        }
        writeln!(
            f,
            "  Cutting cost ({}): {} BDT",
            config.cutting_type.name(),
            b.cutting_cost
        )?;
        writeln!(f, "  Packaging cost: {} BDT", b.packaging_cost)?;
        writeln!(f)?;

        writeln!(f, "Total production cost: {:.2} BDT", b.total_production_cost)?;
        writeln!(f, "Profit margin: {}%", config.profit_margin)?;
        writeln!(f, "Final price: {:.2} BDT", b.final_price)?;
        writeln!(f, "Price per card: {}", per_unit(b.price_per_unit(), "BDT"))
    }
}

pub struct MemoQuote<'a> {
    config: &'a MemoConfiguration,
    breakdown: &'a MemoBreakdown,
}

impl<'a> MemoQuote<'a> {
    pub fn new(config: &'a MemoConfiguration, breakdown: &'a MemoBreakdown) -> Self {
        Self { config, breakdown }
    }
}

impl fmt::Display for MemoQuote<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (config, b) = (self.config, self.breakdown);
        let (sheet_w, sheet_h) = print_pricing::constants::MEMO_PARENT_SHEET_IN;
        let (memo_w, memo_h) = config.memo_size.dimensions_in();

        writeln!(f, "Offset Memo Quote")?;
        writeln!(
            f,
            "Detailed calculation for {} offset memos",
            config.total_order
        )?;
        writeln!(
            f,
            "  {} paper, {} inch × {} inch sheet",
            config.paper_gsm, sheet_w, sheet_h
        )?;
        writeln!(f)?;

        writeln!(f, "Sheet Calculation:")?;
        writeln!(f, "  Memo size: {} × {} inch", memo_w, memo_h)?;
        writeln!(f, "  Pieces per sheet: {} pieces", b.pieces_per_sheet)?;
        writeln!(f, "  Total sheets needed: {} sheets", b.total_sheets)?;
        writeln!(f, "  Sheet cost: {} TK", b.sheet_cost)?;
        writeln!(f)?;

        writeln!(f, "Costs:")?;
        writeln!(f, "  Design price: {} TK", config.design_price)?;
        writeln!(
            f,
            "  Plate cost ({} colors): {} TK",
            config.total_colors, b.plate_cost
        )?;
        writeln!(f, "  Printing cost: {} TK", b.printing_cost)?;
        writeln!(
            f,
            "  Binding cost ({}): {} TK",
            config.binding_type.name(),
            b.binding_cost
        )?;
        writeln!(f, "  Packaging cost: {} TK", b.packaging_cost)?;
        writeln!(f)?;

        writeln!(f, "Total cost: {:.2} TK", b.total_cost)?;
        writeln!(f, "Profit margin: {}%", config.profit_margin)?;
        writeln!(f, "Final price: {:.2} TK", b.final_price)?;
        writeln!(f, "Price per memo: {}", per_unit(b.price_per_unit(), "TK"))
    }
}

/// The shop menu, grouped
pub struct Catalog;

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in ProductGroup::ALL {
            writeln!(f, "{}", group.name())?;
            for product in group.products() {
                let status = if product.is_available() {
                    ""
                } else {
                    " (coming soon)"
                };
                writeln!(f, "  {:<14} {}{}", product.id(), product.title(), status)?;
            }
        }
        Ok(())
    }
}

fn per_unit(price: print_pricing::Result<f64>, currency: &str) -> String {
    match price {
        Ok(p) => format!("{:.2} {}", p, currency),
        Err(_) => "n/a (quantity is 0)".to_string(),
    }
}
