use crate::constants::*;
use crate::options::MemoConfiguration;
use crate::quote::{apply_margin, price_per_unit};
use crate::types::*;

/// Itemized cost of an offset memo job
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MemoBreakdown {
    /// Memos ordered, carried over for per-unit pricing
    pub units: u32,

    pub pieces_per_sheet: u32,
    pub total_sheets: u32,

    pub sheet_cost: f64,
    pub plate_cost: f64,
    pub printing_cost: f64,
    pub binding_cost: f64,
    pub packaging_cost: f64,

    pub total_cost: f64,
    pub final_price: f64,
}

impl MemoBreakdown {
    /// Final price divided over the memos ordered
    pub fn price_per_unit(&self) -> Result<f64> {
        price_per_unit(self.final_price, self.units)
    }
}

/// Price an offset memo job.
///
/// Pure and infallible: any configuration yields a breakdown.
pub fn compute_offset_memo(config: &MemoConfiguration) -> MemoBreakdown {
    let pieces_per_sheet = config.memo_size.pieces_per_sheet();
    let total_sheets = ceil_div(config.total_order, pieces_per_sheet);
    let sheet_cost = f64::from(total_sheets) * config.per_sheet_price;

    let colors = f64::from(config.total_colors);
    let plate_cost = colors * PLATE_RATE_PER_COLOR;
    let printing_cost = colors * PRINTING_RATE_PER_COLOR;

    let binding_lots = ceil_div(config.total_order, BINDING_LOT);
    let binding_cost = f64::from(binding_lots) * config.binding_rate();

    // Flat per job, unlike visiting cards
    let packaging_cost = MEMO_PACKAGING_COST;

    let total_cost = config.design_price
        + sheet_cost
        + plate_cost
        + printing_cost
        + binding_cost
        + packaging_cost;

    let final_price = apply_margin(total_cost, config.profit_margin);

    log::debug!(
        "Offset memo: {} memos on {} sheets, cost {:.2}, final {:.2}",
        config.total_order,
        total_sheets,
        total_cost,
        final_price
    );

    MemoBreakdown {
        units: config.total_order,
        pieces_per_sheet,
        total_sheets,
        sheet_cost,
        plate_cost,
        printing_cost,
        binding_cost,
        packaging_cost,
        total_cost,
        final_price,
    }
}
