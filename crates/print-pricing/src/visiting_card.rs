use crate::constants::*;
use crate::options::VisitingCardConfiguration;
use crate::quote::{apply_margin, price_per_unit};
use crate::types::*;

/// Itemized cost of a visiting card job
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VisitingCardBreakdown {
    /// Cards ordered, carried over for per-unit pricing
    pub units: u32,

    pub sheets_required: u32,
    pub wastage_sheets: u32,
    pub total_sheets: u32,

    pub sheet_cost: f64,
    /// Portion of `sheet_cost` spent on wastage sheets (not added again)
    pub wastage_cost: f64,
    pub plate_cost: f64,
    pub printing_cost: f64,
    pub matt_cost: f64,
    pub spot_cost: f64,
    pub film_cost: f64,
    pub cutting_cost: f64,
    pub packaging_cost: f64,

    pub total_production_cost: f64,
    pub final_price: f64,
}

impl VisitingCardBreakdown {
    /// Final price divided over the cards ordered
    pub fn price_per_unit(&self) -> Result<f64> {
        price_per_unit(self.final_price, self.units)
    }
}

/// Make-ready wastage sheets by ink color count.
///
/// The values are a fixed table. Color counts the press doesn't run get no
/// wastage allowance.
pub fn wastage_sheets(colors: u8) -> u32 {
    match colors {
        1 => 2,
        2 => 3,
        3 => 4,
        4 => 5,
        _ => 0,
    }
}

/// Cutting rate per 1000 cards
pub fn cutting_rate(cutting_type: CuttingType) -> f64 {
    match cutting_type {
        CuttingType::Regular => REGULAR_CUTTING_RATE,
        CuttingType::Dye => DYE_CUTTING_RATE,
    }
}

/// Price a visiting card job.
///
/// Pure and infallible: any configuration yields a breakdown.
pub fn compute_visiting_card(config: &VisitingCardConfiguration) -> VisitingCardBreakdown {
    let sheets_required = ceil_div(config.total_quantity, CARDS_PER_SHEET);
    let wastage_sheets = wastage_sheets(config.colors);
    let total_sheets = sheets_required + wastage_sheets;

    let sheet_cost = f64::from(total_sheets) * CARD_SHEET_PRICE;
    let wastage_cost = f64::from(wastage_sheets) * CARD_SHEET_PRICE;

    let colors = f64::from(config.colors);
    let plate_cost = colors * PLATE_RATE_PER_COLOR;
    let printing_cost = colors * PRINTING_RATE_PER_COLOR;

    let matt_cost = if config.matt_lamination {
        finishing_cost(MATT_RATE_PER_SQ_IN, sheets_required, config.side_selection)
    } else {
        0.0
    };

    let (spot_cost, film_cost) = if config.spot_uv {
        (
            finishing_cost(SPOT_UV_RATE_PER_SQ_IN, sheets_required, config.side_selection),
            SPOT_UV_FILM_COST,
        )
    } else {
        (0.0, 0.0)
    };

    let quantity = f64::from(config.total_quantity);
    let cutting_cost = (quantity / CUTTING_LOT) * cutting_rate(config.cutting_type);
    let packaging_cost = (quantity / CARD_PACKAGING_LOT) * CARD_PACKAGING_RATE;

    let total_production_cost = config.design_fee
        + sheet_cost
        + plate_cost
        + printing_cost
        + matt_cost
        + spot_cost
        + film_cost
        + cutting_cost
        + packaging_cost;

    let final_price = apply_margin(total_production_cost, config.profit_margin);

    log::debug!(
        "Visiting cards: {} cards on {} sheets, production {:.2}, final {:.2}",
        config.total_quantity,
        total_sheets,
        total_production_cost,
        final_price
    );

    VisitingCardBreakdown {
        units: config.total_quantity,
        sheets_required,
        wastage_sheets,
        total_sheets,
        sheet_cost,
        wastage_cost,
        plate_cost,
        printing_cost,
        matt_cost,
        spot_cost,
        film_cost,
        cutting_cost,
        packaging_cost,
        total_production_cost,
        final_price,
    }
}

// Area-priced finishing over the printed sheets (wastage excluded),
// doubled for both sides, never below the run minimum
fn finishing_cost(rate_per_sq_in: f64, sheets_required: u32, sides: SideSelection) -> f64 {
    let base = FINISHING_AREA_SQ_IN * rate_per_sq_in * f64::from(sheets_required);
    let cost = base * sides.finishing_factor();
    cost.max(FINISHING_MINIMUM)
}
