//! Shop pricing constants
//!
//! All rates are in BDT (Bangladeshi Taka). Consumables that the operator
//! can change per job (memo sheet price, binding rates) live on the
//! configurations instead.

// =============================================================================
// Plates & Printing (shared by all offset products)
// =============================================================================

/// Plate setup charge per ink color
pub const PLATE_RATE_PER_COLOR: f64 = 120.0;

/// Press run charge per ink color
pub const PRINTING_RATE_PER_COLOR: f64 = 300.0;

// =============================================================================
// Visiting Cards
// =============================================================================

/// Cards cut from one printed sheet
pub const CARDS_PER_SHEET: u32 = 80;

/// Price of one card stock sheet
pub const CARD_SHEET_PRICE: f64 = 12.0;

/// Lamination area of one sheet in square inches (11" × 14")
pub const FINISHING_AREA_SQ_IN: f64 = 11.0 * 14.0;

/// Matt lamination rate per square inch
pub const MATT_RATE_PER_SQ_IN: f64 = 0.006;

/// Spot UV rate per square inch
pub const SPOT_UV_RATE_PER_SQ_IN: f64 = 0.007;

/// Minimum charge for a finishing run (matt or spot UV)
pub const FINISHING_MINIMUM: f64 = 300.0;

/// Flat film charge whenever spot UV is applied
pub const SPOT_UV_FILM_COST: f64 = 350.0;

/// Regular cutting rate per 1000 cards
pub const REGULAR_CUTTING_RATE: f64 = 25.0;

/// Die cutting rate per 1000 cards
pub const DYE_CUTTING_RATE: f64 = 50.0;

/// Cards per cutting lot
pub const CUTTING_LOT: f64 = 1000.0;

/// Packaging charge per 100 cards
pub const CARD_PACKAGING_RATE: f64 = 5.0;

/// Cards per packaging lot
pub const CARD_PACKAGING_LOT: f64 = 100.0;

// =============================================================================
// Offset Memos
// =============================================================================

/// Parent sheet dimensions in inches (23" × 36"), fixed for all memo jobs
pub const MEMO_PARENT_SHEET_IN: (f64, f64) = (23.0, 36.0);

/// Flat packaging charge per memo job, independent of order size
pub const MEMO_PACKAGING_COST: f64 = 50.0;

/// Memos per binding lot (binding rates are quoted per 100)
pub const BINDING_LOT: u32 = 100;
