use crate::types::*;

/// Add a percentage profit margin on top of a production cost
#[inline]
pub fn apply_margin(cost: f64, profit_margin: f64) -> f64 {
    cost + (cost * profit_margin) / 100.0
}

/// Split a quoted price over the ordered units.
///
/// Zero units is rejected rather than dividing into infinity.
pub fn price_per_unit(final_price: f64, units: u32) -> Result<f64> {
    if units == 0 {
        return Err(PricingError::InvalidConfiguration(
            "Cannot price per unit for a quantity of 0".to_string(),
        ));
    }
    Ok(final_price / f64::from(units))
}
