use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of a visiting card print job
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisitingCardConfiguration {
    pub side_selection: SideSelection,
    pub design_fee: f64,

    // Paper specifications (informational, not priced)
    pub paper_type: String,
    pub sheet_width: f64,
    pub sheet_height: f64,
    pub card_width: f64,
    pub card_height: f64,

    // Quantity & colors
    pub total_quantity: u32,
    pub colors: u8,

    // Finishing
    pub matt_lamination: bool,
    pub spot_uv: bool,
    pub cutting_type: CuttingType,

    /// Markup over production cost, in percent
    pub profit_margin: f64,
}

impl Default for VisitingCardConfiguration {
    fn default() -> Self {
        Self {
            side_selection: SideSelection::Single,
            design_fee: 0.0,
            paper_type: "Art Card".to_string(),
            sheet_width: 28.0,
            sheet_height: 22.0,
            card_width: 3.5,
            card_height: 2.0,
            total_quantity: 1000,
            colors: 1,
            matt_lamination: false,
            spot_uv: false,
            cutting_type: CuttingType::Regular,
            profit_margin: 0.0,
        }
    }
}

impl VisitingCardConfiguration {
    /// Load a job from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        crate::job_file::load(path).await
    }

    /// Save the job to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        crate::job_file::save(self, path).await
    }

    /// Check the job against what the shop can actually produce.
    ///
    /// Pricing never calls this: `compute_visiting_card` accepts any input
    /// and falls back to zero wastage for unsupported color counts.
    pub fn validate(&self) -> Result<()> {
        if self.total_quantity == 0 {
            return Err(PricingError::InvalidConfiguration(
                "Total quantity must be at least 1".to_string(),
            ));
        }

        validate_colors(self.colors)?;
        validate_amount("Design fee", self.design_fee)?;
        validate_amount("Profit margin", self.profit_margin)?;

        Ok(())
    }
}

/// Parameters of an offset memo print job
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MemoConfiguration {
    pub design_price: f64,

    // Paper specifications
    /// Informational, not priced
    pub paper_gsm: String,
    pub memo_size: MemoSize,
    pub per_sheet_price: f64,

    pub total_order: u32,
    pub total_colors: u8,

    // Binding
    pub binding_type: BindingType,
    /// Pad binding rate per 100 memos
    pub pad_binding_rate: f64,
    /// Memo binding rate per 100 memos
    pub memo_binding_rate: f64,

    /// Markup over production cost, in percent
    pub profit_margin: f64,
}

impl Default for MemoConfiguration {
    fn default() -> Self {
        Self {
            design_price: 0.0,
            paper_gsm: "80gsm".to_string(),
            memo_size: MemoSize::Large,
            per_sheet_price: 7.0,
            total_order: 1000,
            total_colors: 1,
            binding_type: BindingType::Pad,
            pad_binding_rate: 15.0,
            memo_binding_rate: 50.0,
            profit_margin: 0.0,
        }
    }
}

impl MemoConfiguration {
    /// Load a job from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        crate::job_file::load(path).await
    }

    /// Save the job to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        crate::job_file::save(self, path).await
    }

    /// Binding rate for the selected binding type
    pub fn binding_rate(&self) -> f64 {
        match self.binding_type {
            BindingType::Pad => self.pad_binding_rate,
            BindingType::Memo => self.memo_binding_rate,
        }
    }

    /// Check the job against what the shop can actually produce.
    /// Pricing never calls this.
    pub fn validate(&self) -> Result<()> {
        if self.total_order == 0 {
            return Err(PricingError::InvalidConfiguration(
                "Total order must be at least 1".to_string(),
            ));
        }

        validate_colors(self.total_colors)?;
        validate_amount("Design price", self.design_price)?;
        validate_amount("Per sheet price", self.per_sheet_price)?;
        validate_amount("Pad binding rate", self.pad_binding_rate)?;
        validate_amount("Memo binding rate", self.memo_binding_rate)?;
        validate_amount("Profit margin", self.profit_margin)?;

        Ok(())
    }
}

fn validate_colors(colors: u8) -> Result<()> {
    if !(1..=4).contains(&colors) {
        return Err(PricingError::InvalidConfiguration(format!(
            "Colors must be between 1 and 4, got {}",
            colors
        )));
    }
    Ok(())
}

fn validate_amount(label: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PricingError::InvalidConfiguration(format!(
            "{} must be a non-negative number, got {}",
            label, value
        )));
    }
    Ok(())
}
