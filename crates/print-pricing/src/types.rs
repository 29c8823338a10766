use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid job file: {0}")]
    Config(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, PricingError>;

/// Which faces of a visiting card are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SideSelection {
    #[default]
    Single,
    Both,
}

impl SideSelection {
    /// Multiplier applied to per-sheet finishing costs
    pub fn finishing_factor(self) -> f64 {
        match self {
            SideSelection::Single => 1.0,
            SideSelection::Both => 2.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SideSelection::Single => "Single Side",
            SideSelection::Both => "Both Sides",
        }
    }
}

/// Cutting method for finished cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CuttingType {
    /// Guillotine cutting
    #[default]
    Regular,
    /// Die cutting
    Dye,
}

impl CuttingType {
    pub fn name(self) -> &'static str {
        match self {
            CuttingType::Regular => "regular",
            CuttingType::Dye => "dye",
        }
    }
}

/// Finished memo sizes, cut from a fixed 23 x 36 inch parent sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MemoSize {
    /// 9 x 11.5 inch
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "9x11.5"))]
    Large,
    /// 5.75 x 9 inch
    #[cfg_attr(feature = "serde", serde(rename = "5.75x9"))]
    Small,
}

impl MemoSize {
    /// Finished dimensions in inches (width, height)
    pub fn dimensions_in(self) -> (f64, f64) {
        match self {
            MemoSize::Large => (9.0, 11.5),
            MemoSize::Small => (5.75, 9.0),
        }
    }

    /// Number of memos cut from one parent sheet
    pub fn pieces_per_sheet(self) -> u32 {
        match self {
            MemoSize::Large => 8,
            MemoSize::Small => 16,
        }
    }
}

/// Memo binding methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BindingType {
    /// Glued pad binding
    #[default]
    Pad,
    /// Memo book binding
    Memo,
}

impl BindingType {
    pub fn name(self) -> &'static str {
        match self {
            BindingType::Pad => "pad",
            BindingType::Memo => "memo",
        }
    }
}

/// Round `quantity / per_unit` up to the next whole count.
/// A zero divisor yields zero.
#[inline]
pub fn ceil_div(quantity: u32, per_unit: u32) -> u32 {
    if per_unit == 0 {
        return 0;
    }
    quantity.div_ceil(per_unit)
}
