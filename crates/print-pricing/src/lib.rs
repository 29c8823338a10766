mod catalog;
pub mod constants;
#[cfg(feature = "serde")]
mod job_file;
mod offset_memo;
mod options;
mod quote;
mod types;
mod visiting_card;

pub use catalog::{Product, ProductGroup};
pub use offset_memo::{MemoBreakdown, compute_offset_memo};
pub use options::*;
pub use quote::{apply_margin, price_per_unit};
pub use types::*;
pub use visiting_card::{VisitingCardBreakdown, compute_visiting_card, cutting_rate, wastage_sheets};
