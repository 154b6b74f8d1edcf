//! Data model for the two store slots.

pub mod claim;
pub mod user;

pub use claim::{
    ClaimDocument, ClaimSummary, Insured, LineOfBusiness, LossEntry, LossSummary, LossTotals,
};
pub use user::{Address, Company, Geo, UserRecord};
