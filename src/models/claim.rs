// ClaimDocument - insurance claim summary held in the claim slot
//
// The serialized keys mirror the extraction payload this document stands in
// for, including the human-readable section names ("Document type",
// "Losses 2022"). Monetary amounts are opaque formatted strings; totals are
// never recomputed from the individual losses.

use serde::{Deserialize, Serialize};

/// Root wrapper; the summary lives under `response_body`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimDocument {
    pub response_body: ClaimSummary,
}

/// Extracted claim summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSummary {
    /// Label describing where the summary was extracted from
    #[serde(rename = "Document type")]
    pub document_type: String,
    #[serde(rename = "Insured")]
    pub insured: Insured,
    #[serde(rename = "Line of business")]
    pub line_of_business: LineOfBusiness,
    /// Loss run for the reporting year
    #[serde(rename = "Losses 2022")]
    pub losses: LossSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insured {
    pub name: String,
    pub policy_no: String,
    pub insured_no: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineOfBusiness {
    pub line_of_business: String,
}

/// Aggregate totals plus the individual losses, in authored order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LossSummary {
    pub totals: LossTotals,
    pub losses: Vec<LossEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LossTotals {
    pub total_incurred: String,
    pub total_paid: String,
}

/// One claimant's loss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LossEntry {
    pub claimant_name: String,
    /// Date as authored, e.g. "2022-12-31"; not parsed
    pub loss_date: String,
    pub total_incurred: String,
    pub total_paid: String,
}

impl ClaimDocument {
    /// Shorthand for the loss run inside the summary
    pub fn loss_summary(&self) -> &LossSummary {
        &self.response_body.losses
    }

    pub fn loss_summary_mut(&mut self) -> &mut LossSummary {
        &mut self.response_body.losses
    }
}
