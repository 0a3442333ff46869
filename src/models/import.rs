use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ImportRequest {
    #[serde(rename = "csvData", default)]
    pub csv_data: Option<String>,
}

/// Aggregate outcome of one import call.
///
/// `inserted` counts the rows of every batch the store accepted, duplicates
/// skipped by the upsert included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ImportSummary {
    pub parsed: usize,
    pub inserted: usize,
    pub errors: usize,
    pub skipped: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ImportResponse {
    pub success: bool,
    #[serde(flatten)]
    pub summary: ImportSummary,
}

impl From<ImportSummary> for ImportResponse {
    fn from(summary: ImportSummary) -> Self {
        Self {
            success: true,
            summary,
        }
    }
}
