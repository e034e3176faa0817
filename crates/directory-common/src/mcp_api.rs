use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{Category, Councillor, SearchResult, Summary};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchCouncillorsParams {
    /// Case-insensitive substring of the councillor's name. Empty lists everyone.
    #[serde(default)]
    pub query: String,
    /// Maximum number of councillors to return (default: 50, max: 200).
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCouncillorParams {
    /// Exact display name, e.g. "Jane Doe".
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CouncillorSummary {
    pub name: String,
    pub total_results: u64,
    pub controversy_count: u64,
    pub has_social_media: bool,
    /// Only categories with at least one result.
    pub categories: Vec<CategoryCount>,
}

impl From<&Councillor> for CouncillorSummary {
    fn from(councillor: &Councillor) -> Self {
        let data = &councillor.data;
        Self {
            name: councillor.name.clone(),
            total_results: data.summary.total_results,
            controversy_count: data.summary.controversy_count,
            has_social_media: data.summary.has_social_media,
            categories: data
                .categories
                .iter()
                .filter(|(_, results)| !results.is_empty())
                .map(|(category, results)| CategoryCount {
                    category,
                    count: results.len(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchCouncillorsResponse {
    /// Number of councillors matching before `limit` was applied.
    pub total_matches: usize,
    pub councillors: Vec<CouncillorSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategorySection {
    pub category: Category,
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CouncillorDetailResponse {
    pub name: String,
    pub summary: Summary,
    /// All four categories in fixed order.
    pub categories: Vec<CategorySection>,
}

impl From<&Councillor> for CouncillorDetailResponse {
    fn from(councillor: &Councillor) -> Self {
        Self {
            name: councillor.name.clone(),
            summary: councillor.data.summary.clone(),
            categories: councillor
                .data
                .categories
                .iter()
                .map(|(category, results)| CategorySection {
                    category,
                    results: results.to_vec(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DirectoryInfoResponse {
    pub councillor_count: usize,
    pub category_totals: Vec<CategoryCount>,
    /// Hex SHA-256 of the loaded results document.
    pub fingerprint: String,
}
