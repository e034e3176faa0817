use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// One discovered item for a councillor.
///
/// The producer writes `social_media` entries as `{platform, url, title, confidence_score}`,
/// so `url` and `confidence_score` are accepted as aliases and every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "url")]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub search_time: Option<String>,
    #[serde(default, alias = "confidence_score")]
    pub relevance_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// The four fixed result buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BasicInfo,
    SocialMedia,
    BusinessInterests,
    Controversy,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::BasicInfo,
        Category::SocialMedia,
        Category::BusinessInterests,
        Category::Controversy,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::BasicInfo => "basic_info",
            Category::SocialMedia => "social_media",
            Category::BusinessInterests => "business_interests",
            Category::Controversy => "controversy",
        }
    }

    /// Human-readable label: the key with underscores as spaces.
    pub fn label(self) -> &'static str {
        match self {
            Category::BasicInfo => "basic info",
            Category::SocialMedia => "social media",
            Category::BusinessInterests => "business interests",
            Category::Controversy => "controversy",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::BasicInfo => "ℹ️",
            Category::SocialMedia => "🌐",
            Category::BusinessInterests => "💼",
            Category::Controversy => "⚠️",
        }
    }

    /// Identity categories are summarised in the detail header and never
    /// rendered as expandable sections.
    pub fn is_identity(self) -> bool {
        matches!(self, Category::BasicInfo | Category::SocialMedia)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryResults {
    #[serde(default)]
    pub basic_info: Vec<SearchResult>,
    #[serde(default)]
    pub social_media: Vec<SearchResult>,
    #[serde(default)]
    pub business_interests: Vec<SearchResult>,
    #[serde(default)]
    pub controversy: Vec<SearchResult>,
}

impl CategoryResults {
    pub fn get(&self, category: Category) -> &[SearchResult] {
        match category {
            Category::BasicInfo => &self.basic_info,
            Category::SocialMedia => &self.social_media,
            Category::BusinessInterests => &self.business_interests,
            Category::Controversy => &self.controversy,
        }
    }

    /// All buckets in fixed order, paired with their category.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[SearchResult])> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn count(&self, category: Category) -> usize {
        self.get(category).len()
    }
}

/// Precomputed aggregate written by the producer. Displayed as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Summary {
    pub total_results: u64,
    #[serde(default)]
    pub potential_interests: Vec<String>,
    pub controversy_count: u64,
    pub has_social_media: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CouncillorData {
    #[serde(default)]
    pub categories: CategoryResults,
    pub summary: Summary,
}

/// A named record as held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Councillor {
    pub name: String,
    pub data: CouncillorData,
}
