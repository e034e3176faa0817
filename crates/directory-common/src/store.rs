/// In-memory councillor store.
///
/// Built once from the results JSON (the bundled copy or a file supplied at startup) and
/// never mutated afterwards. Records keep the key order of the source document, which is
/// the order every listing uses.
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::CommonError;
use crate::model::{Category, Councillor, CouncillorData};

/// Results file compiled into every binary.
pub const BUNDLED_DATA: &[u8] = include_bytes!("../../../data/councillor_results.json");

const BUNDLED_ORIGIN: &str = "bundled councillor_results.json";

pub struct Store {
    councillors: Vec<Councillor>,
    index: HashMap<String, usize>,
    fingerprint: String,
}

/// Per-category result totals across the whole store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    pub councillors: usize,
    pub category_totals: Vec<(Category, usize)>,
}

impl Store {
    pub fn bundled() -> Result<Self, CommonError> {
        Self::from_slice(BUNDLED_DATA, BUNDLED_ORIGIN)
    }

    pub fn load(path: &Path) -> Result<Self, CommonError> {
        let bytes = std::fs::read(path).map_err(|source| CommonError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_slice(&bytes, &path.display().to_string())
    }

    /// Decode a results document. `origin` names the source in errors and logs.
    pub fn from_slice(bytes: &[u8], origin: &str) -> Result<Self, CommonError> {
        let OrderedRecords { councillors, index } =
            serde_json::from_slice(bytes).map_err(|source| CommonError::Decode {
                origin: origin.to_string(),
                source,
            })?;

        let store = Self {
            councillors,
            index,
            fingerprint: fingerprint(bytes),
        };
        info!(
            origin,
            councillors = store.len(),
            fingerprint = %store.fingerprint,
            "councillor store loaded"
        );
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.councillors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.councillors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Councillor> {
        self.councillors.iter()
    }

    /// Councillors whose name contains `query`, ignoring case, in store order.
    /// An empty query matches everyone.
    pub fn filter<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Councillor> + 'a {
        let needle = query.to_lowercase();
        self.councillors
            .iter()
            .filter(move |c| c.name.to_lowercase().contains(&needle))
    }

    /// Exact-key lookup.
    pub fn get(&self, name: &str) -> Option<&Councillor> {
        let found = self.index.get(name).map(|&i| &self.councillors[i]);
        debug!(name, found = found.is_some(), "councillor lookup");
        found
    }

    /// Hex SHA-256 of the raw document the store was built from.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn stats(&self) -> StoreStats {
        let category_totals = Category::ALL
            .into_iter()
            .map(|category| {
                let total = self
                    .councillors
                    .iter()
                    .map(|c| c.data.categories.count(category))
                    .sum();
                (category, total)
            })
            .collect();
        StoreStats {
            councillors: self.len(),
            category_totals,
        }
    }
}

fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Top-level object decoded as an ordered list plus its name index. A repeated key
/// replaces the earlier record in place.
struct OrderedRecords {
    councillors: Vec<Councillor>,
    index: HashMap<String, usize>,
}

impl<'de> Deserialize<'de> for OrderedRecords {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedRecordsVisitor)
    }
}

struct OrderedRecordsVisitor;

impl<'de> Visitor<'de> for OrderedRecordsVisitor {
    type Value = OrderedRecords;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping councillor names to result records")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let capacity = map.size_hint().unwrap_or(0);
        let mut councillors: Vec<Councillor> = Vec::with_capacity(capacity);
        let mut index: HashMap<String, usize> = HashMap::with_capacity(capacity);
        while let Some((name, data)) = map.next_entry::<String, CouncillorData>()? {
            match index.get(&name).copied() {
                Some(i) => councillors[i].data = data,
                None => {
                    index.insert(name.clone(), councillors.len());
                    councillors.push(Councillor { name, data });
                }
            }
        }
        Ok(OrderedRecords { councillors, index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Jane Doe": {
            "categories": {
                "basic_info": [],
                "social_media": [],
                "business_interests": [],
                "controversy": [
                    {"title": "X", "link": "http://x", "snippet": "s", "search_time": "1s", "relevance_score": 0.8}
                ]
            },
            "summary": {"total_results": 1, "potential_interests": [], "controversy_count": 1, "has_social_media": false}
        },
        "Alan Janeway": {
            "categories": {"basic_info": [], "social_media": [], "business_interests": [], "controversy": []},
            "summary": {"total_results": 0, "potential_interests": [], "controversy_count": 0, "has_social_media": false}
        },
        "Bob Smith": {
            "categories": {
                "basic_info": [],
                "social_media": [{"platform": "facebook", "url": "https://facebook.com/bob", "title": "Cllr Bob", "confidence_score": 1.5}],
                "business_interests": [
                    {"title": "Director", "link": "https://example.org/a", "snippet": "company director", "relevance_score": 1.2},
                    {"title": "Consultant", "link": "https://example.org/b", "snippet": "consultant", "relevance_score": 1.0}
                ],
                "controversy": []
            },
            "summary": {"total_results": 3, "potential_interests": ["Director"], "controversy_count": 0, "has_social_media": true}
        }
    }"#;

    fn sample() -> Store {
        Store::from_slice(SAMPLE.as_bytes(), "test").unwrap()
    }

    fn names<'a>(it: impl Iterator<Item = &'a Councillor>) -> Vec<&'a str> {
        it.map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn keeps_source_order() {
        let store = sample();
        assert_eq!(store.len(), 3);
        assert_eq!(names(store.iter()), ["Jane Doe", "Alan Janeway", "Bob Smith"]);
    }

    #[test]
    fn empty_query_matches_everyone() {
        let store = sample();
        assert_eq!(names(store.filter("")), names(store.iter()));
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let store = sample();
        assert_eq!(names(store.filter("jane")), ["Jane Doe", "Alan Janeway"]);
        assert_eq!(names(store.filter("SMITH")), ["Bob Smith"]);
        assert_eq!(names(store.filter("e D")), ["Jane Doe"]);
        assert!(store.filter("zzz").next().is_none());
    }

    #[test]
    fn filter_does_not_trim() {
        let store = sample();
        assert_eq!(names(store.filter(" smith")), ["Bob Smith"]);
        assert!(store.filter("smith ").next().is_none());
    }

    #[test]
    fn lookup_is_exact() {
        let store = sample();
        let jane = store.get("Jane Doe").unwrap();
        assert_eq!(jane.data.summary.controversy_count, 1);
        assert!(store.get("jane doe").is_none());
        assert!(store.get("Jane").is_none());
        assert!(store.get("Nobody").is_none());
    }

    #[test]
    fn repeated_key_replaces_in_place() {
        let json = r#"{
            "A": {"summary": {"total_results": 1, "controversy_count": 0, "has_social_media": false}},
            "B": {"summary": {"total_results": 2, "controversy_count": 0, "has_social_media": false}},
            "A": {"summary": {"total_results": 9, "controversy_count": 0, "has_social_media": false}}
        }"#;
        let store = Store::from_slice(json.as_bytes(), "test").unwrap();
        assert_eq!(names(store.iter()), ["A", "B"]);
        assert_eq!(store.get("A").unwrap().data.summary.total_results, 9);
        assert_eq!(store.get("B").unwrap().data.summary.total_results, 2);
    }

    #[test]
    fn index_covers_every_record() {
        let json = (0..500)
            .map(|i| {
                format!(
                    r#""Councillor {i}": {{"summary": {{"total_results": {i}, "controversy_count": 0, "has_social_media": false}}}}"#
                )
            })
            .collect::<Vec<_>>()
            .join(",");
        let store = Store::from_slice(format!("{{{json}}}").as_bytes(), "generated").unwrap();
        assert_eq!(store.len(), 500);
        for (i, councillor) in store.iter().enumerate() {
            assert_eq!(councillor.name, format!("Councillor {i}"));
            let found = store.get(&councillor.name).unwrap();
            assert_eq!(found.data.summary.total_results, i as u64);
        }
    }

    #[test]
    fn stats_sum_category_lengths() {
        let stats = sample().stats();
        assert_eq!(stats.councillors, 3);
        assert_eq!(
            stats.category_totals,
            vec![
                (Category::BasicInfo, 0),
                (Category::SocialMedia, 1),
                (Category::BusinessInterests, 2),
                (Category::Controversy, 1),
            ]
        );
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = sample();
        let b = Store::from_slice(b"{}", "empty").unwrap();
        assert_eq!(a.fingerprint().len(), 64);
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert!(b.is_empty());
    }

    #[test]
    fn rejects_non_object_documents() {
        let err = Store::from_slice(b"[]", "list.json").err().unwrap();
        assert!(matches!(err, CommonError::Decode { .. }));
        assert!(err.to_string().contains("list.json"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Store::load(Path::new("/nonexistent/councillor_results.json"))
            .err()
            .unwrap();
        assert!(matches!(err, CommonError::Io { .. }));
    }

    #[test]
    fn bundled_data_decodes() {
        let store = Store::bundled().unwrap();
        assert!(!store.is_empty());
    }
}
