//! Wire types for the volumes search endpoint.

use serde::{Deserialize, Serialize};

/// Body of a volumes search response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumesResponse {
    /// Total number of matches reported by the service
    #[serde(default)]
    pub total_items: u64,

    /// Matching volumes; absent when the page is empty
    #[serde(default)]
    pub items: Option<Vec<VolumeItem>>,
}

impl VolumesResponse {
    /// Build a response from a list of items.
    pub fn with_items(items: Vec<VolumeItem>) -> Self {
        Self {
            total_items: items.len() as u64,
            items: Some(items),
        }
    }

    /// Consume the response, yielding its items (empty when absent).
    pub fn into_items(self) -> Vec<VolumeItem> {
        self.items.unwrap_or_default()
    }
}

/// A single volume record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeItem {
    pub id: String,

    #[serde(default)]
    pub volume_info: VolumeInfo,
}

/// Bibliographic block of a volume record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub image_links: Option<ImageLinks>,
    pub average_rating: Option<f64>,
    pub ratings_count: Option<u32>,
    pub categories: Option<Vec<String>>,
    pub page_count: Option<u32>,
}

/// Cover image URLs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
    pub small_thumbnail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let json = r#"{
            "kind": "books#volumes",
            "totalItems": 1234,
            "items": [{
                "id": "nBuA0hmspdMC",
                "etag": "ignored",
                "volumeInfo": {
                    "title": "Dune",
                    "authors": ["Frank Herbert"],
                    "publishedDate": "1965-08-01",
                    "description": "<p>Set on the desert planet Arrakis</p>",
                    "imageLinks": {
                        "smallThumbnail": "http://books.example/small",
                        "thumbnail": "http://books.example/thumb"
                    },
                    "averageRating": 4.5,
                    "ratingsCount": 120,
                    "categories": ["Fiction"],
                    "pageCount": 896
                }
            }]
        }"#;

        let response: VolumesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_items, 1234);

        let items = response.into_items();
        assert_eq!(items.len(), 1);
        let info = &items[0].volume_info;
        assert_eq!(items[0].id, "nBuA0hmspdMC");
        assert_eq!(info.title.as_deref(), Some("Dune"));
        assert_eq!(info.page_count, Some(896));
        assert_eq!(
            info.image_links.as_ref().and_then(|l| l.thumbnail.as_deref()),
            Some("http://books.example/thumb")
        );
    }

    #[test]
    fn test_missing_items_is_empty() {
        let response: VolumesResponse =
            serde_json::from_str(r#"{"kind":"books#volumes","totalItems":0}"#).unwrap();
        assert!(response.items.is_none());
        assert!(response.into_items().is_empty());
    }

    #[test]
    fn test_sparse_volume_info() {
        let item: VolumeItem = serde_json::from_str(r#"{"id":"x","volumeInfo":{}}"#).unwrap();
        assert!(item.volume_info.title.is_none());
        assert!(item.volume_info.authors.is_none());

        let item: VolumeItem = serde_json::from_str(r#"{"id":"y"}"#).unwrap();
        assert_eq!(item.id, "y");
    }
}
