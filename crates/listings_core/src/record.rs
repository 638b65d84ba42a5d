use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Image path emitted for listings without a usable photo.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";
pub const DEFAULT_IMAGE_HOST: &str = "ci.encar.com";

/// Response body of one search request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    /// Missing or `null` means the page is empty, not malformed.
    #[serde(rename = "SearchResults", default)]
    pub search_results: Option<Vec<RawItem>>,
}

impl SearchPage {
    pub fn into_items(self) -> Vec<RawItem> {
        self.search_results.unwrap_or_default()
    }
}

/// Upstream listing as returned by the search API. Only the fields the
/// normalizer reads are kept; their values are passed through untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawItem {
    pub manufacturer: Option<Value>,
    pub model: Option<Value>,
    pub form_year: Option<Value>,
    pub mileage: Option<Value>,
    pub price: Option<Value>,
    pub photos: Option<Value>,
}

impl RawItem {
    fn first_photo_location(&self) -> Option<&str> {
        self.photos
            .as_ref()?
            .get(0)?
            .get("location")?
            .as_str()
            .filter(|location| !location.is_empty())
    }
}

/// Canonical output record. Field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub brand: Option<Value>,
    pub model: Option<Value>,
    pub year: Option<Value>,
    pub mileage: Option<Value>,
    pub price: Option<Value>,
    pub image: String,
}

/// Maps one upstream item to a [`ListingRecord`]. Never fails.
pub fn normalize(raw: RawItem, image_host: &str) -> ListingRecord {
    let image = match raw.first_photo_location() {
        Some(location) => format!("https://{image_host}{location}"),
        None => PLACEHOLDER_IMAGE.to_string(),
    };

    ListingRecord {
        brand: raw.manufacturer,
        model: raw.model,
        year: raw.form_year,
        mileage: raw.mileage,
        price: raw.price,
        image,
    }
}
