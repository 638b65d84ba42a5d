use listings_core::{normalize, ListingRecord, RawItem, SearchPage, PLACEHOLDER_IMAGE};
use pretty_assertions::assert_eq;
use serde_json::json;

fn raw(value: serde_json::Value) -> RawItem {
    serde_json::from_value(value).unwrap()
}

#[test]
fn builds_absolute_image_url_from_first_photo() {
    let item = raw(json!({
        "Manufacturer": "Hyundai",
        "Model": "Sonata",
        "FormYear": "2019",
        "Mileage": 42000.0,
        "Price": 1850.0,
        "Photos": [
            { "location": "/carpicture01/pic1.jpg" },
            { "location": "/carpicture01/pic2.jpg" }
        ],
        "Ignored": true
    }));

    let record = normalize(item, "ci.example.com");
    assert_eq!(
        record,
        ListingRecord {
            brand: Some(json!("Hyundai")),
            model: Some(json!("Sonata")),
            year: Some(json!("2019")),
            mileage: Some(json!(42000.0)),
            price: Some(json!(1850.0)),
            image: "https://ci.example.com/carpicture01/pic1.jpg".to_string(),
        }
    );
}

#[test]
fn missing_fields_become_null_and_image_falls_back_to_placeholder() {
    let record = normalize(raw(json!({})), "ci.example.com");
    assert_eq!(record.brand, None);
    assert_eq!(record.price, None);
    assert_eq!(record.image, PLACEHOLDER_IMAGE);

    let serialized = serde_json::to_value(&record).unwrap();
    assert_eq!(serialized["brand"], serde_json::Value::Null);
    assert_eq!(serialized["image"], json!("/placeholder.png"));
}

#[test]
fn unusable_photo_entries_use_placeholder() {
    for photos in [
        json!([]),
        json!(null),
        json!([{}]),
        json!([{ "location": "" }]),
        json!([{ "location": 12 }]),
        json!("not-a-list"),
    ] {
        let record = normalize(raw(json!({ "Photos": photos })), "ci.example.com");
        assert_eq!(record.image, PLACEHOLDER_IMAGE, "photos: {photos}");
    }
}

#[test]
fn search_page_without_results_is_empty() {
    let page: SearchPage = serde_json::from_value(json!({ "Count": 0 })).unwrap();
    assert!(page.into_items().is_empty());

    let page: SearchPage = serde_json::from_value(json!({ "SearchResults": null })).unwrap();
    assert!(page.into_items().is_empty());

    let page: SearchPage =
        serde_json::from_value(json!({ "SearchResults": [{ "Model": "K5" }, {}] })).unwrap();
    assert_eq!(page.into_items().len(), 2);
}
