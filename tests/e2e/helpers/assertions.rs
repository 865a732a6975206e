use serde_json::Value;

/// Ids of the `items` array, in response order
pub fn item_ids(body: &Value) -> Vec<String> {
    body.get("items")
        .and_then(|v| v.as_array())
        .expect("Missing items array")
        .iter()
        .map(|item| {
            item.get("id")
                .and_then(|v| v.as_str())
                .expect("Item without id")
                .to_string()
        })
        .collect()
}

/// Find an item by id in the `items` array
pub fn find_item<'a>(body: &'a Value, id: &str) -> &'a Value {
    body.get("items")
        .and_then(|v| v.as_array())
        .and_then(|items| {
            items
                .iter()
                .find(|item| item.get("id").and_then(|v| v.as_str()) == Some(id))
        })
        .unwrap_or_else(|| panic!("Item '{}' not in response", id))
}

pub fn assert_content_item(item: &Value) {
    for field in ["id", "title", "category", "published_at", "type"] {
        assert!(
            item.get(field).and_then(|v| v.as_str()).is_some(),
            "Missing '{}' in content item {}",
            field,
            item
        );
    }
    assert!(item.get("is_favorite").and_then(|v| v.as_bool()).is_some());
    assert!(item.get("is_read").and_then(|v| v.as_bool()).is_some());
}

pub fn assert_trending_item(item: &Value) {
    let change = item
        .get("change")
        .and_then(|v| v.as_i64())
        .expect("Missing change");
    assert!((1..=99).contains(&change), "change out of range: {}", change);

    let trend = item.get("trend").and_then(|v| v.as_str());
    assert!(
        matches!(trend, Some("up" | "down" | "stable")),
        "Unexpected trend {:?}",
        trend
    );
    assert!(item.get("title").and_then(|v| v.as_str()).is_some());
    assert!(item.get("category").and_then(|v| v.as_str()).is_some());
    assert!(item.get("period").and_then(|v| v.as_str()).is_some());
}
