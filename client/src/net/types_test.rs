use super::*;

// =============================================================
// Crop decoding
// =============================================================

#[test]
fn crop_decodes_full_record() {
    let crop: Crop = serde_json::from_value(serde_json::json!({
        "id": "c-1",
        "name": "Wheat",
        "bag": 50,
        "qty": 100,
        "base_price": 20.5,
        "trigger_price": 18,
        "created_at": "2024-05-01T10:00:00.000Z",
        "seller_id": "S1",
        "published": true
    }))
    .unwrap();

    assert_eq!(crop.id, "c-1");
    assert_eq!(crop.name, "Wheat");
    assert_eq!(crop.bag, Some(50.0));
    assert_eq!(crop.qty, Some(100));
    assert_eq!(crop.base_price, Some(20.5));
    assert_eq!(crop.trigger_price, Some(18.0));
    assert_eq!(crop.created_at.as_deref(), Some("2024-05-01T10:00:00.000Z"));
    assert_eq!(crop.seller_id.as_deref(), Some("S1"));
}

#[test]
fn crop_accepts_numeric_ids() {
    let crop: Crop = serde_json::from_value(serde_json::json!({
        "id": 42,
        "name": "Rice",
        "seller_id": 7
    }))
    .unwrap();
    assert_eq!(crop.id, "42");
    assert_eq!(crop.seller_id.as_deref(), Some("7"));
}

#[test]
fn crop_missing_fields_default_to_none() {
    let crop: Crop = serde_json::from_value(serde_json::json!({ "id": "c-2" })).unwrap();
    assert_eq!(crop.name, "");
    assert_eq!(crop.bag, None);
    assert_eq!(crop.qty, None);
    assert_eq!(crop.created_at, None);
    assert_eq!(crop.seller_id, None);
}

#[test]
fn crop_accepts_numeric_strings() {
    let crop: Crop = serde_json::from_value(serde_json::json!({
        "id": "c-3",
        "bag": "12.5",
        "qty": "30",
        "base_price": null
    }))
    .unwrap();
    assert_eq!(crop.bag, Some(12.5));
    assert_eq!(crop.qty, Some(30));
    assert_eq!(crop.base_price, None);
}

#[test]
fn malformed_numbers_decode_as_absent() {
    let crop: Crop = serde_json::from_value(serde_json::json!({
        "id": "c-4",
        "qty": 2.5,
        "bag": "a few",
        "base_price": true,
        "trigger_price": "17.5"
    }))
    .unwrap();
    assert_eq!(crop.qty, None);
    assert_eq!(crop.bag, None);
    assert_eq!(crop.base_price, None);
    assert_eq!(crop.trigger_price, Some(17.5));
}

#[test]
fn one_odd_row_keeps_the_rest_of_the_list() {
    let rows: Vec<serde_json::Value> =
        serde_json::from_str(r#"[{"id":"a","qty":100},{"id":"b","qty":2.5},{"name":"no id"},{"id":"c","bag":"x"}]"#)
            .unwrap();
    let crops = decode_crop_list(rows);
    let ids: Vec<&str> = crops.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
    assert_eq!(crops[0].qty, Some(100));
    assert_eq!(crops[1].qty, None);
    assert_eq!(crops[2].bag, None);
}

#[test]
fn crop_requires_id() {
    let result = serde_json::from_value::<Crop>(serde_json::json!({ "name": "Corn" }));
    assert!(result.is_err());
}

#[test]
fn crop_list_decodes_in_server_order() {
    let crops: Vec<Crop> = serde_json::from_str(r#"[{"id":"b"},{"id":"a"},{"id":"c"}]"#).unwrap();
    let ids: Vec<&str> = crops.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["b", "a", "c"]);
}

// =============================================================
// Payload / misc bodies
// =============================================================

#[test]
fn payload_serializes_without_id() {
    let payload = CropPayload {
        name: "Wheat".to_owned(),
        bag: 50.0,
        qty: 100,
        base_price: 20.5,
        trigger_price: 18.0,
        created_at: "2024-05-01T10:00:00.000Z".to_owned(),
        seller_id: "S1".to_owned(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert!(value.get("id").is_none());
    assert_eq!(value["qty"], serde_json::json!(100));
    assert_eq!(value["base_price"], serde_json::json!(20.5));
}

#[test]
fn error_body_reads_optional_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"crop not found"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("crop not found"));

    let empty: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.message, None);
}

#[test]
fn user_data_reads_first_name() {
    let user: UserData = serde_json::from_str(r#"{"fname":"asha","lname":"k"}"#).unwrap();
    assert_eq!(user.fname, "asha");
}
