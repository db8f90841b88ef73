use super::*;

// =============================================================
// Helpers
// =============================================================

fn wheat_form() -> CropForm {
    CropForm {
        name: "Wheat".to_owned(),
        bag: "50".to_owned(),
        qty: "100".to_owned(),
        base_price: "20.5".to_owned(),
        trigger_price: "18".to_owned(),
        datetime: "2024-05-01T10:00".to_owned(),
        seller_id: "S1".to_owned(),
    }
}

fn wheat_crop() -> Crop {
    Crop {
        id: "c-1".to_owned(),
        name: "Wheat".to_owned(),
        bag: Some(50.0),
        qty: Some(100),
        base_price: Some(20.5),
        trigger_price: Some(18.0),
        created_at: Some("2024-05-01T10:00:00.000Z".to_owned()),
        seller_id: Some("S1".to_owned()),
    }
}

// =============================================================
// Payload construction
// =============================================================

#[test]
fn to_payload_builds_typed_body() {
    let payload = wheat_form().to_payload().unwrap();
    assert_eq!(
        payload,
        CropPayload {
            name: "Wheat".to_owned(),
            bag: 50.0,
            qty: 100,
            base_price: 20.5,
            trigger_price: 18.0,
            created_at: "2024-05-01T10:00:00.000Z".to_owned(),
            seller_id: "S1".to_owned(),
        }
    );
}

#[test]
fn to_payload_serializes_to_expected_json() {
    let value = serde_json::to_value(wheat_form().to_payload().unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Wheat",
            "bag": 50.0,
            "qty": 100,
            "base_price": 20.5,
            "trigger_price": 18.0,
            "created_at": "2024-05-01T10:00:00.000Z",
            "seller_id": "S1"
        })
    );
}

#[test]
fn to_payload_trims_text_fields() {
    let mut form = wheat_form();
    form.name = "  Basmati Rice ".to_owned();
    form.seller_id = " S9 ".to_owned();
    form.bag = " 12 ".to_owned();
    let payload = form.to_payload().unwrap();
    assert_eq!(payload.name, "Basmati Rice");
    assert_eq!(payload.seller_id, "S9");
    assert_eq!(payload.bag, 12.0);
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn every_blank_field_fails_required_check() {
    for field in CropField::ALL {
        let mut form = wheat_form();
        form.set(field, String::new());
        assert_eq!(
            form.to_payload(),
            Err(ValidationError::MissingFields(vec![field])),
            "blank {field:?} should be reported"
        );
    }
}

#[test]
fn whitespace_only_counts_as_blank() {
    let mut form = wheat_form();
    form.name = "   ".to_owned();
    assert_eq!(form.missing_fields(), vec![CropField::Name]);
}

#[test]
fn empty_form_lists_all_fields_in_order() {
    let form = CropForm::default();
    assert_eq!(form.missing_fields(), CropField::ALL.to_vec());
    let err = form.to_payload().unwrap_err();
    assert_eq!(err.to_string(), "All fields are required.");
}

#[test]
fn required_check_runs_before_parsing() {
    let mut form = wheat_form();
    form.bag = "abc".to_owned();
    form.name = String::new();
    assert_eq!(
        form.to_payload(),
        Err(ValidationError::MissingFields(vec![CropField::Name]))
    );
}

// =============================================================
// Numeric parsing
// =============================================================

#[test]
fn non_numeric_price_is_rejected() {
    let mut form = wheat_form();
    form.base_price = "twenty".to_owned();
    assert_eq!(
        form.to_payload(),
        Err(ValidationError::InvalidNumber {
            field: CropField::BasePrice,
            value: "twenty".to_owned(),
        })
    );
}

#[test]
fn nan_and_infinity_are_rejected() {
    let mut form = wheat_form();
    form.bag = "NaN".to_owned();
    assert!(matches!(
        form.to_payload(),
        Err(ValidationError::InvalidNumber {
            field: CropField::Bag,
            ..
        })
    ));

    form.bag = "50".to_owned();
    form.trigger_price = "inf".to_owned();
    assert!(matches!(
        form.to_payload(),
        Err(ValidationError::InvalidNumber {
            field: CropField::TriggerPrice,
            ..
        })
    ));
}

#[test]
fn fractional_quantity_is_rejected() {
    let mut form = wheat_form();
    form.qty = "100.5".to_owned();
    let err = form.to_payload().unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidInteger {
            field: CropField::Qty,
            value: "100.5".to_owned(),
        }
    );
    assert_eq!(err.to_string(), "Quantity must be a whole number, got \"100.5\"");
}

// =============================================================
// Timestamps
// =============================================================

#[test]
fn normalize_timestamp_accepts_datetime_local() {
    assert_eq!(
        normalize_timestamp("2024-05-01T10:00").unwrap(),
        "2024-05-01T10:00:00.000Z"
    );
    assert_eq!(
        normalize_timestamp("2024-05-01T10:00:30").unwrap(),
        "2024-05-01T10:00:30.000Z"
    );
    assert_eq!(
        normalize_timestamp("2024-05-01T10:00:30.25").unwrap(),
        "2024-05-01T10:00:30.250Z"
    );
}

#[test]
fn normalize_timestamp_converts_offsets_to_utc() {
    assert_eq!(
        normalize_timestamp("2024-05-01T15:30:00+05:30").unwrap(),
        "2024-05-01T10:00:00.000Z"
    );
}

#[test]
fn normalize_timestamp_rejects_garbage() {
    assert_eq!(
        normalize_timestamp("yesterday"),
        Err(ValidationError::InvalidDatetime("yesterday".to_owned()))
    );
    assert!(normalize_timestamp("2024-13-01T10:00").is_err());
}

// =============================================================
// Copying from a record
// =============================================================

#[test]
fn from_crop_copies_raw_values() {
    let form = CropForm::from_crop(&wheat_crop());
    assert_eq!(form.name, "Wheat");
    assert_eq!(form.bag, "50");
    assert_eq!(form.qty, "100");
    assert_eq!(form.base_price, "20.5");
    assert_eq!(form.trigger_price, "18");
    assert_eq!(form.seller_id, "S1");
}

#[test]
fn from_crop_truncates_timestamp_to_minutes() {
    let form = CropForm::from_crop(&wheat_crop());
    assert_eq!(form.datetime, "2024-05-01T10:00");
}

#[test]
fn from_crop_converts_offset_timestamp_to_utc() {
    let mut crop = wheat_crop();
    crop.created_at = Some("2024-05-01T10:00:00+05:30".to_owned());
    let form = CropForm::from_crop(&crop);
    assert_eq!(form.datetime, "2024-05-01T04:30");
}

#[test]
fn unchanged_offset_timestamp_keeps_its_instant_on_resave() {
    let mut crop = wheat_crop();
    crop.created_at = Some("2024-05-01T10:00:00+05:30".to_owned());
    let payload = CropForm::from_crop(&crop).to_payload().unwrap();
    assert_eq!(payload.created_at, "2024-05-01T04:30:00.000Z");
}

#[test]
fn from_crop_cuts_unparseable_timestamp() {
    let mut crop = wheat_crop();
    crop.created_at = Some("2024-05-01 10:00:00 local".to_owned());
    assert_eq!(CropForm::from_crop(&crop).datetime, "2024-05-01 10:00");
}

#[test]
fn from_crop_keeps_precision() {
    let mut crop = wheat_crop();
    crop.base_price = Some(20.125);
    crop.trigger_price = Some(0.1);
    let form = CropForm::from_crop(&crop);
    assert_eq!(form.base_price, "20.125");
    assert_eq!(form.trigger_price, "0.1");
}

#[test]
fn from_crop_leaves_missing_values_blank() {
    let crop = Crop {
        id: "c-2".to_owned(),
        name: String::new(),
        bag: None,
        qty: None,
        base_price: None,
        trigger_price: None,
        created_at: None,
        seller_id: None,
    };
    assert_eq!(CropForm::from_crop(&crop), CropForm::default());
}

#[test]
fn copied_record_round_trips_to_same_payload() {
    let payload = CropForm::from_crop(&wheat_crop()).to_payload().unwrap();
    assert_eq!(payload, wheat_form().to_payload().unwrap());
}

// =============================================================
// Field metadata
// =============================================================

#[test]
fn field_accessors_cover_every_field() {
    let mut form = CropForm::default();
    for (i, field) in CropField::ALL.into_iter().enumerate() {
        form.set(field, format!("v{i}"));
    }
    for (i, field) in CropField::ALL.into_iter().enumerate() {
        assert_eq!(form.get(field), format!("v{i}"));
    }
}

#[test]
fn input_types_match_field_kind() {
    assert_eq!(CropField::Name.input_type(), "text");
    assert_eq!(CropField::Qty.input_type(), "number");
    assert_eq!(CropField::Datetime.input_type(), "datetime-local");
    assert_eq!(CropField::SellerId.input_id(), "sellerId");
}
