use house_price_predictor::inference::{ModelError, PriceModel};

#[test]
fn load_model_from_json_file() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let path = tmp.path().join("model.json");
    std::fs::write(
        &path,
        r#"{
            "feature_columns": ["Area", "No. of Bedrooms", "Location"],
            "intercept": 1.0,
            "area_weight": 0.1,
            "bedroom_weight": 2.0,
            "location_effects": {"Kengeri": 0.5}
        }"#,
    )
    .expect("write");

    let model = PriceModel::load(&path).expect("load");
    let input = house_price_predictor::PriceInput {
        area: 10.0,
        bedrooms: 1,
        location: "Kengeri".to_string(),
    };
    assert_eq!(model.predict(&input), 4.5);
}

#[test]
fn missing_artifact_is_an_error() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let err = PriceModel::load(tmp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ModelError::Io(_)));
}

#[test]
fn malformed_artifact_is_an_error() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let path = tmp.path().join("model.json");
    std::fs::write(&path, "not json at all").expect("write");
    assert!(matches!(
        PriceModel::load(&path).unwrap_err(),
        ModelError::Format(_)
    ));
}

#[test]
fn artifact_with_different_columns_is_rejected() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let path = tmp.path().join("model.json");
    std::fs::write(
        &path,
        r#"{
            "feature_columns": ["Area", "Bathrooms", "Location"],
            "intercept": 1.0,
            "area_weight": 0.1,
            "bedroom_weight": 2.0,
            "location_effects": {}
        }"#,
    )
    .expect("write");

    let err = PriceModel::load(&path).unwrap_err();
    assert!(matches!(err, ModelError::SchemaMismatch { .. }));
    assert!(err.to_string().contains("Bathrooms"));
}

#[test]
fn shipped_artifact_loads_and_scores_every_listed_location() {
    // The artifact committed at the repo root is the one the server boots
    // with; it must cover every location the form offers.
    let model = PriceModel::load("model.json").expect("shipped artifact");
    for location in [
        "JP Nagar Phase 1",
        "Dasarahalli on Tumkur Road",
        "Kannur on Thanisandra Main Road",
        "Doddanekundi",
        "Kengeri",
    ] {
        let input = house_price_predictor::PriceInput {
            area: 1200.0,
            bedrooms: 3,
            location: location.to_string(),
        };
        let price = model.predict(&input);
        assert!(price >= 0.0);
    }
}
