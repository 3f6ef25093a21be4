use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MasonryError::not_found("#gallery")
            .to_string()
            .contains("not found:")
    );
    assert!(
        MasonryError::measurement("x")
            .to_string()
            .contains("measurement unavailable:")
    );
    assert!(
        MasonryError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        MasonryError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MasonryError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn only_measurement_errors_are_skippable() {
    assert!(MasonryError::measurement("item 3").is_measurement());
    assert!(!MasonryError::not_found("item 3").is_measurement());
    assert!(!MasonryError::validation("x").is_measurement());
}
