use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RevealError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        RevealError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        RevealError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        RevealError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        RevealError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn kind_predicates_match_variants() {
    assert!(RevealError::config("draw_speed").is_config());
    assert!(!RevealError::config("draw_speed").is_geometry());
    assert!(RevealError::geometry("path 0").is_geometry());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RevealError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
