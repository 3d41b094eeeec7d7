use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DrawError::binding("x")
            .to_string()
            .contains("binding error:")
    );
    assert!(
        DrawError::unknown_easing("bounce")
            .to_string()
            .contains("unknown easing: bounce")
    );
    assert!(
        DrawError::tween("x")
            .to_string()
            .contains("tween failure:")
    );
    assert!(
        DrawError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DrawError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_convert() {
    let err: DrawError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, DrawError::Serde(_)));
}
