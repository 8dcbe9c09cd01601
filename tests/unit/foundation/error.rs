use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PanoError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(PanoError::font("x").to_string().contains("font error:"));
    assert!(PanoError::render("x").to_string().contains("render error:"));
    assert!(PanoError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PanoError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn missing_config_file_keeps_io_context() {
    let path = std::path::Path::new("/definitely/not/here/pano.json");
    let err = crate::config::PlaceholderConfig::from_json_file(path).unwrap_err();
    assert!(matches!(err, PanoError::Other(_)));
    let PanoError::Other(inner) = &err else {
        unreachable!();
    };
    assert!(format!("{inner:#}").contains("read config '/definitely/not/here/pano.json'"));
    assert!(inner.chain().any(|e| e.downcast_ref::<std::io::Error>().is_some()));
}

#[test]
fn bad_sizes_surface_as_validation() {
    let err = crate::foundation::core::Canvas::new(0, 10).unwrap_err();
    assert!(matches!(err, PanoError::Validation(ref m) if m.contains("width")));
}
