use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LayoutError::shape_mismatch("x")
            .to_string()
            .contains("shape mismatch:")
    );
    assert!(
        LayoutError::unsatisfiable("x")
            .to_string()
            .contains("unsatisfiable constraint:")
    );
    assert!(
        LayoutError::invalid_curve_window("x")
            .to_string()
            .contains("invalid curve window:")
    );
    assert!(
        LayoutError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LayoutError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
