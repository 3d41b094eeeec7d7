use super::*;

const SQUARE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
  <path id="square" d="M10,10 L60,10 L60,60 L10,60 Z" fill="none" stroke="black"/>
  <rect id="box" x="0" y="0" width="10" height="10" fill="red"/>
</svg>"#;

#[test]
fn straight_line_length() {
    let path = StrokePath::from_path_data("M0,0 L200,0").unwrap();
    assert!((path.total_length() - 200.0).abs() < 1e-9);
}

#[test]
fn closed_path_includes_closing_segment() {
    let path = StrokePath::from_path_data("M0,0 L30,0 L30,40 Z").unwrap();
    assert!((path.total_length() - 120.0).abs() < 1e-9);
}

#[test]
fn invalid_path_data_is_a_binding_error() {
    assert!(matches!(
        StrokePath::from_path_data("M0,0 Lnope"),
        Err(DrawError::Binding(_))
    ));
    assert!(matches!(
        StrokePath::from_path_data("   "),
        Err(DrawError::Binding(_))
    ));
}

#[test]
fn svg_document_lookup_by_id() {
    let path = StrokePath::from_svg_document(SQUARE_SVG.as_bytes(), "#square").unwrap();
    assert!((path.total_length() - 200.0).abs() < 1e-3);
}

#[test]
fn svg_document_lookup_failures() {
    assert!(matches!(
        StrokePath::from_svg_document(SQUARE_SVG.as_bytes(), "missing"),
        Err(DrawError::Binding(_))
    ));
    assert!(matches!(
        StrokePath::from_svg_document(b"not svg", "square"),
        Err(DrawError::Binding(_))
    ));
}

#[test]
fn clones_share_style_state() {
    let mut a = StrokePath::from_path_data("M0,0 L10,0").unwrap();
    let mut b = a.clone();
    a.set_dash_offset(4.0);
    assert_eq!(b.computed_dash_offset(), 4.0);
    b.set_dash_array(10.0, 10.0);
    b.force_layout();
    let style = a.style();
    assert_eq!(style.dash_array, Some((10.0, 10.0)));
    assert_eq!(style.layout_passes, 1);
}
