use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn aliases_resolve_to_cubic_curves() {
    assert_eq!(resolve_easing("easeIn"), "easeInCubic");
    assert_eq!(resolve_easing("easeOut"), "easeOutCubic");
    assert_eq!(resolve_easing("easeInOut"), "easeInOutCubic");
}

#[test]
fn unknown_names_pass_through() {
    assert_eq!(resolve_easing("bounce"), "bounce");
    assert_eq!(resolve_easing("easeInQuad"), "easeInQuad");
}

#[test]
fn names_round_trip_through_lookup() {
    for ease in Ease::ALL {
        assert_eq!(Ease::from_name(ease.name()), Some(ease));
    }
    assert_eq!(Ease::from_name("easeIn"), None);
}

#[test]
fn resolve_accepts_aliases_and_rejects_unknown_curves() {
    assert_eq!(Ease::resolve("easeInOut").unwrap(), Ease::InOutCubic);
    assert_eq!(Ease::resolve("linear").unwrap(), Ease::Linear);
    let err = Ease::resolve("bounce").unwrap_err();
    assert!(matches!(err, DrawError::UnknownEasing(ref name) if name == "bounce"));
}

#[test]
fn linear_extrapolates_outside_unit_range() {
    assert_eq!(Ease::Linear.apply(1.5), 1.5);
    assert_eq!(Ease::Linear.apply(-0.25), -0.25);
    assert_eq!(Ease::InCubic.apply(2.0), 8.0);
}
