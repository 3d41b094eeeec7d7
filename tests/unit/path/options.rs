use super::*;

#[test]
fn defaults_match_documented_values() {
    let opts = DrawOptions::default();
    assert_eq!(opts.delay, 0.0);
    assert_eq!(opts.duration, 800.0);
    assert_eq!(opts.easing, "linear");
    assert!(opts.from.is_empty());
    assert!(opts.to.is_empty());
    assert!(opts.step.is_none());
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let opts = DrawOptions::from_json(
        r#"{"duration": 1200, "easing": "easeOut", "from": {"x": 0}, "to": {"x": 10}}"#,
    )
    .unwrap();
    assert_eq!(opts.duration, 1200.0);
    assert_eq!(opts.delay, 0.0);
    assert_eq!(opts.easing, "easeOut");
    assert_eq!(opts.to.number("x"), Some(10.0));
}

#[test]
fn json_rejects_wrong_types() {
    let err = DrawOptions::from_json(r#"{"duration": "slow"}"#).unwrap_err();
    assert!(matches!(err, DrawError::Serde(_)));
}

#[test]
fn per_call_fields_win_over_defaults() {
    let defaults = DrawOptions {
        delay: 10.0,
        duration: 500.0,
        easing: "easeIn".to_string(),
        ..DrawOptions::default()
    };
    let merged = AnimateOptions::new()
        .duration(100.0)
        .easing("easeOutQuad")
        .merged_over(&defaults);
    assert_eq!(merged.delay, 10.0);
    assert_eq!(merged.duration, 100.0);
    assert_eq!(merged.easing, "easeOutQuad");
}

#[test]
fn explicit_values_need_both_ends() {
    let only_from = AnimateOptions::new().from(ValueTree::new().with("x", 1.0));
    assert!(only_from.explicit_values().is_none());

    let both = only_from.to(ValueTree::new().with("x", 2.0));
    let (from, to) = both.explicit_values().unwrap();
    assert_eq!(from.number("x"), Some(1.0));
    assert_eq!(to.number("x"), Some(2.0));
}

#[test]
fn reference_prefers_shape() {
    let shape = Opaque::new("circle");
    let id = ControllerId(7);
    match Reference::resolve(Some(&shape), id) {
        Reference::Shape(s) => assert_eq!(s.downcast_ref::<&str>(), Some(&"circle")),
        Reference::Controller(_) => panic!("expected shape reference"),
    }
    assert!(matches!(
        Reference::resolve(None, id),
        Reference::Controller(ControllerId(7))
    ));
}

#[test]
fn controller_ids_are_unique() {
    let a = ControllerId::next();
    let b = ControllerId::next();
    assert_ne!(a, b);
}

#[test]
fn reentrant_step_fails_instead_of_panicking() {
    let slot: Rc<RefCell<Option<Step>>> = Rc::new(RefCell::new(None));
    let inner = slot.clone();
    let step = Step::new(move |values, reference, attachment| {
        let again = inner.borrow().clone();
        match again {
            Some(s) => s.call(values, reference, attachment),
            None => Ok(()),
        }
    });
    *slot.borrow_mut() = Some(step.clone());

    let err = step
        .call(&ValueTree::new(), Reference::Controller(ControllerId(1)), None)
        .unwrap_err();
    assert!(err.to_string().contains("re-entered"));

    slot.borrow_mut().take();
    assert!(
        step.call(&ValueTree::new(), Reference::Controller(ControllerId(1)), None)
            .is_ok()
    );
}
