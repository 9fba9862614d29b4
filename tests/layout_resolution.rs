//! Integration tests for widget geometry resolution.
//!
//! Exercises the resolver through its public API the way a script walker
//! drives it: one element at a time, geometry strings in arbitrary order.

use presentation_loader::layout::{
    Bounds, Element, Field, LayoutError, LayoutSession, Placement, ScreenExtent,
};

fn hd() -> LayoutSession {
    LayoutSession::new(ScreenExtent::new(1920, 1080))
}

fn small() -> LayoutSession {
    LayoutSession::new(ScreenExtent::new(800, 600))
}

/// Session with `A` registered at left 50, width 100
fn session_with_anchor() -> LayoutSession {
    let mut session = small();
    let mut a = Element::new();
    a.resolve_left("50", &session).unwrap();
    a.resolve_width("100", &session).unwrap();
    a.resolve_height("20", &session).unwrap();
    session.register("A", &a).unwrap();
    session
}

#[test]
fn test_integer_widths_round_trip() {
    let session = hd();
    for n in [1, 7, 100, 1920, 5000, -30] {
        let mut element = Element::new();
        element.resolve_width(&n.to_string(), &session).unwrap();
        assert_eq!(element.width(), n);
    }
}

#[test]
fn test_zero_width_is_invalid_dimension() {
    let session = hd();
    let mut element = Element::new();
    let err = element.resolve_width("0", &session).unwrap_err();
    assert!(matches!(
        err,
        LayoutError::InvalidDimension {
            field: Field::Width,
            ..
        }
    ));
}

#[test]
fn test_full_width() {
    let session = hd();
    let mut element = Element::new();
    element.resolve_width("full", &session).unwrap();
    assert_eq!(element.width(), 1920);

    element.resolve_width("full-100", &session).unwrap();
    assert_eq!(element.width(), 1820);
}

#[test]
fn test_full_height() {
    let session = hd();
    let mut element = Element::new();
    element.resolve_height("full-80", &session).unwrap();
    assert_eq!(element.height(), 1000);
}

#[test]
fn test_right_of_reference_ignores_own_width() {
    let session = session_with_anchor();

    let mut before = Element::new();
    before.resolve_left("right#A", &session).unwrap();
    assert_eq!(before.left(), 150);
    assert!(!before.left_placement().is_pending());

    let mut after = Element::new();
    after.resolve_width("300", &session).unwrap();
    after.resolve_left("right#A", &session).unwrap();
    assert_eq!(after.left(), 150);
}

#[test]
fn test_left_of_reference() {
    let session = session_with_anchor();
    let mut element = Element::new();
    element.resolve_left("left#A", &session).unwrap();
    assert_eq!(element.left(), -50);
}

#[test]
fn test_deferred_right_fires_on_width() {
    let session = small();
    let mut element = Element::new();
    element.resolve_left("right", &session).unwrap();
    assert_eq!(element.left_placement(), &Placement::Pending("right".to_string()));

    element.resolve_width("200", &session).unwrap();
    assert_eq!(element.left(), 600);
    assert_eq!(element.left_placement(), &Placement::Resolved);
}

#[test]
fn test_center() {
    let session = small();
    let mut element = Element::new();
    element.resolve_width("200", &session).unwrap();
    element.resolve_left("center", &session).unwrap();
    assert_eq!(element.left(), 300);
}

#[test]
fn test_unknown_reference_is_named_error() {
    let session = small();
    let mut element = Element::new();
    let err = element.resolve_left("left#missing", &session).unwrap_err();
    assert_eq!(
        err,
        LayoutError::UnknownReference {
            field: Field::Left,
            value: "left#missing".to_string(),
            name: "missing".to_string(),
        }
    );
}

#[test]
fn test_registry_last_writer_wins() {
    let mut session = small();

    let mut first = Element::new();
    first.resolve_left("0", &session).unwrap();
    first.resolve_width("10", &session).unwrap();
    session.register("dup", &first).unwrap();

    let mut second = Element::new();
    second.resolve_left("500", &session).unwrap();
    second.resolve_width("20", &session).unwrap();
    session.register("dup", &second).unwrap();

    let mut element = Element::new();
    element.resolve_left("right#dup", &session).unwrap();
    assert_eq!(element.left(), 520);
}

#[test]
fn test_sessions_are_isolated() {
    let mut first = small();
    let mut a = Element::new();
    a.resolve_width("10", &first).unwrap();
    first.register("A", &a).unwrap();

    let second = small();
    let mut element = Element::new();
    assert!(element.resolve_left("right#A", &second).is_err());
    assert!(element.resolve_left("right#A", &first).is_ok());
}

#[test]
fn test_reset_forgets_names() {
    let mut session = session_with_anchor();
    session.reset();
    assert!(session.registry().is_empty());
}

/// Every ordering of the four geometry setters
fn permutations(items: &[usize]) -> Vec<Vec<usize>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

fn resolve_in_order(order: &[usize], specs: [&str; 4], session: &LayoutSession) -> Bounds {
    let mut element = Element::new();
    for &step in order {
        match step {
            0 => element.resolve_width(specs[0], session).unwrap(),
            1 => element.resolve_height(specs[1], session).unwrap(),
            2 => element.resolve_left(specs[2], session).unwrap(),
            _ => element.resolve_top(specs[3], session).unwrap(),
        }
    }
    element.finish().unwrap()
}

#[test]
fn test_order_independence() {
    let session = session_with_anchor();
    let cases = [
        (["200", "100", "right", "bottom"], Bounds::new(600, 500, 200, 100)),
        (["200", "full-100", "center", "top"], Bounds::new(300, 0, 200, 500)),
        (["full", "50", "left", "25"], Bounds::new(0, 25, 800, 50)),
        (["30", "30", "right#A", "bottom"], Bounds::new(150, 570, 30, 30)),
        (["30", "30", "left#A", "10"], Bounds::new(-50, 10, 30, 30)),
    ];

    for (specs, expected) in cases {
        for order in permutations(&[0, 1, 2, 3]) {
            let bounds = resolve_in_order(&order, specs, &session);
            assert_eq!(bounds, expected, "specs {:?} in order {:?}", specs, order);
        }
    }
}
