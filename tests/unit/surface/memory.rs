use super::*;

fn surface_with_two_items() -> (MemorySurface, ElementId, ElementId, ElementId) {
    let mut s = MemorySurface::new();
    let c = s.add_container("gallery", 800.0);
    let a = s.add_item(c, "a", IntrinsicHeight::Fixed(120.0)).unwrap();
    let b = s
        .add_item(
            c,
            "b",
            IntrinsicHeight::Aspect {
                ratio: 2.0,
                extra_px: 10.0,
            },
        )
        .unwrap();
    (s, c, a, b)
}

#[test]
fn query_accepts_bare_and_hash_selectors() {
    let (s, c, _, _) = surface_with_two_items();
    assert_eq!(s.query_container("gallery"), Some(c));
    assert_eq!(s.query_container("#gallery"), Some(c));
    assert_eq!(s.query_container("#missing"), None);
}

#[test]
fn percent_width_resolves_against_parent() {
    let (mut s, c, a, b) = surface_with_two_items();
    assert_eq!(s.children(c).unwrap(), vec![a, b]);
    assert_eq!(s.client_width(a).unwrap(), 800.0);

    s.apply(b, StyleDecl::Width(Length::Percent(25.0))).unwrap();
    assert_eq!(s.client_width(b).unwrap(), 200.0);
    assert_eq!(s.client_height(b).unwrap(), 110.0);

    s.set_container_width(c, 400.0).unwrap();
    assert_eq!(s.client_width(b).unwrap(), 100.0);
    assert_eq!(s.client_height(b).unwrap(), 60.0);
    assert_eq!(s.client_height(a).unwrap(), 120.0);
}

#[test]
fn declared_height_overrides_intrinsic() {
    let (mut s, c, _, _) = surface_with_two_items();
    assert_eq!(s.client_height(c).unwrap(), 0.0);
    s.apply(c, StyleDecl::Height(Length::Px(340.0))).unwrap();
    assert_eq!(s.client_height(c).unwrap(), 340.0);
    assert_eq!(s.style(c).unwrap().height, Some(Length::Px(340.0)));
}

#[test]
fn detached_items_cannot_be_measured() {
    let (mut s, _, a, _) = surface_with_two_items();
    s.detach(a).unwrap();
    let err = s.client_height(a).unwrap_err();
    assert!(err.is_measurement());
    s.apply(a, StyleDecl::Top(Length::Px(5.0))).unwrap();
}

#[test]
fn only_containers_take_host_widths() {
    let (mut s, _, a, _) = surface_with_two_items();
    assert!(s.set_container_width(a, 10.0).is_err());
    assert!(s.set_container_width(ElementId(99), 10.0).is_err());
}
