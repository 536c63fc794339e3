use super::*;

#[test]
fn nav_items_keep_fixed_order() {
    let pairs: Vec<_> = NAV_ITEMS.iter().map(|i| (i.label, i.target)).collect();
    assert_eq!(
        pairs,
        vec![
            ("Home", "hero"),
            ("About", "about"),
            ("Skills", "skills"),
            ("Projects", "projects"),
            ("Contact", "contact"),
        ]
    );
}

#[test]
fn nav_item_href_is_in_page_anchor() {
    for item in &NAV_ITEMS {
        let href = item.href();
        assert!(href.starts_with('#'));
        assert_eq!(&href[1..], item.target);
    }
}

#[test]
fn brand_links_to_hero_section() {
    assert_eq!(BRAND.target, NAV_ITEMS[0].target);
}

#[test]
fn profile_cta_points_at_projects() {
    assert_eq!(PROFILE.cta_href(), "#projects");
    assert!(NAV_ITEMS.iter().any(|i| i.target == PROFILE.cta_target));
}

#[test]
fn profile_full_name_joins_parts() {
    assert_eq!(PROFILE.full_name(), "Morgan Muchira");
    assert_eq!(PROFILE.portrait_alt, PROFILE.full_name());
}
