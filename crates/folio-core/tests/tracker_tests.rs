// Host-side tests for active/visible tracking in the project list.

use folio_core::*;

fn entry(key: usize, ratio: f32, is_intersecting: bool) -> IntersectionEntry<usize> {
    IntersectionEntry {
        key,
        ratio,
        is_intersecting,
    }
}

fn tracker() -> VisibilityTracker<usize> {
    VisibilityTracker::new(vec![0, 1, 2], ObserverSupport::Available)
}

#[test]
fn starts_with_first_active_and_all_visible() {
    let t = tracker();
    assert_eq!(t.active(), Some(0));
    assert_eq!(t.active_index(), Some(0));
    assert_eq!(t.visibility(), vec![true, true, true]);
}

#[test]
fn crossing_half_visible_makes_item_active() {
    let mut t = tracker();
    assert!(!t.on_active_entry(&entry(1, 0.3, true)));
    assert_eq!(t.active(), Some(0));
    assert!(t.on_active_entry(&entry(1, 0.5, true)));
    assert_eq!(t.active(), Some(1));
    // leaving does not clear the active item
    assert!(!t.on_active_entry(&entry(1, 0.49, false)));
    assert_eq!(t.active(), Some(1));
}

#[test]
fn item_leaving_the_viewport_does_not_become_active() {
    let mut t = tracker();
    assert!(t.on_active_entry(&entry(1, 0.5, true)));
    assert!(t.on_active_entry(&entry(2, 0.62, true)));
    // item 1 scrolls out: still intersecting, now just under half visible
    assert!(!t.on_active_entry(&entry(1, 0.4996, true)));
    assert_eq!(t.active(), Some(2));
}

#[test]
fn last_crossing_wins() {
    let mut t = tracker();
    t.on_active_entry(&entry(2, 0.6, true));
    t.on_active_entry(&entry(1, 0.7, true));
    assert_eq!(t.active(), Some(1));
    assert_eq!(t.active_index(), Some(1));
}

#[test]
fn repeated_entries_are_idempotent() {
    let mut t = tracker();
    assert!(t.on_visibility_entry(&entry(0, 0.0, false)));
    let after_first = t.visibility();
    assert!(!t.on_visibility_entry(&entry(0, 0.0, false)));
    assert_eq!(t.visibility(), after_first);
    assert_eq!(after_first, vec![false, true, true]);

    assert!(t.on_active_entry(&entry(2, 0.8, true)));
    assert!(!t.on_active_entry(&entry(2, 0.8, true)));
    assert_eq!(t.active(), Some(2));
}

#[test]
fn unknown_keys_are_ignored() {
    let mut t = tracker();
    assert!(!t.on_active_entry(&entry(9, 1.0, true)));
    assert!(!t.on_visibility_entry(&entry(9, 0.0, false)));
    assert_eq!(t.active(), Some(0));
}

#[test]
fn missing_observer_fails_open() {
    let mut t = VisibilityTracker::new(vec![0, 1, 2], ObserverSupport::Unavailable);
    assert!(!t.on_visibility_entry(&entry(1, 0.0, false)));
    assert!(!t.on_active_entry(&entry(2, 1.0, true)));
    assert_eq!(t.visibility(), vec![true, true, true]);
    assert!(t.is_visible(&1));
    assert_eq!(t.active(), Some(0));
}

#[test]
fn disconnected_tracker_is_frozen() {
    let mut t = tracker();
    t.on_visibility_entry(&entry(1, 0.0, false));
    t.disconnect();
    assert!(!t.is_connected());
    assert!(!t.on_visibility_entry(&entry(1, 0.2, true)));
    assert!(!t.on_active_entry(&entry(2, 0.9, true)));
    assert!(!t.set_section_in_view(true));
    t.set_header_offset(HeaderOffset::measure(64.0, 100.0));
    assert_eq!(t.visibility(), vec![true, false, true]);
    assert_eq!(t.active(), Some(0));
    assert_eq!(t.header_offset(), HeaderOffset::default());
}

#[test]
fn section_view_changes_request_remeasure() {
    let mut t = tracker();
    assert!(t.set_section_in_view(true));
    assert!(!t.set_section_in_view(true));
    assert!(t.set_section_in_view(false));
    assert!(!t.section_in_view());
}

#[test]
fn header_offset_from_computed_style() {
    let h = HeaderOffset::from_computed("64px", 120.0);
    assert_eq!(h.margin_px, 184.0);
    assert_eq!(h.padding_px(), 196.0);
    assert_eq!(HeaderOffset::from_computed("auto", 50.0).margin_px, 50.0);
    assert_eq!(HeaderOffset::measure(f32::NAN, 40.0).margin_px, 40.0);
}

#[test]
fn css_px_parsing_matches_leading_integer() {
    assert_eq!(parse_css_px("64px"), Some(64.0));
    assert_eq!(parse_css_px("  12.7px"), Some(12.0));
    assert_eq!(parse_css_px("-8px"), Some(-8.0));
    assert_eq!(parse_css_px("auto"), None);
    assert_eq!(parse_css_px(""), None);
}

#[test]
fn geometric_visibility_respects_header() {
    let header = HeaderOffset::measure(64.0, 100.0); // 164px
    assert!(visible_below_header(100.0, 400.0, 900.0, header));
    assert!(!visible_below_header(-200.0, 150.0, 900.0, header));
    assert!(!visible_below_header(950.0, 1200.0, 900.0, header));
    assert!(visible_below_header(-200.0, 170.0, 900.0, header));
}

#[test]
fn intersection_ratio_of_partial_overlap() {
    assert_eq!(intersection_ratio(0.0, 100.0, 50.0, 1000.0), 0.5);
    assert_eq!(intersection_ratio(0.0, 100.0, 200.0, 1000.0), 0.0);
    assert_eq!(intersection_ratio(10.0, 10.0, 0.0, 1000.0), 0.0);
}
