// Host-side tests for the DOM contract.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn repeated_item_selectors_are_scoped_to_their_section() {
    assert!(TIMELINE_CARD_SELECTOR.starts_with(&format!("#{ABOUT_SECTION_ID} ")));
    assert!(ORBIT_RING_SELECTOR.starts_with(&format!("#{SKILLS_SECTION_ID} ")));
    assert!(ORBIT_SKILL_SELECTOR.starts_with(&format!("#{SKILLS_SECTION_ID} ")));
    assert!(PROJECT_CARD_SELECTOR.starts_with(&format!("#{PROJECTS_SECTION_ID} ")));
    assert!(HERO_FADE_SELECTOR.starts_with(&format!("#{HERO_SECTION_ID} ")));
}

#[test]
fn orbit_selectors_match_their_attributes() {
    assert!(ORBIT_RING_SELECTOR.contains(&format!("[{RING_ATTR}]")));
    assert!(ORBIT_SKILL_SELECTOR.contains(&format!("[{SKILL_ATTR}]")));
}

#[test]
fn section_ids_are_distinct() {
    let ids = [
        HERO_SECTION_ID,
        ABOUT_SECTION_ID,
        SKILLS_SECTION_ID,
        PROJECTS_SECTION_ID,
        TIMELINE_PROGRESS_ID,
        ORBIT_CENTER_ID,
        PROJECTS_HEADER_ID,
        PROJECTS_LIST_ID,
        PROJECT_COUNTER_ID,
        PROJECT_COUNTER_TITLE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fades_are_short_enough_to_follow_scrolling() {
    for ms in [RING_FADE_MS, BADGE_FADE_MS, CARD_FADE_MS] {
        assert!(ms > 0 && ms <= 1000);
    }
    // badges pop in faster than the ring they sit on
    assert!(BADGE_FADE_MS < RING_FADE_MS);
}
