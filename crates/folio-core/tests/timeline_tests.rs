// Host-side tests for item windows and the timeline cards they drive.

use folio_core::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn window_of_middle_item_among_five() {
    let w = ItemWindow::for_index(2, 5).unwrap();
    assert_eq!(w.start, 0.4);
    assert_eq!(w.end, 0.6);
    assert!(!w.is_first());
    assert!(!w.is_last());
}

#[test]
fn no_window_without_items() {
    assert!(ItemWindow::for_index(0, 0).is_none());
    assert!(ItemWindow::for_index(5, 5).is_none());
    assert_eq!(ItemWindow::all(0).count(), 0);
    let timeline = Timeline::new(0);
    assert!(timeline.is_empty());
    assert!(timeline.frames(0.5).is_empty());
}

#[test]
fn padded_stops_clamp_to_unit_range() {
    let pad = WindowPadding::default();
    let first = ItemWindow::for_index(0, 5).unwrap().stops(pad);
    assert!(approx(first[0], 0.0));
    assert!(approx(first[1], 0.05));
    assert!(approx(first[2], 0.15));
    assert!(approx(first[3], 0.3));
    let last = ItemWindow::for_index(4, 5).unwrap().stops(pad);
    assert!(approx(last[0], 0.7));
    assert!(approx(last[3], 1.0));
}

#[test]
fn narrow_windows_stay_sorted() {
    // 20 items: each window is 0.05 wide, narrower than two settle insets
    for w in ItemWindow::all(20) {
        let stops = w.stops(WindowPadding::default());
        for pair in stops.windows(2) {
            assert!(pair[0] <= pair[1], "unsorted stops {stops:?}");
        }
    }
}

#[test]
fn first_item_starts_visible_others_start_hidden() {
    let timeline = Timeline::new(5);
    let frames = timeline.frames(0.0);
    // only opacity is held; scale and offset still animate in
    assert!(approx(frames[0].opacity, 1.0));
    assert!(approx(frames[0].scale, 0.85));
    assert!(approx(frames[0].offset_y, 30.0));
    for f in &frames[1..] {
        assert!(approx(f.opacity, 0.0));
        assert!(approx(f.scale, 0.85));
        assert!(approx(f.offset_y, 30.0));
    }
}

#[test]
fn last_item_stays_visible_but_shrinks_back() {
    let timeline = Timeline::new(5);
    let last = timeline.frames(1.0)[4];
    assert!(approx(last.opacity, 1.0));
    assert!(approx(last.scale, 0.85));
    assert!(approx(last.offset_y, 30.0));
}

#[test]
fn single_item_is_always_visible() {
    let timeline = Timeline::new(1);
    for p in [0.0, 0.3, 0.7, 1.0] {
        assert!(approx(timeline.frames(p)[0].opacity, 1.0));
    }
}

#[test]
fn cards_alternate_alignment() {
    let timeline = Timeline::new(4);
    let aligns: Vec<_> = timeline.cards().iter().map(|c| c.align).collect();
    assert_eq!(
        aligns,
        vec![CardAlign::Top, CardAlign::Bottom, CardAlign::Top, CardAlign::Bottom]
    );
}

#[test]
fn glow_grows_across_the_raw_window() {
    let timeline = Timeline::new(5);
    let card = timeline.card(2).unwrap();
    assert!(approx(card.frame(0.4).glow_radius, 15.0));
    assert!(approx(card.frame(0.5).glow_radius, 25.0));
    assert!(approx(card.frame(0.6).glow_radius, 35.0));
    assert!(approx(card.frame(0.6).glow_alpha, 0.8));
}

#[test]
fn progress_line_tracks_progress() {
    let timeline = Timeline::new(5);
    assert!(approx(timeline.line_width_percent(0.0), 0.0));
    assert!(approx(timeline.line_width_percent(0.42), 42.0));
    assert!(approx(timeline.line_width_percent(1.3), 100.0));
}

#[test]
fn sweep_of_five_cards_rises_then_falls() {
    let timeline = Timeline::new(5);
    let samples: Vec<Vec<f32>> = (0..=100)
        .map(|i| {
            timeline
                .frames(i as f32 * 0.01)
                .iter()
                .map(|f| f.opacity)
                .collect()
        })
        .collect();

    assert!(approx(samples[0][0], 1.0));
    assert!(samples[100][4] >= 0.95);

    for item in 0..5 {
        let series: Vec<f32> = samples.iter().map(|s| s[item]).collect();
        let peak = series
            .iter()
            .cloned()
            .fold(f32::MIN, f32::max);
        assert!(approx(peak, 1.0), "item {item} never fully shows");
        let peak_at = series.iter().position(|v| approx(*v, peak)).unwrap();
        for pair in series[..=peak_at].windows(2) {
            assert!(pair[1] >= pair[0] - 1e-6, "item {item} dips while rising");
        }
        for pair in series[peak_at..].windows(2) {
            assert!(pair[1] <= pair[0] + 1e-6, "item {item} rises while falling");
        }
        let w = ItemWindow::for_index(item, 5).unwrap();
        if !w.is_first() {
            // strictly rising through the fade-in
            let rise_start = ((w.start - 0.1).max(0.0) * 100.0).round() as usize + 1;
            let rise_end = ((w.start + 0.05) * 100.0).round() as usize - 1;
            for i in rise_start..rise_end {
                assert!(series[i + 1] > series[i], "item {item} not rising at {i}");
            }
        }
        if !w.is_first() && !w.is_last() {
            assert!(series[100] < 1e-5, "item {item} still visible at the end");
            let fall_start = ((w.end - 0.05) * 100.0).round() as usize + 1;
            let fall_end = ((w.end + 0.1).min(1.0) * 100.0).round() as usize - 1;
            for i in fall_start..fall_end {
                assert!(series[i + 1] < series[i], "item {item} not falling at {i}");
            }
        }
    }
}
