use super::*;
use crate::geom::{point, Segment, Viewport};
use proptest::prelude::*;

fn unit_box() -> Viewport {
    Viewport::new((-1.0, 1.0), (-1.0, 1.0))
}

#[test]
fn starts_idle_and_ignores_clicks() {
    let mut st = InteractionState::default();
    assert_eq!(st.mode(), Mode::None);
    assert_eq!(st.handle_click(point(0.0, 0.0), &unit_box()), ClickOutcome::Ignored);
    assert!(st.captured_points().is_empty());
    assert!(st.captured_scene().is_empty());
}

#[test]
fn point_mode_appends_to_latest_container() {
    let mut st = InteractionState::default();
    st.toggle_mode(ModeKind::Points);
    st.handle_click(point(1.0, 2.0), &unit_box());
    st.handle_click(point(3.0, 4.0), &unit_box());
    assert_eq!(st.captured_points().len(), 1);
    assert_eq!(
        st.captured_points()[0].points(),
        &[point(1.0, 2.0), point(3.0, 4.0)]
    );
    // Re-activation starts a new container instead of merging.
    st.toggle_mode(ModeKind::Points);
    st.toggle_mode(ModeKind::Points);
    st.handle_click(point(5.0, 5.0), &unit_box());
    assert_eq!(st.captured_points().len(), 2);
    assert_eq!(st.captured_points()[1].points(), &[point(5.0, 5.0)]);
}

#[test]
fn segment_scenario_two_clicks() {
    let mut st = InteractionState::default();
    st.toggle_mode(ModeKind::Segments);
    let out = st.handle_click(point(0.0, 0.0), &unit_box());
    assert_eq!(out, ClickOutcome::SegmentStarted(point(0.0, 0.0)));
    assert_eq!(st.pending_segment_start(), Some(point(0.0, 0.0)));
    assert!(st.captured_segments()[0].is_empty());

    st.handle_click(point(1.0, 1.0), &unit_box());
    assert_eq!(st.pending_segment_start(), None);
    assert_eq!(
        st.captured_segments()[0].as_batch(),
        &[Segment::new(point(0.0, 0.0), point(1.0, 1.0))]
    );
}

#[test]
fn polygon_scenario_closes_near_first_vertex() {
    // Extents 2 and 2 -> threshold 2 * 0.15 = 0.3.
    let vp = unit_box();
    let mut st = InteractionState::default();
    st.toggle_mode(ModeKind::Polygon);
    assert_eq!(
        st.handle_click(point(0.0, 0.0), &vp),
        ClickOutcome::PolygonStarted(point(0.0, 0.0))
    );
    st.handle_click(point(1.0, 0.0), &vp);
    let out = st.handle_click(point(0.05, 0.02), &vp);
    assert_eq!(
        out,
        ClickOutcome::PolygonClosed(Segment::new(point(1.0, 0.0), point(0.0, 0.0)))
    );
    assert_eq!(st.captured_polygons().len(), 2);
    assert_eq!(
        st.captured_polygons()[0].as_batch(),
        &[
            Segment::new(point(0.0, 0.0), point(1.0, 0.0)),
            Segment::new(point(1.0, 0.0), point(0.0, 0.0)),
        ]
    );
    assert!(st.captured_polygons()[1].is_empty());
    assert!(st.pending_polygon().is_empty());
    assert_eq!(st.mode(), Mode::AddingPolygon);
}

#[test]
fn polygon_second_click_never_closes() {
    // Even a click on top of v0 only draws an edge while fewer than two vertices exist.
    let mut st = InteractionState::default();
    st.toggle_mode(ModeKind::Polygon);
    st.handle_click(point(0.0, 0.0), &unit_box());
    let out = st.handle_click(point(0.01, 0.0), &unit_box());
    assert!(matches!(out, ClickOutcome::PolygonEdge(_)));
    assert_eq!(st.pending_polygon().len(), 2);
}

#[test]
fn polygon_threshold_follows_viewport_zoom() {
    let click = point(0.5, 0.0);
    let far = point(3.0, 3.0);
    // Wide view: threshold 20 * 0.15 = 3 -> closes.
    let mut wide = InteractionState::default();
    wide.toggle_mode(ModeKind::Polygon);
    let vp_wide = Viewport::new((-10.0, 10.0), (-10.0, 10.0));
    for p in [point(0.0, 0.0), far, point(-3.0, 3.0)] {
        wide.handle_click(p, &vp_wide);
    }
    assert!(matches!(wide.handle_click(click, &vp_wide), ClickOutcome::PolygonClosed(_)));
    // Zoomed view: threshold 0.3 -> extends the polygon instead.
    let mut zoomed = InteractionState::default();
    zoomed.toggle_mode(ModeKind::Polygon);
    for p in [point(0.0, 0.0), far, point(-3.0, 3.0)] {
        zoomed.handle_click(p, &unit_box());
    }
    assert_eq!(
        zoomed.handle_click(click, &unit_box()),
        ClickOutcome::PolygonEdge(Segment::new(point(-3.0, 3.0), click))
    );
    assert_eq!(zoomed.pending_polygon().last(), Some(&click));
}

#[test]
fn switching_modes_discards_only_pending_geometry() {
    let mut st = InteractionState::default();
    st.toggle_mode(ModeKind::Segments);
    st.handle_click(point(0.0, 0.0), &unit_box());
    st.handle_click(point(1.0, 0.0), &unit_box());
    st.handle_click(point(2.0, 2.0), &unit_box()); // pending start
    assert_eq!(st.toggle_mode(ModeKind::Polygon), Mode::AddingPolygon);
    assert_eq!(st.pending_segment_start(), None);
    assert_eq!(st.captured_segments()[0].len(), 1);

    st.handle_click(point(0.0, 0.0), &unit_box());
    st.handle_click(point(0.5, 0.5), &unit_box());
    st.toggle_mode(ModeKind::Points);
    assert!(st.pending_polygon().is_empty());
    assert_eq!(st.captured_polygons()[0].len(), 1);
    // The polygon edge stays committed after the switch.
    let scene = st.captured_scene();
    assert_eq!(scene.lines.len(), 2);
    assert_eq!(scene.points.len(), 1);
}

#[test]
fn resuming_segment_mode_needs_two_fresh_clicks() {
    let mut st = InteractionState::default();
    st.toggle_mode(ModeKind::Segments);
    st.handle_click(point(0.0, 0.0), &unit_box());
    st.toggle_mode(ModeKind::Segments);
    st.toggle_mode(ModeKind::Segments);
    let out = st.handle_click(point(1.0, 1.0), &unit_box());
    assert_eq!(out, ClickOutcome::SegmentStarted(point(1.0, 1.0)));
    assert!(st.captured_segments().iter().all(|s| s.is_empty()));
}

fn click_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-1.0f64..1.0, -1.0f64..1.0)
}

proptest! {
    #[test]
    fn toggle_twice_returns_to_idle_and_keeps_committed(
        kind in prop_oneof![Just(ModeKind::Points), Just(ModeKind::Segments), Just(ModeKind::Polygon)],
        clicks in prop::collection::vec(click_strategy(), 0..20),
        late in prop::collection::vec(click_strategy(), 0..5),
    ) {
        let vp = unit_box();
        let mut st = InteractionState::default();
        st.toggle_mode(kind);
        for &(x, y) in &clicks {
            st.handle_click(point(x, y), &vp);
        }
        let committed = st.captured_scene();
        prop_assert_eq!(st.toggle_mode(kind), Mode::None);
        prop_assert!(st.pending_segment_start().is_none());
        prop_assert!(st.pending_polygon().is_empty());
        for &(x, y) in &late {
            prop_assert_eq!(st.handle_click(point(x, y), &vp), ClickOutcome::Ignored);
        }
        prop_assert_eq!(st.captured_scene(), committed);
    }

    #[test]
    fn polygon_edges_chain_until_closed(
        clicks in prop::collection::vec(click_strategy(), 1..30),
    ) {
        let vp = unit_box();
        let mut st = InteractionState::default();
        st.toggle_mode(ModeKind::Polygon);
        for &(x, y) in &clicks {
            st.handle_click(point(x, y), &vp);
        }
        // Every container is a connected chain; closed ones end at their first vertex.
        let n = st.captured_polygons().len();
        for (i, poly) in st.captured_polygons().iter().enumerate() {
            let batch = poly.as_batch();
            for w in batch.windows(2) {
                prop_assert_eq!(w[0].end, w[1].start);
            }
            if i + 1 < n {
                prop_assert!(batch.len() >= 2);
                prop_assert_eq!(batch[batch.len() - 1].end, batch[0].start);
            }
        }
    }
}
