//! Property tests for the split-screen camera core.

use glam::Vec2;
use proptest::prelude::*;

use splitview::geometry::{ProgressRange, angle};
use splitview::splitscreen::compositor::{compose, merged_offset};
use splitview::splitscreen::divider::split_points;
use splitview::splitscreen::{
    CameraOffsets, SplitSnapshot, SplitState, SplitTracker, ViewportState, clamp_offset,
    stretch_ratio, update_frame,
};

const SCREEN: Vec2 = Vec2::new(800.0, 600.0);
const MAP: Vec2 = Vec2::new(2000.0, 1500.0);

fn viewport() -> ViewportState {
    ViewportState::new(SCREEN, MAP, Vec2::new(400.0, 240.0)).unwrap()
}

fn map_point() -> impl Strategy<Value = Vec2> {
    (0.0f32..=MAP.x, 0.0f32..=MAP.y).prop_map(|(x, y)| Vec2::new(x, y))
}

fn in_clamp_range(offset: Vec2) -> bool {
    let min = SCREEN - MAP;
    offset.x >= min.x && offset.x <= 0.0 && offset.y >= min.y && offset.y <= 0.0
}

fn near_corner(p: Option<Vec2>) -> bool {
    p.is_some_and(|p| {
        (p.x.abs() < 1e-2 || (p.x - SCREEN.x).abs() < 1e-2)
            && (p.y.abs() < 1e-2 || (p.y - SCREEN.y).abs() < 1e-2)
    })
}

proptest! {
    #[test]
    fn clamped_offsets_keep_screen_inside_map(x in -5000.0f32..5000.0, y in -5000.0f32..5000.0) {
        let offset = clamp_offset(Vec2::new(x, y), SCREEN, MAP);
        prop_assert!(in_clamp_range(offset));
    }

    #[test]
    fn tension_is_bounded_and_monotonic(a in 0.0f32..5.0, b in 0.0f32..5.0) {
        let range = ProgressRange::new(1.0, 1.5).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (t_lo, t_hi) = (range.progress(lo), range.progress(hi));
        prop_assert!((0.0..=1.0).contains(&t_lo));
        prop_assert!((0.0..=1.0).contains(&t_hi));
        prop_assert!(t_lo <= t_hi);
    }

    #[test]
    fn divider_hits_at_most_two_edges(theta in -std::f32::consts::PI..std::f32::consts::PI) {
        prop_assert!(split_points(theta, SCREEN).count() <= 2);
    }

    #[test]
    fn swapping_players_keeps_ratio_and_merged_offset(a in map_point(), b in map_point()) {
        let threshold = Vec2::new(400.0, 240.0);
        let center = SCREEN * 0.5;
        prop_assert_eq!(stretch_ratio(a, b, threshold), stretch_ratio(b, a, threshold));
        let ab = merged_offset(a, b, center);
        let ba = merged_offset(b, a, center);
        prop_assert!((ab - ba).abs().max_element() < 1e-3);
    }

    #[test]
    fn swapping_players_swaps_split_offsets_and_keeps_divider(
        a in map_point(),
        b in map_point(),
        r1 in 0.0f32..500.0,
        r2 in 0.0f32..500.0,
        tension in 0.0f32..=1.0,
    ) {
        prop_assume!(a.distance(b) > 1.0);
        let center = SCREEN * 0.5;
        let snapshot = SplitSnapshot {
            player1_distance_from_center: r1,
            player2_distance_from_center: r2,
        };
        let swapped = SplitSnapshot {
            player1_distance_from_center: r2,
            player2_distance_from_center: r1,
        };
        let [o1, o2] = compose(a, b, Some(&snapshot), tension, center);
        let [s1, s2] = compose(b, a, Some(&swapped), tension, center);
        prop_assert!((o1 - s2).abs().max_element() < 1e-2);
        prop_assert!((o2 - s1).abs().max_element() < 1e-2);

        let hits = split_points(angle(a, b), SCREEN);
        let swapped_hits = split_points(angle(b, a), SCREEN);
        for (h, s) in hits.as_array().into_iter().zip(swapped_hits.as_array()) {
            match (h, s) {
                (Some(h), Some(s)) => prop_assert!((h - s).abs().max_element() < 1e-2),
                (None, None) => {}
                // A crossing within float error of a corner may land on either edge.
                _ => prop_assert!(near_corner(h.or(s))),
            }
        }
    }

    #[test]
    fn zero_tension_matches_merged_layout(a in map_point(), b in map_point(), r1 in 0.0f32..500.0, r2 in 0.0f32..500.0) {
        let center = SCREEN * 0.5;
        let snapshot = SplitSnapshot {
            player1_distance_from_center: r1,
            player2_distance_from_center: r2,
        };
        let merged = merged_offset(a, b, center);
        let [o1, o2] = compose(a, b, Some(&snapshot), 0.0, center);
        prop_assert!((o1 - merged).abs().max_element() < 1e-3);
        prop_assert!((o2 - merged).abs().max_element() < 1e-3);
    }

    #[test]
    fn frames_respect_state_invariants(moves in prop::collection::vec((map_point(), map_point()), 1..40)) {
        let vp = viewport();
        let mut tracker = SplitTracker::new();
        let (a0, b0) = moves[0];
        let mut offsets = CameraOffsets::merged(&vp, [a0, b0]);

        for (a, b) in moves {
            let frame = update_frame(&mut tracker, &vp, offsets.players([a, b]));
            offsets = frame.offsets;

            prop_assert!(in_clamp_range(frame.offsets.camera1));
            prop_assert!(in_clamp_range(frame.offsets.camera2));
            prop_assert!((0.0..=1.0).contains(&frame.tension));
            prop_assert_eq!(frame.snapshot.is_some(), frame.state == SplitState::Split);
            match frame.state {
                SplitState::Merged => {
                    prop_assert_eq!(frame.tension, 0.0);
                    prop_assert_eq!(frame.offsets.camera1, frame.offsets.camera2);
                    prop_assert!(frame.divider.is_none());
                    prop_assert!(frame.clip.is_none());
                }
                SplitState::Split => {
                    prop_assert_eq!(frame.divider_opacity, frame.tension);
                    let clip_len = frame.clip.as_ref().map(|c| c.len());
                    prop_assert!(clip_len == Some(0) || clip_len == Some(4));
                }
            }
        }
    }
}
