use super::*;
use crate::draw::{BLUE, Color, RED, SurfaceFrame};
use crate::surface::DrawingSurface;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct HostState {
    view_id: u32,
    label: String,
}

fn host_state() -> HostState {
    HostState {
        view_id: 7,
        label: "canvas".to_string(),
    }
}

fn drawn_surface() -> DrawingSurface {
    let mut surface = DrawingSurface::new();
    surface.sync_frame(SurfaceFrame::new(90, 1920, 1080));

    surface.set_stroke_color(RED);
    surface.set_stroke_width(4.5);
    surface.on_pointer_down(10.0, 10.0);
    surface.on_pointer_move(20.25, 10.0);
    surface.on_pointer_up(20.25, 30.5);

    surface.set_stroke_color(BLUE);
    surface.set_stroke_width(0.0);
    surface.on_pointer_down(100.0, 200.0);
    surface.on_pointer_up(100.0, 200.0);

    surface.set_background_color(Color::from_argb(0xFF12_3456));
    surface
}

#[test]
fn snapshot_then_restore_reproduces_state() {
    let source = drawn_surface();
    let snapshot = source.snapshot();

    let mut target = DrawingSurface::new();
    target.restore(snapshot.clone());

    assert_eq!(target.strokes(), source.strokes());
    assert_eq!(target.background_color(), source.background_color());
    assert_eq!(target.stroke_color(), BLUE);
    assert_eq!(target.stroke_width(), 0.0);
    assert_eq!(target.last_frame(), SurfaceFrame::new(90, 1920, 1080));
    assert_eq!(target.snapshot(), snapshot);
}

#[test]
fn snapshot_is_a_deep_copy() {
    let mut surface = drawn_surface();
    let snapshot = surface.snapshot();

    surface.undo();
    surface.undo();

    assert!(surface.strokes().is_empty());
    assert_eq!(snapshot.strokes.len(), 2);
}

#[test]
fn snapshot_includes_stroke_in_progress() {
    let mut surface = drawn_surface();
    surface.on_pointer_down(1.0, 2.0);
    surface.on_pointer_move(3.0, 4.0);

    let snapshot = surface.snapshot();
    assert_eq!(snapshot.strokes.len(), 3);
    assert_eq!(snapshot.strokes[2].last_point(), Some((3.0, 4.0)));

    let mut restored = DrawingSurface::new();
    restored.restore(snapshot);
    assert_eq!(restored.strokes().len(), 3);
    assert!(restored.stroke_in_progress().is_none());
}

#[test]
fn save_without_parent_state_yields_nothing() {
    let surface = drawn_surface();
    assert!(surface.save_state::<HostState>(None).is_none());
}

#[test]
fn restore_state_hands_back_parent_unchanged() {
    let surface = drawn_surface();
    let saved = surface.save_state(Some(host_state())).unwrap();

    let mut restored = DrawingSurface::new();
    let parent = restored.restore_state(saved);

    assert_eq!(parent, host_state());
    assert_eq!(restored.strokes(), surface.strokes());
}

#[test]
fn encoded_state_round_trips_through_both_restore_paths() {
    let surface = drawn_surface();
    let saved = surface.save_state(Some(host_state())).unwrap();
    let bytes = encode_state(&saved).unwrap();

    let typed: SavedState<HostState> = decode_state(&bytes, RestoreCapability::Typed).unwrap();
    let untyped: SavedState<HostState> =
        decode_state(&bytes, RestoreCapability::Untyped).unwrap();

    assert_eq!(typed, saved);
    assert_eq!(untyped, saved);
}

#[test]
fn encoded_layout_keeps_record_order() {
    let saved = drawn_surface().save_state(Some(())).unwrap();
    let text = String::from_utf8(encode_state(&saved).unwrap()).unwrap();

    let positions: Vec<usize> = [
        "\"parent\"",
        "\"strokes\"",
        "\"background_color\"",
        "\"stroke_color\"",
        "\"stroke_width\"",
        "\"orientation\":[90,1920,1080]",
    ]
    .iter()
    .map(|key| text.find(key).unwrap_or_else(|| panic!("missing {key} in {text}")))
    .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn decode_rejects_malformed_bytes() {
    for capability in [RestoreCapability::Typed, RestoreCapability::Untyped] {
        assert!(decode_state::<()>(b"not json", capability).is_err());
        assert!(decode_state::<()>(b"[1, 2, 3]", capability).is_err());
        assert!(decode_state::<()>(br#"{"version": 1}"#, capability).is_err());
    }
}

#[test]
fn decode_drops_empty_strokes() {
    let bytes = br#"{
        "version": 1,
        "parent": null,
        "strokes": [{"segments": []}],
        "background_color": {"r": 1.0, "g": 1.0, "b": 1.0, "a": 1.0},
        "stroke_color": {"r": 0.0, "g": 0.0, "b": 0.0, "a": 1.0},
        "stroke_width": 10.0,
        "orientation": [-1, -1, -1]
    }"#;

    for capability in [RestoreCapability::Typed, RestoreCapability::Untyped] {
        let saved: SavedState<()> = decode_state(bytes, capability).unwrap();
        assert!(saved.surface.strokes.is_empty());
        assert!(saved.surface.frame.is_unset());
    }
}

#[test]
fn capability_follows_platform_level() {
    assert_eq!(
        RestoreCapability::from_platform_level(TYPED_RESTORE_MIN_LEVEL),
        RestoreCapability::Typed
    );
    assert_eq!(
        RestoreCapability::from_platform_level(TYPED_RESTORE_MIN_LEVEL - 1),
        RestoreCapability::Untyped
    );
}

#[test]
fn restored_strokes_follow_a_later_rotation() {
    let mut surface = DrawingSurface::new();
    surface.sync_frame(SurfaceFrame::new(0, 100, 200));
    surface.on_pointer_down(10.0, 30.0);
    surface.on_pointer_up(10.0, 30.0);

    let saved = surface.save_state(Some(())).unwrap();
    let bytes = encode_state(&saved).unwrap();

    let mut recreated = DrawingSurface::new();
    let decoded: SavedState<()> = decode_state(&bytes, RestoreCapability::Typed).unwrap();
    recreated.restore_state(decoded);
    assert!(recreated.sync_frame(SurfaceFrame::new(90, 200, 100)));

    assert_eq!(recreated.strokes()[0].last_point(), Some((30.0, 90.0)));
}

#[test]
fn state_file_round_trip() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("state/surface.json");
    let saved = drawn_surface().save_state(Some(host_state())).unwrap();

    assert!(
        read_state_file::<HostState>(&path, RestoreCapability::Typed)
            .unwrap()
            .is_none()
    );

    write_state_file(&path, &saved).unwrap();
    write_state_file(&path, &saved).unwrap();

    let loaded: SavedState<HostState> = read_state_file(&path, RestoreCapability::Untyped)
        .unwrap()
        .expect("state present");
    assert_eq!(loaded, saved);
}

fn float_bits(snapshot: &SurfaceSnapshot) -> Vec<u32> {
    let mut bits = vec![snapshot.stroke_width.to_bits()];
    for stroke in &snapshot.strokes {
        for segment in stroke.segments() {
            bits.extend(
                [
                    segment.start_x,
                    segment.start_y,
                    segment.end_x,
                    segment.end_y,
                    segment.width,
                ]
                .map(f32::to_bits),
            );
        }
    }
    bits
}

#[test]
fn non_finite_values_round_trip_through_both_restore_paths() {
    let mut surface = DrawingSurface::new();
    surface.set_stroke_width(f32::NAN);
    surface.on_pointer_down(f32::INFINITY, -5.0);
    surface.on_pointer_move(f32::NAN, f32::NEG_INFINITY);
    surface.on_pointer_up(1.0e30, -0.0);
    surface.set_stroke_width(f32::INFINITY);

    let saved = surface.save_state(Some(host_state())).unwrap();
    let expected = float_bits(&saved.surface);
    let bytes = encode_state(&saved).unwrap();

    for capability in [RestoreCapability::Typed, RestoreCapability::Untyped] {
        let decoded: SavedState<HostState> = decode_state(&bytes, capability).unwrap();
        assert_eq!(float_bits(&decoded.surface), expected);
        assert_eq!(decoded.parent, host_state());
    }
}

#[test]
fn non_finite_state_file_reads_back() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("surface.json");

    let mut surface = DrawingSurface::new();
    surface.on_pointer_down(f32::NEG_INFINITY, f32::NAN);
    surface.on_pointer_up(f32::NEG_INFINITY, f32::NAN);
    let saved = surface.save_state(Some(())).unwrap();
    write_state_file(&path, &saved).unwrap();

    let loaded: SavedState<()> = read_state_file(&path, RestoreCapability::Typed)
        .unwrap()
        .expect("state present");
    assert_eq!(float_bits(&loaded.surface), float_bits(&saved.surface));
}
