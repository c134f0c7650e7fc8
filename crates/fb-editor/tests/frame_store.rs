//! Integration tests: frame store, undo history, and eraser driven through
//! the editor session (fb-editor ↔ fb-core).

mod support;

use fb_core::{EditorConfig, Point};
use fb_editor::{EditCommand, EditorSession, InputEvent, ToolKind};
use pretty_assertions::assert_eq;
use support::{DisplayCall, ManualTimer, RecordingDisplay, dot, init_logging, line};

type Session = EditorSession<RecordingDisplay, ManualTimer>;

fn make_session() -> Session {
    init_logging();
    EditorSession::new(
        EditorConfig::default(),
        RecordingDisplay::default(),
        ManualTimer::default(),
    )
    .unwrap()
}

fn draw(session: &mut Session, points: &[(f64, f64)]) {
    let (first, rest) = points.split_first().expect("at least one point");
    session
        .handle_event(InputEvent::from_pointer_down(first.0, first.1))
        .unwrap();
    for &(x, y) in rest {
        session.handle_event(InputEvent::from_pointer_move(x, y)).unwrap();
    }
    let last = points[points.len() - 1];
    session
        .handle_event(InputEvent::from_pointer_up(last.0, last.1))
        .unwrap();
}

// ─── Selection bounds ───────────────────────────────────────────────────

#[test]
fn selection_stays_in_bounds_under_frame_crud() {
    let mut session = make_session();
    // Small LCG so the sequence is deterministic without extra deps.
    let mut seed: u32 = 0x2545_F491;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let len = session.store().len();
        let target = (seed >> 8) as usize % (len + 2);
        match (seed >> 24) % 5 {
            0 => {
                session.add_frame();
            }
            1 => {
                session.insert_frame();
            }
            2 => {
                session.delete_frame(target);
            }
            3 => {
                session.delete_selected_frame();
            }
            _ => {
                session.select_frame(target);
            }
        }
        let store = session.store();
        match store.selected_frame_index() {
            Some(i) => assert!(i < store.len(), "selected {i} of {}", store.len()),
            None => assert!(store.is_empty(), "no selection with {} frames", store.len()),
        }
        assert!(store.selected_frame_index_i32() >= -1);
    }
}

#[test]
fn deleting_only_frame_clears_display() {
    let mut session = make_session();
    draw(&mut session, &[(1.0, 1.0), (2.0, 2.0)]);
    session.display_mut().take();

    assert!(session.delete_selected_frame());
    assert_eq!(session.store().selected_frame_index(), None);
    assert_eq!(session.store().selected_frame_index_i32(), -1);
    assert_eq!(session.display_mut().take(), vec![DisplayCall::Clear]);
}

// ─── Drawing ────────────────────────────────────────────────────────────

#[test]
fn first_gesture_creates_and_fills_a_frame() {
    let mut session = make_session();
    draw(&mut session, &[(10.0, 10.0), (20.0, 15.0), (30.0, 30.0)]);

    let store = session.store();
    assert_eq!(store.len(), 1);
    assert_eq!(
        store.selected_frame().unwrap().strokes(),
        &[line(&[(10.0, 10.0), (20.0, 15.0), (30.0, 30.0)])]
    );
}

#[test]
fn preview_follows_each_move() {
    let mut session = make_session();
    session.add_frame();
    session.display_mut().take();

    session.handle_event(InputEvent::from_pointer_down(0.0, 0.0)).unwrap();
    session.handle_event(InputEvent::from_pointer_move(5.0, 1.0)).unwrap();
    session.handle_event(InputEvent::from_pointer_move(9.0, 7.0)).unwrap();
    assert_eq!(
        session.display().last_preview,
        vec![Point::new(0.0, 0.0), Point::new(5.0, 1.0), Point::new(9.0, 7.0)]
    );
    session.handle_event(InputEvent::from_pointer_up(9.0, 7.0)).unwrap();

    assert_eq!(
        session.display_mut().take(),
        vec![
            DisplayCall::Preview(1),
            DisplayCall::Preview(2),
            DisplayCall::Preview(3),
            DisplayCall::Render(1),
        ]
    );
}

#[test]
fn eraser_gesture_never_builds_a_stroke() {
    let mut session = make_session();
    draw(&mut session, &[(100.0, 100.0)]);
    session.set_tool(ToolKind::Eraser);
    draw(&mut session, &[(300.0, 300.0), (310.0, 310.0)]);
    assert_eq!(session.store().selected_frame().unwrap().stroke_count(), 1);
}

// ─── Undo ───────────────────────────────────────────────────────────────

#[test]
fn three_commits_three_undos_empty_the_frame() {
    let mut session = make_session();
    session.add_frame();
    for stroke in [dot(1.0, 1.0), dot(2.0, 2.0), dot(3.0, 3.0)] {
        session.execute(EditCommand::CommitStroke(stroke)).unwrap();
    }

    assert!(session.undo());
    assert_eq!(
        session.store().selected_frame().unwrap().strokes(),
        &[dot(1.0, 1.0), dot(2.0, 2.0)]
    );
    assert!(session.undo());
    assert!(session.undo());
    assert!(session.store().selected_frame().unwrap().is_empty());

    // Fourth undo: nothing to undo.
    assert!(!session.undo());
    assert!(session.store().selected_frame().unwrap().is_empty());
}

#[test]
fn undo_with_no_frame_is_noop() {
    let mut session = make_session();
    assert!(!session.undo());
}

#[test]
fn history_is_consistent_with_frame_after_commits() {
    let mut session = make_session();
    draw(&mut session, &[(0.0, 0.0), (1.0, 1.0)]);
    draw(&mut session, &[(5.0, 5.0)]);
    let store = session.store();
    assert_eq!(
        store.history().flatten(),
        store.selected_frame().unwrap().strokes()
    );
}

#[test]
fn select_round_trip_restores_frame_and_history() {
    let mut session = make_session();
    session.add_frame();
    session.execute(EditCommand::CommitStroke(dot(1.0, 1.0))).unwrap();
    session.execute(EditCommand::CommitStroke(dot(2.0, 2.0))).unwrap();
    let frame_a = session.store().selected_frame().unwrap().clone();

    session.add_frame();
    session.execute(EditCommand::CommitStroke(dot(9.0, 9.0))).unwrap();

    assert!(session.select_frame(0));
    assert_eq!(session.store().selected_frame().unwrap(), &frame_a);

    // History was rebuilt from A, so undo reverts A's latest stroke.
    assert!(session.undo());
    assert_eq!(
        session.store().selected_frame().unwrap().strokes(),
        &[dot(1.0, 1.0)]
    );
    // B is untouched.
    assert_eq!(session.store().frame(1).unwrap().strokes(), &[dot(9.0, 9.0)]);
}

// ─── Eraser ─────────────────────────────────────────────────────────────

#[test]
fn eraser_containment_at_50_50() {
    let mut session = make_session();
    session.add_frame();
    let touched = line(&[(55.0, 52.0), (120.0, 120.0)]);
    let outside = line(&[(61.0, 50.0), (90.0, 50.0)]);
    session
        .execute(EditCommand::CommitStroke(touched))
        .unwrap();
    session
        .execute(EditCommand::CommitStroke(outside.clone()))
        .unwrap();

    session.set_tool(ToolKind::Eraser);
    session
        .handle_event(InputEvent::from_pointer_down(50.0, 50.0))
        .unwrap();
    session
        .handle_event(InputEvent::from_pointer_up(50.0, 50.0))
        .unwrap();

    assert_eq!(session.store().selected_frame().unwrap().strokes(), &[outside]);
}

#[test]
fn erasing_is_cumulative_along_the_gesture() {
    let mut session = make_session();
    session.add_frame();
    for x in [0.0, 40.0, 80.0, 400.0] {
        session.execute(EditCommand::CommitStroke(dot(x, 0.0))).unwrap();
    }
    session.set_tool(ToolKind::Eraser);
    draw(&mut session, &[(0.0, 0.0), (40.0, 0.0), (80.0, 0.0)]);
    assert_eq!(
        session.store().selected_frame().unwrap().strokes(),
        &[dot(400.0, 0.0)]
    );
}

#[test]
fn switching_back_to_pen_draws_again() {
    let mut session = make_session();
    session.set_tool(ToolKind::Eraser);
    draw(&mut session, &[(0.0, 0.0)]);
    assert!(session.store().is_empty());
    session.set_tool(ToolKind::Pen);
    draw(&mut session, &[(0.0, 0.0)]);
    assert_eq!(session.store().len(), 1);
}

// ─── Tool switch mid-gesture ────────────────────────────────────────────

#[test]
fn pen_stroke_survives_switch_to_eraser_before_release() {
    let mut session = make_session();
    session.handle_event(InputEvent::from_pointer_down(10.0, 10.0)).unwrap();
    session.handle_event(InputEvent::from_pointer_move(20.0, 20.0)).unwrap();
    session.set_tool(ToolKind::Eraser);
    let changed = session
        .handle_event(InputEvent::from_pointer_up(30.0, 30.0))
        .unwrap();

    assert!(changed);
    let frame = session.store().selected_frame().unwrap();
    assert_eq!(
        frame.strokes()[0].points(),
        &[Point::new(10.0, 10.0), Point::new(20.0, 20.0)]
    );
}

#[test]
fn eraser_released_under_pen_does_not_erase_on_hover() {
    let mut session = make_session();
    draw(&mut session, &[(100.0, 100.0)]);

    session.set_tool(ToolKind::Eraser);
    session.handle_event(InputEvent::from_pointer_down(500.0, 500.0)).unwrap();
    session.set_tool(ToolKind::Pen);
    session.handle_event(InputEvent::from_pointer_up(500.0, 500.0)).unwrap();
    session.set_tool(ToolKind::Eraser);

    let changed = session
        .handle_event(InputEvent::from_pointer_move(100.0, 100.0))
        .unwrap();
    assert!(!changed);
    assert_eq!(session.store().selected_frame().unwrap().stroke_count(), 1);
}
