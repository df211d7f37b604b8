use super::status::BANNER_VISIBLE;
use super::test_support::*;
use super::*;
use crate::app_dirs::ConfigBaseGuard;
use crate::config;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn hover_highlights_the_zone() {
    let mut controller = controller();
    controller.apply_gesture_frame(hover_frame());
    assert!(controller.zone_highlighted());
    controller.apply_gesture_frame(hover_frame());
    assert!(controller.zone_highlighted());
}

#[test]
fn unhover_without_a_drop_clears_the_highlight() {
    let mut controller = controller();
    controller.apply_gesture_frame(hover_frame());
    controller.apply_gesture_frame(idle_frame());
    assert!(!controller.zone_highlighted());
}

#[test]
fn drop_stages_files_and_reports() {
    let mut controller = controller();
    controller.apply_gesture_frame(hover_frame());
    controller.apply_gesture_frame(drop_frame(&["a.png", "b.png"]));
    assert!(!controller.zone_highlighted());
    let names: Vec<_> = controller.staged().iter().map(|f| f.name.clone()).collect();
    assert_eq!(names, vec!["a.png", "b.png"]);
    assert_eq!(controller.ui.status.badge_label, "Info");
    assert_eq!(controller.ui.status.text, "Staged 2 files");
}

#[test]
fn second_drop_replaces_the_first() {
    let mut controller = controller();
    controller.apply_gesture_frame(drop_frame(&["a.png"]));
    controller.apply_gesture_frame(drop_frame(&["b.png"]));
    let names: Vec<_> = controller.staged().iter().map(|f| f.name.clone()).collect();
    assert_eq!(names, vec!["b.png"]);
    assert_eq!(controller.ui.status.text, "Staged 1 file");
}

#[test]
fn empty_drop_keeps_the_selection_and_warns() {
    let mut controller = controller();
    controller.apply_gesture_frame(drop_frame(&["keep.png"]));
    controller.apply_gesture_frame(drop_frame(&[]));
    let names: Vec<_> = controller.staged().iter().map(|f| f.name.clone()).collect();
    assert_eq!(names, vec!["keep.png"]);
    assert_eq!(controller.ui.status.badge_label, "Warning");
}

#[test]
fn detached_controller_ignores_gestures() {
    let mut controller = detached_controller();
    controller.apply_gesture_frame(hover_frame());
    assert!(!controller.zone_highlighted());
    controller.apply_gesture_frame(drop_frame(&["a.png"]));
    assert!(controller.staged().is_empty());
    assert_eq!(controller.ui.status, crate::egui_app::state::StatusBarState::idle());
}

#[test]
fn stage_paths_replaces_and_remembers_the_directory() {
    let base = tempdir().unwrap();
    let _guard = ConfigBaseGuard::set(base.path().to_path_buf());
    let picked = base.path().join("picked");
    std::fs::create_dir_all(&picked).unwrap();
    let first = picked.join("one.txt");
    let second = picked.join("two.txt");
    std::fs::write(&first, b"1").unwrap();
    std::fs::write(&second, b"2").unwrap();

    let mut controller = controller();
    controller.apply_gesture_frame(drop_frame(&["stale.png"]));
    controller.stage_paths(vec![first.clone(), second.clone()]);

    let names: Vec<_> = controller.staged().iter().map(|f| f.name.clone()).collect();
    assert_eq!(names, vec!["one.txt", "two.txt"]);
    assert_eq!(controller.staged()[0].path.as_deref(), Some(first.as_path()));

    let persisted = config::load_or_default().unwrap();
    assert_eq!(persisted.last_browse_dir, Some(picked));
}

#[test]
fn staging_no_paths_changes_nothing() {
    let mut controller = controller();
    controller.apply_gesture_frame(drop_frame(&["keep.png"]));
    controller.stage_paths(Vec::new());
    assert_eq!(controller.staged_len(), 1);
}

#[test]
fn clear_selection_empties_and_reports() {
    let mut controller = controller();
    controller.apply_gesture_frame(drop_frame(&["a.png"]));
    controller.clear_selection();
    assert!(controller.staged().is_empty());
    assert_eq!(controller.ui.status.text, "Selection cleared");
}

#[test]
fn reveal_without_a_path_warns() {
    let mut controller = controller();
    controller.apply_gesture_frame(drop_frame(&["remote.png"]));
    controller.reveal_staged(0);
    assert_eq!(controller.ui.status.badge_label, "Warning");
}

#[test]
fn status_banner_expires_after_the_visible_window() {
    let mut controller = controller();
    let shown = Instant::now();
    controller.set_status_at("Staged 1 file", StatusTone::Info, shown);

    controller.tick_status(shown + BANNER_VISIBLE - Duration::from_millis(1));
    assert_eq!(controller.ui.status.text, "Staged 1 file");

    controller.tick_status(shown + BANNER_VISIBLE);
    assert_eq!(
        controller.ui.status,
        crate::egui_app::state::StatusBarState::idle()
    );
}

#[test]
fn idle_banner_never_expires() {
    let mut controller = controller();
    let idle = controller.ui.status.clone();
    controller.tick_status(Instant::now() + Duration::from_secs(3600));
    assert_eq!(controller.ui.status, idle);
}

#[test]
fn hint_preference_persists() {
    let base = tempdir().unwrap();
    let _guard = ConfigBaseGuard::set(base.path().to_path_buf());

    let mut controller = controller();
    controller.load_configuration().unwrap();
    assert!(controller.ui.hints.open);

    controller.set_hints_on_startup(false);
    controller.dismiss_hints();

    let mut fresh = EguiController::new();
    fresh.load_configuration().unwrap();
    assert!(!fresh.ui.hints.open);
    assert!(!fresh.ui.hints.show_on_startup);
}
