//! End-to-end controller flows against a temporary config home.

use droptray::app_dirs::ConfigBaseGuard;
use droptray::egui_app::controller::{EguiController, GestureFrame};
use droptray::egui_app::ui::style::StatusTone;
use droptray::intake::FileHandle;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::TempDir;

struct TrayHarness {
    _config: ConfigBaseGuard,
    temp: TempDir,
    controller: EguiController,
}

impl TrayHarness {
    fn new() -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let config = ConfigBaseGuard::set(temp.path().join("config"));
        let mut controller = EguiController::new();
        controller
            .load_configuration()
            .expect("load default configuration");
        Self {
            _config: config,
            temp,
            controller,
        }
    }

    fn file(&self, name: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::write(&path, b"contents").expect("write fixture file");
        path
    }

    fn drop_of(&self, names: &[&str]) -> GestureFrame {
        GestureFrame {
            hovering: false,
            drop: Some(
                names
                    .iter()
                    .map(|name| FileHandle::from_path(self.file(name)))
                    .collect(),
            ),
        }
    }
}

fn hover() -> GestureFrame {
    GestureFrame {
        hovering: true,
        drop: None,
    }
}

fn staged_names(controller: &EguiController) -> Vec<String> {
    controller
        .staged()
        .iter()
        .map(|file| file.name.clone())
        .collect()
}

#[test]
fn fresh_profile_opens_tips_over_an_idle_banner() {
    let harness = TrayHarness::new();
    assert!(harness.controller.ui.hints.open);
    assert!(harness.controller.ui.hints.show_on_startup);
    assert_eq!(harness.controller.ui.status.badge_label, "Idle");
    assert!(harness.controller.ui.status.expires_at.is_none());
}

#[test]
fn drag_sequence_stages_and_then_replaces_files() {
    let mut harness = TrayHarness::new();

    harness.controller.apply_gesture_frame(hover());
    harness.controller.apply_gesture_frame(hover());
    assert!(harness.controller.zone_highlighted());

    let first = harness.drop_of(&["scan-1.png", "scan-2.png"]);
    harness.controller.apply_gesture_frame(first);
    assert!(!harness.controller.zone_highlighted());
    assert_eq!(staged_names(&harness.controller), vec!["scan-1.png", "scan-2.png"]);
    assert_eq!(harness.controller.ui.status.text, "Staged 2 files");

    let second = harness.drop_of(&["notes.txt"]);
    harness.controller.apply_gesture_frame(second);
    assert_eq!(staged_names(&harness.controller), vec!["notes.txt"]);
}

#[test]
fn picker_paths_replace_a_dropped_selection() {
    let mut harness = TrayHarness::new();
    let dropped = harness.drop_of(&["dropped.png"]);
    harness.controller.apply_gesture_frame(dropped);

    let picked = vec![harness.file("picked-1.pdf"), harness.file("picked-2.pdf")];
    harness.controller.stage_paths(picked);
    assert_eq!(
        staged_names(&harness.controller),
        vec!["picked-1.pdf", "picked-2.pdf"]
    );

    harness.controller.clear_selection();
    assert!(harness.controller.staged().is_empty());
}

#[test]
fn banners_revert_to_idle_after_their_window() {
    let mut harness = TrayHarness::new();
    harness
        .controller
        .set_status("Staged 1 file", StatusTone::Info);
    assert!(harness.controller.ui.status.expires_at.is_some());

    harness
        .controller
        .tick_status(Instant::now() + Duration::from_secs(6));
    assert_eq!(harness.controller.ui.status.badge_label, "Idle");
    assert!(harness.controller.ui.status.expires_at.is_none());
}

#[test]
fn tips_preference_survives_a_restart() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let _config = ConfigBaseGuard::set(temp.path().join("config"));

    let mut controller = EguiController::new();
    controller.load_configuration().expect("first load");
    controller.set_hints_on_startup(false);
    controller.dismiss_hints();
    drop(controller);

    let mut reopened = EguiController::new();
    reopened.load_configuration().expect("second load");
    assert!(!reopened.ui.hints.open);
    assert!(!reopened.ui.hints.show_on_startup);
}
