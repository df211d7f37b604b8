//! Drag-and-drop intake core.
//!
//! Translates the four drag gesture phases delivered by a host environment
//! into a staged file selection with visual feedback on the drop zone. The
//! module is toolkit-free: hosts bind a drop-zone handle and a file-control
//! handle at initialization and feed per-event views through [`IntakeWidget::handle`],
//! so the same widget runs under the egui renderer and under a test harness.

/// Gesture phases and the per-event view contract.
pub mod gesture;

pub use gesture::{GestureEvent, GesturePhase};

use std::path::PathBuf;

/// Opaque file reference carried by a drop or a dialog pick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileHandle {
    /// Display name reported by the host.
    pub name: String,
    /// Filesystem location, when the host provides one.
    pub path: Option<PathBuf>,
}

impl FileHandle {
    /// Build a handle from a filesystem path, deriving the display name
    /// from the final component.
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            path: Some(path),
        }
    }
}

/// Visual state of the drop zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZoneVisual {
    /// No drag is over the zone.
    #[default]
    Idle,
    /// A drag is currently over the zone.
    Highlighted,
}

/// Handle over the region that accepts drags.
pub trait DropZone {
    /// Apply or remove the highlight. Repeat calls with the current value
    /// must be tolerated.
    fn set_highlight(&mut self, highlighted: bool);
}

/// Handle over the control holding the staged file set.
pub trait FileControl {
    /// Overwrite the staged set wholesale. Never merges with the previous
    /// contents.
    fn replace_files(&mut self, files: Vec<FileHandle>);
}

/// The intake widget: four gesture phases in, highlight and staged files
/// out.
///
/// Holds its two handles for the host's lifetime. Every effect of a
/// [`handle`](IntakeWidget::handle) call completes before it returns; the
/// widget owns no timers and spawns nothing.
pub struct IntakeWidget<Z, C> {
    zone: Z,
    control: C,
    visual: ZoneVisual,
}

impl<Z: DropZone, C: FileControl> IntakeWidget<Z, C> {
    /// Bind the widget to its zone and control.
    ///
    /// Returns `None` when either handle is missing. The surrounding host
    /// may legitimately omit the widget, so a missing handle means quiet
    /// inactivity rather than an error.
    pub fn initialize(zone: Option<Z>, control: Option<C>) -> Option<Self> {
        let (Some(zone), Some(control)) = (zone, control) else {
            return None;
        };
        Some(Self {
            zone,
            control,
            visual: ZoneVisual::Idle,
        })
    }

    /// Current position of the two-state highlight machine.
    pub fn visual(&self) -> ZoneVisual {
        self.visual
    }

    /// Borrow the bound zone handle.
    pub fn zone(&self) -> &Z {
        &self.zone
    }

    /// Borrow the bound file control.
    pub fn control(&self) -> &C {
        &self.control
    }

    /// Mutable access to the file control, for host affordances (dialog
    /// picks, clearing) that share the wholesale-replacement contract.
    pub fn control_mut(&mut self) -> &mut C {
        &mut self.control
    }

    /// Process one gesture event.
    ///
    /// The host default action and propagation are cancelled first, for
    /// every phase, before any other effect. Enter and over highlight the
    /// zone; leave and drop clear it; a drop carrying at least one file
    /// replaces the control's set. An empty drop leaves the previous
    /// selection in place.
    pub fn handle(&mut self, event: &mut dyn GestureEvent) {
        event.suppress_default();
        event.stop_propagation();
        match event.phase() {
            GesturePhase::Enter | GesturePhase::Over => self.set_visual(ZoneVisual::Highlighted),
            GesturePhase::Leave => self.set_visual(ZoneVisual::Idle),
            GesturePhase::Drop => {
                self.set_visual(ZoneVisual::Idle);
                let files = event.take_files();
                if !files.is_empty() {
                    self.control.replace_files(files);
                }
            }
        }
    }

    fn set_visual(&mut self, visual: ZoneVisual) {
        if self.visual == visual {
            return;
        }
        self.visual = visual;
        self.zone.set_highlight(visual == ZoneVisual::Highlighted);
    }
}
