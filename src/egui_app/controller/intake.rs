use super::*;
use crate::intake::{GestureEvent, GesturePhase};
use tracing::{debug, info, warn};

/// One frame's worth of host drag input over the drop zone.
#[derive(Clone, Debug, Default)]
pub struct GestureFrame {
    /// Files are in flight above the zone this frame.
    pub hovering: bool,
    /// A release happened over the zone this frame, with the usable
    /// payload it carried. `Some(vec![])` is a drop that carried nothing
    /// stageable.
    pub drop: Option<Vec<FileHandle>>,
}

/// Per-event view handed to the intake widget by the egui host.
///
/// eframe's native glue already owns the OS-level drop, so no navigation
/// default is left to run; cancellation latches flags that dispatch
/// asserts after each event.
struct FrameGesture {
    phase: GesturePhase,
    files: Vec<FileHandle>,
    default_suppressed: bool,
    propagation_stopped: bool,
}

impl FrameGesture {
    fn new(phase: GesturePhase, files: Vec<FileHandle>) -> Self {
        Self {
            phase,
            files,
            default_suppressed: false,
            propagation_stopped: false,
        }
    }
}

impl GestureEvent for FrameGesture {
    fn phase(&self) -> GesturePhase {
        self.phase
    }

    fn suppress_default(&mut self) {
        self.default_suppressed = true;
    }

    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    fn take_files(&mut self) -> Vec<FileHandle> {
        std::mem::take(&mut self.files)
    }
}

fn phases_for(was_hovering: bool, frame: &GestureFrame) -> Vec<GesturePhase> {
    let mut phases = Vec::with_capacity(2);
    if frame.hovering {
        phases.push(if was_hovering {
            GesturePhase::Over
        } else {
            GesturePhase::Enter
        });
    } else if was_hovering && frame.drop.is_none() {
        phases.push(GesturePhase::Leave);
    }
    if frame.drop.is_some() {
        phases.push(GesturePhase::Drop);
    }
    phases
}

impl EguiController {
    /// Feed one frame of drag input through the intake widget.
    pub fn apply_gesture_frame(&mut self, frame: GestureFrame) {
        let was_hovering = self.hover_latch;
        self.hover_latch = frame.hovering;
        let Some(intake) = self.intake.as_mut() else {
            return;
        };

        let phases = phases_for(was_hovering, &frame);
        if phases.is_empty() {
            return;
        }

        let mut payload = frame.drop;
        let drop_size = payload.as_ref().map(Vec::len);
        for phase in phases {
            let files = match phase {
                GesturePhase::Drop => payload.take().unwrap_or_default(),
                _ => Vec::new(),
            };
            let mut event = FrameGesture::new(phase, files);
            intake.handle(&mut event);
            debug_assert!(event.default_suppressed && event.propagation_stopped);
            debug!(?phase, "intake gesture handled");
        }

        match drop_size {
            Some(0) => {
                warn!("drop carried no stageable files");
                self.set_status(
                    "That drop carried no files; selection kept",
                    StatusTone::Warning,
                );
            }
            Some(count) => {
                info!(count, "staged files from drop");
                self.set_status(staged_message(count), StatusTone::Info);
            }
            None => {}
        }
    }
}

pub(super) fn staged_message(count: usize) -> String {
    if count == 1 {
        "Staged 1 file".to_string()
    } else {
        format!("Staged {count} files")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(hovering: bool, drop: Option<Vec<FileHandle>>) -> GestureFrame {
        GestureFrame { hovering, drop }
    }

    #[test]
    fn hover_transitions_map_to_enter_over_leave() {
        use GesturePhase::*;
        assert_eq!(phases_for(false, &frame(true, None)), vec![Enter]);
        assert_eq!(phases_for(true, &frame(true, None)), vec![Over]);
        assert_eq!(phases_for(true, &frame(false, None)), vec![Leave]);
        assert!(phases_for(false, &frame(false, None)).is_empty());
    }

    #[test]
    fn release_maps_to_drop_without_a_leave() {
        use GesturePhase::*;
        assert_eq!(
            phases_for(true, &frame(false, Some(Vec::new()))),
            vec![Drop]
        );
        assert_eq!(
            phases_for(false, &frame(false, Some(Vec::new()))),
            vec![Drop]
        );
    }

    #[test]
    fn same_frame_hover_and_release_keeps_both_phases() {
        use GesturePhase::*;
        assert_eq!(
            phases_for(false, &frame(true, Some(Vec::new()))),
            vec![Enter, Drop]
        );
        assert_eq!(
            phases_for(true, &frame(true, Some(Vec::new()))),
            vec![Over, Drop]
        );
    }
}
