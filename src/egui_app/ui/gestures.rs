use super::EguiApp;
use crate::egui_app::controller::GestureFrame;
use crate::intake::FileHandle;
use eframe::egui;

impl EguiApp {
    /// Assemble this frame's drag input over the drop zone.
    ///
    /// egui reports drags as per-frame snapshots rather than discrete
    /// events, and some platforms stop reporting the pointer position while
    /// an OS drag is in flight. A missing position therefore counts as
    /// over the zone, and the armed latch keeps a positionless release
    /// attributable to the zone it last hovered.
    pub(super) fn collect_gesture_frame(&mut self, ctx: &egui::Context) -> GestureFrame {
        let Some(rect) = self.zone_rect else {
            return GestureFrame::default();
        };

        let hovering = ctx.input(|i| {
            let files_in_flight = i.raw.hovered_files.iter().any(|file| file.path.is_some());
            if !files_in_flight {
                return false;
            }
            i.pointer
                .hover_pos()
                .or_else(|| i.pointer.interact_pos())
                .is_none_or(|pos| rect.contains(pos))
        });
        if hovering {
            self.zone_drop_armed = true;
        } else if ctx.input(|i| {
            i.pointer
                .hover_pos()
                .or_else(|| i.pointer.interact_pos())
                .is_some_and(|pos| !rect.contains(pos))
        }) {
            self.zone_drop_armed = false;
        }

        let raw_drops = ctx.input(|i| i.raw.dropped_files.clone());
        if raw_drops.is_empty() || !(hovering || self.zone_drop_armed) {
            return GestureFrame {
                hovering,
                drop: None,
            };
        }
        self.zone_drop_armed = false;
        let drop = raw_drops
            .into_iter()
            .filter_map(file_handle_from_drop)
            .collect();
        GestureFrame {
            hovering,
            drop: Some(drop),
        }
    }
}

fn file_handle_from_drop(file: egui::DroppedFile) -> Option<FileHandle> {
    if let Some(path) = file.path {
        return Some(FileHandle::from_path(path));
    }
    if !file.name.is_empty() {
        return Some(FileHandle {
            name: file.name,
            path: None,
        });
    }
    None
}
