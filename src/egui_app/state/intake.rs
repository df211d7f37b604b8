//! Host-side bindings between the intake core and egui state.

use crate::intake::{DropZone, FileControl, FileHandle};

/// Drop-zone binding: the highlight flag read back by the renderer.
#[derive(Clone, Debug, Default)]
pub struct ZoneState {
    highlighted: bool,
}

impl ZoneState {
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

impl DropZone for ZoneState {
    fn set_highlight(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}

/// File-control binding: the staged selection rows shown in the tray.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    files: Vec<FileHandle>,
}

impl SelectionState {
    pub fn files(&self) -> &[FileHandle] {
        &self.files
    }
}

impl FileControl for SelectionState {
    fn replace_files(&mut self, files: Vec<FileHandle>) {
        self.files = files;
    }
}
