use super::*;
use crate::intake::FileControl;
use std::path::{Path, PathBuf};
use tracing::info;

impl EguiController {
    /// Pick files with the native dialog; a confirmed pick replaces the
    /// staged selection, matching the drop contract. Cancel is a no-op.
    pub fn browse_for_files(&mut self) {
        let mut dialog = rfd::FileDialog::new().set_title("Stage files");
        if let Some(dir) = self
            .settings
            .last_browse_dir
            .as_ref()
            .filter(|dir| dir.is_dir())
        {
            dialog = dialog.set_directory(dir);
        }
        let Some(paths) = dialog.pick_files() else {
            return;
        };
        self.stage_paths(paths);
    }

    /// Replace the staged selection with the given paths.
    ///
    /// The browse dialog funnels here; hosts embedding the controller can
    /// feed paths from elsewhere (a CLI invocation, a paste) and get the
    /// same wholesale-replacement semantics.
    pub fn stage_paths(&mut self, paths: Vec<PathBuf>) {
        if paths.is_empty() {
            return;
        }
        if let Some(dir) = paths.first().and_then(|path| path.parent()) {
            self.settings.last_browse_dir = Some(dir.to_path_buf());
        }
        let files: Vec<FileHandle> = paths.into_iter().map(FileHandle::from_path).collect();
        let count = files.len();
        let Some(intake) = self.intake.as_mut() else {
            return;
        };
        intake.control_mut().replace_files(files);
        info!(count, "staged files from picker");
        self.set_status(intake::staged_message(count), StatusTone::Info);
        self.persist_config("Failed to save the browse directory");
    }

    /// Empty the staged selection.
    pub fn clear_selection(&mut self) {
        let Some(intake) = self.intake.as_mut() else {
            return;
        };
        if intake.control().files().is_empty() {
            return;
        }
        intake.control_mut().replace_files(Vec::new());
        self.set_status("Selection cleared", StatusTone::Info);
    }

    /// Open the staged file's folder in the OS file manager.
    pub fn reveal_staged(&mut self, index: usize) {
        let Some(path) = self
            .staged()
            .get(index)
            .and_then(|file| file.path.clone())
        else {
            self.set_status("No local path for that file", StatusTone::Warning);
            return;
        };
        if let Err(err) = reveal_in_file_explorer(&path) {
            self.set_status(err, StatusTone::Error);
        }
    }
}

fn reveal_in_file_explorer(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()));
    }
    #[cfg(target_os = "windows")]
    {
        let quoted = format!("/select,\"{}\"", path.display());
        let status = std::process::Command::new("explorer.exe")
            .arg(quoted)
            .status()
            .map_err(|err| format!("Failed to launch explorer: {err}"))?;
        if status.success() {
            return Ok(());
        }
        Err(format!(
            "Explorer exited unsuccessfully for {}",
            path.display()
        ))
    }
    #[cfg(target_os = "macos")]
    {
        let status = std::process::Command::new("open")
            .arg("-R")
            .arg(path)
            .status()
            .map_err(|err| format!("Failed to launch Finder: {err}"))?;
        if status.success() {
            return Ok(());
        }
        Err(format!("Finder exited unsuccessfully for {}", path.display()))
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        let parent = path
            .parent()
            .ok_or_else(|| "Unable to resolve parent directory".to_string())?;
        open::that(parent)
            .map_err(|err| format!("Could not open folder {}: {err}", parent.display()))
    }
}
