use super::SecantApp;
use crate::report;
use anyhow::{Context as _, anyhow};
use arboard::{Clipboard, Error as ClipboardError};

impl SecantApp {
    pub(crate) fn copy_text_report(&mut self) {
        let text = report::text_report(&self.session);
        match write_clipboard(text) {
            Ok(()) => self.set_status("Report copied."),
            Err(err) => self.report_copy_failure(&err),
        }
    }

    pub(crate) fn copy_json_report(&mut self) {
        match report::json_report(&self.session).and_then(write_clipboard) {
            Ok(()) => self.set_status("JSON report copied."),
            Err(err) => self.report_copy_failure(&err),
        }
    }

    fn report_copy_failure(&mut self, err: &anyhow::Error) {
        log::warn!("clipboard copy failed: {err:#}");
        self.set_status(format!("Copy failed: {err:#}"));
    }
}

fn write_clipboard(text: String) -> anyhow::Result<()> {
    let mut clipboard = Clipboard::new().map_err(clipboard_error)?;
    clipboard
        .set_text(text)
        .map_err(clipboard_error)
        .context("write report to clipboard")
}

fn clipboard_error(err: ClipboardError) -> anyhow::Error {
    match err {
        ClipboardError::ClipboardNotSupported => {
            anyhow!("clipboard access is not supported in this environment")
        }
        ClipboardError::ClipboardOccupied => anyhow!("clipboard is busy; try again in a moment"),
        other => anyhow::Error::new(other),
    }
}
