use crate::{ClipboardBackend, ClipboardError};

/// The operating system clipboard.
///
/// A fresh `arboard::Clipboard` is opened for each write so the handle is
/// never held across calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    fn open() -> Result<arboard::Clipboard, ClipboardError> {
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

impl ClipboardBackend for SystemClipboard {
    fn write_rich(&mut self, html: &str, plain: &str) -> Result<(), ClipboardError> {
        Self::open()?
            .set_html(html, Some(plain))
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        Self::open()?
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
