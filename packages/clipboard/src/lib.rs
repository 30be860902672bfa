//! Copying generated signatures to the clipboard.
//!
//! A copy is one rich write (`text/html` plus a tag-stripped `text/plain`
//! alternative) and, if that fails, one plain-text write of the raw HTML.
//! The outcome is a plain success flag; there are no retries.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

#[cfg(feature = "system")]
mod system;

#[cfg(feature = "system")]
pub use system::SystemClipboard;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// A clipboard that can hold rich and plain text.
pub trait ClipboardBackend {
    /// Write `html` with `plain` as its plain-text alternative.
    fn write_rich(&mut self, html: &str, plain: &str) -> Result<(), ClipboardError>;

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Remove everything that looks like a tag. Entities are left as-is.
pub fn strip_html_tags(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

/// Copy `html` as rich text, falling back to writing the raw markup as
/// plain text. Returns whether either write succeeded.
pub fn copy_html<B: ClipboardBackend + ?Sized>(backend: &mut B, html: &str) -> bool {
    let plain = strip_html_tags(html);

    match backend.write_rich(html, &plain) {
        Ok(()) => {
            tracing::debug!(bytes = html.len(), "copied signature as rich text");
            true
        }
        Err(rich_err) => {
            tracing::debug!(error = %rich_err, "rich copy failed, falling back to plain text");
            match backend.write_text(html) {
                Ok(()) => true,
                Err(text_err) => {
                    tracing::warn!(error = %text_err, "failed to copy signature");
                    false
                }
            }
        }
    }
}

/// [`copy_html`] on a blocking worker thread, for async callers.
#[cfg(feature = "async")]
pub async fn copy_html_to_clipboard<B>(mut backend: B, html: String) -> bool
where
    B: ClipboardBackend + Send + 'static,
{
    tokio::task::spawn_blocking(move || copy_html(&mut backend, &html))
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "clipboard task failed");
            false
        })
}
