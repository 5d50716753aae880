//! Tagging Port: OS-level color labels.
//!
//! Labels are applied at the file's original path, before the move, because
//! the labeling mechanism addresses files by path. On macOS this shells out
//! to Finder via `osascript`; on every other platform the port is a no-op
//! stub. Tests inject their own fake.

use std::path::Path;

use super::error::TagError;

/// The two label colors the sorter hands out, carrying Finder label
/// indices: yellow (3) for white-background images, green (6) for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Yellow,
    Green,
}

impl Label {
    /// Finder "label index" value for this color.
    pub fn finder_index(self) -> u8 {
        match self {
            Label::Yellow => 3,
            Label::Green => 6,
        }
    }
}

/// Capability for attaching a colored label to a file in place.
pub trait Tagger {
    fn apply_label(&self, path: &Path, label: Label) -> Result<(), TagError>;
}

/// The production port: Finder labels through AppleScript.
#[derive(Debug, Default)]
pub struct FinderTagger;

impl Tagger for FinderTagger {
    #[cfg(target_os = "macos")]
    fn apply_label(&self, path: &Path, label: Label) -> Result<(), TagError> {
        let script = format!(
            "tell application \"Finder\" to set label index of (POSIX file \"{}\" as alias) to {}",
            path.display(),
            label.finder_index()
        );

        let status = std::process::Command::new("osascript")
            .arg("-e")
            .arg(script)
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(TagError::CommandFailed(status))
        }
    }

    #[cfg(not(target_os = "macos"))]
    fn apply_label(&self, path: &Path, label: Label) -> Result<(), TagError> {
        // No Finder label equivalent here; files keep moving untagged.
        tracing::debug!(
            path = %path.display(),
            ?label,
            "labeling is a no-op on this platform"
        );
        Ok(())
    }
}

/// A tagger that does nothing, for callers that want the sorting without
/// the labels.
#[derive(Debug, Default)]
pub struct NoopTagger;

impl Tagger for NoopTagger {
    fn apply_label(&self, _path: &Path, _label: Label) -> Result<(), TagError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finder_indices_match_finder_semantics() {
        assert_eq!(Label::Yellow.finder_index(), 3);
        assert_eq!(Label::Green.finder_index(), 6);
    }

    #[test]
    fn noop_tagger_always_succeeds() {
        let tagger = NoopTagger;
        assert!(tagger.apply_label(Path::new("/nonexistent"), Label::Green).is_ok());
    }
}
