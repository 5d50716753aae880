//! Filename grouping and round-robin assignment.
//!
//! Files are clustered by an identifier taken from the start of the filename
//! (multiple shots of the same product share a prefix) so that a whole
//! cluster always lands with a single designer.

use std::collections::HashMap;
use std::path::Path;

/// Extensions the sorter will touch. Everything else in the source folder
/// is left alone.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "gif", "tiff"];

/// Number of leading characters that form a file's group identifier.
pub const IDENTIFIER_LEN: usize = 13;

/// A cluster of filenames sharing one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    pub identifier: String,
    pub filenames: Vec<String>,
}

/// Check whether a filename has one of the supported image extensions
/// (case-insensitive).
pub fn is_supported_image(filename: &str) -> bool {
    match Path::new(filename).extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// Check for one specific extension (case-insensitive). Used for the PNG
/// labeling exemption.
pub fn has_extension(filename: &str, wanted: &str) -> bool {
    Path::new(filename)
        .extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

/// The group identifier: the first 13 characters of the filename, or the
/// whole filename if shorter. Character-based, case-sensitive, no
/// normalization.
pub fn group_identifier(filename: &str) -> String {
    filename.chars().take(IDENTIFIER_LEN).collect()
}

/// Build groups from a stream of filenames, preserving the first-seen order
/// of identifiers. The input order is whatever the directory listing gave
/// us; it is deliberately not sorted.
pub fn build_groups<I>(filenames: I) -> Vec<FileGroup>
where
    I: IntoIterator<Item = String>,
{
    let mut groups: Vec<FileGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for filename in filenames {
        let identifier = group_identifier(&filename);
        match index.get(&identifier) {
            Some(&i) => groups[i].filenames.push(filename),
            None => {
                index.insert(identifier.clone(), groups.len());
                groups.push(FileGroup {
                    identifier,
                    filenames: vec![filename],
                });
            }
        }
    }

    groups
}

/// The 1-based designer folder number for the i-th group (0-indexed).
/// Round-robin: cyclic by group index, so group count is balanced across
/// designers even though file count may not be.
pub fn designer_for_group(group_index: usize, designers: usize) -> usize {
    (group_index % designers) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_filter_is_case_insensitive() {
        assert!(is_supported_image("shot.JPG"));
        assert!(is_supported_image("shot.png"));
        assert!(is_supported_image("shot.Tiff"));
        assert!(!is_supported_image("shot.tif"));
        assert!(!is_supported_image("notes.txt"));
        assert!(!is_supported_image("no_extension"));
    }

    #[test]
    fn identifier_is_first_13_characters() {
        assert_eq!(group_identifier("IMG0000000000011.png"), "IMG0000000000");
        assert_eq!(group_identifier("short.png"), "short.png");
    }

    #[test]
    fn grouping_preserves_first_seen_order() {
        let names = vec![
            "BBBBBBBBBBBBB_front.jpg".to_string(),
            "AAAAAAAAAAAAA_front.jpg".to_string(),
            "BBBBBBBBBBBBB_back.jpg".to_string(),
        ];
        let groups = build_groups(names);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].identifier, "BBBBBBBBBBBBB");
        assert_eq!(
            groups[0].filenames,
            vec!["BBBBBBBBBBBBB_front.jpg", "BBBBBBBBBBBBB_back.jpg"]
        );
        assert_eq!(groups[1].identifier, "AAAAAAAAAAAAA");
        assert_eq!(groups[1].filenames, vec!["AAAAAAAAAAAAA_front.jpg"]);
    }

    #[test]
    fn short_names_group_by_whole_name() {
        let names = vec!["a.png".to_string(), "a.png".to_string(), "b.png".to_string()];
        let groups = build_groups(names);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].filenames.len(), 2);
    }

    #[test]
    fn round_robin_routing() {
        // Group i goes to designer (i mod N) + 1
        assert_eq!(designer_for_group(0, 3), 1);
        assert_eq!(designer_for_group(1, 3), 2);
        assert_eq!(designer_for_group(2, 3), 3);
        assert_eq!(designer_for_group(3, 3), 1);
        assert_eq!(designer_for_group(7, 1), 1);
    }
}
