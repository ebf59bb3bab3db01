//! Display URLs for manifest images.
//!
//! Every image lives on the asset host as
//! `host/folder/<transform>/<category>/<filename>`; the transform segment
//! picks the crop and size and is omitted for the untouched original.
//! [`build_url`] is the one place that decides a filename is not an image
//! we can show.

use crate::config;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "wmv", "flv"];
const MANIFEST_FILE: &str = "manifest.txt";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeVariant {
    Original,
    Gallery,
    Thumbnail,
    Modal,
}

impl SizeVariant {
    pub const ALL: [SizeVariant; 4] = [
        SizeVariant::Original,
        SizeVariant::Gallery,
        SizeVariant::Thumbnail,
        SizeVariant::Modal,
    ];

    pub fn transform(self) -> &'static str {
        match self {
            SizeVariant::Original => "",
            SizeVariant::Gallery => config::GALLERY_TRANSFORM,
            SizeVariant::Thumbnail => config::THUMBNAIL_TRANSFORM,
            SizeVariant::Modal => config::MODAL_TRANSFORM,
        }
    }
}

// Lowercased text after the last dot of the final path segment
fn extension(filename: &str) -> Option<String> {
    let name = filename.rsplit('/').next().unwrap_or(filename);
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// True for names that must never be displayed: the manifest itself and
/// video files. Both checks are anchored on the end of the name, so
/// `final-manifest.txt.jpg` is still an image.
pub fn is_excluded(filename: &str) -> bool {
    let name = filename.rsplit('/').next().unwrap_or(filename);
    if name.eq_ignore_ascii_case(MANIFEST_FILE) {
        return true;
    }
    match extension(name) {
        Some(ext) => VIDEO_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}

pub fn has_image_extension(filename: &str) -> bool {
    match extension(filename) {
        Some(ext) => IMAGE_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}

pub fn build_url(category: &str, filename: &str, size: SizeVariant) -> Option<String> {
    let filename = filename.trim();
    if filename.is_empty() || category.is_empty() || is_excluded(filename) {
        return None;
    }

    let encoded = urlencoding::encode(filename);
    let url = match size.transform() {
        "" => format!("{}/{}/{}/{}", config::ASSET_HOST, config::ASSET_FOLDER, category, encoded),
        transform => format!(
            "{}/{}/{}/{}/{}",
            config::ASSET_HOST,
            config::ASSET_FOLDER,
            transform,
            category,
            encoded
        ),
    };
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn videos_and_manifest_never_build() {
        for name in ["clip.mp4", "CLIP.MOV", "walk.avi", "old.wmv", "x.flv", "manifest.txt", "Manifest.TXT"] {
            for size in SizeVariant::ALL {
                assert_eq!(build_url("roofing", name, size), None, "{} / {:?}", name, size);
            }
        }
    }

    #[test]
    fn exclusion_is_anchored_to_the_end() {
        assert!(!is_excluded("final-manifest.txt.jpg"));
        assert!(!is_excluded("mp4-roof.jpg"));
        assert!(is_excluded("nested/manifest.txt"));
        assert!(build_url("roofing", "final-manifest.txt.jpg", SizeVariant::Gallery).is_some());
    }

    #[test]
    fn original_has_no_transform_segment() {
        let url = build_url("roofing", "a.jpg", SizeVariant::Original).unwrap();
        assert_eq!(url, format!("{}/{}/roofing/a.jpg", config::ASSET_HOST, config::ASSET_FOLDER));
    }

    #[test]
    fn sized_variants_insert_their_transform() {
        let url = build_url("painting", "b.png", SizeVariant::Thumbnail).unwrap();
        assert_eq!(
            url,
            format!(
                "{}/{}/{}/painting/b.png",
                config::ASSET_HOST,
                config::ASSET_FOLDER,
                config::THUMBNAIL_TRANSFORM
            )
        );
        assert_ne!(
            build_url("painting", "b.png", SizeVariant::Gallery),
            build_url("painting", "b.png", SizeVariant::Modal)
        );
    }

    #[test]
    fn filenames_are_escaped() {
        let url = build_url("building", "front view #2.jpg", SizeVariant::Original).unwrap();
        assert!(url.ends_with("/building/front%20view%20%232.jpg"));
    }

    #[test]
    fn image_extension_check_ignores_case() {
        assert!(has_image_extension("c.PNG"));
        assert!(has_image_extension("d.JpEg"));
        assert!(!has_image_extension("notes.txt"));
        assert!(!has_image_extension("noext"));
        assert!(!has_image_extension("trailing."));
    }
}
