use std::rc::Rc;

use gloo_net::http::Request;
use log::{info, warn};

use crate::config;
use crate::error::FetchError;
use crate::gallery::urls::{build_url, has_image_extension, is_excluded, SizeVariant};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub filename: String,
    pub category: String,
    pub original: String,
    pub gallery: String,
    pub thumbnail: String,
    pub modal: String,
}

impl ImageDescriptor {
    /// Builds every size variant, or nothing at all when the original or
    /// gallery URL cannot be built.
    pub fn build(category: &str, filename: &str) -> Option<Self> {
        let original = build_url(category, filename, SizeVariant::Original)?;
        let gallery = build_url(category, filename, SizeVariant::Gallery)?;
        let thumbnail = build_url(category, filename, SizeVariant::Thumbnail)
            .unwrap_or_else(|| gallery.clone());
        let modal = build_url(category, filename, SizeVariant::Modal)
            .unwrap_or_else(|| original.clone());

        Some(Self {
            filename: filename.to_string(),
            category: category.to_string(),
            original,
            gallery,
            thumbnail,
            modal,
        })
    }
}

/// Images of one category in manifest order. Shared between carousels, the
/// recent-projects panel and the modal without copying.
pub type ImageList = Rc<Vec<ImageDescriptor>>;

pub fn manifest_url(category: &str, cache_token: i64) -> String {
    format!("{}/{}/manifest.txt?cache={}", config::MANIFEST_ROOT, category, cache_token)
}

/// Turns a manifest body into descriptors, one per usable line, keeping
/// line order and duplicates.
pub fn parse_manifest(category: &str, body: &str) -> Vec<ImageDescriptor> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| has_image_extension(line) && !is_excluded(line))
        .filter_map(|line| ImageDescriptor::build(category, line))
        .collect()
}

async fn fetch_manifest(category: &str) -> Result<String, FetchError> {
    let token = chrono::Utc::now().timestamp_millis();
    let response = Request::get(&manifest_url(category, token)).send().await?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    Ok(response.text().await?)
}

/// Like [`load_images`] but keeps the failure, so callers can tell an
/// empty category apart from one that could not be reached.
pub async fn try_load_images(category: &str) -> Result<ImageList, FetchError> {
    let body = fetch_manifest(category).await?;
    let images = parse_manifest(category, &body);
    info!("Loaded {} images for {}", images.len(), category);
    Ok(Rc::new(images))
}

pub async fn load_images(category: &str) -> ImageList {
    match try_load_images(category).await {
        Ok(images) => images,
        Err(e) => {
            warn!("Missing manifest for {}: {}", category, e);
            Rc::new(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(images: &[ImageDescriptor]) -> Vec<&str> {
        images.iter().map(|i| i.filename.as_str()).collect()
    }

    #[test]
    fn mixed_manifest_keeps_images_in_order() {
        let images = parse_manifest("roofing", "a.jpg\nb.mp4\nmanifest.txt\nc.PNG\n\n");
        assert_eq!(names(&images), vec!["a.jpg", "c.PNG"]);
        assert!(images.iter().all(|i| i.category == "roofing"));
    }

    #[test]
    fn whitespace_and_blank_lines_are_dropped() {
        let images = parse_manifest("painting", "  one.jpg  \r\n\r\n\t\ntwo.webp\n   \n");
        assert_eq!(names(&images), vec!["one.jpg", "two.webp"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let images = parse_manifest("awnings", "x.jpg\nx.jpg\n");
        assert_eq!(images.len(), 2);
        assert_eq!(images[0], images[1]);
    }

    #[test]
    fn non_images_are_skipped() {
        let images = parse_manifest("building", "readme.md\nplan.pdf\nwall.gif\nclip.MOV\n");
        assert_eq!(names(&images), vec!["wall.gif"]);
    }

    #[test]
    fn descriptor_carries_all_variants() {
        let d = ImageDescriptor::build("renovations", "kitchen.jpg").unwrap();
        assert_eq!(d.original, build_url("renovations", "kitchen.jpg", SizeVariant::Original).unwrap());
        assert_eq!(d.gallery, build_url("renovations", "kitchen.jpg", SizeVariant::Gallery).unwrap());
        assert_eq!(d.thumbnail, build_url("renovations", "kitchen.jpg", SizeVariant::Thumbnail).unwrap());
        assert_eq!(d.modal, build_url("renovations", "kitchen.jpg", SizeVariant::Modal).unwrap());
    }

    #[test]
    fn unbuildable_descriptor_is_dropped() {
        assert_eq!(ImageDescriptor::build("roofing", "tour.mp4"), None);
        assert_eq!(ImageDescriptor::build("roofing", "  "), None);
    }

    #[test]
    fn manifest_url_carries_cache_token() {
        assert_eq!(manifest_url("roofing", 42), "/assets/roofing/manifest.txt?cache=42");
    }
}
