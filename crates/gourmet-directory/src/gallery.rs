//! Per-store photo gallery documents.
//!
//! A gallery lists its photos as `<photoSlide><items><item>` elements; a store
//! with one photo has a single `<item>`, others have several. Both shapes
//! decode into the same ordered `Vec` here.

use serde::Deserialize;

/// Outcome of fetching a store's photo gallery.
///
/// Galleries are best-effort: an `Unavailable` gallery contributes no images
/// and never fails the surrounding search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoGallery {
    Loaded(Vec<String>),
    Unavailable { reason: String },
}

impl PhotoGallery {
    /// Image URLs in gallery order; empty when the gallery was unavailable.
    #[must_use]
    pub fn into_images(self, store_id: &str) -> Vec<String> {
        match self {
            PhotoGallery::Loaded(images) => images,
            PhotoGallery::Unavailable { reason } => {
                tracing::warn!(store_id, reason = %reason, "photo gallery unavailable, using no images");
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawPhotoSlide {
    #[serde(default)]
    items: Option<RawItems>,
}

#[derive(Debug, Default, Deserialize)]
struct RawItems {
    #[serde(default, rename = "item")]
    item: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    photo: Option<String>,
}

/// Decodes a gallery document into photo URLs, in document order.
///
/// Items without a `<photo>` are skipped.
pub(crate) fn parse_gallery(xml: &str) -> Result<Vec<String>, quick_xml::DeError> {
    let slide: RawPhotoSlide = quick_xml::de::from_str(xml)?;
    let items = slide.items.unwrap_or_default().item;

    Ok(items
        .into_iter()
        .filter_map(|item| item.photo)
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect())
}

/// Path segment pair `{last two chars of id}/{id}.xml` used by the gallery host.
pub(crate) fn gallery_path(store_id: &str) -> String {
    let char_count = store_id.chars().count();
    let suffix: String = store_id.chars().skip(char_count.saturating_sub(2)).collect();
    format!("{suffix}/{store_id}.xml")
}
