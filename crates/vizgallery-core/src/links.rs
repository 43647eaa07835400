//! Derived asset paths and URLs for a figure.
//!
//! All of these are pure functions of the configuration and the item's file
//! name, so a link copied today resolves to the same figure tomorrow.

use crate::catalog::FigureItem;
use crate::config::GalleryConfig;

const FIGURE_PARAM: &str = "figure";

/// Relative image source (`svgs/boxplot.svg`).
pub fn asset_path(config: &GalleryConfig, item: &FigureItem) -> String {
    format!("{}{}", config.asset_prefix, item.file)
}

/// Absolute URL of the raw SVG asset.
pub fn raw_url(config: &GalleryConfig, item: &FigureItem) -> String {
    format!(
        "{}{}{}",
        config.base_url,
        config.asset_prefix,
        encode_path(&item.file)
    )
}

/// Shareable URL that reopens the gallery on this figure.
pub fn share_url(config: &GalleryConfig, item: &FigureItem) -> String {
    format!(
        "{}?{}={}",
        config.base_url,
        FIGURE_PARAM,
        urlencoding::encode(&item.file)
    )
}

/// Extract the figure file name from a share URL.
///
/// Accepts the parameter in either the query string or the fragment.
pub fn figure_from_share_url(url: &str) -> Option<String> {
    let (_, params) = url.split_once(['?', '#'])?;
    params
        .split(['&', '#', '?'])
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == FIGURE_PARAM)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|file| file.into_owned())
        .filter(|file| !file.is_empty())
}

/// Resolve a user-supplied reference (share URL or bare file name).
pub fn resolve_figure_ref(reference: &str) -> Option<String> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }
    if reference.contains(&format!("{}=", FIGURE_PARAM)) {
        return figure_from_share_url(reference);
    }
    Some(reference.to_string())
}

fn encode_path(file: &str) -> String {
    file.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(file: &str) -> FigureItem {
        FigureItem::new(file)
    }

    #[test]
    fn test_asset_path() {
        let config = GalleryConfig::default();
        assert_eq!(asset_path(&config, &item("boxplot.svg")), "svgs/boxplot.svg");
    }

    #[test]
    fn test_raw_url_encodes_segments() {
        let config = GalleryConfig::default().with_base_url("https://figs.example.org");
        assert_eq!(
            raw_url(&config, &item("2024/box plot.svg")),
            "https://figs.example.org/svgs/2024/box%20plot.svg"
        );
    }

    #[test]
    fn test_share_url_round_trip() {
        let config = GalleryConfig::default();
        let url = share_url(&config, &item("umap plot.svg"));
        assert_eq!(url, "http://localhost:8000/?figure=umap%20plot.svg");
        assert_eq!(figure_from_share_url(&url).as_deref(), Some("umap plot.svg"));
    }

    #[test]
    fn test_share_url_in_fragment() {
        assert_eq!(
            figure_from_share_url("https://x.org/gallery#view=grid&figure=maplot.svg").as_deref(),
            Some("maplot.svg")
        );
        assert_eq!(figure_from_share_url("https://x.org/gallery"), None);
        assert_eq!(figure_from_share_url("https://x.org/?figure="), None);
    }

    #[test]
    fn test_resolve_figure_ref() {
        assert_eq!(resolve_figure_ref("boxplot.svg").as_deref(), Some("boxplot.svg"));
        assert_eq!(
            resolve_figure_ref("http://localhost:8000/?figure=boxplot.svg").as_deref(),
            Some("boxplot.svg")
        );
        assert_eq!(resolve_figure_ref("   "), None);
    }
}
