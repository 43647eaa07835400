//! Manifest adapter.
//!
//! Manifests come in a few shapes and with drifting field names. Everything
//! is normalized into [`FigureItem`] here so nothing downstream sees the raw
//! format.
//!
//! Accepted shapes:
//!
//! ```text
//! [ {file, title, ...}, ... ]
//! { "items": [ {file, title, ...}, ... ] }
//! { "categories": [ { "id": "distribution", "items": [ ... ] }, ... ] }
//! { "categories": [ ... ], "items": [ ... ] }
//! ```

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::catalog::{dedup_tags, title_from_file, Catalog, FigureItem};
use crate::error::{GalleryError, GalleryResult};

/// A parsed manifest plus the records that had to be dropped.
#[derive(Debug)]
pub struct ParsedManifest {
    pub catalog: Catalog,
    /// Always [`GalleryError::MalformedItem`]
    pub malformed: Vec<GalleryError>,
}

/// Raw record as it appears in a manifest.
#[derive(Debug, Deserialize)]
struct RawFigure {
    #[serde(default, alias = "filename")]
    file: Option<String>,
    #[serde(default, alias = "name")]
    title: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    tags: Option<RawTags>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTags {
    List(Vec<String>),
    Csv(String),
}

impl RawTags {
    fn into_vec(self) -> Vec<String> {
        match self {
            RawTags::List(tags) => dedup_tags(tags.into_iter()),
            RawTags::Csv(tags) => dedup_tags(tags.split(',').map(str::to_string)),
        }
    }
}

impl RawFigure {
    fn into_item(self, group_category: Option<&str>) -> Result<FigureItem, String> {
        let file = self
            .file
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .ok_or_else(|| "missing `file`".to_string())?;

        let title = self
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| title_from_file(&file));

        let category = self
            .category
            .or_else(|| group_category.map(str::to_string))
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(FigureItem {
            file,
            title,
            category,
            tags: self.tags.map(RawTags::into_vec).unwrap_or_default(),
            description: self.description.filter(|d| !d.trim().is_empty()),
        })
    }
}

/// Parse a manifest document.
///
/// Fails with [`GalleryError::Load`] only when the document as a whole is
/// unusable. Individual bad records are collected in `malformed`.
pub fn parse(json: &str) -> GalleryResult<ParsedManifest> {
    let root: Value = serde_json::from_str(json)
        .map_err(|e| GalleryError::Load(format!("manifest is not valid JSON: {}", e)))?;

    let mut malformed = Vec::new();
    let records = match root {
        Value::Array(items) => items.into_iter().map(|v| (v, None)).collect(),
        Value::Object(map) => records_from_object(map, &mut malformed)?,
        _ => {
            return Err(GalleryError::Load(
                "manifest must be an object or an array".to_string(),
            ))
        }
    };

    let mut items = Vec::new();

    for (index, (value, group)) in records.into_iter().enumerate() {
        let adapted = serde_json::from_value::<RawFigure>(value)
            .map_err(|e| e.to_string())
            .and_then(|raw| raw.into_item(group.as_deref()));

        match adapted {
            Ok(item) if items.iter().any(|i: &FigureItem| i.file == item.file) => {
                malformed.push(GalleryError::MalformedItem {
                    index,
                    reason: format!("duplicate file `{}`", item.file),
                });
            }
            Ok(item) => items.push(item),
            Err(reason) => malformed.push(GalleryError::MalformedItem { index, reason }),
        }
    }

    Ok(ParsedManifest {
        catalog: Catalog::new(items),
        malformed,
    })
}

/// Flatten an object manifest into `(record, group label)` pairs.
///
/// Top-level `items` are read whether or not `categories` is present. Category
/// groups that cannot hold records are reported in `malformed`, indexed by
/// their position in `categories`.
fn records_from_object(
    mut map: Map<String, Value>,
    malformed: &mut Vec<GalleryError>,
) -> GalleryResult<Vec<(Value, Option<String>)>> {
    let mut records = Vec::new();
    let grouped = map.contains_key("categories");

    if let Some(groups) = map.remove("categories") {
        let Value::Array(groups) = groups else {
            return Err(GalleryError::Load("`categories` must be an array".to_string()));
        };
        for (index, group) in groups.into_iter().enumerate() {
            let Value::Object(mut group) = group else {
                malformed.push(GalleryError::MalformedItem {
                    index,
                    reason: "category group is not an object".to_string(),
                });
                continue;
            };
            let label = ["id", "category", "name"]
                .iter()
                .find_map(|key| group.get(*key).and_then(Value::as_str))
                .map(str::to_string);
            match group.remove("items") {
                Some(Value::Array(items)) => {
                    records.extend(items.into_iter().map(|v| (v, label.clone())));
                }
                Some(_) => malformed.push(GalleryError::MalformedItem {
                    index,
                    reason: format!(
                        "`items` of category group `{}` is not an array",
                        label.as_deref().unwrap_or("?")
                    ),
                }),
                None => {}
            }
        }
    }

    match map.remove("items") {
        Some(Value::Array(items)) => records.extend(items.into_iter().map(|v| (v, None))),
        Some(_) if !grouped => {
            return Err(GalleryError::Load("`items` must be an array".to_string()))
        }
        Some(_) => malformed.push(GalleryError::MalformedItem {
            index: records.len(),
            reason: "top-level `items` is not an array".to_string(),
        }),
        None if !grouped => {
            return Err(GalleryError::Load(
                "manifest object needs `items` or `categories`".to_string(),
            ))
        }
        None => {}
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_array() {
        let parsed = parse(
            r#"[
                {"file": "boxplot.svg", "title": "Box Plot", "category": "distribution", "tags": ["stats"]},
                {"file": "umap_plot.svg", "title": "UMAP Plot"}
            ]"#,
        )
        .unwrap();
        assert_eq!(parsed.catalog.len(), 2);
        assert!(parsed.malformed.is_empty());
        let first = &parsed.catalog.items()[0];
        assert_eq!(first.category.as_deref(), Some("distribution"));
        assert_eq!(first.tags, vec!["stats".to_string()]);
    }

    #[test]
    fn test_field_aliases() {
        let parsed = parse(r#"[{"filename": "maplot.svg", "name": "MA Plot"}]"#).unwrap();
        let item = &parsed.catalog.items()[0];
        assert_eq!(item.file, "maplot.svg");
        assert_eq!(item.title, "MA Plot");
    }

    #[test]
    fn test_missing_title_is_derived() {
        let parsed = parse(r#"{"items": [{"file": "response_plot.svg"}]}"#).unwrap();
        assert_eq!(parsed.catalog.items()[0].title, "Response Plot");
    }

    #[test]
    fn test_grouped_items_inherit_category() {
        let parsed = parse(
            r#"{"categories": [
                {"id": "distribution", "items": [{"file": "boxplot.svg"}, {"file": "violin_plot.svg", "category": "density"}]},
                {"name": "Genomic", "items": [{"file": "circos_plot.svg"}]}
            ]}"#,
        )
        .unwrap();
        let cats: Vec<_> = parsed
            .catalog
            .items()
            .iter()
            .map(|i| i.category.clone().unwrap())
            .collect();
        assert_eq!(cats, vec!["distribution", "density", "Genomic"]);
    }

    #[test]
    fn test_csv_tags() {
        let parsed = parse(r#"[{"file": "a.svg", "tags": "stats, cluster,stats"}]"#).unwrap();
        assert_eq!(
            parsed.catalog.items()[0].tags,
            vec!["stats".to_string(), "cluster".to_string()]
        );
    }

    #[test]
    fn test_malformed_records_are_dropped() {
        let parsed = parse(
            r#"[
                {"title": "No File"},
                42,
                {"file": "ok.svg", "tags": 7},
                {"file": "   "},
                {"file": "good.svg"},
                {"file": "good.svg", "title": "Duplicate"}
            ]"#,
        )
        .unwrap();
        assert_eq!(parsed.catalog.len(), 1);
        assert_eq!(parsed.catalog.items()[0].file, "good.svg");
        assert_eq!(parsed.malformed.len(), 5);
        assert!(parsed
            .malformed
            .iter()
            .all(|e| matches!(e, GalleryError::MalformedItem { .. })));
    }

    #[test]
    fn test_invalid_documents_fail() {
        assert!(matches!(parse("not json"), Err(GalleryError::Load(_))));
        assert!(matches!(parse("\"text\""), Err(GalleryError::Load(_))));
        assert!(matches!(parse(r#"{"figures": []}"#), Err(GalleryError::Load(_))));
    }

    #[test]
    fn test_category_list_with_flat_items() {
        let parsed = parse(
            r#"{"categories": ["distribution"], "items": [{"file": "boxplot.svg", "category": "distribution"}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.catalog.len(), 1);
        assert_eq!(parsed.catalog.items()[0].file, "boxplot.svg");
        // The bare string is not a group
        assert_eq!(parsed.malformed.len(), 1);
        assert!(matches!(
            &parsed.malformed[0],
            GalleryError::MalformedItem { index: 0, .. }
        ));
    }

    #[test]
    fn test_group_items_must_be_an_array() {
        let parsed = parse(r#"{"categories":[{"id":"x","items":{"file":"a.svg"}}]}"#).unwrap();
        assert!(parsed.catalog.is_empty());
        assert_eq!(parsed.malformed.len(), 1);
        match &parsed.malformed[0] {
            GalleryError::MalformedItem { index, reason } => {
                assert_eq!(*index, 0);
                assert!(reason.contains("`x`"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_grouped_and_flat_items_are_merged() {
        let parsed = parse(
            r#"{
                "categories": [{"id": "genomic", "items": [{"file": "circos_plot.svg"}]}],
                "items": [{"file": "boxplot.svg"}, {"file": "circos_plot.svg"}]
            }"#,
        )
        .unwrap();
        let files: Vec<_> = parsed.catalog.items().iter().map(|i| i.file.as_str()).collect();
        assert_eq!(files, vec!["circos_plot.svg", "boxplot.svg"]);
        assert_eq!(parsed.malformed.len(), 1);
    }

    #[test]
    fn test_non_array_items_without_groups_fail() {
        assert!(matches!(
            parse(r#"{"items": {"file": "a.svg"}}"#),
            Err(GalleryError::Load(_))
        ));
    }
}
