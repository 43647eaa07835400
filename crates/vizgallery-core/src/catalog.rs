//! Figure catalog.
//!
//! The catalog is the full, ordered, read-only list of figures for a session.
//! It is produced once, either from the built-in list or from an external
//! manifest, and never mutated afterwards.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, GalleryResult};
use crate::manifest::{self, ParsedManifest};

/// One gallery entry: an SVG asset plus its metadata.
///
/// Identity is `file`; two items with the same file are the same figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureItem {
    /// Asset file name, relative to the asset prefix (e.g. `boxplot.svg`)
    pub file: String,
    /// Human-readable name
    pub title: String,
    /// Single classification label
    pub category: Option<String>,
    /// Free-form labels, deduplicated, in declaration order
    pub tags: Vec<String>,
    /// Caption text
    pub description: Option<String>,
}

impl FigureItem {
    /// Create an item whose title is derived from the file name.
    pub fn new(file: impl Into<String>) -> Self {
        let file: String = file.into();
        let title = title_from_file(&file);
        Self {
            file,
            title,
            category: None,
            tags: Vec::new(),
            description: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = dedup_tags(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Lowercased title, category, tags and description, space separated.
    pub fn search_text(&self) -> String {
        let mut text = self.title.to_lowercase();
        for part in self
            .category
            .iter()
            .chain(self.tags.iter())
            .chain(self.description.iter())
        {
            text.push(' ');
            text.push_str(&part.to_lowercase());
        }
        text
    }

    /// True if any of the item's tags is in `tags`.
    pub fn has_any_tag(&self, tags: &BTreeSet<String>) -> bool {
        self.tags.iter().any(|t| tags.contains(t))
    }
}

/// Derive a display title from an asset file name.
///
/// `single_dotplot.svg` becomes `Single Dotplot`.
pub fn title_from_file(file: &str) -> String {
    let name = Path::new(file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file);

    name.split(['_', '-', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub(crate) fn dedup_tags(tags: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    tags.map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty() && seen.insert(t.clone()))
        .collect()
}

/// Human-facing name for a category label.
pub fn category_label(category: Option<&str>) -> String {
    match category {
        Some("distribution") => "Statistical Distribution".to_string(),
        Some("expression") => "Gene Expression".to_string(),
        Some("dimensional") => "Dimensionality Reduction".to_string(),
        Some("genomic") => "Genomic Visualization".to_string(),
        Some(other) if !other.trim().is_empty() => other.to_string(),
        _ => "Analysis".to_string(),
    }
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Compile-time list, available immediately
    Builtin,
    /// JSON manifest on disk
    Manifest(PathBuf),
}

impl CatalogSource {
    pub fn from_manifest(manifest: Option<PathBuf>) -> Self {
        match manifest {
            Some(path) => CatalogSource::Manifest(path),
            None => CatalogSource::Builtin,
        }
    }
}

/// Ordered, immutable sequence of figures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<FigureItem>,
}

impl Catalog {
    /// Build a catalog, keeping the first occurrence of each file.
    pub fn new(items: Vec<FigureItem>) -> Self {
        let mut seen = BTreeSet::new();
        let items = items
            .into_iter()
            .filter(|item| seen.insert(item.file.clone()))
            .collect();
        Self { items }
    }

    /// The empty catalog, used when loading fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in visualization set.
    pub fn builtin() -> Self {
        crate::builtin::catalog()
    }

    /// Parse a manifest document, dropping malformed records.
    pub fn from_manifest_str(json: &str) -> GalleryResult<ParsedManifest> {
        manifest::parse(json)
    }

    /// Load the catalog from `source`.
    ///
    /// Malformed records are logged and dropped. Fails only when the manifest
    /// as a whole is unreachable or unparsable.
    pub async fn load(source: &CatalogSource) -> GalleryResult<Catalog> {
        Ok(load_parsed(source).await?.catalog)
    }

    pub fn items(&self) -> &[FigureItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a figure by file name.
    pub fn get(&self, file: &str) -> Option<&FigureItem> {
        self.items.iter().find(|item| item.file == file)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.items
            .iter()
            .filter_map(|item| item.category.clone())
            .filter(|c| seen.insert(c.clone()))
            .collect()
    }

    /// Distinct tags, sorted.
    pub fn tags(&self) -> Vec<String> {
        self.items
            .iter()
            .flat_map(|item| item.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

async fn load_parsed(source: &CatalogSource) -> GalleryResult<ParsedManifest> {
    match source {
        CatalogSource::Builtin => Ok(ParsedManifest {
            catalog: Catalog::builtin(),
            malformed: Vec::new(),
        }),
        CatalogSource::Manifest(path) => {
            let json = tokio::fs::read_to_string(path).await.map_err(|e| {
                GalleryError::Load(format!("cannot read {}: {}", path.display(), e))
            })?;
            let parsed = manifest::parse(&json)?;
            for err in &parsed.malformed {
                tracing::warn!("Dropping manifest record: {}", err);
            }
            tracing::info!(
                "Loaded {} figures from {} ({} dropped)",
                parsed.catalog.len(),
                path.display(),
                parsed.malformed.len()
            );
            Ok(parsed)
        }
    }
}

/// Outcome of a catalog load that never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    /// User-visible message when the load failed
    pub error: Option<String>,
    /// Number of malformed records that were skipped
    pub dropped: usize,
}

impl CatalogLoad {
    /// Load `source`, degrading to an empty catalog on failure.
    ///
    /// This is a single attempt; a failed load is not retried.
    pub async fn resolve(source: &CatalogSource) -> CatalogLoad {
        match load_parsed(source).await {
            Ok(parsed) => CatalogLoad {
                dropped: parsed.malformed.len(),
                catalog: parsed.catalog,
                error: None,
            },
            Err(e) => {
                tracing::error!("Catalog unavailable: {}", e);
                CatalogLoad {
                    catalog: Catalog::empty(),
                    error: Some(e.to_string()),
                    dropped: 0,
                }
            }
        }
    }
}
