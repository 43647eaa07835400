//! Gallery session.
//!
//! [`Gallery`] is the single owned object behind the UI: it holds the catalog,
//! the filter controls, the current filtered sequence and the viewer. The UI
//! only ever talks to it through [`Intent`]s.

use crate::catalog::{Catalog, CatalogLoad, FigureItem};
use crate::config::GalleryConfig;
use crate::controls::FilterControls;
use crate::error::GalleryResult;
use crate::filter::{self, FilterState};
use crate::grid::{self, GridView};
use crate::links;
use crate::viewer::{Direction, Slide, Viewer};

/// Catalog loading status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// User intents emitted by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SetQuery(String),
    ToggleTag(String),
    SetCategory(String),
    ClearFilters,
    /// Card at this position of the filtered sequence was activated
    ActivateCard(usize),
    Navigate(Direction),
    /// Click outside the viewer content or the close button
    Dismiss,
    /// Explicit interrupt key
    Cancel,
}

impl Intent {
    /// Keyboard mapping while the viewer is open.
    pub fn from_viewer_key(key: &str) -> Option<Intent> {
        match key {
            "Escape" => Some(Intent::Cancel),
            "ArrowLeft" => Some(Intent::Navigate(Direction::Previous)),
            "ArrowRight" => Some(Intent::Navigate(Direction::Next)),
            _ => None,
        }
    }

    /// Keyboard activation of a focused card.
    pub fn from_card_key(key: &str, position: usize) -> Option<Intent> {
        match key {
            "Enter" | " " => Some(Intent::ActivateCard(position)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    config: GalleryConfig,
    catalog: Catalog,
    controls: FilterControls,
    filtered: Vec<FigureItem>,
    viewer: Viewer,
    status: LoadStatus,
    dropped: usize,
}

impl Gallery {
    /// A session waiting for its catalog.
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            catalog: Catalog::empty(),
            controls: FilterControls::new(),
            filtered: Vec::new(),
            viewer: Viewer::new(),
            status: LoadStatus::Loading,
            dropped: 0,
        }
    }

    /// A session with its catalog already available.
    pub fn with_catalog(config: GalleryConfig, catalog: Catalog) -> Self {
        let mut gallery = Self::new(config);
        gallery.install(catalog, LoadStatus::Ready);
        gallery
    }

    /// Install the result of the one-time catalog load.
    ///
    /// Later calls are ignored; the catalog is fixed for the session.
    pub fn finish_loading(&mut self, load: CatalogLoad) {
        if self.status != LoadStatus::Loading {
            tracing::warn!("Catalog already loaded; ignoring second load");
            return;
        }
        self.dropped = load.dropped;
        let status = match load.error {
            Some(reason) => LoadStatus::Failed(reason),
            None => LoadStatus::Ready,
        };
        self.install(load.catalog, status);
    }

    fn install(&mut self, catalog: Catalog, status: LoadStatus) {
        tracing::info!("Gallery ready with {} figures", catalog.len());
        self.catalog = catalog;
        self.status = status;
        self.refilter();
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Number of manifest records skipped during load.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }

    pub fn filter_state(&self) -> &FilterState {
        self.controls.state()
    }

    /// Current filtered sequence.
    pub fn filtered(&self) -> &[FigureItem] {
        &self.filtered
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn grid(&self) -> GridView {
        grid::render(
            &self.filtered,
            self.catalog.is_empty(),
            &self.status,
            &self.config,
        )
    }

    pub fn slide(&self) -> Option<Slide> {
        self.viewer.slide(&self.config)
    }

    /// Apply one user intent.
    ///
    /// Only [`Intent::ActivateCard`] can fail, and only on a stale position.
    pub fn dispatch(&mut self, intent: Intent) -> GalleryResult<()> {
        tracing::debug!(?intent, "dispatch");
        match intent {
            Intent::SetQuery(text) => self.set_query(text),
            Intent::ToggleTag(tag) => self.toggle_tag(tag),
            Intent::SetCategory(category) => self.set_category(category),
            Intent::ClearFilters => self.clear_filters(),
            Intent::ActivateCard(position) => return self.activate_card(position),
            Intent::Navigate(direction) => self.viewer.navigate(direction),
            Intent::Dismiss | Intent::Cancel => self.viewer.close(),
        }
        Ok(())
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        if self.controls.set_query(text) {
            self.filters_changed();
        }
    }

    pub fn toggle_tag(&mut self, tag: impl Into<String>) {
        if self.controls.toggle_tag(tag) {
            self.filters_changed();
        }
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        if self.controls.set_category(category) {
            self.filters_changed();
        }
    }

    pub fn clear_filters(&mut self) {
        if self.controls.clear() {
            self.filters_changed();
        }
    }

    /// Open the viewer on the card at `position` of the filtered sequence.
    pub fn activate_card(&mut self, position: usize) -> GalleryResult<()> {
        self.viewer.open(self.filtered.clone(), position)?;
        Ok(())
    }

    /// Open the viewer on a figure given by file name or share URL.
    ///
    /// Returns `false` when the figure is not in the filtered sequence.
    pub fn open_figure(&mut self, reference: &str) -> GalleryResult<bool> {
        let Some(file) = links::resolve_figure_ref(reference) else {
            return Ok(false);
        };
        match self.filtered.iter().position(|item| item.file == file) {
            Some(position) => {
                self.activate_card(position)?;
                Ok(true)
            }
            None => {
                tracing::warn!("Figure {} is not in the current view", file);
                Ok(false)
            }
        }
    }

    fn filters_changed(&mut self) {
        // The viewer's sequence is now stale.
        self.viewer.close();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = filter::filter(self.catalog.items(), self.controls.state());
        tracing::debug!(
            visible = self.filtered.len(),
            total = self.catalog.len(),
            "refiltered"
        );
    }
}
