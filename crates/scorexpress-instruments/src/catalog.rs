//! Catalog of instruments, partitioned by category.
//!
//! [`CatalogSource`] is the static table of per-category loaders. Loading is
//! async so categories can be fetched in parallel; a category that fails to
//! load is logged and skipped rather than failing the whole catalog.
//! [`Catalog`] is the immutable registry built once from a source and shared
//! read-only afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tracing::{error, info, warn};

use scorexpress_core::models::category::Category;

use crate::error::InstrumentError;
use crate::instruments;
use crate::Instrument;

/// Number of instruments per page in the catalog listing.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Produces the definitions of one category.
pub type CategoryLoader = fn() -> Result<Vec<Instrument>, InstrumentError>;

/// Static mapping from category to the loader of its definitions.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    loaders: Vec<(Category, CategoryLoader)>,
}

impl CatalogSource {
    pub fn new(loaders: Vec<(Category, CategoryLoader)>) -> Self {
        Self { loaders }
    }

    /// Every category that ships with instrument data.
    pub fn builtin() -> Self {
        Self::new(instruments::LOADERS.to_vec())
    }

    /// Categories with a loader, in table order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.loaders.iter().map(|(category, _)| *category)
    }

    fn loader(&self, category: Category) -> Option<CategoryLoader> {
        self.loaders
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, loader)| *loader)
    }

    /// Instruments of one category in declaration order. A category with no
    /// loader has no instruments.
    pub async fn instruments_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Instrument>, InstrumentError> {
        match self.loader(category) {
            Some(loader) => load_category(category, loader).await,
            None => Ok(Vec::new()),
        }
    }

    /// Every category's instruments, concatenated in table order.
    ///
    /// Categories load in parallel. One that fails is logged and contributes
    /// nothing; this never errors.
    pub async fn all_instruments(&self) -> Vec<Instrument> {
        let fetches = self.loaders.iter().map(|&(category, loader)| async move {
            match load_category(category, loader).await {
                Ok(instruments) => instruments,
                Err(e) => {
                    error!(category = %category, error = %e, "category failed to load, skipping");
                    Vec::new()
                }
            }
        });

        join_all(fetches).await.into_iter().flatten().collect()
    }
}

async fn load_category(
    category: Category,
    loader: CategoryLoader,
) -> Result<Vec<Instrument>, InstrumentError> {
    let instruments = tokio::task::spawn_blocking(loader)
        .await
        .map_err(|e| InstrumentError::CategoryLoad {
            category,
            reason: e.to_string(),
        })??;

    for instrument in &instruments {
        if instrument.category != category {
            return Err(InstrumentError::WrongCategory {
                instrument_id: instrument.id.clone(),
                expected: category,
                found: instrument.category,
            });
        }
        instrument.validate()?;
    }

    Ok(instruments)
}

/// Immutable registry of every loaded instrument.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    instruments: Vec<Arc<Instrument>>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Load every category of `source` and build the registry.
    pub async fn load(source: &CatalogSource) -> Self {
        let catalog = Self::from_instruments(source.all_instruments().await);
        info!(
            instruments = catalog.len(),
            categories = catalog.categories().len(),
            "catalog loaded"
        );
        catalog
    }

    /// Build a registry from already loaded definitions. An id seen twice
    /// keeps its first definition.
    pub fn from_instruments(instruments: Vec<Instrument>) -> Self {
        let mut catalog = Self::default();
        for instrument in instruments {
            if catalog.by_id.contains_key(&instrument.id) {
                warn!(instrument_id = %instrument.id, "duplicate instrument id, keeping first definition");
                continue;
            }
            catalog
                .by_id
                .insert(instrument.id.clone(), catalog.instruments.len());
            catalog.instruments.push(Arc::new(instrument));
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Every instrument, category then declaration order.
    pub fn all_instruments(&self) -> &[Arc<Instrument>] {
        &self.instruments
    }

    pub fn instruments_by_category(&self, category: Category) -> Vec<Arc<Instrument>> {
        self.instruments
            .iter()
            .filter(|i| i.category == category)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<Arc<Instrument>> {
        self.by_id.get(id).map(|&i| Arc::clone(&self.instruments[i]))
    }

    pub fn require(&self, id: &str) -> Result<Arc<Instrument>, InstrumentError> {
        self.get(id)
            .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
    }

    /// Categories holding at least one instrument, in display order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.instruments.iter().any(|i| i.category == *c))
            .collect()
    }

    /// Instruments whose name, short name or description contains `term`,
    /// ignoring case. An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<Arc<Instrument>> {
        let needle = term.trim().to_lowercase();
        self.instruments
            .iter()
            .filter(|i| {
                needle.is_empty()
                    || i.name.to_lowercase().contains(&needle)
                    || i.short_name.to_lowercase().contains(&needle)
                    || i.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based, clamped to `[1, total_pages]`.
    pub page: usize,
    pub total_pages: usize,
}

/// Slice `items` into pages of `per_page` and return page `page` (1-based).
/// Out-of-range page numbers are clamped.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(items.len());

    Page {
        items: items[start.min(end)..end].to_vec(),
        page,
        total_pages,
    }
}
