use crate::core::catalog::Catalog;
use crate::domain::model::{Resort, SortOrder};

/// Derives the displayed resort list from the catalog, the search text and the sort order.
#[derive(Debug, Clone)]
pub struct ResortListViewModel {
    catalog: Catalog,
    search_text: String,
    sort_order: SortOrder,
}

impl ResortListViewModel {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            search_text: String::new(),
            sort_order: SortOrder::None,
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        tracing::debug!("Search text set to {:?}", self.search_text);
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
        tracing::debug!("Sort order set to {:?}", order);
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn visible_resorts(&self) -> Vec<&Resort> {
        let mut visible: Vec<&Resort> = if self.search_text.is_empty() {
            self.catalog.resorts().iter().collect()
        } else {
            let needle = self.search_text.to_lowercase();
            self.catalog
                .resorts()
                .iter()
                .filter(|resort| resort.name.to_lowercase().contains(&needle))
                .collect()
        };

        // sort_by 是穩定排序，相同鍵值保留原始順序
        match self.sort_order {
            SortOrder::None => {}
            SortOrder::ByName => visible.sort_by(|a, b| a.name.cmp(&b.name)),
            SortOrder::ByCountry => visible.sort_by(|a, b| a.country.cmp(&b.country)),
        }

        visible
    }
}
