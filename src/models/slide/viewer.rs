use super::Navigator;
use crate::catalog::Catalog;

/// One viewing of a category: the category id and a navigator over its deck.
///
/// A category change replaces the navigator outright so an index from the
/// previous deck is never carried over.
#[derive(Debug, Clone)]
pub struct SlideViewer<'a> {
    category: String,
    navigator: Navigator<'a>,
}

impl<'a> SlideViewer<'a> {
    pub fn open(catalog: &'a Catalog, category: &str) -> Self {
        Self {
            category: category.to_string(),
            navigator: Navigator::new(catalog.resolve(category)),
        }
    }

    /// Route-parameter change hook.
    pub fn change_category(&mut self, catalog: &'a Catalog, category: &str) {
        *self = Self::open(catalog, category);
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn navigator(&self) -> &Navigator<'a> {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator<'a> {
        &mut self.navigator
    }
}
