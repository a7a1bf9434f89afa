//! Product-type filter selection.

use std::collections::BTreeSet;

use storefront_core::ValueObject;

use crate::product::{Product, ProductType};

/// Set of selected product types. Empty means "show all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    types: BTreeSet<ProductType>,
}

impl ValueObject for FilterSet {}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn contains(&self, product_type: &ProductType) -> bool {
        self.types.contains(product_type)
    }

    pub fn insert(&mut self, product_type: ProductType) -> bool {
        self.types.insert(product_type)
    }

    pub fn remove(&mut self, product_type: &ProductType) -> bool {
        self.types.remove(product_type)
    }

    /// Select the type if absent, deselect it if present.
    pub fn toggle(&mut self, product_type: ProductType) {
        if !self.types.remove(&product_type) {
            self.types.insert(product_type);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductType> {
        self.types.iter()
    }

    /// Whether `product` passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.types.is_empty() || self.types.contains(&product.product_type)
    }
}

impl FromIterator<ProductType> for FilterSet {
    fn from_iter<I: IntoIterator<Item = ProductType>>(iter: I) -> Self {
        Self {
            types: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let set: FilterSet = ["shirt", "shirt", "mug"]
            .into_iter()
            .map(ProductType::from)
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut set = FilterSet::new();
        set.toggle(ProductType::new("hoodie"));
        assert!(set.contains(&ProductType::new("hoodie")));
        set.toggle(ProductType::new("hoodie"));
        assert!(set.is_empty());
    }
}
