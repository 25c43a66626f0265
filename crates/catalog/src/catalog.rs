//! Catalog provider abstraction and the in-memory implementation.

use std::collections::HashSet;

use rust_decimal::Decimal;

use storefront_core::{ProductId, check_unit_price};

use crate::error::CatalogError;
use crate::product::{Category, Product};

/// Read-only source of products.
pub trait Catalog {
    /// All products, in display order.
    fn list(&self) -> &[Product];

    /// Look up a product by id.
    fn find(&self, id: ProductId) -> Option<&Product> {
        self.list().iter().find(|p| p.id() == id)
    }

    /// Products whose name, description, seller or category contain `query`
    /// (case-insensitive). An empty query matches everything.
    fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        self.list()
            .iter()
            .filter(|p| needle.is_empty() || p.matches_lowercase(&needle))
            .collect()
    }

    /// Products in `category`, in display order.
    fn filter_by_category(&self, category: Category) -> Vec<&Product> {
        self.list()
            .iter()
            .filter(|p| p.category() == category)
            .collect()
    }
}

impl<C> Catalog for &C
where
    C: Catalog + ?Sized,
{
    fn list(&self) -> &[Product] {
        (**self).list()
    }

    fn find(&self, id: ProductId) -> Option<&Product> {
        (**self).find(id)
    }
}

/// Catalog backed by an owned, validated list of products.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Build a catalog, rejecting duplicate ids, empty names and invalid prices.
    ///
    /// A valid price is non-negative, at most [`storefront_core::MAX_UNIT_PRICE`] and
    /// in whole cents.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            let id = product.id();
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateId(id));
            }
            if product.name().trim().is_empty() {
                return Err(CatalogError::EmptyName(id));
            }
            check_unit_price(product.price())
                .map_err(|source| CatalogError::InvalidPrice { id, source })?;
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of product records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        let catalog = Self::new(products)?;
        tracing::debug!(products = catalog.len(), "loaded catalog from json");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Replace the price of one product (used to model catalog repricing).
    pub fn reprice(&mut self, id: ProductId, price: Decimal) -> Result<(), CatalogError> {
        check_unit_price(price).map_err(|source| CatalogError::InvalidPrice { id, source })?;
        if let Some(slot) = self.products.iter_mut().find(|p| p.id() == id) {
            *slot = slot.clone().with_price(price);
        }
        Ok(())
    }
}

impl Catalog for StaticCatalog {
    fn list(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id().get()).collect()
    }

    #[test]
    fn demo_catalog_lookup_by_id() {
        let catalog = StaticCatalog::demo();
        let scarf = catalog.find(ProductId::new(1)).unwrap();
        assert_eq!(scarf.name(), "Silk Blend Scarf");
        assert_eq!(scarf.price(), dec!(89.99));
        assert!(catalog.find(ProductId::new(999)).is_none());
    }

    #[test]
    fn search_is_case_insensitive_and_ordered() {
        let catalog = StaticCatalog::demo();
        assert_eq!(ids(&catalog.search("SILK")), vec![1, 11]);
        assert_eq!(ids(&catalog.search("luminous")), vec![4, 10]);
        assert!(catalog.search("spaceship").is_empty());
    }

    #[test]
    fn empty_query_returns_whole_catalog() {
        let catalog = StaticCatalog::demo();
        assert_eq!(catalog.search("   ").len(), catalog.len());
    }

    #[test]
    fn filter_by_category_keeps_catalog_order() {
        let catalog = StaticCatalog::demo();
        assert_eq!(ids(&catalog.filter_by_category(Category::Jewelry)), vec![4, 10]);
        assert_eq!(ids(&catalog.filter_by_category(Category::Home)), vec![2, 8]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let p = Product::new(ProductId::new(1), "A", Category::Home, "S", dec!(1));
        let err = StaticCatalog::new(vec![p.clone(), p]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == ProductId::new(1)));
    }

    #[test]
    fn rejects_invalid_prices() {
        for price in [
            dec!(-0.01),
            dec!(0.123),
            dec!(0.1234567890123456789),
            dec!(70000000000000000000000000000),
        ] {
            let p = Product::new(ProductId::new(3), "A", Category::Home, "S", price);
            let err = StaticCatalog::new(vec![p]).unwrap_err();
            assert!(
                matches!(err, CatalogError::InvalidPrice { id, .. } if id == ProductId::new(3)),
                "{price} should be rejected"
            );
        }
    }

    #[test]
    fn from_json_rejects_overflowing_price() {
        let err = StaticCatalog::from_json(
            r#"[{"id":1,"name":"Scarf","category":"fashion","seller":"S","price":7e28}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPrice { .. }));
    }

    #[test]
    fn from_json_reports_parse_errors() {
        assert!(matches!(
            StaticCatalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));

        let catalog = StaticCatalog::from_json(
            r#"[{"id":5,"name":"Leather Tote Bag","category":"accessories","seller":"Urban Leather","price":199.99}]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.list()[0].category(), Category::Accessories);
    }

    #[test]
    fn reprice_changes_only_the_target() {
        let mut catalog = StaticCatalog::demo();
        catalog.reprice(ProductId::new(1), dec!(99.99)).unwrap();
        assert_eq!(catalog.find(ProductId::new(1)).unwrap().price(), dec!(99.99));
        assert_eq!(catalog.find(ProductId::new(2)).unwrap().price(), dec!(129.99));
    }

    #[test]
    fn reprice_rejects_sub_cent_price() {
        let mut catalog = StaticCatalog::demo();
        let err = catalog.reprice(ProductId::new(1), dec!(89.999)).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPrice { .. }));
        assert_eq!(catalog.find(ProductId::new(1)).unwrap().price(), dec!(89.99));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every search hit is a catalog product and order is preserved.
            #[test]
            fn search_returns_ordered_subset(query in "[a-zA-Z ]{0,8}") {
                let catalog = StaticCatalog::demo();
                let hits = ids(&catalog.search(&query));
                let mut sorted = hits.clone();
                sorted.sort_unstable();
                prop_assert_eq!(&hits, &sorted);
                prop_assert!(hits.len() <= catalog.len());
            }
        }
    }
}
