use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, ProductId, money};

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fashion,
    Home,
    Wellness,
    Jewelry,
    Accessories,
    Artisan,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Fashion,
        Category::Home,
        Category::Wellness,
        Category::Jewelry,
        Category::Accessories,
        Category::Artisan,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Fashion => "fashion",
            Category::Home => "home",
            Category::Wellness => "wellness",
            Category::Jewelry => "jewelry",
            Category::Accessories => "accessories",
            Category::Artisan => "artisan",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::validation(format!("unknown category: {wanted}")))
    }
}

/// A catalog product.
///
/// Immutable once built. The serialized shape (`id`, `name`, `category`, `seller`,
/// `price`, `image`, `description`, `rating`, `reviews`) is shared with the cart
/// snapshot, which embeds a copy of the product in every line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: Category,
    seller: String,
    #[serde(with = "money::json_number")]
    price: Decimal,
    #[serde(rename = "image", default)]
    glyph: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    rating: f64,
    #[serde(rename = "reviews", default)]
    review_count: u32,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        seller: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            seller: seller.into(),
            price,
            glyph: String::new(),
            description: String::new(),
            rating: 0.0,
            review_count: 0,
        }
    }

    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = glyph.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Return a copy with a different unit price (catalog repricing).
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn seller(&self) -> &str {
        &self.seller
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn review_count(&self) -> u32 {
        self.review_count
    }

    /// Case-insensitive match on name, description, seller and category.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.seller.to_lowercase().contains(needle)
            || self.category.as_str().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn scarf() -> Product {
        Product::new(
            ProductId::new(1),
            "Silk Blend Scarf",
            Category::Fashion,
            "Luna Textiles",
            dec!(89.99),
        )
        .with_glyph("🧣")
        .with_description("Luxurious silk-cotton blend scarf with vibrant patterns")
        .with_rating(4.8, 156)
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Jewelry".parse::<Category>().unwrap(), Category::Jewelry);
        assert_eq!(" home ".parse::<Category>().unwrap(), Category::Home);
        assert!(matches!(
            "toys".parse::<Category>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn serializes_with_storefront_field_names() {
        let json = serde_json::to_value(scarf()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["category"], "fashion");
        assert_eq!(json["price"], 89.99);
        assert_eq!(json["image"], "🧣");
        assert_eq!(json["reviews"], 156);
    }

    #[test]
    fn deserializes_numeric_price_exactly() {
        let json = r#"{"id":2,"name":"Ceramic Vase Set","category":"home","seller":"Pottery House","price":129.99}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price(), dec!(129.99));
        assert_eq!(product.glyph(), "");
        assert_eq!(product.review_count(), 0);
    }

    #[test]
    fn search_matches_any_text_field() {
        let p = scarf();
        assert!(p.matches_lowercase("silk"));
        assert!(p.matches_lowercase("luna"));
        assert!(p.matches_lowercase("vibrant"));
        assert!(p.matches_lowercase("fashion"));
        assert!(!p.matches_lowercase("ceramic"));
    }
}
