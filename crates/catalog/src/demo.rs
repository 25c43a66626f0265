//! The twelve-product demo catalog the storefront ships with.

use rust_decimal::Decimal;

use storefront_core::ProductId;

use crate::catalog::StaticCatalog;
use crate::product::{Category, Product};

struct Row {
    id: u32,
    name: &'static str,
    category: Category,
    seller: &'static str,
    cents: i64,
    glyph: &'static str,
    description: &'static str,
    rating: f64,
    reviews: u32,
}

const ROWS: [Row; 12] = [
    Row { id: 1, name: "Silk Blend Scarf", category: Category::Fashion, seller: "Luna Textiles", cents: 8999, glyph: "🧣", description: "Luxurious silk-cotton blend scarf with vibrant patterns", rating: 4.8, reviews: 156 },
    Row { id: 2, name: "Ceramic Vase Set", category: Category::Home, seller: "Pottery House", cents: 12999, glyph: "🏺", description: "Handcrafted ceramic vases, set of 3, minimalist design", rating: 4.9, reviews: 89 },
    Row { id: 3, name: "Lavender Diffuser", category: Category::Wellness, seller: "Zen Wellness", cents: 4599, glyph: "🌿", description: "Essential oil diffuser with 5 essential oil blends", rating: 4.7, reviews: 234 },
    Row { id: 4, name: "Pearl Earrings", category: Category::Jewelry, seller: "Luminous Jewelry", cents: 15999, glyph: "💎", description: "Authentic freshwater pearl drop earrings, sterling silver", rating: 4.9, reviews: 124 },
    Row { id: 5, name: "Leather Tote Bag", category: Category::Accessories, seller: "Urban Leather", cents: 19999, glyph: "👜", description: "Premium Italian leather tote with multiple compartments", rating: 4.8, reviews: 267 },
    Row { id: 6, name: "Hand-Knit Blanket", category: Category::Artisan, seller: "Cozy Creations", cents: 14999, glyph: "🧶", description: "Soft wool blend hand-knitted throw blanket, natural dyes", rating: 4.9, reviews: 178 },
    Row { id: 7, name: "Linen Shirt", category: Category::Fashion, seller: "Minimalist Fashion", cents: 7999, glyph: "👔", description: "Pure linen short-sleeve shirt, breathable and durable", rating: 4.6, reviews: 92 },
    Row { id: 8, name: "Bamboo Cutting Board", category: Category::Home, seller: "Eco Living", cents: 3499, glyph: "🥘", description: "Sustainable bamboo cutting board set with storage", rating: 4.7, reviews: 145 },
    Row { id: 9, name: "Yoga Mat", category: Category::Wellness, seller: "FlexFlow Wellness", cents: 6999, glyph: "🧘", description: "Premium natural rubber yoga mat, non-slip surface", rating: 4.8, reviews: 312 },
    Row { id: 10, name: "Gold Bracelet", category: Category::Jewelry, seller: "Luminous Jewelry", cents: 24999, glyph: "✨", description: "14K gold-plated statement bracelet with gemstones", rating: 4.9, reviews: 87 },
    Row { id: 11, name: "Silk Sleep Mask", category: Category::Accessories, seller: "Luxury Rest", cents: 3499, glyph: "😴", description: "Mulberry silk sleep mask, hypoallergenic and soft", rating: 4.8, reviews: 203 },
    Row { id: 12, name: "Wooden Sculpture", category: Category::Artisan, seller: "Wood Art Studio", cents: 17999, glyph: "🎨", description: "Hand-carved wooden sculpture, abstract design", rating: 4.9, reviews: 45 },
];

/// The demo products, in display order.
pub fn products() -> Vec<Product> {
    ROWS.iter()
        .map(|row| {
            Product::new(
                ProductId::new(row.id),
                row.name,
                row.category,
                row.seller,
                Decimal::new(row.cents, 2),
            )
            .with_glyph(row.glyph)
            .with_description(row.description)
            .with_rating(row.rating, row.reviews)
        })
        .collect()
}

impl StaticCatalog {
    /// The built-in demo catalog.
    pub fn demo() -> Self {
        // Rows are unique and non-negative, so validation cannot fail.
        Self::new(products()).unwrap_or_default()
    }
}
