use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::{ProductId, StorefrontError, StorefrontResult};

/// Product category tag (e.g. `"shirt"`, `"hoodie"`).
///
/// The set of tags is owned by the remote catalog; the client treats it as an
/// open set and orders tags lexically so filter sets iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductType(String);

impl ProductType {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Catalog record as served by `GET /products`.
///
/// Immutable from the client's perspective. Prices are USD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: ProductId,
    pub title: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub price: Decimal,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        product_type: ProductType,
        price: Decimal,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            product_type,
            price,
            image: image.into(),
            hover_image: None,
            images: Vec::new(),
        }
    }

    pub fn with_hover_image(mut self, image: impl Into<String>) -> Self {
        self.hover_image = Some(image.into());
        self
    }

    /// Check the record against the formatter's input contract.
    ///
    /// The catalog service never yields negative prices; a record that does is
    /// dropped by the fetcher rather than passed on to price formatting.
    pub fn validate(&self) -> StorefrontResult<()> {
        if self.price < Decimal::ZERO {
            return Err(StorefrontError::validation(format!(
                "product {} has negative price {}",
                self.id, self.price
            )));
        }
        if self.title.trim().is_empty() {
            return Err(StorefrontError::validation(format!(
                "product {} has an empty title",
                self.id
            )));
        }
        Ok(())
    }

    /// Image to show while the pointer hovers the card; falls back to the
    /// primary image.
    pub fn hover_or_primary_image(&self) -> &str {
        self.hover_image.as_deref().unwrap_or(&self.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn deserializes_api_record_with_mongo_style_id() {
        let json = r#"{
            "_id": "p-1",
            "title": "Basic Tee",
            "type": "shirt",
            "price": 19.99,
            "image": "tee.jpg",
            "hoverImage": "tee-back.jpg"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "p-1");
        assert_eq!(product.product_type, ProductType::new("shirt"));
        assert_eq!(product.price, Decimal::from_str("19.99").unwrap());
        assert_eq!(product.hover_or_primary_image(), "tee-back.jpg");
        assert!(product.images.is_empty());
    }

    #[test]
    fn hover_image_falls_back_to_primary() {
        let product = Product::new(
            ProductId::new("p-2").unwrap(),
            "Mug",
            ProductType::new("mug"),
            Decimal::new(900, 2),
            "mug.jpg",
        );
        assert_eq!(product.hover_or_primary_image(), "mug.jpg");
    }

    #[test]
    fn validate_rejects_negative_price() {
        let product = Product::new(
            ProductId::new("p-3").unwrap(),
            "Broken",
            ProductType::new("mug"),
            Decimal::new(-1, 0),
            "x.jpg",
        );
        match product.validate().unwrap_err() {
            StorefrontError::Validation(_) => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_blank_title() {
        let product = Product::new(
            ProductId::new("p-4").unwrap(),
            "  ",
            ProductType::new("mug"),
            Decimal::ZERO,
            "x.jpg",
        );
        assert!(product.validate().is_err());
    }

    #[test]
    fn zero_price_is_valid() {
        let product = Product::new(
            ProductId::new("p-5").unwrap(),
            "Sticker",
            ProductType::new("sticker"),
            Decimal::ZERO,
            "s.jpg",
        );
        assert!(product.validate().is_ok());
    }
}
