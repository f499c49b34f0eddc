#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Shoplook gateway.
//!
//! Looks and products arrive with one of two identifier fields (`id` or the
//! legacy `objectId` / `admin_graphql_api_id`), as strings or integers. The
//! types here collapse that into a single canonical string id while
//! deserializing, so nothing downstream ever inspects the raw fields.
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors raised while normalising gateway records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Neither the primary nor the legacy identifier field carried a value.
    #[error("{entity} record is missing an identifier")]
    MissingId {
        /// Kind of record that failed normalisation.
        entity: &'static str,
    },
}

/// Identifier as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl RawId {
    fn into_canonical(self) -> Option<String> {
        match self {
            Self::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Self::Number(value) => Some(value.to_string()),
        }
    }
}

fn canonical_id(primary: Option<RawId>, legacy: Option<RawId>) -> Option<String> {
    primary
        .and_then(RawId::into_canonical)
        .or_else(|| legacy.and_then(RawId::into_canonical))
}

fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.and_then(RawId::into_canonical))
}

/// Image attached to a look or product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    /// Absolute image URL (`src` on product images).
    #[serde(alias = "src")]
    pub url: String,
    /// Optional alternative text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Purchasable variant of a product. Only the count is surfaced in the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Variant identifier when the gateway supplies one.
    #[serde(default, deserialize_with = "optional_id")]
    pub id: Option<String>,
    /// Variant title (size, colour, ...).
    #[serde(default)]
    pub title: Option<String>,
}

/// A curated collection of media and the products featured in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LookRecord")]
pub struct Look {
    /// Canonical look identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ordered media shown in the look card.
    pub medias: Vec<Media>,
    /// Ordered canonical ids of the products referenced by the look.
    pub products: Vec<String>,
    /// Product references dropped because they carried no usable id.
    #[serde(skip)]
    pub skipped_products: usize,
}

impl Look {
    /// Number of products referenced by the look.
    #[must_use]
    pub const fn product_count(&self) -> usize {
        self.products.len()
    }
}

#[derive(Deserialize)]
struct LookRecord {
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default, rename = "objectId")]
    object_id: Option<RawId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    medias: Vec<Media>,
    #[serde(default)]
    products: Vec<RawProductRef>,
}

/// Product reference inside a look: either a bare id or an embedded record.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawProductRef {
    Id(RawId),
    Record {
        #[serde(default)]
        id: Option<RawId>,
        #[serde(default)]
        admin_graphql_api_id: Option<RawId>,
    },
    Unusable(#[allow(dead_code)] IgnoredAny),
}

impl RawProductRef {
    fn into_canonical(self) -> Option<String> {
        match self {
            Self::Id(id) => id.into_canonical(),
            Self::Record {
                id,
                admin_graphql_api_id,
            } => canonical_id(id, admin_graphql_api_id),
            Self::Unusable(_) => None,
        }
    }
}

impl TryFrom<LookRecord> for Look {
    type Error = ModelError;

    fn try_from(record: LookRecord) -> Result<Self, Self::Error> {
        let id = canonical_id(record.id, record.object_id)
            .ok_or(ModelError::MissingId { entity: "look" })?;
        let total = record.products.len();
        let products: Vec<String> = record
            .products
            .into_iter()
            .filter_map(RawProductRef::into_canonical)
            .collect();
        Ok(Self {
            id,
            name: record.name.unwrap_or_default(),
            medias: record.medias,
            skipped_products: total - products.len(),
            products,
        })
    }
}

/// An item for sale, as shown inside the products modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    /// Canonical product identifier.
    pub id: String,
    /// Product title.
    pub title: String,
    /// URL slug on the storefront.
    pub handle: String,
    /// Ordered product images.
    pub images: Vec<Media>,
    /// Purchasable variants.
    pub variants: Vec<Variant>,
}

impl Product {
    /// Number of variants available for the product.
    #[must_use]
    pub const fn variant_count(&self) -> usize {
        self.variants.len()
    }
}

#[derive(Deserialize)]
struct ProductRecord {
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default)]
    admin_graphql_api_id: Option<RawId>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    handle: Option<String>,
    #[serde(default)]
    images: Vec<Media>,
    #[serde(default)]
    variants: Vec<Variant>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = ModelError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let id = canonical_id(record.id, record.admin_graphql_api_id)
            .ok_or(ModelError::MissingId { entity: "product" })?;
        Ok(Self {
            id,
            title: record.title.unwrap_or_default(),
            handle: record.handle.unwrap_or_default(),
            images: record.images,
            variants: record.variants,
        })
    }
}

/// List payload decoded element by element.
///
/// A single record that cannot be normalised is dropped and counted instead of
/// failing the whole list. Decoding a bare `T` still reports [`ModelError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordList<T> {
    /// Records that decoded, in payload order.
    pub items: Vec<T>,
    /// Number of records dropped.
    pub dropped: usize,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            dropped: 0,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListEntry<T> {
    Usable(T),
    Unusable(#[allow(dead_code)] IgnoredAny),
}

impl<'de, T> Deserialize<'de> for RecordList<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<ListEntry<T>>::deserialize(deserializer)?;
        let mut list = Self {
            items: Vec::with_capacity(entries.len()),
            dropped: 0,
        };
        for entry in entries {
            match entry {
                ListEntry::Usable(item) => list.items.push(item),
                ListEntry::Unusable(_) => list.dropped += 1,
            }
        }
        Ok(list)
    }
}

/// Usage counters returned by `GET /api/get_views`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewStats {
    /// Whether the shop is on a paid plan.
    #[serde(default)]
    pub subscribed: bool,
    /// Number of widget views recorded for the shop.
    #[serde(default)]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn look_prefers_primary_id_and_falls_back_to_object_id() -> Result<(), serde_json::Error> {
        let primary: Look = serde_json::from_value(json!({
            "id": "look-1",
            "objectId": "legacy-1",
            "name": "Summer",
        }))?;
        assert_eq!(primary.id, "look-1");

        let legacy: Look = serde_json::from_value(json!({
            "objectId": "legacy-2",
            "name": "Winter",
            "medias": [{ "url": "https://cdn.example/a.jpg" }],
        }))?;
        assert_eq!(legacy.id, "legacy-2");
        assert_eq!(legacy.medias.len(), 1);
        Ok(())
    }

    #[test]
    fn look_normalises_mixed_product_references() -> Result<(), serde_json::Error> {
        let look: Look = serde_json::from_value(json!({
            "id": 42,
            "name": "Layers",
            "products": [
                7_001,
                "7002",
                { "admin_graphql_api_id": "gid://shopify/Product/7003" },
                { "id": 7_004, "admin_graphql_api_id": "ignored" },
            ],
        }))?;
        assert_eq!(look.id, "42");
        assert_eq!(
            look.products,
            vec![
                "7001".to_string(),
                "7002".to_string(),
                "gid://shopify/Product/7003".to_string(),
                "7004".to_string(),
            ]
        );
        assert_eq!(look.product_count(), 4);
        Ok(())
    }

    #[test]
    fn look_without_identifier_is_rejected() {
        let err = serde_json::from_value::<Look>(json!({ "id": "  ", "name": "Nameless" }))
            .expect_err("blank ids must not normalise");
        assert!(err.to_string().contains("look record is missing an identifier"));
    }

    #[test]
    fn unusable_product_references_are_skipped() -> Result<(), serde_json::Error> {
        let look: Look = serde_json::from_value(json!({
            "id": "L1",
            "products": ["p1", { "title": "no id" }, "", true, 7],
        }))?;
        assert_eq!(look.products, vec!["p1".to_string(), "7".to_string()]);
        assert_eq!(look.skipped_products, 3);
        Ok(())
    }

    #[test]
    fn product_without_identifier_is_rejected() {
        let err = serde_json::from_value::<Product>(json!({
            "title": "Orphan",
            "handle": "orphan",
        }))
        .expect_err("products need an id");
        assert!(err.to_string().contains("product record is missing an identifier"));
    }

    #[test]
    fn look_list_keeps_usable_records() -> Result<(), serde_json::Error> {
        let list: RecordList<Look> = serde_json::from_value(json!([
            { "id": "L1", "name": "Kept", "products": ["p1", { "title": "no id" }] },
            { "name": "No id" },
            "not a record",
            { "objectId": "L2", "name": "Legacy" },
        ]))?;
        let ids: Vec<&str> = list.items.iter().map(|look| look.id.as_str()).collect();
        assert_eq!(ids, vec!["L1", "L2"]);
        assert_eq!(list.dropped, 2);
        assert_eq!(list.items[0].products, vec!["p1".to_string()]);
        assert_eq!(list.items[0].skipped_products, 1);
        Ok(())
    }

    #[test]
    fn product_list_keeps_usable_records() -> Result<(), serde_json::Error> {
        let list: RecordList<Product> = serde_json::from_value(json!([
            { "title": "No id" },
            { "admin_graphql_api_id": "gid://shopify/Product/2", "title": "Kept" },
        ]))?;
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].id, "gid://shopify/Product/2");
        assert_eq!(list.dropped, 1);
        Ok(())
    }

    #[test]
    fn record_list_still_requires_an_array() {
        assert!(serde_json::from_value::<RecordList<Look>>(json!({ "id": "L1" })).is_err());
    }

    #[test]
    fn null_name_defaults_to_empty() -> Result<(), serde_json::Error> {
        let look: Look = serde_json::from_value(json!({ "id": "l", "name": null }))?;
        assert_eq!(look.name, "");
        assert!(look.products.is_empty());
        Ok(())
    }

    #[test]
    fn product_falls_back_to_admin_graphql_id() -> Result<(), serde_json::Error> {
        let product: Product = serde_json::from_value(json!({
            "admin_graphql_api_id": "gid://shopify/Product/1",
            "title": "Linen Shirt",
            "handle": "linen-shirt",
            "images": [{ "src": "https://cdn.example/shirt.jpg", "alt": null }],
            "variants": [{ "id": 1, "title": "S" }, { "id": 2, "title": "M" }],
        }))?;
        assert_eq!(product.id, "gid://shopify/Product/1");
        assert_eq!(product.images[0].url, "https://cdn.example/shirt.jpg");
        assert_eq!(product.variant_count(), 2);
        assert_eq!(product.variants[0].id.as_deref(), Some("1"));
        Ok(())
    }

    #[test]
    fn serialized_look_round_trips_through_canonical_fields() -> Result<(), serde_json::Error> {
        let look = Look {
            id: "l-9".to_string(),
            name: "Evening".to_string(),
            medias: vec![],
            products: vec!["p1".to_string()],
            skipped_products: 0,
        };
        let decoded: Look = serde_json::from_value(serde_json::to_value(&look)?)?;
        assert_eq!(decoded, look);
        Ok(())
    }

    #[test]
    fn view_stats_default_missing_fields() -> Result<(), serde_json::Error> {
        let stats: ViewStats = serde_json::from_value(json!({ "count": 1_500 }))?;
        assert_eq!(
            stats,
            ViewStats {
                subscribed: false,
                count: 1_500
            }
        );
        Ok(())
    }
}
