use serde::{Deserialize, Serialize};

/// How a product is sold: by weight or by piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitOfMeasure {
    #[serde(rename = "kg")]
    Weight,
    #[serde(rename = "unit")]
    Count,
}

impl UnitOfMeasure {
    pub fn label(self) -> &'static str {
        match self {
            UnitOfMeasure::Weight => "kg",
            UnitOfMeasure::Count => "unit",
        }
    }
}

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub unit: UnitOfMeasure,
    /// Fractional for goods sold by weight.
    pub stock: f64,
    pub image_url: String,
}

/// Payload for creating a new product. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub unit: UnitOfMeasure,
    pub stock: f64,
    pub image_url: String,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<UnitOfMeasure>,
    pub stock: Option<f64>,
    pub image_url: Option<String>,
}

impl Product {
    pub fn from_parts(id: impl Into<String>, data: ProductCreate) -> Self {
        Self {
            id: id.into(),
            name: data.name,
            description: data.description,
            price: data.price,
            unit: data.unit,
            stock: data.stock,
            image_url: data.image_url,
        }
    }
}
