//! Product DTOs - Data Transfer Objects per prodotti

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body di `POST /products`. I campi sono `Option` per poter rispondere
/// con un errore di validazione invece di un rifiuto del JSON.
#[derive(Serialize, Deserialize, Debug, Default, Validate)]
pub struct CreateProductRequest {
    #[validate(
        required(message = "name is required"),
        length(min = 2, max = 255, message = "name must be between 2 and 255 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "price is required"),
        range(exclusive_min = 0.0, message = "price must be greater than 0")
    )]
    pub price: Option<f64>,
    #[validate(
        required(message = "category is required"),
        length(min = 1, max = 100, message = "category must be between 1 and 100 characters")
    )]
    pub category: Option<String>,
}

impl CreateProductRequest {
    pub fn trimmed(mut self) -> Self {
        self.name = self.name.map(|n| n.trim().to_string());
        self.category = self.category.map(|c| c.trim().to_string());
        self
    }
}

/// DTO per creare un nuovo prodotto (senza id)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateProductDTO {
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl TryFrom<CreateProductRequest> for CreateProductDTO {
    type Error = validator::ValidationErrors;

    /// Trim + validazione; i campi sono garantiti presenti dopo `validate()`
    fn try_from(value: CreateProductRequest) -> Result<Self, Self::Error> {
        let value = value.trimmed();
        value.validate()?;
        Ok(Self {
            name: value.name.unwrap_or_default(),
            price: value.price.unwrap_or_default(),
            category: value.category.unwrap_or_default(),
        })
    }
}

/// Body di `PUT /products/{id}`: solo i campi presenti vengono modificati
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateProductDTO {
    #[validate(length(min = 2, max = 255, message = "name must be between 2 and 255 characters"))]
    pub name: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than 0"))]
    pub price: Option<f64>,
    #[validate(length(min = 1, max = 100, message = "category must be between 1 and 100 characters"))]
    pub category: Option<String>,
}

impl UpdateProductDTO {
    pub fn trimmed(mut self) -> Self {
        self.name = self.name.map(|n| n.trim().to_string());
        self.category = self.category.map(|c| c.trim().to_string());
        self
    }
}
