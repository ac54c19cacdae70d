//! Query DTOs - Data Transfer Objects per query di ricerca

use serde::{Deserialize, Serialize};

/// Query parameters per la lista prodotti (`/products?category=...`)
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ProductQuery {
    #[serde(default)]
    pub category: Option<String>,
}

impl ProductQuery {
    /// Categoria ripulita dagli spazi; `None` se assente o vuota
    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
