use sqlx::FromRow;

use crate::models::product::or_null;

/// Single-table product: just a key and a name.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct FlatProduct {
    sku: i32,
    name: Option<String>,
}

impl FlatProduct {
    pub fn new(sku: i32, name: Option<String>) -> Self {
        Self { sku, name }
    }

    pub fn sku(&self) -> i32 {
        self.sku
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    // No separator between the sku value and `name`; report consumers rely on it.
    pub fn render(&self) -> String {
        format!("sku : {}name : {}", self.sku, or_null(self.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_flat_template() {
        let product = FlatProduct::new(7, Some("Bolt".into()));
        assert_eq!(product.render(), "sku : 7name : Bolt");
    }

    #[test]
    fn missing_name_renders_null() {
        assert_eq!(FlatProduct::new(8, None).render(), "sku : 8name : null");
    }
}
