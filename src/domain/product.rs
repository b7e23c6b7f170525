use bigdecimal::BigDecimal;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub manufacturer: String,
    pub price: BigDecimal,
    pub image_url: String,
    pub description: String,
    pub category_id: i32,
    pub stock_quantity: i32,
}

/// Which per-customer product list an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductListKind {
    Basket,
    Favourites,
}

impl ProductListKind {
    pub fn label(self) -> &'static str {
        match self {
            ProductListKind::Basket => "basket",
            ProductListKind::Favourites => "favorites",
        }
    }
}
