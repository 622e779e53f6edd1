pub mod category_nav;
pub mod product_card;
pub mod product_grid;

pub use category_nav::CategoryNav;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
