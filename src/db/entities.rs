#[allow(unused_imports)]
pub mod prelude {
    pub use super::material_type::Entity as MaterialType;
    pub use super::product::Entity as Product;
    pub use super::product_type::Entity as ProductType;
    pub use super::product_workshop::Entity as ProductWorkshop;
    pub use super::workshop::Entity as Workshop;
}

pub mod material_type;
pub mod product;
pub mod product_type;
pub mod product_workshop;
pub mod workshop;
