//! One struct per source file. Field names are the CSV headers after
//! trimming; columns not listed here are ignored. Blank or missing cells are
//! `None`, including names: the store decides whether a row may lack one.

use serde::Deserialize;

use super::decimal;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MaterialTypeRecord {
    #[serde(rename = "Тип материала", default)]
    pub name: Option<String>,
    #[serde(
        rename = "Процент потерь сырья",
        default,
        deserialize_with = "decimal::optional_f64"
    )]
    pub waste_percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductTypeRecord {
    #[serde(rename = "Тип продукции", default)]
    pub name: Option<String>,
    #[serde(
        rename = "Коэффициент типа продукции",
        default,
        deserialize_with = "decimal::optional_f64"
    )]
    pub type_coefficient: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkshopRecord {
    #[serde(rename = "Название цеха", default)]
    pub name: Option<String>,
    #[serde(rename = "Тип цеха", default)]
    pub workshop_type: Option<String>,
    #[serde(
        rename = "Количество человек для производства",
        default,
        deserialize_with = "decimal::optional_i32"
    )]
    pub staff_count: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "Наименование продукции", default)]
    pub name: Option<String>,
    #[serde(rename = "Артикул", default)]
    pub article_number: Option<String>,
    #[serde(rename = "Тип продукции", default)]
    pub product_type: Option<String>,
    #[serde(rename = "Основной материал", default)]
    pub material_type: Option<String>,
    #[serde(
        rename = "Минимальная стоимость для партнера",
        default,
        deserialize_with = "decimal::optional_f64"
    )]
    pub min_partner_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductWorkshopRecord {
    #[serde(rename = "Наименование продукции", default)]
    pub product: Option<String>,
    #[serde(rename = "Название цеха", default)]
    pub workshop: Option<String>,
    #[serde(
        rename = "Время изготовления, ч",
        default,
        deserialize_with = "decimal::optional_f64"
    )]
    pub production_time_hours: Option<f64>,
}
