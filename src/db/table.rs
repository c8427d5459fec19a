use std::fmt;

/// The five tables of the furniture database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    MaterialTypes,
    ProductTypes,
    Workshops,
    Products,
    ProductWorkshops,
}

impl Table {
    /// Referenced tables come before the tables pointing at them.
    pub const ALL: [Table; 5] = [
        Table::MaterialTypes,
        Table::ProductTypes,
        Table::Workshops,
        Table::Products,
        Table::ProductWorkshops,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Table::MaterialTypes => "Material_types",
            Table::ProductTypes => "Product_types",
            Table::Workshops => "Workshops",
            Table::Products => "Products",
            Table::ProductWorkshops => "Product_workshops",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
