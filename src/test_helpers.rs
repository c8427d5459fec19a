use std::{fs, path::Path};

use sea_orm::DatabaseConnection;

use crate::{
    config::{AppConfig, DatabaseConfig, ImportConfig},
    db::{Table, connection, schema},
    import::importer::source_file,
};

const MATERIAL_TYPES_CSV: &str = "\u{feff}Тип материала,Процент потерь сырья
Дерево,\"12,5\"
ЛДСП,0.70%
МДФ,0.30%
";

const PRODUCT_TYPES_CSV: &str = "Тип продукции,Коэффициент типа продукции
Гостиные,3.5
Прихожие,\"5,5\"
Мягкая мебель,3
";

// Trailing space in the last header is how the source files ship.
const WORKSHOPS_CSV: &str = "Название цеха,Тип цеха,Количество человек для производства 
Проектный,Проектирование,4
Сборочный,Сборка,5
Сушильный,Сушка,
";

const PRODUCTS_CSV: &str = "Наименование продукции,Артикул,Тип продукции,Основной материал,Минимальная стоимость для партнера
Стенка для прихожей Россо,1018556,Прихожие,ЛДСП,\"216 907,00\"
Диван угловой Мадрид,1130112,Мягкая мебель,Дерево,85000
Шкаф Гранд,1549922,Гостиные,МДФ,41400.50
";

const PRODUCT_WORKSHOPS_CSV: &str = "Наименование продукции,Название цеха,\"Время изготовления, ч\"
Стенка для прихожей Россо,Проектный,1
Стенка для прихожей Россо,Сборочный,\"2,5\"
Диван угловой Мадрид,Сборочный,3
Шкаф Гранд,Сушильный,1.5
";

/// Rows per table in the fixture written by [`write_fixture_csvs`].
pub const FIXTURE_ROWS: [(Table, u64); 5] = [
    (Table::MaterialTypes, 3),
    (Table::ProductTypes, 3),
    (Table::Workshops, 3),
    (Table::Products, 3),
    (Table::ProductWorkshops, 4),
];

/// Config rooted in `root`: database under `root/out`, CSVs under `root/data`.
pub fn test_config(root: &Path) -> AppConfig {
    AppConfig {
        database: DatabaseConfig {
            path: root.join("out").join("furniture_company.db"),
            ..Default::default()
        },
        import: ImportConfig {
            data_dir: root.join("data"),
        },
        ..Default::default()
    }
}

pub fn write_fixture_csvs(data_dir: &Path) {
    for (table, contents) in [
        (Table::MaterialTypes, MATERIAL_TYPES_CSV),
        (Table::ProductTypes, PRODUCT_TYPES_CSV),
        (Table::Workshops, WORKSHOPS_CSV),
        (Table::Products, PRODUCTS_CSV),
        (Table::ProductWorkshops, PRODUCT_WORKSHOPS_CSV),
    ] {
        write_csv(data_dir, table, contents);
    }
}

/// Overwrites the source file of `table` with `contents`.
pub fn write_csv(data_dir: &Path, table: Table, contents: &str) {
    fs::create_dir_all(data_dir).expect("create data dir");
    fs::write(data_dir.join(source_file(table)), contents).expect("write csv fixture");
}

/// Empty database with the full schema at `dir/test.db`.
pub async fn fresh_database(dir: &Path) -> DatabaseConnection {
    let cfg = DatabaseConfig {
        path: dir.join("test.db"),
        ..Default::default()
    };
    let db = connection::recreate(&cfg).await.expect("open test database");
    schema::initialize(&db).await.expect("create schema");
    db
}
