use sea_orm::{ColumnTrait, Database, EntityTrait, QueryFilter, QueryOrder};

use furniture_db::{
    db::{
        Table,
        dao::summary,
        entities::{
            prelude::{MaterialType, Product, ProductType, ProductWorkshop, Workshop},
            product, product_workshop, workshop,
        },
    },
    error::ImportError,
    pipeline,
    test_helpers::{FIXTURE_ROWS, test_config, write_csv, write_fixture_csvs},
};

fn assert_not_null_violation(err: &ImportError) {
    let source = err.db_err().expect("failure should come from the store");
    assert!(
        source.to_string().contains("NOT NULL"),
        "unexpected error: {source}"
    );
}

fn row_counts(report: &furniture_db::report::ImportReport) -> Vec<(Table, u64)> {
    report.tables.iter().map(|c| (c.table, c.rows)).collect()
}

#[tokio::test]
async fn imports_every_row_and_reports_file_size() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cfg = test_config(dir.path());
    write_fixture_csvs(&cfg.import.data_dir);

    let report = pipeline::run(&cfg).await.expect("import fixture");

    assert_eq!(row_counts(&report), FIXTURE_ROWS.to_vec());
    assert_eq!(report.database_path, cfg.database.path);
    assert!(report.file_size_bytes > 0);

    let db = Database::connect(cfg.database.url())
        .await
        .expect("reopen database");
    let stored = summary::count_rows(&db).await.expect("count rows");
    let stored: Vec<(Table, u64)> = stored.iter().map(|c| (c.table, c.rows)).collect();
    assert_eq!(stored, FIXTURE_ROWS.to_vec());
}

#[tokio::test]
async fn rerun_rebuilds_from_scratch() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cfg = test_config(dir.path());
    write_fixture_csvs(&cfg.import.data_dir);

    let first = pipeline::run(&cfg).await.expect("first run");
    let second = pipeline::run(&cfg).await.expect("second run");

    assert_eq!(row_counts(&first), row_counts(&second));

    let db = Database::connect(cfg.database.url())
        .await
        .expect("reopen database");
    let materials = MaterialType::find()
        .order_by_asc(furniture_db::db::entities::material_type::Column::MaterialTypeId)
        .all(&db)
        .await
        .expect("load materials");
    assert_eq!(materials.len(), 3);
    assert_eq!(materials[0].material_type_id, 1);
}

#[tokio::test]
async fn resolves_names_to_foreign_keys() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cfg = test_config(dir.path());
    write_fixture_csvs(&cfg.import.data_dir);
    pipeline::run(&cfg).await.expect("import fixture");

    let db = Database::connect(cfg.database.url())
        .await
        .expect("reopen database");
    let stenka = Product::find()
        .filter(product::Column::ArticleNumber.eq("1018556"))
        .one(&db)
        .await
        .expect("load product")
        .expect("product should exist");
    let hallway = ProductType::find_by_id(stenka.product_type_id)
        .one(&db)
        .await
        .expect("load product type")
        .expect("product type should exist");
    let ldsp = MaterialType::find_by_id(stenka.material_type_id)
        .one(&db)
        .await
        .expect("load material")
        .expect("material should exist");

    assert_eq!(hallway.product_type_name, "Прихожие");
    assert_eq!(hallway.type_coefficient, Some(5.5));
    assert_eq!(ldsp.material_type_name, "ЛДСП");
    assert_eq!(stenka.min_partner_price, Some(216907.0));

    let assembly = Workshop::find()
        .filter(workshop::Column::WorkshopName.eq("Сборочный"))
        .one(&db)
        .await
        .expect("load workshop")
        .expect("workshop should exist");
    let assignment = ProductWorkshop::find()
        .filter(product_workshop::Column::ProductId.eq(stenka.product_id))
        .filter(product_workshop::Column::WorkshopId.eq(assembly.workshop_id))
        .one(&db)
        .await
        .expect("load assignment")
        .expect("assignment should exist");
    assert_eq!(assignment.production_time_hours, Some(2.5));
    assert_eq!(assignment.priority, 1);
}

#[tokio::test]
async fn unknown_product_type_stops_the_run() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cfg = test_config(dir.path());
    write_fixture_csvs(&cfg.import.data_dir);
    write_csv(
        &cfg.import.data_dir,
        Table::Products,
        "Наименование продукции,Артикул,Тип продукции,Основной материал,Минимальная стоимость для партнера
Шкаф Гранд,1549922,Гостиные,МДФ,41400.50
Кресло Лира,2000001,Кресла,Дерево,12000
",
    );

    let err = pipeline::run(&cfg).await.expect_err("unknown type should fail");

    assert!(matches!(
        err,
        ImportError::Insert {
            table: "Products",
            record: 2,
            ..
        }
    ));
    assert_not_null_violation(&err);
}

#[tokio::test]
async fn blank_material_name_stops_the_run() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cfg = test_config(dir.path());
    write_fixture_csvs(&cfg.import.data_dir);
    write_csv(
        &cfg.import.data_dir,
        Table::MaterialTypes,
        "Тип материала,Процент потерь сырья\nДерево,12.5\nМДФ,3\n,4\n",
    );

    let err = pipeline::run(&cfg).await.expect_err("blank name should fail");

    assert!(matches!(
        err,
        ImportError::Insert {
            table: "Material_types",
            record: 3,
            ..
        }
    ));
    assert_not_null_violation(&err);
}

#[tokio::test]
async fn blank_product_name_in_assignments_is_unmatched() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cfg = test_config(dir.path());
    write_fixture_csvs(&cfg.import.data_dir);
    write_csv(
        &cfg.import.data_dir,
        Table::ProductWorkshops,
        "Наименование продукции,Название цеха,\"Время изготовления, ч\"\n,Сушильный,1.5\n",
    );

    let err = pipeline::run(&cfg).await.expect_err("blank product should fail");

    assert!(matches!(
        err,
        ImportError::Insert {
            table: "Product_workshops",
            record: 1,
            ..
        }
    ));
    assert_not_null_violation(&err);
}

#[tokio::test]
async fn failed_run_commits_nothing() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cfg = test_config(dir.path());
    write_fixture_csvs(&cfg.import.data_dir);
    write_csv(
        &cfg.import.data_dir,
        Table::ProductWorkshops,
        "Наименование продукции,Название цеха,\"Время изготовления, ч\"
Шкаф Гранд,Сушильный,1.5
Шкаф Гранд,Сушильный,2
",
    );

    let err = pipeline::run(&cfg).await.expect_err("duplicate pair should fail");
    assert!(matches!(
        err,
        ImportError::Insert {
            table: "Product_workshops",
            record: 2,
            ..
        }
    ));

    let db = Database::connect(cfg.database.url())
        .await
        .expect("reopen database");
    let counts = summary::count_rows(&db).await.expect("count rows");
    assert!(counts.iter().all(|count| count.rows == 0));
}

#[tokio::test]
async fn missing_csv_is_an_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cfg = test_config(dir.path());
    write_fixture_csvs(&cfg.import.data_dir);
    std::fs::remove_file(cfg.import.data_dir.join("Workshops_import.csv"))
        .expect("remove workshops file");

    let err = pipeline::run(&cfg).await.expect_err("missing file should fail");

    match err {
        ImportError::Io { path, .. } => assert!(path.ends_with("Workshops_import.csv")),
        other => panic!("unexpected error: {other:?}"),
    }
}
