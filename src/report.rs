use std::{fmt, path::PathBuf};

use crate::db::dao::TableCount;

/// Outcome of a completed run, printed at the end of `main`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    pub database_path: PathBuf,
    pub tables: Vec<TableCount>,
    pub file_size_bytes: u64,
}

impl ImportReport {
    pub fn total_rows(&self) -> u64 {
        self.tables.iter().map(|count| count.rows).sum()
    }

    pub fn file_size_kb(&self) -> f64 {
        self.file_size_bytes as f64 / 1024.0
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for count in &self.tables {
            writeln!(f, "  {}: {} records", count.table, count.rows)?;
        }
        writeln!(f, "Database created: {}", self.database_path.display())?;
        write!(f, "  Size: {:.1} KB", self.file_size_kb())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::ImportReport;
    use crate::db::{Table, dao::TableCount};

    #[test]
    fn summary_lists_tables_then_path_and_size() {
        let report = ImportReport {
            database_path: PathBuf::from("out/furniture_company.db"),
            tables: vec![
                TableCount {
                    table: Table::MaterialTypes,
                    rows: 5,
                },
                TableCount {
                    table: Table::ProductWorkshops,
                    rows: 12,
                },
            ],
            file_size_bytes: 49_152 + 102,
        };

        assert_eq!(
            report.to_string(),
            "  Material_types: 5 records\n\
             \x20 Product_workshops: 12 records\n\
             Database created: out/furniture_company.db\n\
             \x20 Size: 48.1 KB"
        );
        assert_eq!(report.total_rows(), 17);
    }
}
