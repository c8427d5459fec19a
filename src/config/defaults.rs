pub const DEFAULT_RUST_LOG: &str = "info";
pub const DEFAULT_DATABASE_PATH: &str = "furniture_company.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_DATA_DIR: &str = "data";
