pub mod config;
pub mod db;
pub mod error;
pub mod import;
pub mod logging;
pub mod pipeline;
pub mod report;
#[doc(hidden)]
pub mod test_helpers;
