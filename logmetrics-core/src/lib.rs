pub mod aggregate;
pub mod cli;
pub mod conf;
pub mod logging;
pub mod query;
pub mod record;
pub mod report;
