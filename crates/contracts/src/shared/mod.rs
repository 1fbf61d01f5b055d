pub mod date;
pub mod export;
pub mod metadata;
pub mod number;
pub mod page;
pub mod report_query;
