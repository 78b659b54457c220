//! File output for demand tables.

/// CSV export of the demand table.
pub mod export;
