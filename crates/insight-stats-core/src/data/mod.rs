//! In-memory tabular data

mod contingency;
mod dataset;

pub use contingency::ContingencyTable;
pub use dataset::{Column, Dataset, Row};
