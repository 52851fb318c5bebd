mod classifier;
mod main;
mod raw_filter;

pub use classifier::{Classifier, ClassifyResult};
pub use main::{OrganizeOutcome, PhotoOrganizer};
pub use raw_filter::{FilterResult, RawFilter};
