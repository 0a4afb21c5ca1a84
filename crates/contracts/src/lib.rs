pub mod catalog;
pub mod fields;
pub mod registry;
pub mod submission;
pub mod validation;
