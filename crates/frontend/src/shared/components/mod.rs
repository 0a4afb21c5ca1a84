pub mod field_control;
pub mod ui;
