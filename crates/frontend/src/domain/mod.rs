pub mod building;
pub mod energy_consumption;
pub mod section;
