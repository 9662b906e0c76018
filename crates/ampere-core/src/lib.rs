pub mod check;
pub mod exam;
pub mod quiz;
pub mod view;
