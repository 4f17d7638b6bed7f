pub mod effects;
pub mod validation;
