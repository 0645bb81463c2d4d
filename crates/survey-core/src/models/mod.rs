pub mod assessment;
pub mod fields;
pub mod health;
pub mod lifestyle;
pub mod patient;
