pub mod cors;
pub mod health;
pub mod job;
pub mod validation;
