pub mod admin;
pub mod committee;
pub mod meta;
pub mod registration;
