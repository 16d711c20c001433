pub mod admin;
pub mod meta;
pub mod registration;
