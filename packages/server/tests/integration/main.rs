mod registration;
mod store;
