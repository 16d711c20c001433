pub mod committee;
pub mod error;
pub mod registration;
pub mod school;
pub mod stats;
pub mod status;

pub use committee::{COMMITTEES, Committee};
pub use error::ParseValueError;
pub use registration::{DedupKey, NewRegistration, Registration, normalize_name};
pub use school::{Division, Grade};
pub use stats::RegistrationStats;
pub use status::RegistrationStatus;
