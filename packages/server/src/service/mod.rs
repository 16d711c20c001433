mod error;
mod registration;
mod validation;

pub use error::{FieldError, ServiceError};
pub use registration::RegistrationService;
pub use validation::validate_registration;
