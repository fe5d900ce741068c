pub mod definitions;
pub mod state;
pub mod store;
pub mod submission;
pub mod values;

pub use definitions::{client_registration_from, credentials_from, fields, login_form, register_client_form};
pub use state::{FormError, FormEvent, FormState};
pub use store::FormStateStore;
pub use submission::{SubmissionController, SubmissionOutcome, SubmissionState};
pub use values::{FormErrors, FormValues};
