use std::future::{ready, Ready};
use std::sync::{Arc, Mutex};

use models::{AuthenticatedUser, Client};

use crate::forms::{login_form, register_client_form, FormStateStore, FormValues};
use crate::validation::FieldValidator;

pub fn login_validator() -> FieldValidator {
    login_form()
}

/// A login store whose fields already hold `values`.
pub fn login_store(values: &[(&str, &str)]) -> FormStateStore {
    store_with(login_form(), values)
}

pub fn register_store(values: &[(&str, &str)]) -> FormStateStore {
    store_with(register_client_form(), values)
}

fn store_with(validator: FieldValidator, values: &[(&str, &str)]) -> FormStateStore {
    let mut store = FormStateStore::new(validator);
    for (key, value) in values {
        store.set_field(key, *value).expect("field is declared by the form");
    }
    store
}

pub fn authenticated_user(email: &str) -> AuthenticatedUser {
    AuthenticatedUser {
        token: format!("token-for-{}", email),
        user: Client {
            id: "42".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Pop".to_string(),
            email: email.to_string(),
            phone_number: "0712345678".to_string(),
        },
    }
}

/// Stand-in for a remote submit operation that records the values it was
/// called with.
#[derive(Clone)]
pub struct RecordingOperation {
    calls: Arc<Mutex<Vec<FormValues>>>,
    result: Result<(), String>,
}

impl RecordingOperation {
    pub fn succeeding() -> Self {
        RecordingOperation {
            calls: Arc::new(Mutex::new(Vec::new())),
            result: Ok(()),
        }
    }

    pub fn failing(message: &str) -> Self {
        RecordingOperation {
            calls: Arc::new(Mutex::new(Vec::new())),
            result: Err(message.to_string()),
        }
    }

    pub fn call(&self) -> impl FnOnce(FormValues) -> Ready<Result<(), String>> {
        let calls = Arc::clone(&self.calls);
        let result = self.result.clone();
        move |values| {
            calls.lock().unwrap().push(values);
            ready(result)
        }
    }

    pub fn calls(&self) -> Vec<FormValues> {
        self.calls.lock().unwrap().clone()
    }
}
