pub mod authentication;
pub mod forms;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use authentication::*;
pub use forms::*;
pub use validation::*;
