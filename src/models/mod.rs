//! Data models
//!
//! Plain input types handed to the feeding calculator.

mod dog;

pub use dog::{BirthDate, DogProfile};
