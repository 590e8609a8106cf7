pub mod submit;

pub use submit::{submit_application, SubmitApplicationInput};
