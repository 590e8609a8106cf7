pub mod deps;
pub mod mailer;

pub use deps::ServerDeps;
pub use mailer::{BaseMailer, MockMailer, ResendAdapter, SentEmail};
