pub mod housing_application;

pub use housing_application::{HousingApplication, NewHousingApplication};
