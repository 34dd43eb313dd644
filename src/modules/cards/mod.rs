// Cards module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Card, CardFilter};
pub use repositories::{CardRepository, InMemoryCardRepository, MySqlCardRepository};
pub use services::CardService;
