pub mod card_repository;
pub mod memory;

pub use card_repository::{CardRepository, MySqlCardRepository};
pub use memory::InMemoryCardRepository;
