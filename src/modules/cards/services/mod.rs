pub mod card_service;

pub use card_service::{
    meets_search_threshold, CardService, PAGE_SIZE, SEARCH_LIMIT, SEARCH_MIN_LENGTH,
};
