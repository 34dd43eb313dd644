mod card_controller;

pub use card_controller::{
    card_all, card_show, configure, index, search_cards, IndexQuery, IndexResponse, QueryPairs,
    SearchQuery,
};
