mod card;

pub use card::{Card, CardFilter};
