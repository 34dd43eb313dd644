use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::Result;
use crate::modules::cards::models::{Card, CardFilter};
use crate::modules::cards::repositories::CardRepository;

/// In-memory card repository keyed by `uuid`
///
/// Mirrors the MySQL repository: case-insensitive name search and `uuid`
/// ordering on every listing.
#[derive(Default)]
pub struct InMemoryCardRepository {
    cards: RwLock<BTreeMap<String, Card>>,
}

impl InMemoryCardRepository {
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        let cards = cards
            .into_iter()
            .map(|card| (card.uuid.clone(), card))
            .collect();

        Self {
            cards: RwLock::new(cards),
        }
    }

    /// Insert or replace a card by `uuid`
    pub async fn insert(&self, card: Card) {
        self.cards.write().await.insert(card.uuid.clone(), card);
    }

    pub async fn len(&self) -> usize {
        self.cards.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.cards.read().await.is_empty()
    }
}

fn to_usize(n: u64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

#[async_trait]
impl CardRepository for InMemoryCardRepository {
    async fn find_all(&self) -> Result<Vec<Card>> {
        Ok(self.cards.read().await.values().cloned().collect())
    }

    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<Card>> {
        Ok(self.cards.read().await.get(uuid).cloned())
    }

    async fn search_by_name(
        &self,
        fragment: &str,
        filter: &CardFilter,
        limit: u64,
    ) -> Result<Vec<Card>> {
        let cards = self.cards.read().await;

        Ok(cards
            .values()
            .filter(|card| filter.matches(card) && card.name_contains(fragment))
            .take(to_usize(limit))
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &CardFilter) -> Result<u64> {
        let cards = self.cards.read().await;
        Ok(cards.values().filter(|card| filter.matches(card)).count() as u64)
    }

    async fn find_page(&self, filter: &CardFilter, offset: u64, limit: u64) -> Result<Vec<Card>> {
        let cards = self.cards.read().await;

        Ok(cards
            .values()
            .filter(|card| filter.matches(card))
            .skip(to_usize(offset))
            .take(to_usize(limit))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
