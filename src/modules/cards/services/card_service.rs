use std::sync::Arc;

use tracing::info;

use crate::core::{paginate, AppError, Page, Result};
use crate::modules::cards::models::{Card, CardFilter};
use crate::modules::cards::repositories::CardRepository;

/// Shortest search query that reaches the store
pub const SEARCH_MIN_LENGTH: usize = 3;

/// Maximum number of search results
pub const SEARCH_LIMIT: u64 = 20;

/// Cards per page on the paginated index
pub const PAGE_SIZE: u64 = 100;

/// Whether `query` is long enough to run a search.
///
/// Length is counted in characters, not bytes.
pub fn meets_search_threshold(query: &str) -> bool {
    query.chars().count() >= SEARCH_MIN_LENGTH
}

/// Read-only queries over the card catalog
#[derive(Clone)]
pub struct CardService {
    card_repo: Arc<dyn CardRepository>,
}

impl CardService {
    pub fn new(card_repo: Arc<dyn CardRepository>) -> Self {
        Self { card_repo }
    }

    /// Every card in the catalog, unpaginated
    pub async fn list_all(&self) -> Result<Vec<Card>> {
        info!("API cardAll");
        self.card_repo.find_all().await
    }

    /// Card with exactly this `uuid`
    ///
    /// # Errors
    /// `AppError::NotFound` with message `Card not found` when absent.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<Card> {
        info!(uuid = %uuid, "API cardShow");

        self.card_repo
            .find_by_uuid(uuid)
            .await?
            .ok_or_else(|| AppError::not_found("Card not found"))
    }

    /// Case-insensitive name search, optionally narrowed to one set.
    ///
    /// Queries shorter than [`SEARCH_MIN_LENGTH`] return no cards without
    /// touching the store. At most [`SEARCH_LIMIT`] cards are returned.
    pub async fn search(&self, query: &str, set_code: Option<&str>) -> Result<Vec<Card>> {
        let filter = CardFilter::by_set_code(set_code);

        info!(query = %query, set_code = ?filter.set_code, "API searchCards");

        if !meets_search_threshold(query) {
            return Ok(Vec::new());
        }

        self.card_repo.search_by_name(query, &filter, SEARCH_LIMIT).await
    }

    /// One page of the catalog, optionally restricted to one set.
    ///
    /// `page` values below 1 are treated as the first page. Pages past the
    /// end are empty but still report the true totals.
    pub async fn index(&self, set_code: Option<&str>, page: i64) -> Result<Page<Card>> {
        let filter = CardFilter::by_set_code(set_code);

        let total_items = self.card_repo.count(&filter).await?;
        let pagination = paginate(total_items, PAGE_SIZE, page);

        info!(
            page = pagination.page,
            set_code = ?filter.set_code,
            "API index paginated"
        );

        let items = if pagination.offset >= total_items {
            Vec::new()
        } else {
            self.card_repo
                .find_page(&filter, pagination.offset, pagination.limit)
                .await?
        };

        Ok(Page {
            items,
            page: pagination.page,
            total_pages: pagination.total_pages,
            total_items,
        })
    }

    /// Store reachability for readiness probes
    pub async fn ping(&self) -> Result<()> {
        self.card_repo.ping().await
    }
}
