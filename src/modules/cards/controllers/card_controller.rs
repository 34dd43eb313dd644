//! HTTP handlers for the card catalog, mounted under `/api/card`.
//!
//! Query strings are read as raw key/value pairs so a repeated key takes its
//! last value instead of failing extraction.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Page};
use crate::modules::cards::models::Card;
use crate::modules::cards::services::CardService;

/// Raw query string pairs, in request order
pub type QueryPairs = web::Query<Vec<(String, String)>>;

/// Query parameters for GET /api/card/search
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchQuery {
    pub q: String,
    pub set_code: Option<String>,
}

impl SearchQuery {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" => query.q = value,
                "setCode" => query.set_code = Some(value),
                _ => {}
            }
        }
        query
    }
}

/// Query parameters for GET /api/card/
#[derive(Debug, Default, Clone, PartialEq)]
pub struct IndexQuery {
    pub set_code: Option<String>,
    /// Kept as text so malformed values fall back to the first page
    pub page: Option<String>,
}

impl IndexQuery {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "setCode" => query.set_code = Some(value),
                "page" => query.page = Some(value),
                _ => {}
            }
        }
        query
    }

    /// Requested page; absent or unparsable values mean page 1
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Response body for the paginated index
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexResponse {
    pub cards: Vec<Card>,
    pub page: u64,
    pub total_pages: u64,
    pub total_items: u64,
}

impl From<Page<Card>> for IndexResponse {
    fn from(page: Page<Card>) -> Self {
        Self {
            cards: page.items,
            page: page.page,
            total_pages: page.total_pages,
            total_items: page.total_items,
        }
    }
}

/// List every card
/// GET /api/card/all
pub async fn card_all(service: web::Data<CardService>) -> Result<HttpResponse, AppError> {
    let cards = service.list_all().await?;

    Ok(HttpResponse::Ok().json(cards))
}

/// Get a card by UUID
/// GET /api/card/{uuid}
pub async fn card_show(
    service: web::Data<CardService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let uuid = path.into_inner();
    let card = service.get_by_uuid(&uuid).await?;

    Ok(HttpResponse::Ok().json(card))
}

/// Search cards by name and set code
/// GET /api/card/search?q=...&setCode=...
pub async fn search_cards(
    service: web::Data<CardService>,
    query: QueryPairs,
) -> Result<HttpResponse, AppError> {
    let query = SearchQuery::from_pairs(query.into_inner());
    let cards = service.search(&query.q, query.set_code.as_deref()).await?;

    Ok(HttpResponse::Ok().json(cards))
}

/// Paginated card listing with optional set filter
/// GET /api/card/?setCode=...&page=...
pub async fn index(
    service: web::Data<CardService>,
    query: QueryPairs,
) -> Result<HttpResponse, AppError> {
    let query = IndexQuery::from_pairs(query.into_inner());
    let page = service.index(query.set_code.as_deref(), query.page()).await?;

    Ok(HttpResponse::Ok().json(IndexResponse::from(page)))
}

/// Configure card routes
///
/// Literal segments are registered before `/{uuid}` so they are not captured
/// as identifiers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/card")
            .route("", web::get().to(index))
            .route("/", web::get().to(index))
            .route("/all", web::get().to(card_all))
            .route("/search", web::get().to(search_cards))
            .route("/{uuid}", web::get().to(card_show)),
    );
}
