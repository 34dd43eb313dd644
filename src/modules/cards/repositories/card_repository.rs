use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, QueryBuilder};

use crate::core::Result;
use crate::modules::cards::models::{Card, CardFilter};

/// Read access to the card catalog
///
/// All listing queries order by `uuid` ascending so repeated calls against an
/// unchanged store return identical results.
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Every card, unbounded
    async fn find_all(&self) -> Result<Vec<Card>>;

    /// Exact match on `uuid`
    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<Card>>;

    /// Case-insensitive substring match on `name`, narrowed by `filter`
    async fn search_by_name(
        &self,
        fragment: &str,
        filter: &CardFilter,
        limit: u64,
    ) -> Result<Vec<Card>>;

    /// Number of cards matching `filter`
    async fn count(&self, filter: &CardFilter) -> Result<u64>;

    /// Window of cards matching `filter`
    async fn find_page(&self, filter: &CardFilter, offset: u64, limit: u64) -> Result<Vec<Card>>;

    /// Cheap round trip used by readiness probes
    async fn ping(&self) -> Result<()>;
}

const CARD_COLUMNS: &str = "id, uuid, name, set_code, number, mana_cost, mana_value, \
     type_line, text, rarity, power, toughness, artist";

/// Escape LIKE metacharacters so the fragment matches literally
pub fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len() + 2);
    for ch in fragment.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// MySQL-backed card repository
#[derive(Clone)]
pub struct MySqlCardRepository {
    pool: MySqlPool,
}

impl MySqlCardRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn select() -> QueryBuilder<'static, MySql> {
        QueryBuilder::new(format!("SELECT {} FROM cards", CARD_COLUMNS))
    }

    /// Append `filter` as WHERE/AND clauses
    fn push_filter(qb: &mut QueryBuilder<'_, MySql>, filter: &CardFilter, has_where: bool) {
        if let Some(set_code) = &filter.set_code {
            qb.push(if has_where { " AND " } else { " WHERE " });
            qb.push("set_code = ").push_bind(set_code.clone());
        }
    }

    /// Name search: escaped LIKE pattern, optional set filter, bounded result
    fn search_query(
        fragment: &str,
        filter: &CardFilter,
        limit: u64,
    ) -> QueryBuilder<'static, MySql> {
        let pattern = format!("%{}%", escape_like(fragment));

        let mut qb = Self::select();
        qb.push(" WHERE LOWER(name) LIKE LOWER(")
            .push_bind(pattern)
            .push(r") ESCAPE '\\'");
        Self::push_filter(&mut qb, filter, true);
        qb.push(" ORDER BY uuid ASC LIMIT ").push_bind(limit);
        qb
    }

    fn page_query(filter: &CardFilter, offset: u64, limit: u64) -> QueryBuilder<'static, MySql> {
        let mut qb = Self::select();
        Self::push_filter(&mut qb, filter, false);
        qb.push(" ORDER BY uuid ASC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);
        qb
    }
}

#[async_trait]
impl CardRepository for MySqlCardRepository {
    async fn find_all(&self) -> Result<Vec<Card>> {
        let mut qb = Self::select();
        qb.push(" ORDER BY uuid ASC");

        let cards = qb.build_query_as::<Card>().fetch_all(&self.pool).await?;

        Ok(cards)
    }

    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<Card>> {
        let card = sqlx::query_as::<_, Card>(&format!(
            "SELECT {} FROM cards WHERE uuid = ?",
            CARD_COLUMNS
        ))
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card)
    }

    async fn search_by_name(
        &self,
        fragment: &str,
        filter: &CardFilter,
        limit: u64,
    ) -> Result<Vec<Card>> {
        let mut qb = Self::search_query(fragment, filter, limit);
        let cards = qb.build_query_as::<Card>().fetch_all(&self.pool).await?;

        Ok(cards)
    }

    async fn count(&self, filter: &CardFilter) -> Result<u64> {
        let mut qb = QueryBuilder::<MySql>::new("SELECT COUNT(*) FROM cards");
        Self::push_filter(&mut qb, filter, false);

        let count: i64 = qb.build_query_scalar().fetch_one(&self.pool).await?;

        Ok(count.max(0) as u64)
    }

    async fn find_page(&self, filter: &CardFilter, offset: u64, limit: u64) -> Result<Vec<Card>> {
        let mut qb = Self::page_query(filter, offset, limit);
        let cards = qb.build_query_as::<Card>().fetch_all(&self.pool).await?;

        Ok(cards)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
