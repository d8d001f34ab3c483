//! Table-backed word store: one round trip per operation.
//!
//! Filtering, ordering and durability are delegated to the database. Rows are
//! requested back from inserts and updates so callers get the state the
//! database actually holds.

use async_trait::async_trait;
use models::{word, Word, WordId, WordPatch};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

use crate::errors::{Operation, WordError};
use crate::words::store::WordStore;

#[derive(Clone)]
pub struct RemoteTableStore {
    pub db: DatabaseConnection,
}

impl RemoteTableStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Connect with the configured pool and bring the schema up to date.
    pub async fn connect(cfg: &configs::DatabaseConfig) -> anyhow::Result<Self> {
        let db = models::db::connect_with_config(cfg).await?;
        models::db::migrate(&db).await?;
        Ok(Self { db })
    }
}

#[async_trait]
impl WordStore for RemoteTableStore {
    fn substrate(&self) -> &'static str { "remote_table" }

    async fn insert(&self, w: Word) -> Result<Word, WordError> {
        let row = word::ActiveModel::from(&w)
            .insert(&self.db)
            .await
            .map_err(|e| WordError::persistence(Operation::Add, Some(&w.id), e))?;
        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Word>, WordError> {
        let rows = word::Entity::find()
            .order_by_desc(word::Column::CreatedAt)
            .order_by_desc(word::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| WordError::persistence(Operation::List, None, e))?;
        Ok(rows.into_iter().map(Word::from).collect())
    }

    async fn update(&self, id: &WordId, patch: &WordPatch) -> Result<Word, WordError> {
        // Nothing to set: a plain lookup keeps NotFound semantics identical.
        if patch.is_empty() {
            let row = word::Entity::find_by_id(id.as_str().to_string())
                .one(&self.db)
                .await
                .map_err(|e| WordError::persistence(Operation::Update, Some(id), e))?;
            return row.map(Word::from).ok_or_else(|| WordError::not_found(Operation::Update, id));
        }

        let mut query = word::Entity::update_many();
        if let Some(term) = &patch.term {
            query = query.col_expr(word::Column::Term, Expr::value(term.clone()));
        }
        if let Some(translation) = &patch.translation {
            query = query.col_expr(word::Column::Translation, Expr::value(translation.clone()));
        }
        let rows = query
            .filter(word::Column::Id.eq(id.as_str()))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| WordError::persistence(Operation::Update, Some(id), e))?;

        let touched = rows.len();
        let mut rows = rows.into_iter();
        match (rows.next(), touched) {
            (Some(row), 1) => Ok(row.into()),
            (None, _) => Err(WordError::not_found(Operation::Update, id)),
            (Some(_), n) => Err(WordError::persistence(Operation::Update, Some(id), format!("update touched {n} rows"))),
        }
    }

    async fn delete(&self, id: &WordId) -> Result<(), WordError> {
        let res = word::Entity::delete_by_id(id.as_str().to_string())
            .exec(&self.db)
            .await
            .map_err(|e| WordError::persistence(Operation::Delete, Some(id), e))?;
        match res.rows_affected {
            0 => Err(WordError::not_found(Operation::Delete, id)),
            1 => Ok(()),
            n => Err(WordError::persistence(Operation::Delete, Some(id), format!("delete removed {n} rows"))),
        }
    }

    async fn delete_all(&self) -> Result<(), WordError> {
        // Some hosted tables refuse a DELETE without a filter. The primary key is never
        // NULL, so this matches every row whatever id it was stored under.
        let res = word::Entity::delete_many()
            .filter(word::Column::Id.is_not_null())
            .exec(&self.db)
            .await
            .map_err(|e| WordError::persistence(Operation::DeleteAll, None, e))?;
        debug!(rows = res.rows_affected, "words_table_cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::test_support::{get_db, memory_db};
    use crate::testing::run_store_conformance;
    use crate::words::WordService;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    #[tokio::test]
    async fn in_memory_table_conforms() -> Result<(), anyhow::Error> {
        let store = RemoteTableStore::new(memory_db().await?);
        run_store_conformance(&WordService::new(Arc::new(store))).await?;
        Ok(())
    }

    #[tokio::test]
    async fn postgres_table_conforms() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() { return Ok(()); }
        let store = RemoteTableStore::new(get_db().await?);
        run_store_conformance(&WordService::new(Arc::new(store))).await?;
        Ok(())
    }

    #[tokio::test]
    async fn equal_timestamps_still_list_in_a_total_order() -> Result<(), anyhow::Error> {
        let store = RemoteTableStore::new(memory_db().await?);
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        for id in ["0000000000a", "0000000000b", "0000000000c"] {
            store.insert(Word { id: WordId::new(id), term: id.into(), translation: "x".into(), created_at: at }).await?;
        }
        let ids: Vec<_> = store.list().await?.into_iter().map(|w| w.id.into_inner()).collect();
        assert_eq!(ids, ["0000000000c", "0000000000b", "0000000000a"]);
        Ok(())
    }

    #[tokio::test]
    async fn delete_all_clears_rows_with_any_id() -> Result<(), anyhow::Error> {
        let store = RemoteTableStore::new(memory_db().await?);
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        for id in ["-", "legacy 42", "0000000000a"] {
            store.insert(Word { id: WordId::new(id), term: "t".into(), translation: "x".into(), created_at: at }).await?;
        }
        assert_eq!(store.list().await?.len(), 3);

        store.delete_all().await?;
        assert!(store.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_returns_row_state() -> Result<(), anyhow::Error> {
        let svc = WordService::new(Arc::new(RemoteTableStore::new(memory_db().await?)));
        let w = svc.add_word(models::NewWord::new("Hello", "Olá")).await?;
        let updated = svc
            .update_word(&w.id, WordPatch { term: Some("Hi".into()), translation: Some("Oi".into()) })
            .await?;
        assert_eq!(updated.id, w.id);
        assert_eq!(updated.created_at, w.created_at);
        assert_eq!((updated.term.as_str(), updated.translation.as_str()), ("Hi", "Oi"));
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_table_is_a_persistence_error() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;
        let store = RemoteTableStore::new(db.clone());
        db.close().await?;

        let err = store.list().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Persistence);
        let err = store.delete(&WordId::new("nope")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Persistence);
        Ok(())
    }
}
