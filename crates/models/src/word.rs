use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::domain::{Word, WordId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "words")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_type = "Text")]
    pub term: String,
    #[sea_orm(column_type = "Text")]
    pub translation: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Word {
    fn from(m: Model) -> Self {
        Word {
            id: WordId::new(m.id),
            term: m.term,
            translation: m.translation,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

impl From<&Word> for ActiveModel {
    fn from(w: &Word) -> Self {
        ActiveModel {
            id: Set(w.id.as_str().to_string()),
            term: Set(w.term.clone()),
            translation: Set(w.translation.clone()),
            created_at: Set(w.created_at.fixed_offset()),
        }
    }
}
