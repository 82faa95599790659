use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "offers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Minor currency units.
    pub price: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub price_currency: Option<String>,
    pub item_offered_id: Uuid,
    #[sea_orm(nullable)]
    pub offered_by_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::services::Entity",
        from = "Column::ItemOfferedId",
        to = "super::services::Column::Id"
    )]
    ItemOffered,
    #[sea_orm(
        belongs_to = "super::organizations::Entity",
        from = "Column::OfferedById",
        to = "super::organizations::Column::Id"
    )]
    OfferedBy,
}

impl Related<super::services::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemOffered.def()
    }
}

impl Related<super::organizations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OfferedBy.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        if insert {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}
