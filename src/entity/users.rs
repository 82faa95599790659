use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};

/// Role every person holds, whether or not it was stored.
pub const DEFAULT_ROLE: &str = "ROLE_USER";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 PHC string, never the plaintext.
    pub password: String,
    pub roles: Json,
    pub gender: String,
    #[sea_orm(nullable)]
    pub family_name: Option<String>,
    #[sea_orm(nullable)]
    pub given_name: Option<String>,
    #[sea_orm(nullable)]
    pub telephone: Option<String>,
    #[sea_orm(nullable)]
    pub image: Option<String>,
    #[sea_orm(nullable)]
    pub member_of_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn roles(&self) -> Vec<String> {
        roles_with_default(&self.roles)
    }
}

/// Reads a stored role list and guarantees [`DEFAULT_ROLE`] is part of it.
pub fn roles_with_default(stored: &Json) -> Vec<String> {
    let mut roles: Vec<String> = Vec::new();
    for role in stored.as_array().into_iter().flatten().filter_map(Json::as_str) {
        if !roles.iter().any(|r| r == role) {
            roles.push(role.to_string());
        }
    }
    if !roles.iter().any(|r| r == DEFAULT_ROLE) {
        roles.push(DEFAULT_ROLE.to_string());
    }
    roles
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organizations::Entity",
        from = "Column::MemberOfId",
        to = "super::organizations::Column::Id"
    )]
    MemberOf,
    #[sea_orm(has_many = "super::ratings::Entity")]
    Ratings,
}

impl Related<super::organizations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MemberOf.def()
    }
}

impl Related<super::ratings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ratings.def()
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_role_is_appended_when_missing() {
        let roles = roles_with_default(&json!(["ROLE_ADMIN"]));
        assert_eq!(roles, vec!["ROLE_ADMIN".to_string(), DEFAULT_ROLE.to_string()]);
    }

    #[test]
    fn default_role_is_not_duplicated() {
        let roles = roles_with_default(&json!(["ROLE_USER", "ROLE_ADMIN", "ROLE_USER"]));
        assert_eq!(roles, vec!["ROLE_USER".to_string(), "ROLE_ADMIN".to_string()]);
    }

    #[test]
    fn malformed_role_column_still_yields_default_role() {
        assert_eq!(roles_with_default(&json!(null)), vec![DEFAULT_ROLE.to_string()]);
        assert_eq!(
            roles_with_default(&json!([1, "ROLE_MANAGER"])),
            vec!["ROLE_MANAGER".to_string(), DEFAULT_ROLE.to_string()]
        );
    }
}
