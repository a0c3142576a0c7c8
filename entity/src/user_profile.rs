use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    /// Same value as the owning `auth_identity` id.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    #[sea_orm(unique)]
    pub pterodactyl_id: Option<i64>,
    pub last_synced_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::auth_identity::Entity",
        from = "Column::Id",
        to = "super::auth_identity::Column::Id",
        on_delete = "Cascade"
    )]
    AuthIdentity,
    #[sea_orm(has_many = "super::server::Entity")]
    Server,
}

impl Related<super::auth_identity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthIdentity.def()
    }
}

impl Related<super::server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Server.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
