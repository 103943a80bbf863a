use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cart_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_email: String,
    pub class_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::StudentEmail",
        to = "super::account::Column::Email",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Account,
    #[sea_orm(
        belongs_to = "super::class_offering::Entity",
        from = "Column::ClassId",
        to = "super::class_offering::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ClassOffering,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::class_offering::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassOffering.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
