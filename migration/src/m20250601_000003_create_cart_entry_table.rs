use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_account_table::Account,
    m20250601_000002_create_class_offering_table::ClassOffering,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CartEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(CartEntry::Id))
                    .col(string(CartEntry::StudentEmail))
                    .col(integer(CartEntry::ClassId))
                    .col(
                        timestamp(CartEntry::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_entry_student_email")
                            .from(CartEntry::Table, CartEntry::StudentEmail)
                            .to(Account::Table, Account::Email)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_entry_class_id")
                            .from(CartEntry::Table, CartEntry::ClassId)
                            .to(ClassOffering::Table, ClassOffering::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CartEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CartEntry {
    Table,
    Id,
    StudentEmail,
    ClassId,
    CreatedAt,
}
