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
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(pk_auto(Enrollment::Id))
                    .col(string(Enrollment::StudentEmail))
                    .col(integer(Enrollment::ClassId))
                    .col(string(Enrollment::ClassTitle))
                    // The cart entry is deleted on enrollment, so no foreign key.
                    .col(integer(Enrollment::CartEntryId))
                    .col(double(Enrollment::Amount))
                    .col(string(Enrollment::TransactionId))
                    .col(
                        timestamp(Enrollment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_student_email")
                            .from(Enrollment::Table, Enrollment::StudentEmail)
                            .to(Account::Table, Account::Email)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_class_id")
                            .from(Enrollment::Table, Enrollment::ClassId)
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
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Enrollment {
    Table,
    Id,
    StudentEmail,
    ClassId,
    ClassTitle,
    CartEntryId,
    Amount,
    TransactionId,
    CreatedAt,
}
