use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_account_table::Account;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClassOffering::Table)
                    .if_not_exists()
                    .col(pk_auto(ClassOffering::Id))
                    .col(string(ClassOffering::Title))
                    .col(string_null(ClassOffering::ImageUrl))
                    .col(string(ClassOffering::InstructorName))
                    .col(string(ClassOffering::InstructorEmail))
                    .col(double(ClassOffering::Price))
                    .col(integer(ClassOffering::TotalSeats))
                    .col(integer(ClassOffering::AvailableSeats))
                    .col(integer(ClassOffering::Enrolled).default(0))
                    .col(string(ClassOffering::Status).default("pending"))
                    .col(text_null(ClassOffering::Feedback))
                    .col(
                        timestamp(ClassOffering::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_offering_instructor_email")
                            .from(ClassOffering::Table, ClassOffering::InstructorEmail)
                            .to(Account::Table, Account::Email)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClassOffering::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClassOffering {
    Table,
    Id,
    Title,
    ImageUrl,
    InstructorName,
    InstructorEmail,
    Price,
    TotalSeats,
    AvailableSeats,
    Enrolled,
    Status,
    Feedback,
    CreatedAt,
}
