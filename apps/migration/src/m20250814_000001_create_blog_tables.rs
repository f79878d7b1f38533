//! Creates the `users` and `blogposts` tables.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(uuid(Users::Id).primary_key())
                    .col(string_uniq(Users::Username))
                    .col(string(Users::PasswordHash))
                    .col(boolean(Users::IsSuperuser).default(false))
                    .col(timestamp_with_time_zone(Users::DateJoined))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Blogposts::Table)
                    .if_not_exists()
                    .col(uuid(Blogposts::Id).primary_key())
                    .col(string_len(Blogposts::Title, 64))
                    .col(text(Blogposts::Body))
                    .col(timestamp_with_time_zone(Blogposts::Date))
                    .col(uuid(Blogposts::AuthorId))
                    .col(boolean(Blogposts::Edited).default(false))
                    .col(timestamp_with_time_zone_null(Blogposts::LastEdit))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blogposts_author")
                            .from(Blogposts::Table, Blogposts::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blogposts::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    PasswordHash,
    IsSuperuser,
    DateJoined,
}

#[derive(DeriveIden)]
enum Blogposts {
    Table,
    Id,
    Title,
    Body,
    Date,
    AuthorId,
    Edited,
    LastEdit,
}
