/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(User::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(User::Fullname).string().not_null())
                    .col(ColumnDef::new(User::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(User::PhoneNumber).string().not_null())
                    .col(ColumnDef::new(User::Password).string().not_null())
                    .col(ColumnDef::new(User::ProfileBio).text().null())
                    .col(ColumnDef::new(User::ProfileSkills).string().null())
                    .col(ColumnDef::new(User::ProfileResume).string().null())
                    .col(ColumnDef::new(User::ProfileResumeOriginalName).string().null())
                    .col(ColumnDef::new(User::ProfilePhoto).string().null())
                    .col(
                        ColumnDef::new(User::Role)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(User::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Fullname,
    Email,
    PhoneNumber,
    Password,
    ProfileBio,
    ProfileSkills,
    ProfileResume,
    ProfileResumeOriginalName,
    ProfilePhoto,
    Role,
    CreatedAt,
}
