/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_table_user;
mod m20250101_000002_create_table_company;
mod m20250101_000003_create_table_job;
mod m20250101_000004_create_table_application;
mod m20250101_000005_create_table_favourite;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_table_user::Migration),
            Box::new(m20250101_000002_create_table_company::Migration),
            Box::new(m20250101_000003_create_table_job::Migration),
            Box::new(m20250101_000004_create_table_application::Migration),
            Box::new(m20250101_000005_create_table_favourite::Migration),
        ]
    }
}
