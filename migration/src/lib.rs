/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20260101_000000_create_table_user;
mod m20260101_000100_create_table_job;
mod m20260101_000200_create_job_search_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000000_create_table_user::Migration),
            Box::new(m20260101_000100_create_table_job::Migration),
            Box::new(m20260101_000200_create_job_search_index::Migration),
        ]
    }
}
