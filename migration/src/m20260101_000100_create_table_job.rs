/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
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
                    .table(Job::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Job::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Job::Title).string().not_null())
                    .col(ColumnDef::new(Job::Description).text().not_null())
                    .col(ColumnDef::new(Job::Location).string().not_null())
                    .col(
                        ColumnDef::new(Job::Salary)
                            .string()
                            .not_null()
                            .default("Not specified"),
                    )
                    .col(
                        ColumnDef::new(Job::EmploymentType)
                            .string_len(16)
                            .not_null()
                            .default("Full-time"),
                    )
                    .col(
                        ColumnDef::new(Job::Status)
                            .string_len(16)
                            .not_null()
                            .default("open"),
                    )
                    .col(
                        ColumnDef::new(Job::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Job::ShareableLink)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Job::ClosedAt).timestamp().null())
                    .col(ColumnDef::new(Job::ClosedBy).uuid().null())
                    .col(
                        ColumnDef::new(Job::Applicants)
                            .array(ColumnType::Uuid)
                            .not_null()
                            .default(Expr::cust("'{}'")),
                    )
                    .col(
                        ColumnDef::new(Job::Skills)
                            .array(ColumnType::String(StringLen::None))
                            .not_null()
                            .default(Expr::cust("'{}'")),
                    )
                    .col(
                        ColumnDef::new(Job::ExperienceLevel)
                            .string_len(16)
                            .not_null()
                            .default("Mid"),
                    )
                    .col(
                        ColumnDef::new(Job::Company)
                            .string()
                            .not_null()
                            .default("Our Company"),
                    )
                    .col(
                        ColumnDef::new(Job::Department)
                            .string()
                            .not_null()
                            .default("Engineering"),
                    )
                    .col(
                        ColumnDef::new(Job::Views)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Job::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Job::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-job-closed_by")
                            .from(Job::Table, Job::ClosedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-job-status-is_active")
                    .table(Job::Table)
                    .col(Job::Status)
                    .col(Job::IsActive)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-job-location")
                    .table(Job::Table)
                    .col(Job::Location)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-job-employment_type")
                    .table(Job::Table)
                    .col(Job::EmploymentType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-job-created_at")
                    .table(Job::Table)
                    .col(Job::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Job {
    Table,
    Id,
    Title,
    Description,
    Location,
    Salary,
    EmploymentType,
    Status,
    IsActive,
    ShareableLink,
    ClosedAt,
    ClosedBy,
    Applicants,
    Skills,
    ExperienceLevel,
    Company,
    Department,
    Views,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
