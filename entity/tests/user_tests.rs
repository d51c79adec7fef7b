/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for user entity

use chrono::NaiveDate;
use entity::user::{self, UserRole};
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

fn sample_user(id: Uuid) -> user::Model {
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    user::Model {
        id,
        email: "hr@example.com".to_owned(),
        password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_owned(),
        role: UserRole::Hr,
        name: Some("Hiring Manager".to_owned()),
        created_at: naive_date,
        updated_at: naive_date,
    }
}

#[tokio::test]
async fn test_user_entity_basic() -> Result<(), DbErr> {
    let user_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![sample_user(user_id)]])
        .into_connection();

    let result = user::Entity::find_by_id(user_id).one(&db).await?;

    assert!(result.is_some());
    let user = result.unwrap();
    assert_eq!(user.email, "hr@example.com");
    assert_eq!(user.role, UserRole::Hr);

    Ok(())
}

#[test]
fn test_user_password_is_not_serialized() {
    let value = serde_json::to_value(sample_user(Uuid::new_v4())).unwrap();

    assert!(value.get("password").is_none());
    assert_eq!(value["role"], "hr");
    assert_eq!(value["name"], "Hiring Manager");
    assert!(value.get("createdAt").is_some());
}

#[test]
fn test_user_role_default_is_hr() {
    assert_eq!(UserRole::default(), UserRole::Hr);
    assert_eq!(UserRole::Admin.to_string(), "admin");
}
