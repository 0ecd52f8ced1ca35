// ABOUTME: User account database operations
// ABOUTME: Minimal account records that own recipes and shopping carts

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{map_conflict, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{NewUser, User, UserId};

impl Database {
    /// Create the users table
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE NOT NULL,
                email TEXT UNIQUE NOT NULL,
                first_name TEXT NOT NULL DEFAULT '',
                last_name TEXT NOT NULL DEFAULT '',
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create a user
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty username or email and
    /// `ResourceAlreadyExists` when either is taken
    pub async fn create_user(&self, user: &NewUser) -> AppResult<User> {
        if user.username.trim().is_empty() || user.email.trim().is_empty() {
            return Err(AppError::invalid_input("Username and email are required"));
        }

        let created_at = Utc::now();
        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO users (username, email, first_name, last_name, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_conflict(e, || format!("User '{}'", user.username)))?;

        Ok(User {
            id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            created_at,
        })
    }

    /// Get a user by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query(
            r"
            SELECT id, username, email, first_name, last_name, created_at
            FROM users WHERE id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| row_to_user(&row)).transpose()
    }

    /// Number of registered users
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_user_count(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

fn row_to_user(row: &SqliteRow) -> AppResult<User> {
    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        created_at: row.try_get("created_at")?,
    })
}
