use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
  pub user_id: i64,
  pub username: String,
  pub email: String,
  pub password_hash: String,
}
