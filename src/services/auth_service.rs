use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use password_hash::rand_core::OsRng;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set, SqlErr};
use uuid::Uuid;

use crate::{
    dto::auth::{LoginRequest, RegisterRequest},
    entity::users::{ActiveModel as UserActive, Model as UserModel},
    error::{AppError, AppResult},
    models::User,
    session::SessionUser,
    state::AppState,
};

#[derive(Debug)]
pub enum RegisterOutcome {
    Registered(User),
    EmailTaken,
    MissingFields,
}

pub async fn register_user(state: &AppState, payload: RegisterRequest) -> AppResult<RegisterOutcome> {
    let RegisterRequest {
        username,
        email,
        password,
    } = payload;
    let username = username.trim().to_string();
    let email = email.trim().to_string();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Ok(RegisterOutcome::MissingFields);
    }

    let password_hash = hash_password(&password)?;

    let inserted = UserActive {
        id: Set(Uuid::new_v4()),
        username: Set(username),
        email: Set(email),
        password_hash: Set(password_hash),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await;

    let user = match inserted {
        Ok(model) => user_from_entity(model),
        Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            tracing::info!("registration rejected, email already registered");
            return Ok(RegisterOutcome::EmailTaken);
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(user_id = %user.id, "user registered");
    Ok(RegisterOutcome::Registered(user))
}

/// Returns the session identity for valid credentials, `None` otherwise. Unknown
/// emails and wrong passwords are indistinguishable to the caller.
pub async fn login_user(state: &AppState, payload: LoginRequest) -> AppResult<Option<SessionUser>> {
    let LoginRequest { email, password } = payload;
    let user: Option<User> = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email.trim())
        .fetch_optional(&state.pool)
        .await?;

    let user = match user {
        Some(u) => u,
        None => return Ok(None),
    };

    if !verify_password(&password, &user.password_hash)? {
        return Ok(None);
    }

    tracing::info!(user_id = %user.id, "user logged in");
    Ok(Some(SessionUser {
        id: user.id,
        username: user.username,
        email: user.email,
    }))
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

pub fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

fn user_from_entity(model: UserModel) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        created_at: model.created_at.with_timezone(&chrono::Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let hash = hash_password("hunter2").unwrap();
        assert_ne!(hash, "hunter2");
        assert!(verify_password("hunter2", &hash).unwrap());
        assert!(!verify_password("hunter3", &hash).unwrap());
    }

    #[test]
    fn garbage_hash_is_an_internal_error() {
        assert!(matches!(
            verify_password("pw", "not-a-phc-string"),
            Err(AppError::Internal(_))
        ));
    }
}
