//! Fixtures shared by repository and handler tests.

use crate::auth::password::{Argon2Params, hash_password};
use crate::config::{Config, PoolSettings};
use crate::db::{
    handlers::{Profiles, Repository, Users},
    models::{
        profiles::{ProfileCreateDBRequest, ProfileDBResponse},
        users::{UserCreateDBRequest, UserDBResponse},
    },
};
use crate::types::UserId;
use axum_test::TestServer;
use sqlx::PgPool;

/// Cheapest Argon2 settings the crate accepts, so account fixtures stay fast.
pub const TEST_PASSWORD_PARAMS: Argon2Params = Argon2Params {
    memory_kib: 1024,
    iterations: 1,
    parallelism: 1,
};

pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.database.pool = PoolSettings {
        max_connections: 2,
        min_connections: 0,
        ..Default::default()
    };
    config.password.min_length = 8;
    config.password.argon2_memory_kib = TEST_PASSWORD_PARAMS.memory_kib;
    config.password.argon2_iterations = TEST_PASSWORD_PARAMS.iterations;
    config.password.argon2_parallelism = TEST_PASSWORD_PARAMS.parallelism;
    config.enable_metrics = false;
    config
}

pub async fn create_test_app(pool: PgPool) -> TestServer {
    crate::Application::new_with_pool(create_test_config(), Some(pool))
        .await
        .expect("Failed to create application")
        .into_test_server()
}

pub async fn create_test_user(pool: &PgPool, username: &str) -> UserDBResponse {
    let password_hash = hash_password("correct-horse-battery", TEST_PASSWORD_PARAMS).expect("Failed to hash password");
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");

    Users::new(&mut conn)
        .create(&UserCreateDBRequest {
            username: username.to_string(),
            password_hash,
        })
        .await
        .expect("Failed to create test user")
}

pub async fn create_test_profile(pool: &PgPool, user_id: UserId) -> ProfileDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");

    Profiles::new(&mut conn)
        .create(&ProfileCreateDBRequest {
            user_id,
            name: "Test Person".to_string(),
            title: "Software Engineer".to_string(),
            bio: "Builds things.".to_string(),
            profile_image: None,
            location: None,
            email: Some("test@example.com".to_string()),
            phone: None,
        })
        .await
        .expect("Failed to create test profile")
}
