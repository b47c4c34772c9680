use tracing::warn;

use super::env::{vars, EnvSnapshot};
use crate::domain::models::{AdminConfig, HttpConfig, ProjectConfig, WorkerMode};

const DEFAULT_SECRET: &str = "supersecret";
const DEFAULT_ADMIN_CORS: &str = "http://localhost:7000,http://localhost:7001";
const DEFAULT_STORE_CORS: &str = "http://localhost:8000";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:9000";

/// Project-level settings. Missing values fall back to development defaults.
pub fn project_config(env: &EnvSnapshot) -> ProjectConfig {
    let worker_mode = match env.get(vars::WORKER_MODE) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to shared worker mode");
            WorkerMode::Shared
        }),
        None => WorkerMode::Shared,
    };

    let admin_cors = env.get_or(vars::ADMIN_CORS, DEFAULT_ADMIN_CORS).to_string();
    let store_cors = env.get_or(vars::STORE_CORS, DEFAULT_STORE_CORS).to_string();
    let auth_cors = env
        .get(vars::AUTH_CORS)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{},{}", admin_cors, store_cors));

    ProjectConfig {
        database_url: env.get(vars::DATABASE_URL).map(str::to_string),
        database_logging: false,
        redis_url: env.get(vars::REDIS_URL).map(str::to_string),
        worker_mode,
        http: HttpConfig {
            admin_cors,
            auth_cors,
            store_cors,
            jwt_secret: secret(env, vars::JWT_SECRET),
            cookie_secret: secret(env, vars::COOKIE_SECRET),
        },
    }
}

pub fn admin_config(env: &EnvSnapshot) -> AdminConfig {
    AdminConfig {
        backend_url: backend_url(env),
        disable: env.get(vars::SHOULD_DISABLE_ADMIN) == Some("true"),
    }
}

pub fn backend_url(env: &EnvSnapshot) -> String {
    env.get_or(vars::BACKEND_URL, DEFAULT_BACKEND_URL)
        .trim_end_matches('/')
        .to_string()
}

fn secret(env: &EnvSnapshot, name: &str) -> String {
    match env.get(name) {
        Some(value) => value.to_string(),
        None => {
            warn!(variable = name, "Secret not set, using the development default");
            DEFAULT_SECRET.to_string()
        }
    }
}
