use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which part of the backend the process runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerMode {
    #[default]
    Shared,
    Worker,
    Server,
}

impl FromStr for WorkerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shared" => Ok(WorkerMode::Shared),
            "worker" => Ok(WorkerMode::Worker),
            "server" => Ok(WorkerMode::Server),
            other => Err(format!("unknown worker mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpConfig {
    pub admin_cors: String,
    pub auth_cors: String,
    pub store_cors: String,
    pub jwt_secret: String,
    pub cookie_secret: String,
}

impl HttpConfig {
    /// Storefront origins, split from the comma separated list
    pub fn store_origins(&self) -> Vec<String> {
        split_origins(&self.store_cors)
    }

    pub fn admin_origins(&self) -> Vec<String> {
        split_origins(&self.admin_cors)
    }
}

fn split_origins(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub database_url: Option<String>,
    pub database_logging: bool,
    pub redis_url: Option<String>,
    pub worker_mode: WorkerMode,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminConfig {
    pub backend_url: String,
    pub disable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_mode_parsing() {
        assert_eq!("worker".parse::<WorkerMode>(), Ok(WorkerMode::Worker));
        assert_eq!("SERVER".parse::<WorkerMode>(), Ok(WorkerMode::Server));
        assert!("both".parse::<WorkerMode>().is_err());
    }

    #[test]
    fn origins_are_trimmed() {
        let http = HttpConfig {
            admin_cors: "http://localhost:7000, http://localhost:7001".to_string(),
            auth_cors: String::new(),
            store_cors: "http://localhost:8000,,".to_string(),
            jwt_secret: "j".to_string(),
            cookie_secret: "c".to_string(),
        };
        assert_eq!(
            http.admin_origins(),
            vec!["http://localhost:7000", "http://localhost:7001"]
        );
        assert_eq!(http.store_origins(), vec!["http://localhost:8000"]);
    }
}
