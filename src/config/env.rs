use std::{collections::HashMap, ffi::OsString};

/// Names of the environment variables the backend reads
pub mod vars {
    pub const DATABASE_URL: &str = "DATABASE_URL";
    pub const REDIS_URL: &str = "REDIS_URL";
    pub const ADMIN_CORS: &str = "ADMIN_CORS";
    pub const AUTH_CORS: &str = "AUTH_CORS";
    pub const STORE_CORS: &str = "STORE_CORS";
    pub const JWT_SECRET: &str = "JWT_SECRET";
    pub const COOKIE_SECRET: &str = "COOKIE_SECRET";
    pub const WORKER_MODE: &str = "WORKER_MODE";
    pub const BACKEND_URL: &str = "BACKEND_URL";
    pub const SHOULD_DISABLE_ADMIN: &str = "SHOULD_DISABLE_ADMIN";

    pub const R2_ACCOUNT_ID: &str = "R2_ACCOUNT_ID";
    pub const R2_ACCESS_KEY_ID: &str = "R2_ACCESS_KEY_ID";
    pub const R2_SECRET_ACCESS_KEY: &str = "R2_SECRET_ACCESS_KEY";
    pub const R2_PUBLIC_URL: &str = "R2_PUBLIC_URL";
    pub const R2_BUCKET: &str = "R2_BUCKET";

    pub const MINIO_ENDPOINT: &str = "MINIO_ENDPOINT";
    pub const MINIO_ACCESS_KEY: &str = "MINIO_ACCESS_KEY";
    pub const MINIO_SECRET_KEY: &str = "MINIO_SECRET_KEY";
    pub const MINIO_BUCKET: &str = "MINIO_BUCKET";

    pub const SENDGRID_API_KEY: &str = "SENDGRID_API_KEY";
    pub const SENDGRID_FROM_EMAIL: &str = "SENDGRID_FROM_EMAIL";
    pub const RESEND_API_KEY: &str = "RESEND_API_KEY";
    pub const RESEND_FROM_EMAIL: &str = "RESEND_FROM_EMAIL";

    pub const STRIPE_API_KEY: &str = "STRIPE_API_KEY";
    pub const STRIPE_WEBHOOK_SECRET: &str = "STRIPE_WEBHOOK_SECRET";
    pub const PAYPAL_CLIENT_ID: &str = "PAYPAL_CLIENT_ID";
    pub const PAYPAL_CLIENT_SECRET: &str = "PAYPAL_CLIENT_SECRET";
    pub const PAYPAL_ENVIRONMENT: &str = "PAYPAL_ENVIRONMENT";

    pub const MEILISEARCH_HOST: &str = "MEILISEARCH_HOST";
    pub const MEILISEARCH_ADMIN_KEY: &str = "MEILISEARCH_ADMIN_KEY";
}

/// Immutable snapshot of named configuration values.
///
/// A variable counts as present only when it is set to a non-empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    values: HashMap<String, String>,
}

impl EnvSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the process environment, after loading `.env` if one exists
    pub fn from_process_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_os_vars(std::env::vars_os())
    }

    /// Entries whose name or value is not valid Unicode are skipped
    pub fn from_os_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        vars.into_iter()
            .filter_map(|(name, value)| match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => Some((name, value)),
                (Ok(name), Err(_)) => {
                    tracing::debug!(name = %name, "Skipping environment variable with non-Unicode value");
                    None
                }
                (Err(name), _) => {
                    tracing::debug!(name = ?name, "Skipping environment variable with non-Unicode name");
                    None
                }
            })
            .collect()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All values, or `None` when any of them is absent
    pub fn all<const N: usize>(&self, names: [&str; N]) -> Option<[&str; N]> {
        let mut found = [""; N];
        for (slot, name) in found.iter_mut().zip(names) {
            *slot = self.get(name)?;
        }
        Some(found)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSnapshot {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_absent() {
        let env = EnvSnapshot::new().with("A", "").with("B", "value");
        assert_eq!(env.get("A"), None);
        assert_eq!(env.get("B"), Some("value"));
        assert_eq!(env.get("C"), None);
        assert_eq!(env.get_or("A", "fallback"), "fallback");
    }

    #[test]
    fn all_requires_every_value() {
        let env: EnvSnapshot = [("A", "1"), ("B", "2"), ("C", "")].into_iter().collect();
        assert_eq!(env.all(["A", "B"]), Some(["1", "2"]));
        assert_eq!(env.all(["A", "C"]), None);
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_variables_are_skipped() {
        use std::os::unix::ffi::OsStringExt;

        let vars = vec![
            (OsString::from("REDIS_URL"), OsString::from("redis://cache:6379")),
            (OsString::from("BROKEN_VALUE"), OsString::from_vec(vec![0x66, 0xff, 0x6f])),
            (OsString::from_vec(vec![0xfe, 0x41]), OsString::from("value")),
        ];

        let env = EnvSnapshot::from_os_vars(vars);
        assert_eq!(env.get("REDIS_URL"), Some("redis://cache:6379"));
        assert_eq!(env.get("BROKEN_VALUE"), None);
        assert_eq!(env, EnvSnapshot::new().with("REDIS_URL", "redis://cache:6379"));
    }
}
