use tracing::{debug, info};

use crate::{
    config::{admin_config, backend_url, project_config, vars, EnvSnapshot},
    domain::models::{
        CapabilityDescriptor, EmailNotificationOptions, LocalFileOptions,
        MeilisearchPluginOptions, MinioFileOptions, PaypalPaymentOptions, PluginDescriptor,
        ProviderRegistry, R2FileOptions, RedisConnection, RedisEventBusOptions,
        RedisWorkflowEngineOptions, StripePaymentOptions,
    },
};

pub const DEFAULT_BUCKET: &str = "medusa-media";
pub const LOCAL_UPLOAD_DIR: &str = "static";

/// Assemble the enabled capability set from an environment snapshot.
///
/// Pure apart from logging. Never fails: with no optional credentials the
/// result is local file storage and nothing else.
pub fn assemble(env: &EnvSnapshot) -> ProviderRegistry {
    let mut modules = vec![file_storage(env)];
    modules.extend(redis_backed(env));
    modules.extend(notification_providers(env));
    modules.extend(payment_providers(env));

    let plugins: Vec<PluginDescriptor> = search_plugin(env).into_iter().collect();

    info!(
        modules = modules.len(),
        plugins = plugins.len(),
        "Provider registry assembled"
    );

    ProviderRegistry::new(project_config(env), admin_config(env), modules, plugins)
}

/// First match wins: R2, then MinIO, then the local filesystem.
fn file_storage(env: &EnvSnapshot) -> CapabilityDescriptor {
    if let Some([account_id, access_key_id, secret_access_key, public_url]) = env.all([
        vars::R2_ACCOUNT_ID,
        vars::R2_ACCESS_KEY_ID,
        vars::R2_SECRET_ACCESS_KEY,
        vars::R2_PUBLIC_URL,
    ]) {
        let bucket = env.get_or(vars::R2_BUCKET, DEFAULT_BUCKET);
        info!(bucket, "File storage: R2");
        return CapabilityDescriptor::R2File(R2FileOptions {
            account_id: Some(account_id.to_string()),
            access_key_id: Some(access_key_id.to_string()),
            secret_access_key: Some(secret_access_key.to_string()),
            bucket: Some(bucket.to_string()),
            public_url: Some(public_url.to_string()),
        });
    }

    if let Some([endpoint, access_key, secret_key]) = env.all([
        vars::MINIO_ENDPOINT,
        vars::MINIO_ACCESS_KEY,
        vars::MINIO_SECRET_KEY,
    ]) {
        let bucket = env.get_or(vars::MINIO_BUCKET, DEFAULT_BUCKET);
        info!(endpoint, bucket, "File storage: MinIO");
        return CapabilityDescriptor::MinioFile(MinioFileOptions {
            end_point: Some(endpoint.to_string()),
            access_key: Some(access_key.to_string()),
            secret_key: Some(secret_key.to_string()),
            bucket: Some(bucket.to_string()),
        });
    }

    let backend_url = format!("{}/{}", backend_url(env), LOCAL_UPLOAD_DIR);
    info!(upload_dir = LOCAL_UPLOAD_DIR, "File storage: local filesystem");
    CapabilityDescriptor::LocalFile(LocalFileOptions {
        upload_dir: Some(LOCAL_UPLOAD_DIR.to_string()),
        backend_url: Some(backend_url),
    })
}

/// Event bus and workflow engine share the broker and are enabled together.
fn redis_backed(env: &EnvSnapshot) -> Vec<CapabilityDescriptor> {
    let Some(redis_url) = env.get(vars::REDIS_URL) else {
        debug!("No REDIS_URL, event bus and workflow engine stay in-process");
        return Vec::new();
    };

    info!("Event bus and workflow engine: redis");
    vec![
        CapabilityDescriptor::RedisEventBus(RedisEventBusOptions {
            redis_url: redis_url.to_string(),
        }),
        CapabilityDescriptor::RedisWorkflowEngine(RedisWorkflowEngineOptions {
            redis: RedisConnection {
                url: redis_url.to_string(),
            },
        }),
    ]
}

fn notification_providers(env: &EnvSnapshot) -> Vec<CapabilityDescriptor> {
    let mut providers = Vec::new();

    if let Some([api_key, from]) = env.all([vars::SENDGRID_API_KEY, vars::SENDGRID_FROM_EMAIL]) {
        info!(from, "Notification provider: sendgrid");
        providers.push(CapabilityDescriptor::SendgridNotification(
            EmailNotificationOptions::email(api_key, from),
        ));
    }

    if let Some([api_key, from]) = env.all([vars::RESEND_API_KEY, vars::RESEND_FROM_EMAIL]) {
        info!(from, "Notification provider: resend");
        providers.push(CapabilityDescriptor::ResendNotification(
            EmailNotificationOptions::email(api_key, from),
        ));
    }

    if providers.is_empty() {
        debug!("No email credentials, notification module disabled");
    }
    providers
}

fn payment_providers(env: &EnvSnapshot) -> Vec<CapabilityDescriptor> {
    let mut providers = Vec::new();

    if let Some([api_key, webhook_secret]) =
        env.all([vars::STRIPE_API_KEY, vars::STRIPE_WEBHOOK_SECRET])
    {
        info!("Payment provider: stripe");
        providers.push(CapabilityDescriptor::StripePayment(StripePaymentOptions {
            api_key: api_key.to_string(),
            webhook_secret: webhook_secret.to_string(),
        }));
    }

    if let Some([client_id, client_secret, environment]) = env.all([
        vars::PAYPAL_CLIENT_ID,
        vars::PAYPAL_CLIENT_SECRET,
        vars::PAYPAL_ENVIRONMENT,
    ]) {
        info!(environment, "Payment provider: paypal");
        providers.push(CapabilityDescriptor::PaypalPayment(PaypalPaymentOptions {
            oauth_client_id: client_id.to_string(),
            oauth_client_secret: client_secret.to_string(),
            environment: environment.to_string(),
        }));
    }

    if providers.is_empty() {
        debug!("No payment credentials, payment module disabled");
    }
    providers
}

fn search_plugin(env: &EnvSnapshot) -> Option<PluginDescriptor> {
    match env.all([vars::MEILISEARCH_HOST, vars::MEILISEARCH_ADMIN_KEY]) {
        Some([host, admin_key]) => {
            info!(host, "Search plugin: meilisearch");
            Some(PluginDescriptor::Meilisearch(
                MeilisearchPluginOptions::with_product_index(host, admin_key),
            ))
        }
        None => {
            debug!("No search credentials, search plugin disabled");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Capability;

    #[test]
    fn r2_bucket_defaults_when_unset() {
        let env = EnvSnapshot::new()
            .with(vars::R2_ACCOUNT_ID, "acct")
            .with(vars::R2_ACCESS_KEY_ID, "key")
            .with(vars::R2_SECRET_ACCESS_KEY, "secret")
            .with(vars::R2_PUBLIC_URL, "https://cdn.example.com");

        match assemble(&env).file_storage() {
            Some(CapabilityDescriptor::R2File(options)) => {
                assert_eq!(options.bucket.as_deref(), Some(DEFAULT_BUCKET));
                assert_eq!(options.account_id.as_deref(), Some("acct"));
            }
            other => panic!("Expected R2 file storage, got {:?}", other),
        }
    }

    #[test]
    fn local_storage_serves_from_backend_url() {
        let env = EnvSnapshot::new().with(vars::BACKEND_URL, "https://api.example.com");

        match assemble(&env).file_storage() {
            Some(CapabilityDescriptor::LocalFile(options)) => {
                assert_eq!(
                    options.backend_url.as_deref(),
                    Some("https://api.example.com/static")
                );
                assert_eq!(options.upload_dir.as_deref(), Some(LOCAL_UPLOAD_DIR));
            }
            other => panic!("Expected local file storage, got {:?}", other),
        }
    }

    #[test]
    fn incomplete_pairs_do_not_enable_providers() {
        let env = EnvSnapshot::new()
            .with(vars::SENDGRID_API_KEY, "SG.key")
            .with(vars::STRIPE_WEBHOOK_SECRET, "whsec")
            .with(vars::PAYPAL_CLIENT_ID, "id")
            .with(vars::PAYPAL_CLIENT_SECRET, "secret")
            .with(vars::MEILISEARCH_HOST, "http://search:7700");

        let registry = assemble(&env);
        assert!(!registry.is_enabled(Capability::Notification));
        assert!(!registry.is_enabled(Capability::Payment));
        assert!(!registry.is_enabled(Capability::Search));
    }
}
