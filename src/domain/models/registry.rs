use serde_json::{json, Value};

use super::{
    capability::{Capability, CapabilityDescriptor},
    plugin::PluginDescriptor,
    project::{AdminConfig, ProjectConfig},
};

const REDACTED: &str = "[redacted]";

/// The assembled, immutable set of enabled capabilities
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRegistry {
    project: ProjectConfig,
    admin: AdminConfig,
    modules: Vec<CapabilityDescriptor>,
    plugins: Vec<PluginDescriptor>,
}

impl ProviderRegistry {
    pub fn new(
        project: ProjectConfig,
        admin: AdminConfig,
        modules: Vec<CapabilityDescriptor>,
        plugins: Vec<PluginDescriptor>,
    ) -> Self {
        Self {
            project,
            admin,
            modules,
            plugins,
        }
    }

    pub fn project(&self) -> &ProjectConfig {
        &self.project
    }

    pub fn admin(&self) -> &AdminConfig {
        &self.admin
    }

    /// Module descriptors in registration order
    pub fn modules(&self) -> &[CapabilityDescriptor] {
        &self.modules
    }

    pub fn plugins(&self) -> &[PluginDescriptor] {
        &self.plugins
    }

    pub fn descriptors_for(
        &self,
        capability: Capability,
    ) -> impl Iterator<Item = &CapabilityDescriptor> {
        self.modules
            .iter()
            .filter(move |descriptor| descriptor.capability() == capability)
    }

    /// The single file storage descriptor
    pub fn file_storage(&self) -> Option<&CapabilityDescriptor> {
        self.descriptors_for(Capability::FileStorage).next()
    }

    pub fn is_enabled(&self, capability: Capability) -> bool {
        match capability {
            Capability::Search => self
                .plugins
                .iter()
                .any(|plugin| plugin.capability() == Capability::Search),
            _ => self.descriptors_for(capability).next().is_some(),
        }
    }

    /// Render the registry in the runtime's module-config layout. Providers of
    /// hub capabilities are grouped under one module entry positioned at the
    /// first provider.
    pub fn module_config(&self) -> Value {
        let mut modules: Vec<(Capability, Value)> = Vec::new();

        for descriptor in &self.modules {
            let capability = descriptor.capability();
            match capability.hub_resolve() {
                Some(hub) => {
                    let provider = json!({
                        "resolve": descriptor.resolve(),
                        "id": descriptor.implementation_id(),
                        "options": descriptor.options(),
                    });

                    let existing = modules
                        .iter_mut()
                        .find(|(existing, _)| *existing == capability)
                        .and_then(|(_, module)| module["options"]["providers"].as_array_mut());

                    match existing {
                        Some(providers) => providers.push(provider),
                        None => modules.push((
                            capability,
                            json!({
                                "key": capability.module_key(),
                                "resolve": hub,
                                "options": { "providers": [provider] },
                            }),
                        )),
                    }
                }
                None => modules.push((
                    capability,
                    json!({
                        "key": capability.module_key(),
                        "resolve": descriptor.resolve(),
                        "options": descriptor.options(),
                    }),
                )),
            }
        }

        let plugins: Vec<Value> = self
            .plugins
            .iter()
            .map(|plugin| {
                json!({
                    "resolve": plugin.resolve(),
                    "options": plugin.options(),
                })
            })
            .collect();

        json!({
            "projectConfig": self.project,
            "admin": self.admin,
            "modules": modules.into_iter().map(|(_, module)| module).collect::<Vec<_>>(),
            "plugins": plugins,
        })
    }

    /// Same as [`module_config`](Self::module_config) with credentials and
    /// connection strings masked, for logs and diagnostics.
    pub fn redacted_module_config(&self) -> Value {
        let mut config = self.module_config();
        redact(&mut config, None);
        config
    }
}

fn is_sensitive(key: &str, parent: Option<&str>) -> bool {
    let lower = key.to_ascii_lowercase();
    lower.contains("secret")
        || lower.contains("apikey")
        || lower.contains("api_key")
        || lower.contains("accesskey")
        || lower.contains("access_key")
        || lower == "databaseurl"
        || lower == "redisurl"
        || (lower == "url" && parent == Some("redis"))
}

fn redact(value: &mut Value, parent: Option<&str>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                if child.is_string() && is_sensitive(key, parent) {
                    *child = Value::String(REDACTED.to_string());
                } else {
                    redact(child, Some(key.as_str()));
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(|item| redact(item, parent)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{
        capability::{
            EmailNotificationOptions, LocalFileOptions, RedisConnection, RedisEventBusOptions,
            RedisWorkflowEngineOptions, StripePaymentOptions,
        },
        project::{HttpConfig, WorkerMode},
    };

    fn project() -> ProjectConfig {
        ProjectConfig {
            database_url: Some("postgres://user:pw@db/medusa".to_string()),
            database_logging: false,
            redis_url: Some("redis://:pw@cache:6379".to_string()),
            worker_mode: WorkerMode::Shared,
            http: HttpConfig {
                admin_cors: "http://localhost:7000".to_string(),
                auth_cors: "http://localhost:7000".to_string(),
                store_cors: "http://localhost:8000".to_string(),
                jwt_secret: "jwt".to_string(),
                cookie_secret: "cookie".to_string(),
            },
        }
    }

    fn registry() -> ProviderRegistry {
        ProviderRegistry::new(
            project(),
            AdminConfig {
                backend_url: "http://localhost:9000".to_string(),
                disable: false,
            },
            vec![
                CapabilityDescriptor::LocalFile(LocalFileOptions {
                    upload_dir: Some("static".to_string()),
                    backend_url: Some("http://localhost:9000/static".to_string()),
                }),
                CapabilityDescriptor::RedisEventBus(RedisEventBusOptions {
                    redis_url: "redis://:pw@cache:6379".to_string(),
                }),
                CapabilityDescriptor::RedisWorkflowEngine(RedisWorkflowEngineOptions {
                    redis: RedisConnection {
                        url: "redis://:pw@cache:6379".to_string(),
                    },
                }),
                CapabilityDescriptor::SendgridNotification(EmailNotificationOptions::email(
                    "SG.key", "shop@example.com",
                )),
                CapabilityDescriptor::ResendNotification(EmailNotificationOptions::email(
                    "re_key", "shop@example.com",
                )),
                CapabilityDescriptor::StripePayment(StripePaymentOptions {
                    api_key: "sk_test".to_string(),
                    webhook_secret: "whsec".to_string(),
                }),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn hub_capabilities_group_their_providers() {
        let config = registry().module_config();
        let modules = config["modules"].as_array().unwrap();

        let keys: Vec<_> = modules.iter().map(|m| m["key"].as_str().unwrap()).collect();
        assert_eq!(
            keys,
            vec!["file", "event_bus", "workflows", "notification", "payment"]
        );

        let notification = &modules[3];
        assert_eq!(notification["resolve"], "@medusajs/notification");
        let ids: Vec<_> = notification["options"]["providers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["sendgrid", "resend"]);

        assert_eq!(modules[1]["resolve"], "@medusajs/event-bus-redis");
        assert_eq!(modules[1]["options"]["redisUrl"], "redis://:pw@cache:6379");
    }

    #[test]
    fn redaction_masks_credentials_only() {
        let config = registry().redacted_module_config();

        assert_eq!(config["projectConfig"]["databaseUrl"], REDACTED);
        assert_eq!(config["projectConfig"]["http"]["jwtSecret"], REDACTED);
        assert_eq!(config["projectConfig"]["http"]["cookieSecret"], REDACTED);
        assert_eq!(config["modules"][1]["options"]["redisUrl"], REDACTED);
        assert_eq!(config["modules"][2]["options"]["redis"]["url"], REDACTED);
        assert_eq!(
            config["modules"][3]["options"]["providers"][0]["options"]["api_key"],
            REDACTED
        );
        assert_eq!(
            config["modules"][4]["options"]["providers"][0]["options"]["webhookSecret"],
            REDACTED
        );

        assert_eq!(config["modules"][0]["key"], "file");
        assert_eq!(
            config["modules"][3]["options"]["providers"][0]["options"]["from"],
            "shop@example.com"
        );
        assert_eq!(config["admin"]["backendUrl"], "http://localhost:9000");
    }

    #[test]
    fn search_is_enabled_only_through_plugins() {
        let registry = registry();
        assert!(!registry.is_enabled(Capability::Search));
        assert!(registry.is_enabled(Capability::Notification));
        assert_eq!(registry.descriptors_for(Capability::Notification).count(), 2);
    }
}
