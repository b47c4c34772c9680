use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A pluggable unit of backend functionality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    FileStorage,
    EventBus,
    WorkflowEngine,
    Notification,
    Payment,
    Search,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::FileStorage,
        Capability::EventBus,
        Capability::WorkflowEngine,
        Capability::Notification,
        Capability::Payment,
        Capability::Search,
    ];

    /// Module key the commerce runtime registers the capability under
    pub fn module_key(&self) -> &'static str {
        match self {
            Capability::FileStorage => "file",
            Capability::EventBus => "event_bus",
            Capability::WorkflowEngine => "workflows",
            Capability::Notification => "notification",
            Capability::Payment => "payment",
            Capability::Search => "search",
        }
    }

    /// Whether at most one implementation may be active at a time
    pub fn is_singleton(&self) -> bool {
        match self {
            Capability::FileStorage
            | Capability::EventBus
            | Capability::WorkflowEngine
            | Capability::Search => true,
            Capability::Notification | Capability::Payment => false,
        }
    }

    /// Hub module wrapping a `providers` list, for capabilities whose
    /// implementations are registered as providers rather than as modules.
    pub fn hub_resolve(&self) -> Option<&'static str> {
        match self {
            Capability::FileStorage => Some("@medusajs/file"),
            Capability::Notification => Some("@medusajs/notification"),
            Capability::Payment => Some("@medusajs/payment"),
            Capability::EventBus | Capability::WorkflowEngine | Capability::Search => None,
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.module_key())
    }
}

/// Options of the R2 file provider. Fields are optional so that an options
/// object from any source can be deserialized and then validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct R2FileOptions {
    pub account_id: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub bucket: Option<String>,
    pub public_url: Option<String>,
}

/// Options of the self-hosted S3-compatible (MinIO) file provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MinioFileOptions {
    pub end_point: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub bucket: Option<String>,
}

/// Options of the local filesystem file provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalFileOptions {
    pub upload_dir: Option<String>,
    pub backend_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedisEventBusOptions {
    pub redis_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedisConnection {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedisWorkflowEngineOptions {
    pub redis: RedisConnection,
}

/// Options shared by the transactional email providers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailNotificationOptions {
    pub channels: Vec<String>,
    pub api_key: String,
    pub from: String,
}

impl EmailNotificationOptions {
    pub fn email(api_key: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            channels: vec!["email".to_string()],
            api_key: api_key.into(),
            from: from.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StripePaymentOptions {
    pub api_key: String,
    pub webhook_secret: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaypalPaymentOptions {
    #[serde(rename = "oAuthClientId")]
    pub oauth_client_id: String,
    #[serde(rename = "oAuthClientSecret")]
    pub oauth_client_secret: String,
    pub environment: String,
}

/// One enabled implementation of a capability together with its options
#[derive(Debug, Clone, PartialEq)]
pub enum CapabilityDescriptor {
    R2File(R2FileOptions),
    MinioFile(MinioFileOptions),
    LocalFile(LocalFileOptions),
    RedisEventBus(RedisEventBusOptions),
    RedisWorkflowEngine(RedisWorkflowEngineOptions),
    SendgridNotification(EmailNotificationOptions),
    ResendNotification(EmailNotificationOptions),
    StripePayment(StripePaymentOptions),
    PaypalPayment(PaypalPaymentOptions),
}

impl CapabilityDescriptor {
    pub fn capability(&self) -> Capability {
        match self {
            CapabilityDescriptor::R2File(_)
            | CapabilityDescriptor::MinioFile(_)
            | CapabilityDescriptor::LocalFile(_) => Capability::FileStorage,
            CapabilityDescriptor::RedisEventBus(_) => Capability::EventBus,
            CapabilityDescriptor::RedisWorkflowEngine(_) => Capability::WorkflowEngine,
            CapabilityDescriptor::SendgridNotification(_)
            | CapabilityDescriptor::ResendNotification(_) => Capability::Notification,
            CapabilityDescriptor::StripePayment(_) | CapabilityDescriptor::PaypalPayment(_) => {
                Capability::Payment
            }
        }
    }

    pub fn implementation_id(&self) -> &'static str {
        match self {
            CapabilityDescriptor::R2File(_) => "r2",
            CapabilityDescriptor::MinioFile(_) => "minio",
            CapabilityDescriptor::LocalFile(_) => "local",
            CapabilityDescriptor::RedisEventBus(_) => "redis",
            CapabilityDescriptor::RedisWorkflowEngine(_) => "redis",
            CapabilityDescriptor::SendgridNotification(_) => "sendgrid",
            CapabilityDescriptor::ResendNotification(_) => "resend",
            CapabilityDescriptor::StripePayment(_) => "stripe",
            CapabilityDescriptor::PaypalPayment(_) => "paypal-payment",
        }
    }

    /// Package or path the runtime loads the implementation from
    pub fn resolve(&self) -> &'static str {
        match self {
            CapabilityDescriptor::R2File(_) => "./src/modules/r2-file",
            CapabilityDescriptor::MinioFile(_) => "./src/modules/minio-file",
            CapabilityDescriptor::LocalFile(_) => "@medusajs/file-local",
            CapabilityDescriptor::RedisEventBus(_) => "@medusajs/event-bus-redis",
            CapabilityDescriptor::RedisWorkflowEngine(_) => "@medusajs/workflow-engine-redis",
            CapabilityDescriptor::SendgridNotification(_) => "@medusajs/notification-sendgrid",
            CapabilityDescriptor::ResendNotification(_) => "./src/modules/email-notifications",
            CapabilityDescriptor::StripePayment(_) => "@medusajs/payment-stripe",
            CapabilityDescriptor::PaypalPayment(_) => {
                "@rsc-labs/medusa-paypal-payment/providers/paypal-payment"
            }
        }
    }

    /// Options payload as a JSON object
    pub fn options(&self) -> Map<String, Value> {
        match self {
            CapabilityDescriptor::R2File(o) => to_options(o),
            CapabilityDescriptor::MinioFile(o) => to_options(o),
            CapabilityDescriptor::LocalFile(o) => to_options(o),
            CapabilityDescriptor::RedisEventBus(o) => to_options(o),
            CapabilityDescriptor::RedisWorkflowEngine(o) => to_options(o),
            CapabilityDescriptor::SendgridNotification(o)
            | CapabilityDescriptor::ResendNotification(o) => to_options(o),
            CapabilityDescriptor::StripePayment(o) => to_options(o),
            CapabilityDescriptor::PaypalPayment(o) => to_options(o),
        }
    }
}

pub(crate) fn to_options<T: Serialize>(options: &T) -> Map<String, Value> {
    match serde_json::to_value(options) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
