//! Option validation for the file providers.
//!
//! Each validator reports every missing or empty required field at once and
//! runs before any storage client is built.

use crate::domain::{
    errors::{FileProviderError, FileProviderResult},
    models::{LocalFileOptions, MinioFileOptions, R2FileOptions},
    value_objects::PublicBaseUrl,
};

struct Required {
    provider: &'static str,
    missing: Vec<&'static str>,
}

impl Required {
    fn new(provider: &'static str) -> Self {
        Self {
            provider,
            missing: Vec::new(),
        }
    }

    fn take(&mut self, field: &'static str, value: &Option<String>) -> String {
        match value.as_deref().filter(|v| !v.is_empty()) {
            Some(v) => v.to_string(),
            None => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    fn finish(self) -> FileProviderResult<()> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(FileProviderError::Configuration {
                provider: self.provider,
                missing: self.missing,
            })
        }
    }
}

#[derive(Clone)]
pub struct ValidatedR2Options {
    pub account_id: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    pub public_url: PublicBaseUrl,
}

impl std::fmt::Debug for ValidatedR2Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedR2Options")
            .field("account_id", &self.account_id)
            .field("bucket", &self.bucket)
            .field("public_url", &self.public_url)
            .finish_non_exhaustive()
    }
}

pub fn validate_r2_options(options: &R2FileOptions) -> FileProviderResult<ValidatedR2Options> {
    let mut required = Required::new("r2");
    let account_id = required.take("account_id", &options.account_id);
    let access_key_id = required.take("access_key_id", &options.access_key_id);
    let secret_access_key = required.take("secret_access_key", &options.secret_access_key);
    let bucket = required.take("bucket", &options.bucket);
    let public_url = required.take("public_url", &options.public_url);
    required.finish()?;

    Ok(ValidatedR2Options {
        account_id,
        access_key_id,
        secret_access_key,
        bucket,
        public_url: PublicBaseUrl::new(public_url),
    })
}

#[derive(Clone)]
pub struct ValidatedMinioOptions {
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
}

impl std::fmt::Debug for ValidatedMinioOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedMinioOptions")
            .field("endpoint", &self.endpoint)
            .field("bucket", &self.bucket)
            .finish_non_exhaustive()
    }
}

pub fn validate_minio_options(
    options: &MinioFileOptions,
) -> FileProviderResult<ValidatedMinioOptions> {
    let mut required = Required::new("minio");
    let endpoint = required.take("endPoint", &options.end_point);
    let access_key = required.take("accessKey", &options.access_key);
    let secret_key = required.take("secretKey", &options.secret_key);
    let bucket = required.take("bucket", &options.bucket);
    required.finish()?;

    Ok(ValidatedMinioOptions {
        endpoint,
        access_key,
        secret_key,
        bucket,
    })
}

#[derive(Debug, Clone)]
pub struct ValidatedLocalOptions {
    pub upload_dir: String,
    pub backend_url: PublicBaseUrl,
}

pub fn validate_local_options(
    options: &LocalFileOptions,
) -> FileProviderResult<ValidatedLocalOptions> {
    let mut required = Required::new("local");
    let upload_dir = required.take("upload_dir", &options.upload_dir);
    let backend_url = required.take("backend_url", &options.backend_url);
    required.finish()?;

    Ok(ValidatedLocalOptions {
        upload_dir,
        backend_url: PublicBaseUrl::new(backend_url),
    })
}
