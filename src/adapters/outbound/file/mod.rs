pub mod object_storage_file_provider;
pub mod options;

pub use object_storage_file_provider::ObjectStorageFileProvider;
pub use options::{
    validate_local_options, validate_minio_options, validate_r2_options, ValidatedLocalOptions,
    ValidatedMinioOptions, ValidatedR2Options,
};
