#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("Stored session is corrupt: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable")]
    Unavailable,
    #[error("Storage write failed: {0}")]
    Write(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadError {
    #[error("Please select an image file")]
    NotAnImage,
    #[error("Please drop an image file")]
    NotAnImageDropped,
    #[error("Image size should be less than {limit}")]
    TooLarge { limit: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid configuration value for {field}: {reason}")]
    Value { field: &'static str, reason: String },
}
