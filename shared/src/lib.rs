pub mod config;
pub mod error;
pub mod metrics;
pub mod prediction;
pub mod route;
pub mod session;
pub mod upload;

pub use config::AppConfig;
pub use error::{ConfigError, SessionError, StorageError, UploadError};
pub use prediction::{PredictionResult, Predictor, SyntheticPredictor};
pub use route::{GuardDecision, Route};
pub use session::{MemoryStorage, SessionStorage, SessionStore, User};
pub use upload::{ImageInfo, Intake};
