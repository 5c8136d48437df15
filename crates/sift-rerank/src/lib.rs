pub mod config;
pub mod error;
pub mod factory;
pub mod postprocessor;
pub mod providers;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::{ProviderError, RerankError};
pub use factory::*;
pub use postprocessor::*;
pub use providers::*;
pub use traits::*;
pub use types::*;
