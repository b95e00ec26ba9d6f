pub mod config;
pub mod provider;
pub mod records;

pub use config::{load_provider_config, load_provider_config_from_env, ConfigError, ProviderConfig};
pub use provider::{InfoProvider, ProviderCapability, ProviderError, ProviderInfo};
pub use records::{PartDetail, PriceOffer, SearchHit, VendorOffer};
