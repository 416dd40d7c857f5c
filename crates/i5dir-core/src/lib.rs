pub mod business;
pub mod cities;
pub mod config;
pub mod slug;
pub mod trades;

pub use business::{Address, Business, RawAddress, RawBusinessRecord};
pub use cities::{city_slug, is_supported_city, normalize_city_name, SupportedCity, SUPPORTED_CITIES};
pub use config::{load_seal_config, ConfigError, SealConfig};
pub use slug::{slugify, slugify_truncated};
pub use trades::{
    industry_for_trade, is_supported_industry, trade_for_industry, FALLBACK_TRADE,
    SUPPORTED_INDUSTRIES,
};
