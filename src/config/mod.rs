/// Bot settings loaded from config.toml with built-in defaults
pub mod settings;

/// Discord credentials and registration target from environment variables
pub mod discord;
