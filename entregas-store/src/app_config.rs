use entregas_shared::Masked;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub supabase: SupabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SupabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub key: Masked<String>,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 { 10 }

impl SupabaseConfig {
    /// Both credentials must be present and non-blank.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.url.trim().is_empty() {
            return Err(missing("SUPABASE_URL"));
        }
        if self.key.expose().trim().is_empty() {
            return Err(missing("SUPABASE_KEY"));
        }
        Ok(())
    }
}

fn missing(var: &str) -> config::ConfigError {
    config::ConfigError::Message(format!("missing required configuration: {}", var))
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::from_sources(
            &run_mode,
            env::var("SUPABASE_URL").ok(),
            env::var("SUPABASE_KEY").ok(),
        )
    }

    fn from_sources(
        run_mode: &str,
        supabase_url: Option<String>,
        supabase_key: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("supabase.timeout_seconds", default_timeout())?
            // Optional layered files: default, then the run mode, then
            // an uncommitted local override
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `ENTREGAS__SERVER__PORT=8080`
            .add_source(config::Environment::with_prefix("ENTREGAS").separator("__"))
            // The hosted backend's own variable names win over everything else
            .set_override_option("supabase.url", supabase_url)?
            .set_override_option("supabase.key", supabase_key)?
            .build()?;

        let config: Config = s.try_deserialize()?;
        config.supabase.validate()?;
        Ok(config)
    }
}
