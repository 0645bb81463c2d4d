use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use survey_client::http::DEFAULT_TIMEOUT;
use survey_core::models::lifestyle::LIFESTYLE_VERSION;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub api_base_url: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub api_token: Option<String>,
    /// Added in v1; older configs get [`LIFESTYLE_VERSION`].
    pub lifestyle_version: String,
    /// Added in v1; older configs get the HTTP client default.
    pub request_timeout_secs: u64,
    pub created_at: jiff::Timestamp,
}

impl SurveyConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            api_base_url: api_base_url.into(),
            api_token: None,
            lifestyle_version: LIFESTYLE_VERSION.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

/// Redacted config info safe to show or log.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigInfo {
    pub api_base_url: String,
    pub lifestyle_version: String,
    pub request_timeout_secs: u64,
    pub created_at: String,
    pub token_hint: Option<String>,
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("org.healthsurvey.client"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<SurveyConfig> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> eyre::Result<SurveyConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: SurveyConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update the app."
        ));
    }

    // v0 → v1: add lifestyle_version and request_timeout_secs
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("lifestyle_version")
            .or_insert(serde_json::Value::String(LIFESTYLE_VERSION.to_string()));
        obj.entry("request_timeout_secs")
            .or_insert(serde_json::Value::Number(DEFAULT_TIMEOUT.as_secs().into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added lifestyle_version, request_timeout_secs)");
    }

    Ok(json)
}

pub fn save_config(config: &SurveyConfig) -> eyre::Result<()> {
    save_config_to(&config_path()?, config)
}

pub fn save_config_to(path: &Path, config: &SurveyConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // The token is a credential: owner-only on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn delete_config() -> eyre::Result<()> {
    let path = config_path()?;
    if path.exists() {
        std::fs::remove_file(&path)?;
        tracing::info!(path = %path.display(), "config deleted");
    }
    Ok(())
}

pub fn config_info(config: &SurveyConfig) -> ConfigInfo {
    ConfigInfo {
        api_base_url: config.api_base_url.clone(),
        lifestyle_version: config.lifestyle_version.clone(),
        request_timeout_secs: config.request_timeout_secs,
        created_at: config.created_at.to_string(),
        token_hint: config.api_token.as_deref().map(redact_token),
    }
}

fn redact_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}
