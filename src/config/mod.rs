use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{id, CustomRankingInfo, RequestMetadata};
use crate::error::{GcpSamplesError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub access_token: Option<String>,
    pub endpoints: Endpoints,
    pub search: SearchTuning,
    pub metadata: MetadataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub dlp: String,
    pub talent: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            dlp: "https://dlp.googleapis.com".to_string(),
            talent: "https://jobs.googleapis.com".to_string(),
        }
    }
}

/// Optional search knobs; everything here is omitted from the request
/// when unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchTuning {
    pub order_by: Option<String>,
    pub custom_ranking: Option<CustomRankingInfo>,
    pub max_page_size: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    pub domain: String,
    pub session_id: Option<String>,
    pub user_id: Option<String>,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            domain: "www.example.com".to_string(),
            session_id: None,
            user_id: None,
        }
    }
}

impl MetadataConfig {
    /// Fills the unset identifiers with ones minted for this invocation.
    pub fn resolve(&self) -> RequestMetadata {
        RequestMetadata {
            domain: self.domain.clone(),
            session_id: self
                .session_id
                .clone()
                .unwrap_or_else(|| id::mint("sess")),
            user_id: self.user_id.clone().unwrap_or_else(|| id::mint("usr")),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let project = Self::load_project()?;
        let merged = Self::merge(global, project);
        Ok(merged.with_env_overrides())
    }

    /// Loads an explicitly named file; missing or malformed is an error
    /// here, unlike the discovered locations.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| GcpSamplesError::Config(e.to_string()))?;
        Ok(config.with_env_overrides())
    }

    fn load_global() -> Result<Self> {
        let config_dir = directories::ProjectDirs::from("", "", "gcp-samples").map_or_else(
            || PathBuf::from("~/.config/gcp-samples"),
            |d| d.config_dir().to_path_buf(),
        );

        Self::load_optional(&config_dir.join("config.toml"))
    }

    fn load_project() -> Result<Self> {
        Self::load_optional(Path::new(".gcp-samples.toml"))
    }

    fn load_optional(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| GcpSamplesError::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    fn merge(global: Self, project: Self) -> Self {
        Self {
            access_token: project.access_token.or(global.access_token),
            endpoints: project.endpoints,
            search: project.search,
            metadata: project.metadata,
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(token) = std::env::var("GOOGLE_ACCESS_TOKEN") {
            self.access_token = Some(token);
        }
        self
    }

    /// Resolves the credentials the clients are constructed with.
    pub fn resolve_credentials(&self) -> Result<Credentials> {
        self.access_token
            .clone()
            .or_else(Self::detect_access_token)
            .map(Credentials::new)
            .ok_or(GcpSamplesError::MissingCredentials)
    }

    pub fn detect_access_token() -> Option<String> {
        if let Ok(token) = std::env::var("GOOGLE_ACCESS_TOKEN") {
            return Some(token);
        }

        std::process::Command::new("gcloud")
            .args(["auth", "print-access-token"])
            .output()
            .ok()
            .filter(|o| o.status.success())
            .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
    }
}

/// Bearer-token credentials handed to a client constructor. Always an
/// explicit value; clients never consult ambient state themselves.
#[derive(Clone)]
pub struct Credentials {
    access_token: String,
}

impl Credentials {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credentials(..)")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn default_endpoints_are_production() {
        let config = Config::default();
        assert_eq!(config.endpoints.dlp, "https://dlp.googleapis.com");
        assert_eq!(config.endpoints.talent, "https://jobs.googleapis.com");
    }

    #[test]
    fn parses_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            access_token = "ya29.token"

            [search]
            order_by = "posting_publish_time desc"
            max_page_size = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.access_token.as_deref(), Some("ya29.token"));
        assert_eq!(
            config.search.order_by.as_deref(),
            Some("posting_publish_time desc")
        );
        assert_eq!(config.search.max_page_size, Some(50));
        assert_eq!(config.metadata.domain, "www.example.com");
    }

    #[test]
    fn project_token_wins_over_global() {
        let global = Config {
            access_token: Some("global".to_string()),
            ..Config::default()
        };
        let project = Config {
            access_token: Some("project".to_string()),
            ..Config::default()
        };
        let merged = Config::merge(global, project);
        assert_eq!(merged.access_token.as_deref(), Some("project"));
    }

    #[test]
    fn global_token_survives_when_project_has_none() {
        let global = Config {
            access_token: Some("global".to_string()),
            ..Config::default()
        };
        let merged = Config::merge(global, Config::default());
        assert_eq!(merged.access_token.as_deref(), Some("global"));
    }

    #[test]
    fn load_from_reads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[endpoints]\ndlp = \"http://localhost:9000\"").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.endpoints.dlp, "http://localhost:9000");
        assert_eq!(config.endpoints.talent, "https://jobs.googleapis.com");
    }

    #[test]
    fn load_from_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [").unwrap();
        assert!(matches!(
            Config::load_from(file.path()),
            Err(GcpSamplesError::Config(_))
        ));
    }

    #[test]
    fn resolved_metadata_mints_missing_ids() {
        let metadata = MetadataConfig::default().resolve();
        assert_eq!(metadata.domain, "www.example.com");
        assert!(metadata.session_id.starts_with("sess-"));
        assert!(metadata.user_id.starts_with("usr-"));
    }

    #[test]
    fn resolved_metadata_keeps_configured_ids() {
        let metadata = MetadataConfig {
            domain: "jobs.example.org".to_string(),
            session_id: Some("sess-fixed".to_string()),
            user_id: Some("usr-fixed".to_string()),
        }
        .resolve();
        assert_eq!(metadata.session_id, "sess-fixed");
        assert_eq!(metadata.user_id, "usr-fixed");
    }
}
