use crate::config::{DEFAULT_DATA_DIR, DEFAULT_RESORTS_PATH};
use crate::core::persistence::DEFAULT_FAVORITES_FILE;
use crate::core::{ConfigProvider, SortOrder};
use crate::utils::error::{Result, SeekerError};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub favorites: Option<FavoritesConfig>,
    pub view: Option<ViewConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_RESORTS_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesConfig {
    pub data_dir: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    pub default_sort: Option<SortOrder>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SeekerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SeekerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SeekerError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 套用命令列參數覆蓋設定
    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(resorts) = &cli.resorts {
            self.catalog.path = resorts.clone();
            tracing::info!("🔧 Resort dataset overridden to: {}", resorts);
        }

        if let Some(data_dir) = &cli.data_dir {
            let favorites = self.favorites.get_or_insert(FavoritesConfig {
                data_dir: None,
                file: None,
            });
            favorites.data_dir = Some(data_dir.clone());
            tracing::info!("🔧 Data directory overridden to: {}", data_dir);
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_path("catalog.path", &self.catalog.path)?;
        validate_file_extension("catalog.path", &self.catalog.path, &["json"])?;
        validate_path("favorites.data_dir", self.data_dir())?;
        validate_non_empty_string("favorites.file", self.favorites_file())?;

        if Path::new(self.favorites_file()).components().count() != 1 {
            return Err(SeekerError::InvalidConfigValueError {
                field: "favorites.file".to_string(),
                value: self.favorites_file().to_string(),
                reason: "Must be a plain file name inside favorites.data_dir".to_string(),
            });
        }

        Ok(())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn resorts_path(&self) -> &str {
        &self.catalog.path
    }

    fn data_dir(&self) -> &str {
        self.favorites
            .as_ref()
            .and_then(|f| f.data_dir.as_deref())
            .unwrap_or(DEFAULT_DATA_DIR)
    }

    fn favorites_file(&self) -> &str {
        self.favorites
            .as_ref()
            .and_then(|f| f.file.as_deref())
            .unwrap_or(DEFAULT_FAVORITES_FILE)
    }

    fn default_sort(&self) -> SortOrder {
        self.view
            .as_ref()
            .and_then(|v| v.default_sort)
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
