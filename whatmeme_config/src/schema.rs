use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;
use whatmeme_core::{Catalog, CatalogStore, TrendOrder, seed::seed_catalog};
use whatmeme_query::{ScoringWeights, StatusThresholds};

const CONFIG_TEMPLATE: &str = r#"{
  "catalog": {},
  "recommend": {
    "weights": {
      "context_exact": 18.0,
      "mood_exact": 16.0,
      "relative_cutoff": 0.3,
      "max_results": 3
    }
  },
  "trending": {
    "limit": 5,
    "order": "rank"
  },
  "status": {
    "hot_percent": 80,
    "steady_percent": 40
  }
}"#;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(default)]
    pub trending: TrendingConfig,
    #[serde(default)]
    pub status: StatusThresholds,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// JSON array of meme records. The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct RecommendConfig {
    #[serde(default)]
    pub weights: ScoringWeights,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct TrendingConfig {
    #[serde(default = "TrendingConfig::default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub order: TrendOrder,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            limit: Self::default_limit(),
            order: TrendOrder::default(),
        }
    }
}

impl TrendingConfig {
    const fn default_limit() -> usize {
        5
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("whatmeme"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load `~/whatmeme/config.json`, falling back to defaults when it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            info!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Optionally set catalog.path to a JSON array of meme records");
        println!("   2. Run 'whatmeme meaning \"럭키비키 뜻\"' to try a lookup");
        println!();
        println!("🔧 Configuration options:");
        println!("   - recommend.weights: any scoring weight, missing ones keep their default");
        println!("   - trending.order: rank or popularity");
        println!("   - status: percent of last-month posts needed for hot / steady");
        println!();
        Ok(())
    }

    /// The configured catalog, or the built-in one when no path is set.
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        let catalog = match &self.catalog.path {
            Some(path) => Catalog::from_json_file(path).map_err(|e| {
                anyhow::anyhow!("Failed to load catalog from {}: {e}", path.display())
            })?,
            None => seed_catalog()?,
        };
        info!("Catalog ready with {} memes", catalog.len());
        Ok(catalog)
    }

    pub fn open_store(&self) -> anyhow::Result<CatalogStore> {
        Ok(CatalogStore::new(self.load_catalog()?))
    }
}
