// 配置模块 - 支持外部配置文件
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::PluginResult;

/// 配置文件路径
pub const CONFIG_FILE: &str = "./config.toml";

// ============== 配置结构体 ==============

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub walker: WalkerConfig,
    pub opener: OpenerConfig,
    pub ticker: TickerConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PathsConfig {
    /// 笔记库根目录
    pub vault_path: String,
    /// 插件设置的持久化文件
    pub data_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WalkerConfig {
    /// 是否启用 ripgrep 风格遍历
    pub use_ripgrep_walker: bool,
    /// 是否遵循 .gitignore 规则
    pub respect_gitignore: bool,
    /// 是否跳过隐藏文件
    pub skip_hidden: bool,
    /// 是否跟随符号链接
    pub follow_symlinks: bool,
    /// 最大遍历深度 (0 表示无限制)
    pub max_depth: usize,
    /// 自定义忽略模式
    pub custom_ignore_patterns: Vec<String>,
    /// 作为笔记的文件扩展名
    pub supported_extensions: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct OpenerConfig {
    /// 打开笔记的命令，空串表示只打印
    pub command: String,
    pub args: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TickerConfig {
    pub interval_secs: u64,
}

// ============== 默认配置 ==============

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            vault_path: "./vault".to_string(),
            data_path: "./data.json".to_string(),
        }
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            use_ripgrep_walker: true,
            respect_gitignore: true,
            skip_hidden: true,
            follow_symlinks: false,
            max_depth: 0,
            custom_ignore_patterns: Vec::new(),
            supported_extensions: vec!["md".to_string()],
        }
    }
}

impl Default for TickerConfig {
    fn default() -> Self {
        // 5 分钟
        Self { interval_secs: 5 * 60 }
    }
}

impl TickerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

// ============== 配置加载 ==============

impl AppConfig {
    /// 从配置文件加载，失败则使用默认配置
    pub fn load() -> Self {
        Self::load_from_file(CONFIG_FILE).unwrap_or_else(|e| {
            log::warn!("无法加载配置文件 '{}': {}，使用默认配置", CONFIG_FILE, e);
            Self::default()
        })
    }

    /// 从指定文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PluginResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> PluginResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 生成默认配置文件
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> PluginResult<()> {
        let default_content = include_str!("../config.toml");
        fs::write(path, default_content)?;
        Ok(())
    }

    pub fn vault_path(&self) -> PathBuf {
        PathBuf::from(&self.paths.vault_path)
    }

    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.paths.data_path)
    }
}

// ============== 全局配置实例 ==============

/// 全局配置实例 (懒加载)
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let config = AppConfig::load();
    log::info!("配置已加载: vault={}", config.paths.vault_path);
    if config.walker.use_ripgrep_walker {
        log::info!("使用 ripgrep 遍历模式 (respect .gitignore)");
    } else {
        log::info!("使用标准遍历模式");
    }
    config
});
