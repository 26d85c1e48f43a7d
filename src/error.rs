// error.rs - 插件错误类型

/// 插件错误类型
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings parse error: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Walk error: {0}")]
    Walk(String),

    #[error("Opener error: {0}")]
    Opener(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

impl From<ignore::Error> for PluginError {
    fn from(e: ignore::Error) -> Self {
        PluginError::Walk(e.to_string())
    }
}

impl From<walkdir::Error> for PluginError {
    fn from(e: walkdir::Error) -> Self {
        PluginError::Walk(e.to_string())
    }
}

pub type PluginResult<T> = Result<T, PluginError>;
