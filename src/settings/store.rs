// settings/store.rs - 设置持久化
// 以 JSON 文件保存，读取时与默认值合并

use std::fs;
use std::path::{Path, PathBuf};

use super::RandomNoteSettings;
use crate::error::PluginResult;

/// 设置存储（一个 JSON 数据文件）
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取设置
    /// 文件不存在 -> 默认设置；缺少的键取默认值
    pub fn load(&self) -> PluginResult<RandomNoteSettings> {
        if !self.path.exists() {
            log::debug!("settings file {:?} missing, using defaults", self.path);
            return Ok(RandomNoteSettings::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(RandomNoteSettings::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// 保存设置（先写临时文件再重命名，避免写一半）
    pub fn save(&self, settings: &RandomNoteSettings) -> PluginResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_string_pretty(settings)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, data)?;
        fs::rename(&tmp_path, &self.path)?;
        log::debug!("settings saved to {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("data.json"));
        assert_eq!(store.load().unwrap(), RandomNoteSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("nested/data.json"));
        let settings = RandomNoteSettings {
            destination_folder: "Errands".to_string(),
            cut_off_time: "2.5".to_string(),
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
        assert!(!dir.path().join("nested/data.json.tmp").exists());
    }

    #[test]
    fn test_load_merges_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, r#"{"destinationFolder": "Inbox"}"#).unwrap();
        let settings = SettingsStore::new(&path).load().unwrap();
        assert_eq!(settings.destination_folder, "Inbox");
        assert_eq!(settings.cut_off_time, "");
    }

    #[test]
    fn test_load_corrupt_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(SettingsStore::new(&path).load().is_err());
    }
}
