// settings/form.rs - 设置面板的双向绑定
//! render: 从设置读出每个字段的当前值
//! on_edit: 写回设置并立即持久化，返回前保证已保存

use std::fmt;
use std::str::FromStr;

use super::{RandomNoteSettings, SettingsStore};
use crate::error::{PluginError, PluginResult};

/// 可编辑的设置项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    DestinationFolder,
    CutOffTime,
}

impl SettingKey {
    pub const ALL: [SettingKey; 2] = [SettingKey::DestinationFolder, SettingKey::CutOffTime];

    /// 命令行里使用的短名字
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::DestinationFolder => "folder",
            SettingKey::CutOffTime => "cutoff",
        }
    }
}

impl FromStr for SettingKey {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "folder" | "destination-folder" | "destinationfolder" => Ok(SettingKey::DestinationFolder),
            "cutoff" | "cut-off-time" | "cutofftime" => Ok(SettingKey::CutOffTime),
            other => Err(PluginError::InvalidCommand(format!("unknown setting '{}'", other))),
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 渲染后的一个表单字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingField {
    pub key: SettingKey,
    pub name: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub value: String,
}

impl fmt::Display for SettingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.value.is_empty() {
            format!("(empty, e.g. {})", self.placeholder)
        } else {
            format!("{:?}", self.value)
        };
        write!(f, "{} [{}]: {}\n    {}", self.name, self.key, value, self.description)
    }
}

/// 设置表单
pub struct SettingsForm;

impl SettingsForm {
    pub fn render(settings: &RandomNoteSettings) -> Vec<SettingField> {
        SettingKey::ALL
            .iter()
            .map(|key| Self::field(settings, *key))
            .collect()
    }

    fn field(settings: &RandomNoteSettings, key: SettingKey) -> SettingField {
        match key {
            SettingKey::DestinationFolder => SettingField {
                key,
                name: "Destination folder path",
                description: "Set a folder path, all notes selected will be within that folder",
                placeholder: "Project/Errands",
                value: settings.destination_folder.clone(),
            },
            SettingKey::CutOffTime => SettingField {
                key,
                name: "Cutoff time",
                description: "Specify a time x (days), all notes selected will be x days prior to today (if applicable)",
                placeholder: "7",
                value: settings.cut_off_time.clone(),
            },
        }
    }

    /// 修改一个字段并保存
    /// 截止时间按原样保存，无效值在选择时才按 0 处理
    /// 保存失败时 `settings` 保持不变
    pub fn on_edit(
        settings: &mut RandomNoteSettings,
        store: &SettingsStore,
        key: SettingKey,
        value: &str,
    ) -> PluginResult<()> {
        let mut edited = settings.clone();
        match key {
            SettingKey::DestinationFolder => edited.destination_folder = value.to_string(),
            SettingKey::CutOffTime => {
                if value.trim().parse::<f64>().is_err() && !value.trim().is_empty() {
                    log::warn!("cutoff {:?} is not a number, it will be treated as 0 days", value);
                }
                edited.cut_off_time = value.to_string();
            }
        }
        store.save(&edited)?;
        *settings = edited;
        Ok(())
    }
}
