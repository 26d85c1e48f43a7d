// settings/mod.rs - 插件设置
//! 用户可编辑的两项设置，以及它们的持久化和表单绑定

mod form;
mod store;

pub use form::*;
pub use store::*;

use serde::{Deserialize, Serialize};

use crate::models::SelectionConfig;

/// 插件设置（按原样保存用户输入的字符串）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomNoteSettings {
    /// 目录路径子串
    #[serde(rename = "destinationFolder")]
    pub destination_folder: String,
    /// 截止天数（原始字符串）
    #[serde(rename = "cutOffTime")]
    pub cut_off_time: String,
}

impl RandomNoteSettings {
    /// 转换为规范化后的选择配置
    pub fn selection_config(&self) -> SelectionConfig {
        SelectionConfig::from_raw(&self.destination_folder, &self.cut_off_time)
    }
}
