// plugin.rs - 插件生命周期
//! start(): 读取设置（与默认值合并），注册后台定时器
//! stop(): 释放定时器，可重复调用
//! roll(): 扫描笔记库 -> 选择 -> 打开

use rand::Rng;

use crate::config::AppConfig;
use crate::error::PluginResult;
use crate::selector;
use crate::settings::{RandomNoteSettings, SettingField, SettingKey, SettingsForm, SettingsStore};
use crate::ticker::Ticker;
use crate::vault::{self, VaultScanner};
use crate::workspace::{NoteOpener, Outcome, Workspace};

/// 触发动作的名字（对应侧边栏图标的提示）
pub const ACTION_LABEL: &str = "Open random note";

/// 笔记数量统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultStatus {
    /// 笔记总数
    pub total: usize,
    /// 目录过滤后的数量
    pub in_folder: usize,
    /// 两个过滤条件都满足的数量
    pub eligible: usize,
}

/// 随机笔记插件
pub struct RandomNotePlugin {
    config: AppConfig,
    store: SettingsStore,
    settings: RandomNoteSettings,
    vault: VaultScanner,
    workspace: Workspace,
    ticker: Option<Ticker>,
}

impl RandomNotePlugin {
    pub fn new(config: AppConfig, opener: Box<dyn NoteOpener>) -> Self {
        let store = SettingsStore::new(config.data_path());
        let vault = VaultScanner::new(config.vault_path(), &config.walker);
        Self {
            config,
            store,
            settings: RandomNoteSettings::default(),
            vault,
            workspace: Workspace::new(opener),
            ticker: None,
        }
    }

    /// 加载设置并注册定时器
    pub fn start(&mut self) -> PluginResult<()> {
        self.settings = self.store.load()?;
        log::info!(
            "plugin started: folder={:?}, cutoff={:?}",
            self.settings.destination_folder,
            self.settings.cut_off_time
        );

        if self.ticker.is_none() {
            let interval = self.config.ticker.interval();
            self.ticker = Some(Ticker::start(interval, move || {
                log::debug!("interval tick ({}s)", interval.as_secs());
            }));
        }
        Ok(())
    }

    /// 释放定时器
    pub fn stop(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.stop();
            log::info!("plugin stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn settings(&self) -> &RandomNoteSettings {
        &self.settings
    }

    pub fn vault(&self) -> &VaultScanner {
        &self.vault
    }

    /// 渲染设置面板
    pub fn settings_fields(&self) -> Vec<SettingField> {
        SettingsForm::render(&self.settings)
    }

    /// 修改一项设置（返回前已保存）
    pub fn edit_setting(&mut self, key: SettingKey, value: &str) -> PluginResult<()> {
        SettingsForm::on_edit(&mut self.settings, &self.store, key, value)
    }

    /// 触发一次随机打开
    pub fn roll(&self) -> PluginResult<Outcome> {
        self.roll_at(vault::now_seconds(), &mut rand::rng())
    }

    /// 指定当前时间和随机数生成器触发一次
    pub fn roll_at<R: Rng + ?Sized>(&self, now_seconds: i64, rng: &mut R) -> PluginResult<Outcome> {
        let files = self.vault.scan()?;
        let selection = self.settings.selection_config();
        let result = selector::select_random_note_with(&files, &selection, now_seconds, rng);
        self.workspace.apply(&self.vault, result)
    }

    /// 统计当前设置下的笔记数量
    pub fn status(&self) -> PluginResult<VaultStatus> {
        self.status_at(vault::now_seconds())
    }

    pub fn status_at(&self, now_seconds: i64) -> PluginResult<VaultStatus> {
        let files = self.vault.scan()?;
        let selection = self.settings.selection_config();
        Ok(VaultStatus {
            total: files.len(),
            in_folder: files.iter().filter(|f| selector::in_folder(f, &selection)).count(),
            eligible: selector::eligible_notes(&files, &selection, now_seconds).len(),
        })
    }
}

impl Drop for RandomNotePlugin {
    fn drop(&mut self) {
        self.stop();
    }
}
