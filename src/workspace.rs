// workspace.rs - 选择结果的消费方
//! 打开选中的笔记，或者告诉用户没有可选的笔记

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};
use std::thread;

use crate::config::OpenerConfig;
use crate::error::{PluginError, PluginResult};
use crate::models::SelectionResult;
use crate::vault::VaultScanner;

pub const NOTICE_GENERATED: &str = "Random note generated";
pub const NOTICE_NOTHING_FOUND: &str = "No eligible note found";

/// 打开笔记的方式
pub trait NoteOpener: Send + Sync {
    fn open(&self, path: &Path) -> PluginResult<()>;
}

impl<T: NoteOpener + ?Sized> NoteOpener for Arc<T> {
    fn open(&self, path: &Path) -> PluginResult<()> {
        (**self).open(path)
    }
}

/// 只打印路径
pub struct PrintOpener;

impl NoteOpener for PrintOpener {
    fn open(&self, path: &Path) -> PluginResult<()> {
        println!(" [Path] {}", path.display());
        Ok(())
    }
}

/// 调用外部命令打开，例如 `code` 或 `xdg-open`
pub struct CommandOpener {
    command: String,
    args: Vec<String>,
}

impl CommandOpener {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self { command: command.into(), args }
    }
}

impl NoteOpener for CommandOpener {
    fn open(&self, path: &Path) -> PluginResult<()> {
        log::debug!("spawning {} {:?} {:?}", self.command, self.args, path);
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .arg(path)
            .spawn()
            .map_err(|e| PluginError::Opener(format!("{}: {}", self.command, e)))?;

        // 后台回收子进程，不阻塞交互循环
        let command = self.command.clone();
        thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => log::warn!("{} exited with {}", command, status),
            Ok(_) => {}
            Err(e) => log::warn!("failed to wait for {}: {}", command, e),
        });
        Ok(())
    }
}

/// 记录打开过的路径（测试和无界面场景使用）
#[derive(Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<PathBuf>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl NoteOpener for RecordingOpener {
    fn open(&self, path: &Path) -> PluginResult<()> {
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(path.to_path_buf());
        }
        Ok(())
    }
}

/// 根据配置创建打开方式，命令为空时只打印
pub fn opener_from_config(config: &OpenerConfig) -> Box<dyn NoteOpener> {
    if config.command.trim().is_empty() {
        Box::new(PrintOpener)
    } else {
        Box::new(CommandOpener::new(config.command.trim(), config.args.clone()))
    }
}

/// 给用户的提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// 一次操作的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 已打开：链接文本和绝对路径
    Opened { link_text: String, path: PathBuf, notice: Notice },
    /// 没有可选笔记，什么也没打开
    NothingFound { notice: Notice },
}

impl Outcome {
    pub fn notice(&self) -> &Notice {
        match self {
            Outcome::Opened { notice, .. } | Outcome::NothingFound { notice } => notice,
        }
    }
}

/// 工作区：把选择结果交给打开方式
pub struct Workspace {
    opener: Box<dyn NoteOpener>,
}

impl Workspace {
    pub fn new(opener: Box<dyn NoteOpener>) -> Self {
        Self { opener }
    }

    pub fn apply(&self, vault: &VaultScanner, result: SelectionResult) -> PluginResult<Outcome> {
        match result {
            SelectionResult::Chosen(record) => {
                let path = vault.resolve(&record);
                self.opener.open(&path)?;
                log::info!("opened {}", record.path);
                Ok(Outcome::Opened {
                    link_text: record.link_text().to_string(),
                    path,
                    notice: Notice::new(NOTICE_GENERATED),
                })
            }
            SelectionResult::NoEligibleFile => Ok(Outcome::NothingFound {
                notice: Notice::new(NOTICE_NOTHING_FOUND),
            }),
        }
    }
}
