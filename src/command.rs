// command.rs - 交互命令解析
//! 支持的命令:
//! - roll / open: 随机打开一篇笔记
//! - settings: 显示设置面板
//! - set --folder=Project/Errands 或 --folder="path with spaces"
//! - set --cutoff=7
//! - status: 显示笔记数量统计
//! - help
//! - quit / exit

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PluginError, PluginResult};
use crate::settings::SettingKey;

/// 解析后的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Roll,
    Settings,
    Set(Vec<(SettingKey, String)>),
    Status,
    Help,
    Quit,
}

// 匹配 --key=value 或 --key="value with spaces"（允许空引号）
static ARG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"--([a-z\-]+)=(?:"([^"]*)"|([^\s"]+))"#).expect("valid argument regex")
});

pub const HELP: &str = "\
  roll | open              随机打开一篇笔记
  settings                 显示当前设置
  set --folder=<path>      设置目录路径 (子串匹配，空串匹配全部)
  set --cutoff=<days>      设置截止天数 (可以是小数)
  status                   显示笔记数量统计
  help                     显示帮助
  quit | exit              退出";

impl ReplCommand {
    pub fn parse(input: &str) -> PluginResult<Self> {
        let input = input.trim();
        let (verb, rest) = match input.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (input, ""),
        };

        let simple = |cmd: ReplCommand| {
            if rest.is_empty() {
                Ok(cmd)
            } else {
                Err(PluginError::InvalidCommand(format!("'{}' takes no arguments", verb)))
            }
        };

        match verb.to_lowercase().as_str() {
            "roll" | "open" => simple(ReplCommand::Roll),
            "settings" => simple(ReplCommand::Settings),
            "status" => simple(ReplCommand::Status),
            "help" | "?" => simple(ReplCommand::Help),
            "quit" | "exit" => simple(ReplCommand::Quit),
            "set" => Self::parse_set(rest),
            "" => Err(PluginError::InvalidCommand("empty input".to_string())),
            other => Err(PluginError::InvalidCommand(format!("unknown command '{}'", other))),
        }
    }

    fn parse_set(rest: &str) -> PluginResult<Self> {
        let mut edits = Vec::new();
        let mut last_end = 0;

        for cap in ARG_PATTERN.captures_iter(rest) {
            let Some(full_match) = cap.get(0) else { continue };
            // 参数之间只允许空白
            if !rest[last_end..full_match.start()].trim().is_empty() {
                break;
            }
            last_end = full_match.end();

            let key: SettingKey = cap.get(1).map(|m| m.as_str()).unwrap_or_default().parse()?;
            // 优先使用带引号的值，否则使用不带引号的值
            let value = cap
                .get(2)
                .or_else(|| cap.get(3))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            edits.push((key, value));
        }

        if !rest[last_end..].trim().is_empty() {
            return Err(PluginError::InvalidCommand(format!(
                "cannot parse '{}', expected --folder=<path> or --cutoff=<days>",
                rest[last_end..].trim()
            )));
        }
        if edits.is_empty() {
            return Err(PluginError::InvalidCommand("set needs --folder or --cutoff".to_string()));
        }
        Ok(ReplCommand::Set(edits))
    }
}
