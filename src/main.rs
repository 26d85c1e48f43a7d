// main.rs
use std::io::{self, Write};
use anyhow::Result;

use random_note::command::{ReplCommand, HELP};
use random_note::config::CONFIG;
use random_note::plugin::{RandomNotePlugin, ACTION_LABEL};
use random_note::workspace::{self, Outcome};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = (*CONFIG).clone();
    let vault_path = config.vault_path();
    if !vault_path.exists() { std::fs::create_dir_all(&vault_path)?; }

    // 1. 启动插件（读取设置 + 注册定时器）
    let opener = workspace::opener_from_config(&config.opener);
    let mut plugin = RandomNotePlugin::new(config, opener);
    plugin.start()?;

    println!("--- 随机笔记 ---");
    println!(" [Vault] 笔记库: {:?}", vault_path);
    println!(" [Action] 输入 'roll' {} (输入 'help' 查看命令, 'quit' 退出)", ACTION_LABEL);

    // 2. 主线程循环：处理用户输入
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        if input.trim().is_empty() {
            continue;
        }

        let command = match ReplCommand::parse(&input) {
            Ok(command) => command,
            Err(e) => {
                println!("{} (输入 'help' 查看命令)", e);
                continue;
            }
        };

        match command {
            ReplCommand::Quit => break,
            ReplCommand::Help => println!("{}", HELP),
            ReplCommand::Roll => match plugin.roll() {
                Ok(outcome) => {
                    if let Outcome::Opened { link_text, .. } = &outcome {
                        println!(" [Open] {}", link_text);
                    }
                    println!(" [Notice] {}", outcome.notice().message);
                }
                Err(e) => println!("打开出错: {}", e),
            },
            ReplCommand::Settings => {
                for field in plugin.settings_fields() {
                    println!("{}", field);
                }
            }
            ReplCommand::Set(edits) => {
                for (key, value) in edits {
                    match plugin.edit_setting(key, &value) {
                        Ok(()) => println!(" [Settings] {} = {:?}", key, value),
                        Err(e) => println!("保存设置出错: {}", e),
                    }
                }
            }
            ReplCommand::Status => match plugin.status() {
                Ok(status) => println!(
                    " [Vault] 共 {} 篇笔记, 目录内 {} 篇, 可选 {} 篇",
                    status.total, status.in_folder, status.eligible
                ),
                Err(e) => println!("扫描出错: {}", e),
            },
        }
    }

    // 3. 释放定时器
    plugin.stop();
    Ok(())
}
