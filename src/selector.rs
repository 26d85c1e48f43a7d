// selector.rs - 随机笔记选择
//! 目录子串过滤 -> 创建时间过滤 -> 均匀随机选择
//!
//! 纯函数：不做 I/O，不持有共享可变状态，可以并发调用。

use rand::Rng;
use rand::prelude::IndexedRandom;

use crate::models::{FileRecord, SelectionConfig, SelectionResult};

/// 路径包含子串即算在目录内（空串匹配全部）
pub fn in_folder(record: &FileRecord, config: &SelectionConfig) -> bool {
    record.path.contains(config.folder_substring())
}

/// 创建时间严格早于 `now - cutoff` 才算足够旧
/// 先用整数求出笔记的年龄，只把差值转成浮点数和截止时长比较
pub fn older_than_cutoff(record: &FileRecord, config: &SelectionConfig, now_seconds: i64) -> bool {
    let age = now_seconds as i128 - record.created_at_seconds as i128;
    age > 0 && age as f64 > config.cutoff_seconds()
}

/// 同时满足两个过滤条件的笔记，保持输入顺序
pub fn eligible_notes<'a>(
    files: &'a [FileRecord],
    config: &SelectionConfig,
    now_seconds: i64,
) -> Vec<&'a FileRecord> {
    files
        .iter()
        .filter(|record| in_folder(record, config))
        .filter(|record| older_than_cutoff(record, config, now_seconds))
        .collect()
}

/// 使用线程本地随机数生成器选择一篇笔记
pub fn select_random_note(
    files: &[FileRecord],
    config: &SelectionConfig,
    now_seconds: i64,
) -> SelectionResult {
    select_random_note_with(files, config, now_seconds, &mut rand::rng())
}

/// 使用调用方提供的随机数生成器选择一篇笔记
///
/// 随机下标只在过滤后的集合内产生，集合为空时返回 `NoEligibleFile`。
pub fn select_random_note_with<R: Rng + ?Sized>(
    files: &[FileRecord],
    config: &SelectionConfig,
    now_seconds: i64,
    rng: &mut R,
) -> SelectionResult {
    let eligible = eligible_notes(files, config, now_seconds);
    log::debug!(
        "selector: {} candidates, {} eligible (folder={:?}, cutoff_days={})",
        files.len(),
        eligible.len(),
        config.folder_substring(),
        config.cutoff_days()
    );

    match eligible.choose(rng) {
        Some(record) => SelectionResult::Chosen((*record).clone()),
        None => SelectionResult::NoEligibleFile,
    }
}
