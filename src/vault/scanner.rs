// vault/scanner.rs - 笔记库扫描
// 每次调用都重新遍历一次，得到一份快照

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use ignore::WalkBuilder;
use walkdir::WalkDir;

use super::{created_seconds, vault_relative};
use crate::config::WalkerConfig;
use crate::error::PluginResult;
use crate::models::FileRecord;

/// 笔记库扫描器
#[derive(Debug, Clone)]
pub struct VaultScanner {
    root: PathBuf,
    walker: WalkerConfig,
    ignore_patterns: Vec<Pattern>,
    extensions: Vec<String>,
}

impl VaultScanner {
    pub fn new(root: impl Into<PathBuf>, walker: &WalkerConfig) -> Self {
        let ignore_patterns = walker
            .custom_ignore_patterns
            .iter()
            .filter_map(|p| match Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    log::warn!("忽略无效的 glob 模式 {:?}: {}", p, e);
                    None
                }
            })
            .collect();

        let extensions = walker
            .supported_extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .collect();

        Self {
            root: root.into(),
            walker: walker.clone(),
            ignore_patterns,
            extensions,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 笔记的绝对路径
    pub fn resolve(&self, record: &FileRecord) -> PathBuf {
        record.path.split('/').fold(self.root.clone(), |acc, part| acc.join(part))
    }

    /// 扫描笔记库，返回按路径排序的笔记列表
    pub fn scan(&self) -> PluginResult<Vec<FileRecord>> {
        if !self.root.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("vault directory {:?} does not exist", self.root),
            )
            .into());
        }

        let mut records = if self.walker.use_ripgrep_walker {
            self.scan_with_ignore()?
        } else {
            self.scan_with_walkdir()?
        };

        records.sort_by(|a, b| a.path.cmp(&b.path));
        records.dedup_by(|a, b| a.path == b.path);
        log::debug!("扫描完成: {:?} 共 {} 篇笔记", self.root, records.len());
        Ok(records)
    }

    fn scan_with_ignore(&self) -> PluginResult<Vec<FileRecord>> {
        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(self.walker.skip_hidden)
            .follow_links(self.walker.follow_symlinks)
            .require_git(false)
            .git_ignore(self.walker.respect_gitignore)
            .git_global(self.walker.respect_gitignore)
            .git_exclude(self.walker.respect_gitignore)
            .ignore(self.walker.respect_gitignore)
            .parents(self.walker.respect_gitignore);
        if self.walker.max_depth > 0 {
            builder.max_depth(Some(self.walker.max_depth));
        }

        let mut records = Vec::new();
        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                // 根目录本身读不了就没有意义继续
                Err(e) if e.depth() == Some(0) => return Err(e.into()),
                Err(e) => {
                    log::warn!("遍历出错: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file() || t.is_symlink()) {
                continue;
            }
            if let Some(record) = self.record_for(entry.path()) {
                records.push(record);
            }
        }
        Ok(records)
    }

    fn scan_with_walkdir(&self) -> PluginResult<Vec<FileRecord>> {
        let mut walker = WalkDir::new(&self.root).follow_links(self.walker.follow_symlinks);
        if self.walker.max_depth > 0 {
            walker = walker.max_depth(self.walker.max_depth);
        }

        let skip_hidden = self.walker.skip_hidden;
        let mut records = Vec::new();
        let entries = walker
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !(skip_hidden && is_hidden(e.file_name())));
        for result in entries {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    log::warn!("遍历出错: {}", e);
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }
            if let Some(record) = self.record_for(entry.path()) {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// 过滤扩展名和忽略模式，读取创建时间
    fn record_for(&self, path: &Path) -> Option<FileRecord> {
        if !self.has_supported_extension(path) {
            return None;
        }
        let rel = vault_relative(&self.root, path)?;
        if self.is_ignored(&rel) {
            return None;
        }

        match fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => {
                Some(FileRecord::new(rel, created_seconds(&metadata)))
            }
            Ok(_) => None,
            Err(e) => {
                log::warn!("读取元数据失败 {:?}: {}", path, e);
                None
            }
        }
    }

    fn has_supported_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|e| *e == ext))
    }

    fn is_ignored(&self, rel: &str) -> bool {
        let file_name = rel.rsplit('/').next().unwrap_or(rel);
        self.ignore_patterns
            .iter()
            .any(|p| p.matches(rel) || p.matches(file_name))
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
