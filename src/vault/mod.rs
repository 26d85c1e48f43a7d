// vault/mod.rs - 笔记库
//! 枚举笔记库里的笔记文件，产出只读的 `FileRecord` 快照

mod scanner;

pub use scanner::*;

use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

/// 文件创建时间（Unix 时间戳秒）
/// 平台不支持 created() 时退回到修改时间，再退回到 0
pub fn created_seconds(metadata: &Metadata) -> i64 {
    metadata
        .created()
        .or_else(|_| metadata.modified())
        .map(unix_seconds)
        .unwrap_or(0)
}

pub fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    }
}

/// 当前时间（Unix 时间戳秒）
pub fn now_seconds() -> i64 {
    unix_seconds(SystemTime::now())
}

/// 相对路径统一成 `/` 分隔
pub fn vault_relative(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_vault_relative() {
        let root = PathBuf::from("/v");
        let path = root.join("Project").join("Errands").join("todo.md");
        assert_eq!(vault_relative(&root, &path).as_deref(), Some("Project/Errands/todo.md"));
        assert_eq!(vault_relative(&root, &root), None);
        assert_eq!(vault_relative(&root, Path::new("/elsewhere/a.md")), None);
    }

    #[test]
    fn test_unix_seconds() {
        let t = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        assert_eq!(unix_seconds(t), 1_700_000_000);
        let before = SystemTime::UNIX_EPOCH - Duration::from_secs(5);
        assert_eq!(unix_seconds(before), -5);
    }
}
