// models.rs - 笔记选择的核心数据类型
//! 文件记录、选择配置与选择结果

/// 一条候选笔记（由笔记库扫描提供，只读）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileRecord {
    /// 相对笔记库根目录的路径，统一使用 `/` 分隔
    pub path: String,
    /// 创建时间（Unix 时间戳秒，UTC）
    pub created_at_seconds: i64,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, created_at_seconds: i64) -> Self {
        Self { path: path.into(), created_at_seconds }
    }

    /// 链接文本：不含目录和扩展名的文件名
    pub fn link_text(&self) -> &str {
        let name = self.path.rsplit('/').next().unwrap_or(&self.path);
        match name.rfind('.') {
            Some(0) | None => name,
            Some(idx) => &name[..idx],
        }
    }
}

/// 选择配置（来自插件设置，已规范化）
/// 字段只能通过 `new` / `from_raw` 设置，截止天数总是有限且非负
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionConfig {
    /// 路径子串，空串表示匹配全部
    folder_substring: String,
    /// 截止天数，非负，可以是小数
    cutoff_days: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self { folder_substring: String::new(), cutoff_days: 0.0 }
    }
}

impl SelectionConfig {
    pub fn new(folder_substring: impl Into<String>, cutoff_days: f64) -> Self {
        Self {
            folder_substring: folder_substring.into(),
            cutoff_days: normalize_days(cutoff_days),
        }
    }

    /// 从持久化的原始字符串构建
    /// 空串、无法解析、NaN、无穷大或负数一律按 0 处理
    pub fn from_raw(folder: &str, cutoff: &str) -> Self {
        let cutoff_days = cutoff.trim().parse::<f64>().unwrap_or(0.0);
        Self::new(folder, cutoff_days)
    }

    pub fn folder_substring(&self) -> &str {
        &self.folder_substring
    }

    pub fn cutoff_days(&self) -> f64 {
        self.cutoff_days
    }

    /// 截止时长（秒）
    pub fn cutoff_seconds(&self) -> f64 {
        self.cutoff_days * SECONDS_PER_DAY
    }
}

pub const SECONDS_PER_DAY: f64 = 86_400.0;

fn normalize_days(days: f64) -> f64 {
    if days.is_finite() && days > 0.0 { days } else { 0.0 }
}

/// 选择结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult {
    /// 选中的笔记
    Chosen(FileRecord),
    /// 没有同时满足两个过滤条件的笔记
    NoEligibleFile,
}

impl SelectionResult {
    pub fn chosen(&self) -> Option<&FileRecord> {
        match self {
            SelectionResult::Chosen(record) => Some(record),
            SelectionResult::NoEligibleFile => None,
        }
    }

    pub fn is_chosen(&self) -> bool {
        matches!(self, SelectionResult::Chosen(_))
    }
}
