//! 汇总选项与统计信息（模块）
use std::path::PathBuf;

/// 默认的规则文件匹配模式
pub const DEFAULT_PATTERN: &str = "*.yaml";

/// 汇总选项
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// 规则文件所在目录（仅扫描一层）；默认为当前工作目录
    pub root: PathBuf,
    /// 文件名匹配模式（glob），默认 `*.yaml`
    pub pattern: String,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

/// 汇总统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AggregateStats {
    pub files_read: usize,
    pub rules_written: usize,
}
