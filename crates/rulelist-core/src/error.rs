//! 错误类型
use std::path::PathBuf;

/// 规则汇总过程中可能出现的错误（均不做恢复，直接向上传播）
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// 规则文件无法打开或读取
    #[error("failed to read rule file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML 解析失败，或结构不符（非序列、记录非映射、缺少 `rule` 字段等）
    #[error("failed to parse rule file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// 文件名匹配模式非法
    #[error("invalid file pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// 输出写入失败
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;
