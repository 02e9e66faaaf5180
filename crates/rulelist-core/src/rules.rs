//! 规则文件加载（YAML）
use std::path::Path;
use tracing::debug;

use crate::error::{LoadError, Result};
use crate::types::RuleRecord;

/// 从单个 YAML 规则文件中按记录顺序取出全部 `rule` 值
/// - 空文档、仅含注释或单个 `---` 的文档、显式 `null` 视为“无规则”
/// - 顶层非序列、记录非映射、缺少 `rule` 或其值非字符串、含多个文档时整体失败，不逐条容错
pub fn load_rules(path: &Path) -> Result<Vec<String>> {
    let txt = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if is_blank_document(&txt) {
        debug!(path = %path.display(), "empty rule file");
        return Ok(Vec::new());
    }

    let parsed: Option<Vec<RuleRecord>> = serde_yaml::from_str(&txt).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let out: Vec<String> = parsed.unwrap_or_default().into_iter().map(|r| r.rule).collect();

    debug!(path = %path.display(), rules = out.len(), "loaded rules");
    Ok(out)
}

/// 文档是否只有空白与注释（文档标记交给 serde_yaml 判断，多文档由其报错）
fn is_blank_document(txt: &str) -> bool {
    txt.lines().all(|line| {
        let t = line.trim();
        t.is_empty() || t.starts_with('#')
    })
}
