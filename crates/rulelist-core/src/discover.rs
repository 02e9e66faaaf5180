//! 规则文件发现（单层目录 + glob 文件名匹配）
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{LoadError, Result};

/// 与 shell glob 一致：大小写敏感，`*` 不匹配开头的 `.`
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// 列出 `root` 下（不递归）文件名匹配 `pattern` 的普通文件
/// - 结果按文件名排序，确保输出顺序稳定
/// - 无法读取的目录项跳过并记录告警；根目录不可读时返回空列表
/// - 非 UTF-8 文件名无法参与匹配，直接跳过
pub fn discover_rule_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = Pattern::new(pattern).map_err(|source| LoadError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files: Vec<PathBuf> = vec![];
    for entry in WalkDir::new(root).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(root = %root.display(), error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() { continue; }
        let name = match entry.file_name().to_str() {
            Some(s) => s,
            None => {
                warn!(path = %entry.path().display(), "skipping file with non-UTF-8 name");
                continue;
            }
        };
        if matcher.matches_with(name, MATCH_OPTIONS) {
            files.push(entry.into_path());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    debug!(root = %root.display(), pattern, count = files.len(), "discovered rule files");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn matches_yaml_files_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.yaml"), "").unwrap();
        fs::write(dir.path().join("a.yaml"), "").unwrap();
        fs::write(dir.path().join("c.yml"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = discover_rule_files(dir.path(), "*.yaml").unwrap();
        assert_eq!(names(&files), vec!["a.yaml", "b.yaml"]);
    }

    #[test]
    fn does_not_recurse_or_match_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("inner.yaml"), "").unwrap();
        fs::create_dir(dir.path().join("dir.yaml")).unwrap();
        fs::write(dir.path().join("top.yaml"), "").unwrap();

        let files = discover_rule_files(dir.path(), "*.yaml").unwrap();
        assert_eq!(names(&files), vec!["top.yaml"]);
    }

    #[test]
    fn hidden_files_are_not_matched() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".hidden.yaml"), "").unwrap();

        let files = discover_rule_files(dir.path(), "*.yaml").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn empty_and_missing_directories_yield_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(discover_rule_files(dir.path(), "*.yaml").unwrap().is_empty());

        let missing = dir.path().join("does-not-exist");
        assert!(discover_rule_files(&missing, "*.yaml").unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let bad = OsStr::from_bytes(b"bad\xff.yaml");
        // 部分文件系统（如 APFS）拒绝非 UTF-8 文件名，此时无从测试
        if fs::write(dir.path().join(bad), "").is_err() { return; }
        fs::write(dir.path().join("good.yaml"), "").unwrap();

        let files = discover_rule_files(dir.path(), "*.yaml").unwrap();
        assert_eq!(names(&files), vec!["good.yaml"]);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = discover_rule_files(dir.path(), "[*.yaml").unwrap_err();
        assert!(matches!(err, LoadError::Pattern { .. }));
    }
}
