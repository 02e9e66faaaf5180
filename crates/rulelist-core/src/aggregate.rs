//! 汇总主流程：发现 → 逐文件提取 → 输出列表
use std::io::Write;
use tracing::debug;

use crate::discover::discover_rule_files;
use crate::error::Result;
use crate::options::{AggregateOptions, AggregateStats};
use crate::render::render_rule_list;
use crate::rules::load_rules;

/// 汇总 `opts.root` 下全部规则文件，并将结果写入 `out`
/// - 处理每个文件前先输出其文件名（进度提示）
/// - 任一文件失败立即返回错误，此时不会输出列表
pub fn aggregate_and_write(out: &mut dyn Write, opts: &AggregateOptions) -> Result<AggregateStats> {
    let files = discover_rule_files(&opts.root, &opts.pattern)?;

    let mut stats = AggregateStats::default();
    let mut rules: Vec<String> = Vec::new();
    for path in &files {
        // 文件名必为 UTF-8（发现阶段已过滤）
        let file_name = path.file_name().map(|s| s.to_string_lossy()).unwrap_or_default();
        writeln!(out, "{file_name}")?;

        let mut loaded = load_rules(path)?;
        stats.files_read += 1;
        rules.append(&mut loaded);
    }

    render_rule_list(out, &rules)?;
    stats.rules_written = rules.len();
    debug!(files_read = stats.files_read, rules_written = stats.rules_written, "aggregate finished");
    Ok(stats)
}
