//! 正则规则汇总库
//!
//! 设计要点：
//! - 仅扫描根目录一层，文件名按 glob 模式（默认 `*.yaml`）过滤，并按文件名排序，保证输出可复现。
//! - 每个 YAML 文件顶层为规则记录序列（或空文档），逐条取出 `rule` 字段。
//! - 全局不去重，保持“文件顺序 → 记录顺序”。
//! - 输出为单引号列表字面量，规则内容先转义再包裹。

mod options;
mod error;
mod types;
mod discover;
mod rules;
mod render;
mod aggregate;

pub use options::{AggregateOptions, AggregateStats, DEFAULT_PATTERN};
pub use error::{LoadError, Result};
pub use types::RuleRecord;
pub use discover::discover_rule_files;
pub use rules::load_rules;
pub use render::{escape_rule, render_rule_list};
pub use aggregate::aggregate_and_write;
