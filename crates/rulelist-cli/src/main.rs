use anyhow::{Context, Result};
use clap::Parser;
use rulelist_core::{aggregate_and_write, AggregateOptions};
use std::io::{BufWriter, Write};
use tracing::info;

/// 命令行入口（基于 clap）：汇总当前目录下 `*.yaml` 中的 `rule` 字段，输出为列表字面量
#[derive(Parser, Debug)]
#[command(name = "rulelist", version, about = "Collect `rule` regexes from *.yaml files into one list literal")]
struct Cli {}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）；日志走 stderr，stdout 只留结果
    init_tracing();
    let _cli = Cli::parse();

    let opts = AggregateOptions::default();
    info!(root = %opts.root.display(), pattern = %opts.pattern, "collecting rules");

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = aggregate_and_write(&mut out, &opts).context("aggregate rule files")?;
    out.flush().context("flush stdout")?;

    info!(files_read = stats.files_read, rules_written = stats.rules_written, "done");
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
