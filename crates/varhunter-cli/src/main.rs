use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info, warn};
use varhunter_core::{
    clear_out_dir, collect_variables, load_profile, write_tokens, LanguageProfile, ScanOptions, OUTPUT_FILE_NAME,
};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "varhunter", version, about = "收集源码目录中出现的变量名")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 扫描目录并将去重排序后的变量写入 <out>/variables.txt
    Scan {
        /// 输入目录（递归扫描）
        #[arg(long = "in", default_value = "in")]
        input: PathBuf,

        /// 输出目录（运行前会清空其中的文件）
        #[arg(long = "out", default_value = "out")]
        output: PathBuf,

        /// 排除的文件名或目录名（任意深度精确匹配）
        #[arg(long, default_value = "")]
        exclude: String,

        /// 并发扫描的文件数（"auto"=CPU 核心数）
        #[arg(long, default_value = "auto")]
        threads: String,

        /// 语言配置文件（TOML），缺省为 PHP
        #[arg(long)]
        profile: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { input, output, exclude, threads, profile } => {
            info!(?input, ?output, %exclude, "starting scan");

            let profile = match profile {
                Some(path) => load_profile(&path).context("load language profile")?,
                None => LanguageProfile::default(),
            };

            // 清空失败不影响本次扫描（例如输出目录尚不存在）
            match clear_out_dir(&output) {
                Ok(removed) => info!(removed, "output directory cleared"),
                Err(e) => warn!(error = %e, "could not clear output directory"),
            }

            let opts = ScanOptions { exclude, threads: parse_threads(&threads), profile };
            let collection = match collect_variables(&input, &opts) {
                Ok(c) => c,
                Err(e) => {
                    error!(error = %e, "path collection failed");
                    return Err(e).context("collect variables");
                }
            };

            for f in &collection.failures {
                warn!(path = %f.path.display(), error = %f.reason, "file not scanned");
            }

            let out_file = output.join(OUTPUT_FILE_NAME);
            write_tokens(&out_file, &collection.tokens).context("write variables")?;

            let stats = &collection.stats;
            info!(
                files_found = stats.files_found,
                files_scanned = stats.files_scanned,
                files_failed = stats.files_failed,
                unique_tokens = stats.unique_tokens,
                "scan finished"
            );
            println!("Done");
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 解析线程参数；"auto" 或非法值返回 None（自动）
fn parse_threads(s: &str) -> Option<usize> {
    if s.eq_ignore_ascii_case("auto") { return None; }
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}
