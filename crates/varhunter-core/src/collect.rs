//! 并发收集：有界并行扫描 + 去重合并
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{Result, ScanError};
use crate::extract::TokenExtractor;
use crate::options::{ScanOptions, ScanStats};
use crate::paths::source_file_paths;
use crate::scanner::scan_file;
use crate::token_set::TokenSet;

/// 单个文件的扫描结果（每个任务恰好产生一个）
#[derive(Debug)]
pub(crate) enum ScanOutcome {
    Tokens { path: PathBuf, tokens: Vec<Vec<u8>> },
    Failed { path: PathBuf, reason: ScanError },
}

/// 读取失败的文件（仅用于报告，不影响其余文件）
#[derive(Debug)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub reason: ScanError,
}

/// 一次收集的最终结果
#[derive(Debug, Default)]
pub struct Collection {
    /// 去重后按字节序排序的变量（原始字节，不保证是 UTF-8）
    pub tokens: Vec<Vec<u8>>,
    pub failures: Vec<ScanFailure>,
    pub stats: ScanStats,
}

/// 并行扫描 `paths` 并合并为去重、排序的结果
///
/// 调度：
/// - 固定 `limit` 个工作线程的 Rayon 线程池即并发槽位，同时在扫描的文件不超过 `limit`
/// - 每个任务向同一通道发送一个带标签的结果，收集器恰好接收 `paths.len()` 个
/// - 读取失败只记录，不中止其余任务；单个文件不设超时
pub fn collect_all(paths: &[PathBuf], extractor: &TokenExtractor, limit: usize) -> Result<Collection> {
    use crossbeam_channel as channel;
    use rayon::prelude::*;

    let mut stats = ScanStats { files_found: paths.len(), ..Default::default() };
    let set = TokenSet::new();
    let mut failures = Vec::new();

    if paths.is_empty() {
        return Ok(Collection { tokens: Vec::new(), failures, stats });
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(limit.max(1))
        .thread_name(|i| format!("varhunter-scan-{i}"))
        .build()?;

    let (tx, rx) = channel::bounded::<ScanOutcome>(limit.max(1) * 2);
    let jobs: Vec<PathBuf> = paths.to_vec();
    let extractor = Arc::new(extractor.clone());

    // 扫描在后台线程的线程池内执行，当前线程负责合并
    let scan_thread = std::thread::spawn(move || {
        pool.install(|| {
            jobs.into_par_iter().for_each_with(tx, |tx, path| {
                let outcome = match scan_file(&path, &extractor) {
                    Ok(tokens) => ScanOutcome::Tokens { path, tokens },
                    Err(reason) => ScanOutcome::Failed { path, reason },
                };
                let _ = tx.send(outcome);
            });
        });
    });

    for _ in 0..paths.len() {
        // 所有发送端关闭时提前结束（仅在工作线程异常退出时发生）
        let outcome = match rx.recv() {
            Ok(o) => o,
            Err(_) => break,
        };
        match outcome {
            ScanOutcome::Tokens { path, tokens } => {
                stats.files_scanned += 1;
                stats.tokens_seen += tokens.len();
                let added = set.extend(&tokens);
                debug!(path = %path.display(), found = tokens.len(), added, "file scanned");
            }
            ScanOutcome::Failed { path, reason } => {
                stats.files_failed += 1;
                warn!(path = %path.display(), error = %reason, "skipping unreadable file");
                failures.push(ScanFailure { path, reason });
            }
        }
    }

    if scan_thread.join().is_err() {
        warn!("scan thread panicked; results may be incomplete");
    }

    let tokens = set.snapshot_sorted();
    stats.unique_tokens = tokens.len();
    Ok(Collection { tokens, failures, stats })
}

/// 遍历 `root`、过滤源码文件并并发收集变量
///
/// 遍历失败直接返回错误（没有路径列表就无从扫描）；单文件失败记录在 `failures` 中。
pub fn collect_variables(root: &Path, opts: &ScanOptions) -> Result<Collection> {
    let extractor = TokenExtractor::new(&opts.profile)?;
    let paths = source_file_paths(root, &opts.exclude, &opts.profile)?;
    let limit = opts.concurrency_limit();
    info!(root = %root.display(), files = paths.len(), threads = limit, "collecting variables");
    collect_all(&paths, &extractor, limit)
}
