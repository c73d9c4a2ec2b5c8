//! 错误类型
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 扫描过程中可能出现的错误
///
/// - `RootNotFound` / `Traversal`：路径收集阶段的致命错误，直接向上传播
/// - `Read`：单个文件的读取失败，仅影响该文件，由收集器记录后继续
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("input directory not found or not a directory: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("failed to list directory {}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read profile {}", path.display())]
    Profile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid profile {}", path.display())]
    ProfileParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid punctuation set {symbols:?}")]
    Symbols {
        symbols: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to write output {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to build scan thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, ScanError>;
