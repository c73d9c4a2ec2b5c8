//! 目录遍历与源码文件过滤
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, ScanError};
use crate::profile::LanguageProfile;

/// 递归收集 `root` 下的所有文件路径
///
/// - 名称等于 `exclude` 的文件或目录在任意深度被跳过（目录整棵子树不访问）
/// - `exclude` 为空表示不排除任何条目
/// - 任意子目录列举失败都会中止整个遍历，不返回部分结果
/// - 顺序为文件系统返回的列举顺序，最终输出由下游排序保证稳定
pub fn collect_paths(root: &Path, exclude: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound { path: root.to_path_buf() });
    }

    let walker = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || exclude.is_empty() || e.file_name() != exclude);

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| ScanError::Traversal {
            path: source.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;
        if !entry.file_type().is_dir() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// 路径字符串中任意位置包含 `marker` 即视为源码文件（区分大小写，非后缀匹配）
pub fn is_source_file(path: &Path, marker: &str) -> bool {
    path.to_string_lossy().contains(marker)
}

/// 收集并过滤出目标语言的源码文件
pub fn source_file_paths(root: &Path, exclude: &str, profile: &LanguageProfile) -> Result<Vec<PathBuf>> {
    let files = collect_paths(root, exclude)?;
    Ok(files
        .into_iter()
        .filter(|p| is_source_file(p, &profile.file_marker))
        .collect())
}
