//! 扫描选项与统计信息（模块）
use crate::profile::LanguageProfile;

/// 扫描选项
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// 排除的文件名或目录名（任意深度按 basename 精确匹配）；空串表示不排除
    pub exclude: String,
    /// 并发上限：None 表示自动（等于 CPU 核数）；Some(0) 按 1 处理
    pub threads: Option<usize>,
    /// 目标语言的词法特征，默认 PHP
    pub profile: LanguageProfile,
}

impl ScanOptions {
    /// 实际使用的并发上限（至少为 1）
    pub fn concurrency_limit(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    /// 通过语言过滤的文件数
    pub files_found: usize,
    pub files_scanned: usize,
    pub files_failed: usize,
    /// 去重前的变量出现次数
    pub tokens_seen: usize,
    pub unique_tokens: usize,
}
