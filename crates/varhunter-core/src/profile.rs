//! 语言配置（TOML）
//!
//! 默认即 PHP：文件标记 `.php`、变量前缀 `$`、成员访问 `->`。
//! 配置文件中每个键都是可选的，缺省时回落到 PHP 默认值。
use serde::Deserialize;
use std::path::Path;

use crate::error::{Result, ScanError};

pub const DEFAULT_FILE_MARKER: &str = ".php";
pub const DEFAULT_SIGIL: char = '$';
pub const DEFAULT_MEMBER_ACCESS: &str = "->";
/// 截断变量名的标点集合（逐字符，不是区间）
pub const DEFAULT_SYMBOLS: &str = "[].,;!\"')(:%+-";

/// 目标语言的词法特征
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LanguageProfile {
    /// 路径中包含该子串即视为源码文件（不锚定扩展名）
    pub file_marker: String,
    pub sigil: char,
    pub member_access: String,
    pub symbols: String,
}

impl Default for LanguageProfile {
    fn default() -> Self {
        Self {
            file_marker: DEFAULT_FILE_MARKER.to_string(),
            sigil: DEFAULT_SIGIL,
            member_access: DEFAULT_MEMBER_ACCESS.to_string(),
            symbols: DEFAULT_SYMBOLS.to_string(),
        }
    }
}

/// 从 TOML 文件加载语言配置
pub fn load_profile(path: &Path) -> Result<LanguageProfile> {
    let txt = std::fs::read_to_string(path).map_err(|source| ScanError::Profile {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&txt).map_err(|source| ScanError::ProfileParse {
        path: path.to_path_buf(),
        source,
    })
}
