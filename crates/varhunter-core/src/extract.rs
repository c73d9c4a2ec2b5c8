//! 变量词法提取（按空格切词 + 轻量过滤）
//!
//! 不构建语法树，也不识别字符串/注释边界：一行文本按单个空格字节切分，
//! 以变量前缀开头且不含成员访问符的词才被认为是变量，再截掉尾部标点。
//! 全程按字节处理，非 UTF-8 源码中的变量原样保留。
use regex::bytes::Regex;

use crate::error::{Result, ScanError};
use crate::profile::LanguageProfile;

/// 切词分隔符（单个空格，制表符等不视为分隔）
const WORD_DELIMITER: u8 = b' ';

/// 针对某一语言配置预编译的提取器，可跨线程共享
#[derive(Debug, Clone)]
pub struct TokenExtractor {
    sigil: Vec<u8>,
    member_access: Vec<u8>,
    /// 标点字符类；集合为空时为 None（从不截断）
    symbols: Option<Regex>,
}

impl TokenExtractor {
    pub fn new(profile: &LanguageProfile) -> Result<Self> {
        let symbols = symbol_class(&profile.symbols).map_err(|source| ScanError::Symbols {
            symbols: profile.symbols.clone(),
            source,
        })?;
        let mut sigil = [0u8; 4];
        Ok(Self {
            sigil: profile.sigil.encode_utf8(&mut sigil).as_bytes().to_vec(),
            member_access: profile.member_access.as_bytes().to_vec(),
            symbols,
        })
    }

    /// 首字符为变量前缀，且整个词中不含成员访问符
    pub fn looks_like_variable(&self, word: &[u8]) -> bool {
        if !word.starts_with(&self.sigil) {
            return false;
        }
        self.member_access.is_empty()
            || !word.windows(self.member_access.len()).any(|w| w == self.member_access.as_slice())
    }

    /// 在第一个标点处截断，只保留第一段；不含标点时原样返回
    pub fn canonicalize<'a>(&self, word: &'a [u8]) -> &'a [u8] {
        match &self.symbols {
            Some(re) => re.split(word).next().unwrap_or(word),
            None => word,
        }
    }

    /// 提取一行中的全部变量，保持出现顺序（不去重）
    pub fn extract_line<'a>(&'a self, line: &'a [u8]) -> impl Iterator<Item = &'a [u8]> + 'a {
        line.split(|b| *b == WORD_DELIMITER)
            .filter(move |w| self.looks_like_variable(w))
            .map(move |w| self.canonicalize(w))
    }
}

/// 把标点集合编译为字符类
fn symbol_class(symbols: &str) -> std::result::Result<Option<Regex>, regex::Error> {
    if symbols.is_empty() {
        return Ok(None);
    }
    let mut class = String::from("[");
    for c in symbols.chars() {
        class.push_str(&regex::escape(&c.to_string()));
    }
    class.push(']');
    Regex::new(&class).map(Some)
}
