//! 变量收集核心库
//!
//! 设计要点：
//! - 递归遍历输入目录，按 basename 排除文件或目录，路径包含 `.php` 即视为源码文件。
//! - 按空格切词，仅保留以 `$` 开头且不含 `->` 的词，并截掉尾部标点；全程按字节处理，不做 UTF-8 解码。
//! - 有界并行扫描（Rayon 线程池），结果经单一通道回传，合并入加锁去重集合。
//! - 单文件读取失败只记录不中止；最终结果按字节序排序，多次运行输出一致。

mod collect;
mod error;
mod extract;
mod options;
mod output;
mod paths;
mod profile;
mod scanner;
mod token_set;

pub use collect::{collect_all, collect_variables, Collection, ScanFailure};
pub use error::{Result, ScanError};
pub use extract::TokenExtractor;
pub use options::{ScanOptions, ScanStats};
pub use output::{clear_out_dir, write_tokens, OUTPUT_FILE_NAME};
pub use paths::{collect_paths, is_source_file, source_file_paths};
pub use profile::{load_profile, LanguageProfile};
pub use scanner::scan_file;
pub use token_set::TokenSet;
