//! 结果输出：清空输出目录、按行追加写入
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, ScanError};
use crate::paths::collect_paths;

/// 输出文件名（位于输出目录下）
pub const OUTPUT_FILE_NAME: &str = "variables.txt";

/// 递归删除输出目录下的所有文件（保留目录结构），返回删除数量
pub fn clear_out_dir(out_dir: &Path) -> Result<usize> {
    let files = collect_paths(out_dir, "")?;
    for p in &files {
        fs::remove_file(p).map_err(|source| ScanError::Output { path: p.clone(), source })?;
    }
    Ok(files.len())
}

/// 以追加方式写入，每个变量一行（原始字节，不做编码转换）；父目录不存在时自动创建
pub fn write_tokens<T: AsRef<[u8]>>(out_file: &Path, tokens: &[T]) -> Result<()> {
    let io_err = |source| ScanError::Output { path: out_file.to_path_buf(), source };

    if let Some(parent) = out_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(out_file).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    for t in tokens {
        out.write_all(t.as_ref()).map_err(io_err)?;
        out.write_all(b"\n").map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;
    Ok(())
}
