//! 单文件扫描
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, ScanError};
use crate::extract::TokenExtractor;

/// 逐行读取单个文件并提取变量（保持出现顺序，不去重）
/// - 打开失败或读到一半失败都返回 `ScanError::Read`，不返回部分结果
/// - 按 `\n` 分行并去掉行尾 `\r`；按原始字节提取，不做 UTF-8 解码
/// - 文件句柄随 `reader` 离开作用域释放（含错误路径）
pub fn scan_file(path: &Path, extractor: &TokenExtractor) -> Result<Vec<Vec<u8>>> {
    let read_err = |source| ScanError::Read { path: path.to_path_buf(), source };

    let file = File::open(path).map_err(read_err)?;
    let mut reader = BufReader::new(file);
    let mut buf: Vec<u8> = Vec::new();
    let mut tokens = Vec::new();

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).map_err(read_err)?;
        if n == 0 { break; }
        let mut line: &[u8] = &buf;
        if let Some(rest) = line.strip_suffix(b"\n") { line = rest; }
        if let Some(rest) = line.strip_suffix(b"\r") { line = rest; }
        tokens.extend(extractor.extract_line(line).map(<[u8]>::to_vec));
    }

    Ok(tokens)
}
