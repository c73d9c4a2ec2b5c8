//! 线程安全的去重集合
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

/// 跨文件累积的变量集合（按原始字节去重）
///
/// 每次操作在同一把锁内完成“判断是否存在 + 插入”，多线程插入可以交错但不会竞争底层存储。
#[derive(Debug, Default)]
pub struct TokenSet {
    inner: Mutex<HashSet<Vec<u8>>>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入；已存在时为空操作。返回是否为新值
    pub fn insert_if_absent(&self, token: &[u8]) -> bool {
        let mut set = self.lock();
        // 先查再插：重复值（多数情况）不分配新的 Vec
        if set.contains(token) {
            return false;
        }
        set.insert(token.to_vec())
    }

    /// 批量插入，返回新增数量
    pub fn extend<I, T>(&self, tokens: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        tokens
            .into_iter()
            .filter(|t| self.insert_if_absent(t.as_ref()))
            .count()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 复制当前全部值后释放锁，再按字节序排序
    pub fn snapshot_sorted(&self) -> Vec<Vec<u8>> {
        let mut keys: Vec<Vec<u8>> = self.lock().iter().cloned().collect();
        keys.sort();
        keys
    }

    // 集合只存放完整的值，持锁线程 panic 不会留下半更新状态
    fn lock(&self) -> MutexGuard<'_, HashSet<Vec<u8>>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
