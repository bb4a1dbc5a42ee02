use rustc_hash::FxHashMap;

/// 双代交换缓存
///
/// 容量写满时整代淘汰：当前代冻结为上一代，从空的新一代继续写。
/// 这是性能近似而不是严格 LRU —— 命中上一代时条目会被提升回当前代。
/// 缓存对结果透明，命中与否不改变任何可观察行为。
#[derive(Debug)]
pub struct SwapCache {
    capacity: usize,
    current: FxHashMap<String, String>,
    previous: FxHashMap<String, String>,
}

impl SwapCache {
    /// 容量为 0 时禁用缓存（get/set 都是空操作）
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            current: FxHashMap::default(),
            previous: FxHashMap::default(),
        }
    }

    pub fn get(&mut self, key: &str) -> Option<String> {
        if let Some(value) = self.current.get(key) {
            return Some(value.clone());
        }

        // 上一代命中：提升回当前代
        if let Some(value) = self.previous.remove(key) {
            self.insert(key.to_string(), value.clone());
            return Some(value);
        }

        None
    }

    pub fn set(&mut self, key: String, value: String) {
        if self.capacity == 0 {
            return;
        }

        if let Some(slot) = self.current.get_mut(&key) {
            *slot = value;
        } else {
            self.insert(key, value);
        }
    }

    fn insert(&mut self, key: String, value: String) {
        self.current.insert(key, value);

        if self.current.len() >= self.capacity {
            self.previous = std::mem::take(&mut self.current);
        }
    }

    pub fn len(&self) -> usize {
        self.current.len() + self.previous.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.previous.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let mut cache = SwapCache::new(10);
        assert_eq!(cache.get("a"), None);

        cache.set("a".to_string(), "1".to_string());
        assert_eq!(cache.get("a"), Some("1".to_string()));
    }

    #[test]
    fn test_generation_swap_discards_old_entries() {
        let mut cache = SwapCache::new(2);
        cache.set("a".to_string(), "1".to_string());
        cache.set("b".to_string(), "2".to_string()); // 写满，交换
        assert_eq!(cache.len(), 2);

        // a、b 进入上一代，仍可命中；命中提升 a 回当前代
        assert_eq!(cache.get("a"), Some("1".to_string()));
        assert_eq!(cache.len(), 2);

        // 继续写满新一代，未被提升的 b 被整代丢弃
        cache.set("c".to_string(), "3".to_string());
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_previous_generation_hit_promotes() {
        let mut cache = SwapCache::new(2);
        cache.set("a".to_string(), "1".to_string());
        cache.set("b".to_string(), "2".to_string()); // 交换

        // 命中提升 a 到当前代
        assert_eq!(cache.get("a"), Some("1".to_string()));

        // 再一次交换后 a 依然存活（在上一代里）
        cache.set("c".to_string(), "3".to_string());
        assert_eq!(cache.get("a"), Some("1".to_string()));
    }

    #[test]
    fn test_zero_capacity_disables_cache() {
        let mut cache = SwapCache::new(0);
        cache.set("a".to_string(), "1".to_string());
        assert_eq!(cache.get("a"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_overwrite_existing_key() {
        let mut cache = SwapCache::new(10);
        cache.set("a".to_string(), "1".to_string());
        cache.set("a".to_string(), "2".to_string());
        assert_eq!(cache.get("a"), Some("2".to_string()));
    }
}
