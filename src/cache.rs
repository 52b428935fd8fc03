//! Compiled pattern caching.

use lru::LruCache;
use std::sync::{Arc, Mutex, PoisonError};

use crate::ast::CompiledFormat;

/// Global cache for compiled patterns.
///
/// Unbounded: patterns come from the program's own source, so the set stays
/// small for the life of the process.
static CACHE: Mutex<Option<LruCache<String, Arc<CompiledFormat>>>> = Mutex::new(None);

/// Get or compile a pattern, using the cache.
pub fn get_or_compile(pattern: &str) -> Arc<CompiledFormat> {
    let mut cache_guard = CACHE.lock().unwrap_or_else(PoisonError::into_inner);

    let cache = cache_guard.get_or_insert_with(LruCache::unbounded);

    if let Some(fmt) = cache.get(pattern) {
        return Arc::clone(fmt);
    }

    let fmt = Arc::new(CompiledFormat::compile(pattern));
    tracing::trace!(
        pattern,
        segments = fmt.segments().len(),
        "compiled date pattern"
    );
    cache.put(pattern.to_string(), Arc::clone(&fmt));
    fmt
}
