//! Compiled rule cache - models reloaded by many sessions share compilations
//!
//! Keys are rule sources as declared in models. Only successful compilations
//! are kept, and the store stops growing at [`MAX_CACHED_RULES`]; sources
//! past the cap are still compiled, just not remembered.

use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::error::Result;
use crate::rule::compile::compile_rule;
use crate::rule::storable::StorableRule;

/// Upper bound on cached compilations
pub const MAX_CACHED_RULES: usize = 4096;

/// Source-keyed store of compiled rules with a fixed capacity
#[derive(Debug)]
struct RuleCache {
    rules: AHashMap<String, StorableRule>,
    capacity: usize,
}

impl RuleCache {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            rules: AHashMap::with_capacity(capacity.min(256)),
            capacity,
        }
    }

    fn get(&self, source: &str) -> Option<&StorableRule> {
        self.rules.get(source)
    }

    /// Remember a compilation; returns false once the cache is full
    fn remember(&mut self, source: &str, rule: &StorableRule) -> bool {
        if self.rules.contains_key(source) {
            return true;
        }
        if self.rules.len() >= self.capacity {
            return false;
        }
        self.rules.insert(source.to_string(), rule.clone());
        true
    }
}

static RULE_CACHE: Lazy<RwLock<RuleCache>> =
    Lazy::new(|| RwLock::new(RuleCache::with_capacity(MAX_CACHED_RULES)));

/// Compile a rule, reusing an earlier compilation of the same source
///
/// Failed compilations are not cached.
pub fn get_or_compile(source: &str) -> Result<StorableRule> {
    if let Some(rule) = RULE_CACHE.read().get(source) {
        return Ok(rule.clone());
    }

    log::debug!("compiling rule: {}", source);
    let rule = compile_rule(source)?;

    if !RULE_CACHE.write().remember(source, &rule) {
        log::debug!("rule cache full ({} entries), not caching", MAX_CACHED_RULES);
    }
    Ok(rule)
}

/// Drop every cached compilation
pub fn clear_cache() {
    RULE_CACHE.write().rules.clear();
}

/// Number of cached compilations
pub fn cache_size() -> usize {
    RULE_CACHE.read().rules.len()
}

/// Whether `source` has a cached compilation
pub fn is_cached(source: &str) -> bool {
    RULE_CACHE.read().rules.contains_key(source)
}
