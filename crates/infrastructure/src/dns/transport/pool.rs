use dashmap::DashMap;

/// Maximum idle connections kept per upstream.
pub const MAX_IDLE_PER_HOST: usize = 2;

/// Idle stream connections keyed by upstream.
///
/// A connection is checked out for exactly one query and returned only after
/// its reply was fully read, so two in-flight queries never share a stream.
pub struct IdlePool<S> {
    idle: DashMap<String, Vec<S>>,
    max_idle: usize,
}

impl<S> IdlePool<S> {
    pub fn new() -> Self {
        Self::with_max_idle(MAX_IDLE_PER_HOST)
    }

    pub fn with_max_idle(max_idle: usize) -> Self {
        Self {
            idle: DashMap::new(),
            max_idle,
        }
    }

    pub fn take(&self, key: &str) -> Option<S> {
        self.idle.get_mut(key)?.pop()
    }

    /// Parks `stream` for reuse; dropped (and closed) when the slot is full.
    pub fn put(&self, key: &str, stream: S) {
        let mut entry = self.idle.entry(key.to_string()).or_default();
        if entry.len() < self.max_idle {
            entry.push(stream);
        }
    }

    pub fn idle_count(&self, key: &str) -> usize {
        self.idle.get(key).map(|entry| entry.len()).unwrap_or(0)
    }
}

impl<S> Default for IdlePool<S> {
    fn default() -> Self {
        Self::new()
    }
}
