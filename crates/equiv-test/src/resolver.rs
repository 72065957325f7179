//! Host resolver fixtures.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

use equiv_core::value::HostResolver;

/// Resolves from a fixed table and counts every lookup.
#[derive(Debug, Default)]
pub struct CountingResolver {
    table: HashMap<String, Vec<IpAddr>>,
    calls: AtomicUsize,
}

impl CountingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `host` to `addr`.
    pub fn with_host(mut self, host: &str, addr: IpAddr) -> Self {
        self.table.entry(host.to_string()).or_default().push(addr);
        self
    }

    /// Number of lookups so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HostResolver for CountingResolver {
    fn resolve(&self, host: &str) -> Vec<IpAddr> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.table.get(host).cloned().unwrap_or_default()
    }
}
