//! Network locators.
//!
//! A [`Locator`]'s own equality behaves like classic URL equality: it
//! resolves both host names and compares addresses. That makes it slow,
//! nondeterministic and network dependent, which is why the registry binds a
//! strategy comparing [`external_form`](Locator::external_form) instead.

use std::any::Any;
use std::fmt;
use std::net::{IpAddr, ToSocketAddrs};
use std::sync::Arc;

use url::Url;

use crate::object::Object;
use crate::types::{well_known, TypeRef};

/// Resolves host names to addresses.
pub trait HostResolver: Send + Sync + fmt::Debug {
    /// Returns the addresses of `host`, empty when it cannot be resolved.
    fn resolve(&self, host: &str) -> Vec<IpAddr>;
}

/// Resolves through the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn resolve(&self, host: &str) -> Vec<IpAddr> {
        (host, 0)
            .to_socket_addrs()
            .map(|addrs| addrs.map(|a| a.ip()).collect())
            .unwrap_or_default()
    }
}

/// A parsed URL.
#[derive(Clone)]
pub struct Locator {
    url: Url,
    resolver: Arc<dyn HostResolver>,
}

impl Locator {
    /// Parses a URL, resolving hosts through the system resolver.
    pub fn parse(spec: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            url: Url::parse(spec)?,
            resolver: Arc::new(SystemResolver),
        })
    }

    /// Builds a URL from its parts. `path` is joined after the authority.
    pub fn from_parts(
        scheme: &str,
        host: &str,
        port: Option<u16>,
        path: &str,
    ) -> Result<Self, url::ParseError> {
        let mut spec = format!("{scheme}://{host}");
        if let Some(port) = port {
            spec.push_str(&format!(":{port}"));
        }
        if !path.starts_with('/') {
            spec.push('/');
        }
        spec.push_str(path);
        Self::parse(&spec)
    }

    /// Replaces the resolver used by native equality.
    pub fn with_resolver(mut self, resolver: Arc<dyn HostResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the normalized string form: lowercase scheme and host, default
    /// port elided, dot segments removed.
    pub fn external_form(&self) -> &str {
        self.url.as_str()
    }

    fn hosts_equal(&self, other: &Locator) -> bool {
        match (self.url.host_str(), other.url.host_str()) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                let left = self.resolver.resolve(a);
                let right = self.resolver.resolve(b);
                if !left.is_empty() && !right.is_empty() {
                    left.iter().any(|addr| right.contains(addr))
                } else {
                    a.eq_ignore_ascii_case(b)
                }
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Locator").field(&self.url.as_str()).finish()
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.external_form())
    }
}

impl Object for Locator {
    fn runtime_type(&self) -> &TypeRef {
        well_known::url()
    }

    fn native_equals(&self, other: &dyn Object) -> bool {
        let Some(other) = other.downcast_ref::<Locator>() else {
            return false;
        };
        self.url.scheme() == other.url.scheme()
            && self.url.port_or_known_default() == other.url.port_or_known_default()
            && self.url.path() == other.url.path()
            && self.url.query() == other.url.query()
            && self.url.fragment() == other.url.fragment()
            && self.hosts_equal(other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
