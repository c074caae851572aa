use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use wr_reflect::Reflect;
use wr_reflect::registry::TypeRegistry;
use wr_respond::capability::Capabilities;
use wr_respond::{Constructor, NotificationMap, ResponseMap, ResponseValue};

/// Request scoped data that goes into the response envelope.
#[derive(Clone, Debug, Default)]
pub struct EnvelopeOptions {
    /// The HTTP status code.
    pub status: u16,
    /// `http` or `https`.
    pub protocol: String,
    pub host: String,
    /// The parsed request parameters, echoed back in `meta`.
    pub input_params: ResponseMap,
    pub notifications: NotificationMap,
    /// Options tree as JSON. Falls back to the `joins` input parameter.
    pub joins: Option<String>,
}

impl EnvelopeOptions {
    pub fn new(status: u16, protocol: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            status,
            protocol: protocol.into(),
            host: host.into(),
            ..Self::default()
        }
    }

    /// The protocol name of a plain or TLS connection.
    #[inline]
    pub const fn protocol_for(secure: bool) -> &'static str {
        if secure { "https" } else { "http" }
    }

    pub fn with_input_params(mut self, input_params: ResponseMap) -> Self {
        self.input_params = input_params;
        self
    }

    pub fn with_notifications(mut self, notifications: NotificationMap) -> Self {
        self.notifications = notifications;
        self
    }

    pub fn with_joins(mut self, joins: impl Into<String>) -> Self {
        self.joins = Some(joins.into());
        self
    }

    /// The `joins` source: the explicit option, else the input parameter.
    pub fn joins_source(&self) -> Option<&str> {
        self.joins
            .as_deref()
            .or_else(|| self.input_params.get("joins").and_then(ResponseValue::as_str))
            .filter(|joins| !joins.is_empty())
    }

    /// Expands a link path to an absolute URL on this host.
    ///
    /// ```
    /// use wr_codec::EnvelopeOptions;
    ///
    /// let options = EnvelopeOptions::new(200, "https", "api.example.com/");
    /// assert_eq!(options.link_url("/shows/3"), "https://api.example.com/shows/3");
    /// ```
    pub fn link_url(&self, link: &str) -> String {
        format!("{}://{}", self.protocol, join_path(&self.host, link))
    }
}

/// Joins two slash separated paths, removing empty and `.` segments and
/// resolving `..` segments.
pub fn join_path(base: &str, path: &str) -> String {
    let rooted = base.starts_with('/') || (base.is_empty() && path.starts_with('/'));

    let mut segments: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(path.split('/')) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            segment => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    if rooted { format!("/{joined}") } else { joined }
}

/// Wraps a rendered value as `{"meta", "notifications", "response"}`.
///
/// `meta.links` comes from the related-links capability of the original
/// value, expanded with [`EnvelopeOptions::link_url`].
#[derive(Clone, Copy, Debug)]
pub struct Envelope<'a> {
    capabilities: Capabilities<'a>,
    options: &'a EnvelopeOptions,
}

impl<'a> Envelope<'a> {
    #[inline]
    pub const fn new(registry: &'a TypeRegistry, options: &'a EnvelopeOptions) -> Self {
        Self {
            capabilities: Capabilities::new(registry),
            options,
        }
    }

    fn links(&self, original: &dyn Reflect) -> ResponseMap {
        self.capabilities
            .related_links(original)
            .unwrap_or_default()
            .into_iter()
            .map(|(rel, link)| (rel, ResponseValue::String(self.options.link_url(&link))))
            .collect()
    }
}

impl Constructor for Envelope<'_> {
    fn wrap(&self, rendered: ResponseValue, original: &dyn Reflect) -> ResponseValue {
        let mut meta = ResponseMap::new();
        meta.insert("code".into(), ResponseValue::UInt(u64::from(self.options.status)));
        meta.insert(
            "input_params".into(),
            ResponseValue::Map(self.options.input_params.clone()),
        );
        meta.insert("links".into(), ResponseValue::Map(self.links(original)));

        let mut envelope = ResponseMap::new();
        envelope.insert("meta".into(), ResponseValue::Map(meta));
        envelope.insert(
            "notifications".into(),
            self.options.notifications.to_response_value(),
        );
        envelope.insert("response".into(), rendered);
        ResponseValue::Map(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::join_path;

    #[test]
    fn joins_like_paths() {
        assert_eq!(join_path("example.com", "/a/b"), "example.com/a/b");
        assert_eq!(join_path("example.com/", "a//b/"), "example.com/a/b");
        assert_eq!(join_path("example.com", "a/../b/./c"), "example.com/b/c");
        assert_eq!(join_path("", "/a"), "/a");
        assert_eq!(join_path("", ""), "");
        assert_eq!(join_path("a", "../../b"), "../b");
    }
}
