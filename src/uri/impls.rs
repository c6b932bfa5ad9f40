use std::borrow::Cow;

use super::{ParsedUri, path};
use crate::{ByteStr, QueryMap};

impl ParsedUri {
    /// Returns the original input, e.g: `https://example.com:443/over/there?name=ferret`.
    #[inline]
    pub fn href(&self) -> &str {
        self.value.as_str()
    }

    /// Returns the scheme without `:`, e.g: `https`.
    #[inline]
    pub fn scheme(&self) -> &str {
        self.scheme.as_str()
    }

    /// Returns the scheme with `:`, e.g: `https:`.
    ///
    /// Empty when there is no scheme.
    #[inline]
    pub fn protocol(&self) -> &str {
        self.protocol.as_str()
    }

    /// Returns the authority, e.g: `user:pass@example.com:8080`.
    #[inline]
    pub fn authority(&self) -> &str {
        self.authority.as_str()
    }

    /// Returns the userinfo, e.g: `user:pass`.
    #[inline]
    pub fn userinfo(&self) -> &str {
        self.userinfo.as_str()
    }

    /// Returns the username as written.
    #[inline]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Returns the password as written.
    #[inline]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Returns the percent decoded username.
    ///
    /// Invalid escapes are kept, invalid UTF-8 is replaced with `U+FFFD`.
    #[inline]
    pub fn decoded_username(&self) -> Cow<'_, str> {
        percent_encoding::percent_decode_str(self.username()).decode_utf8_lossy()
    }

    /// Returns the percent decoded password.
    #[inline]
    pub fn decoded_password(&self) -> Cow<'_, str> {
        percent_encoding::percent_decode_str(self.password()).decode_utf8_lossy()
    }

    /// Returns the hostname, e.g: `example.com`.
    #[inline]
    pub fn hostname(&self) -> &str {
        self.hostname.as_str()
    }

    /// Returns the port digits, e.g: `8080`.
    ///
    /// Empty when there is no port, or when it is the default port of the scheme.
    #[inline]
    pub fn port(&self) -> &str {
        self.port.as_str()
    }

    /// Returns the port as number.
    ///
    /// Returns [`None`] if [`port`][ParsedUri::port] is empty or out of range.
    #[inline]
    pub fn port_u16(&self) -> Option<u16> {
        self.port.parse().ok()
    }

    /// Returns the host with non default port, e.g: `example.com:8080`.
    #[inline]
    pub fn host(&self) -> &str {
        self.host.as_str()
    }

    /// Returns the path, e.g: `/over/there`.
    ///
    /// When authority is present, the path is always start with `/`.
    #[inline]
    pub fn pathname(&self) -> &str {
        self.pathname.as_str()
    }

    /// Returns the pathname up to and including the last `/`, e.g: `/over/`.
    #[inline]
    pub fn directory(&self) -> &str {
        path::decompose(self.pathname()).0
    }

    /// Returns the pathname after the last `/`, e.g: `there`.
    #[inline]
    pub fn file(&self) -> &str {
        path::decompose(self.pathname()).1
    }

    /// Returns the path, query and fragment as written, e.g: `/over/there?name=ferret#nose`.
    #[inline]
    pub fn relative(&self) -> &str {
        self.relative.as_str()
    }

    /// Returns the query without `?`, e.g: `name=ferret`.
    #[inline]
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Returns the query with `?`, e.g: `?name=ferret`.
    ///
    /// Empty when the query is empty.
    #[inline]
    pub fn search(&self) -> &str {
        self.search.as_str()
    }

    /// Returns the decoded query pairs.
    #[inline]
    pub fn search_params(&self) -> &QueryMap {
        &self.search_params
    }

    /// Returns the fragment without `#`, e.g: `nose`.
    #[inline]
    pub fn fragment(&self) -> &str {
        self.fragment.as_str()
    }

    /// Returns the fragment with `#`, e.g: `#nose`.
    ///
    /// Empty when the fragment is empty.
    #[inline]
    pub fn hash(&self) -> &str {
        self.hash.as_str()
    }

    /// Returns `scheme://host` for `http` and `https`, e.g: `https://example.com`.
    ///
    /// Empty for other schemes.
    #[inline]
    pub fn origin(&self) -> &str {
        self.origin.as_str()
    }

    /// Returns the str representation, which is the original input.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }

    /// Consume self into the original input.
    #[inline]
    pub fn into_inner(self) -> ByteStr {
        self.value
    }
}

// ===== Formatting =====

impl std::fmt::Display for ParsedUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for ParsedUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedUri")
            .field("href", &self.value)
            .field("protocol", &self.protocol)
            .field("authority", &self.authority)
            .field("userinfo", &self.userinfo)
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("pathname", &self.pathname)
            .field("query", &self.query)
            .field("fragment", &self.fragment)
            .field("origin", &self.origin)
            .finish()
    }
}

impl AsRef<str> for ParsedUri {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
