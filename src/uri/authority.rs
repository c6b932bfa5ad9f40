//! Authority decomposition.
//!
//! ```not_rust
//! authority = [ userinfo "@" ] host [ ":" port ]
//! userinfo  = user [ ":" password ]
//! ```
use crate::matches;

/// Components of an authority.
///
/// All fields are slices of the authority, components not present are empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthorityParts<'a> {
    /// `user[:password]` before `@`.
    pub userinfo: &'a str,
    /// Userinfo before the `:`.
    pub username: &'a str,
    /// Userinfo after the `:`.
    pub password: &'a str,
    /// Host without port.
    pub hostname: &'a str,
    /// Port digits, may be empty even if the `:` is present.
    pub port: &'a str,
    /// `hostname` when `port` is empty, otherwise `hostname:port`.
    pub host: &'a str,
}

/// Decompose an authority into userinfo, host and port.
///
/// Userinfo is only recognized when the text before the first `@` contains at most one `:`,
/// otherwise the whole authority is taken as host and port. The host ends at the first `:`,
/// and the port is the run of digits right after it.
///
/// This function never fails, unmatched components are empty.
///
/// # Examples
///
/// ```
/// use parse_uri::uri::authority::decompose;
///
/// let parts = decompose("user:pass@example.com:8080");
/// assert_eq!(parts.username, "user");
/// assert_eq!(parts.password, "pass");
/// assert_eq!(parts.hostname, "example.com");
/// assert_eq!(parts.port, "8080");
/// assert_eq!(parts.host, "example.com:8080");
/// ```
pub fn decompose(authority: &str) -> AuthorityParts<'_> {
    let mut parts = AuthorityParts::default();

    if authority.is_empty() {
        return parts;
    }

    let mut rest = authority;

    // userinfo
    if let Some(at) = matches::find_at_sign(authority.as_bytes()) {
        let userinfo = &authority[..at];
        match matches::find_colon(userinfo.as_bytes()) {
            None => {
                parts.userinfo = userinfo;
                parts.username = userinfo;
                rest = &authority[at + 1..];
            }
            Some(colon) if matches::find_colon(&userinfo.as_bytes()[colon + 1..]).is_none() => {
                parts.userinfo = userinfo;
                parts.username = &userinfo[..colon];
                parts.password = &userinfo[colon + 1..];
                rest = &authority[at + 1..];
            }
            // more than one `:`, not a userinfo
            Some(_) => {}
        }
    }

    // host
    let end = matches::find_host_end(rest.as_bytes()).unwrap_or(rest.len());
    parts.hostname = &rest[..end];
    parts.host = parts.hostname;

    // port
    if let Some(port) = rest[end..].strip_prefix(':') {
        let len = matches::digits_len(port.as_bytes());
        parts.port = &port[..len];
        if len != 0 {
            parts.host = &rest[..end + 1 + len];
        }
    }

    parts
}

impl<'a> AuthorityParts<'a> {
    /// Clear the port if it is the default port of given scheme.
    ///
    /// The combined [`host`][AuthorityParts::host] falls back to the hostname.
    pub fn suppress_default_port(&mut self, scheme: &str) {
        if is_default_port(scheme, self.port) {
            self.port = "";
            self.host = self.hostname;
        }
    }

    /// Returns `scheme://host` for network schemes, `None` otherwise.
    pub fn origin(&self, scheme: &str) -> Option<String> {
        if is_network_scheme(scheme) {
            Some(format!("{scheme}://{}", self.host))
        } else {
            None
        }
    }
}

/// Returns the well known port of given scheme, e.g: `443` for `https`.
///
/// The scheme is compared exactly, `HTTP` has no default port.
#[inline]
pub fn default_port(scheme: &str) -> Option<&'static str> {
    match scheme {
        "http" => Some("80"),
        "https" => Some("443"),
        _ => None,
    }
}

/// Returns `true` if `port` is the well known port of `scheme`.
#[inline]
pub fn is_default_port(scheme: &str, port: &str) -> bool {
    default_port(scheme) == Some(port)
}

/// Returns `true` if the scheme has an origin.
#[inline]
pub fn is_network_scheme(scheme: &str) -> bool {
    matches!(scheme, "http" | "https")
}

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! assert_authority {
        (
            $input:expr;
            $uinfo:expr, $user:expr, $pass:expr;
            $hostname:expr, $port:expr, $host:expr;
        ) => {
            let parts = decompose($input);
            assert_eq!(parts.userinfo, $uinfo, "userinfo of {:?}", $input);
            assert_eq!(parts.username, $user, "username of {:?}", $input);
            assert_eq!(parts.password, $pass, "password of {:?}", $input);
            assert_eq!(parts.hostname, $hostname, "hostname of {:?}", $input);
            assert_eq!(parts.port, $port, "port of {:?}", $input);
            assert_eq!(parts.host, $host, "host of {:?}", $input);
        };
    }

    #[test]
    fn test_decompose() {
        assert_authority! {
            "";
            "", "", "";
            "", "", "";
        }

        assert_authority! {
            "example.com";
            "", "", "";
            "example.com", "", "example.com";
        }

        assert_authority! {
            "example.com:443";
            "", "", "";
            "example.com", "443", "example.com:443";
        }

        assert_authority! {
            "user:pass@example.com";
            "user:pass", "user", "pass";
            "example.com", "", "example.com";
        }

        assert_authority! {
            "user@example.com:8080";
            "user", "user", "";
            "example.com", "8080", "example.com:8080";
        }

        assert_authority! {
            "@example.com";
            "", "", "";
            "example.com", "", "example.com";
        }

        assert_authority! {
            "user:@example.com";
            "user:", "user", "";
            "example.com", "", "example.com";
        }
    }

    #[test]
    fn test_decompose_degenerate() {
        // colon without digits
        assert_authority! {
            "example.com:";
            "", "", "";
            "example.com", "", "example.com";
        }

        // digits stop at the first non digit
        assert_authority! {
            "example.com:80abc";
            "", "", "";
            "example.com", "80", "example.com:80";
        }

        // two colons before `@` is not a userinfo
        assert_authority! {
            "a:b:c@example.com";
            "", "", "";
            "a", "", "a";
        }

        // only the first `@` separates userinfo
        assert_authority! {
            "a@b@example.com";
            "a", "a", "";
            "b@example.com", "", "b@example.com";
        }

        // bracketed literals are not special
        assert_authority! {
            "[::1]:8080";
            "", "", "";
            "[", "", "[";
        }
    }

    #[test]
    fn test_roundtrip() {
        let authority = "user:pass@example.com:8080";
        let parts = decompose(authority);
        let joined = format!("{}:{}@{}:{}", parts.username, parts.password, parts.hostname, parts.port);
        assert_eq!(joined, authority);
    }

    #[test]
    fn test_default_port() {
        let mut parts = decompose("example.com:443");
        parts.suppress_default_port("https");
        assert_eq!(parts.port, "");
        assert_eq!(parts.host, "example.com");
        assert_eq!(parts.origin("https").as_deref(), Some("https://example.com"));

        let mut parts = decompose("example.com:80");
        parts.suppress_default_port("http");
        assert_eq!(parts.port, "");
        assert_eq!(parts.origin("http").as_deref(), Some("http://example.com"));

        // only the exact pair is suppressed
        let mut parts = decompose("example.com:443");
        parts.suppress_default_port("http");
        assert_eq!(parts.port, "443");
        assert_eq!(parts.origin("http").as_deref(), Some("http://example.com:443"));

        let mut parts = decompose("example.com:80");
        parts.suppress_default_port("HTTP");
        assert_eq!(parts.port, "80");
        assert_eq!(parts.origin("HTTP"), None);

        let mut parts = decompose("ftp.example.com:21");
        parts.suppress_default_port("ftp");
        assert_eq!(parts.port, "21");
        assert_eq!(parts.origin("ftp"), None);
    }
}
