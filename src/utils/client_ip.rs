//! Caller address extraction from requests.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Resolves the caller's IP address for rate limiting and visit records.
///
/// When `behind_proxy` is set, trusts `X-Forwarded-For` (first hop) and then
/// `X-Real-IP` before falling back to the peer socket address. With the flag
/// off, headers are ignored entirely so clients cannot spoof their identity.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy {
        if let Some(forwarded) = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return forwarded.to_string();
        }

        if let Some(real_ip) = headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return real_ip.to_string();
        }
    }

    peer.ip().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer() -> SocketAddr {
        "10.1.2.3:45678".parse().unwrap()
    }

    #[test]
    fn test_uses_peer_address_by_default() {
        let headers = HeaderMap::new();
        assert_eq!(client_ip(&headers, peer(), false), "10.1.2.3");
    }

    #[test]
    fn test_ignores_headers_when_not_behind_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "1.2.3.4".parse().unwrap());
        assert_eq!(client_ip(&headers, peer(), false), "10.1.2.3");
    }

    #[test]
    fn test_prefers_forwarded_for_behind_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "1.2.3.4, 5.6.7.8".parse().unwrap());
        headers.insert("x-real-ip", "9.9.9.9".parse().unwrap());
        assert_eq!(client_ip(&headers, peer(), true), "1.2.3.4");
    }

    #[test]
    fn test_falls_back_to_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", "9.9.9.9".parse().unwrap());
        assert_eq!(client_ip(&headers, peer(), true), "9.9.9.9");
    }

    #[test]
    fn test_empty_forwarded_header_falls_through() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", " ".parse().unwrap());
        assert_eq!(client_ip(&headers, peer(), true), "10.1.2.3");
    }
}
