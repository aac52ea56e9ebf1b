use crate::common::error::{AppError, ServiceResult};
use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub struct IpAddrInfo {
    pub ip_addr: IpAddr,
}

fn parse_header_ip(headers: &HeaderMap, name: &str) -> Option<IpAddr> {
    let value = headers.get(name)?.to_str().ok()?;
    let client = value.split(',').next()?;
    IpAddr::from_str(client.trim()).ok()
}

/// Proxy headers win over the socket peer. For `X-Forwarded-For` the first
/// (client-most) entry is used. Values that are not an IP address (such as
/// `unknown`) are skipped.
fn ip_from_headers(headers: &HeaderMap) -> Option<IpAddr> {
    parse_header_ip(headers, "CF-Connecting-IP")
        .or_else(|| parse_header_ip(headers, "X-Forwarded-For"))
}

async fn get_ip_addr(parts: &mut Parts) -> ServiceResult<IpAddrInfo> {
    if let Some(ip_addr) = ip_from_headers(&parts.headers) {
        return Ok(IpAddrInfo { ip_addr });
    }
    let info = <ConnectInfo<SocketAddr>>::from_request_parts(parts, &()).await?;
    Ok(IpAddrInfo { ip_addr: info.ip() })
}

impl<S: Sync + Send> FromRequestParts<S> for IpAddrInfo {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        get_ip_addr(parts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, Request};

    #[test]
    fn cloudflare_header_takes_precedence() {
        let mut headers = HeaderMap::new();
        headers.insert("CF-Connecting-IP", HeaderValue::from_static("203.0.113.7"));
        headers.insert("X-Forwarded-For", HeaderValue::from_static("198.51.100.1"));
        let ip = ip_from_headers(&headers);
        assert_eq!(ip, Some("203.0.113.7".parse().unwrap()));
    }

    #[test]
    fn forwarded_for_uses_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Forwarded-For",
            HeaderValue::from_static("198.51.100.1, 10.0.0.2"),
        );
        let ip = ip_from_headers(&headers);
        assert_eq!(ip, Some("198.51.100.1".parse().unwrap()));
    }

    #[test]
    fn no_proxy_headers() {
        assert_eq!(ip_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn unparseable_forwarded_for_is_skipped() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Forwarded-For", HeaderValue::from_static("unknown"));
        assert_eq!(ip_from_headers(&headers), None);
    }

    #[test]
    fn unparseable_cloudflare_header_falls_through() {
        let mut headers = HeaderMap::new();
        headers.insert("CF-Connecting-IP", HeaderValue::from_static("garbage"));
        headers.insert("X-Forwarded-For", HeaderValue::from_static("198.51.100.1"));
        assert_eq!(ip_from_headers(&headers), Some("198.51.100.1".parse().unwrap()));
    }

    #[tokio::test]
    async fn bad_proxy_header_falls_back_to_socket_peer() {
        let peer: SocketAddr = "192.0.2.10:4000".parse().unwrap();
        let request = Request::builder()
            .header("X-Forwarded-For", "unknown")
            .extension(ConnectInfo(peer))
            .body(())
            .unwrap();
        let (mut parts, ()) = request.into_parts();
        let info = IpAddrInfo::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(info.ip_addr, peer.ip());
    }
}
