//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (quota exhaustion via rate-limit headers,
//! non-success → [`GatewayError::Api`]) so the client stays focused on
//! request construction and response mapping.

use crate::error::GatewayError;

const RATELIMIT_REMAINING: &str = "x-ratelimit-remaining";
const RATELIMIT_RESET: &str = "x-ratelimit-reset";

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429**, or **403** with `x-ratelimit-remaining: 0` →
///   [`GatewayError::RateLimited`] carrying `x-ratelimit-reset` if present.
/// - **Non-success status** → [`GatewayError::Api`] with status code and
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = resp.status().as_u16();
    if status == 429 || (status == 403 && quota_remaining(&resp) == Some(0)) {
        return Err(GatewayError::RateLimited {
            reset_at: quota_reset(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(GatewayError::Api {
            status,
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn header_u64(resp: &reqwest::Response, name: &str) -> Option<u64> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
}

fn quota_remaining(resp: &reqwest::Response) -> Option<u64> {
    header_u64(resp, RATELIMIT_REMAINING)
}

fn quota_reset(resp: &reqwest::Response) -> Option<u64> {
    header_u64(resp, RATELIMIT_RESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, headers: &[(&str, &str)]) -> reqwest::Response {
        let mut builder = ::http::Response::builder().status(status);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        reqwest::Response::from(builder.body("denied").unwrap())
    }

    #[tokio::test]
    async fn forbidden_with_zero_quota_is_rate_limited() {
        let resp = mock_response(
            403,
            &[(RATELIMIT_REMAINING, "0"), (RATELIMIT_RESET, "1760000000")],
        );
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::RateLimited {
                reset_at: Some(1_760_000_000)
            }
        ));
    }

    #[tokio::test]
    async fn forbidden_with_quota_left_is_api_error() {
        let resp = mock_response(403, &[(RATELIMIT_REMAINING, "12")]);
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, GatewayError::Api { status: 403, ref message } if message == "denied"));
    }

    #[tokio::test]
    async fn forbidden_without_headers_is_api_error() {
        let err = check_response(mock_response(403, &[])).await.unwrap_err();
        assert!(matches!(err, GatewayError::Api { status: 403, .. }));
    }

    #[tokio::test]
    async fn too_many_requests_is_rate_limited() {
        let err = check_response(mock_response(429, &[])).await.unwrap_err();
        assert!(matches!(err, GatewayError::RateLimited { reset_at: None }));
    }

    #[tokio::test]
    async fn not_found_is_api_error() {
        let err = check_response(mock_response(404, &[])).await.unwrap_err();
        assert!(matches!(err, GatewayError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(mock_response(200, &[])).await.is_ok());
    }
}
