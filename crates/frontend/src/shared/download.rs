//! Downloading Gateway-produced CSV reports as opaque blobs.

use gloo_net::http::Method;

use super::error::ApiError;
use super::export::{create_blob, download_blob, timestamp_ms};
use super::http;

/// Extract the file name from a `Content-Disposition` header value.
pub fn filename_from_disposition(header: Option<&str>) -> Option<String> {
    let header = header?;
    let (_, rest) = header.split_once("filename=\"")?;
    let (name, _) = rest.split_once('"')?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Fetch a report endpoint and hand the body to the browser as a file.
/// The name comes from the response header, or falls back to a
/// timestamped default.
pub async fn download_report(url: &str, fallback_stem: &str) -> Result<(), ApiError> {
    let response = http::send(Method::GET, url).await?;
    if !response.ok() {
        return Err(http::error_from_response(response).await);
    }

    let disposition = response.headers().get("Content-Disposition");
    let filename = filename_from_disposition(disposition.as_deref())
        .unwrap_or_else(|| format!("{}_{}.csv", fallback_stem, timestamp_ms()));

    let bytes = response
        .binary()
        .await
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
    let blob =
        create_blob(&bytes, "text/csv;charset=utf-8;").map_err(ApiError::RequestFailed)?;
    download_blob(&blob, &filename).map_err(ApiError::RequestFailed)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_filename() {
        let header = Some(r#"attachment; filename="sales_overview.csv""#);
        assert_eq!(
            filename_from_disposition(header).unwrap(),
            "sales_overview.csv"
        );
    }

    #[test]
    fn missing_or_malformed_header_yields_none() {
        assert!(filename_from_disposition(None).is_none());
        assert!(filename_from_disposition(Some("attachment")).is_none());
        assert!(filename_from_disposition(Some(r#"attachment; filename="""#)).is_none());
    }
}
