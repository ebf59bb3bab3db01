use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;
use web_sys::{File, FormData};

use crate::config;
use crate::error::FetchError;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    image_urls: Vec<String>,
}

/// URLs from an upload response body. A well-formed `success: false`
/// answer yields no URLs rather than an error.
pub fn parse_upload_response(body: &str) -> Result<Vec<String>, FetchError> {
    let response: UploadResponse = serde_json::from_str(body)?;
    if response.success {
        Ok(response.image_urls)
    } else {
        Ok(Vec::new())
    }
}

async fn upload_files(files: &[File]) -> Result<Vec<String>, FetchError> {
    let form = FormData::new().map_err(|e| FetchError::Browser(format!("{:?}", e)))?;
    for file in files {
        form.append_with_blob_and_filename("files", file, &file.name())
            .map_err(|e| FetchError::Browser(format!("{:?}", e)))?;
    }

    let response = Request::post(config::get_upload_endpoint())
        .body(form)
        .send()
        .await?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    parse_upload_response(&response.text().await?)
}

/// Uploads the photos and returns their hosted URLs. Never fails: without
/// files nothing is sent, and any error leaves the request without images.
pub async fn upload_or_skip(files: &[File]) -> Vec<String> {
    if files.is_empty() {
        return Vec::new();
    }
    match upload_files(files).await {
        Ok(urls) => {
            info!("Uploaded {} photos, got {} URLs", files.len(), urls.len());
            urls
        }
        Err(e) => {
            warn!("Photo upload failed, continuing without images: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_response_returns_urls() {
        let urls = parse_upload_response(r#"{"success":true,"imageUrls":["https://a/1.jpg","https://a/2.jpg"]}"#).unwrap();
        assert_eq!(urls, vec!["https://a/1.jpg", "https://a/2.jpg"]);
    }

    #[test]
    fn unsuccessful_response_returns_nothing() {
        assert!(parse_upload_response(r#"{"success":false}"#).unwrap().is_empty());
        assert!(parse_upload_response(r#"{"success":false,"imageUrls":["x"]}"#).unwrap().is_empty());
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(matches!(parse_upload_response("<html>502</html>"), Err(FetchError::Malformed(_))));
        assert!(matches!(parse_upload_response(r#"{"success":"yes"}"#), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn no_files_means_no_request() {
        let urls = futures::executor::block_on(upload_or_skip(&[]));
        assert!(urls.is_empty());
    }
}
