//! Background-image fetcher.
//!
//! On each load of the home page the configured object is downloaded from
//! S3 to a fixed file under `static/`, overwriting the previous copy. Every
//! failure is logged and swallowed; the page renders either way, possibly
//! referencing a stale or absent file.

use std::path::{Path, PathBuf};

use aws_sdk_s3::Client;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::Config;
use crate::error::DirectoryError;

/// File name the pages reference, relative to [`STATIC_DIR`].
pub const BACKGROUND_IMAGE_FILE: &str = "bg.svg";

/// Local directory served under `/static`.
pub const STATIC_DIR: &str = "static";

/// Bucket and key of the configured background image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

/// Split an object URL into bucket and key.
///
/// Accepts `s3://bucket/key` and virtual-hosted-style HTTP(S) URLs
/// (`https://bucket.s3.<region>.amazonaws.com/key`), where the bucket is
/// the first host label. Anything else is rejected.
pub fn parse_object_url(raw: &str) -> Result<ObjectLocation, DirectoryError> {
    let parsed = Url::parse(raw)?;
    let host = parsed
        .host_str()
        .ok_or_else(|| DirectoryError::ObjectUrl(format!("no host in {raw}")))?;

    let bucket = match parsed.scheme() {
        "s3" => host.to_string(),
        "http" | "https" => host.split('.').next().unwrap_or_default().to_string(),
        other => {
            return Err(DirectoryError::ObjectUrl(format!(
                "unsupported scheme {other:?} in {raw}"
            )));
        }
    };

    let key = parsed.path().trim_start_matches('/').to_string();
    if bucket.is_empty() || key.is_empty() {
        return Err(DirectoryError::ObjectUrl(format!(
            "missing bucket or key in {raw}"
        )));
    }

    Ok(ObjectLocation { bucket, key })
}

/// Downloads the decorative background image from object storage.
#[derive(Clone)]
pub struct AssetFetcher {
    source: Option<(Client, ObjectLocation)>,
    target: PathBuf,
}

impl AssetFetcher {
    /// Build the fetcher from process configuration. An empty or malformed
    /// URL disables it, turning [`AssetFetcher::refresh`] into a no-op.
    pub async fn from_config(config: &Config) -> Self {
        let target = Path::new(STATIC_DIR).join(BACKGROUND_IMAGE_FILE);

        if config.background_image_url.is_empty() {
            info!("no background image URL configured");
            return Self {
                source: None,
                target,
            };
        }

        match parse_object_url(&config.background_image_url) {
            Ok(location) => {
                let aws_config = aws_config::load_from_env().await;
                Self {
                    source: Some((Client::new(&aws_config), location)),
                    target,
                }
            }
            Err(e) => {
                warn!(
                    url = %config.background_image_url,
                    error = %e,
                    "background image URL not usable; fetch disabled"
                );
                Self {
                    source: None,
                    target,
                }
            }
        }
    }

    /// Download the configured object to the fixed local path, overwriting
    /// any previous copy. Never fails the caller.
    pub async fn refresh(&self) {
        let Some((client, location)) = &self.source else {
            debug!("background image fetch disabled; skipping refresh");
            return;
        };

        match self.download(client, location).await {
            Ok(()) => {
                info!(
                    bucket = %location.bucket,
                    key = %location.key,
                    "background image refreshed"
                );
            }
            Err(e) => {
                warn!(
                    bucket = %location.bucket,
                    key = %location.key,
                    error = %e,
                    "background image refresh failed"
                );
            }
        }
    }

    async fn download(
        &self,
        client: &Client,
        location: &ObjectLocation,
    ) -> Result<(), DirectoryError> {
        let object = client
            .get_object()
            .bucket(&location.bucket)
            .key(&location.key)
            .send()
            .await
            .map_err(|e| DirectoryError::Download(e.to_string()))?;
        let body = object
            .body
            .collect()
            .await
            .map_err(|e| DirectoryError::Download(e.to_string()))?;
        tokio::fs::write(&self.target, body.into_bytes()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_s3_scheme() {
        let loc = parse_object_url("s3://my-bucket/images/bg.svg").unwrap();
        assert_eq!(loc.bucket, "my-bucket");
        assert_eq!(loc.key, "images/bg.svg");
    }

    #[test]
    fn parses_virtual_hosted_https() {
        let loc = parse_object_url("https://my-bucket.s3.us-east-1.amazonaws.com/bg.svg").unwrap();
        assert_eq!(loc.bucket, "my-bucket");
        assert_eq!(loc.key, "bg.svg");
    }

    #[test]
    fn rejects_url_without_key() {
        assert!(parse_object_url("s3://my-bucket").is_err());
        assert!(parse_object_url("s3://my-bucket/").is_err());
    }

    #[test]
    fn rejects_unsupported_scheme() {
        assert!(parse_object_url("ftp://my-bucket/bg.svg").is_err());
    }

    #[test]
    fn rejects_non_url_text() {
        assert!(parse_object_url("not a url").is_err());
    }
}
