use std::future::Future;
use std::path::{Path, PathBuf};

use reqwest::header::CACHE_CONTROL;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::{Error, Result};

/// Loads named JSON resources (`products.json`, ...) relative to a data root.
///
/// Any failure to obtain or parse the resource is an error; deciding how to
/// degrade is left to the caller.
pub trait JsonSource {
    fn fetch_json<T: DeserializeOwned>(&self, name: &str) -> impl Future<Output = Result<T>>;
}

/// Resources read from a local directory
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl JsonSource for FsSource {
    async fn fetch_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.root.join(name);
        debug!(path = %path.display(), "reading resource");

        let bytes = tokio::fs::read(&path).await.map_err(|source| Error::Read {
            resource: path.display().to_string(),
            source,
        })?;

        serde_json::from_slice(&bytes).map_err(|source| Error::Parse {
            resource: path.display().to_string(),
            source,
        })
    }
}

/// Resources fetched over HTTP, bypassing caches
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: Url,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base: &str) -> Result<Self> {
        let mut base = Url::parse(base)?;
        // Url::join replaces the last segment unless the base ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            base,
            client: reqwest::Client::new(),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn resource_url(&self, name: &str) -> Result<Url> {
        Ok(self.base.join(name)?)
    }
}

impl JsonSource for HttpSource {
    async fn fetch_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let url = self.resource_url(name)?;
        let resource = url.to_string();
        debug!(url = %resource, "fetching resource");

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|source| Error::Http {
                resource: resource.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                resource,
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|source| Error::Http {
            resource: resource.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| Error::Parse { resource, source })
    }
}

/// Source picked from a configured data root: http(s) URLs go over the
/// network, anything else is a directory.
#[derive(Debug, Clone)]
pub enum DataSource {
    Fs(FsSource),
    Http(HttpSource),
}

impl DataSource {
    pub fn from_root(root: &str) -> Result<Self> {
        if root.starts_with("http://") || root.starts_with("https://") {
            Ok(DataSource::Http(HttpSource::new(root)?))
        } else {
            Ok(DataSource::Fs(FsSource::new(crate::config::expand_tilde(root))))
        }
    }
}

impl JsonSource for DataSource {
    async fn fetch_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        match self {
            DataSource::Fs(source) => source.fetch_json(name).await,
            DataSource::Http(source) => source.fetch_json(name).await,
        }
    }
}
