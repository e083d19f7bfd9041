use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{ScenaError, ScenaResult};

/// Source of raw asset bytes (external collaborator).
///
/// Implementations fetch a URL with an expected MIME type and either yield
/// the blob or fail; the toolkit performs no retries and no blocking waits
/// of its own beyond this call.
pub trait AssetSource {
    fn fetch(&self, url: &str, mime: &str) -> anyhow::Result<Vec<u8>>;
}

/// A named, fetchable resource and its loaded bytes, if any.
#[derive(Clone, Debug)]
pub struct Asset {
    pub name: String,
    pub url: String,
    pub mime: String,
    bytes: Option<Arc<Vec<u8>>>,
}

impl Asset {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        mime: impl Into<String>,
    ) -> ScenaResult<Self> {
        let name = name.into();
        let url = url.into();
        if name.trim().is_empty() {
            return Err(ScenaError::construction("asset name must be non-empty"));
        }
        if url.trim().is_empty() {
            return Err(ScenaError::construction("asset url must be non-empty"));
        }
        Ok(Self {
            name,
            url,
            mime: mime.into(),
            bytes: None,
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.bytes.is_some()
    }

    pub fn bytes(&self) -> Option<&Arc<Vec<u8>>> {
        self.bytes.as_ref()
    }
}

/// Registry of assets keyed by name, with bulk load/unload.
#[derive(Clone, Debug, Default)]
pub struct AssetStore {
    assets: BTreeMap<String, Asset>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset under its name, replacing any previous entry.
    pub fn insert(&mut self, asset: Asset) {
        self.assets.insert(asset.name.clone(), asset);
    }

    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.assets.get(name)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Fetch one asset's bytes through `source` and cache them.
    ///
    /// Unknown names are lookup errors; fetch failures surface as wrapped
    /// collaborator errors and are not retried.
    pub fn load(&mut self, name: &str, source: &dyn AssetSource) -> ScenaResult<Arc<Vec<u8>>> {
        let asset = self
            .assets
            .get_mut(name)
            .ok_or_else(|| ScenaError::lookup(format!("unknown asset '{name}'")))?;
        let bytes = Arc::new(
            source
                .fetch(&asset.url, &asset.mime)
                .with_context(|| format!("fetch asset '{name}' from '{}'", asset.url))?,
        );
        tracing::debug!(name, len = bytes.len(), "asset loaded");
        asset.bytes = Some(Arc::clone(&bytes));
        Ok(bytes)
    }

    /// Drop one asset's cached bytes. The registration stays.
    pub fn unload(&mut self, name: &str) -> ScenaResult<()> {
        let asset = self
            .assets
            .get_mut(name)
            .ok_or_else(|| ScenaError::lookup(format!("unknown asset '{name}'")))?;
        asset.bytes = None;
        Ok(())
    }

    /// Load every registered asset, stopping at the first failure.
    #[tracing::instrument(level = "debug", skip(self, source))]
    pub fn load_all(&mut self, source: &dyn AssetSource) -> ScenaResult<()> {
        let names: Vec<String> = self.assets.keys().cloned().collect();
        for name in names {
            self.load(&name, source)?;
        }
        Ok(())
    }

    /// Drop every asset's cached bytes.
    pub fn unload_all(&mut self) {
        for asset in self.assets.values_mut() {
            asset.bytes = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MapSource(BTreeMap<String, Vec<u8>>);

    impl AssetSource for MapSource {
        fn fetch(&self, url: &str, _mime: &str) -> anyhow::Result<Vec<u8>> {
            self.0
                .get(url)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("not found: {url}"))
        }
    }

    fn source() -> MapSource {
        let mut map = BTreeMap::new();
        map.insert("a.png".to_string(), vec![1, 2, 3]);
        map.insert("b.png".to_string(), vec![4]);
        MapSource(map)
    }

    #[test]
    fn load_unload_round_trip() {
        let mut store = AssetStore::new();
        store.insert(Asset::new("a", "a.png", "image/png").unwrap());

        let bytes = store.load("a", &source()).unwrap();
        assert_eq!(*bytes, vec![1, 2, 3]);
        assert!(store.get("a").unwrap().is_loaded());

        store.unload("a").unwrap();
        assert!(!store.get("a").unwrap().is_loaded());
    }

    #[test]
    fn unknown_names_are_lookup_errors() {
        let mut store = AssetStore::new();
        assert!(matches!(
            store.load("nope", &source()),
            Err(ScenaError::Lookup(_))
        ));
        assert!(matches!(store.unload("nope"), Err(ScenaError::Lookup(_))));
    }

    #[test]
    fn fetch_failure_is_wrapped_not_retried() {
        let mut store = AssetStore::new();
        store.insert(Asset::new("ghost", "missing.png", "image/png").unwrap());
        assert!(matches!(
            store.load("ghost", &source()),
            Err(ScenaError::Other(_))
        ));
        assert!(!store.get("ghost").unwrap().is_loaded());
    }

    #[test]
    fn load_all_and_unload_all_cover_registry() {
        let mut store = AssetStore::new();
        store.insert(Asset::new("a", "a.png", "image/png").unwrap());
        store.insert(Asset::new("b", "b.png", "image/png").unwrap());
        store.load_all(&source()).unwrap();
        assert!(store.get("a").unwrap().is_loaded());
        assert!(store.get("b").unwrap().is_loaded());
        store.unload_all();
        assert!(!store.get("a").unwrap().is_loaded());
        assert!(!store.get("b").unwrap().is_loaded());
    }

    #[test]
    fn empty_names_fail_construction() {
        assert!(Asset::new("", "a.png", "image/png").is_err());
        assert!(Asset::new("a", " ", "image/png").is_err());
    }
}
