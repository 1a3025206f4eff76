//! Shared JSON fixtures for tilehop tests and benches.
//!
//! `fixtures/manifest.json` at the workspace root maps fixture names to files
//! per kind. Spline fixtures hold bare control point lists; config fixtures
//! hold serialized config structs.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../../../fixtures/manifest.json"))
        .expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    splines: BTreeMap<String, String>,
    configs: BTreeMap<String, String>,
}

#[derive(Clone, Copy, Debug)]
enum Kind {
    Spline,
    Config,
}

impl Kind {
    fn entries(self) -> &'static BTreeMap<String, String> {
        match self {
            Kind::Spline => &MANIFEST.splines,
            Kind::Config => &MANIFEST.configs,
        }
    }

    fn names(self) -> Vec<String> {
        self.entries().keys().cloned().collect()
    }

    fn path(self, name: &str) -> Result<PathBuf> {
        let rel = self
            .entries()
            .get(name)
            .with_context(|| format!("no {self:?} fixture named '{name}'"))?;
        Ok(PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures")
            .join(rel))
    }

    fn text(self, name: &str) -> Result<String> {
        let path = self.path(name)?;
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
    }

    fn parse<T: DeserializeOwned>(self, name: &str) -> Result<T> {
        serde_json::from_str(&self.text(name)?)
            .with_context(|| format!("parsing {self:?} fixture '{name}'"))
    }
}

pub mod splines {
    use super::{Kind, Result};

    #[derive(serde::Deserialize)]
    struct Points {
        points: Vec<[f32; 3]>,
    }

    /// Fixture names, sorted.
    pub fn keys() -> Vec<String> {
        Kind::Spline.names()
    }

    /// Control points of the named spline fixture.
    pub fn points(name: &str) -> Result<Vec<[f32; 3]>> {
        Ok(Kind::Spline.parse::<Points>(name)?.points)
    }
}

pub mod configs {
    use super::{DeserializeOwned, Kind, Result};

    pub fn keys() -> Vec<String> {
        Kind::Config.names()
    }

    /// Raw JSON text, for exercising parsers directly.
    pub fn json(name: &str) -> Result<String> {
        Kind::Config.text(name)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        Kind::Config.parse(name)
    }
}
