//! Test helpers for blockkit crates.
//!
//! Every crate keeps its fixtures under `tests/fixtures`. [`fixtures!`] opens that directory for
//! the calling crate; from there a test can read JSON or YAML payloads as `serde_json::Value`,
//! check a rendered record against a JSON schema, or hand it to insta.
use anyhow::{Context, Result, anyhow, bail};
use jsonschema::{Validator, validator_for};
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Encodings a fixture file may use, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Json,
    Yaml,
}

impl FixtureFormat {
    pub fn of(name: &str) -> Result<Self> {
        match Path::new(name).extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(FixtureFormat::Json),
            Some("yaml" | "yml") => Ok(FixtureFormat::Yaml),
            _ => bail!("fixture {name} is neither .json nor .yaml"),
        }
    }

    fn parse(self, content: &str) -> Result<Value> {
        match self {
            FixtureFormat::Json => Ok(serde_json::from_str(content)?),
            FixtureFormat::Yaml => {
                let yaml: serde_yaml_bw::Value = serde_yaml_bw::from_str(content)?;
                Ok(serde_json::to_value(yaml)?)
            }
        }
    }
}

/// A crate's fixture directory. Names are plain relative file names such as
/// `schema/view.schema.json`; parent components are refused.
#[derive(Debug, Clone)]
pub struct Fixtures {
    dir: PathBuf,
}

impl Fixtures {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, name: &str) -> Result<PathBuf> {
        let relative = Path::new(name);
        if !relative
            .components()
            .all(|part| matches!(part, Component::Normal(_)))
        {
            bail!("fixture name must stay inside {}: {name}", self.dir.display());
        }
        Ok(self.dir.join(relative))
    }

    fn read(&self, name: &str) -> Result<String> {
        let path = self.path(name)?;
        fs::read_to_string(&path).with_context(|| format!("reading fixture {}", path.display()))
    }

    /// Reads a JSON or YAML fixture as a JSON value; YAML mappings keep their key order.
    pub fn value(&self, name: &str) -> Result<Value> {
        let format = FixtureFormat::of(name)?;
        format
            .parse(&self.read(name)?)
            .with_context(|| format!("parsing fixture {name}"))
    }

    /// Compiles a schema fixture once per process and reuses it afterwards.
    pub fn schema(&self, name: &str) -> Result<Arc<Validator>> {
        static COMPILED: Lazy<Mutex<HashMap<PathBuf, Arc<Validator>>>> =
            Lazy::new(|| Mutex::new(HashMap::new()));

        let key = self.path(name)?;
        let mut compiled = COMPILED
            .lock()
            .map_err(|_| anyhow!("schema cache poisoned"))?;
        if let Some(validator) = compiled.get(&key) {
            return Ok(Arc::clone(validator));
        }

        let document = self.value(name)?;
        let validator = validator_for(&document)
            .map_err(|err| anyhow!("schema {name} does not compile: {err}"))?;
        let validator = Arc::new(validator);
        compiled.insert(key, Arc::clone(&validator));
        Ok(validator)
    }

    /// Checks `record` against a schema fixture, listing every violation in the error.
    pub fn check_schema(&self, schema: &str, record: &Value) -> Result<()> {
        let violations: Vec<String> = self
            .schema(schema)?
            .iter_errors(record)
            .map(|err| err.to_string())
            .collect();
        if violations.is_empty() {
            Ok(())
        } else {
            bail!("{schema} rejected the record: {}", violations.join("; "))
        }
    }
}

/// Serializes anything the crate renders into the value insta snapshots.
pub fn snapshot_record<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).context("rendering snapshot record")
}

/// Top-level keys of a JSON object in emission order; empty for anything else.
pub fn keys_of(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

/// The calling crate's `tests/fixtures` directory.
#[macro_export]
macro_rules! fixtures {
    () => {
        $crate::Fixtures::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
    };
}

/// Loads a fixture of the calling crate, panicking with the reason when it cannot.
#[macro_export]
macro_rules! load_fixture {
    ($name:expr $(,)?) => {
        $crate::fixtures!()
            .value($name)
            .unwrap_or_else(|err| panic!("fixture {}: {:#}", $name, err))
    };
}

/// Asserts that a record satisfies one of the calling crate's schema fixtures.
#[macro_export]
macro_rules! assert_schema {
    ($schema:expr, $record:expr $(,)?) => {
        if let Err(err) = $crate::fixtures!().check_schema($schema, &$record) {
            panic!("{:#}", err);
        }
    };
}

#[macro_export]
macro_rules! assert_snapshot_json {
    ($name:expr, $value:expr $(,)?) => {{
        let record = $crate::snapshot_record(&$value)
            .unwrap_or_else(|err| panic!("snapshot {}: {:#}", $name, err));
        insta::assert_json_snapshot!($name, record);
    }};
}
