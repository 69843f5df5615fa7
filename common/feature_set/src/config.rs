use crate::{check_feature_bit, Error, RawSet, Set};
use feature_bit::FeatureBit;
use serde::{Deserialize, Serialize};
use slog::{debug, warn, Logger};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "feature_sets.yaml";

/// The feature bits configured for a single set.
///
/// The set is kept as a `RawSet` so that unknown ordinals survive parsing and are rejected by
/// `FeatureSetConfig::validate` rather than by the YAML decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetEntry {
    pub set: RawSet,
    #[serde(default)]
    pub bits: Vec<FeatureBit>,
}

/// Feature bits to advertise, grouped by set, as read from a YAML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSetConfig {
    #[serde(default)]
    pub sets: Vec<SetEntry>,
}

impl FeatureSetConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, Error> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::UnableToParseConfig(format!("Unable to parse yaml: {:?}", e)))
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| {
            Error::UnableToReadConfig(format!("Unable to open {}: {:?}", path.display(), e))
        })?;

        serde_yaml::from_reader(file).map_err(|e| {
            Error::UnableToParseConfig(format!("Unable to parse {}: {:?}", path.display(), e))
        })
    }

    pub fn write_to_file(&self, path: &Path) -> Result<(), Error> {
        let file = File::create(path).map_err(|e| {
            Error::UnableToWriteConfig(format!("Unable to create {}: {:?}", path.display(), e))
        })?;

        serde_yaml::to_writer(file, self).map_err(|e| {
            Error::UnableToWriteConfig(format!("Unable to write {}: {:?}", path.display(), e))
        })
    }

    /// Checks every entry against its set's ceiling and returns the bits grouped by set.
    ///
    /// Entries naming the same set are merged. The first unknown set or out-of-range bit aborts
    /// validation.
    pub fn validate(&self, log: &Logger) -> Result<BTreeMap<Set, BTreeSet<FeatureBit>>, Error> {
        let mut sets: BTreeMap<Set, BTreeSet<FeatureBit>> = BTreeMap::new();

        for entry in &self.sets {
            if !entry.set.is_valid() {
                warn!(
                    log,
                    "Unknown feature set in config";
                    "ordinal" => entry.set.as_u8(),
                    "name" => %entry.set,
                );
                return Err(Error::UnknownSet(entry.set));
            }

            for &bit in &entry.bits {
                let set = check_feature_bit(entry.set, bit).map_err(|e| {
                    warn!(
                        log,
                        "Feature bit exceeds set maximum";
                        "set" => %entry.set,
                        "bit" => %bit,
                        "maximum" => %entry.set.maximum(),
                    );
                    e
                })?;
                sets.entry(set).or_default().insert(bit);
            }

            let set = Set::try_from(entry.set)?;
            let bits = sets.entry(set).or_default();

            debug!(
                log,
                "Loaded feature set";
                "set" => %set,
                "bits" => bits.len(),
                "maximum" => %set.maximum(),
            );
        }

        Ok(sets)
    }
}
