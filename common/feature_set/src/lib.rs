//! Feature-set contexts: which message a feature vector is advertised in, and the highest
//! feature bit each of those messages can carry.
mod bounds;
mod config;
mod errors;
mod set;

pub use bounds::check_feature_bit;
pub use config::{FeatureSetConfig, SetEntry, DEFAULT_CONFIG_FILE};
pub use errors::Error;
pub use feature_bit::FeatureBit;
pub use set::{RawSet, Set, UNKNOWN_SET_NAME};
