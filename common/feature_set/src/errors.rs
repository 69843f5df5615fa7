use crate::{RawSet, Set};
use feature_bit::FeatureBit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The ordinal does not identify any known feature set.
    UnknownSet(RawSet),
    /// The feature bit is above the ceiling of the set it was advertised in.
    FeatureBitTooLarge {
        set: Set,
        bit: FeatureBit,
        maximum: FeatureBit,
    },
    UnableToReadConfig(String),
    UnableToParseConfig(String),
    UnableToWriteConfig(String),
}
