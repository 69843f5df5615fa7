//! Identifies a single optional protocol capability by its index in a feature vector.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    arbitrary::Arbitrary,
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct FeatureBit(u16);

impl FeatureBit {
    /// The largest index a `FeatureBit` can express.
    pub const MAX: FeatureBit = FeatureBit(u16::MAX);

    pub const fn new(bit: u16) -> Self {
        FeatureBit(bit)
    }

    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Even bits are required: a peer that does not understand one must fail the connection.
    pub const fn is_required(self) -> bool {
        self.0 % 2 == 0
    }

    /// Odd bits are optional and may be ignored by peers that do not understand them.
    pub const fn is_optional(self) -> bool {
        !self.is_required()
    }
}

impl From<u16> for FeatureBit {
    fn from(bit: u16) -> Self {
        Self(bit)
    }
}

impl From<FeatureBit> for u16 {
    fn from(bit: FeatureBit) -> u16 {
        bit.0
    }
}

impl fmt::Display for FeatureBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_is_u16_max() {
        assert_eq!(FeatureBit::MAX.as_u16(), 65535);
        assert_eq!(u16::from(FeatureBit::MAX), u16::MAX);
    }

    #[test]
    fn required_and_optional_pairs() {
        // Data loss protect: 0 required, 1 optional.
        assert!(FeatureBit::new(0).is_required());
        assert!(FeatureBit::new(1).is_optional());
        assert!(!FeatureBit::new(1).is_required());
        assert!(FeatureBit::MAX.is_optional());
    }

    #[test]
    fn ordering_follows_index() {
        assert!(FeatureBit::new(9) < FeatureBit::new(14));
        assert_eq!(FeatureBit::from(42), FeatureBit::new(42));
    }

    #[test]
    fn display_and_serde_are_bare_integers() {
        let bit = FeatureBit::new(5114);
        assert_eq!(bit.to_string(), "5114");
        assert_eq!(serde_json::to_string(&bit).unwrap(), "5114");
        assert_eq!(serde_json::from_str::<FeatureBit>("17").unwrap(), FeatureBit::new(17));
        assert!(serde_json::from_str::<FeatureBit>("65536").is_err());
    }
}
