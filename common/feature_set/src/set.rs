use crate::Error;
use feature_bit::FeatureBit;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumCount, EnumIter, EnumString, FromRepr, IntoEnumIterator, IntoStaticStr};

/// Name rendered for any ordinal that does not identify a known `Set`.
pub const UNKNOWN_SET_NAME: &str = "SetUnknown";

/// Exclusive upper bound of the known set ordinals.
const SET_SENTINEL: u8 = Set::COUNT as u8;

// New sets must be appended after `InvoiceAmp` so that ordinals stay contiguous.
const _: () = assert!(Set::InvoiceAmp as u8 + 1 == SET_SENTINEL);

/// Separates the single feature-bit namespace into the contexts a feature vector is used in.
///
/// Each context has its own ceiling on the feature bits it may carry, see `Set::maximum`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
#[serde(rename_all = "snake_case")]
pub enum Set {
    /// Features sent to a remote peer in an `init` message.
    #[strum(to_string = "SetInit", serialize = "init")]
    Init = 0,
    /// Features mirrored into the legacy `globalfeatures` field of an `init` message, for peers
    /// that predate flat features.
    #[strum(to_string = "SetLegacyGlobal", serialize = "legacy_global")]
    LegacyGlobal = 1,
    /// Features advertised in node announcements.
    #[strum(
        to_string = "SetNodeAnn",
        serialize = "node_announcement",
        serialize = "node_ann"
    )]
    #[serde(alias = "node_ann")]
    NodeAnnouncement = 2,
    /// Features advertised on invoices.
    #[strum(to_string = "SetInvoice", serialize = "invoice")]
    Invoice = 3,
    /// Features advertised on invoices that support atomic multi-path payments.
    #[strum(to_string = "SetInvoiceAmp", serialize = "invoice_amp")]
    InvoiceAmp = 4,
}

impl Set {
    /// All known sets, in ordinal order.
    pub fn list_all() -> Vec<Set> {
        Set::iter().collect()
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Human-readable name, for logging only.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The highest feature bit that may be advertised in this context.
    ///
    /// Invoices pack features into bech32 words behind a 10-bit length prefix, so they can only
    /// express bits up to `bolt11::MAX_FEATURE`. Every other context has room for more bits than
    /// a `FeatureBit` can index, so any bit is allowed.
    pub fn maximum(self) -> FeatureBit {
        match self {
            Set::Invoice | Set::InvoiceAmp => bolt11::MAX_FEATURE,
            Set::Init | Set::LegacyGlobal | Set::NodeAnnouncement => FeatureBit::MAX,
        }
    }

    /// Returns `true` for the sets carried by payment invoices.
    pub fn is_invoice(self) -> bool {
        matches!(self, Set::Invoice | Set::InvoiceAmp)
    }
}

impl From<Set> for u8 {
    fn from(set: Set) -> u8 {
        set.as_u8()
    }
}

impl TryFrom<u8> for Set {
    type Error = Error;

    fn try_from(ordinal: u8) -> Result<Self, Error> {
        RawSet::new(ordinal).try_into()
    }
}

impl TryFrom<RawSet> for Set {
    type Error = Error;

    fn try_from(raw: RawSet) -> Result<Self, Error> {
        if !raw.is_valid() {
            return Err(Error::UnknownSet(raw));
        }
        Set::from_repr(raw.as_u8()).ok_or(Error::UnknownSet(raw))
    }
}

/// A set ordinal as received from outside the crate, e.g. from a config file.
///
/// Every `u8` is representable, including ordinals that name no known `Set`. All queries on a
/// `RawSet` are total; use `is_valid` (or `Set::try_from`) before trusting one.
#[derive(
    arbitrary::Arbitrary,
    Debug,
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
pub struct RawSet(u8);

impl RawSet {
    pub const fn new(ordinal: u8) -> Self {
        RawSet(ordinal)
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Returns `true` if the ordinal identifies one of the known sets.
    pub const fn is_valid(self) -> bool {
        self.0 < SET_SENTINEL
    }

    /// Human-readable name, or `UNKNOWN_SET_NAME` for any unknown ordinal.
    pub fn name(self) -> &'static str {
        match Set::from_repr(self.0) {
            Some(set) => set.name(),
            None => UNKNOWN_SET_NAME,
        }
    }

    /// The highest feature bit that may be advertised in this context.
    ///
    /// Unknown ordinals get the permissive `FeatureBit::MAX` rather than an error. Validity is
    /// checked separately via `is_valid`.
    pub fn maximum(self) -> FeatureBit {
        match Set::from_repr(self.0) {
            Some(set) => set.maximum(),
            None => FeatureBit::MAX,
        }
    }
}

impl From<Set> for RawSet {
    fn from(set: Set) -> Self {
        RawSet(set.as_u8())
    }
}

impl From<u8> for RawSet {
    fn from(ordinal: u8) -> Self {
        RawSet(ordinal)
    }
}

impl fmt::Display for RawSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
