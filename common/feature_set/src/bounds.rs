use crate::{Error, RawSet, Set};
use feature_bit::FeatureBit;

/// Checks that `bit` may be advertised in the context identified by `set`.
///
/// Rejects unknown sets before consulting the ceiling, so the permissive fallback of
/// `RawSet::maximum` never lets a bit through for a set that does not exist.
pub fn check_feature_bit(set: RawSet, bit: FeatureBit) -> Result<Set, Error> {
    let set = Set::try_from(set)?;
    let maximum = set.maximum();

    if bit > maximum {
        return Err(Error::FeatureBitTooLarge { set, bit, maximum });
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bits_up_to_ceiling() {
        for set in Set::list_all() {
            assert_eq!(check_feature_bit(set.into(), FeatureBit::new(0)), Ok(set));
            assert_eq!(check_feature_bit(set.into(), set.maximum()), Ok(set));
        }
    }

    #[test]
    fn rejects_bits_above_invoice_ceiling() {
        let bit = FeatureBit::new(bolt11::MAX_FEATURE.as_u16() + 1);

        for set in [Set::Invoice, Set::InvoiceAmp] {
            assert_eq!(
                check_feature_bit(set.into(), bit),
                Err(Error::FeatureBitTooLarge {
                    set,
                    bit,
                    maximum: bolt11::MAX_FEATURE,
                })
            );
        }
        assert_eq!(
            check_feature_bit(Set::NodeAnnouncement.into(), bit),
            Ok(Set::NodeAnnouncement)
        );
    }

    #[test]
    fn rejects_unknown_set_even_for_small_bits() {
        let raw = RawSet::new(5);
        assert_eq!(
            check_feature_bit(raw, FeatureBit::new(0)),
            Err(Error::UnknownSet(raw))
        );
    }
}
