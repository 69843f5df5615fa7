//! Limits imposed by the tagged-field encoding of BOLT-11 payment invoices.
//!
//! Invoice data is a sequence of 5-bit words. Every tagged field carries a 10-bit length prefix
//! counting those words, which caps how many feature bits the features field can hold.
use feature_bit::FeatureBit;

/// Bits carried by a single bech32 data word.
pub const BITS_PER_WORD: u16 = 5;

/// Width of the data-length prefix of a tagged field.
pub const DATA_LENGTH_BITS: u32 = 10;

/// The most words a single tagged field may contain.
pub const MAX_FIELD_WORDS: u16 = (1 << DATA_LENGTH_BITS) - 1;

/// The highest feature bit that can be expressed in an invoice's features field.
pub const MAX_FEATURE: FeatureBit = FeatureBit::new(MAX_FIELD_WORDS * BITS_PER_WORD - 1);

/// Returns the number of words needed by a features field whose highest set bit is `bit`.
pub const fn words_for_feature_bit(bit: FeatureBit) -> u16 {
    bit.as_u16() / BITS_PER_WORD + 1
}

/// Returns `true` if a features field with `bit` set still fits in a single tagged field.
pub const fn fits_in_invoice(bit: FeatureBit) -> bool {
    words_for_feature_bit(bit) <= MAX_FIELD_WORDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_feature_value() {
        assert_eq!(MAX_FIELD_WORDS, 1023);
        assert_eq!(MAX_FEATURE, FeatureBit::new(5114));
        assert!(MAX_FEATURE < FeatureBit::MAX);
    }

    #[test]
    fn max_feature_is_the_last_bit_that_fits() {
        assert!(fits_in_invoice(MAX_FEATURE));
        assert_eq!(words_for_feature_bit(MAX_FEATURE), MAX_FIELD_WORDS);

        let next = FeatureBit::new(MAX_FEATURE.as_u16() + 1);
        assert!(!fits_in_invoice(next));
        assert!(!fits_in_invoice(FeatureBit::MAX));
    }

    #[test]
    fn word_boundaries() {
        assert_eq!(words_for_feature_bit(FeatureBit::new(0)), 1);
        assert_eq!(words_for_feature_bit(FeatureBit::new(4)), 1);
        assert_eq!(words_for_feature_bit(FeatureBit::new(5)), 2);
        assert_eq!(words_for_feature_bit(FeatureBit::MAX), 13108);
    }
}
