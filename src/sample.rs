//! Random emoji previews. These show the user what an emoji comparison looks
//! like. They are not derived from any shared secret and prove nothing.
use crate::code::EMOJI_CODE_LENGTH;
use crate::emoji::{all_emojis, EmojiRepresentation, TABLE_SIZE};
use crate::error::{Result, SasError};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Draw `count` distinct entries from the table
pub fn random_emojis<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<EmojiRepresentation>> {
    if count > TABLE_SIZE {
        return Err(SasError::InvalidSampleSize {
            requested: count,
            available: TABLE_SIZE,
        });
    }
    Ok(all_emojis().choose_multiple(rng, count).copied().collect())
}

/// Seven distinct entries from the thread RNG
pub fn static_preview() -> Vec<EmojiRepresentation> {
    all_emojis()
        .choose_multiple(&mut rand::thread_rng(), EMOJI_CODE_LENGTH)
        .copied()
        .collect()
}

/// Reproducible preview for a given seed
pub fn seeded_preview(seed: u64) -> Vec<EmojiRepresentation> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    all_emojis()
        .choose_multiple(&mut rng, EMOJI_CODE_LENGTH)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emoji::index_of_glyph;
    use std::collections::HashSet;

    fn assert_distinct_table_entries(sample: &[EmojiRepresentation]) {
        let glyphs: HashSet<_> = sample.iter().map(|e| e.glyph()).collect();
        assert_eq!(glyphs.len(), sample.len());
        for entry in sample {
            assert!(index_of_glyph(entry.glyph()).is_some());
        }
    }

    #[test]
    fn test_static_preview() {
        let preview = static_preview();
        assert_eq!(preview.len(), 7);
        assert_distinct_table_entries(&preview);
    }

    #[test]
    fn test_seeded_preview_is_reproducible() {
        assert_eq!(seeded_preview(42), seeded_preview(42));
        assert_distinct_table_entries(&seeded_preview(42));
    }

    #[test]
    fn test_random_emojis_whole_table() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let all = random_emojis(&mut rng, TABLE_SIZE).unwrap();
        assert_eq!(all.len(), 64);
        assert_distinct_table_entries(&all);
    }

    #[test]
    fn test_random_emojis_empty() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        assert!(random_emojis(&mut rng, 0).unwrap().is_empty());
    }

    #[test]
    fn test_random_emojis_too_many() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let err = random_emojis(&mut rng, 65).unwrap_err();
        assert!(matches!(
            err,
            SasError::InvalidSampleSize {
                requested: 65,
                available: 64
            }
        ));
    }
}
