//! SAS emoji table, mapping 6-bit values to emoji representations.
//! Index order is shared with every interoperating client. Reassigning an
//! index changes the codes peers compute and breaks verification between versions.
use crate::error::{Result, SasError};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

pub const TABLE_SIZE: usize = 64; // number of elements in the symbol dictionary

const VARIATION_SELECTOR: char = '\u{fe0f}';

/// Opaque handle for the icon a rendering layer draws next to the glyph.
/// Never interpreted by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IconRef(&'static str);

impl IconRef {
    pub const fn new(id: &'static str) -> Self {
        IconRef(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for IconRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// A single row of the emoji table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EmojiRepresentation {
    glyph: &'static str,
    label: &'static str,
    icon_ref: IconRef,
}

impl EmojiRepresentation {
    pub const fn new(glyph: &'static str, label: &'static str, icon_ref: IconRef) -> Self {
        Self {
            glyph,
            label,
            icon_ref,
        }
    }

    /// The emoji character(s)
    pub fn glyph(&self) -> &'static str {
        self.glyph
    }

    /// Locale-independent name, used as the localization key by presentation layers
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn icon_ref(&self) -> IconRef {
        self.icon_ref
    }
}

impl std::fmt::Display for EmojiRepresentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.glyph, self.label)
    }
}

const fn emoji(glyph: &'static str, label: &'static str, icon: &'static str) -> EmojiRepresentation {
    EmojiRepresentation::new(glyph, label, IconRef::new(icon))
}

// The emoji table, indexed by 6-bit group value
pub static EMOJI_TABLE: [EmojiRepresentation; TABLE_SIZE] = [
    emoji("\u{1f436}", "dog", "ic_verification_dog"),
    emoji("\u{1f431}", "cat", "ic_verification_cat"),
    emoji("\u{1f981}", "lion", "ic_verification_lion"),
    emoji("\u{1f40e}", "horse", "ic_verification_horse"),
    emoji("\u{1f984}", "unicorn", "ic_verification_unicorn"),
    emoji("\u{1f437}", "pig", "ic_verification_pig"),
    emoji("\u{1f418}", "elephant", "ic_verification_elephant"),
    emoji("\u{1f430}", "rabbit", "ic_verification_rabbit"),
    emoji("\u{1f43c}", "panda", "ic_verification_panda"),
    emoji("\u{1f413}", "rooster", "ic_verification_rooster"),
    emoji("\u{1f427}", "penguin", "ic_verification_penguin"),
    emoji("\u{1f422}", "turtle", "ic_verification_turtle"),
    emoji("\u{1f41f}", "fish", "ic_verification_fish"),
    emoji("\u{1f419}", "octopus", "ic_verification_octopus"),
    emoji("\u{1f98b}", "butterfly", "ic_verification_butterfly"),
    emoji("\u{1f337}", "flower", "ic_verification_flower"),
    emoji("\u{1f333}", "tree", "ic_verification_tree"),
    emoji("\u{1f335}", "cactus", "ic_verification_cactus"),
    emoji("\u{1f344}", "mushroom", "ic_verification_mushroom"),
    emoji("\u{1f30f}", "globe", "ic_verification_globe"),
    emoji("\u{1f319}", "moon", "ic_verification_moon"),
    emoji("\u{2601}\u{fe0f}", "cloud", "ic_verification_cloud"),
    emoji("\u{1f525}", "fire", "ic_verification_fire"),
    emoji("\u{1f34c}", "banana", "ic_verification_banana"),
    emoji("\u{1f34e}", "apple", "ic_verification_apple"),
    emoji("\u{1f353}", "strawberry", "ic_verification_strawberry"),
    emoji("\u{1f33d}", "corn", "ic_verification_corn"),
    emoji("\u{1f355}", "pizza", "ic_verification_pizza"),
    emoji("\u{1f382}", "cake", "ic_verification_cake"),
    emoji("\u{2764}\u{fe0f}", "heart", "ic_verification_heart"),
    emoji("\u{1f642}", "smiley", "ic_verification_smiley"),
    emoji("\u{1f916}", "robot", "ic_verification_robot"),
    emoji("\u{1f3a9}", "hat", "ic_verification_hat"),
    emoji("\u{1f453}", "glasses", "ic_verification_glasses"),
    emoji("\u{1f527}", "spanner", "ic_verification_spanner"),
    emoji("\u{1f385}", "santa", "ic_verification_santa"),
    emoji("\u{1f44d}", "thumbs_up", "ic_verification_thumbs_up"),
    emoji("\u{2602}\u{fe0f}", "umbrella", "ic_verification_umbrella"),
    emoji("\u{231b}", "hourglass", "ic_verification_hourglass"),
    emoji("\u{23f0}", "clock", "ic_verification_clock"),
    emoji("\u{1f381}", "gift", "ic_verification_gift"),
    emoji("\u{1f4a1}", "light_bulb", "ic_verification_light_bulb"),
    emoji("\u{1f4d5}", "book", "ic_verification_book"),
    emoji("\u{270f}\u{fe0f}", "pencil", "ic_verification_pencil"),
    emoji("\u{1f4ce}", "paperclip", "ic_verification_paperclip"),
    emoji("\u{2702}\u{fe0f}", "scissors", "ic_verification_scissors"),
    emoji("\u{1f512}", "lock", "ic_verification_lock"),
    emoji("\u{1f511}", "key", "ic_verification_key"),
    emoji("\u{1f528}", "hammer", "ic_verification_hammer"),
    emoji("\u{260e}\u{fe0f}", "telephone", "ic_verification_phone"),
    emoji("\u{1f3c1}", "flag", "ic_verification_flag"),
    emoji("\u{1f682}", "train", "ic_verification_train"),
    emoji("\u{1f6b2}", "bicycle", "ic_verification_bicycle"),
    emoji("\u{2708}\u{fe0f}", "aeroplane", "ic_verification_aeroplane"),
    emoji("\u{1f680}", "rocket", "ic_verification_rocket"),
    emoji("\u{1f3c6}", "trophy", "ic_verification_trophy"),
    emoji("\u{26bd}", "ball", "ic_verification_ball"),
    emoji("\u{1f3b8}", "guitar", "ic_verification_guitar"),
    emoji("\u{1f3ba}", "trumpet", "ic_verification_trumpet"),
    emoji("\u{1f514}", "bell", "ic_verification_bell"),
    emoji("\u{2693}", "anchor", "ic_verification_anchor"),
    emoji("\u{1f3a7}", "headphones", "ic_verification_headphones"),
    emoji("\u{1f4c1}", "folder", "ic_verification_folder"),
    emoji("\u{1f4cc}", "pin", "ic_verification_pin"),
];

// Reverse lookup keyed by glyph with any variation selector stripped
lazy_static::lazy_static! {
    static ref REVERSE_GLYPH: HashMap<String, u8> = {
        let mut map = HashMap::with_capacity(TABLE_SIZE);
        for (i, entry) in EMOJI_TABLE.iter().enumerate() {
            map.insert(strip_variation(entry.glyph), i as u8);
        }
        map
    };
}

static LABEL_INDEX: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    EMOJI_TABLE
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.label, i as u8))
        .collect()
});

fn strip_variation(glyph: &str) -> String {
    glyph.chars().filter(|&c| c != VARIATION_SELECTOR).collect()
}

/// Look up the emoji for a group value.
/// The code is reduced modulo 64 first, so every integer maps to a table row.
pub fn emoji_for_code(code: i64) -> &'static EmojiRepresentation {
    &EMOJI_TABLE[code.rem_euclid(TABLE_SIZE as i64) as usize]
}

/// The whole table in index order
pub fn all_emojis() -> &'static [EmojiRepresentation] {
    &EMOJI_TABLE
}

/// Table index of a glyph, with or without a trailing variation selector
pub fn index_of_glyph(glyph: &str) -> Option<u8> {
    REVERSE_GLYPH.get(&strip_variation(glyph.trim())).copied()
}

/// Find an entry by label. Matching ignores case and treats spaces as underscores.
pub fn find_by_label(label: &str) -> Result<&'static EmojiRepresentation> {
    let key = label.trim().to_lowercase().replace(' ', "_");
    LABEL_INDEX
        .get(key.as_str())
        .map(|&i| &EMOJI_TABLE[i as usize])
        .ok_or_else(|| SasError::UnknownEmoji(label.to_string()))
}
