use sas_code::emoji::{find_by_label, TABLE_SIZE};
use sas_code::{
    all_emojis, emoji_for_code, to_decimal_code, to_emoji_code, SasConfig, SasError, SasRenderer,
};

// Labels in table order; any change here is a protocol break
const EXPECTED_LABELS: [&str; TABLE_SIZE] = [
    "dog", "cat", "lion", "horse", "unicorn", "pig", "elephant", "rabbit", "panda", "rooster",
    "penguin", "turtle", "fish", "octopus", "butterfly", "flower", "tree", "cactus", "mushroom",
    "globe", "moon", "cloud", "fire", "banana", "apple", "strawberry", "corn", "pizza", "cake",
    "heart", "smiley", "robot", "hat", "glasses", "spanner", "santa", "thumbs_up", "umbrella",
    "hourglass", "clock", "gift", "light_bulb", "book", "pencil", "paperclip", "scissors", "lock",
    "key", "hammer", "telephone", "flag", "train", "bicycle", "aeroplane", "rocket", "trophy",
    "ball", "guitar", "trumpet", "bell", "anchor", "headphones", "folder", "pin",
];

#[test]
fn decimal_zero_bytes() {
    assert_eq!(to_decimal_code(&[0x00; 5], " ").unwrap(), "1000 1000 1000");
}

#[test]
fn decimal_max_bytes() {
    assert_eq!(to_decimal_code(&[0xff; 5], " ").unwrap(), "9191 9191 9191");
}

#[test]
fn decimal_dash_separator() {
    assert_eq!(to_decimal_code(&[0xff; 5], "-").unwrap(), "9191-9191-9191");
    assert_eq!(
        to_decimal_code(&[0x12, 0x34, 0x56, 0x78, 0x9a], "-").unwrap(),
        "1582-5441-8245"
    );
}

#[test]
fn emoji_zero_bytes() {
    let code = to_emoji_code(&[0x00; 6]).unwrap();
    assert_eq!(code.len(), 7);
    for entry in &code {
        assert_eq!(entry, emoji_for_code(0));
        assert_eq!(entry.label(), "dog");
    }
}

#[test]
fn emoji_first_group_pin() {
    let code = to_emoji_code(&[0xfc, 0x00, 0x00, 0x00, 0x00, 0x00]).unwrap();
    assert_eq!(code[0].label(), "pin");
    assert_eq!(code[0], *emoji_for_code(63));
    for entry in &code[1..] {
        assert_eq!(entry.label(), "dog");
    }
}

#[test]
fn table_order_is_stable() {
    let labels: Vec<&str> = all_emojis().iter().map(|e| e.label()).collect();
    assert_eq!(labels, EXPECTED_LABELS);
}

#[test]
fn lookup_matches_euclidean_reduction() {
    for code in -200i64..200 {
        let reduced = ((code % 64) + 64) % 64;
        assert_eq!(emoji_for_code(code), emoji_for_code(reduced));
        assert_eq!(emoji_for_code(code), &all_emojis()[reduced as usize]);
    }
}

#[test]
fn both_peers_agree() {
    // two independent renderers over the same bytes produce the same codes
    let secret = [0xde, 0xad, 0xbe, 0xef, 0x01, 0x23, 0x45];
    let alice = SasRenderer::new();
    let bob = SasRenderer::with_config(SasConfig::default()).unwrap();

    assert_eq!(alice.decimal(&secret).unwrap(), bob.decimal(&secret).unwrap());
    assert_eq!(alice.emoji(&secret).unwrap(), bob.emoji(&secret).unwrap());
}

#[test]
fn different_secrets_differ() {
    let a = to_emoji_code(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]).unwrap();
    let b = to_emoji_code(&[0x01, 0x02, 0x03, 0x04, 0x05 ^ 0x10, 0x06]).unwrap();
    assert_ne!(a, b);
    assert_ne!(
        to_decimal_code(&[0x01, 0x02, 0x03, 0x04, 0x05], " ").unwrap(),
        to_decimal_code(&[0x81, 0x02, 0x03, 0x04, 0x05], " ").unwrap()
    );
}

#[test]
fn short_input_is_rejected() {
    assert!(matches!(
        to_decimal_code(&[0x00; 4], " "),
        Err(SasError::InvalidInputLength { expected: 5, actual: 4, .. })
    ));
    assert!(matches!(
        to_emoji_code(&[0x00; 5]),
        Err(SasError::InvalidInputLength { expected: 6, actual: 5, .. })
    ));
}

#[test]
fn label_lookup_matches_index() {
    for (i, label) in EXPECTED_LABELS.iter().enumerate() {
        assert_eq!(find_by_label(label).unwrap(), emoji_for_code(i as i64));
    }
}
