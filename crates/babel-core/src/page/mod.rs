//! Seeded page synthesis
//!
//! A search hit is not looked up, it is manufactured: given a query and a
//! variant index, this module builds the full 3200-symbol page that the
//! matching address will decode to. The page is pseudo-random noise with
//! the query spliced in at a hash-chosen offset, and every draw comes from
//! a PRNG seeded by SHA-256 of `(query, variant)`, so the same pair always
//! yields the same page.

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::prng::{hash_seed, SplitMix64};
use crate::types::{CHARS_PER_LINE, CHARS_PER_PAGE};

/// Build the deterministic page for `(text, variant)`
///
/// The text is lowercased, then:
/// 1. the seed input is `lowercased ++ 0x00 ++ decimal(variant)`;
/// 2. the insertion offset is drawn uniformly from [0, 3200 − |text|];
/// 3. all 3200 positions are filled with uniform alphabet symbols;
/// 4. the lowercased text overwrites the positions at the offset.
///
/// Characters outside the alphabet are carried into the page verbatim and
/// rejected when the page is encoded.
///
/// # Errors
///
/// [`Error::EmptyText`] if the text is empty, [`Error::TextTooLong`] if it
/// exceeds one page.
pub fn synthesize(alphabet: &Alphabet, text: &str, variant: u64) -> Result<String> {
    let lowered = text.to_lowercase();
    if lowered.is_empty() {
        return Err(Error::EmptyText);
    }
    if lowered.len() > CHARS_PER_PAGE {
        return Err(Error::TextTooLong);
    }

    let mut seed_input = Vec::with_capacity(lowered.len() + 21);
    seed_input.extend_from_slice(lowered.as_bytes());
    seed_input.push(0);
    seed_input.extend_from_slice(variant.to_string().as_bytes());
    let mut rng = SplitMix64::new(hash_seed(&seed_input));

    let max_position = CHARS_PER_PAGE - lowered.len();
    let position = rng.next_below(max_position as u64 + 1) as usize;

    let mut symbols = vec![0u8; CHARS_PER_PAGE];
    for slot in symbols.iter_mut() {
        *slot = alphabet.symbol(rng.next_below(alphabet.len() as u64) as u8) as u8;
    }
    symbols[position..position + lowered.len()].copy_from_slice(lowered.as_bytes());

    // Noise is ASCII and the splice copies whole UTF-8 strings
    Ok(String::from_utf8(symbols).expect("page bytes are valid UTF-8"))
}

/// Lay a page out as lines of 80 symbols separated by newlines
pub fn layout(content: &str) -> String {
    let symbols: Vec<char> = content.chars().collect();
    symbols
        .chunks(CHARS_PER_LINE)
        .map(|line| line.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
