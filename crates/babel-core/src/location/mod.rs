//! Library addresses and navigation
//!
//! A location names one page of one book: `(hexagon, wall, shelf, book,
//! page)`. The hexagon is an arbitrary-precision identifier rendered in
//! base-36, so the address space is unbounded upward; the four numeric
//! fields are small and fixed. Locations convert losslessly to and from a
//! single non-negative integer, the same integer a page encodes to in
//! base-29, which is what ties searching and browsing together.
//!
//! The integer layout is a mixed-radix numeral:
//!
//! ```text
//! index = (((hexagon·4 + wall)·5 + shelf)·32 + book)·410 + (page − 1)
//! ```

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use rand::Rng;

use crate::error::{Error, Result};
use crate::types::{
    BASE36_CHARSET, BOOKS_PER_SHELF, MAX_HEXAGON_LENGTH, PAGES_PER_BOOK, SHELVES_PER_WALL,
    WALLS_PER_HEXAGON,
};

/// A page address: hexagon, wall, shelf, book, page
///
/// Invariants: `wall ∈ [0,3]`, `shelf ∈ [0,4]`, `book ∈ [0,31]`,
/// `page ∈ [1,410]`; `hexagon` is a non-empty lowercase base-36 string.
/// Two locations are equal iff all five components are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    /// Arbitrary-precision hexagon identifier, lowercase base-36
    pub hexagon: String,
    /// Wall within the hexagon, [0, 3]
    pub wall: u8,
    /// Shelf on the wall, [0, 4]
    pub shelf: u8,
    /// Book on the shelf, [0, 31]
    pub book: u8,
    /// Page in the book, [1, 410]
    pub page: u16,
}

impl Location {
    /// Parse a period-separated address: `<hexagon>.<wall>.<shelf>.<book>.<page>`
    ///
    /// The hexagon keeps its original textual form after validating that it
    /// is a non-empty lowercase base-36 string.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidAddressFormat`] for a wrong part count,
    /// [`Error::InvalidHexagon`] for a malformed hexagon,
    /// [`Error::InvalidField`] / [`Error::OutOfRange`] for bad numerics.
    pub fn parse(address: &str) -> Result<Self> {
        let parts: Vec<&str> = address.split('.').collect();
        if parts.len() != 5 {
            return Err(Error::InvalidAddressFormat {
                expected: 5,
                got: parts.len(),
            });
        }

        parse_hexagon(parts[0])?;

        let wall = parse_field(parts[1], "wall", 0, WALLS_PER_HEXAGON as i64 - 1)?;
        let shelf = parse_field(parts[2], "shelf", 0, SHELVES_PER_WALL as i64 - 1)?;
        let book = parse_field(parts[3], "book", 0, BOOKS_PER_SHELF as i64 - 1)?;
        let page = parse_field(parts[4], "page", 1, PAGES_PER_BOOK as i64)?;

        Ok(Self {
            hexagon: parts[0].to_string(),
            wall: wall as u8,
            shelf: shelf as u8,
            book: book as u8,
            page: page as u16,
        })
    }

    /// The mixed-radix integer this address encodes
    ///
    /// # Errors
    ///
    /// [`Error::InvalidHexagon`] if the hexagon field no longer parses as
    /// lowercase base-36 (mutated after construction).
    pub fn to_index(&self) -> Result<BigUint> {
        let mut index = parse_hexagon(&self.hexagon)?;

        index *= WALLS_PER_HEXAGON as u32;
        index += self.wall as u32;

        index *= SHELVES_PER_WALL as u32;
        index += self.shelf as u32;

        index *= BOOKS_PER_SHELF as u32;
        index += self.book as u32;

        index *= PAGES_PER_BOOK as u32;
        index += self.page as u32 - 1;

        Ok(index)
    }

    /// The address encoding a mixed-radix integer
    ///
    /// The hexagon comes out in canonical lowercase base-36; integer zero
    /// yields `"0"`, never the empty string.
    pub fn from_index(index: &BigUint) -> Self {
        let mut remaining = index.clone();

        let page = take_digit(&mut remaining, PAGES_PER_BOOK as u32) as u16 + 1;
        let book = take_digit(&mut remaining, BOOKS_PER_SHELF as u32) as u8;
        let shelf = take_digit(&mut remaining, SHELVES_PER_WALL as u32) as u8;
        let wall = take_digit(&mut remaining, WALLS_PER_HEXAGON as u32) as u8;

        Self {
            // whatever remains of the quotient is the hexagon identifier
            hexagon: remaining.to_str_radix(36),
            wall,
            shelf,
            book,
            page,
        }
    }

    /// The next page in reading order
    ///
    /// Advances `page` first and carries into `book`, `shelf`, `wall`, and
    /// finally the hexagon, which never overflows. A hexagon that no longer
    /// parses is left unchanged.
    pub fn next(&self) -> Self {
        let mut next = self.clone();

        if next.page < PAGES_PER_BOOK {
            next.page += 1;
            return next;
        }

        next.page = 1;
        if next.book < BOOKS_PER_SHELF - 1 {
            next.book += 1;
            return next;
        }

        next.book = 0;
        if next.shelf < SHELVES_PER_WALL - 1 {
            next.shelf += 1;
            return next;
        }

        next.shelf = 0;
        if next.wall < WALLS_PER_HEXAGON - 1 {
            next.wall += 1;
            return next;
        }

        next.wall = 0;
        if let Ok(hexagon) = parse_hexagon(&next.hexagon) {
            next.hexagon = (hexagon + 1u32).to_str_radix(36);
        }
        next
    }

    /// The previous page in reading order
    ///
    /// The walk stops at the global minimum: the first page of hexagon
    /// `"0"` is its own predecessor.
    pub fn previous(&self) -> Self {
        let mut prev = self.clone();

        if prev.page > 1 {
            prev.page -= 1;
            return prev;
        }

        prev.page = PAGES_PER_BOOK;
        if prev.book > 0 {
            prev.book -= 1;
            return prev;
        }

        prev.book = BOOKS_PER_SHELF - 1;
        if prev.shelf > 0 {
            prev.shelf -= 1;
            return prev;
        }

        prev.shelf = SHELVES_PER_WALL - 1;
        if prev.wall > 0 {
            prev.wall -= 1;
            return prev;
        }

        prev.wall = WALLS_PER_HEXAGON - 1;
        match parse_hexagon(&self.hexagon) {
            Ok(hexagon) if !hexagon.is_zero() => {
                prev.hexagon = (hexagon - 1u32).to_str_radix(36);
                prev
            }
            _ => self.clone(),
        }
    }

    /// A uniformly random address
    ///
    /// Hexagon length is uniform in [1, 3004] with uniform base-36 digits;
    /// each numeric field is uniform over its range. This is the only
    /// non-deterministic operation in the crate.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();

        let length = rng.gen_range(1..=MAX_HEXAGON_LENGTH);
        let digits = BASE36_CHARSET.as_bytes();
        let hexagon: String = (0..length)
            .map(|_| digits[rng.gen_range(0..digits.len())] as char)
            .collect();

        Self {
            hexagon,
            wall: rng.gen_range(0..WALLS_PER_HEXAGON),
            shelf: rng.gen_range(0..SHELVES_PER_WALL),
            book: rng.gen_range(0..BOOKS_PER_SHELF),
            page: rng.gen_range(1..=PAGES_PER_BOOK),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}",
            self.hexagon, self.wall, self.shelf, self.book, self.page
        )
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(address: &str) -> Result<Self> {
        Self::parse(address)
    }
}

/// Validate and parse a hexagon identifier as lowercase base-36
fn parse_hexagon(hexagon: &str) -> Result<BigUint> {
    if hexagon.is_empty()
        || !hexagon
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
    {
        return Err(Error::InvalidHexagon);
    }
    BigUint::parse_bytes(hexagon.as_bytes(), 36).ok_or(Error::InvalidHexagon)
}

/// Parse a numeric address field and check its closed interval
fn parse_field(part: &str, field: &'static str, min: i64, max: i64) -> Result<i64> {
    let got: i64 = part
        .parse()
        .map_err(|source| Error::InvalidField { field, source })?;
    if got < min || got > max {
        return Err(Error::OutOfRange {
            field,
            min,
            max,
            got,
        });
    }
    Ok(got)
}

/// Pop the least-significant digit of `n` in the given base
fn take_digit(n: &mut BigUint, base: u32) -> u32 {
    let divisor = BigUint::from(base);
    let digit = (&*n % &divisor).to_u32().expect("digit fits in u32");
    *n /= &divisor;
    digit
}
