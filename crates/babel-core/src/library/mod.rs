//! The library facade: search, browse, locate
//!
//! Nothing is stored. A search manufactures pages that contain the query
//! and reports where those pages already "are"; browsing an address
//! recomputes its page from the address alone. The two directions are exact
//! inverses by construction: search composes page synthesis with base-29
//! encoding and address decomposition, and browse runs the same pipeline
//! backwards.

use std::sync::Arc;

use rayon::prelude::*;
use tokio::sync::{mpsc, Mutex};

use crate::alphabet::Alphabet;
use crate::base29;
use crate::census;
use crate::error::{Error, Result};
use crate::location::Location;
use crate::page;
use crate::types::CHARS_PER_PAGE;

/// Bound on the in-flight job and result queues of the streaming search
const CHANNEL_CAPACITY: usize = 100;

/// A handle to the Library of Babel
///
/// Cheap to clone; the only state is the shared alphabet table.
#[derive(Debug, Clone, Default)]
pub struct Library {
    alphabet: Arc<Alphabet>,
}

impl Library {
    /// Create a library handle
    pub fn new() -> Self {
        Self {
            alphabet: Arc::new(Alphabet::new()),
        }
    }

    /// The page alphabet
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Deterministic claimed number of addresses containing `text`
    pub fn occurrence_count(&self, text: &str) -> u64 {
        census::occurrence_count(text)
    }

    /// Address of the page that variant `variant` of `text` lives on
    ///
    /// This is the per-variant search kernel: synthesize the seeded page,
    /// read it as a base-29 integer, decompose the integer into an address.
    pub fn locate(&self, text: &str, variant: u64) -> Result<Location> {
        let content = page::synthesize(&self.alphabet, text, variant)?;
        let index = base29::encode(&self.alphabet, &content)?;
        Ok(Location::from_index(&index))
    }

    /// The page at `location`
    ///
    /// Always exactly one page (3200 symbols) unless the hexagon is so
    /// large that its pages fall outside the 29^3200 space, in which case
    /// the full content is returned. Addresses that did not come from a
    /// search decode to noise, which is the intended semantics.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidHexagon`] if the hexagon field does not parse.
    pub fn browse(&self, location: &Location) -> Result<String> {
        let index = location.to_index()?;
        let content = base29::decode(&self.alphabet, &index);
        if content.len() >= CHARS_PER_PAGE {
            return Ok(content);
        }
        // left-pad with the zero symbol to the full page shape
        let mut padded = " ".repeat(CHARS_PER_PAGE - content.len());
        padded.push_str(&content);
        Ok(padded)
    }

    /// Addresses for variants `offset .. min(offset + limit, N)` in variant order
    ///
    /// `N` is the occurrence count of `text`. An offset at or past `N`
    /// yields an empty list, not an error. Variants are computed in
    /// parallel but the returned order is always increasing `v`, the
    /// stable ordering page-through clients rely on.
    ///
    /// # Errors
    ///
    /// [`Error::OffsetNegative`], [`Error::LimitNonPositive`], or any text
    /// validation failure.
    pub fn search_paginated(&self, text: &str, offset: i64, limit: i64) -> Result<Vec<Location>> {
        if offset < 0 {
            return Err(Error::OffsetNegative);
        }
        if limit <= 0 {
            return Err(Error::LimitNonPositive);
        }
        let query = self.validate(text)?;
        let total = census::occurrence_count(&query);

        let offset = offset as u64;
        if offset >= total {
            return Ok(Vec::new());
        }
        let end = (offset + limit as u64).min(total);

        tracing::debug!(query = %query, offset, end, total, "paginated search");

        (offset..end)
            .into_par_iter()
            .map(|variant| self.locate(&query, variant))
            .collect()
    }

    /// Stream the addresses of every variant of `text`, unordered
    ///
    /// Spawns one worker per CPU core over a bounded job queue and pushes
    /// addresses into a bounded result channel, so the full occurrence
    /// count is never materialised at once. Dropping the receiver stops
    /// the workers after at most one in-flight job each.
    ///
    /// # Errors
    ///
    /// Any text validation failure. Workers that somehow hit an encode
    /// error after validation skip that variant.
    pub async fn search_stream(&self, text: &str) -> Result<mpsc::Receiver<Location>> {
        let query = self.validate(text)?;
        let total = census::occurrence_count(&query);

        let (result_tx, result_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (job_tx, job_rx) = mpsc::channel::<u64>(CHANNEL_CAPACITY);
        let job_rx = Arc::new(Mutex::new(job_rx));

        let workers = num_cpus::get();
        tracing::debug!(query = %query, total, workers, "streaming search");

        for _ in 0..workers {
            let library = self.clone();
            let query = query.clone();
            let jobs = Arc::clone(&job_rx);
            let results = result_tx.clone();
            tokio::spawn(async move {
                loop {
                    let variant = jobs.lock().await.recv().await;
                    let Some(variant) = variant else { break };
                    let Ok(location) = library.locate(&query, variant) else {
                        continue;
                    };
                    if results.send(location).await.is_err() {
                        // consumer hung up
                        break;
                    }
                }
            });
        }
        // the channel closes when the last worker drops its sender
        drop(result_tx);

        tokio::spawn(async move {
            for variant in 0..total {
                if job_tx.send(variant).await.is_err() {
                    break;
                }
            }
        });

        Ok(result_rx)
    }

    /// Lowercase `text` and check it against the page constraints
    fn validate(&self, text: &str) -> Result<String> {
        let lowered = text.to_lowercase();
        if lowered.is_empty() {
            return Err(Error::EmptyText);
        }
        if lowered.len() > CHARS_PER_PAGE {
            return Err(Error::TextTooLong);
        }
        for character in lowered.chars() {
            if self.alphabet.index_of(character).is_none() {
                return Err(Error::InvalidCharacter {
                    character,
                    charset: self.alphabet.charset(),
                });
            }
        }
        Ok(lowered)
    }
}
