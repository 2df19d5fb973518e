//! Downloads IAU constellation boundary files with bounded parallelism.
//!
//! One blocking HTTP client is shared by a fixed-size rayon pool. Each code is
//! fetched and parsed independently; the outcome of every code is returned so a
//! single failure never hides the others.

use crate::errors::{CatalogError, CatalogResult};
use crate::ingest::iau::{boundary_url, parse_iau_boundary};
use crate::records::Vertex;
use rayon::prelude::*;
use reqwest::blocking::Client;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

pub const DEFAULT_CONCURRENCY: usize = 4;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Per-code results, keyed by code.
pub type FetchOutcomes = BTreeMap<String, CatalogResult<Vec<Vertex>>>;

pub struct BoundaryFetcher {
    client: Client,
    base_url: String,
    retries: u32,
}

impl BoundaryFetcher {
    pub fn new(base_url: impl Into<String>, retries: u32, timeout: Duration) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::fetch("client", e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            retries,
        })
    }

    pub fn url_for(&self, code: &str) -> String {
        boundary_url(&self.base_url, code)
    }

    fn fetch_once(&self, code: &str, url: &str) -> CatalogResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| CatalogError::fetch(code, format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::fetch(code, format!("HTTP {status} from {url}")));
        }
        response
            .text()
            .map_err(|e| CatalogError::fetch(code, format!("reading body of {url}: {e}")))
    }

    /// Body of the boundary file for `code`, retrying up to `retries` times.
    pub fn fetch_text(&self, code: &str) -> CatalogResult<String> {
        let url = self.url_for(code);
        let mut attempt = 0;
        loop {
            match self.fetch_once(code, &url) {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.retries => {
                    attempt += 1;
                    tracing::warn!(code, attempt, retries = self.retries, error = %e, "retrying");
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn fetch_vertices(&self, code: &str) -> CatalogResult<Vec<Vertex>> {
        let body = self.fetch_text(code)?;
        let vertices = parse_iau_boundary(&body).into_result(&self.url_for(code))?;
        tracing::debug!(code, vertices = vertices.len(), "fetched boundary");
        Ok(vertices)
    }

    /// Fetches every distinct code on a pool of `concurrency` threads.
    ///
    /// `on_done` runs on the worker thread after each code finishes.
    pub fn fetch_all<F>(&self, codes: &[&str], concurrency: usize, on_done: F) -> CatalogResult<FetchOutcomes>
    where
        F: Fn(&str, &CatalogResult<Vec<Vertex>>) + Sync,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(concurrency.max(1))
            .build()
            .map_err(|e| CatalogError::fetch("pool", e.to_string()))?;

        let codes = unique_codes(codes);
        let results: Vec<(String, CatalogResult<Vec<Vertex>>)> = pool.install(|| {
            codes
                .par_iter()
                .map(|&code| {
                    let result = self.fetch_vertices(code);
                    on_done(code, &result);
                    (code.to_string(), result)
                })
                .collect()
        });

        Ok(results.into_iter().collect())
    }
}

/// `codes` in first-seen order with repeats dropped. Codes differing only in
/// case name the same boundary file.
pub fn unique_codes<'a>(codes: &[&'a str]) -> Vec<&'a str> {
    let mut seen = BTreeSet::new();
    codes
        .iter()
        .copied()
        .filter(|code| seen.insert(code.to_ascii_lowercase()))
        .collect()
}

/// Splits outcomes into vertices in `codes` order and the failures. Each
/// distinct code contributes once.
pub fn assemble(codes: &[&str], mut outcomes: FetchOutcomes) -> (Vec<Vertex>, Vec<(String, CatalogError)>) {
    let mut vertices = Vec::new();
    let mut failures = Vec::new();
    for code in unique_codes(codes) {
        match outcomes.remove(code) {
            Some(Ok(v)) => vertices.extend(v),
            Some(Err(e)) => failures.push((code.to_string(), e)),
            None => failures.push((code.to_string(), CatalogError::fetch(code, "not attempted"))),
        }
    }
    (vertices, failures)
}
