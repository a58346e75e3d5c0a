//! Shared test fixtures for the ygodeck SDK integration tests.
//!
//! Provides sample cards, a scripted in-memory `CatalogSource`, and a
//! one-shot local HTTP responder for exercising the real `CatalogClient`.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use ygodeck_sdk::{Card, CatalogSnapshot, CatalogSource, FilterSpec, Result, YgoError};

/// A minimal monster card.
pub fn card(id: u64, name: &str) -> Card {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "type": "Normal Monster",
        "frameType": "normal",
        "desc": format!("{name} test card."),
        "atk": 1000,
        "def": 1000,
        "level": 4,
        "race": "Warrior",
        "attribute": "EARTH"
    }))
    .unwrap()
}

/// `n` distinct cards with identifiers `1..=n`.
pub fn sample_cards(n: u64) -> Vec<Card> {
    (1..=n).map(|i| card(i, &format!("Card {i}"))).collect()
}

pub fn ids(cards: &[Card]) -> Vec<u64> {
    cards.iter().map(|c| c.id).collect()
}

// ---------------------------------------------------------------------------
// FakeSource
// ---------------------------------------------------------------------------

/// In-memory catalog that answers filters the way the API does, closely
/// enough for the tests. Clones share state, so a test can flip `fail`
/// after handing a clone to the SDK.
#[derive(Clone)]
pub struct FakeSource {
    cards: Arc<Vec<Card>>,
    fail: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
}

impl FakeSource {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards: Arc::new(cards),
            fail: Arc::new(AtomicBool::new(false)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CatalogSource for FakeSource {
    fn fetch(&self, filter: &FilterSpec) -> Result<CatalogSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(YgoError::FetchFailed("upstream unavailable".into()));
        }
        let cards: Vec<Card> = match filter {
            FilterSpec::All => self.cards.to_vec(),
            FilterSpec::ById { id } => self
                .cards
                .iter()
                .filter(|c| c.id.to_string() == *id)
                .cloned()
                .collect(),
            FilterSpec::ByQuery { query } => {
                let q = query.to_lowercase();
                self.cards
                    .iter()
                    .filter(|c| c.name.to_lowercase().contains(&q))
                    .cloned()
                    .collect()
            }
            FilterSpec::ByFilters { categories, .. } => self
                .cards
                .iter()
                .filter(|c| categories.is_empty() || categories.contains(&c.type_field))
                .cloned()
                .collect(),
        };
        Ok(CatalogSnapshot::new(filter.clone(), cards))
    }
}

// ---------------------------------------------------------------------------
// One-shot HTTP responder
// ---------------------------------------------------------------------------

/// Serve a single HTTP response on a local port.
///
/// Returns the base URL and a handle yielding the request line the client
/// sent. `delay` is slept before answering.
pub fn serve_once(status: &str, body: &str, delay: Duration) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        thread::sleep(delay);
        // The client may have given up already.
        let _ = stream.write_all(response.as_bytes());
        let text = String::from_utf8_lossy(&request).to_string();
        text.lines().next().unwrap_or_default().to_string()
    });

    (format!("http://{addr}"), handle)
}
