//! Append-only log of rejected saves kept for human review.
//!
//! The anti-cheat thresholds are heuristics; a rejected save can belong to
//! a legitimate player on odd hardware. Instead of silently discarding
//! those, every suspicion-category rejection is recorded here so an
//! operator can look at the numbers later. Entries go to memory
//! synchronously and, when a file path is configured, to disk through a
//! background writer thread.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

use super::validator::RejectCategory;

/// One rejected save, with enough of the reported numbers to judge it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct ReviewEntry {
    pub seq: u64,
    pub player_id: String,
    pub category: RejectCategory,
    pub reason: String,
    pub reported_money: f64,
    pub reported_lifetime_earned: f64,
    pub reported_total_clicks: u64,
    pub timestamp_ms: u64,
}

/// Background writer that appends entries as JSON lines.
#[derive(Clone, Debug)]
pub struct ReviewFileWriter {
    // Optional sender so close() can take and drop it, ending the thread.
    sender: Arc<Mutex<Option<Sender<ReviewEntry>>>>,
    handle: Arc<Mutex<Option<thread::JoinHandle<()>>>>,
}

impl ReviewFileWriter {
    pub fn new(path: PathBuf) -> std::io::Result<Self> {
        let (tx, rx) = mpsc::channel::<ReviewEntry>();
        let handle = thread::spawn(move || {
            let file = match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(f) => f,
                Err(e) => {
                    log::error!("review log: failed to open {path:?}: {e}");
                    return;
                }
            };
            let mut writer = BufWriter::new(file);
            for entry in rx {
                match serde_json::to_vec(&entry) {
                    Ok(mut bytes) => {
                        bytes.push(b'\n');
                        if let Err(e) = writer.write_all(&bytes) {
                            log::error!("review log: write failed: {e}");
                        }
                        if let Err(e) = writer.flush() {
                            log::error!("review log: flush failed: {e}");
                        }
                    }
                    Err(e) => log::error!("review log: serialize failed: {e}"),
                }
            }
            let _ = writer.flush();
        });
        Ok(ReviewFileWriter {
            sender: Arc::new(Mutex::new(Some(tx))),
            handle: Arc::new(Mutex::new(Some(handle))),
        })
    }

    fn send(&self, entry: ReviewEntry) {
        let guard = match self.sender.lock() {
            Ok(g) => g,
            Err(e) => e.into_inner(),
        };
        if let Some(tx) = &*guard {
            let _ = tx.send(entry);
        }
    }

    /// Drop the sender and join the writer thread so pending lines flush.
    pub fn close(&self) {
        {
            let mut guard = match self.sender.lock() {
                Ok(g) => g,
                Err(e) => e.into_inner(),
            };
            *guard = None;
        }
        let handle = {
            let mut guard = match self.handle.lock() {
                Ok(g) => g,
                Err(e) => e.into_inner(),
            };
            guard.take()
        };
        if let Some(h) = handle {
            let _ = h.join();
        }
    }
}

/// In-memory review log with optional file persistence.
#[derive(Debug, Default)]
pub struct ReviewLog {
    entries: Mutex<Vec<ReviewEntry>>,
    seq: AtomicU64,
    writer: Option<ReviewFileWriter>,
}

impl ReviewLog {
    pub fn new() -> Self {
        ReviewLog::default()
    }

    pub fn with_writer(writer: ReviewFileWriter) -> Self {
        ReviewLog {
            entries: Mutex::new(Vec::new()),
            seq: AtomicU64::new(0),
            writer: Some(writer),
        }
    }

    /// Re-read a previously written log file (ops tooling).
    pub fn load_from_file(path: &str) -> Result<Vec<ReviewEntry>, String> {
        let file = File::open(path).map_err(|e| e.to_string())?;
        let reader = BufReader::new(file);
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| e.to_string())?;
            if line.trim().is_empty() {
                continue;
            }
            let entry: ReviewEntry = serde_json::from_str(&line).map_err(|e| e.to_string())?;
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Record one rejection. Sequence numbers increment per append.
    pub fn append(
        &self,
        player_id: &str,
        category: RejectCategory,
        reason: String,
        reported_money: f64,
        reported_lifetime_earned: f64,
        reported_total_clicks: u64,
        timestamp_ms: u64,
    ) -> ReviewEntry {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let entry = ReviewEntry {
            seq,
            player_id: player_id.to_string(),
            category,
            reason,
            reported_money,
            reported_lifetime_earned,
            reported_total_clicks,
            timestamp_ms,
        };
        match self.entries.lock() {
            Ok(mut g) => g.push(entry.clone()),
            Err(e) => e.into_inner().push(entry.clone()),
        }
        if let Some(writer) = &self.writer {
            writer.send(entry.clone());
        }
        entry
    }

    /// Snapshot of recorded entries.
    pub fn entries(&self) -> Vec<ReviewEntry> {
        match self.entries.lock() {
            Ok(g) => g.clone(),
            Err(e) => e.into_inner().clone(),
        }
    }

    pub fn shutdown(&self) {
        if let Some(writer) = &self.writer {
            writer.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_are_sequenced() {
        let review = ReviewLog::new();
        let a = review.append(
            "p1",
            RejectCategory::Suspicious,
            "too fast".to_string(),
            10.0,
            10.0,
            5,
            1_000,
        );
        let b = review.append(
            "p2",
            RejectCategory::Invalid,
            "bad url".to_string(),
            0.0,
            0.0,
            0,
            2_000,
        );
        assert_eq!(a.seq, 1);
        assert_eq!(b.seq, 2);
        assert_eq!(review.entries().len(), 2);
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "idle-tycoon-review-{}.jsonl",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let writer = ReviewFileWriter::new(path.clone()).unwrap();
        let review = ReviewLog::with_writer(writer);
        review.append(
            "p1",
            RejectCategory::Suspicious,
            "clicks/hour over limit".to_string(),
            1.0,
            2.0,
            3,
            4,
        );
        review.shutdown();

        let loaded = ReviewLog::load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].player_id, "p1");
        assert_eq!(loaded[0].category, RejectCategory::Suspicious);

        let _ = std::fs::remove_file(&path);
    }
}
