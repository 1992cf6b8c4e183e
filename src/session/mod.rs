//! Per-session practice state.
//!
//! Reference audio and the recent-words ring are scoped to an explicit
//! session key instead of living in process-wide globals, so concurrent
//! learners cannot overwrite each other's reference audio. Sessions are
//! held in a bounded cache with idle expiry; there is no other lifecycle.
//!
//! Within one session the semantics stay deliberately simple: the audio
//! slot is last-write-wins, and the ring keeps the 10 most recent words.

use bytes::Bytes;
use moka::future::Cache;
use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// Session key used when a client does not send `x-session-id`.
pub const DEFAULT_SESSION_ID: &str = "default";

/// Capacity of the recent-words ring. The oldest word is evicted first.
pub const MAX_RECENT_WORDS: usize = 10;

/// Default maximum number of live sessions.
pub const DEFAULT_SESSION_CAPACITY: u64 = 256;

/// Default idle expiry for a session, in seconds.
pub const DEFAULT_SESSION_TTL_SECONDS: u64 = 1800;

/// The most recently synthesized reference audio for a session.
#[derive(Debug, Clone)]
pub struct ReferenceAudio {
    /// Complete audio payload. `Bytes` keeps the clone cheap.
    pub data: Bytes,
    /// MIME type of the payload.
    pub content_type: &'static str,
    /// Text the audio was synthesized from.
    pub text: String,
}

/// Bounded ring of recently generated words.
#[derive(Debug, Default)]
pub struct RecentWords {
    words: VecDeque<String>,
}

impl RecentWords {
    /// Record a word, evicting the oldest entry beyond capacity.
    pub fn push(&mut self, word: &str) {
        self.words.push_back(word.to_string());
        while self.words.len() > MAX_RECENT_WORDS {
            self.words.pop_front();
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// State for one practice session.
#[derive(Debug, Default)]
pub struct PracticeSession {
    reference_audio: RwLock<Option<ReferenceAudio>>,
    recent_words: Mutex<RecentWords>,
}

impl PracticeSession {
    /// Overwrite the reference-audio slot.
    pub fn store_reference_audio(&self, audio: ReferenceAudio) {
        *self.reference_audio.write() = Some(audio);
    }

    /// Read the reference-audio slot, if populated.
    pub fn reference_audio(&self) -> Option<ReferenceAudio> {
        self.reference_audio.read().clone()
    }

    /// Record a generated word in the ring.
    pub fn record_word(&self, word: &str) {
        self.recent_words.lock().push(word);
    }

    /// Snapshot of the recent words, oldest first.
    pub fn recent_words(&self) -> Vec<String> {
        self.recent_words.lock().to_vec()
    }
}

/// Bounded, expiring store of practice sessions.
pub struct SessionStore {
    sessions: Cache<String, Arc<PracticeSession>>,
}

impl SessionStore {
    /// Create a store holding at most `capacity` sessions, each expiring
    /// after `ttl` of inactivity.
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self {
            sessions: Cache::builder()
                .max_capacity(capacity)
                .time_to_idle(ttl)
                .build(),
        }
    }

    /// Fetch the session for `id`, creating it on first use.
    pub async fn session(&self, id: &str) -> Arc<PracticeSession> {
        self.sessions
            .get_with(id.to_string(), async { Arc::new(PracticeSession::default()) })
            .await
    }

    /// Number of live sessions (approximate, cache-internal).
    pub fn len(&self) -> u64 {
        self.sessions.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(
            DEFAULT_SESSION_CAPACITY,
            Duration::from_secs(DEFAULT_SESSION_TTL_SECONDS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_words_evicts_oldest() {
        let mut ring = RecentWords::default();
        for i in 0..11 {
            ring.push(&format!("word{i}"));
        }

        assert_eq!(ring.len(), MAX_RECENT_WORDS);
        assert!(!ring.contains("word0"));
        assert!(ring.contains("word1"));
        assert!(ring.contains("word10"));
    }

    #[test]
    fn test_recent_words_order_is_oldest_first() {
        let mut ring = RecentWords::default();
        ring.push("alpha");
        ring.push("beta");

        assert_eq!(ring.to_vec(), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_reference_audio_slot_is_last_write_wins() {
        let session = PracticeSession::default();
        assert!(session.reference_audio().is_none());

        session.store_reference_audio(ReferenceAudio {
            data: Bytes::from_static(b"first"),
            content_type: "audio/mpeg",
            text: "first".to_string(),
        });
        session.store_reference_audio(ReferenceAudio {
            data: Bytes::from_static(b"second"),
            content_type: "audio/mpeg",
            text: "second".to_string(),
        });

        let audio = session.reference_audio().unwrap();
        assert_eq!(&audio.data[..], b"second");
        assert_eq!(audio.text, "second");
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::default();

        let a = store.session("a").await;
        let b = store.session("b").await;

        a.record_word("banana");
        assert!(b.recent_words().is_empty());

        // Same key resolves to the same session.
        let a_again = store.session("a").await;
        assert_eq!(a_again.recent_words(), vec!["banana"]);
    }
}
