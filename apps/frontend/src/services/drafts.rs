//! Session-scoped scouting drafts.
//!
//! Each scout owns one explicit draft record: it is written and read
//! through these verbs only, never mutated as a side effect of rendering.
//! Drafts are working copies; the backend remains the only system of
//! record.

use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Endgame stage result for one robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageResult {
    Onstage,
    Park,
    #[serde(rename = "not attempted")]
    NotAttempted,
    Failed,
}

impl Default for StageResult {
    fn default() -> Self {
        StageResult::NotAttempted
    }
}

/// One scout's in-progress match observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatchDraft {
    pub match_key: Option<String>,
    pub team_key: Option<String>,
    pub is_fielded: bool,
    pub is_leave_start: bool,
    pub auto_speaker_succeed: u32,
    pub auto_speaker_missed: u32,
    pub auto_amp_succeed: u32,
    pub auto_amp_missed: u32,
    pub auto_piece_succeed: u32,
    pub auto_piece_missed: u32,
    pub tele_speaker_succeed: u32,
    pub tele_speaker_missed: u32,
    pub tele_amp_succeed: u32,
    pub tele_amp_missed: u32,
    pub trap_succeed: u32,
    pub trap_missed: u32,
    pub stage: StageResult,
    pub skill: u8,
    pub is_broke: bool,
    pub is_died: bool,
    pub notes: String,
}

#[derive(Debug, Clone)]
struct StoredDraft {
    draft: MatchDraft,
    updated_at: OffsetDateTime,
}

/// Per-scout draft records, keyed by scout id.
#[derive(Clone, Default)]
pub struct DraftStore {
    inner: Arc<DashMap<String, StoredDraft>>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store (or replace) the scout's draft. Returns the new timestamp.
    pub fn put(&self, scout_id: &str, draft: MatchDraft) -> OffsetDateTime {
        let updated_at = OffsetDateTime::now_utc();
        self.inner
            .insert(scout_id.to_string(), StoredDraft { draft, updated_at });
        updated_at
    }

    pub fn get(&self, scout_id: &str) -> Option<(MatchDraft, OffsetDateTime)> {
        self.inner
            .get(scout_id)
            .map(|stored| (stored.draft.clone(), stored.updated_at))
    }

    /// Drop the scout's draft. Returns whether one existed.
    pub fn discard(&self, scout_id: &str) -> bool {
        self.inner.remove(scout_id).is_some()
    }
}
