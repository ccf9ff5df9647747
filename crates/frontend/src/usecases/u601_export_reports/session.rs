//! Result sets held between a fetch and its export.

use serde_json::Value;
use std::collections::HashMap;

/// Rows of the last completed fetch of one report card, together with the
/// report type that produced them. Both are only ever replaced together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSession {
    report_type: String,
    rows: Vec<Value>,
    revision: u64,
}

impl ReportSession {
    pub fn replace(&mut self, report_type: impl Into<String>, rows: Vec<Value>) {
        self.report_type = report_type.into();
        self.rows = rows;
        self.revision += 1;
    }

    pub fn report_type(&self) -> &str {
        &self.report_type
    }

    pub fn rows(&self) -> &[Value] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of fetches stored so far
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// One session per report card, plus which card fetched most recently.
#[derive(Debug, Default)]
pub struct SessionBook {
    sessions: HashMap<String, ReportSession>,
    latest: Option<String>,
}

impl SessionBook {
    /// Copy of the card's session to run a workflow on
    pub fn checkout(&self, card: &str) -> ReportSession {
        self.sessions.get(card).cloned().unwrap_or_default()
    }

    /// Store the session back; a card whose session gained a fetch becomes
    /// the latest one.
    pub fn commit(&mut self, card: &str, session: ReportSession) {
        let previous = self.sessions.get(card).map(ReportSession::revision).unwrap_or(0);
        if session.revision() > previous {
            self.latest = Some(card.to_string());
        }
        self.sessions.insert(card.to_string(), session);
    }

    /// Session of the most recent successful fetch, if it holds rows
    pub fn latest(&self) -> Option<&ReportSession> {
        self.latest
            .as_deref()
            .and_then(|card| self.sessions.get(card))
            .filter(|session| !session.is_empty())
    }
}
