//! Request desk — help requests and the knowledge base, persisted as JSON.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use frontdesk_core::{Error, Result};
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::types::*;

pub struct RequestDesk {
    path: Option<PathBuf>,
    data: RwLock<DeskData>,
}

impl RequestDesk {
    /// Open a desk backed by `path`. A missing file starts empty.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = match std::fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => DeskData::default(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => DeskData::default(),
            Err(e) => return Err(e.into()),
        };

        info!(
            "Request desk opened at {} ({} requests, {} knowledge items)",
            path.display(),
            data.requests.len(),
            data.knowledge.len()
        );

        Ok(Self {
            path: Some(path),
            data: RwLock::new(data),
        })
    }

    /// A desk that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: RwLock::new(DeskData::default()),
        }
    }

    /// Answer from the knowledge base, or open a pending request.
    pub fn submit(&self, caller_id: &str, question: &str) -> Result<Submission> {
        if caller_id.trim().is_empty() || question.trim().is_empty() {
            return Err(Error::Validation("callerId and question required".into()));
        }

        let mut data = self.data.write();

        if let Some(answer) = find_answer(&data.knowledge, question) {
            debug!("Knowledge base answered question from {}", caller_id);
            return Ok(Submission::Known { answer });
        }

        let request = HelpRequest {
            id: uuid::Uuid::new_v4().to_string(),
            caller_id: caller_id.to_string(),
            question: question.to_string(),
            status: RequestStatus::Pending,
            created_at: Utc::now().to_rfc3339(),
            resolved_at: None,
            answer: None,
        };
        let mut next = data.clone();
        next.requests.insert(0, request.clone());
        self.commit(&mut data, next)?;

        info!(
            "[notify supervisor] Hey, I need help answering: \"{}\" (requestId={})",
            question, request.id
        );

        Ok(Submission::Created(request))
    }

    /// All requests, newest first, optionally narrowed to one status.
    pub fn list(&self, status: Option<RequestStatus>) -> Vec<HelpRequest> {
        self.data
            .read()
            .requests
            .iter()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Result<HelpRequest> {
        self.data
            .read()
            .requests
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("request {}", id)))
    }

    /// Resolve a pending request and learn its answer.
    pub fn answer(&self, id: &str, answer: &str) -> Result<HelpRequest> {
        if answer.trim().is_empty() {
            return Err(Error::Validation("answer required".into()));
        }

        let mut data = self.data.write();
        let now = Utc::now().to_rfc3339();

        let mut next = data.clone();
        let request = pending_mut(&mut next.requests, id)?;
        request.status = RequestStatus::Resolved;
        request.answer = Some(answer.to_string());
        request.resolved_at = Some(now.clone());
        let resolved = request.clone();

        next.knowledge.insert(
            0,
            KnowledgeItem {
                id: uuid::Uuid::new_v4().to_string(),
                question: resolved.question.clone(),
                answer: answer.to_string(),
                created_at: now,
            },
        );
        self.commit(&mut data, next)?;

        info!(
            "[text caller {}] Thanks for waiting. Here is the answer: {}",
            resolved.caller_id, answer
        );

        Ok(resolved)
    }

    /// Give up on a pending request.
    pub fn mark_unresolved(&self, id: &str) -> Result<HelpRequest> {
        let mut data = self.data.write();

        let mut next = data.clone();
        let request = pending_mut(&mut next.requests, id)?;
        request.status = RequestStatus::Unresolved;
        request.resolved_at = Some(Utc::now().to_rfc3339());
        let updated = request.clone();

        self.commit(&mut data, next)?;
        Ok(updated)
    }

    /// Learned answers, newest first.
    pub fn knowledge(&self) -> Vec<KnowledgeItem> {
        self.data.read().knowledge.clone()
    }

    /// Mark pending requests older than `timeout` as unresolved.
    ///
    /// Returns how many requests changed.
    pub fn sweep_expired(&self, now: DateTime<Utc>, timeout: Duration) -> Result<usize> {
        let mut data = self.data.write();
        let stamp = now.to_rfc3339();
        let mut expired = 0;

        let mut next = data.clone();
        for request in next.requests.iter_mut() {
            if request.status != RequestStatus::Pending {
                continue;
            }
            let created = match DateTime::parse_from_rfc3339(&request.created_at) {
                Ok(t) => t.with_timezone(&Utc),
                Err(e) => {
                    warn!("Request {} has unreadable createdAt: {}", request.id, e);
                    continue;
                }
            };
            let overdue = now
                .signed_duration_since(created)
                .to_std()
                .map(|age| age > timeout)
                .unwrap_or(false);
            if overdue {
                request.status = RequestStatus::Unresolved;
                request.resolved_at = Some(stamp.clone());
                expired += 1;
            }
        }

        if expired > 0 {
            self.commit(&mut data, next)?;
            info!("Marked {} pending requests unresolved after timeout", expired);
        }
        Ok(expired)
    }

    /// Save `next`, then make it the live state. On error the live state
    /// is left exactly as it was.
    fn commit(&self, live: &mut DeskData, next: DeskData) -> Result<()> {
        self.persist(&next)?;
        *live = next;
        Ok(())
    }

    /// Write to a sibling temp file and rename it over the data file, so a
    /// crash mid-write never leaves a truncated file behind.
    fn persist(&self, data: &DeskData) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                std::fs::create_dir_all(parent)?;
                parent.to_path_buf()
            }
            None => PathBuf::from("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        tmp.write_all(serde_json::to_string_pretty(data)?.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| Error::Io(e.error))?;
        Ok(())
    }
}

fn pending_mut<'a>(requests: &'a mut [HelpRequest], id: &str) -> Result<&'a mut HelpRequest> {
    let request = requests
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| Error::NotFound(format!("request {}", id)))?;
    if request.status != RequestStatus::Pending {
        return Err(Error::Conflict("already handled".into()));
    }
    Ok(request)
}

/// Loose match: either question contains the other, ignoring case and
/// surrounding whitespace. Newest knowledge wins.
fn find_answer(knowledge: &[KnowledgeItem], question: &str) -> Option<String> {
    let q = question.trim().to_lowercase();
    knowledge
        .iter()
        .find(|k| {
            let known = k.question.trim().to_lowercase();
            !known.is_empty() && (q.contains(&known) || known.contains(&q))
        })
        .map(|k| k.answer.clone())
}
