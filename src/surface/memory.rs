//! Headless surface that keeps blocks in memory.

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::time::Instant;

use super::BlockSurface;
use crate::animator::{Block, BlockId};

/// Something that happened on a [`MemorySurface`].
#[derive(Debug, Clone)]
pub enum SurfaceEvent {
    Created { block: Block, at: Instant },
    Removed { id: BlockId, at: Instant },
    Cleared { at: Instant },
    Notice { message: String },
}

#[derive(Debug, Default)]
struct Inner {
    live: BTreeMap<BlockId, Block>,
    events: VecDeque<SurfaceEvent>,
    peak: usize,
    notice: Option<String>,
}

impl Inner {
    fn record(&mut self, event: SurfaceEvent, limit: Option<usize>) {
        if let Some(limit) = limit {
            if limit == 0 {
                return;
            }
            while self.events.len() >= limit {
                self.events.pop_front();
            }
        }
        self.events.push_back(event);
    }
}

/// In-memory [`BlockSurface`] for tests and recordings.
///
/// Tracks visible blocks, the highest number visible at once since the
/// last [`clear`](BlockSurface::clear), and an event log. The log made by
/// [`new`](Self::new) is unbounded; use [`with_event_limit`](Self::with_event_limit)
/// for long-running animations.
#[derive(Debug)]
pub struct MemorySurface {
    width: f64,
    event_limit: Option<usize>,
    inner: Mutex<Inner>,
}

impl MemorySurface {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            event_limit: None,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Surface keeping only the newest `limit` events.
    pub fn with_event_limit(width: f64, limit: usize) -> Self {
        Self {
            event_limit: Some(limit),
            ..Self::new(width)
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Blocks currently on screen, ordered by id.
    pub fn live_blocks(&self) -> Vec<Block> {
        self.lock().live.values().cloned().collect()
    }

    pub fn live_count(&self) -> usize {
        self.lock().live.len()
    }

    /// Most blocks visible at the same time since the last clear.
    pub fn peak_live(&self) -> usize {
        self.lock().peak
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.lock().events.iter().cloned().collect()
    }

    /// Blocks created in the recorded events, oldest first.
    pub fn created_blocks(&self) -> Vec<Block> {
        self.lock()
            .events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Created { block, .. } => Some(block.clone()),
                _ => None,
            })
            .collect()
    }

    /// Last notice shown, if any.
    pub fn notice(&self) -> Option<String> {
        self.lock().notice.clone()
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new(1280.0)
    }
}

impl BlockSurface for MemorySurface {
    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn create_block(&self, block: &Block) {
        let mut inner = self.lock();
        inner.notice = None;
        inner.live.insert(block.id, block.clone());
        inner.peak = inner.peak.max(inner.live.len());
        inner.record(
            SurfaceEvent::Created {
                block: block.clone(),
                at: Instant::now(),
            },
            self.event_limit,
        );
    }

    fn remove_block(&self, id: BlockId) {
        let mut inner = self.lock();
        if inner.live.remove(&id).is_some() {
            inner.record(
                SurfaceEvent::Removed {
                    id,
                    at: Instant::now(),
                },
                self.event_limit,
            );
        }
    }

    fn clear(&self) {
        let mut inner = self.lock();
        inner.live.clear();
        inner.peak = 0;
        inner.record(SurfaceEvent::Cleared { at: Instant::now() }, self.event_limit);
    }

    fn show_notice(&self, message: &str) {
        let mut inner = self.lock();
        inner.live.clear();
        inner.notice = Some(message.to_string());
        inner.record(
            SurfaceEvent::Notice {
                message: message.to_string(),
            },
            self.event_limit,
        );
    }
}
