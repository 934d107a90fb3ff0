//! Falling-block animator.
//!
//! The animator runs `max_blocks` slots. Each slot is a Tokio task that
//! spawns a block for its artist, waits for the surface to report the end
//! of the fall, removes the block, sleeps a random delay and spawns the
//! same artist again, forever.
//!
//! Every [`Animator::start`] bumps a generation counter and aborts the
//! previous slot tasks. Surface mutations happen under the animator lock
//! and only while the task's generation is current, so a respawn that was
//! already in flight during a restart never reaches the surface.

pub mod block;
pub mod config;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::Artist;
use crate::surface::BlockSurface;

pub use block::{Block, BlockId};
pub use config::{AnimatorConfig, BLOCK_WIDTH, MAX_BLOCKS, SPAWN_STAGGER};

struct State {
    generation: u64,
    rng: StdRng,
    next_block: u64,
    slots: Vec<JoinHandle<()>>,
}

impl State {
    fn abort_slots(&mut self) {
        for handle in self.slots.drain(..) {
            handle.abort();
        }
    }
}

/// Everything a slot task needs, shared with the animator.
struct Shared<S> {
    surface: Arc<S>,
    config: Arc<AnimatorConfig>,
    state: Arc<Mutex<State>>,
}

impl<S> Clone for Shared<S> {
    fn clone(&self) -> Self {
        Self {
            surface: Arc::clone(&self.surface),
            config: Arc::clone(&self.config),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: BlockSurface> Shared<S> {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Put a new block for `artist` on the surface.
    ///
    /// Returns `None` once `generation` has been superseded.
    fn spawn_block(&self, generation: u64, slot: usize, artist: &Artist) -> Option<Block> {
        let mut state = self.lock();
        if state.generation != generation {
            return None;
        }

        let id = BlockId(state.next_block);
        state.next_block += 1;
        let left = block::random_left(
            &mut state.rng,
            self.surface.viewport_width(),
            self.config.block_width,
        );
        let fall = block::random_duration(&mut state.rng, &self.config.fall);

        let block = Block::new(id, slot, artist.clone(), left, fall);
        debug!(
            "Spawn block {} in slot {} for {} (x={:.1}, fall={:?})",
            id.0, slot, artist.name, left, fall
        );
        self.surface.create_block(&block);
        Some(block)
    }

    /// Take a landed block off the surface and draw the respawn delay.
    fn land_block(&self, generation: u64, id: BlockId) -> Option<Duration> {
        let mut state = self.lock();
        if state.generation != generation {
            return None;
        }

        self.surface.remove_block(id);
        Some(block::random_duration(
            &mut state.rng,
            &self.config.respawn_delay,
        ))
    }

    async fn run_slot(self, generation: u64, slot: usize, artist: Artist, first_delay: Duration) {
        tokio::time::sleep(first_delay).await;
        loop {
            let Some(block) = self.spawn_block(generation, slot, &artist) else {
                return;
            };
            self.surface.animation_end(&block).await;
            let Some(respawn) = self.land_block(generation, block.id) else {
                return;
            };
            tokio::time::sleep(respawn).await;
        }
    }
}

/// Drives falling blocks on a [`BlockSurface`].
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use artistfall::{Animator, AnimatorConfig, Artist, MemorySurface};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let surface = Arc::new(MemorySurface::new(1280.0));
///     let animator = Animator::new(surface, AnimatorConfig::default())?;
///     animator.start(vec![Artist::new(1, "Queen", "queen.jpeg")]);
///     Ok(())
/// }
/// ```
pub struct Animator<S: BlockSurface> {
    shared: Shared<S>,
}

impl<S: BlockSurface> Animator<S> {
    /// Create an idle animator.
    pub fn new(surface: Arc<S>, config: AnimatorConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            shared: Shared {
                surface,
                config: Arc::new(config),
                state: Arc::new(Mutex::new(State {
                    generation: 0,
                    rng,
                    next_block: 0,
                    slots: Vec::new(),
                })),
            },
        })
    }

    pub fn surface(&self) -> &Arc<S> {
        &self.shared.surface
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.shared.config
    }

    /// Number of restarts so far.
    pub fn generation(&self) -> u64 {
        self.shared.lock().generation
    }

    /// Slot tasks still running.
    pub fn active_slots(&self) -> usize {
        self.shared
            .lock()
            .slots
            .iter()
            .filter(|h| !h.is_finished())
            .count()
    }

    /// Restart the animation with `list`.
    ///
    /// Cancels every running slot, clears the surface and schedules
    /// `max_blocks` slots, slot `i` starting `i * stagger` from now. Each
    /// slot picks one artist uniformly from `list`. An empty list leaves
    /// the surface empty.
    ///
    /// Must be called within a Tokio runtime.
    pub fn start(&self, list: Vec<Artist>) {
        let mut state = self.shared.lock();
        state.generation += 1;
        let generation = state.generation;
        state.abort_slots();
        self.shared.surface.clear();

        if list.is_empty() {
            warn!("No artists to animate");
            return;
        }

        for slot in 0..self.shared.config.max_blocks {
            let Some(artist) = block::pick_artist(&mut state.rng, &list).cloned() else {
                break;
            };
            let first_delay = self
                .shared
                .config
                .stagger
                .saturating_mul(u32::try_from(slot).unwrap_or(u32::MAX));
            let task = self
                .shared
                .clone()
                .run_slot(generation, slot, artist, first_delay);
            state.slots.push(tokio::spawn(task));
        }

        info!(
            "Started generation {} with {} slots over {} artists",
            generation,
            state.slots.len(),
            list.len()
        );
    }

    /// Cancel every slot and clear the surface.
    pub fn stop(&self) {
        let mut state = self.shared.lock();
        state.generation += 1;
        state.abort_slots();
        self.shared.surface.clear();
        debug!("Animator stopped at generation {}", state.generation);
    }
}

impl<S: BlockSurface> Drop for Animator<S> {
    fn drop(&mut self) {
        let mut state = self.shared.lock();
        state.generation += 1;
        state.abort_slots();
    }
}
