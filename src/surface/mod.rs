//! Display surfaces for falling blocks.
//!
//! The animator never touches a real display. It drives a [`BlockSurface`],
//! which creates and removes blocks and reports when a block's fall
//! animation has finished.
//!
//! - [`MemorySurface`]: headless, records every event
//! - [`ConsoleSurface`]: prints block events to stdout

pub mod console;
pub mod memory;

use futures_util::future::BoxFuture;

use crate::animator::{Block, BlockId};

pub use console::ConsoleSurface;
pub use memory::{MemorySurface, SurfaceEvent};

/// Capability interface between the animator and whatever renders blocks.
///
/// Calls arrive from animator tasks while the animator's lock is held, so
/// implementations must not call back into the animator.
pub trait BlockSurface: Send + Sync + 'static {
    /// Width available for placing blocks, in pixels.
    fn viewport_width(&self) -> f64;

    /// Show a new block at `block.left` and start its fall.
    fn create_block(&self, block: &Block);

    /// Remove a block. Unknown ids are ignored.
    fn remove_block(&self, id: BlockId);

    /// Remove every block.
    fn clear(&self);

    /// Show a message in place of the animation.
    fn show_notice(&self, message: &str);

    /// Resolves once `block` has finished falling.
    ///
    /// The default waits for the block's fall duration.
    fn animation_end(&self, block: &Block) -> BoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(block.fall))
    }
}
