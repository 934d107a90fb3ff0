//! Surface that prints block events to stdout.

use std::io::{self, Write};

use super::BlockSurface;
use crate::animator::{Block, BlockId};

/// Writes one line per block event.
///
/// Used by the CLI so the animation can be followed in a terminal.
#[derive(Debug)]
pub struct ConsoleSurface {
    width: f64,
}

impl ConsoleSurface {
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    fn line(&self, text: &str) {
        let mut stdout = io::stdout().lock();
        // Write errors are dropped; slots keep running.
        let _ = writeln!(stdout, "{}", text);
    }
}

impl BlockSurface for ConsoleSurface {
    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn create_block(&self, block: &Block) {
        self.line(&format!(
            "▼ #{:<5} slot {:>2}  x={:>7.1}px  fall={:>4.1}s  {}  {}  [{}]",
            block.id.0,
            block.slot,
            block.left,
            block.fall.as_secs_f64(),
            block.artist.name,
            block.href,
            block.artist.image,
        ));
    }

    fn remove_block(&self, id: BlockId) {
        self.line(&format!("  #{:<5} landed", id.0));
    }

    fn clear(&self) {
        self.line("── cleared ──");
    }

    fn show_notice(&self, message: &str) {
        self.line(&format!("!! {}", message));
    }
}
