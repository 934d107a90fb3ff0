//! Falling blocks and the random draws that shape them.

use std::ops::RangeInclusive;
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Artist;

/// Identifier of a block, unique for the animator's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(pub u64);

/// One falling thumbnail.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: BlockId,
    /// Slot this block belongs to.
    pub slot: usize,
    pub artist: Artist,
    /// Detail page link.
    pub href: String,
    /// Horizontal offset in pixels.
    pub left: f64,
    /// Fall animation length.
    pub fall: Duration,
}

impl Block {
    pub fn new(id: BlockId, slot: usize, artist: Artist, left: f64, fall: Duration) -> Self {
        let href = artist.detail_link();
        Self {
            id,
            slot,
            artist,
            href,
            left,
            fall,
        }
    }
}

/// Uniformly pick one artist, `None` for an empty list.
pub fn pick_artist<'a, R: Rng>(rng: &mut R, list: &'a [Artist]) -> Option<&'a Artist> {
    list.choose(rng)
}

/// Uniform horizontal offset in `[0, viewport_width - block_width]`.
///
/// Pinned to `0` when the viewport is narrower than a block or its width
/// is not a finite number.
pub fn random_left<R: Rng>(rng: &mut R, viewport_width: f64, block_width: f64) -> f64 {
    let span = viewport_width - block_width;
    if span.is_finite() && span > 0.0 {
        rng.gen_range(0.0..=span)
    } else {
        0.0
    }
}

/// Uniform duration within `range`, inclusive on both ends.
pub fn random_duration<R: Rng>(rng: &mut R, range: &RangeInclusive<Duration>) -> Duration {
    let (lo, hi) = (*range.start(), *range.end());
    if lo >= hi {
        return lo;
    }
    let secs = rng.gen_range(lo.as_secs_f64()..=hi.as_secs_f64());
    Duration::from_secs_f64(secs).clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_block_href() {
        let block = Block::new(
            BlockId(3),
            0,
            Artist::new(1, "Abba", "a.png"),
            10.0,
            Duration::from_secs(6),
        );
        assert_eq!(block.href, "/artist?id=1");
    }

    #[test]
    fn test_pick_artist_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_artist(&mut rng, &[]).is_none());
    }

    #[test]
    fn test_pick_artist_from_list() {
        let mut rng = StdRng::seed_from_u64(1);
        let list = vec![Artist::new(1, "Abba", ""), Artist::new(2, "Queen", "")];
        for _ in 0..50 {
            let picked = pick_artist(&mut rng, &list).unwrap();
            assert!(list.contains(picked));
        }
    }

    #[test]
    fn test_random_left_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..500 {
            let x = random_left(&mut rng, 1000.0, 120.0);
            assert!((0.0..=880.0).contains(&x));
        }
        assert_eq!(random_left(&mut rng, 100.0, 120.0), 0.0);
    }

    #[test]
    fn test_random_left_non_finite_viewport() {
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(random_left(&mut rng, f64::INFINITY, 120.0), 0.0);
        assert_eq!(random_left(&mut rng, f64::NAN, 120.0), 0.0);
        assert_eq!(random_left(&mut rng, f64::NEG_INFINITY, 120.0), 0.0);
    }

    #[test]
    fn test_random_duration_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let range = Duration::from_secs(5)..=Duration::from_secs(10);
        for _ in 0..500 {
            assert!(range.contains(&random_duration(&mut rng, &range)));
        }

        let zero = Duration::ZERO..=Duration::ZERO;
        assert_eq!(random_duration(&mut rng, &zero), Duration::ZERO);
    }
}
