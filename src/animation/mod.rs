//! Frame-cycling sprite animation primitives shared by all entities.
//!
//! A [`FrameSet`] preloads an ordered list of image handles and hands out
//! the next frame on each animation tick. Looping animations wrap via
//! `advance`; one-shot sequences (death, splash) use `advance_once`.

use bevy::prelude::*;

/// An ordered animation frame list with a cycle counter.
pub struct FrameSet {
    frames: Vec<Handle<Image>>,
    cursor: usize,
}

impl FrameSet {
    pub fn new(frames: Vec<Handle<Image>>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Preload a frame list from asset paths.
    pub fn load(asset_server: &AssetServer, paths: &[&str]) -> Self {
        Self::new(paths.iter().map(|p| asset_server.load(*p)).collect())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Select `frames[counter mod len]` and increment the counter.
    ///
    /// Wraps forever; a frame list is expected to hold at least one entry,
    /// an empty list yields a default handle rather than panicking.
    pub fn advance(&mut self) -> Handle<Image> {
        if self.frames.is_empty() {
            return Handle::default();
        }
        let frame = self.frames[self.cursor % self.frames.len()].clone();
        self.cursor += 1;
        frame
    }

    /// Advance without wrapping; `None` once the sequence is exhausted.
    pub fn advance_once(&mut self) -> Option<Handle<Image>> {
        let frame = self.frames.get(self.cursor).cloned()?;
        self.cursor += 1;
        Some(frame)
    }

    /// The first frame, without touching the cycle counter.
    pub fn first(&self) -> Handle<Image> {
        self.frames.first().cloned().unwrap_or_default()
    }

    /// Restart the cycle from the first frame.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

/// Per-entity animation cadence timer.
///
/// Entities animate at different rates (chickens at 100 ms, small chickens
/// at 120 ms, bottle spin at 60 ms), so the cadence lives on the entity
/// rather than in a global run condition.
#[derive(Component)]
pub struct FrameTimer(pub Timer);

impl FrameTimer {
    pub fn from_millis(period: u64) -> Self {
        Self(Timer::new(
            std::time::Duration::from_millis(period),
            TimerMode::Repeating,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(n: usize) -> Vec<Handle<Image>> {
        vec![Handle::default(); n]
    }

    #[test]
    fn advance_wraps_forever() {
        let mut set = FrameSet::new(frames(3));
        for expected in [0, 1, 2, 0, 1, 2, 0] {
            let _ = set.advance();
            // cursor trails one behind, modulo selection happened at `expected`
            assert_eq!((set.cursor() - 1) % 3, expected);
        }
    }

    #[test]
    fn advance_on_empty_set_is_harmless() {
        let mut set = FrameSet::new(frames(0));
        assert_eq!(set.advance(), Handle::default());
        assert_eq!(set.cursor(), 0);
    }

    #[test]
    fn advance_once_exhausts_exactly_once() {
        let mut set = FrameSet::new(frames(3));
        assert!(set.advance_once().is_some());
        assert!(set.advance_once().is_some());
        assert!(set.advance_once().is_some());
        // Exhausted: stays None, never wraps.
        assert!(set.advance_once().is_none());
        assert!(set.advance_once().is_none());
    }

    #[test]
    fn reset_restarts_the_cycle() {
        let mut set = FrameSet::new(frames(2));
        let _ = set.advance();
        let _ = set.advance();
        set.reset();
        assert_eq!(set.cursor(), 0);
    }
}
