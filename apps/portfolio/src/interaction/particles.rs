//! Timed snowflake emission for the falling-snow hero.
//!
//! A fixed-interval emitter appends one flake per tick; each flake removes itself
//! once its fall lifetime has elapsed. Time is supplied by the caller through
//! [`SnowField::advance`], and randomness by an injected RNG, so a seeded field
//! always produces the same flakes.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::interaction::Teardown;

pub const DEFAULT_EMIT_INTERVAL: Duration = Duration::from_millis(150);

const SIZES: [u32; 4] = [12, 16, 20, 24];
const OPACITIES: [f32; 5] = [0.6, 0.7, 0.8, 0.9, 1.0];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snowflake {
    pub id: u64,
    /// Horizontal start position, percent of container width (0–100).
    pub x: f32,
    /// Pixel size of the glyph.
    pub size: u32,
    pub opacity: f32,
    pub color: &'static str,
    /// Horizontal drift over the fall, in percent (±25).
    pub drift: f32,
    /// Fall duration in seconds (8–12).
    pub lifetime_secs: f32,
    #[serde(skip)]
    born_at: Duration,
}

impl Snowflake {
    fn expires_at(&self) -> Duration {
        self.born_at + Duration::from_secs_f32(self.lifetime_secs)
    }

    /// Seconds since emission at `now`.
    pub fn age_secs(&self, now: Duration) -> f32 {
        now.saturating_sub(self.born_at).as_secs_f32()
    }
}

/// The live set of falling flakes for one hero instance.
#[derive(Debug)]
pub struct SnowField<R: Rng> {
    rng: R,
    colors: [&'static str; 6],
    interval: Duration,
    clock: Duration,
    since_emit: Duration,
    next_id: u64,
    flakes: Vec<Snowflake>,
    running: bool,
}

impl<R: Rng> SnowField<R> {
    pub fn new(rng: R, colors: [&'static str; 6], interval: Duration) -> Self {
        SnowField {
            rng,
            colors,
            // A zero interval would emit forever in one advance.
            interval: interval.max(Duration::from_millis(1)),
            clock: Duration::ZERO,
            since_emit: Duration::ZERO,
            next_id: 0,
            flakes: Vec::new(),
            running: true,
        }
    }

    /// Moves the field's clock forward: emits every flake due in the window and
    /// drops those whose fall has completed.
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.running {
            return;
        }
        self.clock += elapsed;
        self.since_emit += elapsed;
        while self.since_emit >= self.interval {
            self.since_emit -= self.interval;
            let born_at = self.clock - self.since_emit;
            self.emit(born_at);
        }
        let now = self.clock;
        self.flakes.retain(|f| f.expires_at() > now);
    }

    fn emit(&mut self, born_at: Duration) {
        let flake = Snowflake {
            id: self.next_id,
            x: self.rng.gen_range(0.0..100.0),
            size: *SIZES.choose(&mut self.rng).unwrap_or(&SIZES[0]),
            opacity: *OPACITIES.choose(&mut self.rng).unwrap_or(&OPACITIES[0]),
            color: self.colors.choose(&mut self.rng).copied().unwrap_or("#FFFFFF"),
            drift: (self.rng.gen::<f32>() - 0.5) * 50.0,
            lifetime_secs: 8.0 + self.rng.gen::<f32>() * 4.0,
            born_at,
        };
        self.next_id += 1;
        self.flakes.push(flake);
    }

    /// A flake's animation completed. Removing an absent id is a no-op. In the
    /// served page the inline script does this on `animationend`.
    #[allow(dead_code)]
    pub fn remove(&mut self, id: u64) {
        self.flakes.retain(|f| f.id != id);
    }

    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }

    pub fn now(&self) -> Duration {
        self.clock
    }
}

impl<R: Rng> Teardown for SnowField<R> {
    fn teardown(&mut self) {
        self.running = false;
        self.flakes.clear();
    }

    fn is_torn_down(&self) -> bool {
        !self.running
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const COLORS: [&str; 6] = ["#1", "#2", "#3", "#4", "#5", "#6"];

    fn field(seed: u64) -> SnowField<StdRng> {
        SnowField::new(StdRng::seed_from_u64(seed), COLORS, DEFAULT_EMIT_INTERVAL)
    }

    #[test]
    fn test_emits_one_flake_per_interval() {
        let mut f = field(1);
        f.advance(Duration::from_millis(149));
        assert!(f.flakes().is_empty());
        f.advance(Duration::from_millis(1));
        assert_eq!(f.flakes().len(), 1);
        f.advance(Duration::from_millis(450));
        assert_eq!(f.flakes().len(), 4);
    }

    #[test]
    fn test_flake_attributes_in_range() {
        let mut f = field(7);
        f.advance(Duration::from_secs(3));
        assert_eq!(f.flakes().len(), 20);
        for flake in f.flakes() {
            assert!((0.0..100.0).contains(&flake.x));
            assert!(SIZES.contains(&flake.size));
            assert!(OPACITIES.contains(&flake.opacity));
            assert!(COLORS.contains(&flake.color));
            assert!((-25.0..=25.0).contains(&flake.drift));
            assert!((8.0..=12.0).contains(&flake.lifetime_secs));
        }
    }

    #[test]
    fn test_flakes_expire_after_lifetime() {
        let mut f = field(3);
        f.advance(Duration::from_millis(150));
        let first = f.flakes()[0].id;
        // Lifetimes are at most 12s; run well past that.
        for _ in 0..130 {
            f.advance(Duration::from_millis(100));
        }
        assert!(f.flakes().iter().all(|fl| fl.id != first));
        // Steady state stays bounded: at most 12s worth of emissions alive.
        assert!(f.flakes().len() <= 80);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut f = field(2);
        f.advance(Duration::from_millis(300));
        let id = f.flakes()[0].id;
        f.remove(id);
        f.remove(id);
        f.remove(999);
        assert_eq!(f.flakes().len(), 1);
    }

    #[test]
    fn test_same_seed_same_flakes() {
        let mut a = field(42);
        let mut b = field(42);
        a.advance(Duration::from_secs(2));
        b.advance(Duration::from_secs(2));
        assert_eq!(a.flakes(), b.flakes());
    }

    #[test]
    fn test_teardown_stops_emission() {
        let mut f = field(5);
        f.advance(Duration::from_secs(1));
        f.teardown();
        assert!(f.flakes().is_empty());
        f.advance(Duration::from_secs(1));
        assert!(f.flakes().is_empty());
        assert!(f.is_torn_down());
    }
}
