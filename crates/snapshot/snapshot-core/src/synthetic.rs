//! Synthetic feed source.
//!
//! Stands in for the satellite fire and natural-event APIs. Draws a random
//! but plausible feed on each fetch.

use std::collections::BTreeMap;

use analysis_core::{SeededRandom, ThreadRandom};
use analysis_spi::RandomSource;
use parking_lot::Mutex;
use snapshot_spi::{
    EnvironmentalEvent, EnvironmentalFeed, FireDetection, Result, SnapshotQuery, SnapshotSource,
};

const MIN_FIRES: usize = 20;
const MAX_FIRES: usize = 200;
const MAX_EVENTS: usize = 7;
const MAX_FRP_MW: f64 = 500.0;

const EVENT_CATEGORIES: [(&str, &str); 6] = [
    ("wildfires", "Wildfire"),
    ("floods", "Flooding"),
    ("drought", "Drought"),
    ("severeStorms", "Severe storm"),
    ("volcanoes", "Volcanic activity"),
    ("seaLakeIce", "Sea and lake ice"),
];

const SOURCES: [(&str, &str); 4] = [
    ("modis", "MODIS Terra/Aqua"),
    ("viirs", "VIIRS S-NPP"),
    ("firms", "Fire Information for Resource Management System"),
    ("eonet", "Earth Observatory Natural Event Tracker"),
];

/// Feed source backed by a random generator.
pub struct SyntheticFeedSource {
    rng: Mutex<Box<dyn RandomSource>>,
}

impl SyntheticFeedSource {
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Reproducible source for tests and demos.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(SeededRandom::new(seed)))
    }

    fn draw_feed(rng: &mut dyn RandomSource, query: &SnapshotQuery) -> EnvironmentalFeed {
        let fire_count = pick(rng, MIN_FIRES, MAX_FIRES);
        let active_fires = (0..fire_count)
            .map(|_| FireDetection {
                latitude: rng.next_unit() * 130.0 - 60.0,
                longitude: rng.next_unit() * 360.0 - 180.0,
                confidence: rng.next_unit() * 100.0,
                frp: rng.next_unit() * MAX_FRP_MW,
            })
            .collect();

        let event_count = pick(rng, 0, MAX_EVENTS);
        let environmental_events = (0..event_count)
            .map(|i| {
                let (id, label) = EVENT_CATEGORIES[pick(rng, 0, EVENT_CATEGORIES.len() - 1)];
                EnvironmentalEvent {
                    id: format!("SYN_{}_{i}", query.region.to_uppercase()),
                    title: format!("{label} ({})", query.region),
                    categories: vec![id.to_string()],
                }
            })
            .collect();

        EnvironmentalFeed {
            sources: SOURCES
                .iter()
                .map(|(id, name)| (id.to_string(), name.to_string()))
                .collect::<BTreeMap<_, _>>(),
            active_fires,
            environmental_events,
            temperature_available: rng.next_unit() > 0.2,
        }
    }
}

impl Default for SyntheticFeedSource {
    fn default() -> Self {
        Self::new(Box::new(ThreadRandom::new()))
    }
}

impl SnapshotSource for SyntheticFeedSource {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn fetch(&self, query: &SnapshotQuery) -> Result<EnvironmentalFeed> {
        let mut rng = self.rng.lock();
        Ok(Self::draw_feed(rng.as_mut(), query))
    }
}

/// Uniform integer in `[low, high]`.
fn pick(rng: &mut dyn RandomSource, low: usize, high: usize) -> usize {
    let span = (high - low + 1) as f64;
    low + ((rng.next_unit() * span) as usize).min(high - low)
}
