use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::dataset::Dataset;

/// Source of "today" for the daily puzzle.
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

pub struct AppState {
    pub dataset: Dataset,
    pub settings: Settings,
    pub clock: Clock,
}

impl AppState {
    pub fn new(dataset: Dataset, settings: Settings) -> Arc<Self> {
        Self::with_clock(dataset, settings, Arc::new(|| Local::now().date_naive()))
    }

    pub fn with_clock(dataset: Dataset, settings: Settings, clock: Clock) -> Arc<Self> {
        Arc::new(Self {
            dataset,
            settings,
            clock,
        })
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }
}
