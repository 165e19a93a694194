use crate::domain::Coordinates;

/// Phase of the single geolocation-acquisition session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AcquisitionState {
    Idle,
    Requesting,
    Acquired(Coordinates),
    Failed,
}

/// Per-page session state. Created once on load, torn down with the page.
///
/// The resolved location has a single writer, `record_position`; the payload
/// builder reads it through `resolved_location`. A later failed attempt moves
/// the machine to `Failed` but keeps the last good fix.
#[derive(Debug)]
pub struct App {
    pub acquisition: AcquisitionState,
    resolved: Option<Coordinates>,
}

impl App {
    pub const fn new() -> Self {
        Self {
            acquisition: AcquisitionState::Idle,
            resolved: None,
        }
    }

    /// Starts an acquisition attempt. Returns `false` when one is already
    /// outstanding; only one attempt may be in flight at a time.
    pub fn begin_acquisition(&mut self) -> bool {
        if matches!(self.acquisition, AcquisitionState::Requesting) {
            return false;
        }
        self.acquisition = AcquisitionState::Requesting;
        true
    }

    /// Records a successful fix. Most recent wins.
    pub fn record_position(&mut self, coords: Coordinates) {
        self.acquisition = AcquisitionState::Acquired(coords);
        self.resolved = Some(coords);
    }

    pub fn acquisition_failed(&mut self) {
        self.acquisition = AcquisitionState::Failed;
    }

    pub const fn resolved_location(&self) -> Option<Coordinates> {
        self.resolved
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
