//! Turns contact-pair category masks into game outcomes.

use crate::categories::{self, CategoryMask};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Bird passed through a gap sensor.
    Score,
    /// Bird hit a hazard; the run ends.
    Terminate,
    Ignore,
}

/// Classifies one detected contact.
///
/// Hazard contacts terminate regardless of any other bits present; scoring
/// requires the bird/gap pair and nothing else, so a contact that grazes a
/// pipe while inside the sensor still ends the run.
pub fn resolve(a: CategoryMask, b: CategoryMask) -> ContactOutcome {
    let combined = a | b;
    if combined.contains(categories::BIRD | categories::PIPE)
        || combined.contains(categories::BIRD | categories::GROUND)
    {
        ContactOutcome::Terminate
    } else if combined == categories::BIRD | categories::GAP {
        ContactOutcome::Score
    } else {
        ContactOutcome::Ignore
    }
}
