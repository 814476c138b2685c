//! Presentation helpers shared by statement views.
//!
//! - `status_badge` - Tone lookup for workflow status badges
//! - `access_gate` - Service line access gating
//! - `calculation` - Calculation breakdown formatting
//! - `extraction` - Document extraction confidence

pub mod access_gate;
pub mod calculation;
pub mod extraction;
pub mod status_badge;

pub use access_gate::{AccessRequest, AccessResolver, AccessState, GateOutcome, ServiceLineGate};
pub use calculation::CalculationDetails;
pub use extraction::{ConfidenceLevel, ExtractedData};
pub use status_badge::{BadgeKind, BadgeTone, badge_tone};
