//! Pipeline module.
//!
//! This module provides the EDA run and its stages.

mod reporter;
mod stage;

pub use reporter::EdaReporter;
pub use stage::EdaStage;
