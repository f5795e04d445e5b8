//! Stages of an EDA run, used for progress logging.

use serde::{Deserialize, Serialize};

/// Stages of the EDA run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdaStage {
    /// Reading the CSV file
    Loading,
    /// Computing and printing the descriptive reports
    Describing,
    /// Computing the data behind each chart
    Charting,
    /// Building and writing the figure page
    Rendering,
    /// Handing the figure to the viewer
    Displaying,
}

impl EdaStage {
    /// All stages in execution order.
    pub const ALL: [EdaStage; 5] = [
        Self::Loading,
        Self::Describing,
        Self::Charting,
        Self::Rendering,
        Self::Displaying,
    ];

    /// Returns a human-readable name for the stage.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Loading => "Loading Dataset",
            Self::Describing => "Describing Columns",
            Self::Charting => "Preparing Charts",
            Self::Rendering => "Rendering Figure",
            Self::Displaying => "Displaying Figure",
        }
    }

    /// One-based position of the stage, for `[n/5]` log prefixes.
    pub fn step(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).map_or(0, |i| i + 1)
    }
}

impl std::fmt::Display for EdaStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}/{}] {}", self.step(), Self::ALL.len(), self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_steps_are_ordered() {
        let steps: Vec<usize> = EdaStage::ALL.iter().map(|s| s.step()).collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(EdaStage::Charting.to_string(), "[3/5] Preparing Charts");
    }

    #[test]
    fn test_stage_serialization() {
        let json = serde_json::to_string(&EdaStage::Displaying).unwrap();
        assert_eq!(json, "\"displaying\"");
    }
}
