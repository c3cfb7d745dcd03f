use serde::Serialize;

use crate::models::GapAnalysis;

/// Top of the radar axis: high demand.
pub const RADAR_MAX: u8 = 3;
const DATASET_LABEL: &str = "Market Demand Level";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarDataset {
    pub label: &'static str,
    pub data: Vec<u8>,
}

/// Radar chart input: one axis per skill gap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub labels: Vec<String>,
    pub datasets: Vec<RadarDataset>,
    pub max: u8,
}

pub fn radar_chart(analysis: &GapAnalysis) -> RadarChart {
    let (labels, data) = analysis
        .skill_gaps
        .iter()
        .map(|gap| (gap.skill.clone(), gap.market_demand.demand_score()))
        .unzip();

    RadarChart {
        labels,
        datasets: vec![RadarDataset {
            label: DATASET_LABEL,
            data,
        }],
        max: RADAR_MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::{gap_analysis, CareerField};

    #[test]
    fn test_radar_from_fallback_gaps() {
        let chart = radar_chart(&gap_analysis(CareerField::SoftwareEngineering));
        assert_eq!(chart.labels, vec!["React", "Node.js", "MongoDB", "AWS", "Docker"]);
        assert_eq!(chart.datasets[0].label, "Market Demand Level");
        assert!(chart.datasets[0].data.iter().all(|v| (1..=RADAR_MAX).contains(v)));
        assert_eq!(chart.max, 3);
    }

    #[test]
    fn test_empty_analysis_gives_empty_chart() {
        let chart = radar_chart(&GapAnalysis::default());
        assert!(chart.labels.is_empty());
        assert!(chart.datasets[0].data.is_empty());
    }
}
