//! Three-step progress indicator (Upload, Analyze, Results) with the three
//! analysis stages (Extract, Scan, Gap) tracked under Analyze.
//!
//! Legal transitions: pending→active, active→success|warning|error,
//! pending→error. Everything else is a [`ProgressError`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::models::DataSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Upload,
    Analyze,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Extract,
    Scan,
    Gap,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    #[default]
    Pending,
    Active,
    Success,
    Warning,
    Error,
}

impl StepStatus {
    pub fn can_transition_to(self, next: StepStatus) -> bool {
        use StepStatus::*;
        matches!(
            (self, next),
            (Pending, Active) | (Active, Success | Warning | Error) | (Pending, Error)
        )
    }

    /// Success for live data, warning when the fallback stood in.
    pub fn for_source(source: DataSource) -> Self {
        match source {
            DataSource::Live => StepStatus::Success,
            DataSource::Fallback => StepStatus::Warning,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, StepStatus::Success | StepStatus::Warning | StepStatus::Error)
    }
}

macro_rules! lowercase_display {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let name = format!("{self:?}").to_lowercase();
                f.write_str(&name)
            }
        }
    )*};
}

lowercase_display!(Step, Stage, StepStatus);

#[derive(Debug, Error, PartialEq)]
pub enum ProgressError {
    #[error("illegal transition for {item}: {from} -> {to}")]
    IllegalTransition {
        item: String,
        from: StepStatus,
        to: StepStatus,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry<K> {
    pub name: K,
    pub status: StepStatus,
}

/// One recorded transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressEvent {
    pub item: String,
    pub from: StepStatus,
    pub to: StepStatus,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    pub steps: Vec<Entry<Step>>,
    pub stages: Vec<Entry<Stage>>,
    pub trail: Vec<ProgressEvent>,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

fn transition<K>(
    entries: &mut [Entry<K>],
    trail: &mut Vec<ProgressEvent>,
    name: K,
    to: StepStatus,
) -> Result<(), ProgressError>
where
    K: Copy + PartialEq + fmt::Display,
{
    let entry = entries
        .iter_mut()
        .find(|e| e.name == name)
        .ok_or_else(|| ProgressError::IllegalTransition {
            item: name.to_string(),
            from: StepStatus::Pending,
            to,
        })?;

    if !entry.status.can_transition_to(to) {
        return Err(ProgressError::IllegalTransition {
            item: name.to_string(),
            from: entry.status,
            to,
        });
    }

    trail.push(ProgressEvent {
        item: name.to_string(),
        from: entry.status,
        to,
        at: Utc::now(),
    });
    entry.status = to;
    Ok(())
}

impl Progress {
    /// Every step and stage pending.
    pub fn new() -> Self {
        let steps = [Step::Upload, Step::Analyze, Step::Results]
            .into_iter()
            .map(|name| Entry { name, status: StepStatus::Pending })
            .collect();
        let stages = [Stage::Extract, Stage::Scan, Stage::Gap]
            .into_iter()
            .map(|name| Entry { name, status: StepStatus::Pending })
            .collect();
        Self {
            steps,
            stages,
            trail: Vec::new(),
        }
    }

    pub fn set_step(&mut self, step: Step, to: StepStatus) -> Result<(), ProgressError> {
        transition(&mut self.steps, &mut self.trail, step, to)
    }

    pub fn set_stage(&mut self, stage: Stage, to: StepStatus) -> Result<(), ProgressError> {
        transition(&mut self.stages, &mut self.trail, stage, to)
    }

    pub fn step(&self, step: Step) -> StepStatus {
        self.steps
            .iter()
            .find(|e| e.name == step)
            .map(|e| e.status)
            .unwrap_or_default()
    }

    pub fn stage(&self, stage: Stage) -> StepStatus {
        self.stages
            .iter()
            .find(|e| e.name == stage)
            .map(|e| e.status)
            .unwrap_or_default()
    }

    /// Marks a running stage done according to where its data came from.
    pub fn finish_stage(&mut self, stage: Stage, source: DataSource) -> Result<(), ProgressError> {
        self.set_stage(stage, StepStatus::for_source(source))
    }

    /// Warning when any stage fell back, success otherwise.
    pub fn analysis_outcome(&self) -> StepStatus {
        if self.stages.iter().any(|e| e.status == StepStatus::Warning) {
            StepStatus::Warning
        } else {
            StepStatus::Success
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_transitions() {
        use StepStatus::*;
        assert!(Pending.can_transition_to(Active));
        assert!(Pending.can_transition_to(Error));
        assert!(Active.can_transition_to(Success));
        assert!(Active.can_transition_to(Warning));
        assert!(Active.can_transition_to(Error));

        assert!(!Pending.can_transition_to(Success));
        assert!(!Pending.can_transition_to(Warning));
        assert!(!Success.can_transition_to(Active));
        assert!(!Warning.can_transition_to(Error));
        assert!(!Active.can_transition_to(Pending));
        assert!(!Error.can_transition_to(Active));
    }

    #[test]
    fn test_illegal_transition_is_reported() {
        let mut progress = Progress::new();
        let err = progress.set_step(Step::Results, StepStatus::Success).unwrap_err();
        assert_eq!(
            err,
            ProgressError::IllegalTransition {
                item: "results".to_string(),
                from: StepStatus::Pending,
                to: StepStatus::Success,
            }
        );
        assert_eq!(progress.step(Step::Results), StepStatus::Pending);
        assert!(progress.trail.is_empty());
    }

    #[test]
    fn test_fallback_stage_is_a_warning() {
        let mut progress = Progress::new();
        progress.set_stage(Stage::Extract, StepStatus::Active).unwrap();
        progress.finish_stage(Stage::Extract, DataSource::Fallback).unwrap();
        progress.set_stage(Stage::Scan, StepStatus::Active).unwrap();
        progress.finish_stage(Stage::Scan, DataSource::Live).unwrap();

        assert_eq!(progress.stage(Stage::Extract), StepStatus::Warning);
        assert_eq!(progress.stage(Stage::Scan), StepStatus::Success);
        assert_eq!(progress.analysis_outcome(), StepStatus::Warning);
        assert_eq!(progress.trail.len(), 4);
        assert_eq!(progress.trail[1].item, "extract");
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(Progress::new()).unwrap();
        assert_eq!(value["steps"][0]["name"], "upload");
        assert_eq!(value["stages"][2]["name"], "gap");
        assert_eq!(value["stages"][2]["status"], "pending");
    }
}
