use serde::{Deserialize, Serialize};

/// The linear step machine behind the assessment flow. Transitions live in
/// one table here rather than scattered conditionals, so the flow can be
/// tested on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStep {
    Capture,
    Onboarding,
    Questions,
    Results,
}

impl AssessmentStep {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentStep::Capture => "capture",
            AssessmentStep::Onboarding => "onboarding",
            AssessmentStep::Questions => "questions",
            AssessmentStep::Results => "results",
        }
    }

    /// Forward transition. `Results` is terminal.
    pub const fn next(self) -> Option<Self> {
        match self {
            AssessmentStep::Capture => Some(AssessmentStep::Onboarding),
            AssessmentStep::Onboarding => Some(AssessmentStep::Questions),
            AssessmentStep::Questions => Some(AssessmentStep::Results),
            AssessmentStep::Results => None,
        }
    }

    /// Back navigation. The first step has nowhere to go, and results are
    /// immutable once computed.
    pub const fn previous(self) -> Option<Self> {
        match self {
            AssessmentStep::Capture => None,
            AssessmentStep::Onboarding => Some(AssessmentStep::Capture),
            AssessmentStep::Questions => Some(AssessmentStep::Onboarding),
            AssessmentStep::Results => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_transitions_walk_the_full_flow() {
        let mut step = AssessmentStep::Capture;
        let mut visited = vec![step];
        while let Some(next) = step.next() {
            step = next;
            visited.push(step);
        }
        assert_eq!(
            visited,
            vec![
                AssessmentStep::Capture,
                AssessmentStep::Onboarding,
                AssessmentStep::Questions,
                AssessmentStep::Results,
            ]
        );
    }

    #[test]
    fn back_navigation_stops_at_capture_and_results() {
        assert_eq!(AssessmentStep::Capture.previous(), None);
        assert_eq!(AssessmentStep::Results.previous(), None);
        assert_eq!(
            AssessmentStep::Questions.previous(),
            Some(AssessmentStep::Onboarding)
        );
    }

    #[test]
    fn previous_inverts_next_for_interior_steps() {
        for step in [AssessmentStep::Capture, AssessmentStep::Onboarding] {
            let forward = step.next().expect("interior step");
            assert_eq!(forward.previous(), Some(step));
        }
    }
}
