//! Client-side projection of a framework's compliance score.
//!
//! The server reports `compliance_score` and `implementation_progress` with
//! every framework payload and remains the authority for both. After a
//! control status update the console recomputes them locally so the detail
//! view reflects the change immediately, without a re-fetch. The next fetch
//! overwrites the projection with the server's numbers.

use crate::compliance::domain::{Control, ControlGroup, Framework, ImplementationStatus};

/// Weighted score in 0..=100 over applicable controls.
///
/// Implemented counts 1.0, Partially Implemented 0.5, Not Implemented 0.
/// Not Applicable controls are excluded from the denominator. A framework
/// with no applicable controls scores 0.
pub fn project_score(groups: &[ControlGroup]) -> f64 {
    let mut weight = 0.0;
    let mut applicable = 0usize;

    for control in groups.iter().flat_map(|g| g.controls.iter()) {
        match control.status {
            ImplementationStatus::Implemented => {
                weight += 1.0;
                applicable += 1;
            }
            ImplementationStatus::PartiallyImplemented => {
                weight += 0.5;
                applicable += 1;
            }
            ImplementationStatus::NotImplemented => {
                applicable += 1;
            }
            ImplementationStatus::NotApplicable => {}
        }
    }

    if applicable == 0 {
        0.0
    } else {
        weight / applicable as f64 * 100.0
    }
}

/// Share of applicable controls in 0..=100 that have been started
/// (anything other than Not Implemented).
pub fn implementation_progress(groups: &[ControlGroup]) -> f64 {
    let mut started = 0usize;
    let mut applicable = 0usize;

    for control in groups.iter().flat_map(|g| g.controls.iter()) {
        match control.status {
            ImplementationStatus::NotApplicable => {}
            ImplementationStatus::NotImplemented => applicable += 1,
            _ => {
                started += 1;
                applicable += 1;
            }
        }
    }

    if applicable == 0 {
        0.0
    } else {
        started as f64 / applicable as f64 * 100.0
    }
}

/// Replaces the matching control in place and recomputes the projected
/// score and progress. Returns false when the control is not part of the
/// framework, leaving it unchanged.
pub fn apply_control_update(framework: &mut Framework, updated: &Control) -> bool {
    let slot = framework
        .control_groups
        .iter_mut()
        .flat_map(|g| g.controls.iter_mut())
        .find(|c| c.id == updated.id);

    match slot {
        Some(control) => {
            *control = updated.clone();
            framework.compliance_score = project_score(&framework.control_groups);
            framework.implementation_progress = implementation_progress(&framework.control_groups);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn control(status: ImplementationStatus) -> Control {
        Control {
            id: Uuid::new_v4(),
            code: "A.1".to_string(),
            title: "Test control".to_string(),
            status,
            owner: None,
        }
    }

    fn group(statuses: &[ImplementationStatus]) -> ControlGroup {
        ControlGroup {
            id: Uuid::new_v4(),
            name: "Group".to_string(),
            controls: statuses.iter().map(|s| control(*s)).collect(),
        }
    }

    #[test]
    fn test_score_weights_partial_as_half() {
        use ImplementationStatus::*;
        let groups = vec![group(&[Implemented, PartiallyImplemented, NotImplemented])];
        // (1.0 + 0.5 + 0.0) / 3 = 50%
        assert!((project_score(&groups) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_excludes_not_applicable() {
        use ImplementationStatus::*;
        let groups = vec![group(&[Implemented, NotApplicable, NotApplicable])];
        assert!((project_score(&groups) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_with_no_applicable_controls_is_zero() {
        use ImplementationStatus::*;
        assert_eq!(project_score(&[group(&[NotApplicable])]), 0.0);
        assert_eq!(project_score(&[]), 0.0);
    }

    #[test]
    fn test_progress_counts_started_controls() {
        use ImplementationStatus::*;
        let groups = vec![group(&[
            Implemented,
            PartiallyImplemented,
            NotImplemented,
            NotImplemented,
        ])];
        assert!((implementation_progress(&groups) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_apply_control_update_recomputes_projection() {
        use ImplementationStatus::*;
        let mut framework = Framework {
            id: Uuid::new_v4(),
            name: "SOC 2".to_string(),
            description: String::new(),
            control_groups: vec![group(&[NotImplemented, NotImplemented])],
            compliance_score: 0.0,
            implementation_progress: 0.0,
        };

        let mut updated = framework.control_groups[0].controls[0].clone();
        updated.status = Implemented;

        assert!(apply_control_update(&mut framework, &updated));
        assert!((framework.compliance_score - 50.0).abs() < 1e-9);
        assert!((framework.implementation_progress - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_apply_control_update_unknown_control_is_a_no_op() {
        use ImplementationStatus::*;
        let mut framework = Framework {
            id: Uuid::new_v4(),
            name: "SOC 2".to_string(),
            description: String::new(),
            control_groups: vec![group(&[Implemented])],
            compliance_score: 100.0,
            implementation_progress: 100.0,
        };
        let before = framework.clone();

        let foreign = control(NotImplemented);
        assert!(!apply_control_update(&mut framework, &foreign));
        assert_eq!(framework, before);
    }
}
