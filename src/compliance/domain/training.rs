use crate::compliance::domain::Identified;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A training course together with its assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingCourse {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: CourseStatus,
    #[serde(default)]
    pub assignments: Vec<TrainingAssignment>,
}

/// Publication state of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseStatus {
    Draft,
    Active,
    Archived,
}

impl std::fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CourseStatus::Draft => "Draft",
            CourseStatus::Active => "Active",
            CourseStatus::Archived => "Archived",
        };
        write!(f, "{}", label)
    }
}

/// One user's assignment to a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingAssignment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: AssignmentStatus,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Progress state of one assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentStatus {
    Assigned,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Overdue,
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AssignmentStatus::Assigned => "Assigned",
            AssignmentStatus::InProgress => "In Progress",
            AssignmentStatus::Completed => "Completed",
            AssignmentStatus::Overdue => "Overdue",
        };
        write!(f, "{}", label)
    }
}

/// Completion statistics projected from a course's assignments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionStats {
    pub assigned: usize,
    pub completed: usize,
    pub overdue: usize,
}

impl CompletionStats {
    /// Completion rate in 0..=100. Zero assignments count as 0%.
    pub fn rate(&self) -> f64 {
        if self.assigned == 0 {
            0.0
        } else {
            self.completed as f64 / self.assigned as f64 * 100.0
        }
    }
}

impl TrainingCourse {
    pub fn completion_stats(&self) -> CompletionStats {
        CompletionStats {
            assigned: self.assignments.len(),
            completed: self
                .assignments
                .iter()
                .filter(|a| a.status == AssignmentStatus::Completed)
                .count(),
            overdue: self
                .assignments
                .iter()
                .filter(|a| a.status == AssignmentStatus::Overdue)
                .count(),
        }
    }
}

impl Identified for TrainingCourse {
    fn id(&self) -> Uuid {
        self.id
    }
}
