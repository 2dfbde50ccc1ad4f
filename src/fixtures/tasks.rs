//! Task write phase
//!
//! Six fixed task templates per owner, covering the status spectrum:
//! completed, active, and failed tasks with varying difficulty and
//! importance. Document ids derive from the template position and a
//! truncated owner uid, so each slot upserts in place across runs.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use super::{short_uid, Difficulty, Importance, TaskStatus, TASKS_COLLECTION};
use crate::store::{DocumentStore, FieldValue, Fields};
use crate::types::Result;

/// Owner level snapshot recorded on seeded tasks
pub const DEFAULT_OWNER_LEVEL: i64 = 4;

struct TaskTemplate {
    name: &'static str,
    difficulty: Difficulty,
    importance: Importance,
    status: TaskStatus,
    completed: bool,
    day_offset: i64,
}

const TASK_TEMPLATES: [TaskTemplate; 6] = [
    TaskTemplate {
        name: "Jutarnje istezanje",
        difficulty: Difficulty::VeryEasy,
        importance: Importance::Normal,
        status: TaskStatus::Completed,
        completed: true,
        day_offset: 1,
    },
    TaskTemplate {
        name: "30 min ucenje",
        difficulty: Difficulty::Easy,
        importance: Importance::Important,
        status: TaskStatus::Active,
        completed: false,
        day_offset: 0,
    },
    TaskTemplate {
        name: "Trening snage",
        difficulty: Difficulty::Hard,
        importance: Importance::VeryImportant,
        status: TaskStatus::Completed,
        completed: true,
        day_offset: 2,
    },
    TaskTemplate {
        name: "Planiranje dana",
        difficulty: Difficulty::VeryEasy,
        importance: Importance::Normal,
        status: TaskStatus::Failed,
        completed: false,
        day_offset: 0,
    },
    TaskTemplate {
        name: "Specijalni projekat",
        difficulty: Difficulty::Extreme,
        importance: Importance::Special,
        status: TaskStatus::Active,
        completed: false,
        day_offset: 0,
    },
    TaskTemplate {
        name: "Citanje knjige",
        difficulty: Difficulty::Easy,
        importance: Importance::Important,
        status: TaskStatus::Completed,
        completed: true,
        day_offset: 1,
    },
];

/// Seed the six fixed tasks for one owner
pub async fn seed_tasks(
    store: &dyn DocumentStore,
    owner_uid: &str,
    owner_level: i64,
    now: DateTime<Utc>,
) -> Result<()> {
    for (index, template) in TASK_TEMPLATES.iter().enumerate() {
        let idx = index as i64 + 1;
        let due_date = now + Duration::days(1 - template.day_offset);
        let created_at = now - Duration::days(3 + idx);
        let completed_at = template
            .completed
            .then(|| now - Duration::hours(idx * 4));
        let doc_id = format!("seed_task_{idx:03}_{}", short_uid(owner_uid));

        let fields = Fields::new()
            .set("id", doc_id.as_str())
            .set("userId", owner_uid)
            .set("name", template.name)
            .set("description", format!("Seed zadatak #{idx} za testiranje."))
            .set("categoryId", "health")
            .set("difficulty", template.difficulty.as_str())
            .set("importance", template.importance.as_str())
            .set("difficultyXp", 3 + idx)
            .set("importanceXp", 2 + idx)
            .set("totalXp", 5 + idx * 2)
            .set("status", template.status.as_str())
            .set("completed", template.completed)
            .set("isRecurring", false)
            .set("repeatInterval", 0)
            .set("repeatUnit", FieldValue::Null)
            .set("dueDate", due_date.timestamp_millis())
            .set("endDate", (due_date + Duration::days(2)).timestamp_millis())
            .set("createdAt", created_at.timestamp_millis())
            .set("completedDate", completed_at.map(|t| t.timestamp_millis()))
            .set("userLevelAtCreation", owner_level)
            .set("countsTowardQuota", true);

        store.upsert(TASKS_COLLECTION, &doc_id, fields).await?;
        debug!(task = %doc_id, status = template.status.as_str(), "Task upserted");
    }

    Ok(())
}
