//! Task-level operations for the Planner.

use log::debug;

use super::Planner;
use crate::{
    display::{LocalDateTime, Outcome},
    error::Result,
    params::{CreatePlan, DeleteTask, SetPriority, TaskRef, UpdatePlanningNotes},
};

impl Planner {
    /// Creates a task plan titled with the task description.
    ///
    /// Creating a plan whose title already exists leaves the file unchanged
    /// and answers [`Outcome::PlanExists`].
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<Outcome> {
        params.validate()?;
        let title = params.task_description.clone();
        debug!("create_plan: {title}");

        self.with_document("create_plan", move |doc, path| {
            doc.create_task(&title, &LocalDateTime::now(), path)
        })
        .await
    }

    /// Returns the whole plan, or one task under a review header.
    pub async fn review_plan(&self, params: &TaskRef) -> Result<Outcome> {
        let title = params.task_title.clone();
        self.with_document("review_plan", move |doc, _| doc.review(title.as_deref()))
            .await
    }

    /// Replaces the planning notes of a task.
    pub async fn update_planning_notes(&self, params: &UpdatePlanningNotes) -> Result<Outcome> {
        params.validate()?;
        let notes = params.notes.clone();
        let title = params.task_title.clone();

        self.with_document("update_planning_notes", move |doc, _| {
            doc.update_notes(&notes, title.as_deref())
        })
        .await
    }

    /// Reports how many steps of a task are complete.
    pub async fn check_task_completion(&self, params: &TaskRef) -> Result<Outcome> {
        let title = params.task_title.clone();
        self.with_document("check_task_completion", move |doc, _| {
            doc.completion(title.as_deref())
        })
        .await
    }

    /// Removes a task block from the plan.
    pub async fn delete_task(&self, params: &DeleteTask) -> Result<Outcome> {
        params.validate()?;
        let title = params.task_title.clone();
        debug!("delete_task: {title}");

        self.with_document("delete_task", move |doc, _| doc.delete_task(&title))
            .await
    }

    /// Tags a task, or one of its steps, with a priority.
    pub async fn set_priority(&self, params: &SetPriority) -> Result<Outcome> {
        params.validate()?;
        let priority = params.priority.clone();
        let step = params.step_text.clone();
        let title = params.task_title.clone();

        self.with_document("set_priority", move |doc, _| {
            doc.set_priority(&priority, step.as_deref(), title.as_deref())
        })
        .await
    }

    /// Resource view of the plan: everything for an empty title, otherwise
    /// one task.
    pub async fn plan_resource(&self, params: &TaskRef) -> Result<Outcome> {
        let title = params.task_title.clone();
        self.with_document("plan_resource", move |doc, _| doc.resource(title.as_deref()))
            .await
    }

    /// Titles of all tasks, in document order.
    pub async fn task_titles(&self) -> Result<Vec<String>> {
        self.with_document("task_titles", |doc, _| {
            doc.titles().map(str::to_string).collect()
        })
        .await
    }
}
