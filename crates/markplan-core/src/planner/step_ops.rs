//! Step and issue operations for the Planner.

use log::debug;

use super::Planner;
use crate::{
    display::Outcome,
    error::Result,
    params::{AddIssue, AddStep, ResolveIssue, StepRef},
};

impl Planner {
    /// Appends a step to a task (the last task when no title is given).
    pub async fn add_step(&self, params: &AddStep) -> Result<Outcome> {
        params.validate()?;
        let step = params.step_description.clone();
        let title = params.task_title.clone();
        debug!("add_step: {step}");

        self.with_document("add_step", move |doc, _| doc.add_step(&step, title.as_deref()))
            .await
    }

    /// Marks a step complete, keeping its issues and priority.
    pub async fn mark_step_complete(&self, params: &StepRef) -> Result<Outcome> {
        params.validate()?;
        let step = params.step_text.clone();
        let title = params.task_title.clone();

        self.with_document("mark_step_complete", move |doc, _| {
            doc.complete_step(&step, title.as_deref())
        })
        .await
    }

    /// Notes an issue under a step.
    pub async fn add_issue(&self, params: &AddIssue) -> Result<Outcome> {
        params.validate()?;
        let issue = params.issue_description.clone();
        let step = params.step_text.clone();
        let title = params.task_title.clone();

        self.with_document("add_issue", move |doc, _| {
            doc.add_issue(&issue, &step, title.as_deref())
        })
        .await
    }

    /// Resolves every issue of a step with one resolution note.
    pub async fn resolve_issue(&self, params: &ResolveIssue) -> Result<Outcome> {
        params.validate()?;
        let step = params.step_text.clone();
        let resolution = params.resolution_text.clone();
        let title = params.task_title.clone();

        self.with_document("resolve_issue", move |doc, _| {
            doc.resolve_issues(&step, &resolution, title.as_deref())
        })
        .await
    }

    /// Removes a step and its issues.
    pub async fn delete_step(&self, params: &StepRef) -> Result<Outcome> {
        params.validate()?;
        let step = params.step_text.clone();
        let title = params.task_title.clone();
        debug!("delete_step: {step}");

        self.with_document("delete_step", move |doc, _| {
            doc.delete_step(&step, title.as_deref())
        })
        .await
    }
}
