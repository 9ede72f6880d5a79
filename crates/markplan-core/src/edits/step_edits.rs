//! Step and issue edits.

use crate::{
    display::Outcome,
    markdown::STEPS_SECTION,
    models::{Issue, PlanDocument, Priority, Step, TaskLine},
};

impl PlanDocument {
    /// Appends an incomplete step to a task.
    ///
    /// The step goes after the last existing step, or at the top of the steps
    /// section, which is created when missing. A step with the same text is
    /// rejected.
    pub fn add_step(&mut self, text: &str, title: Option<&str>) -> Outcome {
        let index = match self.resolve_task(title) {
            Ok(index) => index,
            Err(outcome) => return outcome,
        };
        let followed = self.is_followed(index);
        let task = &mut self.tasks[index];

        let (bare, _) = Priority::split_step_tag(text);
        if task.steps().any(|step| step.text == text || step.text == bare) {
            return Outcome::StepExists {
                step: text.to_string(),
                title: task.title.clone(),
            };
        }

        let last_step = task
            .lines
            .iter()
            .rposition(|line| matches!(line, TaskLine::Step(_)));
        let at = match (last_step, task.section(STEPS_SECTION)) {
            (Some(last), _) => last + 1,
            (None, Some(heading)) => {
                let below = heading + 1;
                match task.lines.get(below) {
                    Some(TaskLine::Text(line)) if line.trim().is_empty() => below + 1,
                    _ => below,
                }
            }
            (None, None) => {
                task.ensure_trailing_blank();
                task.lines.push(TaskLine::Section(STEPS_SECTION.to_string()));
                task.lines.push(TaskLine::Text(String::new()));
                task.lines.len()
            }
        };
        task.lines.insert(at, TaskLine::Step(Step::new(text)));

        if followed {
            task.ensure_trailing_blank();
        }

        Outcome::StepAdded {
            step: text.to_string(),
            title: task.title.clone(),
        }
    }

    /// Marks a step complete. Completing a finished step again is fine.
    pub fn complete_step(&mut self, text: &str, title: Option<&str>) -> Outcome {
        self.edit_step(text, title, |step, title| {
            if !step.is_complete() {
                step.complete();
            }
            Outcome::StepCompleted {
                step: text.to_string(),
                title,
            }
        })
    }

    /// Notes an open issue under a step.
    pub fn add_issue(&mut self, issue: &str, text: &str, title: Option<&str>) -> Outcome {
        self.edit_step(text, title, |step, title| {
            step.issues.push(Issue::new(issue));
            Outcome::IssueAdded {
                issue: issue.to_string(),
                step: text.to_string(),
                title,
            }
        })
    }

    /// Resolves every issue of a step with the same note.
    pub fn resolve_issues(&mut self, text: &str, resolution: &str, title: Option<&str>) -> Outcome {
        self.edit_step(text, title, |step, title| {
            if step.issues.is_empty() {
                return Outcome::NoIssues {
                    step: text.to_string(),
                    title,
                };
            }
            for issue in &mut step.issues {
                issue.resolve(resolution);
            }
            Outcome::IssuesResolved {
                step: text.to_string(),
                title,
            }
        })
    }

    /// Removes a step together with its issues.
    pub fn delete_step(&mut self, text: &str, title: Option<&str>) -> Outcome {
        let index = match self.resolve_task(title) {
            Ok(index) => index,
            Err(outcome) => return outcome,
        };
        let line = match self.resolve_step(index, text) {
            Ok(line) => line,
            Err(outcome) => return outcome,
        };

        let task = &mut self.tasks[index];
        task.lines.remove(line);
        // A step between two blank lines leaves them adjacent.
        let seam = line > 0
            && task.lines.get(line - 1).is_some_and(TaskLine::is_blank)
            && task.lines.get(line).is_some_and(TaskLine::is_blank);
        if seam {
            task.lines.remove(line);
        }
        task.collapse_trailing_blanks();

        Outcome::StepDeleted {
            step: text.to_string(),
            title: task.title.clone(),
        }
    }

    /// Resolves task and step and applies `edit`, which also receives the
    /// task title.
    fn edit_step<F>(&mut self, text: &str, title: Option<&str>, edit: F) -> Outcome
    where
        F: FnOnce(&mut Step, String) -> Outcome,
    {
        let index = match self.resolve_task(title) {
            Ok(index) => index,
            Err(outcome) => return outcome,
        };
        let line = match self.resolve_step(index, text) {
            Ok(line) => line,
            Err(outcome) => return outcome,
        };

        let task = &mut self.tasks[index];
        let task_title = task.title.clone();
        match task.step_at_mut(line) {
            Some(step) => edit(step, task_title),
            None => Outcome::StepNotFound {
                step: text.to_string(),
                title: task_title,
            },
        }
    }
}
