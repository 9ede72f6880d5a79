//! Task-level edits.

use std::{path::Path, str::FromStr};

use super::given;
use crate::{
    display::Outcome,
    markdown::{escape_note_line, NOTES_SECTION, STEPS_SECTION},
    models::{CompletionReport, PlanDocument, Priority, Task, TaskLine},
};

impl PlanDocument {
    /// Appends a new task block unless one with this title already exists.
    ///
    /// `path` only appears in the answer.
    pub fn create_task(&mut self, title: &str, created: &str, path: &Path) -> Outcome {
        let path = path.to_path_buf();
        if self.find_task(title).is_some() {
            return Outcome::PlanExists {
                title: title.to_string(),
                path,
            };
        }

        if !self.ends_with_blank() {
            match self.tasks.last_mut() {
                Some(task) => task.ensure_trailing_blank(),
                None => self.preamble.push(String::new()),
            }
        }
        let (bare, priority) = Priority::split_heading_tag(title);
        let mut task = Task::new(bare, created);
        if let Some(priority) = priority {
            task.set_priority(priority);
        }
        self.tasks.push(task);
        self.trailing_newline = true;

        Outcome::PlanCreated {
            title: title.to_string(),
            path,
        }
    }

    /// Replaces the planning notes of a task.
    ///
    /// Lines starting with `#` or `[` are escaped with a backslash so they
    /// stay notes. The section runs up to the next `###` heading. A task without one gets
    /// the section inserted before its steps.
    pub fn update_notes(&mut self, notes: &str, title: Option<&str>) -> Outcome {
        let index = match self.resolve_task(title) {
            Ok(index) => index,
            Err(outcome) => return outcome,
        };
        let task = &mut self.tasks[index];

        let mut body = vec![TaskLine::Text(String::new())];
        body.extend(
            notes
                .trim_end_matches('\n')
                .split('\n')
                .map(|line| TaskLine::Text(escape_note_line(line))),
        );
        body.push(TaskLine::Text(String::new()));

        match task.section(NOTES_SECTION) {
            Some(heading) => {
                let end = task.section_end(heading);
                task.lines.splice(heading + 1..end, body);
            }
            None => {
                let at = match task.section(STEPS_SECTION) {
                    Some(at) => at,
                    None => {
                        task.ensure_trailing_blank();
                        task.lines.len()
                    }
                };
                let section = std::iter::once(TaskLine::Section(NOTES_SECTION.to_string()))
                    .chain(body);
                task.lines.splice(at..at, section);
            }
        }

        Outcome::NotesUpdated {
            title: task.title.clone(),
        }
    }

    /// Counts completed steps of a task.
    pub fn completion(&self, title: Option<&str>) -> Outcome {
        let index = match self.resolve_task(title) {
            Ok(index) => index,
            Err(outcome) => return outcome,
        };
        let task = &self.tasks[index];

        if task.steps().next().is_none() {
            return Outcome::NoSteps {
                title: task.title.clone(),
            };
        }
        Outcome::Completion(CompletionReport::from(task))
    }

    /// Removes a whole task block.
    ///
    /// Blank lines left at the seam collapse to one.
    pub fn delete_task(&mut self, title: &str) -> Outcome {
        let Some(index) = self.find_task(title) else {
            return Outcome::TaskNotFound {
                title: title.to_string(),
            };
        };

        let task = self.tasks.remove(index);
        self.collapse_before(index);

        Outcome::TaskDeleted { title: task.title }
    }

    /// Tags a step, or the task itself when no step is given, with a
    /// priority. Any earlier tag is replaced.
    ///
    /// The priority is checked before anything is looked up.
    pub fn set_priority(
        &mut self,
        priority: &str,
        step: Option<&str>,
        title: Option<&str>,
    ) -> Outcome {
        let Ok(level) = Priority::from_str(priority) else {
            return Outcome::InvalidPriority {
                priority: priority.trim().to_lowercase(),
            };
        };
        let index = match self.resolve_task(title) {
            Ok(index) => index,
            Err(outcome) => return outcome,
        };

        match given(step) {
            Some(step) => {
                let line = match self.resolve_step(index, step) {
                    Ok(line) => line,
                    Err(outcome) => return outcome,
                };
                let task = &mut self.tasks[index];
                let title = task.title.clone();
                let Some(found) = task.step_at_mut(line) else {
                    return Outcome::StepNotFound {
                        step: step.to_string(),
                        title,
                    };
                };
                if found.priority != Some(level) {
                    found.set_priority(level);
                }
                Outcome::StepPriority {
                    priority: level,
                    step: step.to_string(),
                    title,
                }
            }
            None => {
                let task = &mut self.tasks[index];
                if task.priority != Some(level) {
                    task.set_priority(level);
                }
                Outcome::TaskPriority {
                    priority: level,
                    title: task.title.clone(),
                }
            }
        }
    }

    /// The whole plan, or one task block under a review header.
    pub fn review(&self, title: Option<&str>) -> Outcome {
        match given(title) {
            None => Outcome::Plan(self.to_string()),
            Some(title) => match self.task(title) {
                Some(task) => Outcome::TaskReview {
                    title: task.title.clone(),
                    block: task.to_string(),
                },
                None => Outcome::TaskNotFound {
                    title: title.to_string(),
                },
            },
        }
    }

    /// Resource view: the whole plan for an empty title, otherwise one task
    /// block.
    pub fn resource(&self, title: Option<&str>) -> Outcome {
        match given(title) {
            None => Outcome::Plan(self.to_string()),
            Some(title) => match self.task(title) {
                Some(task) => Outcome::TaskResource {
                    title: task.title.clone(),
                    block: task.to_string(),
                },
                None => Outcome::TaskNotFound {
                    title: title.to_string(),
                },
            },
        }
    }
}
