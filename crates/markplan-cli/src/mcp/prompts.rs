//! Prompt templates for the MCP server

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: String,
    pub template: String,
    pub arguments: Vec<PromptTemplateArg>,
}

impl PromptTemplate {
    /// Substitute `{name}` placeholders with the given values.
    pub fn apply<'a>(&self, values: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
        values
            .into_iter()
            .fold(self.template.clone(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }

    pub fn required_arguments(&self) -> impl Iterator<Item = &str> {
        self.arguments
            .iter()
            .filter(|arg| arg.required)
            .map(|arg| arg.name.as_str())
    }
}

/// Predefined prompt templates for task planning
pub fn prompt_templates() -> Vec<PromptTemplate> {
    vec![PromptTemplate {
        name: "plan".to_string(),
        description: "Plan and carry out a task with the markplan tools".to_string(),
        template: r#"You are working from a markdown task plan. Use the markplan tools to plan the work below and track it to completion.

# Goal
{goal}

# Step 1: Think
Use `record_thought` to write down your analysis: what the goal needs, the plan as a numbered list, and the next action. Number each thought so you can revisit it with `review_thoughts`.

# Step 2: Create the Task
Call `think_and_plan` with a concise task description (5-7 words). It becomes the task title. Calling it again with the same description is harmless.

# Step 3: Write Planning Notes
Use `update_planning_notes` to record context, approach, scope and risks.

# Step 4: Add Steps
Add one step per unit of work with `add_step`. Start each with an action verb and keep step texts distinct; later calls can name a step by a prefix of its text. Use `set_priority` on steps or the task (high, medium, low) to mark what matters first.

# Step 5: Work Through the Steps
- Call `review_plan` to see the current task.
- After finishing a step, call `mark_step_complete`.
- When something goes wrong, record it with `add_issue`; once fixed, use `resolve_issue` with what you did.
- Remove steps that no longer apply with `delete_step`.

# Step 6: Finish
Call `check_task_completion`. Continue until every step is complete, then summarize the result for the user.

Tools that take `task_title` use the last task in the plan when it is omitted."#
            .to_string(),
        arguments: vec![PromptTemplateArg {
            name: "goal".to_string(),
            description: "What the plan should achieve".to_string(),
            required: true,
        }],
    }]
}
