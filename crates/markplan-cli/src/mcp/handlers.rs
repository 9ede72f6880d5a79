//! MCP tool, resource and prompt handlers

use std::sync::Arc;

use log::debug;
use markplan_core::{params as core, Outcome, Planner, ThoughtJournal};
use rmcp::{
    handler::server::tool::Parameters,
    model::{
        AnnotateAble, CallToolResult, Content, GetPromptRequestParam, GetPromptResult,
        ListPromptsResult, ListResourcesResult, Prompt, PromptArgument, PromptMessage,
        PromptMessageContent, PromptMessageRole, RawResource, ReadResourceRequestParam,
        ReadResourceResult, ResourceContents,
    },
    ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::{errors::to_mcp_error, prompts::prompt_templates};

/// URI scheme of plan resources: `plan://all` or `plan://<task title>`,
/// the title percent-encoded
pub const RESOURCE_SCHEME: &str = "plan://";
pub const ALL_TASKS: &str = "all";

/// Resource URI of one task. A task literally named `all` gets an escaped
/// first letter so it stays apart from the whole-plan resource.
fn task_uri(title: &str) -> String {
    let encoded = urlencoding::encode(title);
    if encoded == ALL_TASKS {
        format!("{RESOURCE_SCHEME}%61ll")
    } else {
        format!("{RESOURCE_SCHEME}{encoded}")
    }
}

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// Core parameter types stay free of MCP concerns. The transparent wrapper
// passes (de)serialization straight through to the core type and forwards
// its JSON schema, so tool arguments keep the core field names.

/// Generic MCP wrapper for core parameter types
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type CreatePlan = McpParams<core::CreatePlan>;
pub type TaskRef = McpParams<core::TaskRef>;
pub type DeleteTask = McpParams<core::DeleteTask>;
pub type AddStep = McpParams<core::AddStep>;
pub type StepRef = McpParams<core::StepRef>;
pub type AddIssue = McpParams<core::AddIssue>;
pub type ResolveIssue = McpParams<core::ResolveIssue>;
pub type UpdatePlanningNotes = McpParams<core::UpdatePlanningNotes>;
pub type SetPriority = McpParams<core::SetPriority>;
pub type RecordThought = McpParams<core::RecordThought>;
pub type ThoughtQuery = McpParams<core::ThoughtQuery>;

pub type McpResult = Result<CallToolResult, McpError>;

fn text_result(text: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text.into())]))
}

/// Outcomes are reported as text, including not-found answers.
fn outcome_result(outcome: &Outcome) -> McpResult {
    text_result(outcome.to_string())
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Planner>,
    journal: Arc<ThoughtJournal>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Planner>, journal: Arc<ThoughtJournal>) -> Self {
        Self { planner, journal }
    }

    pub async fn think_and_plan(&self, Parameters(params): Parameters<CreatePlan>) -> McpResult {
        debug!("think_and_plan: {params:?}");

        let outcome = self
            .planner
            .create_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create plan", &e))?;
        outcome_result(&outcome)
    }

    pub async fn add_step(&self, Parameters(params): Parameters<AddStep>) -> McpResult {
        debug!("add_step: {params:?}");

        let outcome = self
            .planner
            .add_step(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add step", &e))?;
        outcome_result(&outcome)
    }

    pub async fn mark_step_complete(&self, Parameters(params): Parameters<StepRef>) -> McpResult {
        debug!("mark_step_complete: {params:?}");

        let outcome = self
            .planner
            .mark_step_complete(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to mark step complete", &e))?;
        outcome_result(&outcome)
    }

    pub async fn review_plan(&self, Parameters(params): Parameters<TaskRef>) -> McpResult {
        debug!("review_plan: {params:?}");

        let outcome = self
            .planner
            .review_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to review plan", &e))?;
        outcome_result(&outcome)
    }

    pub async fn add_issue(&self, Parameters(params): Parameters<AddIssue>) -> McpResult {
        debug!("add_issue: {params:?}");

        let outcome = self
            .planner
            .add_issue(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add issue", &e))?;
        outcome_result(&outcome)
    }

    pub async fn resolve_issue(&self, Parameters(params): Parameters<ResolveIssue>) -> McpResult {
        debug!("resolve_issue: {params:?}");

        let outcome = self
            .planner
            .resolve_issue(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to resolve issue", &e))?;
        outcome_result(&outcome)
    }

    pub async fn update_planning_notes(
        &self,
        Parameters(params): Parameters<UpdatePlanningNotes>,
    ) -> McpResult {
        debug!("update_planning_notes: {params:?}");

        let outcome = self
            .planner
            .update_planning_notes(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update planning notes", &e))?;
        outcome_result(&outcome)
    }

    pub async fn check_task_completion(
        &self,
        Parameters(params): Parameters<TaskRef>,
    ) -> McpResult {
        debug!("check_task_completion: {params:?}");

        let outcome = self
            .planner
            .check_task_completion(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to check task completion", &e))?;
        outcome_result(&outcome)
    }

    pub async fn delete_step(&self, Parameters(params): Parameters<StepRef>) -> McpResult {
        debug!("delete_step: {params:?}");

        let outcome = self
            .planner
            .delete_step(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete step", &e))?;
        outcome_result(&outcome)
    }

    pub async fn delete_task(&self, Parameters(params): Parameters<DeleteTask>) -> McpResult {
        debug!("delete_task: {params:?}");

        let outcome = self
            .planner
            .delete_task(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete task", &e))?;
        outcome_result(&outcome)
    }

    pub async fn set_priority(&self, Parameters(params): Parameters<SetPriority>) -> McpResult {
        debug!("set_priority: {params:?}");

        let outcome = self
            .planner
            .set_priority(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to set priority", &e))?;
        outcome_result(&outcome)
    }

    pub async fn record_thought(&self, Parameters(params): Parameters<RecordThought>) -> McpResult {
        debug!("record_thought: {params:?}");

        let receipt = self
            .journal
            .record(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to record thought", &e))?;
        text_result(receipt.to_string())
    }

    pub async fn review_thoughts(&self, Parameters(params): Parameters<ThoughtQuery>) -> McpResult {
        debug!("review_thoughts: {params:?}");

        let number = params
            .as_ref()
            .thought_number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty());

        match number {
            Some(number) => match self.journal.get(number) {
                Some(entry) => text_result(entry.to_string()),
                None => text_result(format!("Thought '{number}' not found.")),
            },
            None => text_result(self.journal.summary()),
        }
    }

    /// `plan://all` plus one resource per task, in document order.
    pub async fn list_resources(&self) -> Result<ListResourcesResult, McpError> {
        debug!("list_resources");

        let titles = self
            .planner
            .task_titles()
            .await
            .map_err(|e| to_mcp_error("Failed to list tasks", &e))?;

        let mut resources = vec![RawResource::new(
            format!("{RESOURCE_SCHEME}{ALL_TASKS}"),
            "Whole plan".to_string(),
        )
        .no_annotation()];
        resources.extend(titles.into_iter().map(|title| {
            RawResource::new(task_uri(&title), format!("Task: {title}")).no_annotation()
        }));

        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
        })
    }

    pub async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
    ) -> Result<ReadResourceResult, McpError> {
        debug!("read_resource: {uri}");

        let unknown = || McpError::resource_not_found(format!("Unknown resource '{uri}'"), None);
        let Some(path) = uri.strip_prefix(RESOURCE_SCHEME) else {
            return Err(unknown());
        };
        let task_title = if path == ALL_TASKS {
            None
        } else {
            let title = urlencoding::decode(path).map_err(|_| unknown())?;
            Some(title.into_owned())
        };

        let outcome = self
            .planner
            .plan_resource(&core::TaskRef { task_title })
            .await
            .map_err(|e| to_mcp_error("Failed to read plan", &e))?;

        if !outcome.is_success() {
            return Err(McpError::resource_not_found(outcome.to_string(), None));
        }

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(outcome.to_string(), uri)],
        })
    }

    pub fn list_prompts(&self) -> ListPromptsResult {
        debug!("list_prompts");

        let prompts = prompt_templates()
            .iter()
            .map(|template| {
                Prompt::new(
                    &template.name,
                    Some(&template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.clone(),
                                description: Some(arg.description.clone()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        ListPromptsResult {
            next_cursor: None,
            prompts,
        }
    }

    /// Get a prompt by name with its arguments applied
    pub fn get_prompt(&self, request: &GetPromptRequestParam) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let templates = prompt_templates();
        let template = templates
            .iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| McpError::invalid_params("Prompt not found", None))?;

        let mut values = Vec::new();
        for arg in &template.arguments {
            let value = request
                .arguments
                .as_ref()
                .and_then(|args| args.get(&arg.name));
            match value.and_then(|v| v.as_str()) {
                Some(text) => values.push((arg.name.as_str(), text)),
                None if value.is_some() => {
                    return Err(McpError::invalid_params(
                        format!("Argument '{}' must be a string", arg.name),
                        None,
                    ));
                }
                None if arg.required => {
                    return Err(McpError::invalid_params(
                        format!("Required argument '{}' is missing", arg.name),
                        None,
                    ));
                }
                None => {}
            }
        }

        Ok(GetPromptResult {
            description: Some(template.description.clone()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(template.apply(values)),
            }],
        })
    }
}
