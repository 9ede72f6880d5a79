//! MCP server for markplan
//!
//! Exposes the plan operations and the thought journal as tools, each task
//! as a `plan://` resource, and a `plan` prompt describing the workflow.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use markplan_core::{Planner, ThoughtJournal};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        ListResourcesResult, PaginatedRequestParam, ProtocolVersion, ReadResourceRequestParam,
        ReadResourceResult, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;
pub mod prompts;

pub use handlers::{
    AddIssue, AddStep, CreatePlan, DeleteTask, McpResult, RecordThought, ResolveIssue,
    SetPriority, StepRef, TaskRef, ThoughtQuery, UpdatePlanningNotes,
};

/// MCP server for markplan
#[derive(Clone)]
pub struct MarkplanMcpServer {
    planner: Arc<Planner>,
    journal: Arc<ThoughtJournal>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl MarkplanMcpServer {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
            journal: Arc::new(ThoughtJournal::new()),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(Arc::clone(&self.planner), Arc::clone(&self.journal))
    }

    #[tool(
        name = "think_and_plan",
        description = "🧠 Think through a task and create a structured plan. The task description becomes the task title; a new task gets a Planning Notes section and an empty Steps checklist. Calling it again for an existing task leaves the plan unchanged."
    )]
    async fn think_and_plan(&self, params: Parameters<CreatePlan>) -> McpResult {
        self.handlers().think_and_plan(params).await
    }

    #[tool(
        name = "add_step",
        description = "➕ Add a new step to the plan. The step is appended unchecked to the task's Steps section. task_title defaults to the last task in the plan. A step with the same text in the same task is rejected."
    )]
    async fn add_step(&self, params: Parameters<AddStep>) -> McpResult {
        self.handlers().add_step(params).await
    }

    #[tool(
        name = "mark_step_complete",
        description = "✓ Mark a step as completed in the plan. step_text may be the full step text or a prefix of it; an exact match wins."
    )]
    async fn mark_step_complete(&self, params: Parameters<StepRef>) -> McpResult {
        self.handlers().mark_step_complete(params).await
    }

    #[tool(
        name = "review_plan",
        description = "📖 Review the current plan and return its contents. With task_title, returns only that task; without it, the whole plan file."
    )]
    async fn review_plan(&self, params: Parameters<TaskRef>) -> McpResult {
        self.handlers().review_plan(params).await
    }

    #[tool(
        name = "add_issue",
        description = "⚠️ Add an issue note to a specific step in the plan. The issue is listed under the step until it is resolved."
    )]
    async fn add_issue(&self, params: Parameters<AddIssue>) -> McpResult {
        self.handlers().add_issue(params).await
    }

    #[tool(
        name = "resolve_issue",
        description = "🎯 Mark an issue as resolved for a specific step. Every issue recorded on the step is marked resolved with the given resolution text."
    )]
    async fn resolve_issue(&self, params: Parameters<ResolveIssue>) -> McpResult {
        self.handlers().resolve_issue(params).await
    }

    #[tool(
        name = "update_planning_notes",
        description = "📝 Update the planning notes for a task. Replaces the text of the task's Planning Notes section."
    )]
    async fn update_planning_notes(&self, params: Parameters<UpdatePlanningNotes>) -> McpResult {
        self.handlers().update_planning_notes(params).await
    }

    #[tool(
        name = "check_task_completion",
        description = "🔄 Check if all steps in a task are marked as complete. Reports completed and total counts, the percentage and the remaining steps."
    )]
    async fn check_task_completion(&self, params: Parameters<TaskRef>) -> McpResult {
        self.handlers().check_task_completion(params).await
    }

    #[tool(
        name = "delete_step",
        description = "🗑️ Delete a step from the plan, together with its issue notes."
    )]
    async fn delete_step(&self, params: Parameters<StepRef>) -> McpResult {
        self.handlers().delete_step(params).await
    }

    #[tool(
        name = "delete_task",
        description = "🗑️ Delete an entire task from the plan, including its notes, steps and issues. This cannot be undone."
    )]
    async fn delete_task(&self, params: Parameters<DeleteTask>) -> McpResult {
        self.handlers().delete_task(params).await
    }

    #[tool(
        name = "set_priority",
        description = "🔴 Set priority for a task or step. priority is one of high, medium or low. With step_text the step is tagged; otherwise the task heading is. Any previous priority is replaced."
    )]
    async fn set_priority(&self, params: Parameters<SetPriority>) -> McpResult {
        self.handlers().set_priority(params).await
    }

    #[tool(
        name = "record_thought",
        description = "💭 Record a numbered thought with the plan it leads to and the next action. Thoughts are kept in memory for the lifetime of the server and never change the plan file. Use it when complex reasoning or some cache memory is needed."
    )]
    async fn record_thought(&self, params: Parameters<RecordThought>) -> McpResult {
        self.handlers().record_thought(params).await
    }

    #[tool(
        name = "review_thoughts",
        description = "🗂️ Review recorded thoughts. With thoughtNumber, returns that thought; otherwise a numbered summary of all of them."
    )]
    async fn review_thoughts(&self, params: Parameters<ThoughtQuery>) -> McpResult {
        self.handlers().review_thoughts(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for MarkplanMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "markplan".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"markplan keeps task plans in a single markdown file that people can read and edit by hand.

## Core Concepts
- **Tasks**: `## <title>` sections with Planning Notes and a Steps checklist
- **Steps**: checklist lines, `[ ]` open or `[✅]` complete, optionally tagged with a priority (🔴 high, 🟠 medium, 🟢 low)
- **Issues**: notes under a step, later marked resolved
- **Thoughts**: numbered reasoning notes kept in memory, separate from the plan

## Workflow
1. `think_and_plan` to create a task, then `update_planning_notes`
2. `add_step` for each unit of work; `set_priority` where order matters
3. `mark_step_complete` as work is done; `add_issue` and `resolve_issue` for problems
4. `check_task_completion` and `review_plan` to see progress

Tools taking `task_title` use the last task in the plan when it is omitted. Steps can be named by a prefix of their text.

## Resources
- `plan://all`: the whole plan file
- `plan://<task title>`: a single task, title percent-encoded (`%61ll` for a task named `all`)"#.to_string()),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        self.handlers().list_resources().await
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.handlers().read_resource(request).await
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(self.handlers().list_prompts())
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.handlers().get_prompt(&request)
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: MarkplanMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!(
        "Starting markplan MCP server on stdio with plan file {}",
        server.planner.plan_path().display()
    );
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_server_registers_every_tool() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let planner = markplan_core::PlannerBuilder::new()
            .with_plan_path(Some(temp_dir.path().join("plan.md")))
            .build()
            .await
            .unwrap();
        let server = MarkplanMcpServer::new(planner);

        let mut names: Vec<_> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();

        assert_eq!(
            names,
            [
                "add_issue",
                "add_step",
                "check_task_completion",
                "delete_step",
                "delete_task",
                "mark_step_complete",
                "record_thought",
                "resolve_issue",
                "review_plan",
                "review_thoughts",
                "set_priority",
                "think_and_plan",
                "update_planning_notes",
            ]
        );
    }

    #[tokio::test]
    async fn test_server_info_enables_resources() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let planner = markplan_core::PlannerBuilder::new()
            .with_plan_path(Some(temp_dir.path().join("plan.md")))
            .build()
            .await
            .unwrap();
        let info = MarkplanMcpServer::new(planner).get_info();

        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.tools.is_some());
        assert_eq!(info.server_info.name, "markplan");
    }
}
