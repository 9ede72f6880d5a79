#![allow(dead_code)]

use std::fs;

use markplan_core::{
    params::{AddStep, CreatePlan, StepRef},
    Planner, PlannerBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let plan_path = temp_dir.path().join("output").join("plan.md");
    let planner = PlannerBuilder::new()
        .with_plan_path(Some(&plan_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

pub fn plan_text(planner: &Planner) -> String {
    fs::read_to_string(planner.plan_path()).expect("Failed to read plan file")
}

pub fn create(title: &str) -> CreatePlan {
    CreatePlan {
        task_description: title.to_string(),
    }
}

pub fn add(step: &str, title: Option<&str>) -> AddStep {
    AddStep {
        step_description: step.to_string(),
        task_title: title.map(str::to_string),
    }
}

pub fn step(text: &str, title: Option<&str>) -> StepRef {
    StepRef {
        step_text: text.to_string(),
        task_title: title.map(str::to_string),
    }
}
