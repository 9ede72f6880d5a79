mod common;

use std::{fs, sync::Arc};

use common::{add, create, create_test_planner, plan_text, step};
use futures::future::join_all;
use markplan_core::{
    markdown::{parse, render},
    params::{AddIssue, DeleteTask, RecordThought, ResolveIssue, SetPriority, TaskRef, UpdatePlanningNotes},
    Outcome, PlannerError, ThoughtJournal,
};

fn title(t: &str) -> TaskRef {
    TaskRef {
        task_title: Some(t.to_string()),
    }
}

#[tokio::test]
async fn test_creation_is_idempotent() {
    let (_temp_dir, planner) = create_test_planner().await;

    let first = planner.create_plan(&create("Build X")).await.unwrap();
    assert!(first
        .to_string()
        .starts_with("Created new plan for 'Build X' in '"));
    let after_first = plan_text(&planner);

    let second = planner.create_plan(&create("Build X")).await.unwrap();
    assert!(second
        .to_string()
        .starts_with("A plan for 'Build X' already exists in '"));
    assert_eq!(plan_text(&planner), after_first);
    assert_eq!(after_first.matches("## Build X").count(), 1);
}

#[tokio::test]
async fn test_step_lifecycle() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner.create_plan(&create("T")).await.unwrap();

    let added = planner.add_step(&add("s", Some("T"))).await.unwrap();
    assert_eq!(added.to_string(), "Added step 's' to task 'T'.");
    assert!(plan_text(&planner).contains("[ ] s\n"));

    let done = planner.mark_step_complete(&step("s", Some("T"))).await.unwrap();
    assert_eq!(done.to_string(), "Marked step 's' as complete in task 'T'.");
    let text = plan_text(&planner);
    assert!(text.contains("[✅] s\n"));
    assert!(!text.contains("[ ] s"));

    // completing twice is not an error
    let again = planner.mark_step_complete(&step("s", Some("T"))).await.unwrap();
    assert!(again.is_success());
}

#[tokio::test]
async fn test_issue_round_trip() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner.create_plan(&create("T")).await.unwrap();
    planner.add_step(&add("s", None)).await.unwrap();

    let before = plan_text(&planner);
    let none = planner
        .resolve_issue(&ResolveIssue {
            step_text: "s".to_string(),
            resolution_text: "done".to_string(),
            task_title: None,
        })
        .await
        .unwrap();
    assert_eq!(none.to_string(), "No issues found for step 's' in task 'T'.");
    assert_eq!(plan_text(&planner), before);

    let added = planner
        .add_issue(&AddIssue {
            issue_description: "flaky".to_string(),
            step_text: "s".to_string(),
            task_title: None,
        })
        .await
        .unwrap();
    assert_eq!(added.to_string(), "Added issue 'flaky' to step 's' in task 'T'.");
    assert!(plan_text(&planner).contains("[ ] s\n    - ⚠️ ISSUE: flaky\n"));

    let resolved = planner
        .resolve_issue(&ResolveIssue {
            step_text: "s".to_string(),
            resolution_text: "retried".to_string(),
            task_title: None,
        })
        .await
        .unwrap();
    assert_eq!(
        resolved.to_string(),
        "Marked issues as resolved in step 's' for task 'T'."
    );
    assert!(plan_text(&planner).contains("    - ⚠️ ISSUE: flaky (✓ RESOLVED: retried)\n"));
}

#[tokio::test]
async fn test_completion_accounting() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner.create_plan(&create("T")).await.unwrap();

    let empty = planner.check_task_completion(&title("T")).await.unwrap();
    assert_eq!(empty.to_string(), "No steps found for task 'T'.");

    planner.add_step(&add("a", None)).await.unwrap();
    planner.add_step(&add("b", None)).await.unwrap();
    planner.mark_step_complete(&step("a", None)).await.unwrap();

    let report = planner.check_task_completion(&title("T")).await.unwrap();
    assert_eq!(
        report.to_string(),
        "Task 'T' completion status: \n- 1 of 2 steps completed (50.0%)\n\nRemaining steps:\n- b\n"
    );
}

#[tokio::test]
async fn test_priority_validation_and_replacement() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner.create_plan(&create("T")).await.unwrap();
    planner.add_step(&add("s", None)).await.unwrap();
    let before = plan_text(&planner);

    let invalid = planner
        .set_priority(&SetPriority {
            priority: "urgent".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(
        invalid.to_string(),
        "Invalid priority 'urgent'. Please use one of: high,medium,low."
    );
    assert_eq!(plan_text(&planner), before);

    for level in ["high", "low"] {
        planner
            .set_priority(&SetPriority {
                priority: level.to_string(),
                step_text: Some("s".to_string()),
                task_title: Some("T".to_string()),
            })
            .await
            .unwrap();
    }
    let text = plan_text(&planner);
    assert_eq!(text.matches("🟢").count(), 1);
    assert!(!text.contains("🔴"));
    assert!(text.contains("[ ] 🟢 s\n"));

    let task = planner
        .set_priority(&SetPriority {
            priority: "Medium".to_string(),
            step_text: None,
            task_title: Some("T".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(task.to_string(), "Set priority 'medium' for task 'T'.");
    assert!(plan_text(&planner).contains("## T [🟠]\n"));
}

#[tokio::test]
async fn test_deletion_leaves_clean_seam() {
    let (_temp_dir, planner) = create_test_planner().await;
    for t in ["A", "B", "C"] {
        planner.create_plan(&create(t)).await.unwrap();
        planner.add_step(&add("work", Some(t))).await.unwrap();
    }

    let deleted = planner
        .delete_task(&DeleteTask {
            task_title: "B".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(deleted.to_string(), "Deleted task 'B' from the plan.");

    let text = plan_text(&planner);
    assert!(!text.contains("\n\n\n"));
    assert!(!text.contains("## B"));

    let review = planner.review_plan(&title("B")).await.unwrap();
    assert_eq!(review.to_string(), "Task 'B' not found in the plan.");

    let missing = planner
        .delete_task(&DeleteTask {
            task_title: "B".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(missing, Outcome::TaskNotFound { title: "B".to_string() });
}

#[tokio::test]
async fn test_default_task_is_bottom_most() {
    let (_temp_dir, planner) = create_test_planner().await;

    let none = planner.add_step(&add("x", None)).await.unwrap();
    assert_eq!(
        none.to_string(),
        "No tasks found in the plan. Create a task first using think_and_plan."
    );

    planner.create_plan(&create("A")).await.unwrap();
    planner.create_plan(&create("B")).await.unwrap();
    let added = planner.add_step(&add("x", None)).await.unwrap();
    assert_eq!(added.to_string(), "Added step 'x' to task 'B'.");

    let doc = parse(&plan_text(&planner));
    assert_eq!(doc.task("A").unwrap().steps().count(), 0);
    assert_eq!(doc.task("B").unwrap().steps().count(), 1);
}

#[tokio::test]
async fn test_concurrent_add_step_keeps_every_step() {
    let (_temp_dir, planner) = create_test_planner().await;
    let planner = Arc::new(planner);
    planner.create_plan(&create("T")).await.unwrap();

    let calls = (0..20).map(|i| {
        let planner = Arc::clone(&planner);
        async move { planner.add_step(&add(&format!("step {i}"), Some("T"))).await }
    });
    for result in join_all(calls).await {
        assert!(result.unwrap().is_success());
    }

    let doc = parse(&plan_text(&planner));
    let steps: Vec<_> = doc.task("T").unwrap().steps().map(|s| s.text.clone()).collect();
    assert_eq!(steps.len(), 20);
    for i in 0..20 {
        assert!(steps.contains(&format!("step {i}")));
    }
}

#[tokio::test]
async fn test_hand_edited_plan_survives_edits() {
    let (_temp_dir, planner) = create_test_planner().await;
    let original = "# Task Plan\n\nCreated on: 2025-01-01 09:00:00\n\n## Steps\n\n\
                    ## Legacy [🔴]\n\nCreated: 2025-01-01 09:00:00\n\nSome free text\n\n\
                    ### Planning Notes\n\nOld notes\n\n### Links\n\n- https://example.com\n\n\
                    ### Steps\n\n[x] first\n[ ] second 🟠\n    - ⚠️ ISSUE: odd\n";
    fs::write(planner.plan_path(), original).unwrap();

    // read-only operations never rewrite the file
    planner.review_plan(&TaskRef::default()).await.unwrap();
    planner.check_task_completion(&TaskRef::default()).await.unwrap();
    assert_eq!(plan_text(&planner), original);
    assert_eq!(render(&parse(original)), original);

    planner
        .update_planning_notes(&UpdatePlanningNotes {
            notes: "New notes".to_string(),
            task_title: Some("Legacy".to_string()),
        })
        .await
        .unwrap();
    planner.mark_step_complete(&step("second", None)).await.unwrap();

    let text = plan_text(&planner);
    assert!(text.contains("Some free text\n"));
    assert!(text.contains("### Planning Notes\n\nNew notes\n\n### Links\n\n- https://example.com\n"));
    assert!(text.contains("[x] first\n"));
    assert!(text.contains("[✅] 🟠 second\n    - ⚠️ ISSUE: odd\n"));
    assert!(!text.contains("Old notes"));
}

#[tokio::test]
async fn test_resource_views() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner.create_plan(&create("T")).await.unwrap();

    let all = planner.plan_resource(&TaskRef::default()).await.unwrap();
    assert_eq!(all, Outcome::Plan(plan_text(&planner)));

    let one = planner.plan_resource(&title("T")).await.unwrap();
    assert!(one.to_string().starts_with("# Task: T\n\n## T\n"));

    let review = planner.review_plan(&title("T")).await.unwrap();
    assert!(review.to_string().starts_with("# Review of task: 'T'\n\n## T\n"));
}

#[tokio::test]
async fn test_glyph_tagged_names_resolve() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner.create_plan(&create("Foo [🔴]")).await.unwrap();
    planner.create_plan(&create("Foo [🔴]")).await.unwrap();
    assert_eq!(plan_text(&planner).matches("## Foo").count(), 1);

    let review = planner.review_plan(&title("Foo [🔴]")).await.unwrap();
    assert!(review.is_success());

    planner.add_step(&add("🔴 hotfix", None)).await.unwrap();
    let done = planner
        .mark_step_complete(&step("🔴 hotfix", None))
        .await
        .unwrap();
    assert_eq!(
        done.to_string(),
        "Marked step '🔴 hotfix' as complete in task 'Foo'."
    );
    assert!(plan_text(&planner).contains("[✅] 🔴 hotfix\n"));
}

#[tokio::test]
async fn test_multiline_input_cannot_restructure_plan() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner.create_plan(&create("T")).await.unwrap();
    let before = plan_text(&planner);

    match planner.add_step(&add("a\n## Evil", None)).await.unwrap_err() {
        PlannerError::InvalidInput { field, .. } => assert_eq!(field, "step_description"),
        other => panic!("Expected InvalidInput error, got {other:?}"),
    }
    assert_eq!(plan_text(&planner), before);

    planner
        .update_planning_notes(&UpdatePlanningNotes {
            notes: "## Summary\nship it".to_string(),
            task_title: None,
        })
        .await
        .unwrap();
    let doc = parse(&plan_text(&planner));
    assert_eq!(doc.titles().collect::<Vec<_>>(), ["T"]);

    let added = planner.add_step(&add("next", None)).await.unwrap();
    assert_eq!(added.to_string(), "Added step 'next' to task 'T'.");
}

#[tokio::test]
async fn test_step_delete_leaves_clean_seam() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner.create_plan(&create("A")).await.unwrap();
    planner.create_plan(&create("B")).await.unwrap();
    planner.add_step(&add("only", Some("A"))).await.unwrap();

    planner.delete_step(&step("only", Some("A"))).await.unwrap();
    let text = plan_text(&planner);
    assert!(!text.contains("\n\n\n"));
    assert!(text.contains("### Steps\n\n## B\n"));
}

#[test]
fn test_journal_numbering_and_export() {
    let journal = ThoughtJournal::new();
    for n in 1..=3 {
        let receipt = journal
            .record(&RecordThought {
                thought: format!("thought {n}"),
                plan: "1. plan".to_string(),
                action: "1. act".to_string(),
                thought_number: n.to_string(),
            })
            .unwrap();
        assert_eq!(receipt.count, n);
    }

    assert_eq!(journal.get("2").unwrap().thought, "thought 2");

    let json: serde_json::Value = serde_json::from_str(&journal.to_json().unwrap()).unwrap();
    let numbers: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["thoughtNumber"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(numbers, ["1", "2", "3"]);
}
