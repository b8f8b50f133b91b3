use crate::{
    SortConfig, TaskFilters, build_view_model, default_plan, dependency_violations,
    ensure_unique_ids,
};

#[test]
fn test_default_plan_has_unique_ids_and_hierarchy() {
    let plan = default_plan();

    assert!(!plan.is_empty());
    assert!(ensure_unique_ids(&plan).is_ok());
    assert!(plan.iter().any(|t| t.parent_id.is_some()));
    assert!(plan.iter().all(|t| t.start <= t.end));
}

#[test]
fn test_default_plan_renders_every_task() {
    let plan = default_plan();

    let rows = build_view_model(&plan, &TaskFilters::default(), &SortConfig::default());

    assert_eq!(rows.len(), plan.len());
}

#[test]
fn test_default_plan_dependencies_all_resolve() {
    let issues = dependency_violations(&default_plan());

    assert!(issues.is_empty(), "{issues:?}");
}
