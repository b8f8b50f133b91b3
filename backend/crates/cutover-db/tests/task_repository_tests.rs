mod common;

use common::{create_test_pool, create_test_task, date};

use cutover_core::{TaskStatus, TaskType, default_plan};
use cutover_db::TaskRepository;

use googletest::prelude::*;

#[tokio::test]
async fn given_task_when_upserted_then_can_be_found_by_id() {
    // Given
    let pool = create_test_pool().await;
    let mut task = create_test_task(1, 1);
    task.dependencies = vec![7, 8];
    task.parent_id = Some(42);
    task.status = TaskStatus::InProgress;
    task.task_type = TaskType::DownstreamIntegration;
    task.is_expanded = false;

    // When
    TaskRepository::upsert(&pool, &task).await.unwrap();

    // Then: every field survives the round trip
    let found = TaskRepository::find_by_id(&pool, 1).await.unwrap();
    assert_that!(found, some(eq(&task)));
}

#[tokio::test]
async fn given_empty_database_when_finding_nonexistent_id_then_returns_none() {
    let pool = create_test_pool().await;

    let result = TaskRepository::find_by_id(&pool, 99).await.unwrap();

    assert_that!(result, none());
}

#[tokio::test]
async fn given_existing_task_when_upserted_again_then_last_write_wins() {
    let pool = create_test_pool().await;
    let task = create_test_task(1, 1);
    TaskRepository::upsert(&pool, &task).await.unwrap();

    let mut changed = task.clone();
    changed.name = "Renamed".to_string();
    changed.end = date(4, 2);
    TaskRepository::upsert(&pool, &changed).await.unwrap();

    let all = TaskRepository::find_all(&pool).await.unwrap();
    assert_that!(all, len(eq(1)));
    assert_that!(all[0].name, eq("Renamed"));
    assert_that!(all[0].end, eq(date(4, 2)));
}

#[tokio::test]
async fn given_tasks_when_listing_then_ordered_by_order_then_id() {
    let pool = create_test_pool().await;
    for task in [
        create_test_task(3, 2),
        create_test_task(2, 1),
        create_test_task(1, 2),
    ] {
        TaskRepository::upsert(&pool, &task).await.unwrap();
    }

    let ids: Vec<i64> = TaskRepository::find_all(&pool)
        .await
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();

    assert_that!(ids, eq(&vec![2, 1, 3]));
}

#[tokio::test]
async fn given_transaction_when_bulk_upserted_then_all_tasks_stored() {
    let pool = create_test_pool().await;
    let plan = default_plan();

    let mut tx = pool.begin().await.unwrap();
    let count = TaskRepository::upsert_many(&mut tx, &plan).await.unwrap();
    tx.commit().await.unwrap();

    assert_that!(count, eq(plan.len()));
    assert_that!(TaskRepository::find_all(&pool).await.unwrap(), eq(&plan));
}

#[tokio::test]
async fn given_rolled_back_transaction_when_listing_then_nothing_stored() {
    let pool = create_test_pool().await;

    let mut tx = pool.begin().await.unwrap();
    TaskRepository::upsert_many(&mut tx, &default_plan())
        .await
        .unwrap();
    tx.rollback().await.unwrap();

    assert_that!(TaskRepository::find_all(&pool).await.unwrap(), is_empty());
}

#[tokio::test]
async fn given_task_when_deleted_then_gone_and_second_delete_reports_false() {
    let pool = create_test_pool().await;
    TaskRepository::upsert(&pool, &create_test_task(1, 1))
        .await
        .unwrap();

    assert_that!(TaskRepository::delete(&pool, 1).await.unwrap(), eq(true));
    assert_that!(TaskRepository::delete(&pool, 1).await.unwrap(), eq(false));
}

#[tokio::test]
async fn given_ids_when_deleted_many_then_only_existing_counted() {
    let pool = create_test_pool().await;
    for id in 1..=3 {
        TaskRepository::upsert(&pool, &create_test_task(id, id))
            .await
            .unwrap();
    }

    let mut conn = pool.acquire().await.unwrap();
    let deleted = TaskRepository::delete_many(&mut conn, &[1, 3, 9])
        .await
        .unwrap();
    drop(conn);

    assert_that!(deleted, eq(2));
    let remaining = TaskRepository::find_all(&pool).await.unwrap();
    assert_that!(remaining, len(eq(1)));
}

#[tokio::test]
async fn given_existing_tasks_when_replaced_then_only_new_set_remains() {
    let pool = create_test_pool().await;
    TaskRepository::upsert(&pool, &create_test_task(100, 1))
        .await
        .unwrap();

    let mut tx = pool.begin().await.unwrap();
    TaskRepository::replace_all(&mut tx, &default_plan())
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let all = TaskRepository::find_all(&pool).await.unwrap();
    assert_that!(all.len(), eq(default_plan().len()));
    assert_that!(all.iter().any(|t| t.id == 100), eq(false));
}

#[tokio::test]
async fn given_tasks_when_querying_maxima_then_reported() {
    let pool = create_test_pool().await;
    assert_that!(TaskRepository::max_order(&pool).await.unwrap(), none());

    TaskRepository::upsert(&pool, &create_test_task(5, 9))
        .await
        .unwrap();
    TaskRepository::upsert(&pool, &create_test_task(7, 2))
        .await
        .unwrap();

    assert_that!(TaskRepository::max_order(&pool).await.unwrap(), some(eq(9)));
    assert_that!(TaskRepository::max_id(&pool).await.unwrap(), some(eq(7)));
}

#[tokio::test]
async fn given_corrupt_row_when_listing_then_invalid_data_error() {
    let pool = create_test_pool().await;
    sqlx::query(
        "INSERT INTO tasks (id, name, start_date, end_date, dependencies) VALUES (1, 'x', '2025-03-01', 'soon', '[]')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let result = TaskRepository::find_all(&pool).await;

    assert_that!(result, err(anything()));
}
