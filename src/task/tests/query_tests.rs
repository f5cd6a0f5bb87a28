//! Unit tests for task list ordering.

use super::support::date;
use crate::task::domain::{
    NewTask, SortBy, SortDirection, Task, TaskDraft, TaskId, TaskQuery, TaskStatus,
};
use chrono::NaiveDate;
use eyre::ensure;
use rstest::{fixture, rstest};

fn task(id: i64, status: TaskStatus, deadline: NaiveDate) -> eyre::Result<Task> {
    let draft = TaskDraft {
        title: format!("Task {id}"),
        description: None,
        deadline,
        status: Some(status),
    };
    Ok(NewTask::from_draft(draft).into_task(TaskId::new(id)?))
}

fn ids(tasks: &[Task]) -> Vec<i64> {
    tasks.iter().map(|task| task.id().value()).collect()
}

/// Tasks in identifier order with duplicated statuses and deadlines.
#[fixture]
fn tasks() -> eyre::Result<Vec<Task>> {
    Ok(vec![
        task(1, TaskStatus::Done, date(2026, 4, 3)?)?,
        task(2, TaskStatus::Todo, date(2026, 4, 1)?)?,
        task(3, TaskStatus::InProgress, date(2026, 4, 3)?)?,
        task(4, TaskStatus::Todo, date(2026, 4, 2)?)?,
        task(5, TaskStatus::Done, date(2026, 4, 1)?)?,
    ])
}

#[rstest]
fn no_sort_key_keeps_store_order(tasks: eyre::Result<Vec<Task>>) -> eyre::Result<()> {
    let mut sorted = tasks?;
    TaskQuery::new().filtered_by(TaskStatus::Done).sort(&mut sorted);
    ensure!(ids(&sorted) == vec![1, 2, 3, 4, 5], "order should be unchanged");
    Ok(())
}

#[rstest]
#[case(SortDirection::Asc, vec![2, 4, 3, 1, 5])]
#[case(SortDirection::Desc, vec![1, 5, 3, 2, 4])]
fn status_sort_uses_rank_and_is_stable(
    tasks: eyre::Result<Vec<Task>>,
    #[case] direction: SortDirection,
    #[case] expected: Vec<i64>,
) -> eyre::Result<()> {
    let mut sorted = tasks?;
    TaskQuery::new()
        .sorted_by(SortBy::Status, direction)
        .sort(&mut sorted);
    ensure!(ids(&sorted) == expected, "unexpected order {:?}", ids(&sorted));
    Ok(())
}

#[rstest]
#[case(SortDirection::Asc, vec![2, 5, 4, 1, 3])]
#[case(SortDirection::Desc, vec![1, 3, 4, 2, 5])]
fn deadline_sort_orders_by_date_and_is_stable(
    tasks: eyre::Result<Vec<Task>>,
    #[case] direction: SortDirection,
    #[case] expected: Vec<i64>,
) -> eyre::Result<()> {
    let mut sorted = tasks?;
    TaskQuery::new()
        .sorted_by(SortBy::Deadline, direction)
        .sort(&mut sorted);
    ensure!(ids(&sorted) == expected, "unexpected order {:?}", ids(&sorted));
    Ok(())
}

#[rstest]
fn status_descending_reverses_distinct_ranks(tasks: eyre::Result<Vec<Task>>) -> eyre::Result<()> {
    let distinct: Vec<Task> = tasks?
        .into_iter()
        .filter(|task| [1, 2, 3].contains(&task.id().value()))
        .collect();

    let mut ascending = distinct.clone();
    TaskQuery::new()
        .sorted_by(SortBy::Status, SortDirection::Asc)
        .sort(&mut ascending);
    let mut descending = distinct;
    TaskQuery::new()
        .sorted_by(SortBy::Status, SortDirection::Desc)
        .sort(&mut descending);

    let statuses = |list: &[Task]| list.iter().map(Task::status).collect::<Vec<_>>();
    ensure!(
        statuses(&ascending) == vec![TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done],
        "ascending should be TODO, IN_PROGRESS, DONE"
    );
    descending.reverse();
    ensure!(ids(&descending) == ids(&ascending), "descending should be the exact reverse");
    Ok(())
}

#[rstest]
fn missing_direction_sorts_ascending(tasks: eyre::Result<Vec<Task>>) -> eyre::Result<()> {
    let mut sorted = tasks?;
    let query = TaskQuery {
        sort_by: Some(SortBy::Deadline),
        ..TaskQuery::default()
    };
    query.sort(&mut sorted);
    ensure!(ids(&sorted) == vec![2, 5, 4, 1, 3], "unexpected order {:?}", ids(&sorted));
    Ok(())
}

#[test]
fn sorting_an_empty_list_is_a_no_op() {
    let mut empty: Vec<Task> = Vec::new();
    TaskQuery::new()
        .sorted_by(SortBy::Status, SortDirection::Desc)
        .sort(&mut empty);
    assert!(empty.is_empty());
}
