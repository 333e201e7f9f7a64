//! In-memory integration tests for task listing order.

use super::helpers::{TestService, add_all, names, service};
use rstest::rstest;
use task_manager::task::domain::Task;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn favorite_first_then_alphabetical(service: TestService) -> Result<(), eyre::Report> {
    let created = add_all(
        &service,
        [
            Task::new("Zed"),
            Task::new("Amy").with_favorite(true),
            Task::new("Bob"),
        ],
    )
    .await?;

    let sorted = service.get_all_tasks(true).await;
    let expected: Vec<_> = [1, 2, 0]
        .into_iter()
        .filter_map(|index| created.get(index).map(Task::id))
        .collect();

    assert_eq!(sorted.iter().map(Task::id).collect::<Vec<_>>(), expected);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unsorted_listing_keeps_insertion_order(service: TestService) -> Result<(), eyre::Report> {
    add_all(
        &service,
        [
            Task::new("Charlie"),
            Task::new("Alpha").with_favorite(true),
            Task::new("Bravo"),
        ],
    )
    .await?;

    assert_eq!(
        names(&service.get_all_tasks(false).await),
        ["Charlie", "Alpha", "Bravo"]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn names_compare_ignoring_case_first(service: TestService) -> Result<(), eyre::Report> {
    add_all(
        &service,
        [
            Task::new("beta"),
            Task::new("Beta"),
            Task::new("alpha"),
            Task::new("Zed"),
        ],
    )
    .await?;

    assert_eq!(
        names(&service.get_all_tasks(true).await),
        ["alpha", "Beta", "beta", "Zed"]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sorting_does_not_reorder_the_store(service: TestService) -> Result<(), eyre::Report> {
    add_all(&service, [Task::new("Second"), Task::new("First")]).await?;

    service.get_all_tasks(true).await;

    assert_eq!(
        names(&service.get_all_tasks(false).await),
        ["Second", "First"]
    );
    Ok(())
}
