//! Plan service tests against the in-memory gym.

mod support;

use gympoint::domain::{NewPlan, PlanChanges};
use gympoint::services::ServiceContainer;

use support::Gym;

#[tokio::test]
async fn created_plan_is_listed() {
    let gym = Gym::new();
    let plans = gym.services().plans();

    let gold = plans
        .create(NewPlan {
            title: "Gold".to_string(),
            duration: 3,
            price: 109.0,
        })
        .await
        .unwrap();

    let listed = plans.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, gold.id);
}

#[tokio::test]
async fn partial_update_changes_only_given_fields() {
    let gym = Gym::new();
    let gold = gym.add_plan("Gold", 3, 109.0);

    let updated = gym
        .services()
        .plans()
        .update(
            gold.id,
            PlanChanges {
                price: Some(99.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Gold");
    assert_eq!(updated.duration, 3);
    assert_eq!(updated.price, 99.0);
}

#[tokio::test]
async fn delete_returns_prior_state() {
    let gym = Gym::new();
    let gold = gym.add_plan("Gold", 3, 109.0);
    let plans = gym.services().plans();

    let deleted = plans.delete(gold.id).await.unwrap();
    assert_eq!(deleted.title, "Gold");

    let err = plans.get(gold.id).await.unwrap_err();
    assert_eq!(err.to_string(), "Plan does not exist");
}

#[tokio::test]
async fn deleting_missing_plan_fails() {
    let gym = Gym::new();
    let err = gym.services().plans().delete(42).await.unwrap_err();
    assert_eq!(err.to_string(), "Plan does not exist");
}
