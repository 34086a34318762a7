//! Property-based tests for the visibility policy
//!
//! Uses proptest to verify properties that should hold for all inputs.

use docreview::core::models::{User, ValidationTask};
use docreview::core::services::VisibilityPolicy;
use proptest::prelude::*;

use crate::common::task;

fn tasks_strategy() -> impl Strategy<Value = Vec<ValidationTask>> {
    prop::collection::vec((1u64..6, 1u64..6), 0..20).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (assigned_to, created_by))| task(i as u64 + 1, assigned_to, created_by))
            .collect()
    })
}

fn user_strategy() -> impl Strategy<Value = User> {
    (1u64..6, any::<bool>(), any::<bool>()).prop_map(|(id, superuser, staff)| {
        let user = if superuser {
            User::superuser(id, format!("user{id}"))
        } else {
            User::new(id, format!("user{id}"))
        };
        if staff { user.with_group("Staff") } else { user }
    })
}

proptest! {
    /// Filtering is the predicate applied task by task, in order
    #[test]
    fn filter_matches_predicate(user in user_strategy(), tasks in tasks_strategy()) {
        let policy = VisibilityPolicy::default();
        let expected: Vec<ValidationTask> =
            tasks.iter().filter(|t| policy.is_visible(&user, t)).cloned().collect();
        prop_assert_eq!(policy.filter_visible(&user, tasks), expected);
    }

    /// Superusers see every task
    #[test]
    fn superuser_sees_all(id in 1u64..6, tasks in tasks_strategy()) {
        let policy = VisibilityPolicy::default();
        let user = User::superuser(id, "root");
        prop_assert_eq!(policy.filter_visible(&user, tasks.clone()).len(), tasks.len());
    }

    /// Staff see exactly the tasks they created or were assigned
    #[test]
    fn staff_see_own_tasks(id in 1u64..6, tasks in tasks_strategy()) {
        let policy = VisibilityPolicy::default();
        let user = User::new(id, "staff").with_group("Staff");
        for t in policy.filter_visible(&user, tasks.clone()) {
            prop_assert!(t.assigned_to == user.id || t.created_by == user.id);
        }
        let expected = tasks
            .iter()
            .filter(|t| t.assigned_to == user.id || t.created_by == user.id)
            .count();
        prop_assert_eq!(policy.filter_visible(&user, tasks).len(), expected);
    }

    /// Users without a role see nothing
    #[test]
    fn basic_users_see_nothing(id in 1u64..6, tasks in tasks_strategy()) {
        let policy = VisibilityPolicy::default();
        let user = User::new(id, "basic");
        prop_assert!(policy.filter_visible(&user, tasks).is_empty());
        prop_assert!(!policy.can_create(&user));
    }
}
