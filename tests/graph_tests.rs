use chrono::NaiveDate;
use site_schedule::{Task, TaskDag};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn position(order: &[i32], id: i32) -> usize {
    order.iter().position(|&x| x == id).unwrap()
}

#[test]
fn chain_orders_dependencies_first() {
    let tasks = vec![
        Task::new(3, "Roof", d(2025, 12, 3), 1).with_dependencies(vec![2]),
        Task::new(1, "Foundation", d(2025, 12, 1), 1),
        Task::new(2, "Framing", d(2025, 12, 2), 1).with_dependencies(vec![1]),
    ];
    let order = TaskDag::build(&tasks).topological_order().unwrap();
    assert_eq!(order.len(), 3);
    assert!(position(&order, 1) < position(&order, 2));
    assert!(position(&order, 2) < position(&order, 3));
}

#[test]
fn diamond_orders_all_paths() {
    // 1 -> {2, 3} -> 4
    let tasks = vec![
        Task::new(1, "Excavate", d(2025, 12, 1), 1),
        Task::new(2, "Plumbing", d(2025, 12, 2), 1).with_dependencies(vec![1]),
        Task::new(3, "Electrical", d(2025, 12, 2), 1).with_dependencies(vec![1]),
        Task::new(4, "Inspection", d(2025, 12, 3), 1).with_dependencies(vec![2, 3]),
    ];
    let order = TaskDag::build(&tasks).topological_order().unwrap();
    assert!(position(&order, 1) < position(&order, 2));
    assert!(position(&order, 1) < position(&order, 3));
    assert!(position(&order, 2) < position(&order, 4));
    assert!(position(&order, 3) < position(&order, 4));
}

#[test]
fn unknown_dependency_ids_are_ignored() {
    let tasks = vec![
        Task::new(1, "A", d(2025, 12, 1), 1).with_dependencies(vec![99]),
        Task::new(2, "B", d(2025, 12, 2), 1).with_dependencies(vec![1, 42]),
    ];
    let order = TaskDag::build(&tasks).topological_order().unwrap();
    assert_eq!(order.len(), 2);
    assert!(position(&order, 1) < position(&order, 2));
}

#[test]
fn self_dependency_is_skipped() {
    let tasks = vec![Task::new(1, "A", d(2025, 12, 1), 1).with_dependencies(vec![1])];
    let order = TaskDag::build(&tasks).topological_order().unwrap();
    assert_eq!(order, vec![1]);
}

#[test]
fn cycle_is_reported_with_a_member_task() {
    let tasks = vec![
        Task::new(1, "A", d(2025, 12, 1), 1).with_dependencies(vec![2]),
        Task::new(2, "B", d(2025, 12, 2), 1).with_dependencies(vec![1]),
    ];
    let err = TaskDag::build(&tasks).topological_order().unwrap_err();
    assert!(err.task_id == 1 || err.task_id == 2);
    assert!(err.to_string().contains("dependency cycle"));
}
