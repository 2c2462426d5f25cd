use kanban_dnd_core::{
    Board, BoardConfig, Column, ColumnId, DragEvent, DragSession, IdStrategy, Task,
};
use std::collections::HashSet;

fn column_ids(board: &Board) -> Vec<ColumnId> {
    board.column_ids()
}

fn snapshot(board: &Board) -> (Vec<Column>, Vec<Task>) {
    (board.columns().to_vec(), board.tasks().to_vec())
}

fn task_json(task: &Task) -> String {
    serde_json::json!({
        "entityKind": "Task",
        "id": task.id,
        "data": { "id": task.id, "columnId": task.column_id, "content": task.content },
    })
    .to_string()
}

#[test]
fn test_ids_unique_for_both_strategies() {
    for strategy in [IdStrategy::Sequential, IdStrategy::Random] {
        let mut board = Board::new(BoardConfig {
            id_strategy: strategy,
            ..BoardConfig::default()
        });

        for i in 0..10 {
            let col = board.create_column().id.clone();
            for _ in 0..3 {
                board.create_task(col.clone());
            }
            if i % 3 == 0 {
                board.delete_column(&col);
            }
        }

        let columns: HashSet<_> = board.columns().iter().map(|c| c.id.clone()).collect();
        let tasks: HashSet<_> = board.tasks().iter().map(|t| t.id.clone()).collect();
        assert_eq!(columns.len(), board.column_count());
        assert_eq!(tasks.len(), board.task_count());
    }
}

#[test]
fn test_cascade_delete_leaves_other_columns_alone() {
    let mut board = Board::default();
    let a = board.create_column().id.clone();
    let b = board.create_column().id.clone();
    for _ in 0..3 {
        board.create_task(a.clone());
        board.create_task(b.clone());
    }
    let b_tasks_before: Vec<Task> = board.tasks_in_column(&b).cloned().collect();

    board.delete_column(&a);

    assert_eq!(board.task_count(), 3);
    let b_tasks_after: Vec<Task> = board.tasks_in_column(&b).cloned().collect();
    assert_eq!(b_tasks_after, b_tasks_before);
    assert!(board.tasks().iter().all(|t| t.column_id != a));
}

#[test]
fn test_self_drop_is_noop() {
    let mut board = Board::default();
    let mut session = DragSession::new();
    let a = board.create_column().clone();
    board.create_column();
    let t = board.create_task(a.id.clone()).clone();
    board.create_task(a.id.clone());
    let before = snapshot(&board);

    session.dispatch(&mut board, DragEvent::start(a.clone()));
    session.dispatch(&mut board, DragEvent::end(a.clone(), Some(a.into())));
    assert_eq!(snapshot(&board), before);

    session.dispatch(&mut board, DragEvent::start(t.clone()));
    session.dispatch(&mut board, DragEvent::over(t.clone(), Some(t.clone().into())));
    session.dispatch(&mut board, DragEvent::end(t.clone(), Some(t.into())));
    assert_eq!(snapshot(&board), before);
}

#[test]
fn test_cross_column_reassignment_is_idempotent() {
    let mut board = Board::default();
    let mut session = DragSession::new();
    let a = board.create_column().id.clone();
    let b = board.create_column().id.clone();
    let t = board.create_task(a.clone()).clone();
    let u = board.create_task(b.clone()).clone();

    session.dispatch(&mut board, DragEvent::start(t.clone()));
    session.dispatch(&mut board, DragEvent::over(t.clone(), Some(u.clone().into())));

    assert_eq!(board.task(&t.id).unwrap().column_id, b);
    let order: Vec<_> = board.tasks().iter().map(|x| x.id.clone()).collect();
    let t_pos = order.iter().position(|id| id == &t.id).unwrap();
    let u_pos = order.iter().position(|id| id == &u.id).unwrap();
    assert_eq!(t_pos.abs_diff(u_pos), 1);

    let converged = snapshot(&board);
    session.dispatch(&mut board, DragEvent::over(t.clone(), Some(u.clone().into())));
    assert_eq!(snapshot(&board), converged);

    session.dispatch(&mut board, DragEvent::end(t, Some(u.into())));
    assert_eq!(snapshot(&board), converged);
}

#[test]
fn test_column_reorder_on_drop() {
    let mut board = Board::default();
    let mut session = DragSession::new();
    let a = board.create_column().clone();
    let b = board.create_column().id.clone();
    let c = board.create_column().clone();

    session.dispatch(&mut board, DragEvent::start(a.clone()));
    session.dispatch(&mut board, DragEvent::over(a.clone(), Some(c.clone().into())));
    assert_eq!(column_ids(&board), vec![a.id.clone(), b.clone(), c.id.clone()]);

    session.dispatch(&mut board, DragEvent::end(a.clone(), Some(c.clone().into())));
    assert_eq!(column_ids(&board), vec![b, c.id, a.id]);
}

#[test]
fn test_drag_end_always_resets() {
    let mut board = Board::default();
    let mut session = DragSession::new();
    let a = board.create_column().clone();
    let b = board.create_column().clone();
    let t = board.create_task(a.id.clone()).clone();
    let u = board.create_task(b.id.clone()).clone();

    let sessions = vec![
        vec![DragEvent::start(a.clone()), DragEvent::end(a.clone(), None)],
        vec![
            DragEvent::start(a.clone()),
            DragEvent::over(a.clone(), Some(b.clone().into())),
            DragEvent::end(a.clone(), Some(b.clone().into())),
        ],
        vec![
            DragEvent::start(t.clone()),
            DragEvent::over(t.clone(), Some(u.clone().into())),
            DragEvent::over(t.clone(), None),
            DragEvent::end(t.clone(), Some(a.clone().into())),
        ],
    ];

    for events in sessions {
        for event in events {
            session.dispatch(&mut board, event);
        }
        assert!(session.active_column().is_none());
        assert!(session.active_task().is_none());
    }
}

#[test]
fn test_no_target_cancel() {
    let mut board = Board::default();
    let mut session = DragSession::new();
    let a = board.create_column().id.clone();
    let t = board.create_task(a.clone()).clone();
    board.create_task(a);
    let before = board.tasks().to_vec();

    session.dispatch(&mut board, DragEvent::start(t.clone()));
    assert!(session.active_task().is_some());
    session.dispatch(&mut board, DragEvent::end(t, None));

    assert_eq!(board.tasks(), before.as_slice());
    assert!(!session.is_dragging());
}

#[test]
fn test_json_session_moves_task_across_columns() {
    let mut board = Board::default();
    let mut session = DragSession::new();
    let a = board.create_column().id.clone();
    let b = board.create_column().id.clone();
    let t = board.create_task(a.clone()).clone();
    let u = board.create_task(b.clone()).clone();

    let start = format!(r#"{{ "kind": "start", "active": {} }}"#, task_json(&t));
    let end = format!(
        r#"{{ "kind": "end", "active": {}, "over": {} }}"#,
        task_json(&t),
        task_json(&u)
    );

    session.dispatch(&mut board, DragEvent::from_json(&start).unwrap());
    assert_eq!(session.active_task().map(|x| &x.id), Some(&t.id));

    assert!(session.dispatch(&mut board, DragEvent::from_json(&end).unwrap()));
    assert_eq!(board.tasks_in_column(&a).count(), 0);
    let in_b: Vec<_> = board.tasks_in_column(&b).map(|x| x.id.clone()).collect();
    assert_eq!(in_b, vec![u.id, t.id]);
}
