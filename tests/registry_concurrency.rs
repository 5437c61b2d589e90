//! Concurrent registry mutation and dispatch.

mod common;

use common::{Log, RecordingSink};
use slashgate::{Command, Router};
use slashgate_model::Interaction;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_registration_keeps_every_command() {
    let router = Router::default();

    let tasks: Vec<_> = (0..8)
        .map(|t| {
            let router = router.clone();
            tokio::spawn(async move {
                for i in 0..50 {
                    router.register(Command::new(format!("cmd-{t}-{i}")));
                    assert!(router.get(&format!("cmd-{t}-{i}")).is_some());
                }
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(router.count(), 400);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_duplicates_keep_exactly_one() {
    let router = Router::default();

    let tasks: Vec<_> = (0..16)
        .map(|t| {
            let router = router.clone();
            tokio::spawn(async move {
                router.register(Command::new("dup").with_description(format!("writer {t}")));
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(router.count(), 1);
    let winner = router.get("dup").unwrap();
    assert!(winner.description.starts_with("writer "));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn dispatch_runs_while_registry_changes() {
    let log = Log::new();
    let router = Router::new([Command::new("stable").with_handler(log.terminal("ran"))]);

    let writer = {
        let router = router.clone();
        tokio::spawn(async move {
            for i in 0..100 {
                router.register(Command::new(format!("extra-{i}")));
                router.unregister(&format!("extra-{i}"));
            }
        })
    };

    let dispatchers: Vec<_> = (0..20)
        .map(|i| {
            let router = router.clone();
            tokio::spawn(async move {
                router
                    .handle_interaction(
                        RecordingSink::new(),
                        Interaction::command(format!("i{i}"), "stable", Vec::new()),
                    )
                    .await
                    .is_handled()
            })
        })
        .collect();

    writer.await.unwrap();
    for task in dispatchers {
        assert!(task.await.unwrap());
    }
    assert_eq!(log.entries().len(), 20);
    assert_eq!(router.count(), 1);
}

#[test]
fn in_flight_command_survives_replacement() {
    let router = Router::new([Command::new("x").with_description("old")]);
    let held: Arc<Command> = router.get("x").unwrap();

    let previous = router
        .update("x", Command::new("x").with_description("new"))
        .unwrap();

    assert_eq!(held.description, "old");
    assert!(Arc::ptr_eq(&held, &previous));
    assert_eq!(router.get("x").unwrap().description, "new");
}

#[test]
fn registry_errors_on_unknown_update() {
    let router = Router::default();
    let err = router.update("ghost", Command::new("ghost")).unwrap_err();
    assert_eq!(err.to_string(), "command not exists: ghost");
    assert!(router.unregister("ghost").is_none());
}
