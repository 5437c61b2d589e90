//! Text command routing tests, driven through the bot facade.

mod common;

use common::{Log, RecordingSink, Sent};
use futures_util::FutureExt;
use slashgate::config::MessageConfig;
use slashgate::platform::OutgoingMessage;
use slashgate::{Bot, Command, Dispatch, MessageContext, Router, handler_fn};
use slashgate_model::{GatewayEvent, Message, User};
use std::sync::Arc;

const BOT_ID: &str = "42";

/// Replies with `<command>:<arguments joined by ','>`.
fn echo_args() -> impl slashgate::Handler<MessageContext> + 'static {
    handler_fn(|ctx: &mut MessageContext| {
        async move {
            let text = format!("{}:{}", ctx.command.name, ctx.arguments.join(","));
            ctx.send(text).await
        }
        .boxed()
    })
}

fn tree(log: &Log) -> Router {
    Router::new([
        Command::new("a")
            .with_message_middleware(log.middleware("Ma"))
            .with_message_handler(echo_args())
            .with_sub_command(
                Command::new("b")
                    .with_message_middleware(log.middleware("Mb"))
                    .with_message_handler(echo_args()),
            ),
        Command::new("silent").with_handler(log.terminal("slash-only")),
    ])
}

async fn bot(router: Router, sink: Arc<RecordingSink>) -> Bot {
    let config = MessageConfig::with_prefixes(["d."]).mention_prefix(true);
    let bot = Bot::with_router(router, sink).with_message_commands(config);
    bot.handle_event(GatewayEvent::Ready {
        user: User {
            id: BOT_ID.to_string(),
            username: "gate".to_string(),
            bot: true,
        },
    })
    .await;
    bot
}

fn message(content: &str) -> GatewayEvent {
    GatewayEvent::MessageCreate(Message::new("m1", "c1", User::new("7", "someone"), content))
}

#[tokio::test]
async fn subcommand_tokens_resolve_and_rest_are_arguments() {
    let log = Log::new();
    let sink = RecordingSink::new();
    let bot = bot(tree(&log), sink.clone()).await;

    let dispatch = bot.handle_event(message("d.a b x y")).await;

    assert!(matches!(dispatch, Dispatch::Handled(Ok(()))));
    assert_eq!(sink.contents(), vec!["b:x,y"]);
    assert_eq!(log.entries(), vec!["Ma", "Mb"]);
}

#[tokio::test]
async fn unknown_token_falls_through_to_arguments() {
    let log = Log::new();
    let sink = RecordingSink::new();
    let bot = bot(tree(&log), sink.clone()).await;

    bot.handle_event(message("d.a z")).await;

    assert_eq!(sink.contents(), vec!["a:z"]);
    assert_eq!(log.entries(), vec!["Ma"]);
}

#[tokio::test]
async fn mention_prefixes_are_accepted() {
    let sink = RecordingSink::new();
    let bot = bot(tree(&Log::new()), sink.clone()).await;

    bot.handle_event(message("<@42> a one")).await;
    bot.handle_event(message("<@!42>a two")).await;

    assert_eq!(sink.contents(), vec!["a:one", "a:two"]);
}

#[tokio::test]
async fn mention_of_someone_else_is_dropped() {
    let sink = RecordingSink::new();
    let bot = bot(tree(&Log::new()), sink.clone()).await;

    let dispatch = bot.handle_event(message("<@43> a")).await;

    assert!(dispatch.is_dropped());
    assert!(sink.sent().is_empty());
}

#[tokio::test]
async fn messages_that_are_not_commands_are_dropped() {
    let log = Log::new();
    let sink = RecordingSink::new();
    let bot = bot(tree(&log), sink.clone()).await;

    for content in ["hello", "d.", "d.   ", "d.unknown a", "x d.a"] {
        let dispatch = bot.handle_event(message(content)).await;
        assert!(dispatch.is_dropped(), "{content:?} should be dropped");
    }
    assert!(sink.sent().is_empty());
    assert!(log.entries().is_empty());
}

#[tokio::test]
async fn command_without_message_handler_is_dropped() {
    let log = Log::new();
    let sink = RecordingSink::new();
    let bot = bot(tree(&log), sink.clone()).await;

    let dispatch = bot.handle_event(message("d.silent")).await;

    assert!(dispatch.is_dropped());
    assert!(log.entries().is_empty());
}

#[tokio::test]
async fn message_commands_disabled_by_default() {
    let sink = RecordingSink::new();
    let bot = Bot::with_router(tree(&Log::new()), sink.clone());

    let dispatch = bot.handle_event(message("d.a")).await;

    assert!(dispatch.is_dropped());
    assert!(sink.sent().is_empty());
}

#[tokio::test]
async fn mentions_ignored_before_ready() {
    let sink = RecordingSink::new();
    let config = MessageConfig::with_prefixes(["d."]).mention_prefix(true);
    let bot = Bot::with_router(tree(&Log::new()), sink.clone()).with_message_commands(config);

    assert!(bot.handle_event(message("<@42> a")).await.is_dropped());
    assert!(bot.handle_event(message("d.a")).await.is_handled());
}

#[tokio::test]
async fn longest_prefix_wins() {
    let sink = RecordingSink::new();
    let config = MessageConfig::with_prefixes(["d", "d."]);
    let bot = Bot::with_router(tree(&Log::new()), sink.clone()).with_message_commands(config);

    bot.handle_event(message("d.a")).await;

    assert_eq!(sink.contents(), vec!["a:"]);
}

#[tokio::test]
async fn reply_targets_triggering_message() {
    let router = Router::new([Command::new("hi").with_message_handler(handler_fn(
        |ctx: &mut MessageContext| async move { ctx.reply("hello", true).await }.boxed(),
    ))]);
    let sink = RecordingSink::new();
    let bot = bot(router, sink.clone()).await;

    bot.handle_event(message("d.hi")).await;

    assert_eq!(
        sink.sent(),
        vec![Sent::Message {
            channel_id: "c1".to_string(),
            message: OutgoingMessage::new("hello").reply_to("m1", true),
        }]
    );
}
