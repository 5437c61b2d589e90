use async_trait::async_trait;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use slashgate::config::MessageConfig;
use slashgate::platform::{CurrentUser, OutgoingMessage, ResponseSink};
use slashgate::router::message::{strip_prefix, tokenize};
use slashgate::router::{resolve_interaction, resolve_message};
use slashgate::{
    Command, Handler, HandlerResult, InteractionContext, MessageContext, ResponseError, Router,
};
use slashgate_model::{Interaction, InteractionOption, InteractionResponse, Message, User};
use std::hint::black_box;
use std::sync::Arc;

// Routing overhead only: handlers do nothing and the sink discards output.

struct Pass;

#[async_trait]
impl Handler<InteractionContext> for Pass {
    async fn handle(&self, ctx: &mut InteractionContext) -> HandlerResult {
        ctx.next().await
    }
}

#[async_trait]
impl Handler<MessageContext> for Pass {
    async fn handle(&self, ctx: &mut MessageContext) -> HandlerResult {
        ctx.next().await
    }
}

struct Discard;

#[async_trait]
impl ResponseSink for Discard {
    async fn respond(&self, _: &Interaction, _: InteractionResponse) -> Result<(), ResponseError> {
        Ok(())
    }

    async fn send_message(&self, _: &str, _: OutgoingMessage) -> Result<(), ResponseError> {
        Ok(())
    }
}

fn tree() -> Router {
    let leaf = Command::new("c")
        .with_middleware(Pass)
        .with_handler(Pass)
        .with_message_middleware(Pass)
        .with_message_handler(Pass);
    let group = Command::new("b")
        .with_middleware(Pass)
        .with_message_middleware(Pass)
        .with_sub_command(leaf);
    let mut commands: Vec<Command> = (0..64).map(|i| Command::new(format!("filler-{i}"))).collect();
    commands.push(
        Command::new("a")
            .with_middleware(Pass)
            .with_message_middleware(Pass)
            .with_sub_command(group),
    );
    Router::new(commands)
}

fn nested_interaction() -> Interaction {
    Interaction::command(
        "i1",
        "a",
        vec![InteractionOption::group("b", InteractionOption::sub_command("c", Vec::new()))],
    )
}

fn resolve_benchmark(c: &mut Criterion) {
    let router = tree();
    let root = router.get("a").unwrap();
    let interaction = nested_interaction();
    let options = &interaction.command_data().unwrap().options;
    let prefixes = vec!["d.".to_string(), "dis.".to_string()];

    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(1));

    group.bench_function("interaction_depth_3", |b| {
        b.iter(|| resolve_interaction(black_box(&root), black_box(options)).map(|r| r.chain.len()))
    });

    group.bench_function("message_depth_3", |b| {
        b.iter(|| {
            let rest = strip_prefix(black_box("d.a b c x y z"), &prefixes, Some("42"))?;
            let tokens = tokenize(rest, " ");
            let (name, tail) = tokens.split_first()?;
            let root = router.get(name)?;
            resolve_message(&root, tail).map(|r| r.arguments.len())
        })
    });

    group.finish();
}

fn dispatch_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let router = tree();
    let sink: Arc<dyn ResponseSink> = Arc::new(Discard);
    let identity = Arc::new(CurrentUser::with_user(User::new("42", "gate")));
    let messages = router.message_handler(
        MessageConfig::with_prefixes(["d."]).mention_prefix(true),
        identity,
    );
    let author = User::new("7", "someone");

    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    group.bench_function("interaction", |b| {
        b.to_async(&runtime).iter(|| async {
            router
                .handle_interaction(sink.clone(), nested_interaction())
                .await
                .is_handled()
        })
    });

    group.bench_function("message", |b| {
        b.to_async(&runtime).iter(|| async {
            let message = Message::new("m1", "c1", author.clone(), "<@42> a b c x y");
            messages.handle(sink.clone(), message).await.is_handled()
        })
    });

    group.finish();
}

criterion_group!(benches, resolve_benchmark, dispatch_benchmark);
criterion_main!(benches);
