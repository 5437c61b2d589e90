//! slashgate console - drive the command router from a terminal.
//!
//! Every stdin line is delivered as a chat message from a fixed user. Lines
//! starting with `/` become slash-command interactions instead, built from
//! the registered command tree so groups and subcommands nest the way a
//! platform would send them.

use anyhow::Context as _;
use async_trait::async_trait;
use futures_util::FutureExt;
use slashgate::config::{self, Config, MessageConfig};
use slashgate::platform::{CommandSyncer, OutgoingMessage, ResponseSink, SyncScope};
use slashgate::{
    Bot, Command, Dispatch, Handler, HandlerError, HandlerResult, InteractionContext,
    MessageContext, ResponseError, Router, SyncError, handler_fn, telemetry,
};
use slashgate_model::{
    ApplicationCommand, CommandOptionSchema, GatewayEvent, Interaction, InteractionOption,
    InteractionResponse, Message, OptionKind, OptionValue, User,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use uuid::Uuid;

const CONSOLE_CHANNEL: &str = "console";
const CONSOLE_USER_ID: &str = "1";
const BOT_USER_ID: &str = "1000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            Config::load(&path).with_context(|| format!("failed to load config from {path}"))?
        }
        None => Config {
            message: MessageConfig::with_prefixes(["!", "sg."]).mention_prefix(true),
            ..Config::default()
        },
    };

    telemetry::init(&config.log);

    if let Err(errors) = config::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        anyhow::bail!("configuration has {} error(s)", errors.len());
    }

    let bot = Bot::with_router(demo_router(), Arc::new(ConsoleSink))
        .with_message_commands(config.message.clone());

    bot.handle_event(GatewayEvent::Ready {
        user: User {
            id: BOT_USER_ID.to_string(),
            username: "slashgate".to_string(),
            bot: true,
        },
    })
    .await;

    let synced = bot.sync(&ConsoleSyncer, &config.sync).await?;
    info!(count = synced.len(), "Commands synced");

    let author = User::new(CONSOLE_USER_ID, "console");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let event = match line.strip_prefix('/') {
            Some(rest) => match interaction_from_line(bot.router(), rest) {
                Some(interaction) => GatewayEvent::InteractionCreate(interaction),
                None => continue,
            },
            None => GatewayEvent::MessageCreate(Message::new(
                Uuid::new_v4().to_string(),
                CONSOLE_CHANNEL,
                author.clone(),
                line,
            )),
        };

        if let Dispatch::Handled(Err(e)) = bot.handle_event(event).await {
            println!("(command failed: {e})");
        }
    }

    Ok(())
}

// ============================================================================
// Console collaborators
// ============================================================================

/// Prints responses to stdout.
struct ConsoleSink;

#[async_trait]
impl ResponseSink for ConsoleSink {
    async fn respond(
        &self,
        interaction: &Interaction,
        response: InteractionResponse,
    ) -> Result<(), ResponseError> {
        let content = response.content.unwrap_or_default();
        let visibility = if response.ephemeral { " (ephemeral)" } else { "" };
        println!("[/{}]{visibility} {content}", interaction.id);
        Ok(())
    }

    async fn send_message(
        &self,
        channel_id: &str,
        message: OutgoingMessage,
    ) -> Result<(), ResponseError> {
        match message.reply_to {
            Some(id) => println!("[#{channel_id} reply to {id}] {}", message.content),
            None => println!("[#{channel_id}] {}", message.content),
        }
        Ok(())
    }
}

/// Prints the schema that would be pushed.
struct ConsoleSyncer;

#[async_trait]
impl CommandSyncer for ConsoleSyncer {
    async fn bulk_overwrite(
        &self,
        application_id: &str,
        scope: SyncScope<'_>,
        commands: Vec<ApplicationCommand>,
    ) -> Result<Vec<ApplicationCommand>, SyncError> {
        let json = serde_json::to_string_pretty(&commands)
            .map_err(|e| SyncError::Transport(ResponseError::Transport(e.to_string())))?;
        info!(application = %application_id, scope = ?scope, "Bulk overwrite");
        println!("{json}");
        Ok(commands
            .into_iter()
            .map(|mut c| {
                c.id = Some(Uuid::new_v4().to_string());
                c
            })
            .collect())
    }
}

// ============================================================================
// Demo commands
// ============================================================================

fn demo_router() -> Router {
    Router::new([
        Command::new("ping")
            .with_description("Get bot ping")
            .with_middleware(Timing)
            .with_message_middleware(Timing)
            .with_handler(Ping)
            .with_message_handler(Ping),
        Command::new("echo")
            .with_description("Repeat some text")
            .with_option(CommandOptionSchema::new(OptionKind::String, "text", "What to say").required())
            .with_handler(handler_fn(|ctx: &mut InteractionContext| {
                async move {
                    let text = match ctx.option("text") {
                        Some(value) => value.to_string(),
                        None => String::new(),
                    };
                    ctx.respond(InteractionResponse::message(text)).await
                }
                .boxed()
            }))
            .with_message_handler(handler_fn(|ctx: &mut MessageContext| {
                async move { ctx.reply(ctx.arguments.join(" "), false).await }.boxed()
            })),
        Command::new("math")
            .with_description("Arithmetic")
            .with_middleware(Timing)
            .with_message_middleware(Timing)
            .with_sub_command(arith("add", "Add two numbers", |a, b| a + b))
            .with_sub_command(arith("mul", "Multiply two numbers", |a, b| a * b)),
        Command::new("admin")
            .with_description("Operator tools")
            .with_message_middleware(RequireAuthor(CONSOLE_USER_ID.to_string()))
            .with_sub_command(
                Command::new("say")
                    .with_description("Post as the bot")
                    .with_message_handler(handler_fn(|ctx: &mut MessageContext| {
                        async move { ctx.send(ctx.arguments.join(" ")).await }.boxed()
                    })),
            ),
    ])
}

/// Logs how long the rest of the chain took.
struct Timing;

#[async_trait]
impl Handler<InteractionContext> for Timing {
    async fn handle(&self, ctx: &mut InteractionContext) -> HandlerResult {
        let start = Instant::now();
        let result = ctx.next().await;
        info!(command = %ctx.command.name, elapsed = ?start.elapsed(), "Interaction handled");
        result
    }
}

#[async_trait]
impl Handler<MessageContext> for Timing {
    async fn handle(&self, ctx: &mut MessageContext) -> HandlerResult {
        let start = Instant::now();
        let result = ctx.next().await;
        info!(command = %ctx.command.name, elapsed = ?start.elapsed(), "Message command handled");
        result
    }
}

struct Ping;

#[async_trait]
impl Handler<InteractionContext> for Ping {
    async fn handle(&self, ctx: &mut InteractionContext) -> HandlerResult {
        ctx.respond(InteractionResponse::message(":ping_pong: pong"))
            .await
    }
}

#[async_trait]
impl Handler<MessageContext> for Ping {
    async fn handle(&self, ctx: &mut MessageContext) -> HandlerResult {
        ctx.reply(":ping_pong: pong", false).await
    }
}

/// Stops the chain unless the message author is the given user.
struct RequireAuthor(String);

#[async_trait]
impl Handler<MessageContext> for RequireAuthor {
    async fn handle(&self, ctx: &mut MessageContext) -> HandlerResult {
        if ctx.message.author.id != self.0 {
            return ctx.reply("You are not allowed to do that.", true).await;
        }
        ctx.next().await
    }
}

/// Binary operation on two numbers, usable from both paths.
struct Arith(fn(f64, f64) -> f64);

fn arith(name: &str, description: &str, op: fn(f64, f64) -> f64) -> Command {
    Command::new(name)
        .with_description(description)
        .with_option(CommandOptionSchema::new(OptionKind::Number, "a", "First operand").required())
        .with_option(CommandOptionSchema::new(OptionKind::Number, "b", "Second operand").required())
        .with_handler(Arith(op))
        .with_message_handler(Arith(op))
}

#[async_trait]
impl Handler<InteractionContext> for Arith {
    async fn handle(&self, ctx: &mut InteractionContext) -> HandlerResult {
        let operand = |name: &str| {
            ctx.require_option(name)?
                .as_f64()
                .ok_or_else(|| HandlerError::MissingOption(name.to_string()))
        };
        let (a, b) = (operand("a")?, operand("b")?);
        ctx.respond(InteractionResponse::message((self.0)(a, b).to_string()))
            .await
    }
}

#[async_trait]
impl Handler<MessageContext> for Arith {
    async fn handle(&self, ctx: &mut MessageContext) -> HandlerResult {
        let parsed: Option<Vec<f64>> = ctx.arguments.iter().map(|a| a.parse().ok()).collect();
        match parsed.as_deref() {
            Some([a, b]) => ctx.reply((self.0)(*a, *b).to_string(), false).await,
            _ => ctx.reply("usage: <a> <b>", false).await,
        }
    }
}

// ============================================================================
// Slash-line parsing
// ============================================================================

/// Build an interaction from `name [group] [subcommand] [values...]`.
///
/// Unknown command names still produce an interaction so the router's drop
/// path can be observed.
fn interaction_from_line(router: &Router, line: &str) -> Option<Interaction> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (name, rest) = tokens.split_first()?;
    let options = match router.get(name) {
        Some(root) => build_options(&root, rest, 0),
        None => Vec::new(),
    };
    Some(Interaction::command(Uuid::new_v4().to_string(), *name, options))
}

fn build_options(node: &Command, tokens: &[&str], depth: usize) -> Vec<InteractionOption> {
    if let Some((first, rest)) = tokens.split_first()
        && depth < 2
        && let Some(child) = node.sub_command(first)
    {
        if depth == 0 && child.has_sub_commands() {
            return vec![InteractionOption {
                name: child.name.clone(),
                kind: OptionKind::SubCommandGroup,
                value: None,
                options: build_options(&child, rest, depth + 1),
                focused: false,
            }];
        }
        return vec![InteractionOption::sub_command(
            child.name.clone(),
            value_options(&child, rest),
        )];
    }
    value_options(node, tokens)
}

fn value_options(node: &Command, tokens: &[&str]) -> Vec<InteractionOption> {
    node.options
        .iter()
        .zip(tokens)
        .map(|(schema, raw)| {
            InteractionOption::value(schema.name.clone(), schema.kind, parse_value(schema.kind, raw))
        })
        .collect()
}

fn parse_value(kind: OptionKind, raw: &str) -> OptionValue {
    let parsed = match kind {
        OptionKind::Integer => raw.parse().ok().map(OptionValue::Integer),
        OptionKind::Number => raw.parse().ok().map(OptionValue::Number),
        OptionKind::Boolean => raw.parse().ok().map(OptionValue::Boolean),
        _ => None,
    };
    parsed.unwrap_or_else(|| OptionValue::String(raw.to_string()))
}
