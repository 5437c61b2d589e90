//! The handler capability shared by middlewares and terminal handlers.
//!
//! One trait, instantiated per context kind: `Handler<InteractionContext>`
//! for the structured path and `Handler<MessageContext>` for the text path.
//! A middleware is just a handler that calls `ctx.next()` somewhere in its
//! body; a terminal handler usually doesn't.

use crate::error::HandlerResult;
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use std::marker::PhantomData;
use std::sync::Arc;

/// Something that can process a context of kind `C`.
#[async_trait]
pub trait Handler<C>: Send + Sync {
    /// Process the context. Call `ctx.next()` to continue the chain.
    async fn handle(&self, ctx: &mut C) -> HandlerResult;
}

/// Shared, type-erased handler.
pub type BoxedHandler<C> = Arc<dyn Handler<C>>;

#[async_trait]
impl<C, H> Handler<C> for Arc<H>
where
    C: Send + 'static,
    H: Handler<C> + ?Sized,
{
    async fn handle(&self, ctx: &mut C) -> HandlerResult {
        (**self).handle(ctx).await
    }
}

/// Adapter letting a closure act as a [`Handler`]. See [`handler_fn`].
pub struct HandlerFn<C, F> {
    f: F,
    _ctx: PhantomData<fn(&mut C)>,
}

/// Wrap a closure returning a boxed future as a handler.
///
/// ```ignore
/// use futures_util::FutureExt;
///
/// let pong = handler_fn(|ctx: &mut MessageContext| async move {
///     ctx.reply("pong", false).await
/// }.boxed());
/// ```
pub fn handler_fn<C, F>(f: F) -> HandlerFn<C, F>
where
    C: Send + 'static,
    F: for<'a> Fn(&'a mut C) -> BoxFuture<'a, HandlerResult> + Send + Sync,
{
    HandlerFn {
        f,
        _ctx: PhantomData,
    }
}

#[async_trait]
impl<C, F> Handler<C> for HandlerFn<C, F>
where
    C: Send + 'static,
    F: for<'a> Fn(&'a mut C) -> BoxFuture<'a, HandlerResult> + Send + Sync,
{
    async fn handle(&self, ctx: &mut C) -> HandlerResult {
        (self.f)(ctx).await
    }
}
