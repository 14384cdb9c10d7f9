//! Reversible edit history.
//!
//! Every accepted edit is wrapped as an [`UndoAction`] carrying a forward
//! effect and its inverse, both asynchronous. The stack itself is
//! domain-agnostic: actions are constructed at the call site and the stack
//! only replays them in strict order.

use futures::future::BoxFuture;

use crate::error::Result;

/// A replayable asynchronous side effect.
///
/// Effects must be idempotent when replayed in the stack's strict order:
/// undo then redo must restore the externally observable state the forward
/// effect produced.
pub type Effect = Box<dyn Fn() -> BoxFuture<'static, Result<()>> + Send + Sync>;

/// Box a plain async closure into an [`Effect`].
pub fn effect<F, Fut>(f: F) -> Effect
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = Result<()>> + Send + 'static,
{
    Box::new(move || Box::pin(f()))
}

/// One reversible edit.
pub struct UndoAction {
    pub description: String,
    forward: Effect,
    inverse: Effect,
}

impl UndoAction {
    pub fn new(description: impl Into<String>, forward: Effect, inverse: Effect) -> Self {
        Self {
            description: description.into(),
            forward,
            inverse,
        }
    }
}

impl std::fmt::Debug for UndoAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoAction")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

type ResyncHook = Box<dyn Fn() + Send + Sync>;

/// Linear undo/redo history.
///
/// Bookkeeping is synchronous-before-await: an action moves between `past`
/// and `future` before its effect is awaited, so rapid repeated calls
/// observe a consistent stack shape even while effects are in flight. If an
/// effect fails the action stays where the replay put it; effects are
/// idempotent, so the caller can retry with the opposite operation.
#[derive(Default)]
pub struct UndoStack {
    past: Vec<UndoAction>,
    future: Vec<UndoAction>,
    on_replay: Option<ResyncHook>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a hook fired after every completed undo or redo, used by the
    /// caller to re-synchronize derived state.
    pub fn with_resync_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_replay = Some(Box::new(hook));
        self
    }

    /// Record an already-applied edit. Any previously undone future is
    /// invalidated.
    pub fn push(&mut self, action: UndoAction) {
        self.past.push(action);
        self.future.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Description of the edit the next `undo` would revert.
    pub fn next_undo_description(&self) -> Option<&str> {
        self.past.last().map(|a| a.description.as_str())
    }

    /// Description of the edit the next `redo` would reapply.
    pub fn next_redo_description(&self) -> Option<&str> {
        self.future.last().map(|a| a.description.as_str())
    }

    /// Revert the most recent edit. Returns `Ok(false)` on an empty stack.
    pub async fn undo(&mut self) -> Result<bool> {
        let Some(action) = self.past.pop() else {
            return Ok(false);
        };
        // Move the action before awaiting its effect.
        let pending = (action.inverse)();
        self.future.push(action);
        pending.await?;

        if let Some(hook) = &self.on_replay {
            hook();
        }
        Ok(true)
    }

    /// Reapply the most recently undone edit. Returns `Ok(false)` on an
    /// empty redo stack.
    pub async fn redo(&mut self) -> Result<bool> {
        let Some(action) = self.future.pop() else {
            return Ok(false);
        };
        let pending = (action.forward)();
        self.past.push(action);
        pending.await?;

        if let Some(hook) = &self.on_replay {
            hook();
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    /// Action that adds `delta` to a shared counter going forward and
    /// subtracts it going back.
    fn counter_action(description: &str, counter: &Arc<AtomicI64>, delta: i64) -> UndoAction {
        let fwd = Arc::clone(counter);
        let inv = Arc::clone(counter);
        UndoAction::new(
            description,
            effect(move || {
                let fwd = Arc::clone(&fwd);
                async move {
                    fwd.fetch_add(delta, Ordering::SeqCst);
                    Ok(())
                }
            }),
            effect(move || {
                let inv = Arc::clone(&inv);
                async move {
                    inv.fetch_sub(delta, Ordering::SeqCst);
                    Ok(())
                }
            }),
        )
    }

    #[tokio::test]
    async fn test_undo_redo_round_trip() {
        let counter = Arc::new(AtomicI64::new(0));
        let mut stack = UndoStack::new();

        // Push records an already-applied edit.
        counter.fetch_add(5, Ordering::SeqCst);
        stack.push(counter_action("add five", &counter, 5));

        assert!(stack.undo().await.unwrap());
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        assert!(stack.redo().await.unwrap());
        assert_eq!(counter.load(Ordering::SeqCst), 5);

        assert_eq!(stack.undo_depth(), 1);
        assert_eq!(stack.redo_depth(), 0);
        assert_eq!(stack.next_undo_description(), Some("add five"));
    }

    #[tokio::test]
    async fn test_stack_shape_after_push_push_undo() {
        let counter = Arc::new(AtomicI64::new(0));
        let mut stack = UndoStack::new();

        stack.push(counter_action("a", &counter, 1));
        stack.push(counter_action("b", &counter, 2));
        assert!(stack.undo().await.unwrap());

        assert_eq!(stack.undo_depth(), 1);
        assert_eq!(stack.redo_depth(), 1);
        assert_eq!(stack.next_undo_description(), Some("a"));
        assert_eq!(stack.next_redo_description(), Some("b"));
    }

    #[tokio::test]
    async fn test_push_clears_future() {
        let counter = Arc::new(AtomicI64::new(0));
        let mut stack = UndoStack::new();

        stack.push(counter_action("a", &counter, 1));
        stack.undo().await.unwrap();
        assert!(stack.can_redo());

        stack.push(counter_action("b", &counter, 2));
        assert!(!stack.can_redo());
        assert_eq!(stack.undo_depth(), 1);
    }

    #[tokio::test]
    async fn test_empty_stack_is_a_no_op() {
        let mut stack = UndoStack::new();
        assert!(!stack.undo().await.unwrap());
        assert!(!stack.redo().await.unwrap());
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
    }

    #[tokio::test]
    async fn test_resync_hook_fires_after_replay() {
        let counter = Arc::new(AtomicI64::new(0));
        let resyncs = Arc::new(AtomicI64::new(0));
        let hook_counter = Arc::clone(&resyncs);

        let mut stack = UndoStack::new().with_resync_hook(move || {
            hook_counter.fetch_add(1, Ordering::SeqCst);
        });

        stack.push(counter_action("a", &counter, 1));
        assert_eq!(resyncs.load(Ordering::SeqCst), 0); // push alone does not resync

        stack.undo().await.unwrap();
        stack.redo().await.unwrap();
        assert_eq!(resyncs.load(Ordering::SeqCst), 2);
    }
}
