//! Local queue of pending cascade steps
//!
//! Event handlers are synchronous, so they cannot await the next widget's
//! refresh. They enqueue it here and the cascade loop drives it.

use std::cell::RefCell;
use std::future::Future;
use std::mem;
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use tokio::sync::Notify;
use tracing::{error, info_span, Instrument};

use crate::error::ApiError;

#[derive(Default)]
struct Queue {
    pending: RefCell<Vec<LocalBoxFuture<'static, ()>>>,
    notify: Notify,
}

/// Cheap to clone; clones share one queue.
#[derive(Clone, Default)]
pub struct Tasks {
    queue: Rc<Queue>,
}

impl Tasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a cascade step. Its error is logged here, the outermost point
    /// of the cascade, and goes no further.
    pub fn spawn<F>(&self, name: &'static str, step: F)
    where
        F: Future<Output = Result<(), ApiError>> + 'static,
    {
        let task = async move {
            if let Err(err) = step.await {
                error!(error = %err, "cascade step failed");
            }
        }
        .instrument(info_span!("task", name));

        self.queue.pending.borrow_mut().push(task.boxed_local());
        self.queue.notify.notify_one();
    }

    /// Take everything queued so far
    pub fn take(&self) -> Vec<LocalBoxFuture<'static, ()>> {
        mem::take(&mut *self.queue.pending.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.queue.pending.borrow().is_empty()
    }

    /// Resolves once something was queued since the last wait
    pub async fn queued(&self) {
        self.queue.notify.notified().await;
    }
}
