use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll, Waker};

use crate::correlation::message::Message;
use crate::correlation::reply_callback::ReplyErrorType;

pub struct ReplyCompletionHandle {
    reply: Mutex<Option<Result<Message, ReplyErrorType>>>,
    waker_state: Arc<Mutex<WakerState>>,
}

pub(crate) struct WakerState {
    pub(crate) waker: Option<Waker>,
}

impl ReplyCompletionHandle {
    pub(crate) fn new() -> Self {
        return ReplyCompletionHandle {
            reply: Mutex::new(None),
            waker_state: Arc::new(Mutex::new(WakerState { waker: None })),
        };
    }

    pub(crate) fn on_reply(&self, reply: Result<Message, ReplyErrorType>) {
        *self.reply.lock().unwrap() = Some(reply);

        if let Some(waker) = &self.waker_state.lock().unwrap().waker {
            waker.wake_by_ref();
        }
    }
}

impl Future for &ReplyCompletionHandle {
    type Output = Result<Message, ReplyErrorType>;

    fn poll(self: Pin<&mut Self>, ctx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut guard = self.waker_state.lock().unwrap();
        if let Some(waker) = guard.waker.as_ref() {
            if !waker.will_wake(ctx.waker()) {
                (*guard).waker = Some(ctx.waker().clone());
            }
        } else {
            guard.waker = Some(ctx.waker().clone());
        }

        if let Some(reply) = self.reply.lock().unwrap().take() {
            return Poll::Ready(reply);
        }
        return Poll::Pending;
    }
}
