use std::borrow::Borrow;
use std::sync::Arc;

use crate::callback::reply_completion_handle::ReplyCompletionHandle;
use crate::correlation::message::Message;
use crate::correlation::reply_callback::{ReplyCallback, ReplyErrorType};

pub struct AsyncReplyCallback {
    completion_handle: ReplyCompletionHandle,
}

impl ReplyCallback for AsyncReplyCallback {
    fn on_reply(&self, reply: Result<Message, ReplyErrorType>) {
        self.completion_handle.on_reply(reply);
    }
}

impl AsyncReplyCallback {
    pub fn new() -> Arc<AsyncReplyCallback> {
        return Arc::new(AsyncReplyCallback {
            completion_handle: ReplyCompletionHandle::new(),
        });
    }

    pub fn handle(&self) -> &ReplyCompletionHandle {
        return self.completion_handle.borrow();
    }
}
