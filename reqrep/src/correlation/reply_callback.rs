use std::error::Error;
use std::sync::Arc;

use crate::correlation::message::Message;

pub type ReplyErrorType = Box<dyn Error + Send + Sync>;

pub type ReplyCallbackType = Arc<dyn ReplyCallback + 'static>;

pub trait ReplyCallback: Send + Sync {
    fn on_reply(&self, reply: Result<Message, ReplyErrorType>);
}
