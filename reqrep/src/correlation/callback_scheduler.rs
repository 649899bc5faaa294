use std::thread;

use tokio::sync::mpsc;
use tokio::sync::mpsc::UnboundedSender;

use crate::correlation::message::Message;
use crate::correlation::reply_callback::ReplyCallbackType;

pub(crate) struct ScheduledReply {
    callback: ReplyCallbackType,
    reply: Message,
}

pub(crate) struct CallbackScheduler {
    sender: UnboundedSender<ScheduledReply>,
}

impl CallbackScheduler {
    pub(crate) fn start() -> CallbackScheduler {
        let (sender, mut receiver) = mpsc::unbounded_channel::<ScheduledReply>();

        thread::spawn(move || {
            while let Some(scheduled_reply) = receiver.blocking_recv() {
                scheduled_reply.callback.on_reply(Ok(scheduled_reply.reply));
            }
        });

        return CallbackScheduler { sender };
    }

    pub(crate) fn schedule(&self, callback: ReplyCallbackType, reply: Message) {
        let _ = self.sender.send(ScheduledReply { callback, reply });
    }
}
