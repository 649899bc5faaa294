use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use reqrep::callback::async_reply_callback::AsyncReplyCallback;
use reqrep::correlation::correlator::Correlator;
use reqrep::correlation::correlator_config::CorrelatorConfig;
use reqrep::correlation::message::Message;
use reqrep::correlation::reply_callback::ReplyErrorType;

pub struct EchoClient {
    correlator: Correlator,
    requests: UnboundedSender<Message>,
}

impl EchoClient {
    pub fn new(requests: UnboundedSender<Message>) -> Self {
        let config = CorrelatorConfig::with_request_expiry(
            Duration::from_secs(10),
            Some(Duration::from_secs(1)),
        );
        return EchoClient { correlator: Correlator::new(config), requests };
    }

    pub async fn send(&self, mut request: Message) -> Result<Message, ReplyErrorType> {
        let async_reply_callback = AsyncReplyCallback::new();
        let tagged_request = self.correlator.tag_request(&mut request, async_reply_callback.clone()).into_owned();

        self.requests.send(tagged_request)?;

        return async_reply_callback.handle().await;
    }

    pub fn dispatch(&self, reply: &mut Message) {
        let _ = self.correlator.dispatch_reply(reply);
    }
}
