use serde_json::Value;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use reqrep::correlation::correlator::Correlator;
use reqrep::correlation::correlator_config::CorrelatorConfig;
use reqrep::correlation::message::Message;

// The replying side only threads the correlation id from request to reply,
// it keeps no pending-request registry of its own.
pub struct EchoServer {
    correlator: Correlator,
}

impl EchoServer {
    pub fn new() -> Self {
        return EchoServer { correlator: Correlator::new(CorrelatorConfig::default()) };
    }

    pub fn start(mut requests: UnboundedReceiver<Message>, replies: UnboundedSender<Message>) {
        tokio::spawn(async move {
            let echo_server = EchoServer::new();
            while let Some(request) = requests.recv().await {
                let reply = echo_server.serve(&request);
                if replies.send(reply).is_err() {
                    return;
                }
            }
        });
    }

    fn serve(&self, request: &Message) -> Message {
        let mut reply = Message::new();
        if let Some(greeting) = request.get("msg").and_then(Value::as_str) {
            reply.insert("msg".to_string(), Value::from(format!("{}, World!", greeting)));
        }

        let _ = self.correlator.tag_reply(request, &mut reply);
        return reply;
    }
}
