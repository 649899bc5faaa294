use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;

use reqrep::correlation::message::Message;
use reqrep_examples::echo::echo_client::EchoClient;
use reqrep_examples::echo::echo_server::EchoServer;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn echo_round_trip() {
    let (request_sender, request_receiver) = mpsc::unbounded_channel();
    let (reply_sender, mut reply_receiver) = mpsc::unbounded_channel();

    EchoServer::start(request_receiver, reply_sender);

    let echo_client = Arc::new(EchoClient::new(request_sender));
    let dispatching_client = echo_client.clone();
    tokio::spawn(async move {
        while let Some(mut reply) = reply_receiver.recv().await {
            dispatching_client.dispatch(&mut reply);
        }
    });

    let mut request = Message::new();
    request.insert("msg".to_string(), Value::from("Hello"));

    let reply = echo_client.send(request).await.unwrap();
    assert_eq!(Some("Hello, World!"), reply.get("msg").and_then(Value::as_str));
    assert!(reply.get("rep").is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn echo_round_trips_for_concurrent_requests() {
    let (request_sender, request_receiver) = mpsc::unbounded_channel();
    let (reply_sender, mut reply_receiver) = mpsc::unbounded_channel();

    EchoServer::start(request_receiver, reply_sender);

    let echo_client = Arc::new(EchoClient::new(request_sender));
    let dispatching_client = echo_client.clone();
    tokio::spawn(async move {
        while let Some(mut reply) = reply_receiver.recv().await {
            dispatching_client.dispatch(&mut reply);
        }
    });

    let mut join_handles = Vec::new();
    for greeting in ["Hello", "Howdy", "Hey"] {
        let sending_client = echo_client.clone();
        join_handles.push(tokio::spawn(async move {
            let mut request = Message::new();
            request.insert("msg".to_string(), Value::from(greeting));
            return sending_client.send(request).await.unwrap();
        }));
    }

    let mut echoed = Vec::new();
    for join_handle in join_handles {
        let reply = join_handle.await.unwrap();
        echoed.push(reply.get("msg").and_then(Value::as_str).unwrap().to_string());
    }
    echoed.sort();

    assert_eq!(
        vec!["Hello, World!".to_string(), "Hey, World!".to_string(), "Howdy, World!".to_string()],
        echoed
    );
}
