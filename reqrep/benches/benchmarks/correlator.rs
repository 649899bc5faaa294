use std::sync::Arc;
use std::time::Duration;

use criterion::{criterion_group, BatchSize, Criterion};

use reqrep::correlation::correlator::Correlator;
use reqrep::correlation::correlator_config::CorrelatorConfig;
use reqrep::correlation::message::Message;
use reqrep::correlation::reply_callback::{ReplyCallback, ReplyErrorType};

const SIZE: usize = 64 * 1024;

struct NoopReplyCallback {}

impl ReplyCallback for NoopReplyCallback {
    fn on_reply(&self, _: Result<Message, ReplyErrorType>) {}
}

fn tag_request(criterion: &mut Criterion) {
    let callback = Arc::new(NoopReplyCallback {});

    let mut group = criterion.benchmark_group("correlator tag_request");

    group.bench_function("tag_request without request expiry", |bencher| {
        let correlator = Correlator::new(CorrelatorConfig::default());

        bencher.iter_batched(
            || (0..SIZE).map(|_| Message::new()).collect::<Vec<_>>(),
            |mut requests| {
                for request in requests.iter_mut() {
                    let _ = correlator.tag_request(request, callback.clone());
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("tag_request with request expiry", |bencher| {
        let correlator = Correlator::new(CorrelatorConfig::with_request_expiry(
            Duration::from_secs(100),
            Some(Duration::from_millis(500)),
        ));

        bencher.iter_batched(
            || (0..SIZE).map(|_| Message::new()).collect::<Vec<_>>(),
            |mut requests| {
                for request in requests.iter_mut() {
                    let _ = correlator.tag_request(request, callback.clone());
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn dispatch_reply(criterion: &mut Criterion) {
    let callback = Arc::new(NoopReplyCallback {});

    let mut group = criterion.benchmark_group("correlator dispatch_reply");

    group.bench_function("tag, reply and dispatch", |bencher| {
        let correlator = Correlator::new(CorrelatorConfig::default());

        bencher.iter_batched(
            || (0..SIZE).map(|_| Message::new()).collect::<Vec<_>>(),
            |mut requests| {
                for request in requests.iter_mut() {
                    let _ = correlator.tag_request(request, callback.clone());

                    let mut reply = Message::new();
                    let _ = correlator.tag_reply(request, &mut reply);
                    let _ = correlator.dispatch_reply(&mut reply);
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, tag_request, dispatch_reply);
