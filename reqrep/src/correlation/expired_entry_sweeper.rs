use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use dashmap::DashMap;

use crate::clock::clock::Clock;
use crate::correlation::correlation_id::CorrelationId;
use crate::correlation::reply_callback::ReplyCallbackType;
use crate::correlation::request_timeout_error::RequestTimeoutError;
use crate::correlation::timeout_record::TimeoutRecord;

#[derive(Clone)]
pub(crate) struct ExpiredEntrySweeper {
    pending_requests: Arc<DashMap<CorrelationId, ReplyCallbackType>>,
    timeout_records: Arc<Mutex<VecDeque<TimeoutRecord>>>,
    clock: Arc<dyn Clock>,
    keep_running: Arc<AtomicBool>,
}

impl ExpiredEntrySweeper {
    pub(crate) fn new(
        pending_requests: Arc<DashMap<CorrelationId, ReplyCallbackType>>,
        timeout_records: Arc<Mutex<VecDeque<TimeoutRecord>>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        return ExpiredEntrySweeper {
            pending_requests,
            timeout_records,
            clock,
            keep_running: Arc::new(AtomicBool::new(true)),
        };
    }

    pub(crate) fn start(&self, sweep_interval: Duration) {
        let sweeper = self.clone();

        thread::spawn(move || {
            loop {
                if !sweeper.keep_running.load(Ordering::SeqCst) {
                    return;
                }
                sweeper.sweep_once();
                thread::sleep(sweep_interval);
            }
        });
    }

    pub(crate) fn sweep_once(&self) {
        let now = self.clock.now();

        // Deadlines are non-decreasing, the expired records form a prefix of the queue.
        // The lock is released before any callback runs, a callback may re-enter the correlator.
        let expired_records: Vec<TimeoutRecord> = {
            let mut timeout_records = self.timeout_records.lock().unwrap();
            let expired_count = timeout_records
                .iter()
                .take_while(|timeout_record| timeout_record.has_expired_by(now))
                .count();

            timeout_records.drain(..expired_count).collect()
        };

        for timeout_record in expired_records {
            let removed = self.pending_requests.remove(&timeout_record.get_correlation_id());
            if let Some((correlation_id, callback)) = removed {
                callback.on_reply(Err(Box::new(RequestTimeoutError { correlation_id })));
            }
        }
    }

    pub(crate) fn stop(&self) {
        self.keep_running.store(false, Ordering::SeqCst);
    }
}
