use std::borrow::Cow;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use serde_json::Value;

use crate::clock::clock::{Clock, SystemClock};
use crate::correlation::callback_scheduler::CallbackScheduler;
use crate::correlation::correlation_id::{
    CorrelationId, CorrelationIdGenerator, MonotonicCorrelationIdGenerator, RESERVED_CORRELATION_ID,
};
use crate::correlation::correlator_config::CorrelatorConfig;
use crate::correlation::expired_entry_sweeper::ExpiredEntrySweeper;
use crate::correlation::message::{correlation_id_of, Message};
use crate::correlation::reply_callback::ReplyCallbackType;
use crate::correlation::timeout_record::TimeoutRecord;

pub struct Correlator {
    config: CorrelatorConfig,
    id_generator: MonotonicCorrelationIdGenerator,
    pending_requests: Arc<DashMap<CorrelationId, ReplyCallbackType>>,
    timeout_records: Arc<Mutex<VecDeque<TimeoutRecord>>>,
    clock: Arc<dyn Clock>,
    callback_scheduler: CallbackScheduler,
    sweeper: ExpiredEntrySweeper,
}

impl Correlator {
    pub fn new(config: CorrelatorConfig) -> Self {
        return Self::new_with_clock(config, Arc::new(SystemClock::new()));
    }

    pub fn new_with_clock(config: CorrelatorConfig, clock: Arc<dyn Clock>) -> Self {
        let pending_requests = Arc::new(DashMap::new());
        let timeout_records = Arc::new(Mutex::new(VecDeque::new()));
        let sweeper = ExpiredEntrySweeper::new(pending_requests.clone(), timeout_records.clone(), clock.clone());

        if config.get_request_expiry_after().is_some() {
            if let Some(sweep_interval) = config.get_sweep_interval() {
                sweeper.start(sweep_interval);
            }
        }

        return Correlator {
            config,
            id_generator: MonotonicCorrelationIdGenerator::new(),
            pending_requests,
            timeout_records,
            clock,
            callback_scheduler: CallbackScheduler::start(),
            sweeper,
        };
    }

    pub fn tag_request<'a>(&self, request: &'a mut Message, callback: ReplyCallbackType) -> Cow<'a, Message> {
        let correlation_id = self.id_generator.generate();
        self.pending_requests.insert(correlation_id, callback);

        if let Some(request_expiry_after) = self.config.get_request_expiry_after() {
            // The clock is read under the queue lock, deadlines stay non-decreasing in queue order.
            let mut timeout_records = self.timeout_records.lock().unwrap();
            let deadline = self.clock.now() + request_expiry_after;
            timeout_records.push_back(TimeoutRecord::new(correlation_id, deadline));
        }

        return self.stamp(request, self.config.get_request_field_name(), correlation_id);
    }

    pub fn tag_reply<'a>(&self, request: &Message, reply: &'a mut Message) -> Cow<'a, Message> {
        let correlation_id = correlation_id_of(request, self.config.get_request_field_name());
        if correlation_id == RESERVED_CORRELATION_ID {
            return Cow::Borrowed(reply);
        }

        return self.stamp(reply, self.config.get_reply_field_name(), correlation_id);
    }

    pub fn dispatch_reply<'a>(&self, reply: &'a mut Message) -> Cow<'a, Message> {
        let correlation_id = correlation_id_of(reply, self.config.get_reply_field_name());
        if correlation_id == RESERVED_CORRELATION_ID {
            return Cow::Borrowed(reply);
        }

        // Removed before scheduling, a duplicate dispatch of the same reply is a no-op.
        let callback = match self.pending_requests.remove(&correlation_id) {
            Some((_, callback)) => callback,
            None => return Cow::Borrowed(reply),
        };

        if self.config.is_mutate_in_place() {
            reply.remove(self.config.get_reply_field_name());
            self.callback_scheduler.schedule(callback, reply.clone());
            return Cow::Borrowed(reply);
        }

        let mut stripped_reply = reply.clone();
        stripped_reply.remove(self.config.get_reply_field_name());
        self.callback_scheduler.schedule(callback, stripped_reply.clone());
        return Cow::Owned(stripped_reply);
    }

    pub fn sweep_expired(&self) {
        self.sweeper.sweep_once();
    }

    pub fn cancel(&self, correlation_id: CorrelationId) -> bool {
        return self.pending_requests.remove(&correlation_id).is_some();
    }

    fn stamp<'a>(&self, message: &'a mut Message, field_name: &str, correlation_id: CorrelationId) -> Cow<'a, Message> {
        if self.config.is_mutate_in_place() {
            message.insert(field_name.to_string(), Value::from(correlation_id));
            return Cow::Borrowed(message);
        }

        let mut tagged_message = message.clone();
        tagged_message.insert(field_name.to_string(), Value::from(correlation_id));
        return Cow::Owned(tagged_message);
    }
}

impl Drop for Correlator {
    fn drop(&mut self) {
        self.sweeper.stop();
    }
}
