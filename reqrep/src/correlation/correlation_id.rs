use std::sync::atomic::{AtomicU64, Ordering};

pub type CorrelationId = u64;

pub const RESERVED_CORRELATION_ID: CorrelationId = 0;

pub trait CorrelationIdGenerator {
    fn generate(&self) -> CorrelationId;
}

pub struct MonotonicCorrelationIdGenerator {
    last_generated: AtomicU64,
}

impl CorrelationIdGenerator for MonotonicCorrelationIdGenerator {
    fn generate(&self) -> CorrelationId {
        return self.last_generated.fetch_add(1, Ordering::SeqCst) + 1;
    }
}

impl MonotonicCorrelationIdGenerator {
    pub fn new() -> Self {
        return MonotonicCorrelationIdGenerator { last_generated: AtomicU64::new(RESERVED_CORRELATION_ID) };
    }
}
