use std::time::SystemTime;

use crate::correlation::correlation_id::CorrelationId;

pub(crate) struct TimeoutRecord {
    correlation_id: CorrelationId,
    deadline: SystemTime,
}

impl TimeoutRecord {
    pub(crate) fn new(correlation_id: CorrelationId, deadline: SystemTime) -> Self {
        return TimeoutRecord { correlation_id, deadline };
    }

    pub(crate) fn get_correlation_id(&self) -> CorrelationId {
        return self.correlation_id;
    }

    #[cfg(test)]
    pub(crate) fn get_deadline(&self) -> SystemTime {
        return self.deadline;
    }

    pub(crate) fn has_expired_by(&self, now: SystemTime) -> bool {
        return self.deadline <= now;
    }
}
