use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

use crate::correlation::correlation_id::CorrelationId;

pub struct RequestTimeoutError {
    pub correlation_id: CorrelationId,
}

impl Display for RequestTimeoutError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "The request timed out, correlation id {}", self.correlation_id)
    }
}

impl Debug for RequestTimeoutError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "The request timed out, correlation id {}", self.correlation_id)
    }
}

impl Error for RequestTimeoutError {}
