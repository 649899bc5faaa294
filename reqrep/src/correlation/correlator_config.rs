use std::time::Duration;

pub struct CorrelatorConfig {
    request_field_name: String,
    reply_field_name: String,
    mutate_in_place: bool,
    request_expiry_after: Option<Duration>,
    sweep_interval: Option<Duration>,
}

impl CorrelatorConfig {
    pub fn new(
        request_field_name: String,
        reply_field_name: String,
        mutate_in_place: bool,
        request_expiry_after: Option<Duration>,
        sweep_interval: Option<Duration>,
    ) -> Self {
        return CorrelatorConfig {
            request_field_name,
            reply_field_name,
            mutate_in_place,
            request_expiry_after,
            sweep_interval,
        };
    }

    pub fn default() -> Self {
        return Self::new(
            "req".to_string(),
            "rep".to_string(),
            true,
            None,
            Some(Duration::from_secs(1)),
        );
    }

    pub fn with_request_expiry(request_expiry_after: Duration, sweep_interval: Option<Duration>) -> Self {
        return Self::new(
            "req".to_string(),
            "rep".to_string(),
            true,
            Some(request_expiry_after),
            sweep_interval,
        );
    }

    pub fn with_field_names(request_field_name: &str, reply_field_name: &str) -> Self {
        return Self::new(
            request_field_name.to_string(),
            reply_field_name.to_string(),
            true,
            None,
            Some(Duration::from_secs(1)),
        );
    }

    pub fn get_request_field_name(&self) -> &str {
        return &self.request_field_name;
    }

    pub fn get_reply_field_name(&self) -> &str {
        return &self.reply_field_name;
    }

    pub fn is_mutate_in_place(&self) -> bool {
        return self.mutate_in_place;
    }

    pub fn get_request_expiry_after(&self) -> Option<Duration> {
        return self.request_expiry_after;
    }

    pub fn get_sweep_interval(&self) -> Option<Duration> {
        return self.sweep_interval;
    }
}
