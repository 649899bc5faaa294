use std::time::SystemTime;

#[derive(Clone)]
pub struct SystemClock {}

pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;
}

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        return SystemTime::now();
    }
}

impl SystemClock {
    pub fn new() -> SystemClock {
        return SystemClock {};
    }
}
