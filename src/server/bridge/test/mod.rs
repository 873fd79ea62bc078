use std::{
    sync::Arc,
    thread,
    time::{Duration, Instant},
};

use crate::server::{error::bridge::BridgeError, executor::GatewayExecutor};


/// Timeout used by bridge tests; short enough to keep the suite fast.
const TEST_TIMEOUT: Duration = Duration::from_millis(200);
