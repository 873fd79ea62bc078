//! Gateway connection lifecycle.
//!
//! ```text
//! Disconnected -> Connecting -> Ready <-> Reconnecting
//!                                 \           /
//!                                  -> Disconnected (terminal, on close)
//! ```
//!
//! The state is written by the bot's event handler on the gateway executor and read by
//! request threads, so it is kept in an atomic rather than behind a lock.

use std::{
    fmt,
    sync::atomic::{AtomicU8, Ordering},
};

/// Internal marker for the terminal disconnected state; reported as `Disconnected`.
const CLOSED: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConnectionState {
    Disconnected = 0,
    Connecting = 1,
    Ready = 2,
    Reconnecting = 3,
}

impl ConnectionState {
    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Connecting,
            2 => Self::Ready,
            3 => Self::Reconnecting,
            _ => Self::Disconnected,
        }
    }

    /// Whether moving from `self` to `next` is a legal step of the lifecycle.
    ///
    /// Closing is not a transition; see [`Connection::close`].
    pub fn can_transition_to(self, next: ConnectionState) -> bool {
        use ConnectionState::*;

        matches!(
            (self, next),
            (Disconnected, Connecting)
                | (Connecting, Ready)
                | (Ready, Reconnecting)
                | (Reconnecting, Ready)
        )
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Ready => "ready",
            Self::Reconnecting => "reconnecting",
        };
        f.write_str(name)
    }
}

/// Shared view of the gateway connection state.
#[derive(Debug)]
pub struct Connection {
    state: AtomicU8,
}

impl Default for Connection {
    fn default() -> Self {
        Self::new()
    }
}

impl Connection {
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(ConnectionState::Disconnected as u8),
        }
    }

    pub fn state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Whether mutating operations may be sent to Discord.
    pub fn is_ready(&self) -> bool {
        self.state() == ConnectionState::Ready
    }

    /// Whether the connection has been shut down for good.
    pub fn is_closed(&self) -> bool {
        self.state.load(Ordering::Acquire) == CLOSED
    }

    /// Moves to `next` if the lifecycle allows it from the current state.
    ///
    /// # Returns
    /// - `true` - The state is now `next`
    /// - `false` - The step is not allowed, or the connection is closed; state unchanged
    pub fn transition(&self, next: ConnectionState) -> bool {
        self.state
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |raw| {
                if raw == CLOSED {
                    return None;
                }
                ConnectionState::from_u8(raw)
                    .can_transition_to(next)
                    .then_some(next as u8)
            })
            .is_ok()
    }

    /// Enters the terminal `Disconnected` state. Later transitions are refused.
    pub fn close(&self) {
        self.state.store(CLOSED, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the full happy-path lifecycle including a reconnect.
    ///
    /// Expected: every step accepted and reported
    #[test]
    fn walks_lifecycle() {
        let connection = Connection::new();
        assert_eq!(connection.state(), ConnectionState::Disconnected);

        assert!(connection.transition(ConnectionState::Connecting));
        assert!(!connection.is_ready());
        assert!(connection.transition(ConnectionState::Ready));
        assert!(connection.is_ready());
        assert!(connection.transition(ConnectionState::Reconnecting));
        assert!(!connection.is_ready());
        assert!(connection.transition(ConnectionState::Ready));
        assert!(connection.is_ready());
    }

    /// Tests that steps outside the lifecycle are refused.
    ///
    /// Expected: state unchanged after each refused step
    #[test]
    fn refuses_illegal_transitions() {
        let connection = Connection::new();

        assert!(!connection.transition(ConnectionState::Ready));
        assert!(!connection.transition(ConnectionState::Reconnecting));
        assert_eq!(connection.state(), ConnectionState::Disconnected);

        connection.transition(ConnectionState::Connecting);
        assert!(!connection.transition(ConnectionState::Reconnecting));
        assert_eq!(connection.state(), ConnectionState::Connecting);
    }

    /// Tests that closing is terminal.
    ///
    /// Expected: Disconnected and closed, with no way back to Connecting
    #[test]
    fn close_is_terminal() {
        let connection = Connection::new();
        connection.transition(ConnectionState::Connecting);
        connection.transition(ConnectionState::Ready);

        connection.close();

        assert_eq!(connection.state(), ConnectionState::Disconnected);
        assert!(connection.is_closed());
        assert!(!connection.transition(ConnectionState::Connecting));
        assert!(!connection.transition(ConnectionState::Ready));
    }
}
