// --- File: crates/roomify_booking/src/flow.rs ---
//! Navigation flow between the two application screens.
//!
//! The flow is a value: transitions consume the current flow and return the
//! next one, so there is no shared mutable screen state. Only two moves
//! exist, Home to Booking and Booking back to Home.

/// The screens a client of this service presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Booking,
}

/// Explicit application navigation state. Starts at [`Screen::Home`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppFlow {
    screen: Screen,
}

impl AppFlow {
    pub fn new() -> Self {
        Self {
            screen: Screen::Home,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The landing screen's single navigation action.
    pub fn to_booking(self) -> Self {
        Self {
            screen: Screen::Booking,
        }
    }

    /// The explicit "go home" action from the booking screen.
    pub fn go_home(self) -> Self {
        Self {
            screen: Screen::Home,
        }
    }
}

impl Default for AppFlow {
    fn default() -> Self {
        Self::new()
    }
}
