//! # View Router
//!
//! One screen is visible at a time. `Nav` holds the current screen and a
//! back-navigation stack, the same way a browser back button works minus the
//! forward stack. All transitions go through the three operations below; none
//! of them can fail.
//!
//! ```text
//! navigate_to(X):  history.push(current); current = X
//! back():          current = history.pop()        (Home fallback when empty)
//! reset_home():    history.clear(); current = Home
//! ```

use serde::{Deserialize, Serialize};

/// Every screen the router can make current. Rendering dispatches on this
/// exhaustively, so adding or removing a screen is a compile-time change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenId {
    Home,
    CarDetails,
    Pricing,
    BookingForm,
    SignIn,
    SignUp,
    ForgotPassword,
    Gallery,
    Terms,
    Faq,
    Support,
    Reviews,
    MyBookings,
    Receipt,
    ManageBooking,
}

impl ScreenId {
    /// Title shown in the top bar.
    pub fn title(self) -> &'static str {
        match self {
            ScreenId::Home => "VL Rent a Car",
            ScreenId::CarDetails => "Vehicle Details",
            ScreenId::Pricing => "Transparent Pricing",
            ScreenId::BookingForm => "Finalize Booking",
            ScreenId::SignIn => "Welcome Back",
            ScreenId::SignUp => "Create Member Account",
            ScreenId::ForgotPassword => "Reset Password",
            ScreenId::Gallery => "Fleet Gallery",
            ScreenId::Terms => "Terms & Conditions",
            ScreenId::Faq => "FAQ",
            ScreenId::Support => "Contact Support",
            ScreenId::Reviews => "Customer Reviews",
            ScreenId::MyBookings => "My Bookings",
            ScreenId::Receipt => "Booking Receipt",
            ScreenId::ManageBooking => "Manage Booking",
        }
    }
}

/// Current screen plus the back stack.
///
/// Invariant: `history` never contains the screen currently displayed —
/// `navigate_to` on the already-current screen is a no-op rather than a
/// duplicate push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nav {
    pub current: ScreenId,
    history: Vec<ScreenId>,
}

impl Default for Nav {
    fn default() -> Self {
        Self::new()
    }
}

impl Nav {
    pub fn new() -> Self {
        Nav {
            current: ScreenId::Home,
            history: Vec::new(),
        }
    }

    /// Push the current screen onto history and make `target` current.
    pub fn navigate_to(&mut self, target: ScreenId) {
        if target == self.current {
            return;
        }
        self.history.push(self.current);
        self.current = target;
    }

    /// Pop the most recent history entry and make it current.
    ///
    /// With empty history: not at Home → jump to Home (boundary fallback);
    /// already at Home → no-op.
    pub fn back(&mut self) {
        match self.history.pop() {
            Some(prev) => self.current = prev,
            None => self.current = ScreenId::Home,
        }
    }

    /// Clear history and return to Home.
    pub fn reset_home(&mut self) {
        self.history.clear();
        self.current = ScreenId::Home;
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_home_with_empty_history() {
        let nav = Nav::new();
        assert_eq!(nav.current, ScreenId::Home);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_navigate_pushes_history() {
        let mut nav = Nav::new();
        nav.navigate_to(ScreenId::Pricing);
        nav.navigate_to(ScreenId::BookingForm);
        assert_eq!(nav.current, ScreenId::BookingForm);
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_n_backs_undo_n_navigations() {
        let mut nav = Nav::new();
        let path = [ScreenId::Gallery, ScreenId::CarDetails, ScreenId::Pricing];
        for screen in path {
            nav.navigate_to(screen);
        }
        assert_eq!(nav.depth(), path.len());
        for _ in 0..path.len() {
            nav.back();
        }
        assert_eq!(nav.current, ScreenId::Home);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_navigate_to_current_screen_is_noop() {
        let mut nav = Nav::new();
        nav.navigate_to(ScreenId::Faq);
        nav.navigate_to(ScreenId::Faq);
        assert_eq!(nav.depth(), 1);
        nav.back();
        assert_eq!(nav.current, ScreenId::Home);
    }

    #[test]
    fn test_back_with_empty_history_falls_back_to_home() {
        let mut nav = Nav {
            current: ScreenId::Reviews,
            history: Vec::new(),
        };
        nav.back();
        assert_eq!(nav.current, ScreenId::Home);

        // Already at Home: stays put
        nav.back();
        assert_eq!(nav.current, ScreenId::Home);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_reset_home_clears_everything() {
        let mut nav = Nav::new();
        nav.navigate_to(ScreenId::SignIn);
        nav.navigate_to(ScreenId::SignUp);
        nav.reset_home();
        assert_eq!(nav.current, ScreenId::Home);
        assert_eq!(nav.depth(), 0);
    }
}
