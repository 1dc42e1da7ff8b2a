pub mod booking_form;
pub mod bookings_list;
pub mod chat_panel;
pub mod forgot_password;
pub mod home_menu;
pub mod sign_in;
pub mod sign_up;
pub mod text_field;

pub use booking_form::{BookingForm, BookingFormEvent, BookingFormState};
pub use bookings_list::{BookingsList, BookingsListEvent, BookingsListState};
pub use chat_panel::{ChatPanel, ChatPanelEvent, ChatPanelState};
pub use forgot_password::{ForgotPasswordEvent, ForgotPasswordState};
pub use home_menu::{HomeEvent, HomeMenu, HomeMenuState, MenuTarget};
pub use sign_in::{SignIn, SignInEvent, SignInState};
pub use sign_up::{SignUp, SignUpEvent, SignUpState};
