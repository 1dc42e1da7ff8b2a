//! # Terminal UI
//!
//! Event loop and screen state. The loop owns the terminal, drains input
//! events, feeds `Action`s through the reducer in `core::action`, and spawns
//! background tasks for every `Effect` the reducer returns. Background tasks
//! report back as `Action`s over an mpsc channel.
//!
//! Rendering is on demand: the loop redraws only after input, a background
//! action, or while a pending indicator is animating.

pub mod components;
pub mod event;
mod ui;

use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::assistant::{self, ChatClient, ChatMessage};
use crate::core::action::{update, Action, Effect};
use crate::core::auth::{self, SignUpDraft, UsernameStatus};
use crate::core::config::ResolvedConfig;
use crate::core::nav::ScreenId;
use crate::core::state::App;
use crate::core::store;
use crate::tui::components::{
    BookingFormEvent, BookingFormState, BookingsListEvent, BookingsListState, ChatPanelEvent,
    ChatPanelState, ForgotPasswordEvent, ForgotPasswordState, HomeEvent, HomeMenuState,
    MenuTarget, SignInEvent, SignInState, SignUpEvent, SignUpState,
};
use crate::tui::event::{poll_event_immediate, poll_event_timeout, TuiEvent};

/// Delay before the post-registration redirect to the gallery.
const SIGN_UP_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Screen-local UI state that never goes through the reducer: form buffers,
/// list cursors, scroll offsets. Reset when the screen changes, matching the
/// remount-on-navigation behavior of the screens.
pub struct TuiState {
    pub home_menu: HomeMenuState,
    pub booking_form: BookingFormState,
    pub sign_in: SignInState,
    pub sign_up: SignUpState,
    pub forgot_password: ForgotPasswordState,
    pub bookings_list: BookingsListState,
    pub chat_panel: ChatPanelState,
    pub gallery_index: usize,
    pub scroll: u16,
    pub confirm_cancel: bool,
    last_screen: ScreenId,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            home_menu: HomeMenuState::new(),
            booking_form: BookingFormState::new(),
            sign_in: SignInState::new(),
            sign_up: SignUpState::new(),
            forgot_password: ForgotPasswordState::new(),
            bookings_list: BookingsListState::new(),
            chat_panel: ChatPanelState::default(),
            gallery_index: 0,
            scroll: 0,
            confirm_cancel: false,
            last_screen: ScreenId::Home,
        }
    }

    /// Fresh transient state for the screen just navigated to.
    fn on_screen_change(&mut self, screen: ScreenId) {
        self.scroll = 0;
        self.confirm_cancel = false;
        match screen {
            ScreenId::BookingForm => self.booking_form = BookingFormState::new(),
            ScreenId::SignIn => self.sign_in = SignInState::new(),
            ScreenId::SignUp => self.sign_up = SignUpState::new(),
            ScreenId::ForgotPassword => self.forgot_password = ForgotPasswordState::new(),
            ScreenId::Gallery => self.gallery_index = 0,
            ScreenId::MyBookings => self.bookings_list = BookingsListState::new(),
            _ => {}
        }
        self.last_screen = screen;
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = assistant::build_client(&config);
    let mut app = App::new(&config, store::load_session());
    let instruction = Arc::new(assistant::system_instruction(&app.inventory));
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame
    let mut redirect_at: Option<Instant> = None;

    loop {
        if app.nav.current != tui.last_screen {
            tui.on_screen_change(app.nav.current);
            needs_redraw = true;
        }

        // Sync component props with App state
        tui.home_menu.signed_in = app.user.is_some();
        tui.bookings_list.len = app.bookings.len();

        // Arm the post-registration redirect once, when success lands
        if app.auth.sign_up_success {
            if redirect_at.is_none() {
                redirect_at = Some(Instant::now() + SIGN_UP_REDIRECT_DELAY);
            }
        } else {
            redirect_at = None;
        }
        if let Some(deadline) = redirect_at {
            if Instant::now() >= deadline {
                redirect_at = None;
                apply(&mut app, Action::SignUpRedirect, &client, &instruction, &tx);
                needs_redraw = true;
            }
        }

        let animating = app.chat.is_loading
            || app.auth.sign_in_pending
            || app.auth.sign_up_pending
            || app.auth.username_status == UsernameStatus::Checking
            || redirect_at.is_some();

        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while a pending indicator runs, long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits
            if matches!(event, TuiEvent::ForceQuit) {
                apply(&mut app, Action::Quit, &client, &instruction, &tx);
                continue;
            }

            // Ctrl+H returns to the landing screen from anywhere
            if matches!(event, TuiEvent::GoHome) {
                apply(&mut app, Action::ResetHome, &client, &instruction, &tx);
                continue;
            }

            // Ctrl+A opens the assistant; once open, the panel owns the key
            if matches!(event, TuiEvent::ToggleChat) && !app.chat.is_open {
                apply(&mut app, Action::ToggleChat, &client, &instruction, &tx);
                continue;
            }

            // When the chat overlay is open, route all events to it
            if app.chat.is_open {
                match tui.chat_panel.handle_event(&event) {
                    Some(ChatPanelEvent::Send(message)) => {
                        apply(
                            &mut app,
                            Action::ChatSubmitted(message),
                            &client,
                            &instruction,
                            &tx,
                        );
                    }
                    Some(ChatPanelEvent::Close) => {
                        apply(&mut app, Action::ToggleChat, &client, &instruction, &tx);
                    }
                    None => {}
                }
                continue;
            }

            handle_screen_event(&mut app, &mut tui, &event, &client, &instruction, &tx);
        }

        // Handle background task actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            apply(&mut app, action, &client, &instruction, &tx);
        }

        if app.should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Run one action through the reducer and spawn whatever it asks for.
fn apply(
    app: &mut App,
    action: Action,
    client: &Arc<dyn ChatClient>,
    instruction: &Arc<String>,
    tx: &mpsc::Sender<Action>,
) {
    let effect = update(app, action);
    match effect {
        Effect::None => {}
        Effect::CheckSignIn {
            identifier,
            password,
        } => spawn_sign_in(identifier, password, tx.clone()),
        Effect::RegisterAccount(draft) => spawn_register(draft, tx.clone()),
        Effect::CheckUsername {
            username,
            generation,
        } => spawn_username_check(username, generation, tx.clone()),
        Effect::SendChat {
            message,
            transcript,
        } => spawn_chat(
            client.clone(),
            instruction.clone(),
            message,
            transcript,
            tx.clone(),
        ),
        Effect::ClearSession => {
            if let Err(e) = store::clear_session() {
                warn!("Failed to clear stored session: {}", e);
            }
        }
    }
}

fn handle_screen_event(
    app: &mut App,
    tui: &mut TuiState,
    event: &TuiEvent,
    client: &Arc<dyn ChatClient>,
    instruction: &Arc<String>,
    tx: &mpsc::Sender<Action>,
) {
    let mut actions: Vec<Action> = Vec::new();

    match app.nav.current {
        ScreenId::Home => match tui.home_menu.handle_event(event) {
            Some(HomeEvent::Quit) => actions.push(Action::Quit),
            Some(HomeEvent::Open(MenuTarget::ViewCar)) => actions.push(Action::SelectCar(0)),
            Some(HomeEvent::Open(MenuTarget::Screen(screen))) => {
                actions.push(Action::Navigate(screen))
            }
            Some(HomeEvent::Open(MenuTarget::SignOut)) => actions.push(Action::Logout),
            None => {}
        },
        ScreenId::CarDetails => match event {
            TuiEvent::Escape => actions.push(Action::Back),
            TuiEvent::InputChar('b') => actions.push(Action::Navigate(ScreenId::BookingForm)),
            TuiEvent::InputChar('p') => actions.push(Action::Navigate(ScreenId::Pricing)),
            TuiEvent::InputChar('g') => actions.push(Action::Navigate(ScreenId::Gallery)),
            _ => {}
        },
        ScreenId::Pricing => match event {
            TuiEvent::Escape => actions.push(Action::Back),
            TuiEvent::InputChar('b') => actions.push(Action::Navigate(ScreenId::BookingForm)),
            TuiEvent::CursorUp => tui.scroll = tui.scroll.saturating_sub(1),
            TuiEvent::CursorDown => tui.scroll = tui.scroll.saturating_add(1),
            _ => {}
        },
        ScreenId::BookingForm => match tui.booking_form.handle_event(event) {
            Some(BookingFormEvent::Submit) => {
                let car = app
                    .selected_car
                    .clone()
                    .unwrap_or_else(|| app.inventory[0].clone());
                let today = chrono::Local::now().date_naive();
                if let Some(booking) =
                    tui.booking_form.try_submit(&car, &app.pickup_location, today)
                {
                    actions.push(Action::BookingSubmitted(booking));
                }
            }
            Some(BookingFormEvent::Cancel) => actions.push(Action::Back),
            None => {}
        },
        ScreenId::SignIn => match tui.sign_in.handle_event(event) {
            Some(SignInEvent::Submit {
                identifier,
                password,
            }) => actions.push(Action::SignInSubmitted {
                identifier,
                password,
            }),
            Some(SignInEvent::ForgotPassword) => {
                actions.push(Action::Navigate(ScreenId::ForgotPassword))
            }
            Some(SignInEvent::SignUp) => actions.push(Action::Navigate(ScreenId::SignUp)),
            Some(SignInEvent::Cancel) => actions.push(Action::Back),
            None => {}
        },
        ScreenId::SignUp => match tui.sign_up.handle_event(event) {
            Some(SignUpEvent::Submit) => {
                let taken = app.auth.username_status == UsernameStatus::Taken;
                if let Some(draft) = tui.sign_up.try_submit(taken) {
                    actions.push(Action::SignUpSubmitted(draft));
                }
            }
            Some(SignUpEvent::UsernameChanged(username)) => {
                actions.push(Action::UsernameEdited(username))
            }
            Some(SignUpEvent::Cancel) => actions.push(Action::Back),
            None => {}
        },
        ScreenId::ForgotPassword => {
            if let Some(ForgotPasswordEvent::ReturnToSignIn) = tui.forgot_password.handle_event(event)
            {
                actions.push(Action::Back);
            }
        }
        ScreenId::Gallery => {
            let count = app
                .selected_car
                .as_ref()
                .unwrap_or(&app.inventory[0])
                .gallery
                .len()
                .max(1);
            match event {
                TuiEvent::Escape => actions.push(Action::Back),
                TuiEvent::CursorLeft => tui.gallery_index = (tui.gallery_index + count - 1) % count,
                TuiEvent::CursorRight => tui.gallery_index = (tui.gallery_index + 1) % count,
                TuiEvent::InputChar('b') => actions.push(Action::Navigate(ScreenId::BookingForm)),
                _ => {}
            }
        }
        ScreenId::Terms | ScreenId::Faq | ScreenId::Support | ScreenId::Reviews => match event {
            TuiEvent::Escape => actions.push(Action::Back),
            TuiEvent::CursorUp => tui.scroll = tui.scroll.saturating_sub(1),
            TuiEvent::CursorDown => tui.scroll = tui.scroll.saturating_add(1),
            _ => {}
        },
        ScreenId::MyBookings => match tui.bookings_list.handle_event(event) {
            Some(BookingsListEvent::OpenReceipt(index)) => {
                if let Some(booking) = app.bookings.get(index) {
                    actions.push(Action::ViewReceipt(booking.id.clone()));
                }
            }
            Some(BookingsListEvent::Manage(index)) => {
                if let Some(booking) = app.bookings.get(index) {
                    actions.push(Action::ManageBooking(booking.id.clone()));
                }
            }
            Some(BookingsListEvent::Back) => actions.push(Action::Back),
            None => {}
        },
        ScreenId::Receipt => match event {
            TuiEvent::Escape => actions.push(Action::Back),
            TuiEvent::InputChar('m') => {
                if let Some(id) = app.selected_booking().map(|b| b.id.clone()) {
                    actions.push(Action::ManageBooking(id));
                }
            }
            _ => {}
        },
        ScreenId::ManageBooking => match event {
            TuiEvent::Escape => actions.push(Action::Back),
            // Cancellation needs a second press to confirm
            TuiEvent::InputChar('c') => {
                let cancellable = app
                    .selected_booking()
                    .map(|b| b.status != crate::core::booking::BookingStatus::Cancelled)
                    .unwrap_or(false);
                if cancellable {
                    if tui.confirm_cancel {
                        tui.confirm_cancel = false;
                        if let Some(id) = app.selected_booking().map(|b| b.id.clone()) {
                            actions.push(Action::CancelBooking(id));
                        }
                    } else {
                        tui.confirm_cancel = true;
                    }
                }
            }
            _ => {}
        },
    }

    for action in actions {
        apply(app, action, client, instruction, tx);
    }
}

fn spawn_sign_in(identifier: String, password: String, tx: mpsc::Sender<Action>) {
    info!("Spawning credential check");
    tokio::spawn(async move {
        // Simulated backend latency
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let accounts = store::load_accounts();
        let result = match auth::check_credentials(&accounts, &identifier, &password) {
            Some(user) => {
                if let Err(e) = store::save_session(&user) {
                    warn!("Failed to persist session: {}", e);
                }
                Ok(user)
            }
            None => Err("Invalid username or password".to_string()),
        };
        if tx.send(Action::SignInResult(result)).is_err() {
            warn!("Failed to send sign-in result: receiver dropped");
        }
    });
}

fn spawn_register(draft: SignUpDraft, tx: mpsc::Sender<Action>) {
    info!("Spawning account registration");
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let mut accounts = store::load_accounts();
        let result = if auth::is_email_registered(&accounts, &draft.email) {
            Err("An account with this email already exists".to_string())
        } else if auth::is_username_taken(&accounts, &draft.username) {
            Err("Username is already taken".to_string())
        } else {
            let record = auth::new_account(&draft);
            let profile = record.profile.clone();
            accounts.push(record);
            if let Err(e) = store::save_accounts(&accounts) {
                warn!("Failed to persist accounts: {}", e);
            }
            if let Err(e) = store::save_session(&profile) {
                warn!("Failed to persist session: {}", e);
            }
            Ok(profile)
        };
        if tx.send(Action::SignUpResult(result)).is_err() {
            warn!("Failed to send sign-up result: receiver dropped");
        }
    });
}

fn spawn_username_check(username: String, generation: u64, tx: mpsc::Sender<Action>) {
    debug!("Spawning username check (generation {})", generation);
    tokio::spawn(async move {
        // The wait doubles as the debounce: results from superseded
        // generations are discarded by the reducer.
        tokio::time::sleep(Duration::from_millis(500)).await;
        let accounts = store::load_accounts();
        let taken = auth::is_username_taken(&accounts, &username);
        let _ = tx.send(Action::UsernameChecked { generation, taken });
    });
}

fn spawn_chat(
    client: Arc<dyn ChatClient>,
    instruction: Arc<String>,
    message: String,
    transcript: Vec<ChatMessage>,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning assistant request via {}", client.name());
    tokio::spawn(async move {
        let result = client
            .reply(&message, &transcript, &instruction)
            .await
            .map_err(|e| e.to_string());
        if tx.send(Action::ChatReply(result)).is_err() {
            warn!("Failed to send assistant reply: receiver dropped");
        }
    });
}
