//! Top-level frame layout and the static screens.
//!
//! One title bar, one main area dispatched exhaustively on the current
//! screen, one key-hint bar. Interactive screens delegate to their component
//! in `components/`; purely informational screens (pricing, FAQ, terms,
//! reviews, support) are drawn here from fixed copy.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::booking::{format_currency, Booking, BookingStatus};
use crate::core::catalog::{whatsapp_inquiry_url, whatsapp_sales_url, Car};
use crate::core::nav::ScreenId;
use crate::core::state::App;
use crate::tui::components::{BookingForm, BookingsList, ChatPanel, HomeMenu, SignIn, SignUp};
use crate::tui::TuiState;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    draw_title_bar(frame, title_area, app);

    match app.nav.current {
        ScreenId::Home => {
            HomeMenu::new(&mut tui.home_menu, app.user.as_ref()).render(frame, main_area)
        }
        ScreenId::CarDetails => draw_car_details(frame, main_area, active_car(app)),
        ScreenId::Pricing => draw_pricing(frame, main_area, active_car(app), tui.scroll),
        ScreenId::BookingForm => {
            BookingForm::new(&tui.booking_form, active_car(app)).render(frame, main_area)
        }
        ScreenId::SignIn => SignIn::new(&tui.sign_in, &app.auth).render(frame, main_area),
        ScreenId::SignUp => SignUp::new(&tui.sign_up, &app.auth).render(frame, main_area),
        ScreenId::ForgotPassword => tui.forgot_password.render(frame, main_area),
        ScreenId::Gallery => draw_gallery(frame, main_area, active_car(app), tui.gallery_index),
        ScreenId::Terms => draw_terms(frame, main_area, tui.scroll),
        ScreenId::Faq => draw_faq(frame, main_area, tui.scroll),
        ScreenId::Support => draw_support(frame, main_area, tui.scroll),
        ScreenId::Reviews => draw_reviews(frame, main_area, tui.scroll),
        ScreenId::MyBookings => {
            BookingsList::new(&mut tui.bookings_list, &app.bookings).render(frame, main_area)
        }
        ScreenId::Receipt => draw_receipt(frame, main_area, app.selected_booking()),
        ScreenId::ManageBooking => {
            draw_manage(frame, main_area, app.selected_booking(), tui.confirm_cancel)
        }
    }

    draw_help_bar(frame, help_area, app);

    // Assistant overlay always draws on top of the current screen
    if app.chat.is_open {
        ChatPanel::new(&tui.chat_panel, &app.chat).render(frame, main_area);
    }
}

fn draw_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut text = format!("VL Rent a Car | {}", app.nav.current.title());
    if let Some(status) = &app.status_message {
        text.push_str(" | ");
        text.push_str(status);
    }
    if !app.chat.is_open && app.chat.has_notification {
        text.push_str(" | (1) VL Bot");
    }
    frame.render_widget(
        Span::styled(text, Style::default().add_modifier(Modifier::BOLD)),
        area,
    );
}

fn draw_help_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.nav.current {
        ScreenId::Home => "Up/Down Select  Enter Open  Esc Quit  Ctrl+A Assistant",
        ScreenId::CarDetails => "b Book  p Pricing  g Gallery  Esc Back  Ctrl+A Assistant",
        ScreenId::Pricing => "b Book  Up/Down Scroll  Esc Back",
        ScreenId::BookingForm => "Tab Next field  Space Toggle  Enter Submit  Esc Back",
        ScreenId::SignIn | ScreenId::SignUp => "Tab Next field  Enter Submit  Esc Back",
        ScreenId::ForgotPassword => "Enter Submit  Esc Back",
        ScreenId::Gallery => "Left/Right Photo  b Book  Esc Back",
        ScreenId::Terms | ScreenId::Faq | ScreenId::Support | ScreenId::Reviews => {
            "Up/Down Scroll  Esc Back"
        }
        ScreenId::MyBookings => "Enter Receipt  m Manage  Esc Back",
        ScreenId::Receipt => "m Manage  Esc Back",
        ScreenId::ManageBooking => "c Cancel booking  Esc Back",
    };
    frame.render_widget(
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Car behind the details/pricing/booking/gallery screens. Selection falls
/// back to the featured vehicle so these screens are reachable from anywhere.
fn active_car(app: &App) -> &Car {
    app.selected_car.as_ref().unwrap_or(&app.inventory[0])
}

fn heading<T: Into<std::borrow::Cow<'static, str>>>(text: T) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}

fn sub<T: Into<std::borrow::Cow<'static, str>>>(text: T) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::Gray)))
}

fn accent<T: Into<std::borrow::Cow<'static, str>>>(text: T) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::Yellow)))
}

fn draw_car_details(frame: &mut Frame, area: Rect, car: &Car) {
    let mut lines = vec![
        heading(car.name.clone()),
        sub(format!(
            "{} | {} | {:?} | {} | {} seats",
            car.category,
            car.year,
            car.transmission,
            car.fuel_type.label(),
            car.seats
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled(
                format_currency(&car.currency, car.price_per_day),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" / day", Style::default().fg(Color::Gray)),
        ]),
        sub(format!("Mileage allowance: {}", car.mileage_limit)),
        Line::raw(""),
    ];
    for chunk in textwrap_lines(&car.description) {
        lines.push(sub(chunk));
    }
    lines.push(Line::raw(""));
    lines.push(heading("Features"));
    for feature in &car.features {
        lines.push(Line::from(vec![
            Span::styled("  + ", Style::default().fg(Color::Green)),
            Span::raw(feature.as_str()),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(heading("Availability inquiry (WhatsApp)"));
    lines.push(accent(whatsapp_inquiry_url(car)));

    let block = Block::bordered()
        .title(" Vehicle ")
        .padding(Padding::horizontal(1));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

// Paragraph wraps at render time; this exists only so detail copy keeps its
// source sentences as separate Lines.
fn textwrap_lines(text: &str) -> Vec<String> {
    text.split(". ")
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s.ends_with('.') {
                s.to_string()
            } else {
                format!("{}.", s)
            }
        })
        .collect()
}

fn draw_pricing(frame: &mut Frame, area: Rect, car: &Car, scroll: u16) {
    let lines = vec![
        heading("Standard City Hybrid"),
        sub(format!("{} ({})", car.name.to_uppercase(), car.year)),
        Line::raw(""),
        Line::from(vec![
            Span::styled(
                format_currency(&car.currency, car.price_per_day),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" / Day", Style::default().fg(Color::Gray)),
        ]),
        Line::raw(""),
        heading("Included"),
        sub("  + 150 KM daily mileage"),
        sub("  + Full insurance"),
        sub("  + 24/7 roadside assist"),
        Line::raw(""),
        heading("Specifics"),
        sub("  - Extra mileage: LKR 25 / KM"),
        sub("  - Self-drive only"),
        sub("  - Fuel excluded (level-to-level)"),
        Line::raw(""),
        heading("Security"),
        sub("  - No cash deposit"),
        sub("  - Vehicle hold: motorcycle/three-wheeler required"),
        sub("  - 1 guarantor with valid NIC"),
        Line::raw(""),
        heading("Documents"),
        sub("  1. Driving License (valid local or international)"),
        sub("  2. National Identity Card or valid Passport"),
        sub("  3. Billing proof (recent utility bill)"),
        Line::raw(""),
        heading("Long term rentals"),
        sub("Special weekly and monthly rates available. Contact sales:"),
        accent(whatsapp_sales_url()),
    ];
    let block = Block::bordered()
        .title(" Pricing ")
        .padding(Padding::horizontal(1));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(block),
        area,
    );
}

fn draw_gallery(frame: &mut Frame, area: Rect, car: &Car, index: usize) {
    let count = car.gallery.len().max(1);
    let index = index % count;
    let lines = vec![
        heading(car.name.clone()),
        Line::raw(""),
        sub(format!("Photo {} of {}", index + 1, count)),
        accent(car.gallery.get(index).cloned().unwrap_or_default()),
        Line::raw(""),
        sub("Use Left/Right to browse photos."),
    ];
    let block = Block::bordered()
        .title(" Gallery ")
        .padding(Padding::horizontal(1));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

struct FaqEntry {
    category: &'static str,
    question: &'static str,
    answer: &'static str,
}

const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        category: "Booking & Payments",
        question: "Do I need a credit card to book?",
        answer: "No, we do not require a credit card. However, a refundable vehicle hold \
                 (motorcycle or three-wheeler) is required as security instead of a cash deposit.",
    },
    FaqEntry {
        category: "Booking & Payments",
        question: "Is an advance payment required?",
        answer: "Yes. To confirm your reservation, a non-refundable advance payment of LKR 2,000 \
                 is required. This amount will be deducted from your final bill upon pickup.",
    },
    FaqEntry {
        category: "Vehicle & Usage",
        question: "What is the daily mileage limit?",
        answer: "Our standard plan includes 150KM per day. Any additional mileage is charged at a \
                 flat rate of LKR 25 per kilometer.",
    },
    FaqEntry {
        category: "Vehicle & Usage",
        question: "Are fuel costs included?",
        answer: "No, the vehicle is provided with a certain fuel level and must be returned with \
                 the same level. Fuel costs during the trip are borne by the renter.",
    },
    FaqEntry {
        category: "Vehicle & Usage",
        question: "What happens if the car breaks down?",
        answer: "All our vehicles are rigorously maintained. However, in the unlikely event of a \
                 breakdown, we offer 24/7 roadside assistance and will provide a replacement \
                 vehicle if necessary.",
    },
    FaqEntry {
        category: "Policies",
        question: "Can I rent a car with a driver?",
        answer: "Currently, we specialize in self-drive rentals to give you maximum privacy and \
                 flexibility. We do not provide drivers.",
    },
    FaqEntry {
        category: "Policies",
        question: "Can I extend my rental period?",
        answer: "We cannot guarantee extensions after a successful booking as other customers may \
                 have reserved the vehicle immediately after your scheduled return. If you need \
                 to extend, please request it well in advance.",
    },
];

fn draw_faq(frame: &mut Frame, area: Rect, scroll: u16) {
    let mut lines = Vec::new();
    let mut last_category = "";
    for entry in FAQ_ENTRIES {
        if entry.category != last_category {
            if !last_category.is_empty() {
                lines.push(Line::raw(""));
            }
            lines.push(Line::from(Span::styled(
                entry.category.to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            last_category = entry.category;
        }
        lines.push(heading(entry.question));
        lines.push(sub(entry.answer));
        lines.push(Line::raw(""));
    }
    lines.push(sub("Still have questions? support@vlrentacar.com"));

    let block = Block::bordered()
        .title(" How can we help? ")
        .padding(Padding::horizontal(1));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(block),
        area,
    );
}

fn draw_terms(frame: &mut Frame, area: Rect, scroll: u16) {
    let lines = vec![
        heading("Key Takeaways"),
        sub("  - No cash deposit: we hold a vehicle (bike/tuk) as security instead."),
        sub("  - Strict mileage: 150KM/day limit, excess charged at LKR 25/KM."),
        sub("  - Advance required: LKR 2,000 non-refundable advance to confirm."),
        sub("  - Documents: NIC/Passport + License + Guarantor required."),
        Line::raw(""),
        heading("1. Eligibility & Documentation"),
        sub("Renters must be at least 21 years of age, hold a valid driving license"),
        sub("(international or local) for at least 1 year, and provide a valid"),
        sub("National Identity Card (NIC) or Passport."),
        Line::raw(""),
        heading("2. Security Deposit & Vehicle Hold"),
        sub("We generally do not accept cash deposits; the security hold is mandatory."),
        sub("The customer must leave a motorcycle or three-wheeler in our custody for"),
        sub("the duration of the rental. It is securely stored and returned upon the"),
        sub("safe return of the rental car. Exceptions only at management discretion."),
        Line::raw(""),
        heading("3. Mileage & Fuel Policy"),
        sub("The daily rental includes a mileage allowance of 150KM; excess mileage is"),
        sub("charged at LKR 25 per kilometer. Fuel is not included: the vehicle must"),
        sub("be returned with the same fuel level as at pickup (level-to-level)."),
        Line::raw(""),
        heading("4. Insurance & Liabilities"),
        sub("All vehicles come with full insurance coverage. The renter remains liable"),
        sub("for accidents caused under the influence of alcohol or drugs, and for"),
        sub("negligence or traffic-law violations resulting in damage."),
        Line::raw(""),
        heading("5. Booking & Cancellation"),
        sub("A non-refundable advance payment of LKR 2,000 confirms the reservation"),
        sub("and is deducted from the total bill; the balance is due at handover."),
        sub("Cancellations made less than 24 hours before pickup may result in full"),
        sub("forfeiture of the advance."),
    ];
    let block = Block::bordered()
        .title(" Terms of Service ")
        .padding(Padding::horizontal(1));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(block),
        area,
    );
}

fn draw_support(frame: &mut Frame, area: Rect, scroll: u16) {
    let lines = vec![
        heading("Get in Touch"),
        sub("Have a question or need assistance with your booking?"),
        sub("Our team is here to help 24/7."),
        Line::raw(""),
        heading("Phone & WhatsApp"),
        accent("+94 76 612 6754"),
        Line::raw(""),
        heading("Email"),
        accent("support@vlrentacar.com"),
        Line::raw(""),
        heading("Main Office"),
        sub("No.4/5/B/1, Mulanawaththa, Makdandura, Matara."),
    ];
    let block = Block::bordered()
        .title(" Contact Support ")
        .padding(Padding::horizontal(1));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(block),
        area,
    );
}

struct Review {
    name: &'static str,
    role: &'static str,
    rating: u8,
    content: &'static str,
}

const REVIEWS: &[Review] = &[
    Review {
        name: "Dilshan Rajapaksa",
        role: "Business Traveler",
        rating: 5,
        content: "The Suzuki Wagon R was in immaculate condition. The hybrid fuel economy is a \
                  game changer for Colombo traffic. The handover process was fully digital and \
                  took less than 5 minutes.",
    },
    Review {
        name: "Sarah Mitchell",
        role: "Tourist (UK)",
        rating: 5,
        content: "First time driving in Sri Lanka and VL made it effortless. The team was waiting \
                  at the airport, paperwork was ready, and the car had Apple CarPlay which was \
                  essential for navigation.",
    },
    Review {
        name: "Kamal Perera",
        role: "Long Term Rental",
        rating: 4,
        content: "Been renting for 2 months now. Good rates for long term. They come to my office \
                  to do the routine checkups so I don't have to visit the garage. Very convenient.",
    },
    Review {
        name: "Nimali Silva",
        role: "Family Trip",
        rating: 5,
        content: "Safety was my priority. Checked the tires and ABS light before accepting, \
                  everything was perfect. Car seats were clean. Felt very safe driving down south \
                  with my kids.",
    },
    Review {
        name: "David Chen",
        role: "Digital Nomad",
        rating: 5,
        content: "Love the tech-forward approach. No paper forms, just WhatsApp and digital \
                  receipts. The car (Wagon R) is surprisingly spacious for all my gear.",
    },
];

fn draw_reviews(frame: &mut Frame, area: Rect, scroll: u16) {
    let mut lines = vec![
        heading("Trusted by Drivers"),
        sub("4.9 average | 842+ reviews | 98% would recommend"),
        Line::raw(""),
    ];
    for review in REVIEWS {
        let stars: String = "*".repeat(review.rating as usize);
        lines.push(Line::from(vec![
            Span::styled(
                review.name,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}  ", review.role),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(stars, Style::default().fg(Color::Yellow)),
        ]));
        lines.push(sub(review.content));
        lines.push(Line::raw(""));
    }
    let block = Block::bordered()
        .title(" Customer Reviews ")
        .padding(Padding::horizontal(1));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(block),
        area,
    );
}

fn draw_receipt(frame: &mut Frame, area: Rect, booking: Option<&Booking>) {
    let block = Block::bordered()
        .title(" Receipt ")
        .padding(Padding::horizontal(1));
    let booking = match booking {
        Some(b) => b,
        None => {
            frame.render_widget(
                Paragraph::new("Booking not found.")
                    .alignment(Alignment::Center)
                    .block(block),
                area,
            );
            return;
        }
    };
    let row = |label: &'static str, value: &str| {
        Line::from(vec![
            Span::styled(format!("{:<16}", label), Style::default().fg(Color::DarkGray)),
            Span::raw(value.to_string()),
        ])
    };
    let lines = vec![
        Line::from(vec![
            Span::styled("Booking Confirmed  ", Style::default().fg(Color::Green)),
            Span::styled(
                booking.id.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(""),
        row("Vehicle", &booking.car_name),
        row("Dates", &booking.dates),
        row("Pickup Time", &booking.pickup_time),
        row("Location", &booking.location),
        row("Mileage", &booking.mileage_limit),
        row("Status", booking.status.label()),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Total           ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                booking.price.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(""),
        sub("An advance of LKR 2,000 confirms this reservation; the balance is"),
        sub("due at handover. Bring your NIC/Passport and driving license."),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_manage(frame: &mut Frame, area: Rect, booking: Option<&Booking>, confirm_cancel: bool) {
    let block = Block::bordered()
        .title(" Manage Booking ")
        .padding(Padding::horizontal(1));
    let booking = match booking {
        Some(b) => b,
        None => {
            frame.render_widget(
                Paragraph::new("Booking not found.")
                    .alignment(Alignment::Center)
                    .block(block),
                area,
            );
            return;
        }
    };
    let status_color = match booking.status {
        BookingStatus::Cancelled => Color::Red,
        _ => Color::Green,
    };
    let mut lines = vec![
        heading(booking.car_name.clone()),
        Line::from(vec![
            Span::styled(format!("{}  ", booking.id), Style::default().fg(Color::Gray)),
            Span::styled(booking.status.label(), Style::default().fg(status_color)),
        ]),
        Line::raw(""),
        sub(format!("{} | {}", booking.dates, booking.pickup_time)),
        sub(format!("{} | {}", booking.location, booking.price)),
        Line::raw(""),
        heading("Need to change something? Message us:"),
        accent(whatsapp_sales_url()),
        Line::raw(""),
    ];
    if booking.status == BookingStatus::Cancelled {
        lines.push(sub("This booking has been cancelled."));
    } else if confirm_cancel {
        lines.push(Line::from(Span::styled(
            "Press c again to confirm the cancellation.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(sub("Press c to cancel this booking."));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{update, Action};
    use crate::core::booking::{finalize, BookingDraft};
    use crate::core::config::{
        ResolvedConfig, DEFAULT_ASSISTANT_BASE_URL, DEFAULT_ASSISTANT_MODEL,
    };
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> App {
        let config = ResolvedConfig {
            pickup_location: "Colombo 03 (Main Office)".to_string(),
            currency: "LKR".to_string(),
            assistant_api_key: None,
            assistant_base_url: DEFAULT_ASSISTANT_BASE_URL.to_string(),
            assistant_model: DEFAULT_ASSISTANT_MODEL.to_string(),
        };
        App::new(&config, None)
    }

    fn draw(app: &App, tui: &mut TuiState) {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
    }

    #[test]
    fn test_every_screen_renders() {
        let mut app = app();
        let mut tui = TuiState::new();
        let screens = [
            ScreenId::Home,
            ScreenId::CarDetails,
            ScreenId::Pricing,
            ScreenId::BookingForm,
            ScreenId::SignIn,
            ScreenId::SignUp,
            ScreenId::ForgotPassword,
            ScreenId::Gallery,
            ScreenId::Terms,
            ScreenId::Faq,
            ScreenId::Support,
            ScreenId::Reviews,
            ScreenId::MyBookings,
            ScreenId::Receipt,
            ScreenId::ManageBooking,
        ];
        for screen in screens {
            app.nav.navigate_to(screen);
            draw(&app, &mut tui);
        }
    }

    #[test]
    fn test_receipt_renders_booking_details() {
        let mut app = app();
        let draft = BookingDraft {
            first_name: "Kasun".to_string(),
            last_name: "Perera".to_string(),
            phone: "0771234567".to_string(),
            nic: "991234567V".to_string(),
            pickup_date: "2025-03-10".to_string(),
            pickup_time: "14:05".to_string(),
            return_date: "2025-03-12".to_string(),
            has_guarantor: true,
            has_hold_vehicle: true,
        };
        let car = app.inventory[0].clone();
        let booking = finalize(&draft, &car, &app.pickup_location);
        update(&mut app, Action::BookingSubmitted(booking));

        let mut tui = TuiState::new();
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("13,500"));
        assert!(rendered.contains("2:05 PM"));
    }

    #[test]
    fn test_chat_overlay_renders_over_any_screen() {
        let mut app = app();
        update(&mut app, Action::ToggleChat);
        let mut tui = TuiState::new();
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();
        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("VL Bot"));
    }
}
