//! The dashboards each portal shows after logging in. Everything in here is
//! placeholder content; none of it comes from the server.

use super::posting_form::PostingForm;
use crossterm::event::{KeyCode, KeyEvent};
use internships_core::Role;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Tabs},
    Frame,
};

/// A listing on the student dashboard: title, company, location, duration
type Listing = (&'static str, &'static str, &'static str, &'static str);

/// Internships shown under the student search box
const STUDENT_LISTINGS: &[Listing] = &[
    (
        "Software Engineering Intern",
        "TechCorp Inc.",
        "Mumbai, Maharashtra",
        "3 months",
    ),
    (
        "Data Science Intern",
        "Analytics Pro",
        "Pune, Maharashtra",
        "6 months",
    ),
];

/// Student profile fields
const STUDENT_PROFILE: &[(&str, &str)] = &[
    ("Name", "John Doe"),
    ("Email", "john.doe@fcrit.ac.in"),
    ("Department", "Computer Engineering"),
    ("Year", "3rd Year"),
];

/// Application and its status
const STUDENT_APPLICATIONS: &[(&str, &str)] = &[
    (
        "Software Engineering Intern - TechCorp Inc.",
        "Application Submitted",
    ),
    ("Web Development Intern - WebSolutions Ltd.", "Under Review"),
];

/// Company profile fields
const EMPLOYER_PROFILE: &[(&str, &str)] = &[
    ("Company", "TechCorp Inc."),
    ("Industry", "Information Technology"),
    ("Location", "Mumbai, Maharashtra"),
    ("Website", "www.techcorp.com"),
];

/// Label and count
const EMPLOYER_COUNTERS: &[(&str, &str)] = &[
    ("Active Internships", "3"),
    ("Total Applicants", "27"),
    ("Pending Reviews", "12"),
];

/// Title, duration, applicants, status
const EMPLOYER_INTERNSHIPS: &[[&str; 4]] = &[
    ["Software Engineering Intern", "3 months", "15", "Active"],
    ["Data Science Intern", "6 months", "8", "Active"],
    ["UI/UX Design Intern", "4 months", "4", "Active"],
];

/// Counters on the admin dashboard tab
const ADMIN_COUNTERS: &[(&str, &str)] = &[
    ("Total Users", "1,234"),
    ("Pending Companies", "15"),
    ("Internships to Review", "28"),
    ("Reports Generated", "42"),
];

/// Tabs on the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    /// Counters
    #[default]
    Dashboard,

    /// User management
    ManageUsers,

    /// Company approval
    ApproveCompanies,

    /// Internship review
    ReviewInternships,

    /// Reporting
    GenerateReports,
}

impl AdminTab {
    /// Every tab, in display order
    const ALL: [AdminTab; 5] = [
        AdminTab::Dashboard,
        AdminTab::ManageUsers,
        AdminTab::ApproveCompanies,
        AdminTab::ReviewInternships,
        AdminTab::GenerateReports,
    ];

    /// What the tab is called
    fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::ManageUsers => "Manage Users",
            Self::ApproveCompanies => "Approve Companies",
            Self::ReviewInternships => "Review Internships",
            Self::GenerateReports => "Generate Reports",
        }
    }

    /// The tab to the right, wrapping around
    fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping around
    fn prev(self) -> Self {
        Self::ALL[(self as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The interactive bits of a dashboard
#[derive(Debug)]
pub enum Dashboard {
    /// Listings and a profile
    Student,

    /// A posting form and company overview
    Employer(PostingForm),

    /// Tabbed admin overview
    Admin(AdminTab),
}

impl Dashboard {
    /// A fresh dashboard for a role
    pub fn new(role: Role) -> Self {
        match role {
            Role::Student => Self::Student,
            Role::Employer => Self::Employer(PostingForm::default()),
            Role::Admin => Self::Admin(AdminTab::default()),
        }
    }

    /// Does this dashboard want every key (e.g. because a text field is
    /// focused)?
    pub fn captures_keys(&self) -> bool {
        matches!(self, Self::Employer(form) if form.is_editing())
    }

    /// Give up keyboard focus
    pub fn blur(&mut self) {
        if let Self::Employer(form) = self {
            form.blur();
        }
    }

    /// Handle a key press. Returns a message for the status line, if any.
    pub fn handle_event(&mut self, key: KeyEvent) -> Option<&'static str> {
        match self {
            Self::Student => None,
            Self::Employer(form) => form.handle_event(key),
            Self::Admin(tab) => {
                match key.code {
                    KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => *tab = tab.next(),
                    KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => *tab = tab.prev(),
                    _ => {}
                }

                None
            }
        }
    }

    /// Draw the dashboard
    pub fn render(&self, role: Role, area: Rect, frame: &mut Frame<'_>) {
        let [title_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        frame.render_widget(
            Paragraph::new(role.dashboard_title()).bold(),
            title_area,
        );

        match self {
            Self::Student => render_student(body_area, frame),
            Self::Employer(form) => render_employer(form, body_area, frame),
            Self::Admin(tab) => render_admin(*tab, body_area, frame),
        }
    }
}

/// A bordered box with a title
fn section(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(Style::default().fg(color))
}

/// `Key: value` lines
fn key_values(items: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|(key, value)| Line::from(vec![Span::from(format!("{key}: ")).bold(), Span::from(*value)]))
        .collect()
}

/// Draw the student dashboard
fn render_student(area: Rect, frame: &mut Frame<'_>) {
    let [main, side] =
        Layout::horizontal([Constraint::Percentage(66), Constraint::Percentage(34)]).areas(area);
    let [search_area, listings_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(main);
    let [profile_area, status_area] =
        Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(side);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from("Search internships...").dark_gray(),
            Line::from("Filters: [Industry] [Duration] [Location]"),
        ])
        .block(section("Internship Search", Color::Blue)),
        search_area,
    );

    let listings: Vec<Line> = STUDENT_LISTINGS
        .iter()
        .flat_map(|(title, company, location, duration)| {
            [
                Line::from(*title).bold(),
                Line::from(*company),
                Line::from(format!("{location} • {duration}")).dark_gray(),
                Line::from(""),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(listings).block(section("Internship Listings", Color::Blue)),
        listings_area,
    );

    frame.render_widget(
        Paragraph::new(key_values(STUDENT_PROFILE)).block(section("Your Profile", Color::Blue)),
        profile_area,
    );

    let applications: Vec<Line> = STUDENT_APPLICATIONS
        .iter()
        .flat_map(|(what, status)| [Line::from(*what).bold(), Line::from(*status).yellow()])
        .collect();
    frame.render_widget(
        Paragraph::new(applications).block(section("Application Status", Color::Blue)),
        status_area,
    );
}

/// Draw the employer dashboard
fn render_employer(form: &PostingForm, area: Rect, frame: &mut Frame<'_>) {
    let [top, table_area] =
        Layout::vertical([Constraint::Min(17), Constraint::Length(7)]).areas(area);
    let [form_area, side] =
        Layout::horizontal([Constraint::Percentage(66), Constraint::Percentage(34)]).areas(top);
    let [profile_area, counters_area] =
        Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(side);

    form.render(form_area, frame);

    frame.render_widget(
        Paragraph::new(key_values(EMPLOYER_PROFILE))
            .block(section("Company Profile", Color::Green)),
        profile_area,
    );
    frame.render_widget(
        Paragraph::new(key_values(EMPLOYER_COUNTERS)).block(section("Dashboard", Color::Green)),
        counters_area,
    );

    let table = Table::new(
        EMPLOYER_INTERNSHIPS.iter().map(|row| Row::new(row.to_vec())),
        [
            Constraint::Fill(3),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ],
    )
    .header(Row::new(["Title", "Duration", "Applicants", "Status"]).bold())
    .block(section("Active Internships", Color::Green));
    frame.render_widget(table, table_area);
}

/// Draw the admin dashboard
fn render_admin(tab: AdminTab, area: Rect, frame: &mut Frame<'_>) {
    let [tabs_area, body_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let tabs = Tabs::new(AdminTab::ALL.iter().map(|tab| tab.title()))
        .select(tab as usize)
        .highlight_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, tabs_area);

    match tab {
        AdminTab::Dashboard => {
            let cards = Layout::horizontal([Constraint::Fill(1); 4]).split(body_area);

            for ((title, value), card) in ADMIN_COUNTERS.iter().zip(cards.iter()) {
                frame.render_widget(
                    Paragraph::new(Line::from(*value).bold()).block(section(title, Color::Magenta)),
                    Rect {
                        height: card.height.min(3),
                        ..*card
                    },
                );
            }
        }
        other => frame.render_widget(
            Paragraph::new("Nothing here yet.")
                .dark_gray()
                .block(section(other.title(), Color::Magenta)),
            body_area,
        ),
    }
}
