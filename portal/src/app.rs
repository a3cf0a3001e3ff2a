use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use internships_core::{login::Submitted, LoginFlow, OnSuccess, Role, TransitionPolicy};
use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::process::ExitCode;

/// Things that can happen to this app
mod action;
pub use action::Action;

/// The static dashboards shown after logging in
mod dashboard;
use dashboard::Dashboard;

/// Side effects
mod effect;
pub use effect::{Effect, EffectContext};

/// Text boxes for the login flow
mod login_form;
use login_form::LoginForm;

/// The employer's internship posting form
mod posting_form;

/// The "functional core" of the app.
pub struct App {
    /// Status to display (visible at the bottom of the screen)
    status_line: Option<String>,

    /// What we're looking at
    screen: Screen,

    /// Login state for each portal. Lives here rather than in the screens so
    /// leaving and re-entering a portal keeps its session.
    portals: Portals,
}

impl App {
    /// Create a new instance of the app
    pub fn new(admin_policy: TransitionPolicy) -> Self {
        Self {
            status_line: None,
            screen: Screen::Picker(0),
            portals: Portals::new(admin_policy),
        }
    }

    /// Render the app's UI to the screen
    pub fn render(&self, frame: &mut Frame) {
        let vertical = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]);
        let [body_area, status_area] = vertical.areas(frame.area());

        match &self.screen {
            Screen::Picker(selected) => render_picker(*selected, body_area, frame),
            Screen::Portal(role) => {
                let portal = self.portals.get(*role);

                if portal.flow.is_authenticated() {
                    portal.dashboard.render(*role, body_area, frame);
                } else {
                    portal.form.render(&portal.flow, body_area, frame);
                }
            }
            Screen::Exiting(_) => frame.render_widget(Paragraph::new("Exiting…"), body_area),
        }

        let status = Paragraph::new(self.status_line.as_deref().unwrap_or("All good!"));

        frame.render_widget(status, status_area);
    }

    /// Handle an `Action`, updating the app's state and producing some side effect(s)
    pub fn handle(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return vec![];
                }

                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.screen = Screen::Exiting(ExitCode::SUCCESS);
                    return vec![];
                }

                match self.screen {
                    Screen::Picker(selected) => {
                        self.handle_picker_key(selected, key);
                        vec![]
                    }
                    Screen::Portal(role) => self.handle_portal_key(role, key),
                    Screen::Exiting(_) => vec![],
                }
            }
            Action::AdminCreated(result) => {
                // failures are logged by the flow; whether they matter to the
                // user depends on its transition policy.
                self.portals.admin.flow.confirm(&result);

                vec![]
            }
            Action::Problem(problem) => {
                self.status_line = Some(problem);

                vec![]
            }
        }
    }

    /// Choosing a portal
    fn handle_picker_key(&mut self, selected: usize, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.screen = Screen::Exiting(ExitCode::SUCCESS);
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.screen = Screen::Picker((selected + 1) % Role::ALL.len());
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.screen = Screen::Picker((selected + Role::ALL.len() - 1) % Role::ALL.len());
            }
            KeyCode::Enter => self.open(Role::ALL[selected]),
            KeyCode::Char(c @ '1'..='3') => {
                self.open(Role::ALL[c as usize - '1' as usize]);
            }
            _ => self.status_line = Some(format!("Unknown key {:?}", key.code)),
        }
    }

    /// Typing into a portal's login form or dashboard
    fn handle_portal_key(&mut self, role: Role, key: KeyEvent) -> Vec<Effect> {
        let portal = self.portals.get_mut(role);

        if portal.flow.is_authenticated() {
            if key.code == KeyCode::Esc {
                if portal.dashboard.captures_keys() {
                    portal.dashboard.blur();
                } else {
                    self.screen = Screen::Picker(role_index(role));
                }
            } else if let Some(message) = portal.dashboard.handle_event(key) {
                self.status_line = Some(message.to_owned());
            }

            return vec![];
        }

        if key.code == KeyCode::Esc {
            self.screen = Screen::Picker(role_index(role));
            return vec![];
        }

        match portal.form.handle_event(key, &mut portal.flow) {
            None | Some(Submitted::Ignored) => vec![],
            Some(Submitted::Invalid) => {
                self.status_line = Some("Please fix the highlighted fields".to_owned());
                vec![]
            }
            Some(Submitted::LoggedIn) => {
                self.status_line = Some(format!("Logged in to the {role} portal"));
                vec![]
            }
            Some(Submitted::CreateAdmin(req)) => {
                self.status_line = None;
                vec![Effect::CreateAdmin(req)]
            }
        }
    }

    /// Switch to a portal
    fn open(&mut self, role: Role) {
        self.screen = Screen::Portal(role);
        self.status_line = None;
    }

    /// Let the TUI manager know whether we're all wrapped up and can exit.
    pub fn should_exit(&self) -> Option<ExitCode> {
        if let Screen::Exiting(code) = &self.screen {
            Some(*code)
        } else {
            None
        }
    }
}

/// Where `role` sits in the picker
fn role_index(role: Role) -> usize {
    Role::ALL.iter().position(|r| *r == role).unwrap_or_default()
}

/// Draw the portal picker
fn render_picker(selected: usize, body_area: Rect, frame: &mut Frame) {
    let popup_vert = Layout::vertical([Constraint::Length(7)]).flex(Flex::Center);
    let popup_horiz = Layout::horizontal([Constraint::Percentage(40)]).flex(Flex::Center);

    let [popup_area] = popup_vert.areas(body_area);
    let [popup_area] = popup_horiz.areas(popup_area);

    let items: Vec<ListItem> = Role::ALL
        .iter()
        .enumerate()
        .map(|(idx, role)| ListItem::new(format!("{}. {}", idx + 1, role.portal_title())))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Internship Portal ")
                .title_bottom(Line::from(" enter: open · q: quit ").right_aligned())
                .border_style(Style::default().fg(Color::Blue)),
        )
        .highlight_symbol("● ")
        .highlight_style(Style::new().add_modifier(Modifier::BOLD));

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, popup_area, &mut state);
}

/// What's on screen
#[derive(Debug, Clone, Copy, PartialEq)]
enum Screen {
    /// Choosing a portal, with the highlighted option
    Picker(usize),

    /// Inside a portal
    Portal(Role),

    /// We're done and want the following exit code after final effects
    Exiting(ExitCode),
}

/// Everything one portal needs
#[derive(Debug)]
struct Portal {
    /// Login state
    flow: LoginFlow,

    /// Login text boxes
    form: LoginForm,

    /// What's shown once logged in
    dashboard: Dashboard,
}

impl Portal {
    /// A fresh, logged-out portal
    fn new(role: Role, admin_policy: TransitionPolicy) -> Self {
        Self {
            flow: LoginFlow::new(role, OnSuccess::for_role(role, admin_policy)),
            form: LoginForm::default(),
            dashboard: Dashboard::new(role),
        }
    }
}

/// One portal per role. Each one owns its own session; nothing is shared.
#[derive(Debug)]
struct Portals {
    /// For students
    student: Portal,

    /// For employers
    employer: Portal,

    /// For admins
    admin: Portal,
}

impl Portals {
    /// All portals logged out
    fn new(admin_policy: TransitionPolicy) -> Self {
        Self {
            student: Portal::new(Role::Student, admin_policy),
            employer: Portal::new(Role::Employer, admin_policy),
            admin: Portal::new(Role::Admin, admin_policy),
        }
    }

    /// The portal for a role
    fn get(&self, role: Role) -> &Portal {
        match role {
            Role::Student => &self.student,
            Role::Employer => &self.employer,
            Role::Admin => &self.admin,
        }
    }

    /// The portal for a role, mutably
    fn get_mut(&mut self, role: Role) -> &mut Portal {
        match role {
            Role::Student => &mut self.student,
            Role::Employer => &mut self.employer,
            Role::Admin => &mut self.admin,
        }
    }
}
