//! Ratatui backend implementation for the QuizFrontend trait.
//!
//! Provides a chat-styled terminal UI: a welcome screen, a step sidebar,
//! the transcript of past answers, and one input surface per question kind.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use leadquiz::{InputDraft, Question, QuestionKind, QuizError, QuizFrontend, QuizSession};
use ratatui::{Terminal, prelude::CrosstermBackend, style::Color};
use thiserror::Error;
use tracing::{debug, info};

use crate::reveal::{Reveal, RevealTiming};
use crate::ui;

/// How often the screen is redrawn while waiting for input.
const TICK: Duration = Duration::from_millis(16);

/// Error type for the Ratatui backend.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// User cancelled the quiz (e.g., pressed Esc).
    #[error("Quiz cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session rejected an operation the UI should never issue.
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

impl From<RatatuiError> for QuizError {
    fn from(err: RatatuiError) -> Self {
        match err {
            RatatuiError::Cancelled => QuizError::Cancelled,
            RatatuiError::Quiz(inner) => inner,
            other => QuizError::backend(other),
        }
    }
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub muted: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Magenta,
            secondary: Color::LightMagenta,
            text: Color::White,
            muted: Color::DarkGray,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

/// Ratatui-based TUI backend.
///
/// Questions appear one at a time below the transcript of earlier answers,
/// with a sidebar marking which step of the quiz is active.
#[derive(Debug, Clone)]
pub struct RatatuiBackend {
    /// Title shown at the top of the screen.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
    /// Typing indicator and typewriter timing.
    reveal: RevealTiming,
}

impl Default for RatatuiBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiBackend {
    /// Create a new Ratatui backend with default settings.
    pub fn new() -> Self {
        Self {
            title: "Quiz".to_string(),
            theme: Theme::default(),
            reveal: RevealTiming::default(),
        }
    }

    /// Set the title shown at the top of the screen.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the reveal timing. `RevealTiming::instant()` turns it off.
    pub fn with_reveal(mut self, reveal: RevealTiming) -> Self {
        self.reveal = reveal;
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        enable_raw_mode()?;
        enter_alternate_screen().map_err(|err| {
            // Undo raw mode before reporting the setup error.
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            let _ = disable_raw_mode();
            RatatuiError::Io(err)
        })
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        session: &mut QuizSession,
    ) -> Result<(), RatatuiError> {
        let mut state = WizardState::new(
            session,
            self.theme.clone(),
            self.title.clone(),
            self.reveal,
            Instant::now(),
        );

        while !state.finished && !state.cancelled {
            let now = Instant::now();
            terminal.draw(|frame| ui::draw(frame, &state, session, now))?;

            if !event::poll(TICK)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                state.handle_key(key, session, Instant::now())?;
            }
        }

        if state.cancelled {
            return Err(RatatuiError::Cancelled);
        }
        Ok(())
    }
}

/// Which full-screen view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Welcome,
    Quiz,
    Complete,
}

/// UI state for one run. The session itself is passed in separately and
/// stays the only owner of position and history.
pub(crate) struct WizardState {
    pub(crate) screen: Screen,
    /// Draft for the active question.
    pub(crate) draft: InputDraft,
    /// `(position, answered)` the draft was built for.
    draft_key: (usize, usize),
    /// Focused field of a picker form.
    pub(crate) focus: usize,
    /// Highlighted entry of the visible choice list.
    pub(crate) selected_option: usize,
    /// Text buffer of a text field or zip field.
    pub(crate) input: String,
    /// Why the last submit was refused.
    pub(crate) error_message: Option<String>,
    pub(crate) reveal: Reveal,
    pub(crate) theme: Theme,
    pub(crate) title: String,
    finished: bool,
    cancelled: bool,
}

impl WizardState {
    pub(crate) fn new(
        session: &QuizSession,
        theme: Theme,
        title: String,
        timing: RevealTiming,
        now: Instant,
    ) -> Self {
        let screen = if session.catalog().prelude().is_some() {
            Screen::Welcome
        } else {
            Screen::Quiz
        };
        Self {
            screen,
            draft: InputDraft::for_question(session.current_question()),
            draft_key: draft_key(session),
            focus: 0,
            selected_option: 0,
            input: String::new(),
            error_message: None,
            reveal: Reveal::new(timing, now),
            theme,
            title,
            finished: false,
            cancelled: false,
        }
    }

    /// Rebuild the draft when the active question changed.
    fn sync(&mut self, session: &QuizSession, now: Instant) {
        if session.is_complete() {
            self.screen = Screen::Complete;
        } else if self.screen == Screen::Complete {
            self.screen = Screen::Quiz;
        }

        let key = draft_key(session);
        if key == self.draft_key {
            return;
        }
        self.draft_key = key;
        self.draft = InputDraft::for_question(session.current_question());
        self.focus = 0;
        self.selected_option = 0;
        self.input.clear();
        self.error_message = None;
        self.reveal.restart(now);
        debug!(question = session.current_question().id(), "showing question");
    }

    pub(crate) fn handle_key(
        &mut self,
        key: KeyEvent,
        session: &mut QuizSession,
        now: Instant,
    ) -> Result<(), RatatuiError> {
        let ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if key.code == KeyCode::Esc || ctrl_c {
            info!("quiz cancelled");
            self.cancelled = true;
            return Ok(());
        }

        match self.screen {
            Screen::Welcome => {
                if key.code == KeyCode::Enter {
                    self.screen = Screen::Quiz;
                    self.reveal.restart(now);
                }
            }
            Screen::Complete => match key.code {
                KeyCode::Enter => self.finished = true,
                KeyCode::Backspace => {
                    session.back();
                }
                _ => {}
            },
            Screen::Quiz => {
                let text = session.current_question().text();
                if !self.reveal.is_idle(text, now) {
                    // Any key skips the reveal; the key itself is not applied.
                    self.reveal.skip();
                    return Ok(());
                }
                self.handle_question_key(key, session)?;
            }
        }

        self.sync(session, now);
        Ok(())
    }

    fn handle_question_key(
        &mut self,
        key: KeyEvent,
        session: &mut QuizSession,
    ) -> Result<(), RatatuiError> {
        let question = session.current_question().clone();
        match question.kind() {
            QuestionKind::SingleSelect(options) => match key.code {
                KeyCode::Up => self.selected_option = self.selected_option.saturating_sub(1),
                KeyCode::Down => {
                    if self.selected_option + 1 < options.len() {
                        self.selected_option += 1;
                    }
                }
                KeyCode::Enter => {
                    if let Some(option) = options.get(self.selected_option) {
                        session.select_option(&option.id)?;
                    }
                }
                KeyCode::Backspace => {
                    session.back();
                }
                _ => {}
            },
            QuestionKind::VehiclePicker(_) | QuestionKind::LocationPicker(_) => {
                self.handle_picker_key(key, &question, session)?;
            }
            QuestionKind::Text(_) => match key.code {
                KeyCode::Char(c) => {
                    let mut next = self.input.clone();
                    next.push(c);
                    self.set_text(&next);
                }
                KeyCode::Backspace if self.input.is_empty() => {
                    session.back();
                }
                KeyCode::Backspace => {
                    let next = backspace(&self.input);
                    self.set_text(&next);
                }
                KeyCode::Enter => self.submit(session)?,
                _ => {}
            },
        }
        Ok(())
    }

    fn handle_picker_key(
        &mut self,
        key: KeyEvent,
        question: &Question,
        session: &mut QuizSession,
    ) -> Result<(), RatatuiError> {
        let fields = field_labels(question).len();
        let typing_zip = self.is_zip_field(question);

        match key.code {
            KeyCode::Tab => self.focus_field(question, (self.focus + 1) % fields),
            KeyCode::BackTab => self.focus_field(question, (self.focus + fields - 1) % fields),
            KeyCode::Up if !typing_zip => {
                self.selected_option = self.selected_option.saturating_sub(1);
            }
            KeyCode::Down if !typing_zip => {
                let count = field_choices(question, &self.draft, self.focus).len();
                if self.selected_option + 1 < count {
                    self.selected_option += 1;
                }
            }
            KeyCode::Char(c) if typing_zip => {
                let mut next = self.input.clone();
                next.push(c);
                self.set_zip(&next);
            }
            KeyCode::Backspace if typing_zip && !self.input.is_empty() => {
                let next = backspace(&self.input);
                self.set_zip(&next);
            }
            KeyCode::Backspace => {
                session.back();
            }
            KeyCode::Enter => {
                if !typing_zip {
                    self.commit_choice(question);
                }
                match self.first_open_field(question) {
                    Some(next) if !self.draft.is_submittable() => self.focus_field(question, next),
                    _ => self.submit(session)?,
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Store the highlighted choice into the focused field.
    fn commit_choice(&mut self, question: &Question) {
        let choices = field_choices(question, &self.draft, self.focus);
        let Some(choice) = choices.get(self.selected_option).map(|c| c.to_string()) else {
            return;
        };
        match (&mut self.draft, self.focus) {
            (InputDraft::Vehicle(vehicle), 0) => vehicle.set_year(choice),
            (InputDraft::Vehicle(vehicle), 1) => vehicle.set_make(choice),
            (InputDraft::Vehicle(vehicle), _) => vehicle.set_model(choice),
            (InputDraft::Location(location), 0) => location.set_state(choice),
            _ => {}
        }
        self.error_message = None;
    }

    fn focus_field(&mut self, question: &Question, focus: usize) {
        self.focus = focus;
        let current = field_value(&self.draft, focus);
        self.selected_option = field_choices(question, &self.draft, focus)
            .iter()
            .position(|c| *c == current)
            .unwrap_or(0);
    }

    fn first_open_field(&self, question: &Question) -> Option<usize> {
        (0..field_labels(question).len()).find(|&i| field_value(&self.draft, i).is_empty())
    }

    fn is_zip_field(&self, question: &Question) -> bool {
        matches!(question.kind(), QuestionKind::LocationPicker(_)) && self.focus == 1
    }

    fn set_text(&mut self, input: &str) {
        if let InputDraft::Text(text) = &mut self.draft {
            text.set_value(input);
            self.input = text.value().to_string();
        }
        self.error_message = None;
    }

    fn set_zip(&mut self, input: &str) {
        if let InputDraft::Location(location) = &mut self.draft {
            location.set_zip(input);
            self.input = location.zip().to_string();
        }
        self.error_message = None;
    }

    fn submit(&mut self, session: &mut QuizSession) -> Result<(), RatatuiError> {
        if let Some(reason) = self.draft.blocker() {
            self.error_message = Some(reason.to_string());
            return Ok(());
        }
        session.submit(&self.draft)?;
        Ok(())
    }
}

fn draft_key(session: &QuizSession) -> (usize, usize) {
    (session.position(), session.history().len())
}

fn backspace(input: &str) -> String {
    let mut chars = input.chars();
    chars.next_back();
    chars.as_str().to_string()
}

/// Labels of the fields of a picker form.
pub(crate) fn field_labels(question: &Question) -> &'static [&'static str] {
    match question.kind() {
        QuestionKind::VehiclePicker(_) => &["Year", "Make", "Model"],
        QuestionKind::LocationPicker(_) => &["State", "Zip Code"],
        _ => &[],
    }
}

/// Choices offered for a picker field. Text fields have none.
pub(crate) fn field_choices<'a>(
    question: &'a Question,
    draft: &InputDraft,
    focus: usize,
) -> Vec<&'a str> {
    match (question.kind(), draft, focus) {
        (QuestionKind::VehiclePicker(table), _, 0) => {
            table.years().iter().map(String::as_str).collect()
        }
        (QuestionKind::VehiclePicker(table), _, 1) => table.makes().collect(),
        (QuestionKind::VehiclePicker(table), InputDraft::Vehicle(vehicle), _) => table
            .models(vehicle.make())
            .iter()
            .map(String::as_str)
            .collect(),
        (QuestionKind::LocationPicker(states), _, 0) => {
            states.iter().map(String::as_str).collect()
        }
        _ => Vec::new(),
    }
}

/// Current value of a picker field.
pub(crate) fn field_value(draft: &InputDraft, focus: usize) -> &str {
    match (draft, focus) {
        (InputDraft::Vehicle(vehicle), 0) => vehicle.year(),
        (InputDraft::Vehicle(vehicle), 1) => vehicle.make(),
        (InputDraft::Vehicle(vehicle), _) => vehicle.model(),
        (InputDraft::Location(location), 0) => location.state(),
        (InputDraft::Location(location), _) => location.zip(),
        _ => "",
    }
}

impl QuizFrontend for RatatuiBackend {
    type Error = RatatuiError;

    fn collect(&self, session: &mut QuizSession) -> Result<(), Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let result = self.event_loop(&mut terminal, session);
        let restored = self.restore_terminal(&mut terminal);
        finish(result, restored)
    }
}

fn enter_alternate_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Combine the event loop outcome with terminal restoration. A loop error
/// wins over a restore error.
fn finish(
    result: Result<(), RatatuiError>,
    restored: Result<(), RatatuiError>,
) -> Result<(), RatatuiError> {
    result.and(restored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadquiz::{Catalog, Category, QuizOption, TextVariant, VehicleTable};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn loop_error_survives_failed_restore() {
        let restore_failed = || Err(RatatuiError::Io(io::Error::other("tty gone")));

        let err = finish(Err(RatatuiError::Cancelled), restore_failed()).unwrap_err();
        assert!(matches!(err, RatatuiError::Cancelled));

        let err = finish(Ok(()), restore_failed()).unwrap_err();
        assert!(matches!(err, RatatuiError::Io(_)));

        assert!(finish(Ok(()), Ok(())).is_ok());
    }

    fn catalog() -> Catalog {
        let table = VehicleTable::new()
            .with_year_span(2025, 2)
            .with_make("Tesla", ["Model 3", "Model Y"])
            .with_make("Toyota", ["Camry"]);
        Catalog::new(vec![
            leadquiz::Question::vehicle("car", "Vehicle?", Category::Vehicle, table),
            leadquiz::Question::single_select(
                "miles",
                "Miles?",
                Category::Vehicle,
                vec![
                    QuizOption::new("lt100", "Less than 100k", "<100k"),
                    QuizOption::new("gt200", "More than 200k", ">200k"),
                ],
            ),
            leadquiz::Question::location("loc", "State?", Category::Location, ["TX", "CA"]),
            leadquiz::Question::text_input("phone", "Phone?", Category::Quote, TextVariant::Phone),
        ])
        .unwrap()
        .with_prelude("Welcome")
    }

    fn state(session: &QuizSession) -> WizardState {
        WizardState::new(
            session,
            Theme::default(),
            "Test".into(),
            RevealTiming::instant(),
            Instant::now(),
        )
    }

    fn keys(state: &mut WizardState, session: &mut QuizSession, codes: &[KeyCode]) {
        for code in codes {
            state
                .handle_key(press(*code), session, Instant::now())
                .unwrap();
        }
    }

    #[test]
    fn backend_creation() {
        let _backend = RatatuiBackend::new();
        let _with_title = RatatuiBackend::new().with_title("Test");
        let _with_theme = RatatuiBackend::new().with_theme(Theme::default());
        let _instant = RatatuiBackend::new().with_reveal(RevealTiming::instant());
    }

    #[test]
    fn error_types() {
        let err = RatatuiError::Cancelled;
        assert_eq!(err.to_string(), "Quiz cancelled by user");
        assert!(QuizError::from(err).is_cancelled());
    }

    #[test]
    fn welcome_then_full_run() {
        let mut session = QuizSession::new(catalog());
        let mut state = state(&session);
        assert_eq!(state.screen, Screen::Welcome);

        use KeyCode::*;
        // Welcome -> year 2025 -> make Toyota -> model Camry (submits).
        keys(&mut state, &mut session, &[Enter, Enter, Down, Enter, Enter]);
        assert_eq!(session.position(), 1);
        assert_eq!(session.history().get(0).unwrap().display_value, "2025 Toyota Camry");

        // Second option.
        keys(&mut state, &mut session, &[Down, Enter]);
        assert_eq!(session.history().get(1).unwrap().raw_value, ">200k");

        // State CA, then zip typed with a stray letter.
        keys(
            &mut state,
            &mut session,
            &[
                Down,
                Enter,
                Char('7'),
                Char('8'),
                Char('x'),
                Char('7'),
                Char('0'),
                Char('4'),
                Enter,
            ],
        );
        assert_eq!(session.history().get(2).unwrap().display_value, "CA, 78704");

        for c in "5124949400".chars() {
            keys(&mut state, &mut session, &[Char(c)]);
        }
        assert_eq!(state.input, "(512) 494-9400");
        keys(&mut state, &mut session, &[Enter]);
        assert!(session.is_complete());
        assert_eq!(state.screen, Screen::Complete);

        keys(&mut state, &mut session, &[Enter]);
        assert!(state.finished);
    }

    #[test]
    fn changing_make_clears_model_in_form() {
        let mut session = QuizSession::new(catalog());
        let mut state = state(&session);
        use KeyCode::*;
        // Year 2025 and make Tesla, then back to the make before a model is set.
        keys(&mut state, &mut session, &[Enter, Enter, Enter]);
        assert_eq!(field_value(&state.draft, 1), "Tesla");
        keys(&mut state, &mut session, &[BackTab, Down, Enter]);
        assert_eq!(field_value(&state.draft, 1), "Toyota");
        assert_eq!(field_value(&state.draft, 2), "");
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn incomplete_text_shows_reason() {
        let mut session = QuizSession::new(catalog());
        session.answer("{}", "2025 Tesla Model 3").unwrap();
        session.select_option("lt100").unwrap();
        session.answer("{}", "TX, 78704").unwrap();

        let mut state = state(&session);
        state.screen = Screen::Quiz;
        use KeyCode::*;
        keys(&mut state, &mut session, &[Char('5'), Enter]);
        assert_eq!(
            state.error_message.as_deref(),
            Some("Enter a 10 digit phone number")
        );
        assert!(!session.is_complete());
    }

    #[test]
    fn backspace_on_empty_goes_back_and_resets_draft() {
        let mut session = QuizSession::new(catalog());
        session.answer("{}", "2025 Tesla Model 3").unwrap();

        let mut state = state(&session);
        state.screen = Screen::Quiz;
        keys(&mut state, &mut session, &[KeyCode::Backspace]);
        assert_eq!(session.position(), 0);
        assert!(session.history().is_empty());
        assert!(matches!(state.draft, InputDraft::Vehicle(_)));
    }

    #[test]
    fn escape_cancels() {
        let mut session = QuizSession::new(catalog());
        let mut state = state(&session);
        keys(&mut state, &mut session, &[KeyCode::Esc]);
        assert!(state.cancelled);
    }

    #[test]
    fn key_during_reveal_only_skips() {
        let mut session = QuizSession::new(catalog());
        let mut state = WizardState::new(
            &session,
            Theme::default(),
            "Test".into(),
            RevealTiming::default(),
            Instant::now(),
        );
        state.screen = Screen::Quiz;
        let now = Instant::now();
        state.reveal.restart(now);
        state
            .handle_key(press(KeyCode::Down), &mut session, now)
            .unwrap();
        assert_eq!(state.selected_option, 0);
        assert!(state.reveal.is_idle("Vehicle?", now));
    }
}
