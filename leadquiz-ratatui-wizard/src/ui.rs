//! Drawing for the wizard screens.

use std::time::Instant;

use leadquiz::{InputDraft, Question, QuestionKind, QuizSession, StepStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::backend::{Screen, WizardState, field_choices, field_labels, field_value};
use crate::reveal::RevealPhase;

const SIDEBAR_WIDTH: u16 = 22;
const PICKER_LIST_HEIGHT: u16 = 8;
const DISCLAIMER_HEIGHT: u16 = 6;

pub(crate) fn draw(frame: &mut Frame, state: &WizardState, session: &QuizSession, now: Instant) {
    match state.screen {
        Screen::Welcome => draw_welcome(frame, state, session),
        Screen::Quiz => draw_quiz(frame, state, session, now),
        Screen::Complete => draw_completion(frame, state, session),
    }
}

fn draw_quiz(frame: &mut Frame, state: &WizardState, session: &QuizSession, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    draw_header(frame, state, session, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(chunks[1]);

    draw_sidebar(frame, state, session, body[0]);
    draw_chat(frame, state, session, now, body[1]);
    draw_help(frame, state, session.current_question(), chunks[2]);
}

fn draw_header(frame: &mut Frame, state: &WizardState, session: &QuizSession, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(state.theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Paragraph::new(state.title.clone())
        .style(Style::default().fg(state.theme.primary).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, inner);

    let step = format!(
        "Step {}/{}",
        session.position() + 1,
        session.question_count()
    );
    let step = Paragraph::new(step)
        .style(Style::default().fg(state.theme.secondary))
        .alignment(Alignment::Right);
    frame.render_widget(step, inner);
}

fn draw_sidebar(frame: &mut Frame, state: &WizardState, session: &QuizSession, area: Rect) {
    let lines: Vec<Line> = session
        .step_statuses()
        .into_iter()
        .map(|(category, status)| {
            let (marker, style) = match status {
                StepStatus::Complete => ("✔", Style::default().fg(state.theme.success)),
                StepStatus::Active => ("◉", Style::default().fg(state.theme.highlight).bold()),
                StepStatus::Pending => ("○", Style::default().fg(state.theme.muted)),
            };
            Line::from(vec![
                Span::styled(format!(" {marker} "), style),
                Span::styled(category.label(), style),
            ])
        })
        .collect();

    let sidebar = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(state.theme.border))
            .title(" Steps ")
            .title_style(Style::default().fg(state.theme.secondary)),
    );
    frame.render_widget(sidebar, area);
}

fn draw_chat(
    frame: &mut Frame,
    state: &WizardState,
    session: &QuizSession,
    now: Instant,
    area: Rect,
) {
    let question = session.current_question();
    let phase = state.reveal.phase(question.text(), now);
    let idle = phase == RevealPhase::Idle;

    let bubble_height = if idle && question.sub_text().is_some() { 4 } else { 3 };
    let input_height = if idle { input_height(question) } else { 0 };
    let disclaimer_height = match question.disclaimer() {
        Some(_) if idle => DISCLAIMER_HEIGHT,
        _ => 0,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            Constraint::Min(3),                    // Transcript
            Constraint::Length(bubble_height),     // Question
            Constraint::Length(input_height),      // Input
            Constraint::Length(1),                 // Error
            Constraint::Length(disclaimer_height), // Disclaimer
        ])
        .split(area);

    draw_transcript(frame, state, session, chunks[0]);
    draw_bubble(frame, state, question, phase, chunks[1]);

    if !idle {
        return;
    }

    draw_input(frame, state, question, chunks[2]);

    if let Some(error) = &state.error_message {
        let error_widget = Paragraph::new(error.clone())
            .style(Style::default().fg(state.theme.error).bold())
            .alignment(Alignment::Center);
        frame.render_widget(error_widget, chunks[3]);
    }

    if let Some(disclaimer) = question.disclaimer() {
        let disclaimer = Paragraph::new(disclaimer)
            .style(Style::default().fg(state.theme.muted))
            .wrap(Wrap { trim: true });
        frame.render_widget(disclaimer, chunks[4]);
    }
}

fn input_height(question: &Question) -> u16 {
    match question.kind() {
        QuestionKind::SingleSelect(options) => options.len() as u16 + 2,
        QuestionKind::VehiclePicker(_) | QuestionKind::LocationPicker(_) => {
            3 + PICKER_LIST_HEIGHT
        }
        QuestionKind::Text(_) => 3,
    }
}

/// Earlier questions and answers, scrolled so the newest stay in view.
fn draw_transcript(frame: &mut Frame, state: &WizardState, session: &QuizSession, area: Rect) {
    let lines = transcript_lines(state, session);
    let overflow = (lines.len() as u16).saturating_sub(area.height);
    let transcript = Paragraph::new(lines).scroll((overflow, 0));
    frame.render_widget(transcript, area);
}

fn transcript_lines<'a>(state: &WizardState, session: &'a QuizSession) -> Vec<Line<'a>> {
    session
        .transcript()
        .flat_map(|(question, response)| {
            [
                Line::from(Span::styled(
                    question.text(),
                    Style::default().fg(state.theme.muted),
                )),
                Line::from(Span::styled(
                    format!("{} ", response.display_value),
                    Style::default().fg(state.theme.secondary).bold(),
                ))
                .alignment(Alignment::Right),
            ]
        })
        .collect()
}

fn draw_bubble(
    frame: &mut Frame,
    state: &WizardState,
    question: &Question,
    phase: RevealPhase<'_>,
    area: Rect,
) {
    let mut lines = match phase {
        RevealPhase::Thinking => vec![Line::from(Span::styled(
            "• • •",
            Style::default().fg(state.theme.muted),
        ))],
        RevealPhase::Typing(partial) => vec![Line::from(partial)],
        RevealPhase::Idle => vec![Line::from(question.text())],
    };
    if phase == RevealPhase::Idle {
        if let Some(sub_text) = question.sub_text() {
            lines.push(Line::from(Span::styled(
                sub_text,
                Style::default().fg(state.theme.muted).italic(),
            )));
        }
    }

    let bubble = Paragraph::new(lines)
        .style(Style::default().fg(state.theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(state.theme.primary)),
        );
    frame.render_widget(bubble, area);
}

fn draw_input(frame: &mut Frame, state: &WizardState, question: &Question, area: Rect) {
    match question.kind() {
        QuestionKind::SingleSelect(options) => {
            let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
            draw_choices(frame, state, &labels, " Select Option ", area);
        }
        QuestionKind::VehiclePicker(_) | QuestionKind::LocationPicker(_) => {
            draw_picker(frame, state, question, area);
        }
        QuestionKind::Text(_) => {
            draw_text_field(frame, state, question.placeholder(), " Your answer ", area);
        }
    }
}

fn draw_choices(frame: &mut Frame, state: &WizardState, choices: &[&str], title: &str, area: Rect) {
    let items: Vec<ListItem> = choices
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            let style = if i == state.selected_option {
                Style::default().fg(state.theme.highlight).bold()
            } else {
                Style::default().fg(state.theme.text)
            };
            ListItem::new(format!("  {choice}")).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(state.theme.border))
                .title(title.to_string())
                .title_style(Style::default().fg(state.theme.secondary)),
        )
        .highlight_symbol("► ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_option));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// A row of fields with the choices of the focused field below it.
fn draw_picker(frame: &mut Frame, state: &WizardState, question: &Question, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let labels = field_labels(question);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(labels.iter().map(|_| Constraint::Ratio(1, labels.len() as u32)))
        .split(rows[0]);

    for (i, label) in labels.iter().enumerate() {
        let focused = i == state.focus;
        let border = if focused {
            state.theme.highlight
        } else {
            state.theme.border
        };
        let value = field_value(&state.draft, i);
        let field = Paragraph::new(value.to_string())
            .style(Style::default().fg(state.theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(format!(" {label} "))
                    .title_style(Style::default().fg(state.theme.secondary)),
            );
        frame.render_widget(field, columns[i]);

        if focused && is_text_field(&state.draft, i) {
            let cursor_x = columns[i].x + 1 + value.chars().count() as u16;
            frame.set_cursor_position((cursor_x, columns[i].y + 1));
        }
    }

    let choices = field_choices(question, &state.draft, state.focus);
    if !choices.is_empty() {
        let title = format!(" {} ", labels[state.focus]);
        draw_choices(frame, state, &choices, &title, rows[1]);
    }
}

fn is_text_field(draft: &InputDraft, index: usize) -> bool {
    matches!(draft, InputDraft::Location(_)) && index == 1
}

fn draw_text_field(
    frame: &mut Frame,
    state: &WizardState,
    placeholder: Option<&str>,
    title: &str,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(state.theme.border))
        .title(title.to_string())
        .title_style(Style::default().fg(state.theme.secondary));

    let text = match placeholder {
        Some(hint) if state.input.is_empty() => {
            Line::from(Span::styled(hint, Style::default().fg(state.theme.muted)))
        }
        _ => Line::from(state.input.as_str()),
    };
    let input_widget = Paragraph::new(text)
        .style(Style::default().fg(state.theme.text))
        .block(block);
    frame.render_widget(input_widget, area);

    let cursor_x = area.x + 1 + state.input.chars().count() as u16;
    frame.set_cursor_position((cursor_x, area.y + 1));
}

fn draw_help(frame: &mut Frame, state: &WizardState, question: &Question, area: Rect) {
    let help_text = match question.kind() {
        QuestionKind::SingleSelect(_) => "↑/↓: Select  Enter: Confirm  Backspace: Back  Esc: Cancel",
        QuestionKind::VehiclePicker(_) | QuestionKind::LocationPicker(_) => {
            "Tab: Next field  ↑/↓: Select  Enter: Confirm  Backspace: Back  Esc: Cancel"
        }
        QuestionKind::Text(_) => "Enter: Submit  Backspace on empty: Back  Esc: Cancel",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(state.theme.border))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(state.theme.border)),
        );
    frame.render_widget(help, area);
}

fn draw_welcome(frame: &mut Frame, state: &WizardState, session: &QuizSession) {
    let text = format!(
        "{}\n\nPress Enter to start.",
        session.catalog().prelude().unwrap_or_default()
    );
    draw_centered(frame, state, &state.title, &text, state.theme.primary);
}

fn draw_completion(frame: &mut Frame, state: &WizardState, session: &QuizSession) {
    let text = match session.catalog().epilogue() {
        Some(epilogue) => format!(
            "{epilogue}\n\nPress Enter to finish. Backspace changes your last answer."
        ),
        None => "All questions answered!\n\nPress Enter to finish.".to_string(),
    };
    draw_centered(frame, state, "Complete", &text, state.theme.success);
}

fn draw_centered(
    frame: &mut Frame,
    state: &WizardState,
    title: &str,
    text: &str,
    accent: ratatui::style::Color,
) {
    let area = frame.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(format!(" {title} "))
        .title_style(Style::default().fg(accent).bold());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(text.to_string())
        .style(Style::default().fg(state.theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Min(3),
            Constraint::Percentage(35),
        ])
        .split(inner);

    frame.render_widget(paragraph, centered[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Theme;
    use crate::reveal::RevealTiming;
    use leadquiz::{Catalog, Category, QuizOption, TextVariant};
    use ratatui::{Terminal, backend::TestBackend};

    fn session() -> QuizSession {
        let catalog = Catalog::new(vec![
            Question::single_select(
                "miles",
                "Roughly, how many miles?",
                Category::Vehicle,
                vec![QuizOption::new("lt100", "Less than 100k", "<100k")],
            ),
            Question::text_input("email", "Email?", Category::Quote, TextVariant::Email)
                .with_disclaimer("We only pass your Email Address onto your match."),
        ])
        .unwrap();
        QuizSession::new(catalog)
    }

    fn render(state: &WizardState, session: &QuizSession) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|frame| draw(frame, state, session, Instant::now()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn state(session: &QuizSession) -> WizardState {
        WizardState::new(
            session,
            Theme::default(),
            "Best Extended Auto Warranty".into(),
            RevealTiming::instant(),
            Instant::now(),
        )
    }

    #[test]
    fn quiz_screen_shows_step_and_sidebar() {
        let mut session = session();
        session.select_option("lt100").unwrap();
        let state = state(&session);

        let screen = render(&state, &session);
        assert!(screen.contains("Step 2/2"));
        assert!(screen.contains("Your Quote"));
        assert!(screen.contains("Less than 100k"));
        assert!(screen.contains("Email?"));
        assert!(screen.contains("example.com"));
    }

    #[test]
    fn completion_screen_shows_default_text() {
        let mut session = session();
        session.select_option("lt100").unwrap();
        session.answer("a@b.co", "").unwrap();
        let mut state = state(&session);
        state.screen = Screen::Complete;

        let screen = render(&state, &session);
        assert!(screen.contains("All questions answered!"));
    }
}
