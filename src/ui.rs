//! Terminal drawing - renders a RenderState snapshot, never mutates state

use ratatui::{prelude::*, widgets::*};

use crate::app::focus::Focus;
use crate::app::input::TextInput;
use crate::app::state::Mode;
use crate::constants::{APP_NAME, APP_VERSION};
use crate::messages::RenderState;
use crate::models::HttpMethod;

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Error line
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(format!(" {} ", state.mode.title()), Style::default().bold()),
        Span::styled(
            format!(" {} v{}", APP_NAME, APP_VERSION),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    match state.mode {
        Mode::Idle => draw_idle(f, state, chunks[1]),
        Mode::Editing => draw_editor(f, state, chunks[1]),
        Mode::ViewingResponse => draw_response(f, state, chunks[1]),
        Mode::Saving { .. } => {
            draw_editor(f, state, chunks[1]);
            draw_save_popup(f, state, area);
        }
        Mode::Loading => draw_load_list(f, state, chunks[1]),
    }

    if let Some(error) = &state.last_error {
        let line = Paragraph::new(format!(" Error: {}", error)).style(Style::default().fg(Color::Red));
        f.render_widget(line, chunks[2]);
    }

    let help = Paragraph::new(help_text(state)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn help_text(state: &RenderState) -> &'static str {
    match state.mode {
        Mode::Idle if state.busy => " Sending request... | ctrl+c: Quit ",
        Mode::Idle => " e: Edit request | enter: Send request | l: Load saved | q: Quit ",
        Mode::Editing => " ctrl+n/tab: Next field | ctrl+s: Send | alt+s: Save | esc: Back ",
        Mode::ViewingResponse => " ↑/↓ PgUp/PgDn: Scroll | q: Back | e: Edit request ",
        Mode::Saving { .. } => " enter: Save | esc: Cancel ",
        Mode::Loading => " ↑/↓: Select | enter: Load | esc: Cancel ",
    }
}

fn draw_idle(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut lines = vec![Line::raw("")];

    if state.request.url.is_empty() {
        lines.push(Line::raw("  No request configured"));
    } else {
        let method = state.request.method;
        lines.push(Line::from(vec![
            Span::raw("  Current Request: "),
            Span::styled(method.as_str(), Style::default().fg(method_color(method)).bold()),
            Span::raw(format!(" {}", state.request.url)),
        ]));
        if !state.request.name.is_empty() {
            lines.push(Line::styled(
                format!("  Saved as: {}", state.request.name),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    lines.push(Line::raw(""));
    if state.busy {
        lines.push(Line::styled("  [...] Sending request", Style::default().fg(Color::Yellow)));
    } else if let Some(response) = &state.last_response {
        lines.push(Line::from(vec![
            Span::raw("  Last response: "),
            Span::styled(
                response.status.clone(),
                Style::default().fg(status_color(response.status_code)).bold(),
            ),
            Span::styled(
                format!(" ({}ms)", state.last_response_time_ms),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_editor(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // URL
            Constraint::Length(3),      // Method
            Constraint::Percentage(40), // Headers
            Constraint::Min(3),         // Body
        ])
        .split(area);

    draw_text_field(f, state, Focus::Url, &state.url_input, "https://example.com/api", chunks[0]);
    draw_method_field(f, state, chunks[1]);
    draw_text_field(
        f,
        state,
        Focus::Headers,
        &state.headers_input,
        "Headers (one per line, format: Key: Value)",
        chunks[2],
    );
    draw_text_field(
        f,
        state,
        Focus::Body,
        &state.body_input,
        "Request body (JSON, form data, etc.)",
        chunks[3],
    );
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn draw_text_field(
    f: &mut Frame,
    state: &RenderState,
    field: Focus,
    input: &TextInput,
    placeholder: &str,
    area: Rect,
) {
    let is_focused = state.focus == Some(field);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .title(format!(" {} ", field.label()));

    let paragraph = if input.is_empty() {
        Paragraph::new(placeholder).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(input.value())
    };
    f.render_widget(paragraph.block(block), area);

    if is_focused {
        let (line, col) = input.cursor_line_col();
        let max_x = area.x + area.width.saturating_sub(2);
        let max_y = area.y + area.height.saturating_sub(2);
        let x = (area.x + 1).saturating_add(col as u16).min(max_x);
        let y = (area.y + 1).saturating_add(line as u16).min(max_y);
        f.set_cursor_position(Position::new(x, y));
    }
}

fn draw_method_field(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.focus == Some(Focus::Method);
    let selected = if is_focused {
        HttpMethod::from_index(state.method_index)
    } else {
        state.request.method
    };

    let mut spans = Vec::new();
    for method in HttpMethod::ALL {
        let style = if method == selected {
            Style::default().fg(Color::Black).bg(method_color(method)).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", method.as_str()), style));
        spans.push(Span::raw(" "));
    }

    let title = if is_focused { " Method (↑/↓, enter) " } else { " Method " };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .title(title);
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_response(f: &mut Frame, state: &RenderState, area: Rect) {
    let status_text = match &state.last_response {
        Some(response) => Span::styled(
            format!(" {} ", response.status),
            Style::default().fg(status_color(response.status_code)).bold(),
        ),
        None => Span::raw(" Response "),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(status_text)
        .title_bottom(Line::from(format!(" {}ms ", state.last_response_time_ms)).right_aligned());

    let response = Paragraph::new(highlight_json(&state.response_view))
        .block(block)
        .scroll((state.response_scroll, 0));
    f.render_widget(response, area);
}

fn draw_load_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Saved Requests ");

    if state.saved_requests.is_empty() {
        let empty = Paragraph::new("No saved requests.\n\nUse alt+s while editing to save one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .saved_requests
        .iter()
        .map(|req| {
            ListItem::new(vec![
                Line::from(Span::styled(req.name.clone(), Style::default().bold())),
                Line::from(vec![
                    Span::styled(
                        format!("  {:7}", req.method.as_str()),
                        Style::default().fg(method_color(req.method)),
                    ),
                    Span::styled(req.url.clone(), Style::default().fg(Color::DarkGray)),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_saved));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_save_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let popup_area = centered_rect(60, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(true))
        .title(" Request name ")
        .style(Style::default().bg(Color::Black));

    let content = if state.name_input.is_empty() {
        Paragraph::new("Request name").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(state.name_input.value())
    };

    f.render_widget(Clear, popup_area);
    f.render_widget(content.block(block), popup_area);

    let (_, col) = state.name_input.cursor_line_col();
    let max_x = popup_area.x + popup_area.width.saturating_sub(2);
    let x = (popup_area.x + 1).saturating_add(col as u16).min(max_x);
    f.set_cursor_position(Position::new(x, popup_area.y + 1));
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Simple JSON syntax highlighting, applied line by line
pub fn highlight_json(text: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for line in text.lines() {
        let mut spans = Vec::new();
        let mut current = String::new();
        let mut in_string = false;
        let mut is_key = false;

        for c in line.chars() {
            match c {
                '"' => {
                    if in_string {
                        current.push(c);
                        let color = if is_key { Color::Cyan } else { Color::Green };
                        spans.push(Span::styled(current.clone(), Style::default().fg(color)));
                        current.clear();
                        in_string = false;
                        is_key = false;
                    } else {
                        if !current.is_empty() {
                            spans.push(Span::raw(current.clone()));
                            current.clear();
                        }
                        in_string = true;
                        current.push(c);
                        is_key = line[line.find('"').unwrap_or(0)..].contains("\":");
                    }
                }
                '{' | '}' | '[' | ']' if !in_string => {
                    if !current.is_empty() {
                        spans.push(Span::raw(current.clone()));
                        current.clear();
                    }
                    spans.push(Span::styled(c.to_string(), Style::default().fg(Color::Yellow)));
                }
                _ => current.push(c),
            }
        }

        if !current.is_empty() {
            spans.push(Span::raw(current));
        }

        lines.push(Line::from(spans));
    }

    lines
}

/// Status code color
pub fn status_color(code: u16) -> Color {
    match code {
        200..=299 => Color::Green,
        300..=399 => Color::Cyan,
        400..=499 => Color::Red,
        500..=599 => Color::Magenta,
        _ => Color::Yellow,
    }
}

/// Method color
pub fn method_color(method: HttpMethod) -> Color {
    match method {
        HttpMethod::GET => Color::Green,
        HttpMethod::POST => Color::Yellow,
        HttpMethod::PUT => Color::Blue,
        HttpMethod::PATCH => Color::Cyan,
        HttpMethod::DELETE => Color::Red,
        HttpMethod::HEAD | HttpMethod::OPTIONS => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn render(state: &RenderState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_idle_without_request() {
        let screen = render(&RenderState::default());
        assert!(screen.contains("No request configured"));
    }

    #[test]
    fn test_error_line_rendered() {
        let state = RenderState {
            last_error: Some("disk full".to_string()),
            ..RenderState::default()
        };
        assert!(render(&state).contains("Error: disk full"));
    }

    #[test]
    fn test_editor_lists_methods() {
        let state = RenderState {
            mode: Mode::Editing,
            focus: Some(Focus::Url),
            ..RenderState::default()
        };
        let screen = render(&state);
        assert!(screen.contains("OPTIONS"));
        assert!(screen.contains("Headers"));
    }

    #[test]
    fn test_method_colors() {
        assert_eq!(method_color(HttpMethod::GET), Color::Green);
        assert_eq!(method_color(HttpMethod::DELETE), Color::Red);
        assert_eq!(method_color(HttpMethod::OPTIONS), Color::White);
    }

    #[test]
    fn test_highlight_keeps_text() {
        let lines = highlight_json("{\"a\": 1}");
        let text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "{\"a\": 1}");
    }
}
