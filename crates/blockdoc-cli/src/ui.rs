use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(columns[0]);

    draw_documents(f, app, sidebar[0]);
    draw_outline(f, app, sidebar[1]);
    draw_content(f, app, columns[1]);
    draw_help(f, app, rows[1]);
}

fn pane(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

fn draw_documents(f: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .documents
        .iter()
        .map(|file| ListItem::new(file.display_path()))
        .collect();

    let list = List::new(items)
        .block(pane("Documents", app.focus == Focus::Documents))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, area, &mut app.document_list_state);
}

fn draw_outline(f: &mut Frame, app: &mut App, area: Rect) {
    let active = app.active_anchor();
    let items: Vec<ListItem> = app
        .outline()
        .iter()
        .map(|entry| {
            let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
            let style = if active.as_ref() == Some(&entry.anchor_id) {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(format!("{indent}{}", entry.text), style))
        })
        .collect();

    let list = List::new(items)
        .block(pane("Outline", app.focus == Focus::Outline))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.outline_list_state);
}

fn draw_content(f: &mut Frame, app: &mut App, area: Rect) {
    let block = pane("Content", false);
    app.set_viewport_height(block.inner(area).height.into());

    let text = match (&app.status, app.layout.is_empty()) {
        (Some(status), _) => vec![Line::styled(status.clone(), Style::default().fg(Color::Red))],
        (None, true) => vec![Line::from("Select a document to view its content")],
        (None, false) => app.layout.lines.clone(),
    };

    let scroll = u16::try_from(app.scroll).unwrap_or(u16::MAX);
    let content = Paragraph::new(text).block(block).scroll((scroll, 0));

    f.render_widget(content, area);
}

fn draw_help(f: &mut Frame, app: &App, area: Rect) {
    let navigate = match app.focus {
        Focus::Documents => "↑/k ↓/j: Document",
        Focus::Outline => "↑/k ↓/j: Heading | Enter: Jump",
    };
    let help = Line::from(vec![
        Span::raw("q: Quit | Tab: Switch pane | "),
        Span::raw(navigate),
        Span::raw(" | PgUp/PgDn: Scroll"),
    ]);

    f.render_widget(Paragraph::new(help), area);
}
