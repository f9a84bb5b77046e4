//! The UI renders the application state into something visible and scrollable.
//!
//! The draw function dispatches based on the current view (file list or reader). The reader
//! shows the document on the left, with the trigger band marked in the gutter, and the table of
//! contents on the right using box-drawing characters.

use crate::app_state::{AppState, Focus, Reader, View};
use crate::render::NavItem;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Renders the active view based on current application state.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    match app.current_view {
        View::FileList => draw_file_list(f, app, chunks[0]),
        View::Reader => {
            let focus = app.focus;
            if let Some(reader) = app.reader.as_mut() {
                draw_reader(f, reader, focus, chunks[0]);
            }
        }
    }
    draw_help(f, app, chunks[1]);
}

fn draw_file_list(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .files
        .iter()
        .map(|path| ListItem::new(format!("📄 {}", path.display())))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Documents"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default().with_selected(Some(app.current_file_index));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_reader(f: &mut Frame, reader: &mut Reader, focus: Focus, area: Rect) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let header = header_lines(reader);
    let document_area = if header.is_empty() {
        panes[0]
    } else {
        let height = u16::try_from(header.len() + 2).unwrap_or(u16::MAX);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(height), Constraint::Min(0)])
            .split(panes[0]);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", reader.document.title()));
        f.render_widget(Paragraph::new(header).block(block), rows[0]);
        rows[1]
    };

    reader.resize(usize::from(document_area.height.saturating_sub(2)));
    draw_document(f, reader, focus, document_area);
    draw_contents(f, reader, focus, panes[1]);
}

/// Description and abstract from the front matter, shown above the document.
fn header_lines(reader: &Reader) -> Vec<Line<'static>> {
    let front_matter = &reader.document.front_matter;
    let mut lines = Vec::new();
    if let Some(description) = &front_matter.description {
        lines.push(Line::from(Span::styled(
            description.trim().to_string(),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }
    if let Some(summary) = &front_matter.summary {
        lines.extend(
            summary
                .lines()
                .map(|line| Line::from(Span::raw(line.trim().to_string()))),
        );
    }
    lines
}

fn draw_document(f: &mut Frame, reader: &Reader, focus: Focus, area: Rect) {
    let surface = reader.tracker.surface();
    let offset = surface.offset();
    let (band_start, band_end) = surface.band_lines(reader.tracker.band());
    let active_line = reader
        .active()
        .and_then(|slug| surface.line_of(slug));
    let heading_lines: Vec<usize> = reader.document.headings.iter().map(|h| h.line).collect();

    let lines: Vec<Line> = reader
        .document
        .source
        .lines()
        .enumerate()
        .skip(offset)
        .take(surface.height())
        .map(|(number, text)| {
            let gutter = if (band_start..band_end).contains(&number) {
                Span::styled("▌", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(" ")
            };
            let style = if Some(number) == active_line {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if heading_lines.contains(&number) {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![gutter, Span::styled(text.to_string(), style)])
        })
        .collect();

    let border = if focus == Focus::Document {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let title = format!(" {} ", reader.document.title());
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );
    f.render_widget(paragraph, area);
}

/// Box-drawing prefixed lines for nested contents entries, in display order.
fn contents_lines<'a>(items: &'a [NavItem], prefix: &str, out: &mut Vec<(String, &'a NavItem)>) {
    for (i, item) in items.iter().enumerate() {
        let is_last = i + 1 == items.len();
        let (branch, continuation) = match (item.depth, is_last) {
            (1, _) => ("", ""),
            (_, true) => ("└── ", "    "),
            (_, false) => ("├── ", "│   "),
        };
        out.push((format!("{prefix}{branch}"), item));
        contents_lines(&item.children, &format!("{prefix}{continuation}"), out);
    }
}

fn draw_contents(f: &mut Frame, reader: &Reader, focus: Focus, area: Rect) {
    let mut rows = Vec::new();
    contents_lines(&reader.nav, "", &mut rows);

    let items: Vec<ListItem> = rows
        .into_iter()
        .map(|(prefix, item)| {
            let label = if item.label.trim().is_empty() {
                "(untitled)".to_string()
            } else {
                item.label.clone()
            };
            let style = if item.active {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if item.href.is_none() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![Span::raw(prefix), Span::styled(label, style)]))
        })
        .collect();

    let (border, highlight) = if focus == Focus::Contents {
        (
            Style::default().fg(Color::Cyan),
            Style::default().add_modifier(Modifier::REVERSED),
        )
    } else {
        (Style::default(), Style::default())
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(" Contents "),
        )
        .highlight_style(highlight);
    let mut state = ListState::default().with_selected(Some(reader.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_help(f: &mut Frame, app: &AppState, area: Rect) {
    let text = if let Some(message) = &app.message {
        message.clone()
    } else {
        match app.current_view {
            View::FileList => "↑/↓: select | Enter: open | q: quit".to_string(),
            View::Reader => {
                let active = app
                    .reader
                    .as_ref()
                    .and_then(Reader::active)
                    .map_or_else(|| "-".to_string(), |slug| format!("#{slug}"));
                format!(
                    "{active} | j/k: scroll | PgUp/PgDn: page | g/G: top/bottom | Tab: focus | Enter: jump | q: back"
                )
            }
        }
    };
    let help = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
