use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

/// Bordered selectable list used for the home menu and the category screens.
pub struct ListMenu<'a> {
    pub title: String,
    pub items: Vec<String>,
    pub selected: usize,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl ListMenu<'_> {
    pub fn next(selected: usize, len: usize) -> usize {
        if len == 0 { 0 } else { (selected + 1) % len }
    }

    pub fn prev(selected: usize, len: usize) -> usize {
        if len == 0 {
            0
        } else if selected > 0 {
            selected - 1
        } else {
            len - 1
        }
    }
}

impl Widget for &ListMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let border = if self.focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let mut block = Block::bordered()
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));
        if !self.title.is_empty() {
            block = block.title(format!(" {} ", self.title));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if self.items.is_empty() {
            return;
        }

        let visible = inner.height as usize;
        // Keep the selection on screen when the list is taller than the box.
        let offset = if self.selected >= visible {
            self.selected + 1 - visible
        } else {
            0
        };

        let constraints: Vec<Constraint> = self
            .items
            .iter()
            .skip(offset)
            .take(visible)
            .map(|_| Constraint::Length(1))
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (row, (index, item)) in rows.iter().zip(self.items.iter().enumerate().skip(offset)) {
            let is_selected = index == self.selected;

            let indicator = if is_selected { " > " } else { "   " };
            let style = if is_selected {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };

            Paragraph::new(Line::from(Span::styled(
                format!("{indicator}{item}"),
                style,
            )))
            .render(*row, buf);
        }
    }
}
