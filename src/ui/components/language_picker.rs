use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::content::LanguageCode;
use crate::ui::theme::Theme;

const COLUMNS: usize = 5;

/// One row of the home screen: a titled grid of the ten languages. `chosen`
/// is the persisted selection, `cursor` the cell the keyboard is on.
pub struct LanguagePicker<'a> {
    pub title: String,
    pub chosen: usize,
    pub cursor: usize,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for &LanguagePicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let border = if self.focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = LanguageCode::ALL.len().div_ceil(COLUMNS);
        let row_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(1); rows])
            .split(inner);

        for (row, row_area) in row_layout.iter().enumerate() {
            let col_layout = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
                .split(*row_area);

            for (col, cell) in col_layout.iter().enumerate() {
                let index = row * COLUMNS + col;
                let Some(language) = LanguageCode::ALL.get(index) else {
                    continue;
                };

                let is_chosen = index == self.chosen;
                let is_cursor = self.focused && index == self.cursor;

                let mut style = if is_chosen {
                    Style::default()
                        .fg(colors.option_fg())
                        .bg(colors.accent())
                } else {
                    Style::default().fg(colors.fg()).bg(colors.bg())
                };
                if is_cursor {
                    style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                }

                let marker = if is_chosen { "●" } else { " " };
                let label = format!("{marker} {}", language.display_name());
                Paragraph::new(Line::from(Span::styled(label, style))).render(*cell, buf);
            }
        }
    }
}
