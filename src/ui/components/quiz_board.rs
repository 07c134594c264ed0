use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::engine::question::Question;
use crate::engine::session::AnswerState;
use crate::ui::theme::Theme;

/// The quiz screen body: prompt card on top, option buttons below. Once the
/// round is answered, the correct option turns green and a wrong pick red.
pub struct QuizBoard<'a> {
    pub question: &'a Question,
    pub answer: &'a AnswerState,
    pub cursor: usize,
    pub theme: &'a Theme,
}

impl Widget for &QuizBoard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let options = &self.question.options;

        let mut constraints = vec![Constraint::Length(5), Constraint::Length(1)];
        constraints.extend(vec![Constraint::Length(3); options.len()]);
        constraints.push(Constraint::Min(0));
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let card = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.prompt_bg()));
        let card_inner = card.inner(layout[0]);
        card.render(layout[0], buf);
        Paragraph::new(Line::from(Span::styled(
            self.question.prompt.as_str(),
            Style::default()
                .fg(colors.prompt_fg())
                .bg(colors.prompt_bg())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(card_inner, buf);

        let answered = matches!(self.answer, AnswerState::Answered { .. });
        for (index, option) in options.iter().enumerate() {
            let slot = layout[index + 2];

            let (bg, fg) = match self.answer {
                AnswerState::Answered { selected } => {
                    if *option == self.question.correct {
                        (colors.correct_bg(), colors.correct_fg())
                    } else if option == selected {
                        (colors.wrong_bg(), colors.wrong_fg())
                    } else {
                        (colors.option_bg(), colors.option_fg())
                    }
                }
                AnswerState::Unanswered => (colors.option_bg(), colors.option_fg()),
            };

            let highlighted = !answered && index == self.cursor;
            let border = if highlighted {
                colors.border_focused()
            } else {
                colors.border()
            };
            let button = Block::bordered()
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(bg));
            let button_inner = button.inner(slot);
            button.render(slot, buf);

            let mut style = Style::default().fg(fg).bg(bg);
            if highlighted {
                style = style.add_modifier(Modifier::BOLD);
            }
            Paragraph::new(Line::from(Span::styled(
                format!("{}. {option}", index + 1),
                style,
            )))
            .alignment(Alignment::Center)
            .render(button_inner, buf);
        }
    }
}
