mod app;
mod config;
mod content;
mod engine;
mod event;
mod feedback;
mod ui;

use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use rust_i18n::t;

use app::{App, AppScreen, HomeFocus};
use content::{Domain, LanguageCode};
use engine::category::CategoryId;
use event::{AppEvent, EventHandler};
use ui::components::language_picker::LanguagePicker;
use ui::components::list_menu::ListMenu;
use ui::components::quiz_board::QuizBoard;

rust_i18n::i18n!("locales", fallback = "en");

#[derive(Parser)]
#[command(
    name = "quizling",
    version,
    about = "Terminal vocabulary quiz for language learners"
)]
struct Cli {
    #[arg(short, long, help = "Native language code (en, tr, ru, es, ar, fr, de, ja, pt, fa)")]
    native: Option<LanguageCode>,

    #[arg(short, long, help = "Target language code")]
    target: Option<LanguageCode>,

    #[arg(short, long, help = "Jump straight into a category (e.g. verbs1)")]
    category: Option<String>,

    #[arg(long, help = "Quiz sentences instead of words")]
    sentences: bool,

    #[arg(long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Disable the success bell")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = App::new();

    if let Some(native) = cli.native {
        app.set_native(native);
    }
    if let Some(target) = cli.target {
        app.set_target(target);
    }
    if cli.quiet {
        app.quiet = true;
    }
    if let Some(theme_name) = cli.theme {
        if let Some(theme) = ui::theme::Theme::load(&theme_name) {
            let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));
            app.theme = theme;
        }
    }
    if let Some(category) = cli.category.as_deref() {
        app.domain = if cli.sentences {
            Domain::Sentences
        } else {
            Domain::Words
        };
        app.start_quiz_id(category);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new();

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Home => handle_home_key(app, key),
        AppScreen::Categories => handle_categories_key(app, key),
        AppScreen::Quiz => handle_quiz_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    let languages = LanguageCode::ALL.len();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
            app.home_focus = app.home_focus.next();
        }
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
            app.home_focus = app.home_focus.prev();
        }
        KeyCode::Left | KeyCode::Char('h') => match app.home_focus {
            HomeFocus::Native => {
                app.native_cursor = ListMenu::prev(app.native_cursor, languages);
            }
            HomeFocus::Target => {
                app.target_cursor = ListMenu::prev(app.target_cursor, languages);
            }
            HomeFocus::Menu => app.menu_cursor = ListMenu::prev(app.menu_cursor, 2),
        },
        KeyCode::Right | KeyCode::Char('l') => match app.home_focus {
            HomeFocus::Native => {
                app.native_cursor = ListMenu::next(app.native_cursor, languages);
            }
            HomeFocus::Target => {
                app.target_cursor = ListMenu::next(app.target_cursor, languages);
            }
            HomeFocus::Menu => app.menu_cursor = ListMenu::next(app.menu_cursor, 2),
        },
        KeyCode::Enter => match app.home_focus {
            HomeFocus::Native => app.choose_native(app.native_cursor),
            HomeFocus::Target => app.choose_target(app.target_cursor),
            HomeFocus::Menu => {
                let domain = if app.menu_cursor == 0 {
                    Domain::Words
                } else {
                    Domain::Sentences
                };
                app.open_categories(domain);
            }
        },
        _ => {}
    }
}

fn handle_categories_key(app: &mut App, key: KeyEvent) {
    let count = CategoryId::ALL.len();
    match key.code {
        KeyCode::Esc => app.go_home(),
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Down | KeyCode::Char('j') => {
            app.category_cursor = ListMenu::next(app.category_cursor, count);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.category_cursor = ListMenu::prev(app.category_cursor, count);
        }
        KeyCode::Enter => app.start_quiz(CategoryId::ALL[app.category_cursor]),
        _ => {}
    }
}

fn handle_quiz_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.back_to_categories(),
        KeyCode::Char(ch @ '1'..='4') => {
            app.select_option(ch as usize - '1' as usize);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let count = app.option_count();
            if count > 0 {
                app.option_cursor = (app.option_cursor + 1).min(count - 1);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.option_cursor = app.option_cursor.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.select_option(app.option_cursor),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Home => render_home(frame, app),
        AppScreen::Categories => render_categories(frame, app),
        AppScreen::Quiz => render_quiz(frame, app),
    }
}

fn screen_chrome(frame: &mut ratatui::Frame, app: &App, title: &str, hints: &str) -> ratatui::layout::Rect {
    let area = frame.area();
    let colors = &app.theme.colors;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let pair_info = format!(
        " {} → {}",
        app.config.native().code(),
        app.config.target().code()
    );
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            pair_info,
            Style::default()
                .fg(colors.text_dim())
                .bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout[0]);

    let footer = Paragraph::new(Line::from(Span::styled(
        hints.to_string(),
        Style::default().fg(colors.text_dim()),
    )));
    frame.render_widget(footer, layout[2]);

    layout[1]
}

fn render_home(frame: &mut ratatui::Frame, app: &App) {
    let main = screen_chrome(
        frame,
        app,
        &t!("home_title"),
        " [Tab/↑↓] Section  [←→] Move  [Enter] Apply  [q] Quit ",
    );
    let content = ui::layout::centered_rect(80, 90, main);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(4),
        ])
        .split(content);

    let native_picker = LanguagePicker {
        title: t!("select_native").into_owned(),
        chosen: language_index(app.config.native()),
        cursor: app.native_cursor,
        focused: app.home_focus == HomeFocus::Native,
        theme: app.theme,
    };
    frame.render_widget(&native_picker, layout[0]);

    let target_picker = LanguagePicker {
        title: t!("select_target").into_owned(),
        chosen: language_index(app.config.target()),
        cursor: app.target_cursor,
        focused: app.home_focus == HomeFocus::Target,
        theme: app.theme,
    };
    frame.render_widget(&target_picker, layout[1]);

    let menu = ListMenu {
        title: String::new(),
        items: vec![
            t!(Domain::Words.title_key()).into_owned(),
            t!(Domain::Sentences.title_key()).into_owned(),
        ],
        selected: app.menu_cursor,
        focused: app.home_focus == HomeFocus::Menu,
        theme: app.theme,
    };
    frame.render_widget(&menu, layout[2]);
}

fn render_categories(frame: &mut ratatui::Frame, app: &App) {
    let title = match app.domain {
        Domain::Words => t!("words_category_title"),
        Domain::Sentences => t!("sentences_category_title"),
    };
    let main = screen_chrome(
        frame,
        app,
        &title,
        " [↑↓] Move  [Enter] Start  [Esc] Back  [q] Quit ",
    );
    let content = ui::layout::centered_rect(60, 95, main);

    let items: Vec<String> = CategoryId::ALL
        .iter()
        .map(|category| t!(category.id()).into_owned())
        .collect();
    let menu = ListMenu {
        title: title.into_owned(),
        items,
        selected: app.category_cursor,
        focused: true,
        theme: app.theme,
    };
    frame.render_widget(&menu, content);
}

fn render_quiz(frame: &mut ratatui::Frame, app: &App) {
    let Some(session) = app.session.as_ref() else {
        return;
    };

    let answered = matches!(
        session.answer(),
        engine::session::AnswerState::Answered { .. }
    );
    let hints = if !session.has_content() {
        " [Esc] Back "
    } else if answered {
        " [1-4/Enter] Next  [Esc] Back "
    } else {
        " [1-4] Answer  [↑↓+Enter] Pick  [Esc] Back "
    };
    let main = screen_chrome(frame, app, &app.quiz_title, hints);
    let content = ui::layout::centered_rect(60, 90, main);

    match session.question() {
        Some(question) => {
            let board = QuizBoard {
                question,
                answer: session.answer(),
                cursor: app.option_cursor,
                theme: app.theme,
            };
            frame.render_widget(&board, content);
        }
        None => {
            let colors = &app.theme.colors;
            let notice = Paragraph::new(Line::from(Span::styled(
                t!("no_content").into_owned(),
                Style::default()
                    .fg(colors.error())
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            frame.render_widget(notice, content);
        }
    }
}

fn language_index(language: LanguageCode) -> usize {
    LanguageCode::ALL
        .iter()
        .position(|l| *l == language)
        .unwrap_or(0)
}
