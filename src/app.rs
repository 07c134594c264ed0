use rust_i18n::t;

use crate::config::Config;
use crate::content::{Dataset, Domain, LanguageCode};
use crate::engine::category::CategoryId;
use crate::engine::resolver;
use crate::engine::session::{AnswerState, QuizSession};
use crate::feedback::{FeedbackCue, SilentCue, TerminalBell};
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Home,
    Categories,
    Quiz,
}

/// Which home-screen row the keyboard is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeFocus {
    Native,
    Target,
    Menu,
}

impl HomeFocus {
    pub fn next(self) -> Self {
        match self {
            HomeFocus::Native => HomeFocus::Target,
            HomeFocus::Target => HomeFocus::Menu,
            HomeFocus::Menu => HomeFocus::Native,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            HomeFocus::Native => HomeFocus::Menu,
            HomeFocus::Target => HomeFocus::Native,
            HomeFocus::Menu => HomeFocus::Target,
        }
    }
}

pub struct App {
    pub screen: AppScreen,
    pub domain: Domain,
    pub config: Config,
    pub theme: &'static Theme,
    pub session: Option<QuizSession>,
    pub quiz_title: String,
    pub should_quit: bool,
    pub quiet: bool,
    pub home_focus: HomeFocus,
    pub native_cursor: usize,
    pub target_cursor: usize,
    pub menu_cursor: usize,
    pub category_cursor: usize,
    pub option_cursor: usize,
}

fn language_position(language: LanguageCode) -> usize {
    LanguageCode::ALL
        .iter()
        .position(|l| *l == language)
        .unwrap_or(0)
}

impl App {
    pub fn new() -> Self {
        let mut config = Config::load().unwrap_or_default();
        config.normalize();
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        rust_i18n::set_locale(config.native().code());

        Self {
            screen: AppScreen::Home,
            domain: Domain::Words,
            native_cursor: language_position(config.native()),
            target_cursor: language_position(config.target()),
            config,
            theme,
            session: None,
            quiz_title: String::new(),
            should_quit: false,
            quiet: false,
            home_focus: HomeFocus::Native,
            menu_cursor: 0,
            category_cursor: 0,
            option_cursor: 0,
        }
    }

    /// Session-only language override (CLI flag); not persisted.
    pub fn set_native(&mut self, language: LanguageCode) {
        self.config.native_language = language.code().to_string();
        self.native_cursor = language_position(language);
        rust_i18n::set_locale(language.code());
    }

    pub fn set_target(&mut self, language: LanguageCode) {
        self.config.target_language = language.code().to_string();
        self.target_cursor = language_position(language);
    }

    /// Persist a native-language pick and switch the UI locale immediately.
    pub fn choose_native(&mut self, index: usize) {
        let Some(language) = LanguageCode::ALL.get(index) else {
            return;
        };
        self.config.native_language = language.code().to_string();
        self.native_cursor = index;
        rust_i18n::set_locale(language.code());
        let _ = self.config.save();
    }

    pub fn choose_target(&mut self, index: usize) {
        let Some(language) = LanguageCode::ALL.get(index) else {
            return;
        };
        self.config.target_language = language.code().to_string();
        self.target_cursor = index;
        let _ = self.config.save();
    }

    pub fn open_categories(&mut self, domain: Domain) {
        self.domain = domain;
        self.category_cursor = 0;
        self.screen = AppScreen::Categories;
    }

    pub fn start_quiz(&mut self, category: CategoryId) {
        self.start_quiz_id(category.id());
    }

    /// Resolve both languages' items for a category id and start a fresh
    /// session. An unknown id or missing dataset yields an empty session,
    /// which the quiz screen shows as an explicit no-content state.
    pub fn start_quiz_id(&mut self, id: &str) {
        let native = Dataset::load(self.domain, self.config.native()).unwrap_or_default();
        let target = Dataset::load(self.domain, self.config.target()).unwrap_or_default();
        let native_items = resolver::resolve_id(&native, id);
        let target_items = resolver::resolve_id(&target, id);

        self.quiz_title = CategoryId::from_id(id)
            .map(|category| t!(category.id()).into_owned())
            .unwrap_or_else(|| id.to_string());
        self.session = Some(QuizSession::new(
            native_items,
            target_items,
            self.feedback_cue(),
        ));
        self.option_cursor = 0;
        self.screen = AppScreen::Quiz;
    }

    pub fn back_to_categories(&mut self) {
        self.session = None;
        self.screen = AppScreen::Categories;
    }

    pub fn go_home(&mut self) {
        self.screen = AppScreen::Home;
        self.home_focus = HomeFocus::Native;
    }

    pub fn select_option(&mut self, choice: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let was_answered = matches!(session.answer(), AnswerState::Answered { .. });
        session.select(choice);
        if was_answered {
            // A fresh round started; reset the highlight.
            self.option_cursor = 0;
        }
    }

    pub fn option_count(&self) -> usize {
        self.session
            .as_ref()
            .and_then(|s| s.question())
            .map(|q| q.options.len())
            .unwrap_or(0)
    }

    fn feedback_cue(&self) -> Box<dyn FeedbackCue> {
        if self.quiet {
            Box::new(SilentCue)
        } else {
            Box::new(TerminalBell)
        }
    }
}
