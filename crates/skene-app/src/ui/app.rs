//! Application shell: window title, menu, and the counter card.
//!
//! Mirrors what a desktop shell would do on top of a GUI toolkit, without
//! drawing anything. Content is rebuilt on every language switch; the old
//! counter widget is detached first so the service never keeps stale
//! observers around.

use std::fmt::Write;
use std::path::Path;
use std::sync::Arc;

use skene_core::error::Result;
use skene_core::CounterService;

use crate::config::AppConfig;
use crate::localization::{Catalog, Localizer};
use crate::ui::counter_widget::{Button, CounterWidget};
use crate::ui::menu::{MainMenu, MenuAction};

/// What the front end should do after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Show a message (e.g. the about text) and continue.
    Show(String),
    Quit,
}

pub struct App {
    cfg: AppConfig,
    service: Arc<CounterService>,
    localizer: Arc<Localizer>,
    title: String,
    menu: MainMenu,
    widget: Arc<CounterWidget>,
}

impl App {
    /// Build the application state from config.
    /// Returns Result so main can report locale/config problems without panicking.
    pub fn new(cfg: AppConfig) -> Result<Self> {
        let catalog = Catalog::load(cfg.localization.locales_dir.as_deref().map(Path::new))?;
        let localizer = Localizer::new(catalog, &cfg.localization.default_language)?;
        Ok(Self::with_parts(
            cfg,
            Arc::new(CounterService::new()),
            Arc::new(localizer),
        ))
    }

    pub fn with_parts(cfg: AppConfig, service: Arc<CounterService>, localizer: Arc<Localizer>) -> Self {
        let title = localizer.t("app_title");
        let menu = MainMenu::build(&localizer);
        let widget = CounterWidget::attach(Arc::clone(&service), Arc::clone(&localizer));
        tracing::info!(
            app_id = %cfg.app.id,
            lang = %localizer.current_language(),
            "application ready"
        );
        Self {
            cfg,
            service,
            localizer,
            title,
            menu,
            widget,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.cfg
    }

    pub fn service(&self) -> Arc<CounterService> {
        Arc::clone(&self.service)
    }

    pub fn localizer(&self) -> Arc<Localizer> {
        Arc::clone(&self.localizer)
    }

    pub fn widget(&self) -> Arc<CounterWidget> {
        Arc::clone(&self.widget)
    }

    pub fn menu(&self) -> &MainMenu {
        &self.menu
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn press(&self, button: Button) {
        self.widget.press(button);
    }

    pub fn set_language(&mut self, language: &str) -> Result<()> {
        self.localizer.set_language(language)?;
        self.update_language();
        Ok(())
    }

    /// Re-translate the title and menu and rebuild the counter card.
    pub fn update_language(&mut self) {
        self.title = self.localizer.t("app_title");
        self.menu = MainMenu::build(&self.localizer);

        self.widget.detach();
        self.widget = CounterWidget::attach(Arc::clone(&self.service), Arc::clone(&self.localizer));
    }

    pub fn handle(&mut self, action: &MenuAction) -> Result<Flow> {
        match action {
            MenuAction::Exit => Ok(Flow::Quit),
            MenuAction::SetLanguage(code) => {
                self.set_language(code)?;
                Ok(Flow::Continue)
            }
            MenuAction::About => Ok(Flow::Show(self.about_text())),
        }
    }

    pub fn about_text(&self) -> String {
        self.localizer
            .t_with("about_text", &[("version", env!("CARGO_PKG_VERSION"))])
    }

    /// Text snapshot of the window contents.
    pub fn render(&self) -> String {
        let win = self.cfg.app.window;
        let mut out = String::new();
        let _ = writeln!(out, "== {} ({}x{}) ==", self.title, win.width, win.height);
        let _ = writeln!(out, "{}", self.localizer.t("hello_skene"));
        let _ = writeln!(out, "[ {} ]", self.widget.title());
        let _ = writeln!(out, "{}", self.widget.value_label());
        let buttons: Vec<String> = Button::ALL
            .iter()
            .map(|b| format!("[ {} ]", self.widget.button_label(*b)))
            .collect();
        let _ = writeln!(out, "{}", buttons.join(" "));
        out
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.widget.detach();
    }
}
