//! Main menu model: File, Language, Help.

use std::fmt::Write;

use crate::localization::Localizer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Exit,
    SetLanguage(String),
    About,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub action: MenuAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub label: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainMenu {
    pub menus: Vec<Menu>,
}

impl MainMenu {
    /// Build the menu bar in the localizer's current language.
    ///
    /// Each language entry is labelled by translating that locale's display
    /// key; locales without one show their code.
    pub fn build(localizer: &Localizer) -> Self {
        let display_keys = localizer.language_display_keys();
        let languages = localizer
            .available_languages()
            .into_iter()
            .map(|code| {
                let label = match display_keys.get(&code) {
                    Some(key) => localizer.t(key),
                    None => code.clone(),
                };
                MenuItem {
                    label,
                    action: MenuAction::SetLanguage(code),
                }
            })
            .collect();

        let file = Menu {
            label: localizer.t("menu_file"),
            items: vec![MenuItem {
                label: localizer.t("menu_exit"),
                action: MenuAction::Exit,
            }],
        };
        let language = Menu {
            label: localizer.t("menu_language"),
            items: languages,
        };
        let help = Menu {
            label: localizer.t("menu_help"),
            items: vec![MenuItem {
                label: localizer.t("menu_about"),
                action: MenuAction::About,
            }],
        };

        Self {
            menus: vec![file, language, help],
        }
    }

    pub fn menu(&self, label: &str) -> Option<&Menu> {
        self.menus.iter().find(|m| m.label == label)
    }

    pub fn actions(&self) -> impl Iterator<Item = &MenuAction> {
        self.menus.iter().flat_map(|m| m.items.iter().map(|i| &i.action))
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for menu in &self.menus {
            let _ = writeln!(out, "{}", menu.label);
            for item in &menu.items {
                let _ = writeln!(out, "  - {}", item.label);
            }
        }
        out
    }
}
