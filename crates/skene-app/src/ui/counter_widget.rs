//! Counter card view model.
//!
//! Holds the translated labels of the counter card and keeps its value label
//! in sync by observing the `CounterService`. Button presses go straight to
//! the service; the label only changes through the observer callback.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use skene_core::error::Result;
use skene_core::{CounterObserver, CounterService, CounterState, ObserverId};

use crate::localization::Localizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Decrement,
    Reset,
    Increment,
}

impl Button {
    /// Layout order, left to right.
    pub const ALL: [Button; 3] = [Button::Decrement, Button::Reset, Button::Increment];

    fn message_id(self) -> &'static str {
        match self {
            Button::Decrement => "counter_decrement",
            Button::Reset => "counter_reset",
            Button::Increment => "counter_increment",
        }
    }
}

pub struct CounterWidget {
    service: Arc<CounterService>,
    localizer: Arc<Localizer>,
    title: String,
    button_labels: [String; 3],
    value_label: RwLock<String>,
    subscription: Mutex<Option<ObserverId>>,
}

impl CounterWidget {
    /// Build the widget in the current language and register it as an observer.
    ///
    /// The service keeps the widget alive until [`CounterWidget::detach`] is called.
    pub fn attach(service: Arc<CounterService>, localizer: Arc<Localizer>) -> Arc<Self> {
        let title = localizer.t("counter_title");
        let button_labels = Button::ALL.map(|b| localizer.t(b.message_id()));
        let value_label = format_value(&localizer, service.get_value());

        let widget = Arc::new(Self {
            service: Arc::clone(&service),
            localizer,
            title,
            button_labels,
            value_label: RwLock::new(value_label),
            subscription: Mutex::new(None),
        });

        let id = service.add_observer(widget.clone());
        *widget.subscription.lock() = Some(id);
        // picks up mutations that raced the registration
        widget.render_value(service.get_value());

        tracing::debug!(observer = %id, lang = %widget.localizer.current_language(), "counter widget attached");
        widget
    }

    /// Unregister from the service. Returns false if already detached.
    pub fn detach(&self) -> bool {
        let Some(id) = self.subscription.lock().take() else {
            return false;
        };
        let removed = self.service.remove_observer(id);
        tracing::debug!(observer = %id, removed, "counter widget detached");
        removed
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.lock().is_some()
    }

    pub fn subscription(&self) -> Option<ObserverId> {
        *self.subscription.lock()
    }

    pub fn press(&self, button: Button) {
        match button {
            Button::Decrement => self.service.decrement(),
            Button::Reset => self.service.reset(),
            Button::Increment => self.service.increment(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn button_label(&self, button: Button) -> &str {
        let idx = match button {
            Button::Decrement => 0,
            Button::Reset => 1,
            Button::Increment => 2,
        };
        &self.button_labels[idx]
    }

    pub fn value_label(&self) -> String {
        self.value_label.read().clone()
    }

    fn render_value(&self, value: i64) {
        *self.value_label.write() = format_value(&self.localizer, value);
    }
}

impl CounterObserver for CounterWidget {
    fn on_counter_changed(&self, state: CounterState) -> Result<()> {
        self.render_value(state.value);
        Ok(())
    }
}

fn format_value(localizer: &Localizer, value: i64) -> String {
    localizer.t_with("counter_value", &[("value", &value.to_string())])
}
