use std::cell::RefCell;
use std::rc::Rc;

use futures::future::AbortHandle;
use futures_signals::signal::{Mutable, Signal};

use shared::app::LogApp;
use shared::services::Page;
use shared::types::{Control, LogTable};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tab {
    AddLog,
    AllLogs,
}

/// Page surface backed by signals; the elements render from these.
/// Everything starts hidden until the first session report arrives.
pub struct DomPage {
    controls: Vec<Mutable<bool>>,
    pub user_name: Mutable<String>,
    pub user_pic: Mutable<String>,
    pub log_text: Mutable<String>,
    pub logs: Mutable<Option<LogTable>>,
    pub tab: Mutable<Tab>,
}

impl DomPage {
    pub fn new() -> Self {
        Self {
            controls: Control::ALL.iter().map(|_| Mutable::new(false)).collect(),
            user_name: Mutable::new(String::new()),
            user_pic: Mutable::new(String::new()),
            log_text: Mutable::new(String::new()),
            logs: Mutable::new(None),
            tab: Mutable::new(Tab::AddLog),
        }
    }

    pub fn visible_signal(&self, control: Control) -> impl Signal<Item=bool> {
        self.controls[control.index()].signal()
    }

    pub fn is_visible(&self, control: Control) -> bool {
        self.controls[control.index()].get()
    }
}

impl Page for DomPage {
    fn set_visible(&self, control: Control, visible: bool) {
        self.controls[control.index()].set_neq(visible);
    }

    fn set_user_name(&self, name: &str) {
        self.user_name.set_neq(name.to_string());
    }

    fn set_user_pic(&self, url: &str) {
        self.user_pic.set_neq(url.to_string());
    }

    fn log_text(&self) -> String {
        self.log_text.get_cloned()
    }

    fn clear_log_text(&self) {
        self.log_text.set(String::new());
    }

    fn clear_logs(&self) {
        self.logs.set(None);
    }

    fn show_logs(&self, table: &LogTable) {
        self.logs.set(Some(table.clone()));
    }
}

/// The "all logs" read currently in flight. A newer read aborts the older one.
#[derive(Default)]
pub struct ReadSlot {
    pending: RefCell<Option<AbortHandle>>,
}

impl ReadSlot {
    /// Keeps `handle` as the current read, aborting the one it replaces.
    pub fn replace(&self, handle: AbortHandle) {
        if let Some(previous) = self.pending.borrow_mut().replace(handle) {
            previous.abort();
        }
    }
}

/// Context handed to every element: the app handlers, the page they drive and
/// the read request currently in flight.
pub struct AppState {
    pub app: LogApp,
    pub page: Rc<DomPage>,
    pub read: ReadSlot,
}

impl AppState {
    pub fn new(app: LogApp, page: Rc<DomPage>) -> Rc<Self> {
        Rc::new(Self {
            app,
            page,
            read: ReadSlot::default(),
        })
    }
}
