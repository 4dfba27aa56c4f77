use std::rc::Rc;

use dominator::{Dom, events, html, with_node};
use futures_signals::signal::SignalExt;
use web_sys::HtmlInputElement;

use shared::types::{LogRow, LogTable};

use crate::constants::{CLASS_PAGE_CONTENT, ID_ADD_LOG, ID_ADD_LOG_TAB, ID_ALL_LOGS, ID_ALL_LOGS_TAB, ID_LOG_BUTTON, ID_LOG_FIELD, PROP_ID, PROP_PLACEHOLDER, PROP_TITLE, PROP_TYPE, PROP_VALUE, TAG_BUTTON, TAG_DIV, TAG_INPUT, TAG_SECTION, TAG_SPAN, TAG_TABLE, TAG_TBODY, TAG_TD, TAG_TH, TAG_TR};
use crate::loader::{handle_add_log, handle_all_logs};
use crate::state::{AppState, Tab};

const KEY_ENTER: &str = "Enter";

fn css_class(label: &str) -> String {
    format!("app-logs__{label}")
}

pub fn app_tabs(state: &Rc<AppState>) -> Dom {
    let on_add = state.clone();
    let on_all = state.clone();
    html!(TAG_DIV, {
        .class(css_class("tabs"))
        .children([
            html!(TAG_SPAN, {
                .attr(PROP_ID, ID_ADD_LOG_TAB)
                .class(css_class("tab"))
                .class_signal("is-active", state.page.tab.signal().map(|tab| tab == Tab::AddLog))
                .text("Add log")
                .event(move |_: events::Click| on_add.page.tab.set_neq(Tab::AddLog))
            }),
            html!(TAG_SPAN, {
                .attr(PROP_ID, ID_ALL_LOGS_TAB)
                .class(css_class("tab"))
                .class_signal("is-active", state.page.tab.signal().map(|tab| tab == Tab::AllLogs))
                .text("All logs")
                .event(move |_: events::Click| handle_all_logs(&on_all))
            }),
        ])
    })
}

pub fn app_logs(state: &Rc<AppState>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([add_log_section(state), all_logs_section(state)])
    })
}

fn add_log_section(state: &Rc<AppState>) -> Dom {
    let log_text = state.page.log_text.clone();
    let on_key = state.clone();
    let on_click = state.clone();
    html!(TAG_SECTION, {
        .attr(PROP_ID, ID_ADD_LOG)
        .class(css_class("section"))
        .visible_signal(state.page.tab.signal().map(|tab| tab == Tab::AddLog))
        .child(html!(TAG_DIV, {
            .class(CLASS_PAGE_CONTENT)
            .children([
                html!(TAG_INPUT => HtmlInputElement, {
                    .attr(PROP_ID, ID_LOG_FIELD)
                    .attr(PROP_TYPE, "text")
                    .attr(PROP_TITLE, "Log")
                    .attr(PROP_PLACEHOLDER, "What's happening here?")
                    .class(css_class("input"))
                    .prop_signal(PROP_VALUE, state.page.log_text.signal_cloned())
                    .with_node!(element => {
                        .event(move |_: events::Input| log_text.set_neq(element.value()))
                    })
                    .event(move |ev: events::KeyDown| {
                        if ev.key() == KEY_ENTER {
                            handle_add_log(&on_key);
                        }
                    })
                }),
                html!(TAG_BUTTON, {
                    .attr(PROP_ID, ID_LOG_BUTTON)
                    .class(css_class("button"))
                    .text("Log it")
                    .event(move |_: events::Click| handle_add_log(&on_click))
                }),
            ])
        }))
    })
}

fn all_logs_section(state: &Rc<AppState>) -> Dom {
    html!(TAG_SECTION, {
        .attr(PROP_ID, ID_ALL_LOGS)
        .class(css_class("section"))
        .visible_signal(state.page.tab.signal().map(|tab| tab == Tab::AllLogs))
        .child(html!(TAG_DIV, {
            .class(CLASS_PAGE_CONTENT)
            .child_signal(state.page.logs.signal_cloned().map(|logs| logs.map(|table| logs_table(&table))))
        }))
    })
}

fn logs_table(table: &LogTable) -> Dom {
    html!(TAG_TABLE, {
        .class("mdl-data-table")
        .class("mdl-js-data-table")
        .child(html!(TAG_TBODY, {
            .child(html!(TAG_TR, {
                .children(LogTable::header().iter().map(|label| html!(TAG_TH, { .text(label) })))
            }))
            .children(table.rows.iter().map(log_row))
        }))
    })
}

fn log_row(row: &LogRow) -> Dom {
    html!(TAG_TR, {
        .children([
            html!(TAG_TD, { .text(&row.log) }),
            html!(TAG_TD, { .text(&row.logged_at) }),
            html!(TAG_TD, { .text(&row.coordinates) }),
        ])
    })
}
