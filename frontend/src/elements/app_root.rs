use std::rc::Rc;

use dominator::{Dom, html};

use crate::constants::TAG_DIV;
use crate::elements::app_header::app_header;
use crate::elements::app_logs::{app_logs, app_tabs};
use crate::state::AppState;

pub fn app_root(state: Rc<AppState>) -> Dom {
    html!(TAG_DIV, {
        .class("app-root")
        .children([app_header(&state), app_tabs(&state), app_logs(&state)])
    })
}
