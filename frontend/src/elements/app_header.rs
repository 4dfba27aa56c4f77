use std::rc::Rc;

use dominator::{Dom, events, html};
use futures_signals::signal::SignalExt;

use shared::types::Control;

use crate::constants::{ID_SIGN_IN, ID_SIGN_OUT, ID_USER_NAME, ID_USER_PIC, PROP_ID, TAG_BUTTON, TAG_DIV};
use crate::loader::{handle_sign_in, handle_sign_out};
use crate::state::AppState;

fn css_class(label: &str) -> String {
    format!("app-header__{label}")
}

pub fn app_header(state: &Rc<AppState>) -> Dom {
    let page = &state.page;
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .attr(PROP_ID, ID_USER_PIC)
                .class(css_class("pic"))
                .style_signal("background-image", page.user_pic.signal_cloned().map(|url| format!("url({url})")))
                .visible_signal(page.visible_signal(Control::UserPic))
            }),
            html!(TAG_DIV, {
                .attr(PROP_ID, ID_USER_NAME)
                .class(css_class("name"))
                .text_signal(page.user_name.signal_cloned())
                .visible_signal(page.visible_signal(Control::UserName))
            }),
            button(state, ID_SIGN_OUT, "Sign-out", Control::SignOut, handle_sign_out),
            button(state, ID_SIGN_IN, "Sign-in with Google", Control::SignIn, handle_sign_in),
        ])
    })
}

fn button(state: &Rc<AppState>, id: &str, label: &str, control: Control, click: fn(&Rc<AppState>)) -> Dom {
    let on_click = state.clone();
    html!(TAG_BUTTON, {
        .attr(PROP_ID, id)
        .class(css_class("button"))
        .text(label)
        .visible_signal(state.page.visible_signal(control))
        .event(move |_: events::Click| click(&on_click))
    })
}
