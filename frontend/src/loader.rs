use std::future::Future;
use std::rc::Rc;

use futures::future::{abortable, AbortHandle};
use wasm_bindgen_futures::spawn_local;

use crate::state::{AppState, Tab};

/// Runs `future` on the browser event loop; the handle cancels it.
pub fn spawn_task<F>(future: F) -> AbortHandle
    where F: Future<Output=()> + 'static
{
    let (task, handle) = abortable(future);
    spawn_local(async move {
        if task.await.is_err() {
            log::debug!("task aborted");
        }
    });
    handle
}

pub fn handle_sign_in(state: &Rc<AppState>) {
    let app = state.app.clone();
    spawn_task(async move { app.sign_in().await });
}

pub fn handle_sign_out(state: &Rc<AppState>) {
    let app = state.app.clone();
    spawn_task(async move { app.sign_out().await });
}

pub fn handle_add_log(state: &Rc<AppState>) {
    let app = state.app.clone();
    spawn_task(async move {
        if let Err(err) = app.add_log().await {
            log::warn!("add_log: {}", err);
        }
    });
}

pub fn handle_all_logs(state: &Rc<AppState>) {
    state.page.tab.set_neq(Tab::AllLogs);
    let app = state.app.clone();
    let handle = spawn_task(async move {
        match app.all_logs().await {
            Ok(true) => {}
            Ok(false) => log::debug!("all_logs: not signed in"),
            Err(err) => log::error!("all_logs: {}", err),
        }
    });
    state.read.replace(handle);
}
