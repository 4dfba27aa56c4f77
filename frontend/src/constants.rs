pub static PROP_TITLE: &'static str = "title";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_PLACEHOLDER: &'static str = "placeholder";
pub static PROP_ID: &'static str = "id";

pub static TAG_DIV: &'static str = "div";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_BUTTON: &'static str = "button";
pub static TAG_SECTION: &'static str = "section";
pub static TAG_TABLE: &'static str = "table";
pub static TAG_TBODY: &'static str = "tbody";
pub static TAG_TR: &'static str = "tr";
pub static TAG_TH: &'static str = "th";
pub static TAG_TD: &'static str = "td";

pub static ID_SIGN_IN: &'static str = "sign-in";
pub static ID_SIGN_OUT: &'static str = "sign-out";
pub static ID_USER_PIC: &'static str = "user-pic";
pub static ID_USER_NAME: &'static str = "user-name";
pub static ID_LOG_FIELD: &'static str = "one-log-field";
pub static ID_LOG_BUTTON: &'static str = "one-log-button";
pub static ID_ADD_LOG: &'static str = "one-log";
pub static ID_ADD_LOG_TAB: &'static str = "one-log-tab";
pub static ID_ALL_LOGS: &'static str = "all-logs";
pub static ID_ALL_LOGS_TAB: &'static str = "all-logs-tab";

pub static CLASS_PAGE_CONTENT: &'static str = "page-content";
