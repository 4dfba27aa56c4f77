pub static COLLECTION_USERS: &'static str = "users";
pub static COLLECTION_LOGS: &'static str = "logs";

pub static FIELD_LOG_TEXT: &'static str = "logText";
pub static FIELD_LOGGED_AT: &'static str = "logged_at";
pub static FIELD_LOCATION: &'static str = "location";

pub static ORDER_DESC: &'static str = "desc";

pub static PROFILE_PLACEHOLDER: &'static str = "/images/profile_placeholder.png";
pub static PROFILE_PIC_HOST: &'static str = "googleusercontent.com";
pub const PROFILE_PIC_SIZE: u32 = 150;

pub static HEADER_LOG: &'static str = "Log";
pub static HEADER_LOGGED_AT: &'static str = "Logged at";
pub static HEADER_COORDINATES: &'static str = "Coordinates";
