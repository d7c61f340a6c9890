mod event;
mod notification;
mod reminder;
mod status;
mod user;

pub mod dtos {
    pub use crate::event::dtos::*;
    pub use crate::notification::dtos::*;
    pub use crate::reminder::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::event::api::*;
pub use crate::notification::api::*;
pub use crate::reminder::api::*;
pub use crate::status::api::*;
pub use crate::user::api::*;
