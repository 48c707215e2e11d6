mod booking;
mod service;
mod session;
mod shared;
mod status;

pub mod dtos {
    pub use crate::booking::dtos::*;
    pub use crate::service::dtos::*;
    pub use crate::shared::dtos::*;
}

pub use crate::booking::api::*;
pub use crate::service::api::*;
pub use crate::session::api::*;
pub use crate::status::api::*;
