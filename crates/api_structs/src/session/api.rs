use crate::dtos::SuccessDTO;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod create_session {
    use super::*;

    /// Everything besides `email` is carried into the token claims as is
    #[derive(Deserialize, Serialize)]
    pub struct RequestBody {
        pub email: String,
        #[serde(flatten)]
        pub extra: Map<String, Value>,
    }

    pub type APIResponse = SuccessDTO;
}

pub mod remove_session {
    use super::*;

    pub type APIResponse = SuccessDTO;
}
