use crate::dtos::{DeleteResultDTO, InsertResultDTO, ServiceDTO, UpdateResultDTO};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use service_swap_domain::ServiceDetails;

pub mod get_services {
    use super::*;

    #[derive(Deserialize, Serialize, Default)]
    pub struct QueryParams {
        /// Only return services owned by this user
        pub email: Option<String>,
    }

    pub type APIResponse = Vec<ServiceDTO>;
}

pub mod get_service {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub service_id: String,
    }

    /// Holds at most one service
    pub type APIResponse = Vec<ServiceDTO>;
}

pub mod create_service {
    use super::*;

    /// Stored as is
    pub type RequestBody = Map<String, Value>;

    pub type APIResponse = InsertResultDTO;
}

pub mod update_service {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub service_id: String,
    }

    /// Fields outside of the whitelist are ignored
    pub type RequestBody = ServiceDetails;

    pub type APIResponse = UpdateResultDTO;
}

pub mod delete_service {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub service_id: String,
    }

    pub type APIResponse = DeleteResultDTO;
}
