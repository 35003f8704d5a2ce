pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod playfab_client_api_datasource;
        pub(crate) mod unity_iap_receipt_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod playfab_client_api {
            pub(crate) mod common;
            pub(crate) mod validate_google_play_purchase_model;
            pub(crate) mod validate_ios_receipt_model;
        }
        pub(crate) mod unity_iap {
            pub(crate) mod app_store_receipt_model;
            pub(crate) mod google_play_receipt_model;
        }
    }
    pub(crate) mod repositories {
        pub(crate) mod validation_repository_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod normalized_payload;
        pub mod purchase_event;
        pub mod purchase_receipt;
        pub mod validation_outcome;
        pub mod validation_request;
    }
    pub mod repositories {
        pub mod store_listener;
        pub mod validation_repository;
    }
}

pub mod config;
pub mod errors;
pub mod reporter;
pub mod util;

pub use data::datasources::unity_iap_receipt_datasource::decode;
