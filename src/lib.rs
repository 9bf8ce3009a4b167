pub(crate) mod data {
    pub(crate) mod channels {
        pub(crate) mod subscriber_channel;
    }
    pub(crate) mod datasources {
        pub(crate) mod credentials_datasource;
        pub(crate) mod pubsub_transport_datasource;
        pub(crate) mod utils;
    }
    pub(crate) mod models {
        pub(crate) mod pubsub_api {
            pub(crate) mod pull_models;
            pub(crate) mod received_message_model;
            pub(crate) mod status_model;
        }
    }
    pub(crate) mod providers {
        pub(crate) mod subscription_provider_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod normalized_message;
        pub mod received_message;
        pub mod subscription_path;
    }
    pub mod providers {
        pub mod subscription_provider;
    }
    pub mod translators {
        pub mod subscription_message_translator;
    }
}

pub mod config;
pub mod constants;
pub mod errors;
pub mod routes;

pub use data::datasources::pubsub_transport_datasource::{
    PubsubTransportDatasource, PubsubTransportDatasourceImpl,
};
pub use data::providers::subscription_provider_impl::SubscriptionProviderImpl;
pub use domain::entities::normalized_message::{MessageMetadata, NormalizedMessage};
pub use domain::entities::received_message::ReceivedMessage;
pub use domain::entities::subscription_path::SubscriptionPath;
pub use domain::providers::subscription_provider::{SubscriptionOptions, SubscriptionProvider};
pub use domain::translators::subscription_message_translator::{
    MessageTranslator, SubscriptionMessageTranslator,
};
pub use routes::SubscriptionRoute;
