pub mod app_state;
pub mod configuration;
pub mod domain;
pub mod loops_client;
pub mod mailing_list;
pub mod request_id;
pub mod routes;
pub mod startup;
pub mod telemetry;
