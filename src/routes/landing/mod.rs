use crate::app_state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use get::landing_page;
use post::signup;

mod get;
mod post;

pub use post::{register_signup, SignupError, SignupResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_page))
        .route("/", post(signup))
}
