use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Form;
use tracing::debug;

use super::AppState;
use crate::models::{RequestContext, StockForm};
use crate::services::report_service;
use crate::utils::render_index;

/// GET / renders the empty form
pub async fn show_form() -> Html<String> {
    Html(render_index(&RequestContext::default()))
}

/// POST / runs the submitted symbol and currency through the pipeline
pub async fn submit(State(state): State<AppState>, form: Result<Form<StockForm>, FormRejection>) -> Html<String> {
    // an unreadable body is treated the same as an empty form
    let form = match form {
        Ok(Form(form)) => form,
        Err(e) => {
            debug!("Unreadable form submission: {}", e);
            StockForm::default()
        }
    };

    let context = report_service::handle_submission(&state.fetcher, state.renderer.as_ref(), &form).await;
    Html(render_index(&context))
}
