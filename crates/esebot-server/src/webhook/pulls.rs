//! Pull request webhook handlers.

use actix_web::HttpResponse;
use esebot_core::use_cases::relay::RelayPullRequestEventInterface;
use esebot_types::pulls::GhPullRequestEvent;
use shaku::HasComponent;
use tracing::{debug, error};

use super::parse_event_type;
use crate::{event_type::EventType, server::AppContext, Result};

pub(crate) fn parse_pull_request_event(body: &str) -> Result<GhPullRequestEvent> {
    parse_event_type(EventType::PullRequest, body)
}

pub(crate) async fn pull_request_event(ctx: &AppContext, event: GhPullRequestEvent) -> HttpResponse {
    let ctx = ctx.as_core_context();
    let relay_pull_request_event: &dyn RelayPullRequestEventInterface =
        ctx.core_module.resolve_ref();

    match relay_pull_request_event.run(&ctx, event).await {
        Ok(outcome) => debug!(outcome = ?outcome, message = "Pull request event handled"),
        Err(e) => error!(error = %e, message = "Could not relay pull request event"),
    }

    HttpResponse::Accepted().body("Pull request.")
}
