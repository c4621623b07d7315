//! Review webhook handlers.

use actix_web::HttpResponse;
use esebot_core::use_cases::relay::RelayReviewEventInterface;
use esebot_types::reviews::GhReviewEvent;
use shaku::HasComponent;
use tracing::{debug, error};

use super::parse_event_type;
use crate::{event_type::EventType, server::AppContext, Result};

pub(crate) fn parse_review_event(body: &str) -> Result<GhReviewEvent> {
    parse_event_type(EventType::PullRequestReview, body)
}

pub(crate) async fn review_event(ctx: &AppContext, event: GhReviewEvent) -> HttpResponse {
    let ctx = ctx.as_core_context();
    let relay_review_event: &dyn RelayReviewEventInterface = ctx.core_module.resolve_ref();

    match relay_review_event.run(&ctx, event).await {
        Ok(outcome) => debug!(outcome = ?outcome, message = "Review event handled"),
        Err(e) => error!(error = %e, message = "Could not relay review event"),
    }

    HttpResponse::Accepted().body("Pull request review.")
}
