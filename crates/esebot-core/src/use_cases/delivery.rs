use esebot_messaging_interface::MessageFormat;

use crate::{CoreContext, DomainError, Result};

pub(crate) async fn deliver(
    ctx: &CoreContext<'_>,
    destination: &str,
    message: &str,
    format: MessageFormat,
) -> Result<()> {
    ctx.messaging_service
        .send_message(destination, message, format)
        .await
        .map_err(|e| DomainError::DeliveryError {
            destination: destination.into(),
            message: message.into(),
            source: e,
        })
}
