//! `/time` routes.

use std::sync::Arc;

use axum::{Extension, Json};
use slog::info;

use primitives::api::CurrentDate;

use crate::{response::ResponseError, Application};

/// `POST /time/advance` request handler.
///
/// Sets the virtual day of the whole exchange and echoes it back. Jumping
/// backwards is allowed.
pub async fn advance_day(
    Extension(app): Extension<Arc<Application>>,
    Json(request): Json<CurrentDate>,
) -> Result<Json<CurrentDate>, ResponseError> {
    app.clock.set(request.current_date);

    info!(&app.logger, "Advanced the virtual day"; "current_date" => %request.current_date);

    Ok(Json(request))
}
