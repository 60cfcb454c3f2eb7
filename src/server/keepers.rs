use actix_web::{http::header::ContentType, web, HttpRequest, HttpResponse};
use tracing::Instrument;

use super::{
    correlation::{correlation_id, CORRELATION_ID_HEADER},
    AppState,
};
use crate::{keepers::collect_keepers, LeagueId};

/// Register the keeper listing route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/keepers/{league_id}")
            .route(web::get().to(get_keepers))
            .route(web::post().to(get_keepers)),
    );
}

/// Keeper listing endpoint
///
/// GET|POST /keepers/{league_id}
///
/// 200 with one `{owner} ({team}): {player} ({position} - {team})` line per
/// keeper, or a "no keepers" message. 500 with the cause and correlation id
/// when any upstream call or lookup fails.
pub async fn get_keepers(
    state: web::Data<AppState>,
    league_id: web::Path<String>,
    req: HttpRequest,
) -> HttpResponse {
    let league_id = LeagueId::from(league_id.into_inner());
    let correlation_id = correlation_id(&req);
    let span = tracing::info_span!(
        "get_keepers",
        league_id = %league_id,
        correlation_id = %correlation_id
    );

    async move {
        tracing::info!("GetKeepers request received for leagueId: {}", league_id);

        match collect_keepers(&state.sleeper, &state.players_cache, &league_id).await {
            Ok(listing) => HttpResponse::Ok()
                .content_type(ContentType::plaintext())
                .insert_header((CORRELATION_ID_HEADER, correlation_id.as_str()))
                .body(listing.render()),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching keepers from Sleeper API");
                HttpResponse::InternalServerError()
                    .content_type(ContentType::plaintext())
                    .insert_header((CORRELATION_ID_HEADER, correlation_id.as_str()))
                    .body(format!(
                        "error fetching keepers for leagueId {}: {} (correlation id: {})",
                        league_id, e, correlation_id
                    ))
            }
        }
    }
    .instrument(span)
    .await
}
