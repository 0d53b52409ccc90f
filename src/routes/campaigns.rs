use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::core::find_within_radius;
use crate::models::{ApiResponse, CampaignPreviewData, NearbyCustomersData};
use crate::routes::{stored_circle_error, ApiError, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/campaigns/{id}/preview", web::get().to(preview_campaign));
}

/// Who a campaign would reach if it were sent now
///
/// GET /api/campaigns/{id}/preview
async fn preview_campaign(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let campaign = state
        .campaigns
        .find_campaign(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load campaign {}: {}", id, e);
            ApiError::from(e)
        })?
        .ok_or_else(|| ApiError::NotFound(format!("Campaign not found: {}", id)))?;

    let query = campaign.radius_query();

    let candidates = state.customers.candidates(campaign.company_id).await.map_err(|e| {
        tracing::error!("Failed to load candidates for campaign {}: {}", id, e);
        ApiError::from(e)
    })?;

    let result =
        find_within_radius(&query, &candidates).map_err(|e| stored_circle_error(&format!("campaign {}", id), e))?;

    tracing::info!(
        "Campaign {} ({}) previews {} of {} customers",
        id,
        campaign.name,
        result.len(),
        result.scanned
    );

    Ok(HttpResponse::Ok().json(ApiResponse::ok(CampaignPreviewData {
        campaign_id: campaign.id,
        campaign_name: campaign.name.clone(),
        reach: NearbyCustomersData::from_result(&query, &result),
        total_customers: result.scanned,
    })))
}
