//! HTTP API backend
//!
//! `GET /api/plan`, `POST /api/plot`, `DELETE /api/plot/{plotId}`.
//! Only one record travels per mutation. Any non-success answer is an error.

use async_trait::async_trait;
use log::{debug, info};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use super::PlanStorage;
use crate::error::PlanError;
use crate::models::{Plan, PlantingRecord, PlotId};

/// Characters escaped in a single path segment (matches `encodeURIComponent`)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Deserialize)]
struct PlanResponse {
    plan: Plan,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpsertPlotBody<'a> {
    plot_id: &'a str,
    vegetable: &'a str,
    planted_date: &'a str,
    updated_at: &'a str,
}

pub struct RemotePlanStorage {
    client: Client,
    base_url: String,
}

impl RemotePlanStorage {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn plan_url(&self) -> String {
        format!("{}/api/plan", self.base_url)
    }

    fn plot_url(&self) -> String {
        format!("{}/api/plot", self.base_url)
    }

    fn plot_item_url(&self, plot_id: &PlotId) -> String {
        format!(
            "{}/api/plot/{}",
            self.base_url,
            utf8_percent_encode(plot_id.as_str(), PATH_SEGMENT)
        )
    }
}

fn ensure_success(response: Response, action: &'static str) -> Result<Response, PlanError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(PlanError::Status {
            action,
            status: status.as_u16(),
        })
    }
}

#[async_trait(?Send)]
impl PlanStorage for RemotePlanStorage {
    fn describe(&self) -> &'static str {
        "remote API"
    }

    async fn load_all(&self) -> Result<Plan, PlanError> {
        let response = self.client.get(self.plan_url()).send().await?;
        let body: PlanResponse = ensure_success(response, "load plan")?.json().await?;
        info!("loaded {} planted plots from {}", body.plan.len(), self.base_url);
        Ok(body.plan)
    }

    async fn upsert(&self, plot_id: &PlotId, record: &PlantingRecord) -> Result<(), PlanError> {
        let body = UpsertPlotBody {
            plot_id: plot_id.as_str(),
            vegetable: &record.vegetable,
            planted_date: &record.planted_date,
            updated_at: &record.updated_at,
        };
        let response = self.client.post(self.plot_url()).json(&body).send().await?;
        ensure_success(response, "save plot")?;
        debug!("saved {}", plot_id);
        Ok(())
    }

    async fn remove(&self, plot_id: &PlotId) -> Result<(), PlanError> {
        let response = self.client.delete(self.plot_item_url(plot_id)).send().await?;
        ensure_success(response, "clear plot")?;
        debug!("cleared {}", plot_id);
        Ok(())
    }
}
