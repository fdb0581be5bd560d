//! Background fetches for mounted views.
//!
//! Requests run as tokio tasks and report back over a channel that the UI
//! loop drains between frames, so the loop never waits on the network.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::api::PortfolioApi;
use crate::app::Result;
use crate::domain::{Article, RepositoryDetail, RepositorySummary, Video};
use crate::view::Ticket;

/// Identifies one mounted view instance. Every navigation gets a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountId(pub(crate) u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Repositories,
    Repository(String),
    Articles,
    Videos,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub mount: MountId,
    pub ticket: Ticket,
    pub request: Request,
}

#[derive(Debug)]
pub enum Payload {
    Repositories(Result<Vec<RepositorySummary>>),
    Repository(Result<RepositoryDetail>),
    Articles(Result<Vec<Article>>),
    Videos(Result<Vec<Video>>),
}

#[derive(Debug)]
pub struct FetchMsg {
    pub mount: MountId,
    pub ticket: Ticket,
    pub payload: Payload,
}

/// Run one request to completion.
pub async fn perform(api: &(dyn PortfolioApi + Send + Sync), req: FetchRequest) -> FetchMsg {
    let payload = match &req.request {
        Request::Repositories => Payload::Repositories(api.list_repositories().await),
        Request::Repository(id) => Payload::Repository(api.get_repository(id).await),
        Request::Articles => Payload::Articles(api.list_articles().await),
        Request::Videos => Payload::Videos(api.list_videos().await),
    };

    FetchMsg {
        mount: req.mount,
        ticket: req.ticket,
        payload,
    }
}

pub fn spawn(
    api: Arc<dyn PortfolioApi + Send + Sync>,
    req: FetchRequest,
    tx: UnboundedSender<FetchMsg>,
) {
    tokio::spawn(async move {
        let msg = perform(api.as_ref(), req).await;
        if tx.send(msg).is_err() {
            tracing::debug!("UI loop has exited; dropping fetch result");
        }
    });
}
