//! # Auth Service
//!
//! Posts sign-in and sign-up requests off the render loop. Each request runs
//! on its own tokio task and reports back through a channel that the frame
//! loop drains with `poll_reply`. At most one request is in flight.

use crate::panel::services::responses::RawResponse;
use crate::panel::validation::{Credentials, NewAccount};
use anyhow::Result;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Endpoint URLs of the remote authentication API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthEndpoints {
    pub sign_in_url: String,
    pub sign_up_url: String,
}

/// Which form a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    SignIn,
    SignUp,
    Register,
}

/// Validated payload ready to post
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    SignIn(Credentials),
    SignUp(NewAccount),
    Register(Credentials),
}

impl AuthRequest {
    pub fn kind(&self) -> RequestKind {
        match self {
            AuthRequest::SignIn(_) => RequestKind::SignIn,
            AuthRequest::SignUp(_) => RequestKind::SignUp,
            AuthRequest::Register(_) => RequestKind::Register,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("network unavailable: {0}")]
    NetworkUnavailable(String),
    #[error("request cancelled")]
    Cancelled,
}

/// Outcome of one dispatched request
#[derive(Debug)]
pub struct AuthReply {
    pub kind: RequestKind,
    pub result: Result<RawResponse, RequestError>,
}

/// Reply tagged with the id of the request that produced it
#[derive(Debug)]
struct TaggedReply {
    request_id: u64,
    reply: AuthReply,
}

#[derive(Debug)]
struct InFlight {
    request_id: u64,
    kind: RequestKind,
    handle: JoinHandle<()>,
}

/// Service for posting auth requests without blocking the frame loop
pub struct AuthService {
    client: reqwest::Client,
    endpoints: AuthEndpoints,
    next_request_id: u64,
    in_flight: Option<InFlight>,
    reply_receiver: mpsc::Receiver<TaggedReply>,
    reply_sender: mpsc::Sender<TaggedReply>,
}

impl AuthService {
    /// Create a service posting to `endpoints`, giving up after `timeout`
    pub fn new(endpoints: AuthEndpoints, timeout: Duration) -> Result<Self> {
        tracing::debug!("Creating AuthService for {:?}", endpoints);
        let (reply_sender, reply_receiver) = mpsc::channel(10);

        let client = reqwest::Client::builder().timeout(timeout).build()?;
        tracing::info!("HTTP client created with {:?} timeout", timeout);

        Ok(Self {
            client,
            endpoints,
            next_request_id: 0,
            in_flight: None,
            reply_receiver,
            reply_sender,
        })
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Kind of the request in flight
    pub fn pending_kind(&self) -> Option<RequestKind> {
        self.in_flight.as_ref().map(|in_flight| in_flight.kind)
    }

    /// Spawn a task posting `request`. Returns false, leaving the running
    /// request untouched, when one is already in flight.
    pub fn dispatch(&mut self, request: AuthRequest) -> bool {
        if let Some(in_flight) = &self.in_flight {
            tracing::debug!(
                "Ignoring {:?} submit while {:?} request is pending",
                request.kind(),
                in_flight.kind
            );
            return false;
        }

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        let kind = request.kind();
        let client = self.client.clone();
        let url = match kind {
            RequestKind::SignIn => self.endpoints.sign_in_url.clone(),
            RequestKind::SignUp | RequestKind::Register => self.endpoints.sign_up_url.clone(),
        };
        let sender = self.reply_sender.clone();

        tracing::info!("Dispatching {:?} request #{} to {}", kind, request_id, url);
        let handle = tokio::spawn(async move {
            let result = match &request {
                AuthRequest::SignIn(body) | AuthRequest::Register(body) => {
                    post_json(&client, &url, body).await
                }
                AuthRequest::SignUp(body) => post_json(&client, &url, body).await,
            };
            let reply = AuthReply { kind, result };
            if sender.send(TaggedReply { request_id, reply }).await.is_err() {
                tracing::debug!("Reply receiver dropped before request #{request_id} finished");
            }
        });

        self.in_flight = Some(InFlight {
            request_id,
            kind,
            handle,
        });
        true
    }

    /// Abort the request in flight, returning a `Cancelled` reply for it
    pub fn cancel(&mut self) -> Option<AuthReply> {
        let in_flight = self.in_flight.take()?;
        in_flight.handle.abort();
        tracing::info!(
            "Cancelled {:?} request #{}",
            in_flight.kind,
            in_flight.request_id
        );
        Some(AuthReply {
            kind: in_flight.kind,
            result: Err(RequestError::Cancelled),
        })
    }

    /// Non-blocking check for the reply of the request in flight.
    ///
    /// Replies from cancelled requests are discarded.
    pub fn poll_reply(&mut self) -> Option<AuthReply> {
        while let Ok(tagged) = self.reply_receiver.try_recv() {
            let current = self.in_flight.as_ref().map(|in_flight| in_flight.request_id);
            if current != Some(tagged.request_id) {
                tracing::debug!("Discarding stale reply #{}", tagged.request_id);
                continue;
            }
            self.in_flight = None;
            tracing::debug!("Request #{} finished: {:?}", tagged.request_id, tagged.reply);
            return Some(tagged.reply);
        }
        None
    }
}

impl Drop for AuthService {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.handle.abort();
        }
    }
}

/// POST `body` as JSON and collect status plus body text
async fn post_json<T: serde::Serialize + ?Sized>(
    client: &reqwest::Client,
    url: &str,
    body: &T,
) -> Result<RawResponse, RequestError> {
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|e| RequestError::NetworkUnavailable(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| RequestError::NetworkUnavailable(e.to_string()))?;

    Ok(RawResponse { status, body })
}
