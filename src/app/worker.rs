//! Background execution of network requests
//!
//! Requests run as tasks on the tokio runtime; their outcomes come back to the
//! UI thread over a channel and are applied by `App::process_responses`.
//! Tasks never touch page state.

use std::sync::mpsc::{self, Receiver, Sender};

use tokio::runtime::Handle;
use tracing::debug;

use crate::api::{ApiError, Clients, GenerateRequest};
use crate::model::{Changelog, RepoHash, Repository};

/// Work the UI asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Repository search; `seq` identifies the debounced query that produced it
    Search { seq: u64, query: String },
    Generate(GenerateRequest),
    FetchChangelog(RepoHash),
}

/// Outcome of a [`Request`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Search {
        seq: u64,
        result: Result<Vec<Repository>, ApiError>,
    },
    Generate {
        request: GenerateRequest,
        result: Result<(), ApiError>,
    },
    Changelog {
        hash: RepoHash,
        result: Result<Changelog, ApiError>,
    },
}

impl Request {
    async fn run(self, clients: &Clients) -> Response {
        match self {
            Request::Search { seq, query } => Response::Search {
                seq,
                result: clients.search.search(&query).await,
            },
            Request::Generate(request) => {
                let result = clients.generate.generate(&request).await;
                Response::Generate { request, result }
            }
            Request::FetchChangelog(hash) => {
                let result = clients.fetch.fetch(&hash).await;
                Response::Changelog { hash, result }
            }
        }
    }
}

/// Spawns requests and forwards their responses
#[derive(Debug)]
pub struct Worker {
    handle: Handle,
    clients: Clients,
    tx: Sender<Response>,
}

impl Worker {
    /// Create a worker on `handle` and the receiving end for its responses
    pub fn new(handle: Handle, clients: Clients) -> (Self, Receiver<Response>) {
        let (tx, rx) = mpsc::channel();
        (
            Self {
                handle,
                clients,
                tx,
            },
            rx,
        )
    }

    pub fn dispatch(&self, request: Request) {
        debug!(?request, "dispatching request");
        let clients = self.clients.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let response = request.run(&clients).await;
            if tx.send(response).is_err() {
                debug!("response dropped: UI has shut down");
            }
        });
    }
}
