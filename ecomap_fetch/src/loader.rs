// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-shot, non-blocking catalog loader.

use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use ecomap_catalog::RawProjectsResponse;

use crate::{CatalogSource, FetchError};

/// Where a load currently stands.
#[derive(Debug)]
pub enum LoadState<T> {
    /// Nothing has been requested yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The fetch succeeded.
    Success(T),
    /// The fetch failed. There is no retry.
    Error(FetchError),
}

impl<T> LoadState<T> {
    /// Returns `true` while a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded value, if the fetch succeeded.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    /// The failure, if the fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Runs one [`CatalogSource::fetch`] on a worker thread and exposes its
/// progress as a [`LoadState`].
///
/// The owner calls [`Loader::poll`] from its event loop; `poll` never blocks.
/// Dropping the loader while the fetch is pending discards the result once it
/// arrives; the request itself is not aborted.
///
/// ```rust
/// use ecomap_catalog::RawProjectsResponse;
/// use ecomap_fetch::{CatalogSource, FetchError, LoadState, Loader};
///
/// struct Empty;
/// impl CatalogSource for Empty {
///     fn describe(&self) -> String {
///         "empty".into()
///     }
///     fn fetch(&self) -> Result<RawProjectsResponse, FetchError> {
///         Ok(RawProjectsResponse::default())
///     }
/// }
///
/// let mut loader = Loader::new();
/// loader.start(Empty);
/// assert!(loader.state().is_loading());
/// let state = loader.wait();
/// assert!(matches!(state, LoadState::Success(raw) if raw.is_empty()));
/// ```
#[derive(Debug)]
pub struct Loader {
    state: LoadState<RawProjectsResponse>,
    pending: Option<Receiver<Result<RawProjectsResponse, FetchError>>>,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    /// A loader in the [`LoadState::Idle`] state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            pending: None,
        }
    }

    /// The current state, as of the last [`Loader::poll`].
    #[must_use]
    pub fn state(&self) -> &LoadState<RawProjectsResponse> {
        &self.state
    }

    /// Begin fetching from `source`.
    ///
    /// Only the first call has an effect: a loader performs exactly one fetch
    /// over its lifetime.
    pub fn start<S>(&mut self, source: S)
    where
        S: CatalogSource + Send + 'static,
    {
        if !matches!(self.state, LoadState::Idle) {
            tracing::debug!("catalog loader already started; ignoring start");
            return;
        }

        let origin = source.describe();
        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("catalog-fetch".into())
            .spawn(move || {
                let result = source.fetch();
                // The receiver is gone when the loader was dropped; nothing to do.
                let _ = tx.send(result);
            })
            .map(drop);
        self.started(&origin, spawned, rx);
    }

    fn started(
        &mut self,
        origin: &str,
        spawned: io::Result<()>,
        rx: Receiver<Result<RawProjectsResponse, FetchError>>,
    ) {
        match spawned {
            Ok(()) => {
                tracing::info!(source = %origin, "fetching catalog");
                self.pending = Some(rx);
                self.state = LoadState::Loading;
            }
            Err(err) => {
                tracing::error!(
                    source = %origin,
                    error = %err,
                    "failed to spawn catalog fetch worker"
                );
                self.state = LoadState::Error(FetchError::Spawn(err));
            }
        }
    }

    /// Check for a finished fetch without blocking.
    ///
    /// Returns `true` when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.finish(result);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.finish(Err(FetchError::Disconnected));
                true
            }
        }
    }

    /// Block until the pending fetch, if any, finishes.
    ///
    /// Returns `true` when the state changed.
    pub fn block(&mut self) -> bool {
        let Some(rx) = self.pending.take() else {
            return false;
        };
        let result = rx.recv().unwrap_or(Err(FetchError::Disconnected));
        self.finish(result);
        true
    }

    /// Block until the fetch finishes, then return the final state.
    ///
    /// An idle loader stays idle.
    pub fn wait(mut self) -> LoadState<RawProjectsResponse> {
        self.block();
        self.state
    }

    fn finish(&mut self, result: Result<RawProjectsResponse, FetchError>) {
        self.pending = None;
        self.state = match result {
            Ok(raw) => {
                tracing::info!(records = raw.len(), "catalog loaded");
                LoadState::Success(raw)
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog fetch failed");
                LoadState::Error(err)
            }
        };
    }
}
