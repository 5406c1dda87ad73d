//! Background catalog worker
//!
//! Runs catalog requests off the screen thread and hands results back
//! through a channel, tagged with the ticket of the screen that asked.

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TryRecvError, TrySendError};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::core::catalog::{CatalogClient, CatalogRequest, CatalogResponse, FetchCause};
use crate::core::constants::WORKER_CHANNEL_CAPACITY;
use crate::core::io_traits::{CatalogTransport, TransportError};
use crate::core::screen::RequestTicket;

// =============================================================================
// TYPES
// =============================================================================

/// Commands (screen thread -> worker thread)
#[derive(Debug)]
enum WorkerCommand {
    Fetch {
        ticket: RequestTicket,
        request: CatalogRequest,
    },
    Shutdown,
}

/// Results (worker thread -> screen thread)
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerReply {
    pub ticket: RequestTicket,
    pub response: CatalogResponse,
}

// =============================================================================
// CATALOG WORKER
// =============================================================================

pub struct CatalogWorker {
    tx: Option<Sender<WorkerCommand>>,
    rx: Option<Receiver<WorkerReply>>,
    thread_handle: Option<JoinHandle<()>>,
    shutdown_flag: Arc<AtomicBool>,
}

impl CatalogWorker {
    /// Start the worker thread around `client`
    pub fn spawn<T>(client: CatalogClient<T>) -> Self
    where
        T: CatalogTransport + Send + 'static,
    {
        let (command_tx, command_rx) = bounded::<WorkerCommand>(WORKER_CHANNEL_CAPACITY);
        let (reply_tx, reply_rx) = bounded::<WorkerReply>(WORKER_CHANNEL_CAPACITY);
        let shutdown_flag = Arc::new(AtomicBool::new(false));

        let thread_flag = Arc::clone(&shutdown_flag);
        let handle = thread::spawn(move || {
            worker_thread(client, command_rx, reply_tx, thread_flag);
        });

        info!("[worker] Started");

        Self {
            tx: Some(command_tx),
            rx: Some(reply_rx),
            thread_handle: Some(handle),
            shutdown_flag,
        }
    }

    pub fn is_running(&self) -> bool {
        self.thread_handle.is_some()
    }

    /// Queue a request. Returns false if it could not be queued.
    pub fn submit(&self, ticket: RequestTicket, request: CatalogRequest) -> bool {
        let Some(tx) = &self.tx else {
            warn!("[worker] Not running, dropping request");
            return false;
        };
        match tx.try_send(WorkerCommand::Fetch { ticket, request }) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                warn!("[worker] Queue full, dropping request");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!("[worker] Thread gone, dropping request");
                false
            }
        }
    }

    /// Next finished request, without blocking
    pub fn poll(&self) -> Option<WorkerReply> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(reply) => Some(reply),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Next finished request, waiting at most `timeout`
    pub fn poll_timeout(&self, timeout: Duration) -> Option<WorkerReply> {
        let rx = self.rx.as_ref()?;
        match rx.recv_timeout(timeout) {
            Ok(reply) => Some(reply),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    pub fn shutdown(&mut self) {
        self.shutdown_flag.store(true, Ordering::SeqCst);
        if let Some(tx) = self.tx.take() {
            let _ = tx.try_send(WorkerCommand::Shutdown);
        }
        // Unblocks a worker waiting on a full reply channel
        self.rx = None;
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
            info!("[worker] Stopped");
        }
    }
}

impl Drop for CatalogWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// =============================================================================
// WORKER THREAD
// =============================================================================

fn worker_thread<T: CatalogTransport>(
    client: CatalogClient<T>,
    command_rx: Receiver<WorkerCommand>,
    reply_tx: Sender<WorkerReply>,
    shutdown_flag: Arc<AtomicBool>,
) {
    for command in command_rx.iter() {
        if shutdown_flag.load(Ordering::SeqCst) {
            break;
        }

        let (ticket, request) = match command {
            WorkerCommand::Fetch { ticket, request } => (ticket, request),
            WorkerCommand::Shutdown => break,
        };

        debug!(screen = ?ticket.screen, generation = ticket.generation, "[worker] Fetching");

        let operation = request.operation();
        let response = catch_unwind(AssertUnwindSafe(|| client.execute(request))).unwrap_or_else(
            |panic_info| {
                let msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    format!("worker panic: {}", s)
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    format!("worker panic: {}", s)
                } else {
                    "worker panic".to_string()
                };
                error!("[worker] {}", msg);
                CatalogResponse::failed(operation, FetchCause::Transport(TransportError::Request(msg)))
            },
        );

        if reply_tx.send(WorkerReply { ticket, response }).is_err() {
            // Receiver dropped, nobody is listening anymore
            break;
        }
    }

    debug!("[worker] Thread exiting");
}
