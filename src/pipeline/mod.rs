//! Debounced, cancellable search pipeline.
//!
//! The one stateful component in the crate. A single worker thread owns the
//! [`DirectoryState`] and a command mailbox; every mutation is serialized
//! through that mailbox, so there are no locks and no concurrent writers.
//! The debounce timer is a deadline consulted with `recv_timeout`; filter
//! computations are cancelled cooperatively through a generation counter -
//! a superseded computation still runs to completion, but its result is
//! dropped instead of applied. Mailbox FIFO ordering makes the whole thing
//! last-write-wins under arbitrarily fast keystroke bursts.

use crate::config::SearchConfig;
use crate::model::{Salesman, SourceError};
use crate::search::DirectoryFilter;
use crate::source::SalesmanSource;
use crate::state::{reducer, DirectoryState, Intent, SearchState};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, trace, warn};

/// Worker mailbox commands. External intents and internal completions share
/// one queue, so every transition is applied in arrival order.
enum Command {
    Intent(Intent),
    LoadDone(Result<Vec<Salesman>, SourceError>),
    SearchDone {
        generation: u64,
        query: String,
        results: Vec<Salesman>,
    },
    Shutdown,
}

/// Debounced search pipeline over a salesman directory.
///
/// Construction spawns the worker; [`SearchPipeline::handle`] feeds it
/// intents; every applied transition is published as a [`DirectoryState`]
/// snapshot on the receiver returned from [`SearchPipeline::new`]. The
/// latest snapshot received is the authoritative state. Dropping the
/// pipeline shuts the worker down and joins it.
pub struct SearchPipeline {
    commands: Sender<Command>,
    worker: Option<JoinHandle<()>>,
}

impl SearchPipeline {
    /// Spawn a pipeline over `source` and `filter`.
    pub fn new(
        source: Arc<dyn SalesmanSource>,
        filter: Arc<dyn DirectoryFilter>,
        config: SearchConfig,
    ) -> (Self, Receiver<DirectoryState>) {
        let (command_tx, command_rx) = mpsc::channel();
        let (snapshot_tx, snapshot_rx) = mpsc::channel();

        let worker_tx = command_tx.clone();
        let worker = thread::spawn(move || {
            Worker::new(source, filter, config, worker_tx, command_rx, snapshot_tx).run();
        });

        (
            Self {
                commands: command_tx,
                worker: Some(worker),
            },
            snapshot_rx,
        )
    }

    /// Submit an intent.
    ///
    /// Never blocks; the worker applies intents in submission order. After
    /// shutdown, further intents are dropped silently.
    pub fn handle(&self, intent: Intent) {
        let _ = self.commands.send(Command::Intent(intent));
    }
}

impl Drop for SearchPipeline {
    fn drop(&mut self) {
        let _ = self.commands.send(Command::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Debounce bookkeeping for the keystroke burst currently in flight.
struct PendingSearch {
    /// Raw query text of the newest keystroke.
    query: String,
    /// When the burst counts as settled, absent a newer keystroke.
    deadline: Instant,
}

struct Worker {
    source: Arc<dyn SalesmanSource>,
    filter: Arc<dyn DirectoryFilter>,
    config: SearchConfig,
    /// Clone of the command sender, handed to helper threads so their
    /// completions re-enter the mailbox.
    commands: Sender<Command>,
    mailbox: Receiver<Command>,
    snapshots: Sender<DirectoryState>,
    state: DirectoryState,
    pending: Option<PendingSearch>,
    /// Current search round. Bumped on every keystroke and clear;
    /// completions carrying an older value are stale and dropped.
    generation: u64,
    /// Raw text of the previously settled burst; an identical settle is
    /// skipped outright.
    last_settled: Option<String>,
    /// Phase of the last committed round (Idle after a clear, Completed
    /// after an applied result). Restored when the user types their way
    /// back to the already-settled text.
    committed_phase: SearchState,
}

impl Worker {
    fn new(
        source: Arc<dyn SalesmanSource>,
        filter: Arc<dyn DirectoryFilter>,
        config: SearchConfig,
        commands: Sender<Command>,
        mailbox: Receiver<Command>,
        snapshots: Sender<DirectoryState>,
    ) -> Self {
        Self {
            source,
            filter,
            config,
            commands,
            mailbox,
            snapshots,
            state: DirectoryState::default(),
            pending: None,
            generation: 0,
            last_settled: None,
            committed_phase: SearchState::Idle,
        }
    }

    fn run(mut self) {
        loop {
            let deadline = self.pending.as_ref().map(|pending| pending.deadline);
            let command = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if deadline <= now {
                        self.settle();
                        continue;
                    }
                    match self.mailbox.recv_timeout(deadline - now) {
                        Ok(command) => command,
                        Err(RecvTimeoutError::Timeout) => {
                            self.settle();
                            continue;
                        }
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                None => match self.mailbox.recv() {
                    Ok(command) => command,
                    Err(_) => break,
                },
            };

            match command {
                Command::Intent(intent) => self.apply_intent(intent),
                Command::LoadDone(outcome) => self.apply_load_done(outcome),
                Command::SearchDone {
                    generation,
                    query,
                    results,
                } => self.apply_search_done(generation, query, results),
                Command::Shutdown => break,
            }
        }
        debug!("search pipeline worker stopped");
    }

    fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Load => {
                debug!("load requested");
                self.publish(reducer::reduce(self.state.clone(), Intent::Load));
                self.spawn_load();
            }
            Intent::Search(query) => self.apply_keystroke(query),
            Intent::ToggleExpansion(id) => {
                self.publish(reducer::reduce(
                    self.state.clone(),
                    Intent::ToggleExpansion(id),
                ));
            }
            Intent::ClearSearch => {
                debug!("search cleared");
                self.generation += 1;
                self.pending = None;
                self.committed_phase = SearchState::Idle;
                self.publish(reducer::reduce(self.state.clone(), Intent::ClearSearch));
            }
        }
    }

    /// A keystroke: cancel the in-flight round, echo immediately, restart
    /// the debounce clock.
    fn apply_keystroke(&mut self, query: String) {
        self.generation += 1;
        trace!(query = %query, generation = self.generation, "keystroke");

        let echoed = reducer::reduce(self.state.clone(), Intent::Search(query.clone()));
        let next = if self.last_settled.as_deref() == Some(query.as_str()) {
            // Typed back to the already-settled text: show the committed
            // round again rather than a Typing phase that will never
            // settle into anything new.
            reducer::restore_search_phase(echoed, self.committed_phase.clone())
        } else if query.trim().is_empty() {
            echoed
        } else {
            reducer::begin_typing(echoed, query.clone())
        };
        self.publish(next);

        self.pending = Some(PendingSearch {
            query,
            deadline: Instant::now() + self.config.debounce_interval,
        });
    }

    /// The debounce deadline passed: the burst has settled.
    fn settle(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        if self.last_settled.as_deref() == Some(pending.query.as_str()) {
            debug!(query = %pending.query, "settled text unchanged, skipping search");
            return;
        }
        self.last_settled = Some(pending.query.clone());

        let trimmed = pending.query.trim().to_string();
        if trimmed.is_empty() {
            debug!("settled on empty query, clearing search");
            self.committed_phase = SearchState::Idle;
            self.publish(reducer::reduce(self.state.clone(), Intent::ClearSearch));
            return;
        }

        debug!(query = %trimmed, generation = self.generation, "debounce settled, starting search");
        self.publish(reducer::begin_search(self.state.clone(), trimmed.clone()));

        let filter = Arc::clone(&self.filter);
        let salesmen = self.state.salesmen.clone();
        let commands = self.commands.clone();
        let generation = self.generation;
        thread::spawn(move || {
            let results = filter.filter(&salesmen, &trimmed);
            let _ = commands.send(Command::SearchDone {
                generation,
                query: trimmed,
                results,
            });
        });
    }

    fn apply_search_done(&mut self, generation: u64, query: String, results: Vec<Salesman>) {
        if generation != self.generation {
            debug!(query = %query, generation, current = self.generation, "dropping stale search result");
            return;
        }
        debug!(query = %query, count = results.len(), "search completed");
        let next = reducer::complete_search(self.state.clone(), query, results);
        self.committed_phase = next.search_state.clone();
        self.publish(next);
    }

    fn apply_load_done(&mut self, outcome: Result<Vec<Salesman>, SourceError>) {
        let next = match outcome {
            Ok(salesmen) => {
                debug!(count = salesmen.len(), "directory load finished");
                reducer::complete_load(self.state.clone(), salesmen)
            }
            Err(error) => {
                warn!(%error, "directory load failed");
                reducer::fail_load(self.state.clone(), error.to_string())
            }
        };
        self.publish(next);
    }

    fn spawn_load(&self) {
        let source = Arc::clone(&self.source);
        let commands = self.commands.clone();
        thread::spawn(move || {
            let outcome = source.fetch_all();
            let _ = commands.send(Command::LoadDone(outcome));
        });
    }

    fn publish(&mut self, next: DirectoryState) {
        self.state = next;
        // A dropped receiver is fine; the worker keeps applying intents.
        let _ = self.snapshots.send(self.state.clone());
    }
}
