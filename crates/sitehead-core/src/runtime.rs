//! tokio driver for the header state machine
//!
//! A single actor task owns the [`HeaderMachine`]; callers talk to it through
//! a [`HeaderHandle`]. Dismiss timers are spawned sleep tasks that report back
//! on an internal channel and are aborted when cancelled. Dropping every
//! handle stops the actor, which tears the machine down.

use crate::config::HeaderConfig;
use crate::decision::{Regime, VisibilityDecision};
use crate::dismiss::{DismissHandle, DismissScheduler, DismissToken};
use crate::error::CoreError;
use crate::machine::HeaderMachine;
use crate::nav::NavigationSet;
use crate::scroll_lock::ScrollLock;
use crate::viewport::ViewportClass;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, info, trace};

/// Input events accepted by the header runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderEvent {
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
    EnterItem(String),
    FocusItem(String),
    Resize(u32),
    SetViewport(ViewportClass),
    ToggleMobileMenu,
    SetMobileMenuOpen(bool),
    Navigate,
    CloseSubnav,
}

/// Snapshot returned by [`HeaderHandle::snapshot`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSnapshot {
    pub decision: VisibilityDecision,
    pub regime: Regime,
    pub hovered: bool,
    pub pending_dismiss: Option<DismissToken>,
    pub holds_scroll_lock: bool,
}

enum Command {
    Event(HeaderEvent),
    Snapshot(oneshot::Sender<HeaderSnapshot>),
}

/// Scheduler that spawns a tokio sleep per armed timer
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    fired: mpsc::UnboundedSender<DismissToken>,
}

impl TokioScheduler {
    pub fn new(fired: mpsc::UnboundedSender<DismissToken>) -> Self {
        Self { fired }
    }
}

impl DismissScheduler for TokioScheduler {
    type Handle = TokioDismissHandle;

    fn schedule(&mut self, delay: Duration, token: DismissToken) -> TokioDismissHandle {
        let fired = self.fired.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the runtime already stopped
            let _ = fired.send(token);
        });

        TokioDismissHandle {
            abort: task.abort_handle(),
        }
    }
}

#[derive(Debug)]
pub struct TokioDismissHandle {
    abort: AbortHandle,
}

impl DismissHandle for TokioDismissHandle {
    fn cancel(&mut self) {
        self.abort.abort();
    }
}

/// Client side of a running header
#[derive(Debug, Clone)]
pub struct HeaderHandle {
    commands: mpsc::UnboundedSender<Command>,
    decisions: watch::Receiver<VisibilityDecision>,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Event(event) => f.debug_tuple("Event").field(event).finish(),
            Command::Snapshot(_) => f.write_str("Snapshot"),
        }
    }
}

impl HeaderHandle {
    /// Queue an event. Events are applied in send order.
    pub fn send(&self, event: HeaderEvent) -> Result<(), CoreError> {
        self.commands
            .send(Command::Event(event))
            .map_err(|_| CoreError::RuntimeClosed)
    }

    /// State after every previously sent event has been applied
    pub async fn snapshot(&self) -> Result<HeaderSnapshot, CoreError> {
        let (tx, rx) = oneshot::channel();
        self.commands
            .send(Command::Snapshot(tx))
            .map_err(|_| CoreError::RuntimeClosed)?;
        rx.await.map_err(|_| CoreError::RuntimeClosed)
    }

    pub async fn decision(&self) -> Result<VisibilityDecision, CoreError> {
        Ok(self.snapshot().await?.decision)
    }

    /// Watch channel updated whenever the decision changes
    pub fn subscribe(&self) -> watch::Receiver<VisibilityDecision> {
        self.decisions.clone()
    }
}

/// Spawn a header on the current tokio runtime.
///
/// The returned join handle completes once every [`HeaderHandle`] clone has
/// been dropped and the machine has been torn down.
pub fn spawn(
    navigation: Arc<NavigationSet>,
    config: HeaderConfig,
    scroll_lock: Arc<ScrollLock>,
) -> (HeaderHandle, JoinHandle<()>) {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (fired_tx, fired_rx) = mpsc::unbounded_channel();

    let machine = HeaderMachine::new(
        navigation,
        config,
        scroll_lock,
        TokioScheduler::new(fired_tx),
    );
    let (decision_tx, decision_rx) = watch::channel(machine.decision());

    info!(id = machine.id(), "Header runtime started");
    let task = tokio::spawn(run(machine, command_rx, fired_rx, decision_tx));

    (
        HeaderHandle {
            commands: command_tx,
            decisions: decision_rx,
        },
        task,
    )
}

async fn run(
    mut machine: HeaderMachine<TokioScheduler>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    mut fired: mpsc::UnboundedReceiver<DismissToken>,
    decisions: watch::Sender<VisibilityDecision>,
) {
    loop {
        tokio::select! {
            command = commands.recv() => {
                match command {
                    Some(Command::Event(event)) => {
                        trace!(?event, "Header event");
                        apply(&mut machine, event);
                    }
                    Some(Command::Snapshot(reply)) => {
                        let _ = reply.send(snapshot(&machine));
                    }
                    None => break,
                }
            }
            Some(token) = fired.recv() => {
                machine.dismiss_elapsed(token);
            }
        }

        decisions.send_if_modified(|current| {
            let next = machine.decision();
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    machine.teardown();
    debug!(id = machine.id(), "Header runtime stopped");
}

fn apply(machine: &mut HeaderMachine<TokioScheduler>, event: HeaderEvent) {
    match event {
        HeaderEvent::PointerEnter => machine.pointer_enter(),
        HeaderEvent::PointerLeave => machine.pointer_leave(),
        HeaderEvent::FocusIn => machine.focus_in(),
        HeaderEvent::FocusOut => machine.focus_out(),
        HeaderEvent::EnterItem(slug) => machine.enter_item(&slug),
        HeaderEvent::FocusItem(slug) => machine.focus_item(&slug),
        HeaderEvent::Resize(width) => machine.resize(width),
        HeaderEvent::SetViewport(class) => machine.set_viewport(class),
        HeaderEvent::ToggleMobileMenu => machine.toggle_mobile_menu(),
        HeaderEvent::SetMobileMenuOpen(open) => machine.set_mobile_menu_open(open),
        HeaderEvent::Navigate => machine.navigate(),
        HeaderEvent::CloseSubnav => machine.close_subnav(),
    }
}

fn snapshot(machine: &HeaderMachine<TokioScheduler>) -> HeaderSnapshot {
    HeaderSnapshot {
        decision: machine.decision(),
        regime: machine.regime(),
        hovered: machine.hovered(),
        pending_dismiss: machine.pending_dismiss(),
        holds_scroll_lock: machine.mobile_menu().holds_scroll_lock(),
    }
}
