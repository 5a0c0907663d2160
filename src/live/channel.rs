//! The live channel: one push connection per app, driven by a single task.
//!
//! `LiveChannel` is the handle pages get from context. It feeds a command
//! stream consumed by the driver task, which owns the transport, the state
//! machine, the subscribed topic and handler, and the indicator signal.
//! All mutations funnel through that one task, so the single-connection
//! invariant holds without locks.

use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures_util::StreamExt;
use serde_json::Value;

use super::envelope;
use super::machine::{ChannelMachine, Effect, IndicatorState, MachineEvent, Phase};
use super::timers;
use super::transport::{TransportEvent, WsTransport};
use crate::config;

/// Page-supplied message callback. Panics inside it are deliberately not
/// caught; a buggy handler is the page's problem, not the channel's.
pub type Handler = Rc<dyn Fn(Value)>;

/// Commands from the UI side (subscribe calls, indicator clicks).
enum Command {
    Subscribe { topic: String, handler: Handler },
    Toggle,
}

/// Everything the driver reacts to.
enum Input {
    Command(Command),
    Transport(TransportEvent),
    /// A retry timer fired; carries the generation it was scheduled under.
    Retry(u64),
}

/// Handle to the app-wide live channel. Cheap to clone; hand it to pages
/// through context rather than a global.
#[derive(Clone)]
pub struct LiveChannel {
    commands: UnboundedSender<Command>,
    /// Indicator badge state; a pure function of the last lifecycle event.
    pub indicator: Signal<IndicatorState>,
}

impl LiveChannel {
    /// Create the channel and its driver future. The caller spawns the
    /// driver on the local executor (see `LiveChannelProvider`).
    pub fn start() -> (Self, impl std::future::Future<Output = ()>) {
        let (commands_tx, commands_rx) = unbounded::<Command>();
        let indicator = Signal::new(IndicatorState::Unknown);
        let channel = Self {
            commands: commands_tx,
            indicator,
        };
        (channel, drive(commands_rx, indicator))
    }

    /// Subscribe a topic feed. The handler receives each decoded payload in
    /// delivery order. While a connection is live this is a logged no-op, so
    /// pages can call it unconditionally on mount.
    pub fn subscribe(&self, topic: impl Into<String>, handler: impl Fn(Value) + 'static) {
        if !WsTransport::supported() {
            crate::log_warn!("push transport unavailable, live updates disabled");
            return;
        }
        let _ = self.commands.unbounded_send(Command::Subscribe {
            topic: topic.into(),
            handler: Rc::new(handler),
        });
    }

    /// Manual suspend/resume, wired to the indicator badge click.
    pub fn toggle(&self) {
        let _ = self.commands.unbounded_send(Command::Toggle);
    }
}

/// Driver state: the one place `connection`, `topic` and `handler` mutate.
struct Driver {
    machine: ChannelMachine,
    connection: Option<WsTransport>,
    topic: Option<String>,
    handler: Option<Handler>,
    /// Bumped on every subscribe/toggle; a pending retry timer scheduled
    /// under an older generation is discarded when it fires, so a manual
    /// toggle can never race a queued reconnect into a duplicate socket.
    generation: u64,
    indicator: Signal<IndicatorState>,
    events_tx: UnboundedSender<TransportEvent>,
    retry_tx: UnboundedSender<u64>,
}

async fn drive(commands: UnboundedReceiver<Command>, indicator: Signal<IndicatorState>) {
    let (events_tx, events_rx) = unbounded::<TransportEvent>();
    let (retry_tx, retry_rx) = unbounded::<u64>();

    let mut driver = Driver {
        machine: ChannelMachine::default(),
        connection: None,
        topic: None,
        handler: None,
        generation: 0,
        indicator,
        events_tx,
        retry_tx,
    };

    let mut inputs = futures_util::stream::select(
        commands.map(Input::Command),
        futures_util::stream::select(
            events_rx.map(Input::Transport),
            retry_rx.map(Input::Retry),
        ),
    );

    while let Some(input) = inputs.next().await {
        match input {
            Input::Command(Command::Subscribe { topic, handler }) => {
                driver.on_subscribe(topic, handler);
            }
            Input::Command(Command::Toggle) => driver.on_toggle(),
            Input::Transport(event) => driver.on_transport(event),
            Input::Retry(generation) => driver.on_retry(generation),
        }
    }
}

impl Driver {
    fn on_subscribe(&mut self, topic: String, handler: Handler) {
        if !matches!(self.machine.phase(), Phase::Idle) {
            crate::log_info!("live channel already active, ignoring subscribe for '{topic}'");
            return;
        }
        self.generation += 1;
        self.topic = Some(topic);
        self.handler = Some(handler);
        let effects = self.machine.handle(MachineEvent::SubscribeRequested);
        self.apply(effects);
    }

    fn on_toggle(&mut self) {
        if self.topic.is_none() {
            crate::log_warn!("indicator toggled before any subscription, ignoring");
            return;
        }
        self.generation += 1;
        let effects = self.machine.handle(MachineEvent::ToggleClicked);
        self.apply(effects);
    }

    fn on_transport(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::Opened => {
                if let Some(topic) = &self.topic {
                    crate::log_info!("live channel connected for '{topic}'");
                }
                let effects = self.machine.handle(MachineEvent::TransportOpened);
                self.apply(effects);
            }
            TransportEvent::Message(text) => self.dispatch(&text),
            TransportEvent::Closed { code } => {
                crate::log_info!("live channel closed (code {code})");
                self.connection = None;
                let effects = self.machine.handle(MachineEvent::TransportClosed { code });
                self.apply(effects);
            }
            TransportEvent::Error => {
                self.connection = None;
                let effects = self.machine.handle(MachineEvent::TransportError);
                self.apply(effects);
            }
        }
    }

    fn on_retry(&mut self, generation: u64) {
        if generation != self.generation {
            crate::log_debug!("dropping stale reconnect timer (generation {generation})");
            return;
        }
        let effects = self.machine.handle(MachineEvent::RetryElapsed);
        self.apply(effects);
    }

    /// Decode the envelope and hand the payload to the page handler.
    fn dispatch(&mut self, text: &str) {
        crate::log_debug!("live message: {text}");
        let payload = match envelope::decode(text) {
            Ok(payload) => payload,
            Err(e) => {
                crate::log_error!("undecodable push message: {e}");
                return;
            }
        };
        if let Some(handler) = &self.handler {
            handler(payload);
        }
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::OpenTransport => self.open_transport(),
                Effect::CloseTransport { code } => {
                    if let Some(connection) = &self.connection {
                        connection.close(code);
                    }
                }
                Effect::SetIndicator(state) => self.indicator.set(state),
                Effect::ScheduleRetry { delay_ms } => {
                    let generation = self.generation;
                    let retry_tx = self.retry_tx.clone();
                    timers::schedule(delay_ms, move || {
                        let _ = retry_tx.unbounded_send(generation);
                    });
                }
                Effect::NoticeConnectionLost => {
                    crate::log_warn!("live updates stopped");
                    crate::stores::notices::push_notice("Live updates stopped.");
                }
            }
        }
    }

    fn open_transport(&mut self) {
        let Some(topic) = self.topic.clone() else {
            return;
        };
        let url = config::live_url(&topic);
        crate::log_info!("opening live channel to {url} (attempt {})", self.machine.attempt());
        match WsTransport::connect(&url, self.events_tx.clone()) {
            Ok(transport) => self.connection = Some(transport),
            Err(e) => {
                // Open failure joins the abnormal-loss path: disconnected
                // badge plus the fixed-delay retry.
                crate::log_warn!("{e}");
                let effects = self.machine.handle(MachineEvent::TransportError);
                self.apply(effects);
            }
        }
    }
}

/// Provides the app-wide [`LiveChannel`] to every page via context and runs
/// its driver task.
#[component]
pub fn LiveChannelProvider(children: Element) -> Element {
    let channel = use_hook(|| {
        let (channel, driver) = LiveChannel::start();
        spawn(driver);
        channel
    });
    use_context_provider(|| channel);

    children
}
