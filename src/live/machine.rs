//! Connection state machine for the live-update channel.
//!
//! The machine is pure: it consumes transport/user events and returns the
//! effects the driver must apply (open or close the transport, flip the
//! indicator, schedule a retry, surface a notice). Keeping it free of any
//! platform types lets the whole reconnect policy be tested natively.

/// WebSocket "normal closure" code. A close with this code is a manual,
/// user-initiated suspend and is never retried.
pub const CLOSE_NORMAL: u16 = 1000;

/// Fixed delay before reconnecting after an abnormal closure. Deliberately
/// flat: no backoff, no jitter, no attempt cap.
pub const RETRY_DELAY_MS: u32 = 5_000;

/// Lifecycle phase of the single managed connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No connection and none being established.
    Idle,
    /// Transport opened, waiting for the open event.
    Connecting,
    /// Connection live, messages flowing.
    Open,
    /// Manual suspend requested, waiting for the close event.
    Closing,
}

/// Visual state of the on-page connectivity badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    /// Never connected, or first attempt still in flight.
    Unknown,
    Connected,
    Disconnected,
}

impl IndicatorState {
    /// The badge only accepts toggle clicks once a connection has either
    /// succeeded or visibly failed, never during the very first attempt.
    pub fn is_clickable(&self) -> bool {
        matches!(self, IndicatorState::Connected | IndicatorState::Disconnected)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            IndicatorState::Unknown => "idle",
            IndicatorState::Connected => "connected",
            IndicatorState::Disconnected => "disconnected",
        }
    }
}

/// Inputs to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineEvent {
    /// A page asked for a subscription (or a fresh open after suspend).
    SubscribeRequested,
    TransportOpened,
    TransportClosed { code: u16 },
    TransportError,
    /// The fixed reconnect delay elapsed.
    RetryElapsed,
    /// The user clicked the indicator badge.
    ToggleClicked,
}

/// Outputs the driver must apply, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    OpenTransport,
    CloseTransport { code: u16 },
    SetIndicator(IndicatorState),
    ScheduleRetry { delay_ms: u32 },
    /// Surface the one-shot "live updates stopped" notice.
    NoticeConnectionLost,
}

/// The reconnect state machine.
///
/// `attempt` starts at 1, is bumped on every abnormal closure and reset on a
/// successful open or a manual close. The loss notice fires only when the
/// first closure of an episode happens (`attempt == 1`), so repeated failed
/// reconnects stay quiet.
#[derive(Debug)]
pub struct ChannelMachine {
    phase: Phase,
    attempt: u32,
}

impl Default for ChannelMachine {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            attempt: 1,
        }
    }
}

impl ChannelMachine {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Advance the machine, returning the effects to apply.
    pub fn handle(&mut self, event: MachineEvent) -> Vec<Effect> {
        use MachineEvent::*;
        use Phase::*;

        match (self.phase, event) {
            (Idle, SubscribeRequested) | (Idle, RetryElapsed) => {
                self.phase = Connecting;
                vec![Effect::OpenTransport]
            }
            // Single-connection invariant: a second subscribe while a
            // connection is live (or being torn down) does nothing.
            (_, SubscribeRequested) => vec![],

            (Connecting, TransportOpened) => {
                self.phase = Open;
                // Recovery is deliberately silent (attempt > 1 here would be
                // a reconnect); only loss is user-visible.
                self.attempt = 1;
                vec![Effect::SetIndicator(IndicatorState::Connected)]
            }

            // Manual suspend completing: the close we requested came back.
            // Whatever the code, this was user-initiated, so no retry.
            (Closing, TransportClosed { .. }) | (Closing, TransportError) => {
                self.phase = Idle;
                self.attempt = 1;
                vec![Effect::SetIndicator(IndicatorState::Disconnected)]
            }

            // A normal-closure code outside of Closing still means someone
            // deliberately ended the connection; treated as manual.
            (Connecting, TransportClosed { code: CLOSE_NORMAL })
            | (Open, TransportClosed { code: CLOSE_NORMAL }) => {
                self.phase = Idle;
                self.attempt = 1;
                vec![Effect::SetIndicator(IndicatorState::Disconnected)]
            }

            // Abnormal loss: open failure, server drop, protocol error.
            (Connecting, TransportClosed { .. })
            | (Open, TransportClosed { .. })
            | (Connecting, TransportError)
            | (Open, TransportError) => self.connection_lost(),

            (Open, ToggleClicked) => {
                self.phase = Closing;
                vec![Effect::CloseTransport { code: CLOSE_NORMAL }]
            }
            (Idle, ToggleClicked) => {
                // Resume: flip the badge optimistically, fresh attempt count.
                self.phase = Connecting;
                self.attempt = 1;
                vec![
                    Effect::OpenTransport,
                    Effect::SetIndicator(IndicatorState::Connected),
                ]
            }

            // Stale timers, duplicate close events, clicks mid-transition.
            _ => vec![],
        }
    }

    fn connection_lost(&mut self) -> Vec<Effect> {
        self.phase = Phase::Idle;
        let mut effects = vec![Effect::SetIndicator(IndicatorState::Disconnected)];
        if self.attempt == 1 {
            effects.push(Effect::NoticeConnectionLost);
        }
        self.attempt += 1;
        effects.push(Effect::ScheduleRetry {
            delay_ms: RETRY_DELAY_MS,
        });
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_machine() -> ChannelMachine {
        let mut m = ChannelMachine::default();
        m.handle(MachineEvent::SubscribeRequested);
        m.handle(MachineEvent::TransportOpened);
        assert_eq!(m.phase(), Phase::Open);
        m
    }

    #[test]
    fn first_subscribe_opens_transport_without_touching_indicator() {
        let mut m = ChannelMachine::default();
        let effects = m.handle(MachineEvent::SubscribeRequested);
        assert_eq!(effects, vec![Effect::OpenTransport]);
        assert_eq!(m.phase(), Phase::Connecting);
    }

    #[test]
    fn subscribe_while_live_is_a_no_op() {
        let mut m = ChannelMachine::default();
        m.handle(MachineEvent::SubscribeRequested);
        // Still connecting: no second transport.
        assert!(m.handle(MachineEvent::SubscribeRequested).is_empty());
        m.handle(MachineEvent::TransportOpened);
        // Fully open: same.
        assert!(m.handle(MachineEvent::SubscribeRequested).is_empty());
        assert_eq!(m.phase(), Phase::Open);
    }

    #[test]
    fn open_sets_indicator_and_resets_attempt() {
        let mut m = ChannelMachine::default();
        m.handle(MachineEvent::SubscribeRequested);
        m.handle(MachineEvent::TransportClosed { code: 1006 });
        m.handle(MachineEvent::RetryElapsed);
        assert_eq!(m.attempt(), 2);
        let effects = m.handle(MachineEvent::TransportOpened);
        assert_eq!(
            effects,
            vec![Effect::SetIndicator(IndicatorState::Connected)]
        );
        assert_eq!(m.attempt(), 1);
    }

    #[test]
    fn abnormal_close_schedules_one_fixed_retry() {
        let mut m = open_machine();
        let effects = m.handle(MachineEvent::TransportClosed { code: 1006 });
        assert_eq!(
            effects,
            vec![
                Effect::SetIndicator(IndicatorState::Disconnected),
                Effect::NoticeConnectionLost,
                Effect::ScheduleRetry {
                    delay_ms: RETRY_DELAY_MS
                },
            ]
        );
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn transport_error_is_treated_like_abnormal_close() {
        let mut m = open_machine();
        let effects = m.handle(MachineEvent::TransportError);
        assert!(effects.contains(&Effect::ScheduleRetry {
            delay_ms: RETRY_DELAY_MS
        }));
    }

    #[test]
    fn normal_close_never_schedules_a_retry() {
        let mut m = open_machine();
        let effects = m.handle(MachineEvent::TransportClosed { code: CLOSE_NORMAL });
        assert_eq!(
            effects,
            vec![Effect::SetIndicator(IndicatorState::Disconnected)]
        );
        assert_eq!(m.attempt(), 1);
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn attempt_counts_consecutive_failures() {
        let mut m = ChannelMachine::default();
        m.handle(MachineEvent::SubscribeRequested);
        for n in 1..=4u32 {
            m.handle(MachineEvent::TransportClosed { code: 1006 });
            // At the time of the nth retry, attempt == n + 1.
            assert_eq!(m.attempt(), n + 1);
            m.handle(MachineEvent::RetryElapsed);
            assert_eq!(m.phase(), Phase::Connecting);
        }
        m.handle(MachineEvent::TransportOpened);
        assert_eq!(m.attempt(), 1);
    }

    #[test]
    fn loss_notice_fires_once_per_episode() {
        let mut m = open_machine();
        let first = m.handle(MachineEvent::TransportClosed { code: 1006 });
        assert!(first.contains(&Effect::NoticeConnectionLost));

        // Retry fails again: no second notice.
        m.handle(MachineEvent::RetryElapsed);
        let second = m.handle(MachineEvent::TransportClosed { code: 1006 });
        assert!(!second.contains(&Effect::NoticeConnectionLost));

        // After a successful open the next loss is a new episode.
        m.handle(MachineEvent::RetryElapsed);
        m.handle(MachineEvent::TransportOpened);
        let third = m.handle(MachineEvent::TransportClosed { code: 1011 });
        assert!(third.contains(&Effect::NoticeConnectionLost));
    }

    #[test]
    fn toggle_from_open_closes_with_normal_code() {
        let mut m = open_machine();
        let effects = m.handle(MachineEvent::ToggleClicked);
        assert_eq!(effects, vec![Effect::CloseTransport { code: CLOSE_NORMAL }]);
        assert_eq!(m.phase(), Phase::Closing);

        // The requested close routes back through the machine without a retry.
        let effects = m.handle(MachineEvent::TransportClosed { code: CLOSE_NORMAL });
        assert_eq!(
            effects,
            vec![Effect::SetIndicator(IndicatorState::Disconnected)]
        );
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn toggle_from_idle_reopens_optimistically() {
        let mut m = open_machine();
        m.handle(MachineEvent::ToggleClicked);
        m.handle(MachineEvent::TransportClosed { code: CLOSE_NORMAL });

        let effects = m.handle(MachineEvent::ToggleClicked);
        assert_eq!(
            effects,
            vec![
                Effect::OpenTransport,
                Effect::SetIndicator(IndicatorState::Connected),
            ]
        );
        assert_eq!(m.phase(), Phase::Connecting);
        assert_eq!(m.attempt(), 1);
    }

    #[test]
    fn toggle_mid_transition_is_ignored() {
        let mut m = ChannelMachine::default();
        m.handle(MachineEvent::SubscribeRequested);
        assert!(m.handle(MachineEvent::ToggleClicked).is_empty());

        let mut m = open_machine();
        m.handle(MachineEvent::ToggleClicked);
        assert_eq!(m.phase(), Phase::Closing);
        assert!(m.handle(MachineEvent::ToggleClicked).is_empty());
    }

    #[test]
    fn duplicate_loss_events_do_not_double_schedule() {
        let mut m = open_machine();
        // Browser transports often fire error then close for one loss.
        let first = m.handle(MachineEvent::TransportError);
        assert!(first.contains(&Effect::ScheduleRetry {
            delay_ms: RETRY_DELAY_MS
        }));
        let second = m.handle(MachineEvent::TransportClosed { code: 1006 });
        assert!(second.is_empty());
        assert_eq!(m.attempt(), 2);
    }

    #[test]
    fn close_during_manual_suspend_never_retries_regardless_of_code() {
        let mut m = open_machine();
        m.handle(MachineEvent::ToggleClicked);
        let effects = m.handle(MachineEvent::TransportClosed { code: 1006 });
        assert_eq!(
            effects,
            vec![Effect::SetIndicator(IndicatorState::Disconnected)]
        );
        assert_eq!(m.attempt(), 1);
    }

    #[test]
    fn clickable_affordance_tracks_indicator_state() {
        assert!(!IndicatorState::Unknown.is_clickable());
        assert!(IndicatorState::Connected.is_clickable());
        assert!(IndicatorState::Disconnected.is_clickable());
    }
}
