use log::{debug, info, warn};
use serde::{Serialize, Deserialize};
use crate::constants::*;
use crate::visibility::{visible_views, VisibleViews};
use crate::wheel_geometry::{compute_final_rotation, SpinResult, WheelConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stage {
    #[default]
    Idle,
    Prompt,
    Spinning,
    Celebrating,
    Result,
    Closed,
}

/// Delayed transitions. Each one has at most a single pending timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Prompt has faded out; mount the wheel.
    RevealWheel,
    /// Lead-in over; the wheel starts turning toward its rigged rest angle.
    BeginSpin,
    FinishSpin,
    RevealResult,
    AutoClaim,
    FinishClose,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    pub prompt_exit_ms: u32,
    pub spin_lead_in_ms: u32,
    pub spin_duration_ms: u32,
    pub confetti_lead_ms: u32,
    pub close_delay_ms: u32,
    /// Claim automatically this long after the result appears. Off by default.
    pub auto_claim_ms: Option<u32>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            prompt_exit_ms: PROMPT_EXIT_DELAY_MS,
            spin_lead_in_ms: SPIN_LEAD_IN_MS,
            spin_duration_ms: SPIN_DURATION_MS,
            confetti_lead_ms: CONFETTI_LEAD_MS,
            close_delay_ms: CLOSE_DELAY_MS,
            auto_claim_ms: None,
        }
    }
}

impl SequenceConfig {
    pub fn delay_for(&self, transition: Transition) -> u32 {
        match transition {
            Transition::RevealWheel => self.prompt_exit_ms,
            Transition::BeginSpin => self.spin_lead_in_ms,
            Transition::FinishSpin => self.spin_duration_ms,
            Transition::RevealResult => self.confetti_lead_ms,
            Transition::AutoClaim => self.auto_claim_ms.unwrap_or(0),
            Transition::FinishClose => self.close_delay_ms,
        }
    }
}

/// One-shot flags for the current opening. Only `open` clears them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latches {
    pub start_taken: bool,
    pub result_shown: bool,
    pub completion_fired: bool,
}

/// Work the driver must carry out, in order, after an input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    Arm(Transition, u32),
    Disarm(Transition),
    DisarmAll,
    ReadBalance,
    PersistReset,
    BalanceReset,
    ApplyOutcome,
    Close,
    Changed,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SequenceSnapshot {
    pub epoch: u64,
    pub stage: Stage,
    pub views: VisibleViews,
    pub spin: Option<SpinResult>,
    /// False while the wheel is mounted but still in its lead-in.
    pub wheel_turning: bool,
    pub balance: Option<f64>,
}

/// Pure stage machine. Inputs mutate state and return the effects to run;
/// timing, storage and host callbacks live in the driver.
#[derive(Debug, Clone)]
pub struct SequenceMachine {
    wheel: WheelConfig,
    config: SequenceConfig,
    stage: Stage,
    latches: Latches,
    spin: Option<SpinResult>,
    wheel_turning: bool,
    balance: Option<f64>,
    epoch: u64,
}

impl SequenceMachine {
    pub fn new(wheel: WheelConfig, config: SequenceConfig) -> Self {
        Self {
            wheel,
            config,
            stage: Stage::Idle,
            latches: Latches::default(),
            spin: None,
            wheel_turning: false,
            balance: None,
            epoch: 0,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn latches(&self) -> Latches {
        self.latches
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn spin(&self) -> Option<SpinResult> {
        self.spin
    }

    pub fn set_balance(&mut self, balance: Option<f64>) {
        self.balance = balance;
    }

    pub fn snapshot(&self) -> SequenceSnapshot {
        SequenceSnapshot {
            epoch: self.epoch,
            stage: self.stage,
            views: visible_views(self.stage, &self.latches),
            spin: self.spin,
            wheel_turning: self.wheel_turning,
            balance: self.balance,
        }
    }

    /// Every open starts a fresh epoch; timers armed earlier can no longer fire into it.
    pub fn open(&mut self) -> Vec<Effect> {
        self.epoch += 1;
        self.stage = Stage::Prompt;
        self.latches = Latches::default();
        self.spin = None;
        self.wheel_turning = false;
        self.balance = None;
        info!("Sequence {} opened", self.epoch);
        vec![Effect::DisarmAll, Effect::ReadBalance, Effect::Changed]
    }

    pub fn close(&mut self) -> Vec<Effect> {
        if self.stage == Stage::Idle {
            return vec![Effect::DisarmAll];
        }
        info!("Sequence {} torn down from {:?}", self.epoch, self.stage);
        self.epoch += 1;
        self.stage = Stage::Idle;
        self.spin = None;
        self.wheel_turning = false;
        vec![Effect::DisarmAll, Effect::Changed]
    }

    pub fn start(&mut self) -> Vec<Effect> {
        if self.stage != Stage::Prompt || self.latches.start_taken {
            debug!("Ignoring start in {:?} stage", self.stage);
            return Vec::new();
        }
        self.latches.start_taken = true;
        let spin = compute_final_rotation(&self.wheel);
        debug!("Spin target fixed at {:.1} degrees", spin.final_rotation_degrees);
        self.spin = Some(spin);
        vec![self.arm(Transition::RevealWheel), Effect::Changed]
    }

    pub fn claim(&mut self) -> Vec<Effect> {
        self.complete("claim")
    }

    pub fn on_timer(&mut self, transition: Transition) -> Vec<Effect> {
        match (transition, self.stage) {
            (Transition::RevealWheel, Stage::Prompt) if self.latches.start_taken => {
                self.enter(Stage::Spinning);
                self.wheel_turning = false;
                vec![self.arm(Transition::BeginSpin), Effect::Changed]
            }
            (Transition::BeginSpin, Stage::Spinning) if !self.wheel_turning => {
                self.wheel_turning = true;
                vec![self.arm(Transition::FinishSpin), Effect::Changed]
            }
            (Transition::FinishSpin, Stage::Spinning) if self.wheel_turning => {
                self.enter(Stage::Celebrating);
                self.wheel_turning = false;
                vec![self.arm(Transition::RevealResult), Effect::Changed]
            }
            (Transition::RevealResult, Stage::Celebrating) if !self.latches.result_shown => {
                self.enter(Stage::Result);
                self.latches.result_shown = true;
                let mut effects = Vec::new();
                if self.config.auto_claim_ms.is_some() {
                    effects.push(self.arm(Transition::AutoClaim));
                }
                effects.push(Effect::Changed);
                effects
            }
            (Transition::AutoClaim, Stage::Result) => self.complete("auto-claim"),
            (Transition::FinishClose, Stage::Result) if self.latches.completion_fired => {
                self.enter(Stage::Closed);
                vec![Effect::DisarmAll, Effect::Close, Effect::Changed]
            }
            (transition, stage) => {
                warn!("Ignoring {:?} timer in {:?} stage", transition, stage);
                Vec::new()
            }
        }
    }

    fn complete(&mut self, source: &str) -> Vec<Effect> {
        if self.stage != Stage::Result {
            debug!("Ignoring {} in {:?} stage", source, self.stage);
            return Vec::new();
        }
        if self.latches.completion_fired {
            debug!("Duplicate {} suppressed for sequence {}", source, self.epoch);
            return Vec::new();
        }
        self.latches.completion_fired = true;
        info!("Sequence {} completed by {}", self.epoch, source);
        vec![
            Effect::Disarm(Transition::AutoClaim),
            Effect::PersistReset,
            Effect::BalanceReset,
            Effect::ApplyOutcome,
            self.arm(Transition::FinishClose),
            Effect::Changed,
        ]
    }

    fn arm(&self, transition: Transition) -> Effect {
        Effect::Arm(transition, self.config.delay_for(transition))
    }

    fn enter(&mut self, stage: Stage) {
        info!("Sequence {}: {:?} -> {:?}", self.epoch, self.stage, stage);
        self.stage = stage;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> SequenceMachine {
        let wheel = WheelConfig::new(10, 9, 6, 1.0).unwrap();
        SequenceMachine::new(wheel, SequenceConfig::default())
    }

    fn run_to_result(m: &mut SequenceMachine) {
        m.open();
        m.start();
        m.on_timer(Transition::RevealWheel);
        m.on_timer(Transition::BeginSpin);
        m.on_timer(Transition::FinishSpin);
        m.on_timer(Transition::RevealResult);
    }

    #[test]
    fn test_open_enters_prompt_and_reads_balance() {
        let mut m = machine();
        assert_eq!(m.stage(), Stage::Idle);
        let effects = m.open();
        assert_eq!(effects, vec![Effect::DisarmAll, Effect::ReadBalance, Effect::Changed]);
        assert_eq!(m.stage(), Stage::Prompt);
        assert_eq!(m.epoch(), 1);
    }

    #[test]
    fn test_start_computes_spin_once() {
        let mut m = machine();
        m.open();
        let effects = m.start();
        assert_eq!(effects, vec![Effect::Arm(Transition::RevealWheel, 300), Effect::Changed]);
        assert_eq!(m.spin().map(|s| s.final_rotation_degrees), Some(2179.0));
        assert!(m.start().is_empty());
        assert_eq!(m.stage(), Stage::Prompt);
    }

    #[test]
    fn test_timers_walk_the_declared_table() {
        let mut m = machine();
        m.open();
        m.start();
        assert_eq!(
            m.on_timer(Transition::RevealWheel),
            vec![Effect::Arm(Transition::BeginSpin, 300), Effect::Changed]
        );
        assert_eq!(m.stage(), Stage::Spinning);
        assert!(!m.snapshot().wheel_turning);
        assert_eq!(
            m.on_timer(Transition::BeginSpin),
            vec![Effect::Arm(Transition::FinishSpin, 3000), Effect::Changed]
        );
        assert!(m.snapshot().wheel_turning);
        assert_eq!(
            m.on_timer(Transition::FinishSpin),
            vec![Effect::Arm(Transition::RevealResult, 500), Effect::Changed]
        );
        assert_eq!(m.stage(), Stage::Celebrating);
        assert_eq!(m.on_timer(Transition::RevealResult), vec![Effect::Changed]);
        assert_eq!(m.stage(), Stage::Result);
        assert!(m.latches().result_shown);
    }

    #[test]
    fn test_claim_bundle_fires_once() {
        let mut m = machine();
        run_to_result(&mut m);
        let effects = m.claim();
        assert_eq!(
            effects,
            vec![
                Effect::Disarm(Transition::AutoClaim),
                Effect::PersistReset,
                Effect::BalanceReset,
                Effect::ApplyOutcome,
                Effect::Arm(Transition::FinishClose, 300),
                Effect::Changed,
            ]
        );
        assert!(m.claim().is_empty());
        assert!(m.on_timer(Transition::AutoClaim).is_empty());
        assert_eq!(
            m.on_timer(Transition::FinishClose),
            vec![Effect::DisarmAll, Effect::Close, Effect::Changed]
        );
        assert_eq!(m.stage(), Stage::Closed);
    }

    #[test]
    fn test_out_of_order_inputs_are_ignored() {
        let mut m = machine();
        assert!(m.start().is_empty());
        assert!(m.claim().is_empty());
        m.open();
        assert!(m.claim().is_empty());
        assert!(m.on_timer(Transition::RevealWheel).is_empty());
        assert!(m.on_timer(Transition::FinishClose).is_empty());
        assert_eq!(m.stage(), Stage::Prompt);
    }

    #[test]
    fn test_auto_claim_is_armed_when_configured() {
        let wheel = WheelConfig::new(10, 0, 6, 1.0).unwrap();
        let config = SequenceConfig { auto_claim_ms: Some(4000), ..SequenceConfig::default() };
        let mut m = SequenceMachine::new(wheel, config);
        m.open();
        m.start();
        m.on_timer(Transition::RevealWheel);
        m.on_timer(Transition::BeginSpin);
        m.on_timer(Transition::FinishSpin);
        assert_eq!(
            m.on_timer(Transition::RevealResult),
            vec![Effect::Arm(Transition::AutoClaim, 4000), Effect::Changed]
        );
        assert!(m.on_timer(Transition::AutoClaim).contains(&Effect::ApplyOutcome));
        assert!(m.claim().is_empty());
    }

    #[test]
    fn test_reopen_resets_latches_and_epoch() {
        let mut m = machine();
        run_to_result(&mut m);
        m.claim();
        m.on_timer(Transition::FinishClose);
        m.close();
        assert_eq!(m.stage(), Stage::Idle);

        m.open();
        assert_eq!(m.latches(), Latches::default());
        assert_eq!(m.spin(), None);
        assert_eq!(m.epoch(), 3);
    }

    #[test]
    fn test_close_while_idle_only_disarms() {
        let mut m = machine();
        assert_eq!(m.close(), vec![Effect::DisarmAll]);
        assert_eq!(m.epoch(), 0);
    }

    #[test]
    fn test_default_delays_come_from_constants() {
        let config = SequenceConfig::default();
        assert_eq!(config.delay_for(Transition::RevealWheel), PROMPT_EXIT_DELAY_MS);
        assert_eq!(config.delay_for(Transition::BeginSpin), SPIN_LEAD_IN_MS);
        assert_eq!(config.delay_for(Transition::FinishSpin), SPIN_DURATION_MS);
        assert_eq!(config.delay_for(Transition::RevealResult), CONFETTI_LEAD_MS);
        assert_eq!(config.delay_for(Transition::FinishClose), CLOSE_DELAY_MS);
        assert_eq!(config.auto_claim_ms, None);
    }

    #[test]
    fn test_partial_config_fills_in_defaults() {
        let config: SequenceConfig =
            serde_json::from_str(r#"{"spin_lead_in_ms": 500, "auto_claim_ms": 4000}"#).unwrap();
        assert_eq!(
            config,
            SequenceConfig {
                spin_lead_in_ms: 500,
                auto_claim_ms: Some(4000),
                ..SequenceConfig::default()
            }
        );

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<SequenceConfig>(&json).unwrap(), config);
        assert_eq!(serde_json::from_str::<SequenceConfig>("{}").unwrap(), SequenceConfig::default());
    }

    #[test]
    fn test_stage_and_spin_serialize() {
        assert_eq!(serde_json::to_string(&Stage::Celebrating).unwrap(), r#""Celebrating""#);
        assert_eq!(serde_json::from_str::<Stage>(r#""Result""#).unwrap(), Stage::Result);

        let spin = SpinResult { final_rotation_degrees: 2179.0 };
        let json = serde_json::to_string(&spin).unwrap();
        assert_eq!(json, r#"{"final_rotation_degrees":2179.0}"#);
        assert_eq!(serde_json::from_str::<SpinResult>(&json).unwrap(), spin);
    }
}
