//! Rule table and machine execution.

use super::event::{Event, EventKind};
use super::outcome::StepOutcome;
use crate::dispatch::{text, Keyboard, Reply};
use crate::session::{FlowState, StateKind};
use crate::theory::{generate_modulation, generate_step_for_tonality, Degree, Tonality};
use rand::RngCore;

/// Action executed when a rule matches. Receives the current state, the
/// triggering event, and the boundary's RNG.
pub type ActionFn = fn(&FlowState, &Event, &mut dyn RngCore) -> StepOutcome;

/// One legal move in the conversation flow.
pub struct Rule {
    /// Source state; `None` matches any state.
    pub from: Option<StateKind>,
    pub on: EventKind,
    pub action: ActionFn,
}

impl Rule {
    pub fn matches(&self, state: &FlowState, event: &Event) -> bool {
        self.on == event.kind() && self.from.map_or(true, |kind| kind == state.kind())
    }
}

/// The flow machine: an ordered rule table, first match wins.
///
/// Specific rules are listed before their wildcard fallbacks, mirroring how
/// the pin-aware `next` rule must shadow the no-pin guidance rule.
pub struct FlowMachine {
    rules: Vec<Rule>,
}

impl FlowMachine {
    /// The bot's conversation rules.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                Rule {
                    from: Some(StateKind::DegreePinned),
                    on: EventKind::Next,
                    action: act_next_for_degree,
                },
                Rule {
                    from: None,
                    on: EventKind::Next,
                    action: act_next_without_degree,
                },
                Rule {
                    from: Some(StateKind::TonalityPinned),
                    on: EventKind::NextTonality,
                    action: act_next_for_tonality,
                },
                Rule {
                    from: None,
                    on: EventKind::NextTonality,
                    action: act_next_without_tonality,
                },
                Rule {
                    from: Some(StateKind::AwaitingDegree),
                    on: EventKind::Text,
                    action: act_degree_input,
                },
                Rule {
                    from: Some(StateKind::AwaitingTonality),
                    on: EventKind::Text,
                    action: act_tonality_input,
                },
                Rule {
                    from: None,
                    on: EventKind::PickDegree,
                    action: act_pick_degree,
                },
                Rule {
                    from: None,
                    on: EventKind::PickTonality,
                    action: act_pick_tonality,
                },
                Rule {
                    from: None,
                    on: EventKind::SelectStep,
                    action: act_select_step,
                },
                Rule {
                    from: None,
                    on: EventKind::SelectTonality,
                    action: act_select_tonality,
                },
                Rule {
                    from: None,
                    on: EventKind::Start,
                    action: act_start,
                },
                Rule {
                    from: None,
                    on: EventKind::Modulate,
                    action: act_modulate,
                },
                Rule {
                    from: None,
                    on: EventKind::Cancel,
                    action: act_cancel,
                },
            ],
        }
    }

    /// The rule table, for enumeration in tests.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Apply one event, returning what the session should do.
    pub fn apply(&self, state: &FlowState, event: &Event, rng: &mut dyn RngCore) -> StepOutcome {
        match self.rules.iter().find(|rule| rule.matches(state, event)) {
            Some(rule) => (rule.action)(state, event, rng),
            None => StepOutcome::Ignored,
        }
    }
}

impl Default for FlowMachine {
    fn default() -> Self {
        Self::standard()
    }
}

fn act_start(_state: &FlowState, _event: &Event, _rng: &mut dyn RngCore) -> StepOutcome {
    StepOutcome::Stayed {
        replies: vec![Reply::text(text::HELP)],
    }
}

fn act_modulate(_state: &FlowState, _event: &Event, rng: &mut dyn RngCore) -> StepOutcome {
    let replies = match generate_modulation(rng, None) {
        Some(modulation) => vec![Reply::text(modulation.to_string())],
        None => vec![Reply::text(text::GENERATION_FAILED)],
    };
    StepOutcome::Stayed { replies }
}

fn act_select_step(_state: &FlowState, _event: &Event, _rng: &mut dyn RngCore) -> StepOutcome {
    StepOutcome::Transitioned {
        to: FlowState::AwaitingDegree,
        replies: vec![Reply::with_keyboard(
            text::SELECT_STEP_PROMPT,
            Keyboard::degrees(),
        )],
    }
}

fn act_select_tonality(_state: &FlowState, _event: &Event, _rng: &mut dyn RngCore) -> StepOutcome {
    StepOutcome::Transitioned {
        to: FlowState::AwaitingTonality,
        replies: vec![Reply::with_keyboard(
            text::SELECT_TONALITY_PROMPT,
            Keyboard::tonalities(),
        )],
    }
}

fn act_degree_input(_state: &FlowState, event: &Event, rng: &mut dyn RngCore) -> StepOutcome {
    let Event::Text(input) = event else {
        return StepOutcome::Ignored;
    };
    match Degree::parse(input) {
        Some(degree) => pin_degree(degree, rng),
        None => StepOutcome::Stayed {
            replies: vec![Reply::text(text::INVALID_STEP)],
        },
    }
}

fn act_tonality_input(_state: &FlowState, event: &Event, rng: &mut dyn RngCore) -> StepOutcome {
    let Event::Text(input) = event else {
        return StepOutcome::Ignored;
    };
    match Tonality::parse(input) {
        Some(tonality) => pin_tonality(tonality, rng),
        None => StepOutcome::Stayed {
            replies: vec![Reply::text(text::INVALID_TONALITY)],
        },
    }
}

fn act_pick_degree(_state: &FlowState, event: &Event, rng: &mut dyn RngCore) -> StepOutcome {
    let Event::PickDegree(degree) = event else {
        return StepOutcome::Ignored;
    };
    pin_degree(*degree, rng)
}

fn act_pick_tonality(_state: &FlowState, event: &Event, rng: &mut dyn RngCore) -> StepOutcome {
    let Event::PickTonality(tonality) = event else {
        return StepOutcome::Ignored;
    };
    pin_tonality(*tonality, rng)
}

fn pin_degree(degree: Degree, rng: &mut dyn RngCore) -> StepOutcome {
    match generate_modulation(rng, Some(degree)) {
        Some(modulation) => StepOutcome::Transitioned {
            to: FlowState::DegreePinned(degree),
            replies: vec![
                Reply::text(modulation.to_string()),
                Reply::text(text::STEP_FOLLOWUP),
            ],
        },
        None => StepOutcome::Stayed {
            replies: vec![Reply::text(text::GENERATION_FAILED)],
        },
    }
}

fn pin_tonality(tonality: Tonality, rng: &mut dyn RngCore) -> StepOutcome {
    match generate_step_for_tonality(rng, tonality) {
        Some(modulation) => StepOutcome::Transitioned {
            to: FlowState::TonalityPinned(tonality),
            replies: vec![
                Reply::text(modulation.to_string()),
                Reply::text(text::TONALITY_FOLLOWUP),
            ],
        },
        None => StepOutcome::Stayed {
            replies: vec![Reply::text(text::GENERATION_FAILED)],
        },
    }
}

fn act_next_for_degree(state: &FlowState, _event: &Event, rng: &mut dyn RngCore) -> StepOutcome {
    let Some(degree) = state.pinned_degree() else {
        return act_next_without_degree(state, _event, rng);
    };
    let replies = match generate_modulation(rng, Some(degree)) {
        Some(modulation) => vec![
            Reply::text(modulation.to_string()),
            Reply::text(text::STEP_FOLLOWUP),
        ],
        None => vec![Reply::text(text::GENERATION_FAILED)],
    };
    StepOutcome::Stayed { replies }
}

fn act_next_without_degree(
    _state: &FlowState,
    _event: &Event,
    _rng: &mut dyn RngCore,
) -> StepOutcome {
    StepOutcome::Transitioned {
        to: FlowState::Idle,
        replies: vec![Reply::text(text::SELECT_STEP_FIRST)],
    }
}

fn act_next_for_tonality(state: &FlowState, _event: &Event, rng: &mut dyn RngCore) -> StepOutcome {
    let Some(tonality) = state.pinned_tonality() else {
        return act_next_without_tonality(state, _event, rng);
    };
    let replies = match generate_step_for_tonality(rng, tonality) {
        Some(modulation) => vec![
            Reply::text(modulation.to_string()),
            Reply::text(text::TONALITY_FOLLOWUP),
        ],
        None => vec![Reply::text(text::GENERATION_FAILED)],
    };
    StepOutcome::Stayed { replies }
}

fn act_next_without_tonality(
    _state: &FlowState,
    _event: &Event,
    _rng: &mut dyn RngCore,
) -> StepOutcome {
    StepOutcome::Transitioned {
        to: FlowState::Idle,
        replies: vec![Reply::text(text::SELECT_TONALITY_FIRST)],
    }
}

fn act_cancel(_state: &FlowState, _event: &Event, _rng: &mut dyn RngCore) -> StepOutcome {
    StepOutcome::Transitioned {
        to: FlowState::Idle,
        replies: vec![Reply::text(text::CANCELLED)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn apply(state: &FlowState, event: Event) -> StepOutcome {
        FlowMachine::standard().apply(state, &event, &mut rng())
    }

    #[test]
    fn start_replies_help_from_any_state() {
        for state in [FlowState::Idle, FlowState::DegreePinned(Degree::V)] {
            let outcome = apply(&state, Event::Start);
            assert_eq!(outcome.next_state(&state), state);
            assert_eq!(outcome.replies()[0].text, text::HELP);
        }
    }

    #[test]
    fn modulate_is_stateless() {
        let state = FlowState::TonalityPinned(Tonality::parse("C-dur").unwrap());
        let outcome = apply(&state, Event::Modulate);
        assert_eq!(outcome.next_state(&state), state);
        assert!(outcome.replies()[0].text.ends_with("ступень"));
    }

    #[test]
    fn select_step_prompts_with_degree_keyboard() {
        let outcome = apply(&FlowState::Idle, Event::SelectStep);
        match &outcome {
            StepOutcome::Transitioned { to, replies } => {
                assert_eq!(*to, FlowState::AwaitingDegree);
                assert_eq!(replies[0].text, text::SELECT_STEP_PROMPT);
                assert!(replies[0].keyboard.is_some());
            }
            other => panic!("expected transition, got {other:?}"),
        }
    }

    #[test]
    fn valid_degree_text_pins_and_emits_modulation() {
        let outcome = apply(&FlowState::AwaitingDegree, Event::Text("V".into()));
        match &outcome {
            StepOutcome::Transitioned { to, replies } => {
                assert_eq!(*to, FlowState::DegreePinned(Degree::V));
                assert!(replies[0].text.contains("V ступень"));
                assert_eq!(replies[1].text, text::STEP_FOLLOWUP);
            }
            other => panic!("expected transition, got {other:?}"),
        }
    }

    #[test]
    fn lowercase_degree_text_is_accepted() {
        let outcome = apply(&FlowState::AwaitingDegree, Event::Text("vii".into()));
        assert_eq!(
            outcome.next_state(&FlowState::AwaitingDegree),
            FlowState::DegreePinned(Degree::VII)
        );
    }

    #[test]
    fn invalid_degree_text_reprompts_in_place() {
        let state = FlowState::AwaitingDegree;
        let outcome = apply(&state, Event::Text("IX".into()));
        assert_eq!(outcome.next_state(&state), state);
        assert_eq!(outcome.replies()[0].text, text::INVALID_STEP);
    }

    #[test]
    fn next_with_degree_pin_repeats_same_degree() {
        let state = FlowState::DegreePinned(Degree::V);
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = FlowMachine::standard().apply(&state, &Event::Next, &mut rng);
            assert_eq!(outcome.next_state(&state), state);
            assert!(outcome.replies()[0].text.contains("V ступень"));
        }
    }

    #[test]
    fn next_without_pin_ends_flow_with_guidance() {
        for state in [FlowState::Idle, FlowState::AwaitingDegree] {
            let outcome = apply(&state, Event::Next);
            assert_eq!(outcome.next_state(&state), FlowState::Idle);
            assert_eq!(outcome.replies()[0].text, text::SELECT_STEP_FIRST);
        }
    }

    #[test]
    fn next_with_wrong_pin_type_counts_as_no_pin() {
        let state = FlowState::TonalityPinned(Tonality::parse("a-moll").unwrap());
        let outcome = apply(&state, Event::Next);
        assert_eq!(outcome.next_state(&state), FlowState::Idle);
        assert_eq!(outcome.replies()[0].text, text::SELECT_STEP_FIRST);
    }

    #[test]
    fn tonality_flow_mirrors_degree_flow() {
        let prompt = apply(&FlowState::Idle, Event::SelectTonality);
        assert_eq!(prompt.next_state(&FlowState::Idle), FlowState::AwaitingTonality);

        let tonality = Tonality::parse("h-moll").unwrap();
        let pinned = apply(&FlowState::AwaitingTonality, Event::Text("h-moll".into()));
        match &pinned {
            StepOutcome::Transitioned { to, replies } => {
                assert_eq!(*to, FlowState::TonalityPinned(tonality));
                assert!(replies[0].text.starts_with("h-moll, "));
                assert_eq!(replies[1].text, text::TONALITY_FOLLOWUP);
            }
            other => panic!("expected transition, got {other:?}"),
        }

        let repeat = apply(&FlowState::TonalityPinned(tonality), Event::NextTonality);
        assert!(repeat.replies()[0].text.starts_with("h-moll, "));
    }

    #[test]
    fn invalid_tonality_text_reprompts_in_place() {
        let state = FlowState::AwaitingTonality;
        let outcome = apply(&state, Event::Text("Z-dur".into()));
        assert_eq!(outcome.next_state(&state), state);
        assert_eq!(outcome.replies()[0].text, text::INVALID_TONALITY);
    }

    #[test]
    fn callback_pick_pins_immediately_from_idle() {
        let outcome = apply(&FlowState::Idle, Event::PickDegree(Degree::III));
        assert_eq!(
            outcome.next_state(&FlowState::Idle),
            FlowState::DegreePinned(Degree::III)
        );

        let tonality = Tonality::parse("Ges-dur").unwrap();
        let outcome = apply(&FlowState::Idle, Event::PickTonality(tonality));
        assert_eq!(
            outcome.next_state(&FlowState::Idle),
            FlowState::TonalityPinned(tonality)
        );
    }

    #[test]
    fn cancel_always_returns_to_idle() {
        let states = [
            FlowState::Idle,
            FlowState::AwaitingDegree,
            FlowState::AwaitingTonality,
            FlowState::DegreePinned(Degree::II),
            FlowState::TonalityPinned(Tonality::parse("d-moll").unwrap()),
        ];
        for state in states {
            let outcome = apply(&state, Event::Cancel);
            assert_eq!(outcome.next_state(&state), FlowState::Idle);
            assert_eq!(outcome.replies()[0].text, text::CANCELLED);
        }
    }

    #[test]
    fn repeated_cancel_is_idempotent() {
        let mut state = FlowState::DegreePinned(Degree::V);
        for _ in 0..3 {
            let outcome = apply(&state, Event::Cancel);
            state = outcome.next_state(&state);
            assert!(state.is_idle());
        }
    }

    #[test]
    fn free_text_outside_flows_is_ignored() {
        for state in [FlowState::Idle, FlowState::DegreePinned(Degree::IV)] {
            let outcome = apply(&state, Event::Text("что-нибудь".into()));
            assert_eq!(outcome, StepOutcome::Ignored);
            assert!(outcome.replies().is_empty());
        }
    }

    #[test]
    fn select_commands_restart_an_active_flow() {
        let state = FlowState::DegreePinned(Degree::V);
        let outcome = apply(&state, Event::SelectStep);
        assert_eq!(outcome.next_state(&state), FlowState::AwaitingDegree);
    }

    #[test]
    fn rule_table_is_enumerable() {
        let machine = FlowMachine::standard();
        assert!(machine.rules().len() >= 13);
        // Pin-aware rules must shadow their wildcard fallbacks.
        let next_rules: Vec<_> = machine
            .rules()
            .iter()
            .filter(|r| r.on == EventKind::Next)
            .collect();
        assert_eq!(next_rules[0].from, Some(StateKind::DegreePinned));
        assert_eq!(next_rules[1].from, None);
    }
}
