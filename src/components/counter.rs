use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::interactions::counter_next;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: i64,
    #[prop_or_default]
    pub suffix: AttrValue,
    /// Counting starts the first time this is true.
    pub running: bool,
}

/// Value to show after the next tick, if one is due.
fn pending_step(running: bool, current: i64, target: i64) -> Option<i64> {
    if running {
        counter_next(current, target)
    } else {
        None
    }
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let count = use_state_eq(|| 0i64);
    let current = *count;

    {
        let count = count.clone();
        let target = props.target;
        use_effect_with_deps(
            move |(running, current)| {
                let timeout = pending_step(*running, *current, target).map(|next| {
                    Timeout::new(config::COUNTER_TICK_MS, move || count.set(next))
                });
                move || drop(timeout)
            },
            (props.running, current),
        );
    }

    html! {
        <span class="counter" data-target={props.target.to_string()}>
            { current }{ &props.suffix }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_counter_schedules_nothing() {
        assert_eq!(pending_step(false, 0, 500), None);
    }

    #[test]
    fn running_counter_steps_until_target() {
        assert_eq!(pending_step(true, 0, 500), Some(10));
        assert_eq!(pending_step(true, 495, 500), Some(500));
        assert_eq!(pending_step(true, 500, 500), None);
    }
}
