use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{use_notifier, Notifier};
use crate::contact::clock::BrowserClock;
use crate::contact::form::ContactForm;
use crate::contact::pipeline::{Effect, SubmissionPipeline, SubmitControl};
use crate::contact::relay::SimulatedRelay;
use crate::copy::Locale;

type Pipeline = SubmissionPipeline<BrowserClock, SimulatedRelay>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    PetName,
    Message,
}

pub enum FormAction {
    Edit(Field, String),
    Disable(String),
    Reset,
    Restore,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub form: ContactForm,
    pub control: SubmitControl,
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => {
                let slot = match field {
                    Field::Name => &mut next.form.name,
                    Field::Email => &mut next.form.email,
                    Field::PetName => &mut next.form.pet_name,
                    Field::Message => &mut next.form.message,
                };
                *slot = value;
            }
            FormAction::Disable(label) => next.control.disable(label),
            FormAction::Reset => next.form.clear(),
            FormAction::Restore => next.control.restore(),
        }
        Rc::new(next)
    }
}

fn apply(effects: Vec<Effect>, dispatcher: &UseReducerDispatcher<FormState>, notifier: Option<&Notifier>) {
    for effect in effects {
        match effect {
            Effect::Notify { message, kind } => match notifier {
                Some(notifier) => notifier.notify(message, kind),
                None => warn!("No notification host for: {}", message),
            },
            Effect::DisableSubmit { label } => dispatcher.dispatch(FormAction::Disable(label)),
            Effect::ResetForm => dispatcher.dispatch(FormAction::Reset),
            Effect::RestoreSubmit => dispatcher.dispatch(FormAction::Restore),
        }
    }
}

// Waits out the pending send and ticks the pipeline until it settles.
fn schedule_tick(
    pipeline: Rc<RefCell<Pipeline>>,
    dispatcher: UseReducerDispatcher<FormState>,
    notifier: Option<Notifier>,
) {
    let Some(delay) = pipeline.borrow().due_in_ms() else {
        return;
    };
    spawn_local(async move {
        TimeoutFuture::new(delay).await;
        let effects = pipeline.borrow_mut().tick();
        apply(effects, &dispatcher, notifier.as_ref());
        if pipeline.borrow().is_pending() {
            schedule_tick(pipeline, dispatcher, notifier);
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub locale: Locale,
}

#[function_component(ContactFormView)]
pub fn contact_form_view(props: &ContactFormProps) -> Html {
    let copy = props.locale.copy();
    let state = use_reducer(|| FormState {
        form: ContactForm::default(),
        control: SubmitControl::new(copy.submit),
    });
    let pipeline = {
        let messages = copy.form_messages;
        use_mut_ref(move || Pipeline::new(BrowserClock, SimulatedRelay, messages))
    };
    let notifier = use_notifier();

    let onsubmit = {
        let state = state.clone();
        let pipeline = pipeline.clone();
        let notifier = notifier.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let dispatcher = state.dispatcher();
            let effects = pipeline.borrow_mut().submit(&state.form);
            apply(effects, &dispatcher, notifier.as_ref());
            schedule_tick(pipeline.clone(), dispatcher, notifier.clone());
        })
    };

    let edit_input = |field: Field| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Edit(field, input.value()));
        })
    };

    let edit_message = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Edit(Field::Message, input.value()));
        })
    };

    let form = &state.form;
    let control = &state.control;

    html! {
        <form id="contact-form" class="contact-form" novalidate={true} {onsubmit}>
            <div class="form-group">
                <label for="name">{copy.label_name}</label>
                <input
                    id="name"
                    type="text"
                    autocomplete="name"
                    value={form.name.clone()}
                    oninput={edit_input(Field::Name)}
                />
            </div>
            <div class="form-group">
                <label for="email">{copy.label_email}</label>
                <input
                    id="email"
                    type="email"
                    autocomplete="email"
                    value={form.email.clone()}
                    oninput={edit_input(Field::Email)}
                />
            </div>
            <div class="form-group">
                <label for="pet">{copy.label_pet}</label>
                <input
                    id="pet"
                    type="text"
                    value={form.pet_name.clone()}
                    oninput={edit_input(Field::PetName)}
                />
            </div>
            <div class="form-group">
                <label for="message">{copy.label_message}</label>
                <textarea
                    id="message"
                    rows="5"
                    value={form.message.clone()}
                    oninput={edit_message}
                />
            </div>
            <button type="submit" class="btn btn-primary" disabled={control.disabled}>
                {&control.label}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> Rc<FormState> {
        Rc::new(FormState {
            form: ContactForm::default(),
            control: SubmitControl::new("Send Message"),
        })
    }

    #[test]
    fn edits_land_in_their_field() {
        let s = state()
            .reduce(FormAction::Edit(Field::PetName, "Rex".into()))
            .reduce(FormAction::Edit(Field::Message, "Limping since noon".into()));
        assert_eq!(s.form.pet_name, "Rex");
        assert_eq!(s.form.message, "Limping since noon");
        assert!(s.form.name.is_empty());
    }

    #[test]
    fn disable_then_restore_brings_back_the_label() {
        let s = state().reduce(FormAction::Disable("Sending...".into()));
        assert!(s.control.disabled);
        assert_eq!(s.control.label, "Sending...");
        let s = s.reduce(FormAction::Restore);
        assert!(!s.control.disabled);
        assert_eq!(s.control.label, "Send Message");
    }

    #[test]
    fn reset_clears_every_field() {
        let s = state()
            .reduce(FormAction::Edit(Field::Name, "Ann".into()))
            .reduce(FormAction::Edit(Field::Email, "ann@x.com".into()))
            .reduce(FormAction::Reset);
        assert!(s.form.is_empty());
    }
}
