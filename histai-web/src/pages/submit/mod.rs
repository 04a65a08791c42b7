pub mod samples;
pub mod state;
pub mod validation;

use crate::app::state::ModalImage;
use crate::i18n::t;
use crate::paths::asset_path;
use crate::router::Language;
use samples::SAMPLES;
use state::{FormField, SubmitStatus, TOTAL_STEPS, WizardState};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub language: Language,
    pub on_open_image: Callback<ModalImage>,
}

/// Text inputs on the form step, in display order. Selects are rendered
/// separately because they carry fixed option sets.
const TEXTAREA_FIELDS: [(FormField, &str); 4] = [
    (FormField::QuestionText, "submit.form.label.question"),
    (FormField::RequiredData, "submit.form.label.required_data"),
    (FormField::Explanation, "submit.form.label.explanation"),
    (FormField::SourceReference, "submit.form.label.source_reference"),
];

const INPUT_FIELDS: [(FormField, &str); 4] = [
    (FormField::Answer, "submit.form.label.answer"),
    (FormField::ThematicDirection, "submit.form.label.thematic_direction"),
    (FormField::ContributorName, "submit.form.label.name"),
    (FormField::ContributorAffiliation, "submit.form.label.affiliation"),
];

fn event_value(e: &Event) -> String {
    if let Some(el) = e.target_dyn_into::<HtmlInputElement>() {
        el.value()
    } else if let Some(el) = e.target_dyn_into::<HtmlTextAreaElement>() {
        el.value()
    } else if let Some(el) = e.target_dyn_into::<HtmlSelectElement>() {
        el.value()
    } else {
        String::new()
    }
}

fn field_id(field: FormField) -> &'static str {
    match field {
        FormField::Difficulty => "field-difficulty",
        FormField::AnswerType => "field-answer-type",
        FormField::QuestionText => "field-question-text",
        FormField::RequiredData => "field-required-data",
        FormField::Answer => "field-answer",
        FormField::Explanation => "field-explanation",
        FormField::SourceReference => "field-source-reference",
        FormField::ThematicDirection => "field-thematic-direction",
        FormField::ContributorName => "field-contributor-name",
        FormField::ContributorAffiliation => "field-contributor-affiliation",
    }
}

#[function_component(SubmitPage)]
pub fn submit_page(p: &Props) -> Html {
    let wizard = use_state(WizardState::new);

    let goto_step = |step: u8| {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            wizard.set((*wizard).clone().with_step(step));
        })
    };
    let prev = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.set((*wizard).clone().prev_step()))
    };
    let next = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.set((*wizard).clone().next_step()))
    };

    let on_field = |field: FormField| {
        let wizard = wizard.clone();
        Callback::from(move |e: Event| {
            wizard.set((*wizard).clone().with_field(field, event_value(&e)));
        })
    };

    let on_submit = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let errors = validation::validate(&wizard.form);
            if !errors.is_empty() {
                wizard.set((*wizard).clone().with_errors(errors));
                return;
            }
            wizard.set((*wizard).clone().with_status(SubmitStatus::Submitting));

            #[cfg(target_arch = "wasm32")]
            {
                let wizard = wizard.clone();
                let form = wizard.form.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let status = match crate::services::submission::submit(&form).await {
                        Ok(_) => SubmitStatus::Success,
                        Err(crate::services::submission::SubmitError::Rejected(reason)) => {
                            let mut args = std::collections::BTreeMap::new();
                            args.insert("reason", reason.as_str());
                            SubmitStatus::Error(crate::i18n::tr("submit.status.error", Some(&args)))
                        }
                        Err(crate::services::submission::SubmitError::Network(_)) => {
                            SubmitStatus::Error(t("submit.status.network"))
                        }
                    };
                    let announcement = match &status {
                        SubmitStatus::Success => t("submit.status.success"),
                        SubmitStatus::Error(msg) => msg.clone(),
                        _ => String::new(),
                    };
                    crate::a11y::set_status(&announcement);
                    wizard.set((*wizard).clone().with_status(status));
                });
            }
        })
    };

    let step = wizard.step();
    let step_keys = [
        "submit.stepper.step1",
        "submit.stepper.step2",
        "submit.stepper.step3",
    ];

    html! {
        <div class="page submit-page" data-testid="submit-page">
            <h1>{ t("submit.title") }</h1>
            <p>{ t("submit.intro") }</p>

            <nav class="stepper" aria-label={t("submit.title")}>
                { for (1..=TOTAL_STEPS).map(|n| {
                    let active = n == step;
                    html! {
                        <button
                            type="button"
                            class={if active { "step active" } else { "step" }}
                            aria-current={active.then_some("step")}
                            onclick={goto_step(n)}
                        >
                            { t(step_keys[usize::from(n) - 1]) }
                        </button>
                    }
                }) }
            </nav>

            {
                match step {
                    1 => guidelines_step(),
                    2 => samples_step(&p.on_open_image),
                    _ => form_step(&wizard, &on_field, &on_submit),
                }
            }

            <div class="wizard-controls">
                if step > 1 {
                    <button type="button" class="btn" onclick={prev}>
                        { t("submit.buttons.prev") }
                    </button>
                }
                if step < TOTAL_STEPS {
                    <button type="button" class="btn btn-primary" onclick={next}>
                        { t("submit.buttons.next") }
                    </button>
                }
            </div>
        </div>
    }
}

fn guidelines_step() -> Html {
    html! {
        <section class="wizard-step" data-testid="submit-step-1">
            <h2>{ t("submit.step1.guidelines.title") }</h2>

            <h3>{ t("submit.step1.types.title") }</h3>
            <ul>
                <li>{ t("submit.step1.types.em") }</li>
                <li>{ t("submit.step1.types.mc") }</li>
            </ul>

            <h3>{ t("submit.step1.levels.title") }</h3>
            <ul>
                <li>{ t("submit.step1.levels.l1") }</li>
                <li>{ t("submit.step1.levels.l2") }</li>
                <li>{ t("submit.step1.levels.l3") }</li>
            </ul>

            <h3>{ t("submit.step1.fields.title") }</h3>
            <p>{ t("submit.step1.fields.text") }</p>
        </section>
    }
}

fn samples_step(on_open_image: &Callback<ModalImage>) -> Html {
    html! {
        <section class="wizard-step" data-testid="submit-step-2">
            <h2>{ t("submit.step2.title") }</h2>
            <p>{ t("submit.step2.intro") }</p>

            { for SAMPLES.iter().map(|sample| {
                let prefix = sample.key_prefix;
                let src = asset_path(sample.image);
                let open = {
                    let cb = on_open_image.clone();
                    let src = src.clone();
                    Callback::from(move |_: MouseEvent| {
                        cb.emit(ModalImage {
                            src: AttrValue::from(src.clone()),
                            alt: AttrValue::from(t(&format!("{prefix}.q1.img_alt"))),
                            caption: AttrValue::from(t(&format!("{prefix}.q1.img_caption"))),
                        });
                    })
                };
                html! {
                    <article class="sample-question">
                        <h3>{ t(&format!("{prefix}.title")) }</h3>
                        <h4>{ t(&format!("{prefix}.q1.title")) }</h4>
                        <p><strong>{ t("submit.form.label.question") }</strong>{ " " }{ t(&format!("{prefix}.q1.question")) }</p>
                        <p><strong>{ t("submit.form.label.required_data") }</strong>{ " " }{ t(&format!("{prefix}.q1.data")) }</p>
                        <p><strong>{ t("submit.form.label.answer") }</strong>{ " " }{ t(&format!("{prefix}.q1.answer")) }</p>
                        <p><strong>{ t("submit.form.label.explanation") }</strong>{ " " }{ t(&format!("{prefix}.q1.explanation")) }</p>
                        <p><strong>{ t("submit.form.label.source_reference") }</strong>{ " " }{ t(&format!("{prefix}.q1.source")) }</p>
                        <figure>
                            <img
                                class="modal-trigger-image"
                                src={src.clone()}
                                alt={t(&format!("{prefix}.q1.img_alt"))}
                                onclick={open}
                            />
                            <figcaption>{ t(&format!("{prefix}.q1.img_caption")) }</figcaption>
                        </figure>
                    </article>
                }
            }) }
        </section>
    }
}

fn field_error(wizard: &WizardState, field: FormField) -> Html {
    match wizard.errors.get(&field) {
        Some(key) => html! { <p class="field-error" role="alert">{ t(key) }</p> },
        None => Html::default(),
    }
}

fn form_step(
    wizard: &UseStateHandle<WizardState>,
    on_field: &dyn Fn(FormField) -> Callback<Event>,
    on_submit: &Callback<MouseEvent>,
) -> Html {
    let submitting = wizard.status == SubmitStatus::Submitting;

    html! {
        <section class="wizard-step" data-testid="submit-step-3">
            <form class="submission-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                <div class="form-field">
                    <label for={field_id(FormField::Difficulty)}>{ t("submit.form.label.difficulty") }</label>
                    <select
                        id={field_id(FormField::Difficulty)}
                        value={wizard.form.difficulty.clone()}
                        onchange={on_field(FormField::Difficulty)}
                    >
                        <option value="" selected={wizard.form.difficulty.is_empty()}>{ t("submit.form.option.select") }</option>
                        <option value="1" selected={wizard.form.difficulty == "1"}>{ t("submit.form.option.difficulty1") }</option>
                        <option value="2" selected={wizard.form.difficulty == "2"}>{ t("submit.form.option.difficulty2") }</option>
                        <option value="3" selected={wizard.form.difficulty == "3"}>{ t("submit.form.option.difficulty3") }</option>
                    </select>
                    { field_error(wizard, FormField::Difficulty) }
                </div>

                <div class="form-field">
                    <label for={field_id(FormField::AnswerType)}>{ t("submit.form.label.answer_type") }</label>
                    <select
                        id={field_id(FormField::AnswerType)}
                        value={wizard.form.answer_type.clone()}
                        onchange={on_field(FormField::AnswerType)}
                    >
                        <option value="" selected={wizard.form.answer_type.is_empty()}>{ t("submit.form.option.select") }</option>
                        <option value="Exact Match" selected={wizard.form.answer_type == "Exact Match"}>{ t("submit.form.option.exact_match") }</option>
                        <option value="Multiple Choice" selected={wizard.form.answer_type == "Multiple Choice"}>{ t("submit.form.option.multiple_choice") }</option>
                    </select>
                    { field_error(wizard, FormField::AnswerType) }
                </div>

                { for TEXTAREA_FIELDS.iter().map(|(field, label_key)| html! {
                    <div class="form-field">
                        <label for={field_id(*field)}>{ t(label_key) }</label>
                        <textarea
                            id={field_id(*field)}
                            value={wizard.form.value(*field)}
                            onchange={on_field(*field)}
                        />
                        { field_error(wizard, *field) }
                    </div>
                }) }

                { for INPUT_FIELDS.iter().map(|(field, label_key)| html! {
                    <div class="form-field">
                        <label for={field_id(*field)}>{ t(label_key) }</label>
                        <input
                            type="text"
                            id={field_id(*field)}
                            value={wizard.form.value(*field)}
                            onchange={on_field(*field)}
                        />
                        { field_error(wizard, *field) }
                    </div>
                }) }

                <button
                    type="button"
                    class="btn btn-primary"
                    disabled={submitting}
                    onclick={on_submit.clone()}
                >
                    { if submitting { t("submit.buttons.submitting") } else { t("submit.buttons.submit") } }
                </button>

                {
                    match &wizard.status {
                        SubmitStatus::Success => html! {
                            <p class="submit-outcome success" role="status">{ t("submit.status.success") }</p>
                        },
                        SubmitStatus::Error(msg) => html! {
                            <p class="submit-outcome error" role="alert">{ msg.clone() }</p>
                        },
                        _ => Html::default(),
                    }
                }
            </form>
        </section>
    }
}
