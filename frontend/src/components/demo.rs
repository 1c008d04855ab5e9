use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{reveal_classes, SiteProps};
use crate::api;
use crate::state::demo::{DemoIntent, DemoResult, DemoStep, Field, Scenario};
use crate::state::nav::Section;
use crate::state::Intent;

fn result_modifier(result: DemoResult) -> &'static str {
    match result {
        DemoResult::Success => "demo__result--success",
        DemoResult::Error => "demo__result--error",
        DemoResult::Placeholder => "demo__result--placeholder",
    }
}

fn result_copy(result: DemoResult) -> (&'static str, &'static str) {
    match result {
        DemoResult::Success => (
            "Your phone should ring any second.",
            "Pick up and talk to the agent like you would to a real receptionist.",
        ),
        DemoResult::Error => (
            "That didn't go through.",
            "Something went wrong placing the call. Check your number and try again.",
        ),
        DemoResult::Placeholder => (
            "Live demo calls are almost here.",
            "The calling line isn't connected yet, but your details look good. Book a time via the contact section and I'll call you myself.",
        ),
    }
}

#[function_component(DemoSection)]
pub fn demo_section(props: &SiteProps) -> Html {
    let site = props.site.clone();
    let demo = &site.demo;

    // Send whatever request the reducer queued.
    {
        let site = site.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(payload) = site.demo.in_flight.clone() {
                    spawn_local(async move {
                        let outcome = api::request_demo_call(&payload).await;
                        gloo_console::log!(format!("Demo call finished: {:?}", outcome));
                        site.dispatch(Intent::Demo(DemoIntent::SubmitFinished(outcome)));
                    });
                }
                || ()
            },
            demo.request_seq,
        );
    }

    let on = |intent: DemoIntent| {
        let site = site.clone();
        Callback::from(move |_: MouseEvent| site.dispatch(Intent::Demo(intent.clone())))
    };

    let onsubmit = {
        let site = site.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            site.dispatch(Intent::Demo(DemoIntent::Submit));
        })
    };

    let step_indicator = |step: DemoStep, label: &'static str| {
        html! {
            <li
                class={classes!("demo__step", (demo.step == step).then_some("demo__step--active"))}
                data-step={step.number().to_string()}
            >
                <span class="demo__step-number">{step.number().to_string()}</span>
                {label}
            </li>
        }
    };

    let scenario_pill = |scenario: Scenario| {
        let onchange = {
            let site = site.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                if let Some(scenario) = Scenario::from_value(&input.value()) {
                    site.dispatch(Intent::Demo(DemoIntent::SelectScenario(scenario)));
                }
            })
        };
        html! {
            <label class="demo__pill">
                <input
                    type="radio"
                    name="scenario"
                    class="demo__pill-input"
                    value={scenario.value()}
                    checked={demo.scenario == scenario}
                    {onchange}
                />
                <span class="demo__pill-label">{scenario.label()}</span>
                <span class="demo__pill-blurb">{scenario.blurb()}</span>
            </label>
        }
    };

    let input = |field: Field, label: &'static str, kind: &'static str, placeholder: &'static str| {
        let oninput = {
            let site = site.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                site.dispatch(Intent::Demo(DemoIntent::Edit(field, input.value())));
            })
        };
        let error = demo.errors.get(field);
        html! {
            <div class="demo__field">
                <label class="demo__label" for={field.input_id()}>{label}</label>
                <input
                    id={field.input_id()}
                    type={kind}
                    class={classes!("demo__input", error.map(|_| "demo__input--invalid"))}
                    placeholder={placeholder}
                    value={demo.fields.get(field).to_string()}
                    {oninput}
                />
                <p class="demo__error" data-for={field.input_id()} aria-live="polite">
                    {error.unwrap_or_default()}
                </p>
            </div>
        }
    };

    let result_panel = |result: DemoResult| {
        if !demo.result_visible(result) {
            return html! {};
        }
        let (title, body) = result_copy(result);
        html! {
            <div class={classes!("demo__result", result_modifier(result))} role="status">
                <h3 class="demo__result-title">{title}</h3>
                <p>{body}</p>
                <button type="button" id="demoRetry" class="btn btn--ghost" onclick={on(DemoIntent::Retry)}>
                    {"Back to the form"}
                </button>
            </div>
        }
    };

    let scenario_step = html! {
        <div class="demo__panel demo__panel--scenario">
            <p class="demo__prompt">{"Which call should the agent handle?"}</p>
            <div class="demo__pills" role="radiogroup">
                { for Scenario::ALL.into_iter().map(scenario_pill) }
            </div>
            <button type="button" id="demoNext" class="btn btn--primary" onclick={on(DemoIntent::Next)}>
                {"Next"}
            </button>
        </div>
    };

    let contact_step = html! {
        <div class="demo__panel demo__panel--contact">
            if demo.form_visible() {
                <form id="demoForm" class="demo__form" novalidate={true} {onsubmit}>
                    <p class="demo__selected">
                        {"Scenario: "}
                        <span class="demo__selected-scenario">{demo.scenario.label()}</span>
                    </p>
                    {input(Field::Name, "Name", "text", "Jo Lee")}
                    {input(Field::Phone, "Phone", "tel", "+1 555 123 4567")}
                    {input(Field::Email, "Email", "email", "jo@company.com")}
                    <div class="demo__actions">
                        <button type="button" id="demoBack" class="btn btn--ghost" onclick={on(DemoIntent::Back)}>
                            {"Back"}
                        </button>
                        <button
                            type="submit"
                            id="demoSubmit"
                            class={classes!("btn", "btn--primary", demo.is_loading().then_some("is-loading"))}
                            disabled={!demo.submit_enabled()}
                        >
                            { if demo.is_loading() { "Calling..." } else { "Call me now" } }
                        </button>
                    </div>
                </form>
            }
            {result_panel(DemoResult::Success)}
            {result_panel(DemoResult::Error)}
            {result_panel(DemoResult::Placeholder)}
        </div>
    };

    html! {
        <section id={Section::Demo.id()} class="section section--demo">
            <div class="section__inner">
                <h2 class={reveal_classes(&site, "demo-title")} data-reveal-key="demo-title">
                    {"Hear it for yourself"}
                </h2>
                <p class={classes!("section__lead", reveal_classes(&site, "demo-lead"))} data-reveal-key="demo-lead">
                    {"Pick a scenario, leave your number, and an agent calls you within a minute."}
                </p>
                <div
                    class={classes!("demo__grid", reveal_classes(&site, "demo-grid"))}
                    data-reveal-key="demo-grid"
                    data-active-step={demo.step.number().to_string()}
                >
                    <ol class="demo__steps">
                        {step_indicator(DemoStep::Scenario, "Choose a scenario")}
                        {step_indicator(DemoStep::Contact, "Your details")}
                    </ol>
                    {
                        match demo.step {
                            DemoStep::Scenario => scenario_step,
                            DemoStep::Contact => contact_step,
                        }
                    }
                </div>
            </div>
        </section>
    }
}
