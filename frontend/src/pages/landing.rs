use yew::prelude::*;

use crate::components::demo::DemoSection;
use crate::components::hero::Hero;
use crate::components::{reveal_classes, SiteProps};
use crate::state::nav::Section;
use crate::state::SiteState;

const SERVICES: [(&str, &str); 3] = [
    (
        "Inbound reception",
        "Agents that pick up on the first ring, answer FAQs from your own docs and hand off to a human when it matters.",
    ),
    (
        "Outbound follow-up",
        "Leads called back within a minute of filling in a form, qualified against your criteria and tagged in your CRM.",
    ),
    (
        "Scheduling",
        "Calendar-aware booking, rescheduling and reminders, without the phone tag.",
    ),
];

const PROCESS: [(&str, &str); 4] = [
    ("Discovery call", "We map the calls you get today and the ones you're missing."),
    ("Script & voice", "I write the conversation flows and pick a voice that fits your brand."),
    ("Integration", "Calendars, CRMs and phone numbers wired in, tested with real calls."),
    ("Launch & tune", "Weekly transcript reviews for the first month to sharpen every answer."),
];

fn card_list(site: &SiteState, prefix: &str, items: &[(&str, &str)], numbered: bool) -> Html {
    html! {
        <ul class={format!("{}__list", prefix)}>
            { for items.iter().enumerate().map(|(i, (title, body))| {
                let key = format!("{}-{}", prefix, i);
                html! {
                    <li class={classes!("card", reveal_classes(site, &key))} data-reveal-key={key.clone()}>
                        if numbered {
                            <span class="card__index">{format!("{:02}", i + 1)}</span>
                        }
                        <h3 class="card__title">{*title}</h3>
                        <p class="card__body">{*body}</p>
                    </li>
                }
            }) }
        </ul>
    }
}

#[function_component(Landing)]
pub fn landing(props: &SiteProps) -> Html {
    let site = &props.site;

    html! {
        <main class="landing-page">
            <Hero />

            <section id={Section::Services.id()} class="section section--services">
                <div class="section__inner">
                    <h2 class={reveal_classes(site, "services-title")} data-reveal-key="services-title">
                        {"What I build"}
                    </h2>
                    {card_list(site, "services", &SERVICES, false)}
                </div>
            </section>

            <section id={Section::Process.id()} class="section section--process">
                <div class="section__inner">
                    <h2 class={reveal_classes(site, "process-title")} data-reveal-key="process-title">
                        {"How a project runs"}
                    </h2>
                    {card_list(site, "process", &PROCESS, true)}
                </div>
            </section>

            <DemoSection site={site.clone()} />

            <section id={Section::Contact.id()} class="section section--contact">
                <div class="section__inner">
                    <h2 class={reveal_classes(site, "contact-title")} data-reveal-key="contact-title">
                        {"Let's talk"}
                    </h2>
                    <p class={classes!("section__lead", reveal_classes(site, "contact-lead"))} data-reveal-key="contact-lead">
                        {"Tell me about the calls you want off your plate. I reply within one business day."}
                    </p>
                    <a
                        href="mailto:hello@callwright.dev"
                        class={classes!("btn", "btn--primary", reveal_classes(site, "contact-cta"))}
                        data-reveal-key="contact-cta"
                    >
                        {"hello@callwright.dev"}
                    </a>
                </div>
            </section>

            <footer class="footer">
                <p>{"Callwright. Voice agents for small teams."}</p>
            </footer>
        </main>
    }
}
