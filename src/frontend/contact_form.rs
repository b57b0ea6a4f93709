use gloo_timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::hooks::{use_in_view, use_theme};
use super::sections::reveal;
use crate::contact::{ContactAction, ContactForm, Field, SubmitStatus, SUBMIT_DELAY_MS};
use crate::content::{CONTACT_ITEMS, SOCIAL_LINKS};
use crate::motion::Stagger;
use crate::theme::Surface;
use crate::visibility::CONTACT_THRESHOLD;

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: ContactAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.update(action);
        Rc::new(next)
    }
}

/// Reads `(name, value)` from the input or textarea that fired `event`.
fn field_edit(event: &InputEvent) -> Option<(Field, String)> {
    let target = event.target()?;
    let (name, value) = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        (input.name(), input.value())
    } else {
        let area = target.dyn_ref::<HtmlTextAreaElement>()?;
        (area.name(), area.value())
    };
    Some((Field::from_name(&name)?, value))
}

#[derive(Properties, PartialEq)]
struct MessageFormProps {
    visible: bool,
}

#[function_component(MessageForm)]
fn message_form(props: &MessageFormProps) -> Html {
    let theme = use_theme();
    let form = use_reducer_eq(ContactForm::default);
    let stagger = Stagger::default();
    let visible = props.visible;

    // The pending delivery lives exactly as long as its ticket and this
    // component; dropping the timeout cancels it.
    {
        let dispatcher = form.dispatcher();
        use_effect_with(form.pending(), move |pending| {
            let timeout = (*pending).map(|ticket| {
                Timeout::new(SUBMIT_DELAY_MS, move || {
                    dispatcher.dispatch(ContactAction::Complete(ticket));
                })
            });
            move || drop(timeout)
        });
    }

    let oninput = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            if let Some((field, value)) = field_edit(&event) {
                dispatcher.dispatch(ContactAction::Edit(field, value));
            }
        })
    };

    let onsubmit = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            dispatcher.dispatch(ContactAction::Submit);
        })
    };

    let field_class = classes!("field", theme.field());
    let submitting = form.status == SubmitStatus::Submitting;
    let submitted = form.status == SubmitStatus::Submitted;

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <div class={reveal(visible)} style={stagger.style(1)}>
                <label for="name" class="field-label">{"Your Name"}</label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    class={field_class.clone()}
                    placeholder="John Doe"
                    value={form.draft.name.clone()}
                    oninput={oninput.clone()}
                />
            </div>
            <div class={reveal(visible)} style={stagger.style(2)}>
                <label for="email" class="field-label">{"Your Email"}</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    class={field_class.clone()}
                    placeholder="john@example.com"
                    value={form.draft.email.clone()}
                    oninput={oninput.clone()}
                />
            </div>
            <div class={reveal(visible)} style={stagger.style(3)}>
                <label for="message" class="field-label">{"Your Message"}</label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    class={field_class}
                    placeholder="Hello, I'd like to talk about..."
                    value={form.draft.message.clone()}
                    oninput={oninput}
                />
            </div>

            if let Some(error) = form.error {
                <div class="form-error enter-fade" role="alert">{error.to_string()}</div>
            }

            <div class={classes!("form-actions", reveal(visible))} style={stagger.style(4)}>
                <button
                    type="submit"
                    class={classes!(
                        "button",
                        if submitted { "button-success" } else { "button-primary" },
                        submitting.then_some("is-busy"),
                    )}
                    disabled={form.submit_disabled()}
                >
                    <span class={classes!("button-icon", submitting.then_some("pulse"))} aria-hidden="true">
                        {if submitted { "✓" } else { "➤" }}
                    </span>
                    <span>{form.button_label()}</span>
                </button>
            </div>
        </form>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let theme = use_theme();
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), CONTACT_THRESHOLD);
    let stagger = Stagger::default();

    html! {
        <section id="contact" ref={node} class={classes!("section", "section-centered", theme.section_surface(Surface::Raised))}>
            <div class="container">
                <div class="section-header">
                    <h2 class={classes!("eyebrow", reveal(visible))} style={stagger.style(0)}>{"Get In Touch"}</h2>
                    <h3 class={classes!("section-title", reveal(visible))} style={stagger.style(1)}>{"Contact Me"}</h3>
                    <div class={classes!("rule", "rule-gradient", "rule-centered", reveal(visible))} style={stagger.style(2)}></div>
                    <p class={classes!("lead", reveal(visible))} style={stagger.style(3)}>
                        {"Have a project in mind or want to discuss potential collaborations? Feel free to reach out through the contact form or using the information below."}
                    </p>
                </div>

                <div class="two-column">
                    <div>
                        <h4 class={classes!("column-title", reveal(visible))} style={stagger.style(0)}>{"Send Me a Message"}</h4>
                        <MessageForm {visible} />
                    </div>

                    <div>
                        <h4 class={classes!("column-title", reveal(visible))} style={stagger.style(0)}>{"Contact Information"}</h4>
                        <div class="contact-list">
                            { for CONTACT_ITEMS.iter().enumerate().map(|(index, item)| html! {
                                <a
                                    href={item.href}
                                    class={classes!("contact-item", theme.pick("contact-item-dark", "contact-item-light"), reveal(visible))}
                                    style={stagger.style(index + 1)}
                                >
                                    <span class="contact-icon" aria-hidden="true">{item.icon}</span>
                                    <span>
                                        <span class="contact-title">{item.title}</span>
                                        <span class={classes!("contact-value", theme.muted_text())}>{item.value}</span>
                                    </span>
                                </a>
                            }) }
                        </div>

                        <div class={classes!("social", reveal(visible))} style={stagger.style(CONTACT_ITEMS.len() + 1)}>
                            <h4 class="social-title">{"Connect on Social Media"}</h4>
                            <div class="social-row">
                                { for SOCIAL_LINKS.iter().map(|link| html! {
                                    <a
                                        href={link.href}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class={classes!("social-link", theme.pick("social-link-dark", "social-link-light"))}
                                        aria-label={link.label}
                                    >
                                        {link.short}
                                    </a>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
