mod contact_form;
mod dom;
mod follower;
mod gallery;
mod hooks;
mod navbar;
mod sections;

use thiserror::Error;
use web_sys::Element;
use yew::prelude::*;

use crate::logging::{self, LEVEL_ATTRIBUTE};
use crate::theme::Theme;
use contact_form::Contact;
use follower::CursorFollower;
use gallery::Projects;
use navbar::Navbar;
use sections::{About, Footer, Hero, Skills};

const MOUNT_ID: &str = "app";

#[derive(Debug, Error)]
enum MountError {
    #[error("missing #{0} mount point")]
    MissingRoot(&'static str),
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state_eq(Theme::default);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            dom::apply_theme(current);
            || ()
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            log::info!("theme.toggled theme={}", next.as_str());
            dom::apply_theme_with_transition(next);
            theme.set(next);
        })
    };

    html! {
        <ContextProvider<Theme> context={*theme}>
            <div class={classes!("app-shell", theme.is_dark().then_some("dark"))}>
                <a class="skip-link" href="#about">{"Skip to content"}</a>
                <CursorFollower />
                <Navbar on_toggle_theme={on_toggle} />
                <main>
                    <Hero />
                    <About />
                    <Skills />
                    <Projects />
                    <Contact />
                </main>
                <Footer />
            </div>
        </ContextProvider<Theme>>
    }
}

fn mount_point() -> Result<Element, MountError> {
    dom::document()
        .and_then(|d| d.get_element_by_id(MOUNT_ID))
        .ok_or(MountError::MissingRoot(MOUNT_ID))
}

pub fn run() {
    let level = logging::parse_level(dom::root_attribute(LEVEL_ATTRIBUTE).as_deref());
    if let Err(error) = logging::init(level) {
        web_sys::console::warn_1(&error.to_string().into());
    }

    match mount_point() {
        Ok(root) => {
            log::info!("app.mounted level={level}");
            yew::Renderer::<App>::with_root(root).render();
        }
        Err(error) => log::error!("app.mount_failed error={error}"),
    }
}
