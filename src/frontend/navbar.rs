use gloo_events::EventListener;
use std::rc::Rc;
use web_sys::window;
use yew::prelude::*;

use super::dom::{anchor_click, scroll_y};
use super::hooks::use_theme;
use crate::content::{BRAND, NAV_ITEMS};
use crate::motion::Stagger;
use crate::nav::{NavAction, NavState};

const NAV_ITEM_STAGGER: Stagger = Stagger::new(200, 100);

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_toggle_theme: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct ThemeButtonProps {
    on_toggle_theme: Callback<()>,
    #[prop_or_default]
    class: Classes,
}

#[function_component(ThemeButton)]
fn theme_button(props: &ThemeButtonProps) -> Html {
    let theme = use_theme();
    let onclick = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_| on_toggle_theme.emit(()))
    };

    html! {
        <button
            class={classes!("theme-toggle", props.class.clone())}
            type="button"
            aria-label={theme.toggle_label()}
            aria-pressed={theme.is_dark().to_string()}
            {onclick}
        >
            <span aria-hidden="true" class={theme.pick("icon-sun", "icon-moon")}>{theme.icon()}</span>
        </button>
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let theme = use_theme();
    let nav = use_reducer_eq(|| NavState::default().with_scroll(scroll_y()));

    {
        let dispatcher = nav.dispatcher();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "scroll", move |_| {
                    dispatcher.dispatch(NavAction::Scrolled(scroll_y()));
                })
            });
            move || drop(listener)
        });
    }

    let close_menu = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(NavAction::CloseMenu))
    };

    let toggle_menu = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::ToggleMenu))
    };

    let shell_class = if nav.scrolled {
        theme.pick("nav-solid-dark", "nav-solid-light")
    } else {
        "nav-clear"
    };

    html! {
        <nav class={classes!("site-nav", "enter-drop", shell_class)}>
            <div class="nav-inner">
                <a
                    href="#home"
                    class="brand gradient-text"
                    onclick={anchor_click("#home", close_menu.clone())}
                >
                    {BRAND}
                </a>

                <ul class="nav-desktop">
                    { for NAV_ITEMS.iter().enumerate().map(|(index, item)| html! {
                        <li key={item.href} class="enter-drop" style={NAV_ITEM_STAGGER.animation_style(index)}>
                            <a
                                href={item.href}
                                class={classes!("nav-link", theme.nav_link())}
                                onclick={anchor_click(item.href, close_menu.clone())}
                            >
                                {item.name}
                                <span class="nav-underline"></span>
                            </a>
                        </li>
                    }) }
                    <li class="enter-drop" style={NAV_ITEM_STAGGER.animation_style(NAV_ITEMS.len())}>
                        <ThemeButton on_toggle_theme={props.on_toggle_theme.clone()} />
                    </li>
                </ul>

                <div class="nav-mobile-controls">
                    <ThemeButton on_toggle_theme={props.on_toggle_theme.clone()} class={classes!("theme-toggle-mobile")} />
                    <button
                        class={classes!("menu-toggle", theme.nav_link())}
                        type="button"
                        aria-label={if nav.mobile_menu_open { "Close mobile menu" } else { "Open mobile menu" }}
                        aria-expanded={nav.mobile_menu_open.to_string()}
                        onclick={toggle_menu}
                    >
                        <span aria-hidden="true">{if nav.mobile_menu_open { "✕" } else { "☰" }}</span>
                    </button>
                </div>
            </div>

            <div
                class={classes!(
                    "nav-mobile-menu",
                    theme.pick("nav-menu-dark", "nav-menu-light"),
                    nav.mobile_menu_open.then_some("is-open"),
                )}
                aria-hidden={(!nav.mobile_menu_open).to_string()}
            >
                <ul>
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <li key={item.href}>
                            <a
                                href={item.href}
                                class={classes!("nav-mobile-link", theme.nav_link())}
                                onclick={anchor_click(item.href, close_menu.clone())}
                            >
                                {item.name}
                            </a>
                        </li>
                    }) }
                </ul>
            </div>
        </nav>
    }
}
