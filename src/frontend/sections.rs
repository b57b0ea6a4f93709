use yew::prelude::*;

use super::dom::{anchor_click, current_year, smooth_scroll_to};
use super::hooks::{use_in_view, use_theme};
use crate::content::{
    Skill, ABOUT_PARAGRAPHS, ABOUT_STATS, LEARNING_FOCUS, OWNER_NAME, OWNER_ROLE, PORTRAIT,
    SKILL_COLUMNS,
};
use crate::motion::{Stagger, ABOUT_STAGGER_STEP_MS};
use crate::theme::Surface;
use crate::visibility::{
    reveal_state, ABOUT_THRESHOLD, SKILLS_THRESHOLD, SKILL_BAR_THRESHOLD,
};

const HERO_STAGGER: Stagger = Stagger::new(0, 200);
const HERO_CUE_DELAY_MS: u32 = 1_000;
const SKILL_BAR_DELAY_MS: u32 = 200;
const FOOTER_STAGGER: Stagger = Stagger::new(0, 200);

pub fn reveal(visible: bool) -> Classes {
    classes!("reveal", reveal_state(visible))
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let theme = use_theme();
    let on_cue = Callback::from(|_: MouseEvent| {
        smooth_scroll_to("#about");
    });

    html! {
        <section id="home" class={classes!("hero", theme.pick("text-on-dark", "text-on-light"))}>
            <div class="hero-shade"></div>
            <div class="hero-body">
                <h1 class="hero-title enter-rise" style={HERO_STAGGER.animation_style(0)}>
                    <span>{"Hi, I'm "}</span>
                    <span class="gradient-text">{OWNER_NAME}</span>
                </h1>
                <h2 class="hero-subtitle enter-rise" style={HERO_STAGGER.animation_style(1)}>
                    {"Aspiring "}<strong>{"AI/ML Engineer"}</strong>{" with a passion for innovation"}
                </h2>
                <div class="hero-actions enter-rise" style={HERO_STAGGER.animation_style(2)}>
                    <a
                        href="#projects"
                        class="button button-primary"
                        onclick={anchor_click("#projects", Callback::noop())}
                    >
                        {"View My Work"}
                    </a>
                    <a
                        href="#contact"
                        class={classes!("button", theme.pick("button-ghost-dark", "button-ghost-light"))}
                        onclick={anchor_click("#contact", Callback::noop())}
                    >
                        {"Contact Me"}
                    </a>
                </div>
            </div>
            <button
                type="button"
                class="scroll-cue enter-fade cursor-pointer"
                style={format!("animation-delay: {HERO_CUE_DELAY_MS}ms;")}
                aria-label="Scroll to about section"
                onclick={on_cue}
            >
                <span class="scroll-cue-icon" aria-hidden="true">{"⌄"}</span>
            </button>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let theme = use_theme();
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), ABOUT_THRESHOLD);
    let stagger = Stagger::new(0, ABOUT_STAGGER_STEP_MS);

    html! {
        <section id="about" ref={node} class={classes!("section", "section-centered", theme.section_surface(Surface::Base))}>
            <div class="container two-column">
                <div class={reveal(visible)} style={stagger.style(0)}>
                    <div class="portrait">
                        <div class="portrait-gradient"></div>
                        <img src={PORTRAIT} alt={OWNER_NAME} class="portrait-image" />
                        <div class="portrait-shade"></div>
                    </div>
                    <div class="portrait-ring portrait-ring-large" aria-hidden="true"></div>
                    <div class="portrait-ring portrait-ring-small" aria-hidden="true"></div>
                </div>

                <div>
                    <div class={reveal(visible)} style={stagger.style(1)}>
                        <h2 class="eyebrow">{"About Me"}</h2>
                        <h3 class="section-title">{OWNER_ROLE}</h3>
                        <div class={classes!("rule", theme.pick("rule-dark", "rule-light"))}></div>
                    </div>
                    { for ABOUT_PARAGRAPHS.iter().enumerate().map(|(index, paragraph)| html! {
                        <p class={classes!("lead", reveal(visible))} style={stagger.style(index + 2)}>
                            {*paragraph}
                        </p>
                    }) }
                    <div class={classes!("stat-row", reveal(visible))} style={stagger.style(ABOUT_PARAGRAPHS.len() + 2)}>
                        { for ABOUT_STATS.iter().map(|stat| html! {
                            <div class={classes!("stat-card", theme.card())}>
                                <p class={classes!("stat-value", stat.accent)}>{stat.value}</p>
                                <p class="stat-label">{stat.label}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillBarProps {
    skill: Skill,
}

#[function_component(SkillBar)]
fn skill_bar(props: &SkillBarProps) -> Html {
    let theme = use_theme();
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), SKILL_BAR_THRESHOLD);
    let skill = props.skill;
    let fill_style = format!(
        "width: {}%; transition-delay: {SKILL_BAR_DELAY_MS}ms;",
        skill.width_percent(visible)
    );

    html! {
        <div ref={node} class="skill">
            <div class="skill-header">
                <h4 class="skill-name">{skill.name}</h4>
                <span class="skill-percent">{format!("{}%", skill.percentage)}</span>
            </div>
            <div class={classes!("skill-track", theme.track())}>
                <div class={classes!("skill-fill", skill.color)} style={fill_style}></div>
            </div>
        </div>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    let theme = use_theme();
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), SKILLS_THRESHOLD);
    let stagger = Stagger::default();

    let header = [
        html! { <h2 class="eyebrow">{"My Expertise"}</h2> },
        html! { <h3 class="section-title">{"Skills & Proficiency"}</h3> },
        html! { <div class="rule rule-gradient rule-centered"></div> },
    ];

    html! {
        <section id="skills" ref={node} class={classes!("section", theme.section_surface(Surface::Raised))}>
            <div class="container">
                <div class="section-header">
                    { for header.into_iter().enumerate().map(|(index, child)| html! {
                        <div class={reveal(visible)} style={stagger.style(index)}>{child}</div>
                    }) }
                </div>

                <div class="two-column">
                    { for SKILL_COLUMNS.iter().enumerate().map(|(column_index, column)| {
                        let last_column = column_index + 1 == SKILL_COLUMNS.len();
                        html! {
                            <div>
                                { for column.iter().enumerate().map(|(group_index, group)| html! {
                                    <div class="skill-group">
                                        <h4 class={classes!("group-title", reveal(visible))} style={stagger.style(group_index * 2)}>
                                            <span class={classes!("group-badge", group.badge)} aria-hidden="true">{"◆"}</span>
                                            {group.title}
                                        </h4>
                                        <div class={classes!("skill-list", reveal(visible))} style={stagger.style(group_index * 2 + 1)}>
                                            { for group.skills.iter().map(|skill| html! {
                                                <SkillBar key={skill.name} skill={*skill} />
                                            }) }
                                        </div>
                                    </div>
                                }) }
                                if last_column {
                                    <div class={classes!("focus-card", theme.pick("focus-card-dark", "focus-card-light"), reveal(visible))} style={stagger.style(column.len() * 2)}>
                                        <h4 class="focus-title">{"Current Learning Focus"}</h4>
                                        <div class="tag-row">
                                            { for LEARNING_FOCUS.iter().map(|item| html! {
                                                <span class="tag tag-gradient">{*item}</span>
                                            }) }
                                        </div>
                                    </div>
                                }
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let theme = use_theme();
    let year = use_memo((), |_| current_year());

    html! {
        <footer class={classes!("site-footer", theme.pick("footer-dark", "footer-light"))}>
            <div class="container footer-inner">
                <div class="footer-brand enter-rise" style={FOOTER_STAGGER.animation_style(0)}>
                    <a href="#home" class="brand gradient-text" onclick={anchor_click("#home", Callback::noop())}>
                        {OWNER_NAME}
                    </a>
                    <p class={theme.muted_text()}>{OWNER_ROLE}</p>
                </div>
                <div class="footer-meta enter-rise" style={FOOTER_STAGGER.animation_style(1)}>
                    <p class="made-with">
                        {"Made with"}<span class="heart" aria-label="love">{"♥"}</span>{"and Rust"}
                    </p>
                    <p class={theme.muted_text()}>
                        {format!("© {} {OWNER_NAME}. All rights reserved.", *year)}
                    </p>
                </div>
            </div>
        </footer>
    }
}
