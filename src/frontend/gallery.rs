use yew::prelude::*;

use super::hooks::{use_in_view, use_theme};
use super::sections::reveal;
use crate::content::PROJECTS;
use crate::motion::Stagger;
use crate::projects::{filter_projects, Project, ProjectFilter};
use crate::theme::Surface;
use crate::visibility::PROJECTS_THRESHOLD;

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    hovered: bool,
    on_hover: Callback<Option<u32>>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let theme = use_theme();
    let project = &props.project;

    let onmouseenter = {
        let on_hover = props.on_hover.clone();
        let id = project.id;
        Callback::from(move |_: MouseEvent| on_hover.emit(Some(id)))
    };
    let onmouseleave = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(None))
    };

    html! {
        <article class={classes!("project-card", theme.card())} {onmouseenter} {onmouseleave}>
            <div class="project-media">
                <img src={project.image} alt={project.title} class="project-image" loading="lazy" />
                <div class={classes!("project-overlay", props.hovered.then_some("is-visible"))}>
                    <a
                        class="overlay-link"
                        href={project.github_url}
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label={format!("{} source code", project.title)}
                    >
                        {"</>"}
                    </a>
                    <a
                        class="overlay-link"
                        href={project.live_url}
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label={format!("{} live demo", project.title)}
                    >
                        {"↗"}
                    </a>
                </div>
            </div>
            <div class="project-body">
                <h4 class="project-title">{project.title}</h4>
                <p class={classes!("project-description", theme.muted_text())}>{project.description}</p>
                <div class="tag-row">
                    { for project.tags.iter().map(|tag| html! {
                        <span class={classes!("tag", theme.chip())}>{*tag}</span>
                    }) }
                </div>
            </div>
        </article>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let theme = use_theme();
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), PROJECTS_THRESHOLD);
    let active_filter = use_state_eq(ProjectFilter::default);
    let hovered = use_state_eq(|| None::<u32>);
    let stagger = Stagger::default();

    let on_hover = {
        let hovered = hovered.clone();
        Callback::from(move |id: Option<u32>| hovered.set(id))
    };

    let visible_projects = filter_projects(PROJECTS, *active_filter);

    html! {
        <section id="projects" ref={node} class={classes!("section", theme.section_surface(Surface::Base))}>
            <div class="container">
                <div class="section-header">
                    <h2 class={classes!("eyebrow", "gradient-text", reveal(visible))} style={stagger.style(0)}>{"My Work"}</h2>
                    <h3 class={classes!("section-title", "gradient-text", reveal(visible))} style={stagger.style(1)}>{"Recent Projects"}</h3>
                    <div class={classes!("rule", "rule-gradient", "rule-centered", reveal(visible))} style={stagger.style(2)}></div>
                    <p class={classes!("lead", reveal(visible))} style={stagger.style(3)}>
                        {"Here's a selection of my recent projects showcasing my skills in AI/ML, web development, and automation."}
                    </p>
                </div>

                <div class="filter-row" role="group" aria-label="Filter projects">
                    { for ProjectFilter::ALL.iter().copied().enumerate().map(|(index, filter)| {
                        let selected = *active_filter == filter;
                        let onclick = {
                            let active_filter = active_filter.clone();
                            Callback::from(move |_: MouseEvent| {
                                log::debug!("projects.filter_changed filter={}", filter.as_str());
                                active_filter.set(filter);
                            })
                        };
                        html! {
                            <button
                                key={filter.as_str()}
                                type="button"
                                class={classes!(
                                    "filter-button",
                                    if selected { "filter-active" } else { theme.pick("filter-idle-dark", "filter-idle-light") },
                                    reveal(visible),
                                )}
                                style={stagger.style(index)}
                                aria-pressed={selected.to_string()}
                                {onclick}
                            >
                                {filter.label()}
                            </button>
                        }
                    }) }
                </div>

                <div key={active_filter.as_str()} class="project-grid enter-rise">
                    { for visible_projects.into_iter().map(|project| html! {
                        <ProjectCard
                            key={project.id}
                            project={project.clone()}
                            hovered={*hovered == Some(project.id)}
                            on_hover={on_hover.clone()}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}
