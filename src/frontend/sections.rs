//! The six content sections. Each one renders straight from the content
//! store and owns a single one-time visibility latch that triggers its
//! staggered entrance.

use gloo::events::EventListener;
use gloo::render::request_animation_frame;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::content::{
    AchievementKind, ACHIEVEMENTS, EDUCATION, PERSON, PROJECTS, SKILL_GROUPS, STATS, SUMMARY,
};
use crate::motion::{Stagger, HERO_STAGGER, SECTION_STAGGER};

/// How far the hero content drifts down over one viewport of scroll.
const HERO_PARALLAX_SHIFT: f64 = 200.0;

/// One-time visibility latch: true once the node has entered the viewport,
/// never reset afterwards. The observer disconnects itself on first fire.
/// Under reduced motion the latch starts set so content shows immediately.
#[hook]
fn use_reveal(node: &NodeRef, margin: &'static str) -> bool {
    let shown = use_state_eq(super::prefers_reduced_motion);

    {
        let shown = shown.clone();
        let node = node.clone();
        use_effect_with((), move |_| {
            let mut held = None;

            if !*shown {
                if let Some(element) = node.cast::<Element>() {
                    let latch = shown.clone();
                    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                    continue;
                                };
                                if entry.is_intersecting() {
                                    latch.set(true);
                                    observer.disconnect();
                                    break;
                                }
                            }
                        },
                    );

                    let options = IntersectionObserverInit::new();
                    options.set_root_margin(margin);
                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        on_intersect.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        observer.observe(&element);
                        held = Some((observer, on_intersect));
                    }
                }
            }

            move || {
                if let Some((observer, _on_intersect)) = held {
                    observer.disconnect();
                }
            }
        });
    }

    *shown
}

#[derive(Properties, PartialEq)]
struct RevealProps {
    shown: bool,
    index: u32,
    #[prop_or(SECTION_STAGGER)]
    stagger: Stagger,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Html,
}

/// A child of a revealed group: hidden-and-shifted until `shown`, then
/// transitioning in after its stagger delay.
#[function_component(Reveal)]
fn reveal(props: &RevealProps) -> Html {
    html! {
        <div
            class={classes!("reveal-item", props.class.clone(), props.shown.then_some("is-shown"))}
            style={props.stagger.style_for(props.index)}
        >
            {props.children.clone()}
        </div>
    }
}

fn section_tag(label: &str) -> Html {
    html! { <span class="section-tag">{label}</span> }
}

// --- Hero ---------------------------------------------------------------

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let content_ref = use_node_ref();
    let section_ref = use_node_ref();
    let shown = use_state_eq(super::prefers_reduced_motion);

    // Entrance plays on mount; the class flip waits one frame so the
    // initial hidden styles actually paint first.
    {
        let shown = shown.clone();
        use_effect_with((), move |_| {
            let frame = request_animation_frame(move |_| shown.set(true));
            move || drop(frame)
        });
    }

    // Scroll-linked parallax: the content block drifts down, shrinks a
    // touch and fades out over the first half of the hero's height.
    {
        let content_ref = content_ref.clone();
        let section_ref = section_ref.clone();
        use_effect_with((), move |_| {
            let mut listener = None;
            if !super::prefers_reduced_motion() {
                if let Some(window) = web_sys::window() {
                    listener = Some(EventListener::new(&window, "scroll", move |_| {
                        let Some(content) = content_ref.cast::<HtmlElement>() else {
                            return;
                        };
                        let height = section_ref
                            .cast::<HtmlElement>()
                            .map(|section| f64::from(section.offset_height()))
                            .filter(|h| *h > 0.0)
                            .unwrap_or(1.0);
                        let progress = (super::scroll_offset() / height).clamp(0.0, 1.0);
                        let half = (progress * 2.0).min(1.0);

                        let style = content.style();
                        let _ = style.set_property(
                            "transform",
                            &format!(
                                "translateY({:.1}px) scale({:.3})",
                                progress * HERO_PARALLAX_SHIFT,
                                1.0 - 0.1 * half
                            ),
                        );
                        let _ = style.set_property("opacity", &format!("{:.3}", 1.0 - half));
                    }));
                }
            }
            move || drop(listener)
        });
    }

    let name_parts: Vec<&str> = PERSON.name.split_whitespace().collect();
    let first_name = name_parts.first().copied().unwrap_or(PERSON.name);
    let last_name = name_parts.get(1).copied().unwrap_or("");

    let highlights = SUMMARY
        .highlights
        .iter()
        .map(|highlight| {
            html! { <span class="hero-chip" data-hoverable="">{*highlight}</span> }
        })
        .collect::<Html>();

    let stats = STATS
        .iter()
        .map(|stat| {
            html! {
                <div class="stat">
                    <div class="stat-value">
                        {stat.value}
                        <span class="stat-suffix">{stat.suffix}</span>
                    </div>
                    <div class="stat-label">{stat.label}</div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section ref={section_ref} class="hero-section">
            <super::scene::AmbientScene />
            <div class="hero-overlay hero-overlay-radial" aria-hidden="true"></div>
            <div class="hero-overlay hero-overlay-fade" aria-hidden="true"></div>

            <div ref={content_ref} class="hero-content">
                <Reveal shown={*shown} index={0} stagger={HERO_STAGGER}>
                    <span class="hero-pretitle">{PERSON.title}</span>
                </Reveal>
                <Reveal shown={*shown} index={1} stagger={HERO_STAGGER}>
                    <h1 class="hero-name">
                        <span class="hero-name-first">{first_name}</span>
                        <span class="hero-name-last">{last_name}</span>
                    </h1>
                </Reveal>
                <Reveal shown={*shown} index={2} stagger={HERO_STAGGER}>
                    <p class="hero-tagline">{SUMMARY.short}</p>
                </Reveal>
                <Reveal shown={*shown} index={3} stagger={HERO_STAGGER} class={classes!("hero-cta-row")}>
                    <a class="cta cta-solid" href="/resume.pdf" download="">{"Download Resume"}</a>
                    <a
                        class="cta cta-outline"
                        href={PERSON.social.linkedin}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"LinkedIn"}
                    </a>
                    <a class="cta cta-ghost" href="#contact">{"Contact"}</a>
                </Reveal>
                <Reveal shown={*shown} index={4} stagger={HERO_STAGGER} class={classes!("hero-chip-row")}>
                    {highlights}
                </Reveal>
                <Reveal shown={*shown} index={5} stagger={HERO_STAGGER} class={classes!("hero-stats")}>
                    {stats}
                </Reveal>
            </div>

            <div class={classes!("scroll-hint", shown.then_some("is-shown"))} aria-hidden="true">
                <span class="scroll-hint-label">{"Scroll"}</span>
                <span class="scroll-hint-line"></span>
            </div>
        </section>
    }
}

// --- About --------------------------------------------------------------

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let section_ref = use_node_ref();
    let shown = use_reveal(&section_ref, "-100px");

    let pillars = SUMMARY
        .highlights
        .iter()
        .map(|pillar| {
            html! {
                <div class="pillar">
                    <span class="pillar-rule"></span>
                    <span>{*pillar}</span>
                </div>
            }
        })
        .collect::<Html>();

    let timeline = EDUCATION
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let last = index == EDUCATION.len() - 1;
            html! {
                <Reveal shown={shown} index={(index + 3) as u32}>
                    <div class={classes!("timeline-entry", last.then_some("is-last"))}>
                        <span class={classes!("timeline-dot", entry.highlight.then_some("is-highlight"))}></span>
                        <div class={classes!("timeline-card", entry.highlight.then_some("is-highlight"))}>
                            <div class="timeline-card-head">
                                <h3>{entry.degree}</h3>
                                <span class="timeline-score">{entry.score}</span>
                            </div>
                            <p class="timeline-field">{entry.field}</p>
                            <p class="timeline-institution">{entry.institution}</p>
                            <span class="timeline-year">{entry.year}</span>
                        </div>
                    </div>
                </Reveal>
            }
        })
        .collect::<Html>();

    html! {
        <section ref={section_ref} id="about" class="content-section about-section">
            <div class="section-accent section-accent-about" aria-hidden="true"></div>
            <div class="section-container about-grid">
                <div>
                    <Reveal shown={shown} index={0}>
                        {section_tag("01 — ABOUT")}
                    </Reveal>
                    <Reveal shown={shown} index={1}>
                        <h2 class="section-headline">
                            {"Crafting Intelligent"}
                            <span class="accent-line">{"Digital Experiences"}</span>
                        </h2>
                    </Reveal>
                    <Reveal shown={shown} index={2}>
                        <p class="section-body">{SUMMARY.full}</p>
                    </Reveal>
                    <Reveal shown={shown} index={3} class={classes!("pillars")}>
                        {pillars}
                    </Reveal>
                </div>
                <div>
                    <Reveal shown={shown} index={2}>
                        {section_tag("EDUCATION")}
                    </Reveal>
                    <div class="timeline">
                        {timeline}
                    </div>
                </div>
            </div>
        </section>
    }
}

// --- Projects -----------------------------------------------------------

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    let section_ref = use_node_ref();
    let shown = use_reveal(&section_ref, "-100px");
    let hovered = use_state_eq(|| Option::<&'static str>::None);

    let cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let number = format!("{:02}", index + 1);
            let is_hovered = *hovered == Some(project.id);

            let onmouseenter = {
                let hovered = hovered.clone();
                Callback::from(move |_: MouseEvent| hovered.set(Some(project.id)))
            };
            let onmouseleave = {
                let hovered = hovered.clone();
                Callback::from(move |_: MouseEvent| hovered.set(None))
            };

            let bullets = project
                .highlights
                .iter()
                .take(3)
                .map(|highlight| {
                    html! {
                        <li class="project-bullet">
                            <span class="project-bullet-dot"></span>
                            {*highlight}
                        </li>
                    }
                })
                .collect::<Html>();

            let tags = project
                .tech
                .iter()
                .map(|tech| html! { <span class="tech-tag">{*tech}</span> })
                .collect::<Html>();

            html! {
                <Reveal shown={shown} index={index as u32}>
                    <article
                        class={classes!("project-card", is_hovered.then_some("is-hovered"))}
                        onmouseenter={onmouseenter}
                        onmouseleave={onmouseleave}
                        data-hoverable=""
                    >
                        <div class="project-card-inner">
                            <div class="project-main">
                                <div class="project-meta">
                                    <span class="project-number">{number.clone()}</span>
                                    <span class="project-category">{project.category}</span>
                                </div>
                                <h3 class="project-title">{project.title}</h3>
                                <p class="project-subtitle">{project.subtitle}</p>
                                <p class="section-body">{project.description}</p>
                                <ul class="project-bullets">{bullets}</ul>
                                <div class="project-impact">
                                    <span class="project-impact-label">{"Impact:"}</span>
                                    <span class="project-impact-value">{project.impact}</span>
                                </div>
                            </div>
                            <div class="project-side">
                                <div>
                                    <h4 class="project-side-title">{"Technologies"}</h4>
                                    <div class="tech-tags">{tags}</div>
                                </div>
                                <span class="project-watermark">{number}</span>
                            </div>
                        </div>
                    </article>
                </Reveal>
            }
        })
        .collect::<Html>();

    html! {
        <section ref={section_ref} id="projects" class="content-section projects-section">
            <div class="section-accent section-accent-grid" aria-hidden="true"></div>
            <div class="section-container">
                <Reveal shown={shown} index={0} class={classes!("section-header")}>
                    {section_tag("02 — PROJECTS")}
                    <h2 class="section-headline">
                        {"Featured "}
                        <span class="accent-text">{"Work"}</span>
                    </h2>
                    <p class="section-body section-intro">
                        {"AI-powered solutions and data-driven platforms that solve real-world problems."}
                    </p>
                </Reveal>
                <div class="project-list">
                    {cards}
                </div>
            </div>
        </section>
    }
}

// --- Skills -------------------------------------------------------------

#[function_component(SkillsSection)]
pub fn skills_section() -> Html {
    let section_ref = use_node_ref();
    let shown = use_reveal(&section_ref, "0px");

    let groups = SKILL_GROUPS
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let chips = group
                .items
                .iter()
                .map(|item| {
                    html! { <span class="skill-chip" data-hoverable="">{*item}</span> }
                })
                .collect::<Html>();
            html! {
                <Reveal shown={shown} index={index as u32}>
                    <div class="skill-card">
                        <h3 class="skill-card-title">{group.title}</h3>
                        <div class="skill-chips">{chips}</div>
                    </div>
                </Reveal>
            }
        })
        .collect::<Html>();

    html! {
        <section ref={section_ref} id="skills" class="content-section skills-section">
            <div class="section-container">
                <Reveal shown={shown} index={0} class={classes!("section-header", "is-centered")}>
                    {section_tag("03 — SKILLS")}
                    <h2 class="section-headline">
                        {"My "}
                        <span class="accent-text">{"Skills"}</span>
                    </h2>
                </Reveal>
                <div class="skill-grid">
                    {groups}
                </div>
            </div>
        </section>
    }
}

// --- Achievements -------------------------------------------------------

fn achievement_icon(kind: AchievementKind) -> Html {
    let path = match kind {
        AchievementKind::Competition => {
            "M5 3v4M3 5h4M6 17v4m-2-2h4m5-16l2.286 6.857L21 12l-5.714 2.143L13 21l-2.286-6.857L5 12l5.714-2.143L13 3z"
        }
        AchievementKind::Leadership => {
            "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z"
        }
        AchievementKind::Certification => {
            "M9 12l2 2 4-4M7.835 4.697a3.42 3.42 0 001.946-.806 3.42 3.42 0 014.438 0 3.42 3.42 0 001.946.806 3.42 3.42 0 013.138 3.138 3.42 3.42 0 00.806 1.946 3.42 3.42 0 010 4.438 3.42 3.42 0 00-.806 1.946 3.42 3.42 0 01-3.138 3.138 3.42 3.42 0 00-1.946.806 3.42 3.42 0 01-4.438 0 3.42 3.42 0 00-1.946-.806 3.42 3.42 0 01-3.138-3.138 3.42 3.42 0 00-.806-1.946 3.42 3.42 0 010-4.438 3.42 3.42 0 00.806-1.946 3.42 3.42 0 013.138-3.138z"
        }
    };

    html! {
        <svg class="achievement-glyph" viewBox="0 0 24 24" fill="none" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" d={path} />
        </svg>
    }
}

#[function_component(AchievementsSection)]
pub fn achievements_section() -> Html {
    let section_ref = use_node_ref();
    let shown = use_reveal(&section_ref, "-100px");

    let cards = ACHIEVEMENTS
        .iter()
        .enumerate()
        .map(|(index, achievement)| {
            let highlight = achievement.highlight.then_some("is-highlight");
            html! {
                <Reveal shown={shown} index={index as u32}>
                    <div class={classes!("achievement-card", highlight)} data-hoverable="">
                        <div class={classes!("achievement-icon", highlight)}>
                            {achievement_icon(achievement.kind)}
                        </div>
                        <h3 class="achievement-title">{achievement.title}</h3>
                        <p class="achievement-description">{achievement.description}</p>
                        <span class="achievement-kind">{achievement.kind.label()}</span>
                    </div>
                </Reveal>
            }
        })
        .collect::<Html>();

    html! {
        <section ref={section_ref} id="achievements" class="content-section achievements-section">
            <div class="section-accent section-accent-dots" aria-hidden="true"></div>
            <div class="section-container">
                <Reveal shown={shown} index={0} class={classes!("section-header", "is-centered")}>
                    {section_tag("04 — ACHIEVEMENTS")}
                    <h2 class="section-headline">
                        {"Recognition & "}
                        <span class="accent-text">{"Milestones"}</span>
                    </h2>
                </Reveal>
                <div class="achievement-grid">
                    {cards}
                </div>
            </div>
        </section>
    }
}

// --- Contact ------------------------------------------------------------

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let section_ref = use_node_ref();
    let shown = use_reveal(&section_ref, "-100px");

    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <section ref={section_ref} id="contact" class="content-section contact-section">
            <div class="section-accent section-accent-contact" aria-hidden="true"></div>
            <div class="section-container contact-inner">
                <Reveal shown={shown} index={0}>
                    {section_tag("05 — CONNECT")}
                </Reveal>
                <Reveal shown={shown} index={1}>
                    <h2 class="section-headline">
                        {"Let's Build Something"}
                        <span class="accent-line glow-text">{"Extraordinary"}</span>
                    </h2>
                </Reveal>
                <Reveal shown={shown} index={2}>
                    <p class="section-body contact-pitch">
                        {"Open to opportunities in AI development, full-stack engineering, and innovative tech projects. Let's create impactful solutions together."}
                    </p>
                </Reveal>
                <Reveal shown={shown} index={3}>
                    <a
                        class="contact-cta"
                        href={format!("mailto:{}", PERSON.email)}
                        data-magnetic=""
                    >
                        <span class="contact-cta-email">{PERSON.email}</span>
                        <span class="contact-cta-arrow">{"→"}</span>
                    </a>
                </Reveal>
                <Reveal shown={shown} index={4} class={classes!("contact-links")}>
                    <a class="contact-link" href={format!("tel:{}", PERSON.phone)} data-hoverable="">
                        <svg class="contact-glyph" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" d="M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z" />
                        </svg>
                        <span>{PERSON.phone}</span>
                    </a>
                    <a
                        class="contact-link"
                        href={PERSON.social.github}
                        target="_blank"
                        rel="noopener noreferrer"
                        data-hoverable=""
                    >
                        <svg class="contact-glyph" viewBox="0 0 24 24" fill="currentColor">
                            <path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"/>
                        </svg>
                        <span>{"GitHub"}</span>
                    </a>
                    <a
                        class="contact-link"
                        href={PERSON.social.leetcode}
                        target="_blank"
                        rel="noopener noreferrer"
                        data-hoverable=""
                    >
                        <svg class="contact-glyph" viewBox="0 0 24 24" fill="currentColor">
                            <path d="M16.102 17.93l-1.242-1.242a1.5 1.5 0 01-.443-1.06v-3.26a1.5 1.5 0 01.443-1.06l1.242-1.242a1.5 1.5 0 012.121 2.121l-.682.682v2.258l.682.682a1.5 1.5 0 11-2.121 2.121z"/>
                            <path d="M7.898 6.07l1.242 1.242a1.5 1.5 0 01.443 1.06v3.26a1.5 1.5 0 01-.443 1.06L7.898 13.93a1.5 1.5 0 11-2.121-2.121l.682-.682V8.87l-.682-.682A1.5 1.5 0 017.898 6.07z"/>
                        </svg>
                        <span>{"LeetCode"}</span>
                    </a>
                    <a
                        class="contact-link"
                        href={PERSON.social.linkedin}
                        target="_blank"
                        rel="noopener noreferrer"
                        data-hoverable=""
                    >
                        <svg class="contact-glyph" viewBox="0 0 24 24" fill="currentColor">
                            <path d="M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z"/>
                        </svg>
                        <span>{"LinkedIn"}</span>
                    </a>
                </Reveal>
                <Reveal shown={shown} index={5} class={classes!("contact-footer")}>
                    <p>
                        {"Designed & Built by "}
                        <span class="accent-text">{PERSON.name}</span>
                    </p>
                    <p>{format!("© {year} — All rights reserved")}</p>
                </Reveal>
            </div>
        </section>
    }
}
