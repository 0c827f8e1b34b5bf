use yew::prelude::*;

use crate::config::{BRAND, COPYRIGHT_YEAR};
use crate::content::{quoted, FEATURES, FOOTER_COLUMNS, LEAK_DATA, STATS, TESTIMONIALS};
use crate::leak_chart::LeakChart;
use crate::radar::Radar;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <>
        <style>{LANDING_CSS}</style>
        <main class="landing-page">
            <section class="hero">
                <div class="container hero-inner">
                    <div class="hero-copy">
                        <h1>{"Advanced Threat "}<span class="accent">{"Intelligence"}</span></h1>
                        <p class="hero-subtitle">
                            {"Monitor, detect, and prevent data leaks with our cutting-edge platform powered by advanced analytics."}
                        </p>
                        <div class="hero-cta-group">
                            <button class="button-primary">{"Start Free Trial"}</button>
                            <button class="button-outline">{"Watch Demo"}</button>
                        </div>
                    </div>
                    <div class="hero-visual">
                        <Radar />
                    </div>
                </div>
            </section>

            <section id="statistics" class="band">
                <div class="container stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div class="card stat-card">
                            <div class="stat-value">{stat.value}</div>
                            <p class="stat-label">{stat.label}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="features" class="section">
                <div class="container">
                    <h2 class="section-title">{"Comprehensive "}<span class="accent">{"Monitoring"}</span></h2>
                    <div class="features-grid">
                        { for FEATURES.iter().map(|feature| html! {
                            <div class="card feature-card">
                                <div class="feature-icon" aria-hidden="true">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.body}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="band">
                <div class="container">
                    <h2 class="section-title">{"Leak "}<span class="accent">{"Analytics"}</span></h2>
                    <div class="card chart-card">
                        <h3>{"Monthly Leak Detection"}</h3>
                        <LeakChart points={&LEAK_DATA[..]} />
                    </div>
                </div>
            </section>

            <section id="about" class="section">
                <div class="container">
                    <h2 class="section-title">{"What Our "}<span class="accent">{"Clients Say"}</span></h2>
                    <div class="testimonials-grid">
                        { for TESTIMONIALS.iter().map(|testimonial| html! {
                            <figure class="card testimonial-card">
                                <blockquote>{quoted(testimonial.text)}</blockquote>
                                <figcaption>
                                    <p class="testimonial-author">{testimonial.author}</p>
                                    <p class="testimonial-role">{testimonial.role}</p>
                                </figcaption>
                            </figure>
                        }) }
                    </div>
                </div>
            </section>
        </main>
        <Footer />
        </>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    { for FOOTER_COLUMNS.iter().map(|column| html! {
                        <div>
                            <h3>{column.heading}</h3>
                            <ul>
                                { for column.links.iter().map(|link| html! {
                                    <li><a href="#">{*link}</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} {}. All rights reserved.", COPYRIGHT_YEAR, BRAND)}</p>
                </div>
            </div>
        </footer>
    }
}

const LANDING_CSS: &str = r#"
.hero {
    position: relative;
    padding: 5rem 0;
    overflow: hidden;
}
.hero-inner {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 2.5rem;
}
.hero-copy h1 {
    font-size: 3rem;
    line-height: 1.2;
    margin: 0 0 1.5rem;
}
.hero-subtitle {
    font-size: 1.25rem;
    color: #9ca3af;
    margin: 0 0 1.5rem;
}
.hero-cta-group {
    display: flex;
    gap: 1rem;
}
.radar-canvas {
    display: block;
    width: 100%;
    max-width: 600px;
    margin: 0 auto;
    filter: drop-shadow(0 0 10px rgba(74, 222, 128, 0.3));
}
@media (min-width: 1024px) {
    .hero-inner {
        flex-direction: row;
    }
    .hero-copy,
    .hero-visual {
        width: 50%;
    }
}

.stats-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 2rem;
}
.stat-value {
    font-size: 1.875rem;
    font-weight: 700;
    color: #4ade80;
}
.stat-label {
    color: #9ca3af;
    margin: 0.75rem 0 0;
}
@media (min-width: 768px) {
    .stats-grid {
        grid-template-columns: repeat(4, 1fr);
    }
}

.features-grid {
    display: grid;
    gap: 2rem;
}
.feature-icon {
    font-size: 2.5rem;
    margin-bottom: 1rem;
}
.feature-card h3 {
    margin: 0 0 0.75rem;
}
.feature-card p {
    color: #9ca3af;
    margin: 0;
}
@media (min-width: 768px) {
    .features-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}
@media (min-width: 1024px) {
    .features-grid {
        grid-template-columns: repeat(3, 1fr);
    }
}

.chart-card h3 {
    margin: 0 0 1rem;
}
.leak-chart {
    position: relative;
}
.leak-chart canvas {
    display: block;
    width: 100%;
    height: auto;
}
.chart-tooltip {
    position: absolute;
    top: 1rem;
    transform: translateX(-50%);
    background-color: #1f2937;
    border: 1px solid #374151;
    padding: 0.5rem 0.75rem;
    pointer-events: none;
    white-space: nowrap;
}
.chart-tooltip-value {
    color: #4ade80;
}

.testimonials-grid {
    display: grid;
    gap: 2rem;
}
.testimonial-card {
    margin: 0;
}
.testimonial-card blockquote {
    font-size: 1.125rem;
    color: #e5e7eb;
    margin: 0 0 1rem;
}
.testimonial-author {
    font-weight: 600;
    color: #d1d5db;
    margin: 0;
}
.testimonial-role {
    color: #9ca3af;
    margin: 0;
}
@media (min-width: 768px) {
    .testimonials-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

.site-footer {
    background: #111827;
    border-top: 1px solid #1f2937;
    padding: 3rem 0;
}
.footer-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 2rem;
}
.footer-grid h3 {
    font-size: 1rem;
    margin: 0 0 1rem;
}
.footer-grid ul {
    list-style: none;
    padding: 0;
    margin: 0;
}
.footer-grid li {
    margin-bottom: 0.5rem;
}
.footer-grid a {
    color: #9ca3af;
    text-decoration: none;
}
.footer-grid a:hover {
    color: #4ade80;
}
.footer-bottom {
    margin-top: 3rem;
    padding-top: 2rem;
    border-top: 1px solid #1f2937;
    text-align: center;
    color: #9ca3af;
}
@media (min-width: 768px) {
    .footer-grid {
        grid-template-columns: repeat(4, 1fr);
    }
}

"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{position, render};

    fn page() -> String {
        render::<Landing>(())
    }

    #[test]
    fn nav_targets_exist_on_the_page() {
        let html = page();
        for id in ["statistics", "features", "about"] {
            position(&html, &format!("id=\"{}\"", id));
        }
    }

    #[test]
    fn stats_render_in_order_with_labels_under_values() {
        let html = page();
        let mut last = position(&html, r#"id="statistics""#);
        for stat in STATS.iter() {
            let value = last + position(&html[last..], &format!(">{}<", stat.value));
            let label = value + position(&html[value..], &format!(">{}<", stat.label));
            last = label;
        }
        assert!(last < position(&html, r#"id="features""#));
    }

    #[test]
    fn each_quote_is_followed_by_its_author_and_role() {
        let html = page();
        let mut last = position(&html, r#"id="about""#);
        for testimonial in TESTIMONIALS.iter() {
            // Only the opening words: the rest may be entity-escaped.
            let opening: String = testimonial.text.chars().take(20).collect();
            let quote = last + position(&html[last..], &opening);
            let author = quote + position(&html[quote..], testimonial.author);
            let role = author + position(&html[author..], testimonial.role);
            last = role;
        }
    }

    #[test]
    fn footer_closes_the_page() {
        let html = page();
        let footer = position(&html, r#"class="site-footer""#);
        assert!(position(&html, r#"id="about""#) < footer);
        assert!(html[footer..].contains(&format!("© {} {}. All rights reserved.", COPYRIGHT_YEAR, BRAND)));
    }
}
