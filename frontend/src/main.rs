use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod config;
mod content;
mod frame_loop;
mod leak_chart;
mod radar;
mod registration;
mod pages {
    pub mod landing;
}
mod components {
    pub mod register_dialog;
}
#[cfg(test)]
mod markup;

use pages::landing::Landing;
use components::register_dialog::RegisterDialog;
use content::NAV_ANCHORS;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <main class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
                </main>
            }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_bool_toggle(false);
    let register_open = use_bool_toggle(false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let open_register = {
        let menu_open = menu_open.clone();
        let register_open = register_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            register_open.set(true);
        })
    };

    let close_register = {
        let register_open = register_open.clone();
        Callback::from(move |_: ()| register_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header class="top-nav">
            <nav class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-mark" aria-hidden="true">{"🛡️"}</span>
                    {config::BRAND}
                </Link<Route>>

                <button
                    class="burger-menu"
                    aria-label="Toggle menu"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ANCHORS.iter().map(|anchor| html! {
                        <a href={anchor.href} class="nav-link" onclick={close_menu.clone()}>
                            {anchor.label}
                        </a>
                    }) }
                    <button class="button-primary" onclick={open_register}>
                        {"Register"}
                    </button>
                </div>
            </nav>
            <RegisterDialog open={*register_open} on_close={close_register} />
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{BASE_CSS}</style>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

const BASE_CSS: &str = r#"
body {
    margin: 0;
    min-height: 100vh;
    background: #030712;
    color: #fff;
    font-family: system-ui, -apple-system, sans-serif;
}
.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1rem;
}
.accent {
    color: #4ade80;
}
.section,
.band {
    padding: 5rem 0;
}
.band {
    background: #111827;
}
.section-title {
    font-size: 1.875rem;
    font-weight: 700;
    text-align: center;
    margin: 0 0 3rem;
}
.card {
    background: #111827;
    border: 1px solid #1f2937;
    border-radius: 0.75rem;
    padding: 1.5rem;
}
.band .card {
    background: #1f2937;
    border-color: #374151;
}
.button-primary,
.button-outline {
    padding: 0.6rem 1.2rem;
    border-radius: 0.375rem;
    font-weight: 600;
    cursor: pointer;
    transition: background 0.2s ease, color 0.2s ease;
}
.button-primary {
    background: #4ade80;
    color: #000;
    border: none;
}
.button-primary:hover {
    background: #22c55e;
}
.button-outline {
    background: transparent;
    color: #4ade80;
    border: 1px solid #4ade80;
}
.button-outline:hover {
    background: #4ade80;
    color: #000;
}
.button-block {
    width: 100%;
}

.top-nav {
    border-bottom: 1px solid #1f2937;
}
.nav-content {
    position: relative;
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 1.25rem;
    font-weight: 700;
    color: #fff;
    text-decoration: none;
}
.nav-logo-mark {
    font-size: 1.75rem;
}
.nav-right {
    display: none;
    align-items: center;
    gap: 2rem;
}
.nav-link {
    color: #fff;
    text-decoration: none;
    transition: color 0.2s ease;
}
.nav-link:hover {
    color: #4ade80;
}
.burger-menu {
    display: flex;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: none;
    padding: 0.5rem;
    cursor: pointer;
}
.burger-menu span {
    display: block;
    width: 22px;
    height: 2px;
    background: #fff;
}
.nav-right.mobile-menu-open {
    display: flex;
    flex-direction: column;
    align-items: flex-start;
    gap: 1rem;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    padding: 1rem;
    background: #111827;
    border-bottom: 1px solid #1f2937;
    z-index: 40;
}
@media (min-width: 768px) {
    .burger-menu {
        display: none;
    }
    .nav-right,
    .nav-right.mobile-menu-open {
        display: flex;
        flex-direction: row;
        align-items: center;
        position: static;
        padding: 0;
        background: none;
        border: none;
    }
}

.not-found {
    min-height: 60vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 1rem;
}
.not-found a {
    color: #4ade80;
}
"#;
