use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod dom;
mod error;
mod theme;
mod gallery {
    pub mod category;
    pub mod urls;
    pub mod manifest;
    pub mod carousel;
    pub mod modal;
    pub mod recent;
    pub mod sections;
}
mod request {
    pub mod services;
    pub mod workflow;
    pub mod upload;
    pub mod form;
}
mod pages {
    pub mod home;
    pub mod gallery;
}

use gallery::modal::GalleryModal;
use pages::{gallery::GalleryPage, home::Home};
use request::form::{RequestFormHandle, RequestModal};
use theme::{apply_theme, load_theme, save_theme, Theme};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/gallery")]
    Gallery,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Gallery => {
            info!("Rendering Gallery page");
            html! { <GalleryPage /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let theme = use_state(load_theme);
    let request_form = use_context::<RequestFormHandle>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = Closure::wrap(Box::new({
                let window = window.clone();
                move || {
                    let scroll_top = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 80.0);
                }
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    {
        use_effect_with_deps(move |theme| {
            apply_theme(*theme);
            || ()
        }, *theme);
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            save_theme(next);
            theme.set(next);
        })
    };

    let open_request = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            if let Some(form) = &request_form {
                form.open(None);
            }
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"FM Projects"}
                </Link<Route>>

                <button id="mobileToggle" class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div id="navLinks" class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Gallery} classes="nav-link">
                            {"Gallery"}
                        </Link<Route>>
                    </div>
                    <button id="themeToggle" class="theme-toggle" aria-label="Toggle theme" onclick={toggle_theme}>
                        { if *theme == Theme::Dark { "☀" } else { "☾" } }
                    </button>
                    <button class="nav-cta open-quote-modal" onclick={open_request}>
                        {"Request a Quote"}
                    </button>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <GalleryModal>
                <RequestModal>
                    <Nav />
                    <Switch<Route> render={switch} />
                </RequestModal>
            </GalleryModal>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
