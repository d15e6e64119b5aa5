use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const SCROLLED_THRESHOLD_PX: f64 = 80.0;

struct NavLink {
    name: &'static str,
    href: &'static str,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Etusivu", href: "#hero" },
    NavLink { name: "Palvelut", href: "/#services" },
    NavLink { name: "Meistä", href: "/#about" },
    NavLink { name: "Ota yhteyttä", href: "/#contact" },
];

#[derive(Properties, PartialEq)]
pub struct FloatingDockProps {
    /// Fired for the brand and for "Etusivu".
    pub on_home: Callback<()>,
}

#[function_component(FloatingDock)]
pub fn floating_dock(props: &FloatingDockProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    is_scrolled.set(scroll_y > SCROLLED_THRESHOLD_PX);
                                }
                            }
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    let go_home = {
        let on_home = props.on_home.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_home.emit(());
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let link = |link: &NavLink| {
        let onclick = if link.href == "#hero" {
            go_home.clone()
        } else {
            close_menu.clone()
        };
        html! {
            <a key={link.name} href={link.href} class="dock-link" {onclick}>
                {link.name}
            </a>
        }
    };

    html! {
        <nav class={classes!("floating-dock", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .floating-dock {
                        position: fixed;
                        top: 1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 100;
                        width: min(960px, calc(100% - 2rem));
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1rem;
                        background: rgba(0, 0, 0, 0.4);
                        backdrop-filter: blur(12px);
                        transition: background 0.3s ease, top 0.3s ease;
                    }
                    .floating-dock.scrolled { top: 0.5rem; background: rgba(0, 0, 0, 0.8); }
                    .dock-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0.75rem 1.5rem;
                    }
                    .dock-brand { font-weight: 900; letter-spacing: 0.1em; cursor: pointer; color: white; }
                    .dock-links { display: flex; align-items: center; gap: 1.5rem; }
                    .dock-link, .social-link { color: #a3a3a3; text-decoration: none; font-size: 0.9rem; }
                    .dock-link:hover, .social-link:hover { color: white; }
                    .dock-divider { width: 1px; height: 1.25rem; background: rgba(255, 255, 255, 0.15); }
                    .dock-social { display: flex; gap: 1rem; }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span { width: 22px; height: 2px; background: white; transition: transform 0.3s ease; }
                    .burger-menu.open span:nth-child(1) { transform: translateY(6px) rotate(45deg); }
                    .burger-menu.open span:nth-child(2) { opacity: 0; }
                    .burger-menu.open span:nth-child(3) { transform: translateY(-6px) rotate(-45deg); }
                    .dock-mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem 1.5rem 1.5rem;
                    }
                    @media (max-width: 768px) {
                        .dock-links { display: none; }
                        .burger-menu { display: flex; }
                    }
                "#}
            </style>
            <div class="dock-content">
                <div class="dock-brand" onclick={go_home.clone()}>
                    {"FEIM"}
                </div>

                <div class="dock-links">
                    { for NAV_LINKS.iter().map(link) }
                    <div class="dock-divider"></div>
                    <div class="dock-social">
                        <a href="#" class="social-link">{"X"}</a>
                        <a href="#" class="social-link">{"GitHub"}</a>
                    </div>
                </div>

                <button class={classes!("burger-menu", (*menu_open).then(|| "open"))} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="dock-mobile-menu">
                            { for NAV_LINKS.iter().map(link) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
