use chrono::Datelike;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dock::FloatingDock;
use crate::components::effects::{Cover, GradientButton, Spotlight, TextHoverEffect};
use crate::components::text_carousel::TextCarousel;
use crate::config::{self, CarouselConfig};
use crate::Route;

struct ServiceCard {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    wide: bool,
}

const SERVICE_CARDS: &[ServiceCard] = &[
    ServiceCard {
        title: "Verkkosivut & Web-sovellukset",
        description: "Räätälöidyt React- ja Next.js -ratkaisut, jotka skaalautuvat ja latautuvat salamannopeasti.",
        image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?q=80&w=2070&auto=format&fit=crop",
        wide: true,
    },
    ServiceCard {
        title: "UI/UX Suunnittelu",
        description: "Käyttäjäkokemuksen hiomista ja modernia käyttöliittymäsuunnittelua.",
        image: "https://images.unsplash.com/photo-1611162617474-5b21e879e113?q=80&w=1974&auto=format&fit=crop",
        wide: false,
    },
    ServiceCard {
        title: "SEO & Analytiikka",
        description: "Optimointia hakukoneille ja datalla johdettua markkinointia.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=2070&auto=format&fit=crop",
        wide: false,
    },
    ServiceCard {
        title: "Tekoälyratkaisut",
        description: "Räätälöidyt tekoälymallit, prosessien automaatio ja älykäs datan hyödyntäminen liiketoiminnassa.",
        image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?q=80&w=2070&auto=format&fit=crop",
        wide: true,
    },
];

struct Reason {
    title: &'static str,
    icon: &'static str,
    description: &'static str,
    cta: &'static str,
}

const REASONS: &[Reason] = &[
    Reason {
        title: "NOPEUS",
        icon: "⚡",
        description: "Markkinoiden nopeimmat toimitusajat. Hyödynnämme valmiita komponentteja ja tekoälyä, mikä leikkaa kehitysajan puoleen.",
        cta: "Lue lisää",
    },
    Reason {
        title: "HINTA",
        icon: "✓",
        description: "Kiinteä hinnoittelu ilman yllätyksiä. Moderni teknologia mahdollistaa premium-laadun murto-osalla perinteisistä hinnoista.",
        cta: "Pyydä tarjous",
    },
    Reason {
        title: "JATKUVA KEHITYS",
        icon: "⚙",
        description: "Digitaalinen maailma ei pysähdy. Ajattelevat sivut seuraa tulevaisuutta, eikä jämähdä paikoilleen.",
        cta: "Tutustu malliin",
    },
];

const ROW_PHOTO_IDS: &[&str] = &[
    "1460925895917-afdab827c52f",
    "1556761175-5973dc0f32e7",
    "1518770660439-4636190af475",
];

fn row_photo(index: usize) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?q=80&w=1000&auto=format&fit=crop",
        ROW_PHOTO_IDS[index % ROW_PHOTO_IDS.len()]
    )
}

const LANDING_CSS: &str = r#"
    body { margin: 0; background: black; color: white; font-family: Inter, system-ui, sans-serif; }
    .landing-page { min-height: 100vh; background: black; overflow-x: hidden; }
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        background: radial-gradient(circle at 50% 30%, rgba(30, 64, 175, 0.25), transparent 60%);
    }
    .hero-fade {
        position: absolute;
        left: 0;
        right: 0;
        bottom: 0;
        height: 10rem;
        background: linear-gradient(to bottom, transparent, black);
    }
    .hero-content { position: relative; z-index: 1; max-width: 56rem; padding: 0 1.5rem; text-align: center; }
    .hero-title { font-size: clamp(2.5rem, 7vw, 5rem); font-weight: 800; line-height: 1.1; margin: 0 0 1.5rem; }
    .hero-subtitle { color: #a3a3a3; font-size: 1.15rem; line-height: 1.6; margin: 0 auto 2.5rem; max-width: 40rem; }
    .hero-cta {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 1rem 2.25rem;
        border: none;
        border-radius: 9999px;
        background: white;
        color: black;
        font-weight: 700;
        font-size: 1rem;
        cursor: pointer;
        transition: transform 0.2s ease;
    }
    .hero-cta:hover { transform: scale(1.04); }
    .hero-cta-arrow { transition: transform 0.2s ease; }
    .hero-cta:hover .hero-cta-arrow { transform: translateX(4px); }
    .carousel-section { position: relative; padding: 6rem 1.5rem; overflow: hidden; }
    .carousel-section-glow {
        position: absolute;
        inset: 0;
        background: radial-gradient(ellipse at center, rgba(59, 130, 246, 0.12), transparent 70%);
    }
    .carousel-section-content { position: relative; max-width: 72rem; margin: 0 auto; }
    .carousel-heading { display: flex; align-items: flex-end; justify-content: space-between; margin-bottom: 3rem; gap: 2rem; flex-wrap: wrap; }
    .carousel-heading h2 { font-size: clamp(3rem, 8vw, 6rem); margin: 0; font-weight: 900; }
    .carousel-join p { color: #a3a3a3; margin: 0 0 0.5rem; }
    .carousel-join-link { display: inline-flex; gap: 0.5rem; color: #60a5fa; text-decoration: none; font-weight: 600; }
    .section-heading { max-width: 48rem; margin: 0 auto 3rem; }
    .section-heading.centered { text-align: center; }
    .section-heading h2 { font-size: clamp(2rem, 5vw, 3.25rem); margin: 0 0 1rem; }
    .section-heading p { color: #a3a3a3; line-height: 1.6; }
    .wobble-section { position: relative; padding: 6rem 1.5rem; }
    .wobble-background { position: absolute; inset: 0; background: linear-gradient(to bottom, black, #0a0f1f, black); }
    .wobble-content { position: relative; max-width: 72rem; margin: 0 auto; }
    .wobble-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
    .wobble-card {
        position: relative;
        min-height: 18rem;
        border-radius: 1rem;
        overflow: hidden;
        background: #1e3a8a;
        transition: transform 0.3s ease;
    }
    .wobble-card.wide { grid-column: span 2; }
    .wobble-card:hover { transform: scale(1.02) rotate(-0.5deg); }
    .wobble-card img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; opacity: 0.4; }
    .wobble-card-shade { position: absolute; inset: 0; z-index: 1; background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent); }
    .wobble-card-text { position: absolute; left: 0; right: 0; bottom: 0; z-index: 2; padding: 2rem; }
    .wobble-card-text h3 { margin: 0 0 0.5rem; font-size: 1.5rem; }
    .wobble-card-text p { margin: 0; color: #d4d4d4; }
    .section-fade { height: 6rem; background: linear-gradient(to bottom, transparent, black); }
    .services-section { position: relative; padding: 6rem 1.5rem; }
    .services-background { position: absolute; inset: 0; background: black; z-index: -1; }
    .service-rows { display: flex; flex-direction: column; gap: 6rem; max-width: 72rem; margin: 0 auto; }
    .service-row { display: flex; align-items: center; gap: 4rem; }
    .service-row.reversed { flex-direction: row-reverse; }
    .service-row-text, .service-row-image { flex: 1; }
    .service-row-icon { font-size: 2rem; color: #3b82f6; margin-bottom: 1rem; }
    .service-row-text h3 { font-size: 2rem; letter-spacing: 0.05em; margin: 0 0 1rem; }
    .service-row-text p { color: #a3a3a3; line-height: 1.7; }
    .service-row-cta { margin-top: 2rem; }
    .service-row-image { position: relative; border-radius: 1rem; overflow: hidden; aspect-ratio: 4 / 3; }
    .service-row-image img { width: 100%; height: 100%; object-fit: cover; }
    .service-row-shade { position: absolute; inset: 0; background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent); }
    .landing-bottom { position: relative; }
    .landing-bottom-background { position: absolute; inset: 0; background: linear-gradient(to bottom, black, #020617); }
    .landing-bottom-content { position: relative; }
    .contact-section { padding: 6rem 1.5rem; }
    .contact-form { max-width: 40rem; margin: 0 auto; display: flex; flex-direction: column; gap: 1.5rem; }
    .contact-row { display: flex; gap: 1.5rem; }
    .contact-field { flex: 1; display: flex; flex-direction: column; gap: 0.5rem; }
    .contact-field label { font-size: 0.85rem; color: #a3a3a3; }
    .contact-field input, .contact-field textarea {
        padding: 0.85rem 1rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 0.75rem;
        background: rgba(255, 255, 255, 0.05);
        color: white;
        font: inherit;
    }
    .contact-submit {
        align-self: center;
        padding: 1rem 2.5rem;
        border-radius: 9999px;
        background: #2563eb;
        color: white;
        text-decoration: none;
        font-weight: 700;
    }
    .contact-submit:hover { background: #3b82f6; }
    .footer { padding: 4rem 1.5rem 2rem; }
    .footer-content { max-width: 72rem; margin: 0 auto; }
    .footer-cta { text-align: center; margin-bottom: 3rem; }
    .footer-cta h3 { font-size: 2rem; margin: 0 0 1rem; }
    .footer-cta p { color: #a3a3a3; }
    .footer-mail { color: #60a5fa; font-size: 1.25rem; text-decoration: none; }
    .footer-divider { height: 1px; background: rgba(255, 255, 255, 0.1); margin: 2rem 0; }
    .footer-bottom { display: flex; justify-content: space-between; color: #737373; font-size: 0.85rem; }
    .footer-links { display: flex; gap: 1.5rem; }
    .footer-links a { color: #737373; text-decoration: none; }
    @media (max-width: 768px) {
        .wobble-grid { grid-template-columns: 1fr; }
        .wobble-card.wide { grid-column: span 1; }
        .service-row, .service-row.reversed { flex-direction: column; gap: 2rem; }
        .contact-row { flex-direction: column; }
        .footer-bottom { flex-direction: column; gap: 1rem; text-align: center; }
    }
"#;

/// `mailto:` link with a percent-encoded subject and body.
pub fn mailto_href(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

fn contact_mailto(name: &str, email: &str, message: &str) -> String {
    let subject = if name.trim().is_empty() {
        "Projektikysely".to_string()
    } else {
        format!("Projektikysely: {}", name.trim())
    };
    let body = format!("{}\n\n{} <{}>", message.trim(), name.trim(), email.trim());
    mailto_href(config::CONTACT_EMAIL, &subject, &body)
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    on_start_project: Callback<MouseEvent>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    html! {
        <section id="hero" class="hero">
            <FloatingDock on_home={Callback::from(|_: ()| scroll_to_top())} />
            <Spotlight />
            <div class="hero-background"></div>
            <div class="hero-fade"></div>

            <div class="hero-content">
                <h1 class="hero-title">
                    {"Sivut jotka "}<br /><Cover>{"ajattelevat."}</Cover>
                </h1>
                <p class="hero-subtitle">
                    {"Koe modernin web-kehityksen voima. Rakennamme digitaalisia kokemuksia, jotka eivät vain näytä hyvältä, vaan tuntuvat hyvältä käyttää."}
                </p>
                <div class="hero-cta-group">
                    <button class="hero-cta" onclick={props.on_start_project.clone()}>
                        {"Aloita projekti"}
                        <span class="hero-cta-arrow">{"→"}</span>
                    </button>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CarouselSectionProps {
    on_start_project: Callback<MouseEvent>,
}

#[function_component(CarouselSection)]
fn carousel_section(props: &CarouselSectionProps) -> Html {
    let carousel_config = use_memo(|_| CarouselConfig::default(), ());

    html! {
        <section id="about" class="carousel-section">
            <div class="carousel-section-glow"></div>
            <div class="carousel-section-content">
                <div class="carousel-heading">
                    <h2>{"Feimiä."}</h2>
                    <div class="carousel-join">
                        <p>{"Liity mukaan"}</p>
                        <a href="/projekti" class="carousel-join-link" onclick={
                            let start = props.on_start_project.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                start.emit(e);
                            })
                        }>
                            <span class="carousel-join-arrow">{"→"}</span>
                            <span>{"Aloita projekti"}</span>
                        </a>
                    </div>
                </div>
                <TextCarousel config={carousel_config} />
            </div>
        </section>
    }
}

#[function_component(WobbleCardDemo)]
fn wobble_card_demo() -> Html {
    html! {
        <section id="wobble" class="wobble-section">
            <div class="wobble-background"></div>
            <div class="wobble-content">
                <div class="section-heading">
                    <h2>{"Palvelumme"}</h2>
                    <p>
                        {"Tarjoamme kokonaisvaltaisia ratkaisuja liiketoimintasi kasvattamiseen. Koodista designiin, strategiasta toteutukseen."}
                    </p>
                </div>
                <div class="wobble-grid">
                    { for SERVICE_CARDS.iter().map(|card| html! {
                        <div class={classes!("wobble-card", card.wide.then(|| "wide"))}>
                            <div class="wobble-card-shade"></div>
                            <img src={card.image} alt={card.title} loading="lazy" />
                            <div class="wobble-card-text">
                                <h3>{card.title}</h3>
                                <p>{card.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <div class="section-fade"></div>
        </section>
    }
}

#[function_component(ServicesList)]
fn services_list() -> Html {
    html! {
        <section id="services" class="services-section">
            <div class="services-background"></div>
            <div class="section-heading centered">
                <h2>{"Miksi valita meidät?"}</h2>
                <p>{"Tekoälyn optimoima prosessi takaa tulokset."}</p>
            </div>
            <div class="service-rows">
                { for REASONS.iter().enumerate().map(|(index, reason)| html! {
                    <div class={classes!("service-row", (index % 2 == 1).then(|| "reversed"))}>
                        <div class="service-row-text">
                            <div class="service-row-icon">{reason.icon}</div>
                            <h3>{reason.title}</h3>
                            <p>{reason.description}</p>
                            <div class="service-row-cta">
                                <GradientButton>{reason.cta}</GradientButton>
                            </div>
                        </div>
                        <div class="service-row-image">
                            <img src={row_photo(index)} alt={reason.title} loading="lazy" />
                            <div class="service-row-shade"></div>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let href = contact_mailto(&name, &email, &message);

    html! {
        <section id="contact" class="contact-section">
            <div class="section-heading centered">
                <h2>{"Aloitetaan projekti"}</h2>
                <p>{"Jätä yhteystietosi, niin palaamme asiaan 24 tunnin sisällä."}</p>
            </div>
            <form class="contact-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                <div class="contact-row">
                    <div class="contact-field">
                        <label>{"Nimi"}</label>
                        <input type="text" placeholder="Matti Meikäläinen" value={(*name).clone()} oninput={on_name} />
                    </div>
                    <div class="contact-field">
                        <label>{"Sähköposti"}</label>
                        <input type="email" placeholder="matti@yritys.fi" value={(*email).clone()} oninput={on_email} />
                    </div>
                </div>
                <div class="contact-field">
                    <label>{"Viesti"}</label>
                    <textarea rows="4" placeholder="Kerro lyhyesti projektistasi..." value={(*message).clone()} oninput={on_message}></textarea>
                </div>
                <a class="contact-submit" {href}>{"Lähetä viesti"}</a>
            </form>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer id="footer" class="footer">
            <div class="footer-content">
                <div class="footer-cta">
                    <h3>{"Onko mielessäsi projekti?"}</h3>
                    <p>{"Ota yhteyttä ja tehdään visiostasi totta. Vastaamme 24h kuluessa."}</p>
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="footer-mail">
                        {config::CONTACT_EMAIL}
                    </a>
                </div>
                <div class="footer-divider"></div>
                <TextHoverEffect text="FEIM" />
                <div class="footer-bottom">
                    <p>{format!("© {} Feim Digital Agency. Kaikki oikeudet pidätetään.", year)}</p>
                    <div class="footer-links">
                        <a href="#">{"Tietosuoja"}</a>
                        <a href="#">{"Ehdot"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let navigator = use_navigator();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    let on_start_project = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Project);
        }
    });

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <div class="landing-sections">
                <Hero on_start_project={on_start_project.clone()} />
                <CarouselSection {on_start_project} />
                <WobbleCardDemo />
                <ServicesList />
            </div>
            <div class="landing-bottom">
                <div class="landing-bottom-background"></div>
                <div class="landing-bottom-content">
                    <ContactForm />
                    <Footer />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_subject_and_body() {
        let href = mailto_href("hello@feim.fi", "Moi & kiitos", "rivi 1\nrivi 2?");
        assert_eq!(
            href,
            "mailto:hello@feim.fi?subject=Moi%20%26%20kiitos&body=rivi%201%0Arivi%202%3F"
        );
    }

    #[test]
    fn contact_mailto_falls_back_to_generic_subject() {
        let href = contact_mailto("  ", "", "");
        assert!(href.starts_with("mailto:hello@feim.fi?subject=Projektikysely&body="));

        let href = contact_mailto("Matti", "matti@yritys.fi", "Verkkokauppa");
        assert!(href.contains("subject=Projektikysely%3A%20Matti"));
        assert!(href.contains("Verkkokauppa"));
        assert!(href.contains("matti%40yritys.fi"));
    }

    #[test]
    fn row_photos_cycle() {
        assert_eq!(row_photo(0), row_photo(3));
        assert_ne!(row_photo(0), row_photo(1));
    }
}
