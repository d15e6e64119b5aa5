use std::rc::Rc;

use gloo_timers::callback::Interval;
use rand::Rng;
use web_sys::HtmlElement;
use yew::prelude::*;

const SPARKLE_COUNT: usize = 15;
const BEAM_SPACING_PX: f64 = 10.0;
const TYPEWRITER_INTERVAL_MS: u32 = 50;

const COVER_CSS: &str = r#"
    .cover {
        position: relative;
        display: inline-block;
        padding: 0.5rem 1.5rem;
        overflow: hidden;
        border-radius: 0.25rem;
        background: rgba(30, 30, 30, 0.6);
        transition: background 0.3s ease;
    }
    .cover:hover { background: rgba(10, 10, 10, 0.9); }
    .beam {
        position: absolute;
        left: 0;
        right: 0;
        height: 1px;
        overflow: hidden;
        pointer-events: none;
    }
    .beam-light {
        width: 30%;
        height: 1px;
        background: linear-gradient(to right, transparent, #3b82f6, transparent);
    }
    @keyframes beam-move {
        from { transform: translateX(-100%); }
        to { transform: translateX(400%); }
    }
    .cover-sparkles { position: absolute; inset: 0; pointer-events: none; }
    .sparkle {
        position: absolute;
        width: 2px;
        height: 2px;
        border-radius: 50%;
        background: white;
        animation: star-move linear infinite;
    }
    @keyframes star-move {
        0% { opacity: 0; transform: scale(0.5); }
        50% { opacity: 1; transform: scale(1.5); }
        100% { opacity: 0; transform: scale(0.5); }
    }
    .cover-text {
        position: relative;
        display: inline-block;
        color: #e5e5e5;
        transition: transform 0.2s ease;
    }
    .cover-text.hovered { color: white; transform: scale(0.97); }
"#;

/// Evenly spaced beam offsets for a box of the given height: one beam per
/// 10 px, none touching the edges.
pub fn beam_positions(height: f64) -> Vec<f64> {
    if !height.is_finite() || height <= 0.0 {
        return Vec::new();
    }
    let count = (height / BEAM_SPACING_PX).floor() as usize;
    let gap = height / (count + 1) as f64;
    (1..=count).map(|i| i as f64 * gap).collect()
}

/// The first `shown` characters of `text`, cut on a char boundary.
pub fn typewriter_prefix(text: &str, shown: usize) -> &str {
    match text.char_indices().nth(shown) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Sparkle {
    top: f64,
    left: f64,
    duration: f64,
    delay: f64,
}

impl Sparkle {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            top: rng.gen_range(0.0..100.0),
            left: rng.gen_range(0.0..100.0),
            duration: rng.gen_range(0.5..1.5),
            delay: rng.gen_range(0.0..0.5),
        }
    }

    fn style(&self) -> String {
        format!(
            "top: {:.2}%; left: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.top, self.left, self.duration, self.delay
        )
    }
}

#[derive(Properties, PartialEq)]
struct BeamProps {
    top: f64,
    hovered: bool,
    delay: f64,
}

#[function_component(Beam)]
fn beam(props: &BeamProps) -> Html {
    let (opacity, seconds) = if props.hovered { (1.0, 1) } else { (0.5, 3) };
    html! {
        <div class="beam" style={format!("top: {}px;", props.top)}>
            <div
                class="beam-light"
                style={format!(
                    "opacity: {}; animation: beam-move {}s linear infinite; animation-delay: {:.2}s;",
                    opacity, seconds, props.delay
                )}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CoverProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Wraps text in a "warp speed" box: horizontal beams, and sparkles while hovered.
#[function_component(Cover)]
pub fn cover(props: &CoverProps) -> Html {
    let hovered = use_state(|| false);
    let node = use_node_ref();
    let beams = use_state(Vec::<f64>::new);

    {
        let node = node.clone();
        let beams = beams.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(element) = node.cast::<HtmlElement>() {
                    beams.set(beam_positions(f64::from(element.client_height())));
                }
                || ()
            },
            (),
        );
    }

    let sparkles: Rc<Vec<Sparkle>> = use_memo(
        |hovered| {
            if *hovered {
                let mut rng = rand::thread_rng();
                (0..SPARKLE_COUNT).map(|_| Sparkle::random(&mut rng)).collect()
            } else {
                Vec::new()
            }
        },
        *hovered,
    );
    let beam_delays: Rc<Vec<f64>> = use_memo(
        |count| {
            let mut rng = rand::thread_rng();
            (0..*count).map(|_| rng.gen_range(0.0..2.0)).collect()
        },
        beams.len(),
    );

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div ref={node} class={classes!("cover", props.class.clone())} {onmouseenter} {onmouseleave}>
            <style>{COVER_CSS}</style>
            {
                if *hovered {
                    html! {
                        <div class="cover-sparkles">
                            { for sparkles.iter().map(|sparkle| html! {
                                <div class="sparkle" style={sparkle.style()} />
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            { for beams.iter().zip(beam_delays.iter()).map(|(top, delay)| html! {
                <Beam top={*top} hovered={*hovered} delay={*delay} />
            }) }
            <span class={classes!("cover-text", (*hovered).then(|| "hovered"))}>
                { for props.children.iter() }
            </span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpotlightProps {
    #[prop_or(AttrValue::from("white"))]
    pub fill: AttrValue,
    #[prop_or(0.15)]
    pub fill_opacity: f64,
}

#[function_component(Spotlight)]
pub fn spotlight(props: &SpotlightProps) -> Html {
    let gradient_id = format!("spotlight-gradient-{}", props.fill.replace('#', ""));
    html! {
        <svg class="spotlight" style="position: absolute; top: -10rem; left: -10rem; pointer-events: none; z-index: 0;" width="500" height="500" viewBox="0 0 500 500" fill="none" xmlns="http://www.w3.org/2000/svg">
            <circle cx="0" cy="0" r="500" fill={format!("url(#{})", gradient_id)} fill-opacity={props.fill_opacity.to_string()} />
            <defs>
                <radialGradient id={gradient_id} cx="0" cy="0" r="1" gradientUnits="userSpaceOnUse" gradientTransform="translate(0 0) rotate(90) scale(500)">
                    <stop stop-color={props.fill.clone()} stop-opacity="1" />
                    <stop offset="1" stop-color={props.fill.clone()} stop-opacity="0" />
                </radialGradient>
            </defs>
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct GradientButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Black button that fills with electric blue on hover.
#[function_component(GradientButton)]
pub fn gradient_button(props: &GradientButtonProps) -> Html {
    html! {
        <button class={classes!("gradient-button", props.class.clone())} onclick={props.onclick.clone()}>
            <style>
                {r#"
                    .gradient-button {
                        position: relative;
                        overflow: hidden;
                        padding: 0.75rem 2rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 9999px;
                        background: transparent;
                        color: white;
                        cursor: pointer;
                    }
                    .gradient-button-base, .gradient-button-hover { position: absolute; inset: 0; }
                    .gradient-button-base { background: black; }
                    .gradient-button-hover {
                        background: linear-gradient(90deg, #1e40af, #3b82f6);
                        opacity: 0;
                        transition: opacity 0.4s ease;
                    }
                    .gradient-button:hover .gradient-button-hover { opacity: 1; }
                    .gradient-button-content { position: relative; font-weight: 600; }
                "#}
            </style>
            <div class="gradient-button-base" />
            <div class="gradient-button-hover" />
            <span class="gradient-button-content">{ for props.children.iter() }</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextHoverEffectProps {
    pub text: AttrValue,
}

#[function_component(TextHoverEffect)]
pub fn text_hover_effect(props: &TextHoverEffectProps) -> Html {
    html! {
        <div class="text-hover-effect">
            <style>
                {r#"
                    .text-hover-effect h1 {
                        margin: 0;
                        font-size: clamp(4rem, 18vw, 14rem);
                        font-weight: 900;
                        letter-spacing: 0.05em;
                        text-align: center;
                        user-select: none;
                    }
                    .hover-letter {
                        color: transparent;
                        -webkit-text-stroke: 1px rgba(255, 255, 255, 0.25);
                        transition: color 0.3s ease, -webkit-text-stroke-color 0.3s ease;
                    }
                    .hover-letter:hover { color: #3b82f6; -webkit-text-stroke-color: #60a5fa; }
                "#}
            </style>
            <h1>
                { for props.text.chars().enumerate().map(|(index, letter)| html! {
                    <span key={index.to_string()} class="hover-letter">{letter.to_string()}</span>
                }) }
            </h1>
        </div>
    }
}

struct Typed(usize);

enum TypedAction {
    Next,
    Reset,
}

impl Reducible for Typed {
    type Action = TypedAction;

    fn reduce(self: Rc<Self>, action: TypedAction) -> Rc<Self> {
        match action {
            TypedAction::Next => Rc::new(Typed(self.0 + 1)),
            TypedAction::Reset => Rc::new(Typed(0)),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterTitleProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Types `text` out one character at a time.
#[function_component(TypewriterTitle)]
pub fn typewriter_title(props: &TypewriterTitleProps) -> Html {
    let typed = use_reducer(|| Typed(0));
    let done = typed.0 >= props.text.chars().count();

    {
        let dispatcher = typed.dispatcher();
        use_effect_with_deps(
            move |_| {
                dispatcher.dispatch(TypedAction::Reset);
                || ()
            },
            props.text.clone(),
        );
    }

    // The interval only lives while there is something left to type.
    {
        let dispatcher = typed.dispatcher();
        use_effect_with_deps(
            move |(_, done)| {
                let interval = (!*done).then(|| {
                    Interval::new(TYPEWRITER_INTERVAL_MS, move || {
                        dispatcher.dispatch(TypedAction::Next)
                    })
                });
                move || drop(interval)
            },
            (props.text.clone(), done),
        );
    }

    html! {
        <h2 class={classes!("typewriter", props.class.clone())}>
            <style>
                {r#"
                    .typewriter { font-weight: 700; min-height: 1.2em; }
                    .typewriter-cursor { animation: cursor-blink 0.8s step-end infinite; color: #3b82f6; }
                    @keyframes cursor-blink { 50% { opacity: 0; } }
                "#}
            </style>
            {typewriter_prefix(&props.text, typed.0).to_string()}
            <span class="typewriter-cursor">{"_"}</span>
        </h2>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn beams_are_evenly_spaced_inside_the_box() {
        let positions = beam_positions(100.0);
        assert_eq!(positions.len(), 10);
        let gap = 100.0 / 11.0;
        for (i, position) in positions.iter().enumerate() {
            assert!((position - (i + 1) as f64 * gap).abs() < 1e-9);
        }
        assert!(positions.iter().all(|&p| p > 0.0 && p < 100.0));
    }

    #[test]
    fn short_or_unmeasured_box_has_no_beams() {
        assert!(beam_positions(9.0).is_empty());
        assert!(beam_positions(0.0).is_empty());
        assert!(beam_positions(f64::NAN).is_empty());
    }

    #[test]
    fn typewriter_cuts_on_char_boundaries() {
        let text = "Mitä rakennetaan?";
        assert_eq!(typewriter_prefix(text, 0), "");
        assert_eq!(typewriter_prefix(text, 4), "Mitä");
        assert_eq!(typewriter_prefix(text, 100), text);
        assert_eq!(typewriter_prefix("äö", 1), "ä");
    }

    #[test]
    fn sparkles_stay_inside_the_cover() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..200 {
            let sparkle = Sparkle::random(&mut rng);
            assert!((0.0..100.0).contains(&sparkle.top));
            assert!((0.0..100.0).contains(&sparkle.left));
            assert!((0.5..1.5).contains(&sparkle.duration));
            assert!((0.0..0.5).contains(&sparkle.delay));
        }
    }
}
