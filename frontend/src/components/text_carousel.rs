use std::rc::Rc;

use log::error;
use yew::prelude::*;

use crate::carousel::cycler::{Shown, TransitionEvent};
use crate::carousel::engine::{Carousel, ColumnChange};
use crate::carousel::timers::BrowserTimers;
use crate::carousel::TransitionStyle;
use crate::config::CarouselConfig;

const CAROUSEL_CSS: &str = r#"
    .text-carousel {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1.5rem;
    }
    .text-column {
        position: relative;
        height: 3.5rem;
        width: 300px;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .carousel-item {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.25rem;
        font-weight: 600;
        white-space: nowrap;
        background: linear-gradient(to right, #60a5fa, #ffffff, #60a5fa);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
        animation-fill-mode: both;
        animation-timing-function: ease-in-out;
    }
    @keyframes carouselFadeIn { from { opacity: 0; } to { opacity: 1; } }
    @keyframes carouselFadeOut { from { opacity: 1; } to { opacity: 0; } }
    @keyframes carouselSlideIn { from { opacity: 0; transform: translateY(60%); } to { opacity: 1; transform: translateY(0); } }
    @keyframes carouselSlideOut { from { opacity: 1; transform: translateY(0); } to { opacity: 0; transform: translateY(-60%); } }
    @keyframes carouselBlurIn { from { opacity: 0; filter: blur(8px); } to { opacity: 1; filter: blur(0); } }
    @keyframes carouselBlurOut { from { opacity: 1; filter: blur(0); } to { opacity: 0; filter: blur(8px); } }
    .carousel-fade .entering { animation-name: carouselFadeIn; }
    .carousel-fade .exiting { animation-name: carouselFadeOut; }
    .carousel-slide .entering { animation-name: carouselSlideIn; }
    .carousel-slide .exiting { animation-name: carouselSlideOut; }
    .carousel-blur .entering { animation-name: carouselBlurIn; }
    .carousel-blur .exiting { animation-name: carouselBlurOut; }
    @media (max-width: 768px) {
        .text-carousel { gap: 0.5rem; }
        .text-column { width: 220px; }
        .carousel-item { font-size: 1rem; }
    }
"#;

/// What a single column has on screen: the item on its way in and the one on its way out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnFrame {
    pub current: Option<Shown>,
    pub leaving: Option<Shown>,
}

impl ColumnFrame {
    fn apply(&mut self, event: TransitionEvent) {
        match event {
            TransitionEvent::Exit(shown) => {
                if self.current.as_ref().map(|current| current.key) == Some(shown.key) {
                    self.current = None;
                }
                self.leaving = Some(shown);
            }
            TransitionEvent::Enter(shown) => {
                self.current = Some(shown);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarouselFrames {
    pub columns: Vec<ColumnFrame>,
}

pub enum FrameAction {
    Reset(Vec<Option<Shown>>),
    Change(ColumnChange),
}

impl Reducible for CarouselFrames {
    type Action = FrameAction;

    fn reduce(self: Rc<Self>, action: FrameAction) -> Rc<Self> {
        match action {
            FrameAction::Reset(snapshot) => Rc::new(CarouselFrames {
                columns: snapshot
                    .into_iter()
                    .map(|current| ColumnFrame {
                        current,
                        leaving: None,
                    })
                    .collect(),
            }),
            FrameAction::Change(change) => {
                let mut frames = (*self).clone();
                let Some(frame) = frames.columns.get_mut(change.column) else {
                    return self;
                };
                for event in change.transition.events() {
                    frame.apply(event);
                }
                Rc::new(frames)
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TextCarouselProps {
    pub config: Rc<CarouselConfig>,
}

#[function_component(TextCarousel)]
pub fn text_carousel(props: &TextCarouselProps) -> Html {
    let frames = use_reducer(CarouselFrames::default);

    // Restarted whenever the config (and so the pool or column count) changes;
    // the destructor stops every timer of the previous run.
    {
        let dispatcher = frames.dispatcher();
        use_effect_with_deps(
            move |config: &Rc<CarouselConfig>| {
                let on_change = {
                    let dispatcher = dispatcher.clone();
                    move |change: ColumnChange| dispatcher.dispatch(FrameAction::Change(change))
                };
                let carousel = match Carousel::start(
                    config,
                    &mut rand::thread_rng(),
                    &BrowserTimers,
                    on_change,
                ) {
                    Ok(carousel) => {
                        dispatcher.dispatch(FrameAction::Reset(carousel.snapshot()));
                        Some(carousel)
                    }
                    Err(e) => {
                        error!("Text carousel not started: {}", e);
                        dispatcher.dispatch(FrameAction::Reset(Vec::new()));
                        None
                    }
                };
                move || {
                    if let Some(carousel) = carousel {
                        carousel.stop();
                    }
                }
            },
            props.config.clone(),
        );
    }

    let transition = props.config.transition;
    let transition_ms = props.config.transition_ms;

    html! {
        <div class="text-carousel">
            <style>{CAROUSEL_CSS}</style>
            { for frames.columns.iter().enumerate().map(|(index, frame)| html! {
                <TextColumn
                    key={index.to_string()}
                    frame={frame.clone()}
                    transition={transition}
                    transition_ms={transition_ms}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextColumnProps {
    pub frame: ColumnFrame,
    pub transition: TransitionStyle,
    pub transition_ms: u32,
}

#[function_component(TextColumn)]
pub fn text_column(props: &TextColumnProps) -> Html {
    let frame = &props.frame;
    let duration = format!("animation-duration: {}ms;", props.transition_ms);
    // Exit first, enter after: the incoming item waits for the outgoing one.
    let enter_delay = if frame.leaving.is_some() { props.transition_ms } else { 0 };

    let mut items: Vec<Html> = Vec::with_capacity(2);
    if let Some(shown) = &frame.leaving {
        items.push(html! {
            <span key={format!("out-{}", shown.key)} class="carousel-item exiting" style={duration.clone()}>
                {shown.item.text.to_string()}
            </span>
        });
    }
    if let Some(shown) = &frame.current {
        items.push(html! {
            <span
                key={format!("in-{}", shown.key)}
                class="carousel-item entering"
                style={format!("{} animation-delay: {}ms;", duration, enter_delay)}
            >
                {shown.item.text.to_string()}
            </span>
        });
    }

    html! {
        <div class={classes!("text-column", props.transition.class())}>
            { for items }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::cycler::{Transition, TransitionKey};
    use crate::carousel::TextItem;
    use std::borrow::Cow;

    fn shown(id: u32, step: u64) -> Shown {
        Shown {
            item: TextItem {
                id,
                text: Cow::Owned(format!("teksti {id}")),
            },
            key: TransitionKey { item_id: id, step },
        }
    }

    fn change(column: usize, exited: Shown, entered: Shown) -> FrameAction {
        FrameAction::Change(ColumnChange {
            column,
            transition: Transition { exited, entered },
        })
    }

    #[test]
    fn reset_shows_snapshot_without_exits() {
        let frames = Rc::new(CarouselFrames::default())
            .reduce(FrameAction::Reset(vec![Some(shown(1, 0)), None]));
        assert_eq!(frames.columns.len(), 2);
        assert_eq!(frames.columns[0].current, Some(shown(1, 0)));
        assert_eq!(frames.columns[0].leaving, None);
        assert_eq!(frames.columns[1], ColumnFrame::default());
    }

    #[test]
    fn change_moves_current_to_leaving() {
        let frames = Rc::new(CarouselFrames::default())
            .reduce(FrameAction::Reset(vec![Some(shown(1, 0)), Some(shown(2, 0))]))
            .reduce(change(1, shown(2, 0), shown(5, 1)));

        assert_eq!(frames.columns[0].current, Some(shown(1, 0)));
        assert_eq!(frames.columns[1].leaving, Some(shown(2, 0)));
        assert_eq!(frames.columns[1].current, Some(shown(5, 1)));
    }

    #[test]
    fn same_item_reappearing_is_a_new_frame() {
        let frames = Rc::new(CarouselFrames::default())
            .reduce(FrameAction::Reset(vec![Some(shown(3, 0))]))
            .reduce(change(0, shown(3, 0), shown(3, 1)));

        let frame = &frames.columns[0];
        assert_ne!(
            frame.leaving.as_ref().map(|s| s.key),
            frame.current.as_ref().map(|s| s.key)
        );
    }

    #[test]
    fn change_for_unknown_column_is_ignored() {
        let start = Rc::new(CarouselFrames::default())
            .reduce(FrameAction::Reset(vec![Some(shown(1, 0))]));
        let after = start.clone().reduce(change(4, shown(1, 0), shown(2, 1)));
        assert_eq!(*after, *start);
    }
}
