use std::rc::Rc;

use log::{info, warn};
use serde::Serialize;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dock::FloatingDock;
use crate::components::effects::{Spotlight, TypewriterTitle};
use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectKind {
    #[serde(rename = "web")]
    Website,
    #[serde(rename = "app")]
    WebApp,
    #[serde(rename = "ai")]
    Ai,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 3] = [ProjectKind::Website, ProjectKind::WebApp, ProjectKind::Ai];

    pub fn title(&self) -> &'static str {
        match self {
            ProjectKind::Website => "Nettisivut",
            ProjectKind::WebApp => "Web-sovellus",
            ProjectKind::Ai => "Tekoäly",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ProjectKind::Website => "🌐",
            ProjectKind::WebApp => "📱",
            ProjectKind::Ai => "🤖",
        }
    }

    pub fn scopes(&self) -> &'static [Scope] {
        match self {
            ProjectKind::Website => &[Scope::Landing, Scope::MultiPage, Scope::AiSite],
            ProjectKind::WebApp | ProjectKind::Ai => &[Scope::Mvp, Scope::FullScale],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Scope {
    #[serde(rename = "landing")]
    Landing,
    #[serde(rename = "multipage")]
    MultiPage,
    #[serde(rename = "ai-site")]
    AiSite,
    #[serde(rename = "mvp")]
    Mvp,
    #[serde(rename = "full")]
    FullScale,
}

impl Scope {
    pub fn title(&self) -> &'static str {
        match self {
            Scope::Landing => "Landing page",
            Scope::MultiPage => "Multi page",
            Scope::AiSite => "CUSTOM AI-ENABLED PAGE",
            Scope::Mvp => "MVP",
            Scope::FullScale => "Full Scale",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scope::Landing => "Yhden sivun myyvä kokonaisuus.",
            Scope::MultiPage => "Laaja sivusto usealla alasivulla.",
            Scope::AiSite => "Tekoälyllä rikastettu ratkaisu.",
            Scope::Mvp => "Nopea prototyyppi markkinointiin.",
            Scope::FullScale => "Täysimittainen tuotantoratkaisu.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Kind,
    Scope,
    Contact,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
}

/// What the visitor picked, ready to hand over once the contact step is done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInquiry {
    pub kind: ProjectKind,
    pub scope: Scope,
    pub contact: ContactDetails,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub step: WizardStep,
    pub kind: Option<ProjectKind>,
    pub scope: Option<Scope>,
    pub contact: ContactDetails,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: WizardStep::Kind,
            kind: None,
            scope: None,
            contact: ContactDetails::default(),
        }
    }
}

pub enum WizardAction {
    ChooseKind(ProjectKind),
    ChooseScope(Scope),
    Back,
    SetName(String),
    SetEmail(String),
}

impl WizardState {
    /// `None` on the first step, where going back leaves the wizard.
    pub fn previous_step(&self) -> Option<WizardStep> {
        match self.step {
            WizardStep::Kind => None,
            WizardStep::Scope => Some(WizardStep::Kind),
            WizardStep::Contact => Some(WizardStep::Scope),
        }
    }

    pub fn inquiry(&self) -> Option<ProjectInquiry> {
        let kind = self.kind?;
        let scope = self.scope?;
        let name = self.contact.name.trim();
        let email = self.contact.email.trim();
        if name.is_empty() || email.is_empty() {
            return None;
        }
        Some(ProjectInquiry {
            kind,
            scope,
            contact: ContactDetails {
                name: name.to_string(),
                email: email.to_string(),
            },
        })
    }
}

impl Reducible for WizardState {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: WizardAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WizardAction::ChooseKind(kind) => {
                next.kind = Some(kind);
                next.scope = None;
                next.step = WizardStep::Scope;
            }
            WizardAction::ChooseScope(scope) => {
                // Only scopes offered for the chosen kind are accepted.
                match next.kind {
                    Some(kind) if kind.scopes().contains(&scope) => {
                        next.scope = Some(scope);
                        next.step = WizardStep::Contact;
                    }
                    _ => return self,
                }
            }
            WizardAction::Back => match self.previous_step() {
                Some(step) => next.step = step,
                None => return self,
            },
            WizardAction::SetName(name) => next.contact.name = name,
            WizardAction::SetEmail(email) => next.contact.email = email,
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectWizardProps {
    pub on_back: Callback<()>,
    pub on_complete: Callback<ProjectInquiry>,
}

#[function_component(ProjectWizard)]
pub fn project_wizard(props: &ProjectWizardProps) -> Html {
    let state = use_reducer(WizardState::default);

    let on_back_click = {
        let state = state.clone();
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| {
            if state.previous_step().is_some() {
                state.dispatch(WizardAction::Back);
            } else {
                on_back.emit(());
            }
        })
    };

    let on_submit = {
        let state = state.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match state.inquiry() {
                Some(inquiry) => on_complete.emit(inquiry),
                None => warn!("Project inquiry submitted with missing details"),
            }
        })
    };

    let body = match state.step {
        WizardStep::Kind => html! {
            <div class="wizard-step">
                <div class="wizard-title">
                    <TypewriterTitle text="Mitä rakennetaan?" class={classes!("wizard-heading")} />
                </div>
                <div class="wizard-options">
                    { for ProjectKind::ALL.iter().map(|kind| {
                        let kind = *kind;
                        let onclick = {
                            let state = state.clone();
                            Callback::from(move |_: MouseEvent| state.dispatch(WizardAction::ChooseKind(kind)))
                        };
                        html! {
                            <button class="wizard-option" {onclick}>
                                <span class="wizard-option-icon">{kind.icon()}</span>
                                <h3>{kind.title()}</h3>
                            </button>
                        }
                    }) }
                </div>
            </div>
        },
        WizardStep::Scope => {
            let scopes = state.kind.map(|kind| kind.scopes()).unwrap_or(&[]);
            html! {
                <div class="wizard-step">
                    <div class="wizard-title">
                        <TypewriterTitle text="Tarkennetaan" class={classes!("wizard-heading")} />
                    </div>
                    <div class="wizard-options">
                        { for scopes.iter().map(|scope| {
                            let scope = *scope;
                            let onclick = {
                                let state = state.clone();
                                Callback::from(move |_: MouseEvent| state.dispatch(WizardAction::ChooseScope(scope)))
                            };
                            html! {
                                <button class="wizard-option" {onclick}>
                                    <h3>{scope.title()}</h3>
                                    <p>{scope.description()}</p>
                                </button>
                            }
                        }) }
                    </div>
                </div>
            }
        }
        WizardStep::Contact => {
            let on_name = {
                let state = state.clone();
                Callback::from(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    state.dispatch(WizardAction::SetName(value));
                })
            };
            let on_email = {
                let state = state.clone();
                Callback::from(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    state.dispatch(WizardAction::SetEmail(value));
                })
            };
            html! {
                <div class="wizard-step narrow">
                    <div class="wizard-title">
                        <TypewriterTitle text="Yhteystiedot" class={classes!("wizard-heading")} />
                    </div>
                    <form class="wizard-form" onsubmit={on_submit}>
                        <input required={true} placeholder="Nimi" value={state.contact.name.clone()} oninput={on_name} />
                        <input required={true} type="email" placeholder="Sähköposti" value={state.contact.email.clone()} oninput={on_email} />
                        <button type="submit" class="wizard-submit">{"Lähetä"}</button>
                    </form>
                </div>
            }
        }
    };

    html! {
        <div class="project-wizard">
            <style>
                {r#"
                    .project-wizard {
                        position: relative;
                        min-height: 100vh;
                        background: black;
                        color: white;
                        overflow: hidden;
                        padding: 7rem 1.5rem 4rem;
                    }
                    .wizard-nav { position: relative; z-index: 1; max-width: 56rem; margin: 0 auto 2rem; }
                    .wizard-back {
                        display: inline-flex;
                        gap: 0.5rem;
                        background: none;
                        border: none;
                        color: #a3a3a3;
                        cursor: pointer;
                        font-size: 1rem;
                    }
                    .wizard-back:hover { color: white; }
                    .wizard-body { position: relative; z-index: 1; max-width: 56rem; margin: 0 auto; }
                    .wizard-step.narrow { max-width: 28rem; margin: 0 auto; }
                    .wizard-title { text-align: center; margin-bottom: 3rem; }
                    .wizard-heading { font-size: clamp(2rem, 5vw, 3rem); }
                    .wizard-options { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem; }
                    .wizard-option {
                        padding: 2.5rem 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1.25rem;
                        background: rgba(255, 255, 255, 0.04);
                        color: white;
                        text-align: center;
                        cursor: pointer;
                        transition: border-color 0.3s ease, transform 0.3s ease;
                    }
                    .wizard-option:hover { border-color: #3b82f6; transform: translateY(-4px); }
                    .wizard-option-icon { font-size: 2.5rem; display: block; margin-bottom: 1rem; }
                    .wizard-option h3 { margin: 0 0 0.5rem; }
                    .wizard-option p { margin: 0; color: #a3a3a3; }
                    .wizard-form { display: flex; flex-direction: column; gap: 1rem; }
                    .wizard-form input {
                        padding: 0.9rem 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.05);
                        color: white;
                        font: inherit;
                    }
                    .wizard-submit {
                        padding: 1rem;
                        border: none;
                        border-radius: 9999px;
                        background: #2563eb;
                        color: white;
                        font-weight: 700;
                        cursor: pointer;
                    }
                    .wizard-submit:hover { background: #3b82f6; }
                "#}
            </style>
            <Spotlight />
            <FloatingDock on_home={props.on_back.clone()} />
            <div class="wizard-nav">
                <button class="wizard-back" onclick={on_back_click}>
                    <span>{"←"}</span>
                    {"Takaisin"}
                </button>
            </div>
            <div class="wizard-body">
                { body }
            </div>
        </div>
    }
}

/// The wizard as a routed page: both leaving and finishing return to the landing page.
#[function_component(ProjectPage)]
pub fn project_page() -> Html {
    let navigator = use_navigator();

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: ()| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Landing);
            }
        })
    };

    let on_complete = Callback::from(move |inquiry: ProjectInquiry| {
        match serde_json::to_string(&inquiry) {
            Ok(json) => info!("Project inquiry: {}", json),
            Err(e) => warn!("Could not serialize project inquiry: {}", e),
        }
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Landing);
        }
    });

    html! {
        <ProjectWizard {on_back} {on_complete} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: Vec<WizardAction>) -> Rc<WizardState> {
        actions
            .into_iter()
            .fold(Rc::new(WizardState::default()), |state, action| state.reduce(action))
    }

    #[test]
    fn steps_forward_through_the_wizard() {
        let state = run(vec![
            WizardAction::ChooseKind(ProjectKind::Website),
            WizardAction::ChooseScope(Scope::Landing),
        ]);
        assert_eq!(state.step, WizardStep::Contact);
        assert_eq!(state.kind, Some(ProjectKind::Website));
        assert_eq!(state.scope, Some(Scope::Landing));
    }

    #[test]
    fn back_from_first_step_leaves_the_wizard() {
        let state = WizardState::default();
        assert_eq!(state.previous_step(), None);
        let after = Rc::new(state).reduce(WizardAction::Back);
        assert_eq!(after.step, WizardStep::Kind);
    }

    #[test]
    fn back_walks_one_step_at_a_time() {
        let state = run(vec![
            WizardAction::ChooseKind(ProjectKind::Ai),
            WizardAction::ChooseScope(Scope::Mvp),
            WizardAction::Back,
        ]);
        assert_eq!(state.step, WizardStep::Scope);

        let state = state.reduce(WizardAction::Back);
        assert_eq!(state.step, WizardStep::Kind);
        assert_eq!(state.kind, Some(ProjectKind::Ai));
    }

    #[test]
    fn choosing_a_kind_clears_the_scope() {
        let state = run(vec![
            WizardAction::ChooseKind(ProjectKind::Website),
            WizardAction::ChooseScope(Scope::MultiPage),
            WizardAction::Back,
            WizardAction::Back,
            WizardAction::ChooseKind(ProjectKind::WebApp),
        ]);
        assert_eq!(state.step, WizardStep::Scope);
        assert_eq!(state.scope, None);
    }

    #[test]
    fn scope_must_belong_to_the_kind() {
        let state = run(vec![
            WizardAction::ChooseKind(ProjectKind::WebApp),
            WizardAction::ChooseScope(Scope::Landing),
        ]);
        assert_eq!(state.step, WizardStep::Scope);
        assert_eq!(state.scope, None);
    }

    #[test]
    fn scopes_per_kind() {
        assert_eq!(ProjectKind::Website.scopes().len(), 3);
        assert_eq!(ProjectKind::WebApp.scopes(), &[Scope::Mvp, Scope::FullScale]);
        assert_eq!(ProjectKind::Ai.scopes(), ProjectKind::WebApp.scopes());
    }

    #[test]
    fn inquiry_needs_name_and_email() {
        let state = run(vec![
            WizardAction::ChooseKind(ProjectKind::Website),
            WizardAction::ChooseScope(Scope::AiSite),
            WizardAction::SetName("  Matti ".to_string()),
        ]);
        assert_eq!(state.inquiry(), None);

        let state = state.reduce(WizardAction::SetEmail("matti@yritys.fi".to_string()));
        let inquiry = state.inquiry().unwrap();
        assert_eq!(inquiry.contact.name, "Matti");

        let json = serde_json::to_value(&inquiry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "web",
                "scope": "ai-site",
                "contact": { "name": "Matti", "email": "matti@yritys.fi" }
            })
        );
    }
}
