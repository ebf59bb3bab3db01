use std::mem;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::dom::{lock_body_scroll, open_in_new_tab, read_as_data_url};
use crate::request::services::{preselect, SERVICES};
use crate::request::upload::upload_or_skip;
use crate::request::workflow::{
    cap_files, transition, Effect, FormEvent, RequestFields, Step, ValidRequest, HANDOFF_MESSAGE,
    READY_MESSAGE, VALIDATION_MESSAGE,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSession {
    generation: u32,
    open: bool,
    preselected: Option<String>,
}

pub enum SessionAction {
    Open(Option<String>),
    Close,
}

impl Reducible for FormSession {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            // A new generation remounts the form, so every open starts clean
            SessionAction::Open(preselected) => Rc::new(FormSession {
                generation: self.generation.wrapping_add(1),
                open: true,
                preselected,
            }),
            SessionAction::Close if self.open => Rc::new(FormSession {
                open: false,
                ..(*self).clone()
            }),
            SessionAction::Close => self,
        }
    }
}

/// Lets any "request service" control open the form.
#[derive(Clone, PartialEq)]
pub struct RequestFormHandle {
    dispatcher: UseReducerDispatcher<FormSession>,
}

impl RequestFormHandle {
    pub fn open(&self, preselected: Option<String>) {
        self.dispatcher.dispatch(SessionAction::Open(preselected));
    }
}

#[derive(Properties, PartialEq)]
pub struct RequestModalProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RequestModal)]
pub fn request_modal(props: &RequestModalProps) -> Html {
    let session = use_reducer(FormSession::default);
    let handle = RequestFormHandle { dispatcher: session.dispatcher() };

    {
        use_effect_with_deps(move |open| {
            lock_body_scroll(*open);
            || ()
        }, session.open);
    }

    let on_close = {
        let dispatcher = session.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(SessionAction::Close))
    };

    html! {
        <ContextProvider<RequestFormHandle> context={handle}>
            { for props.children.iter() }
            if session.open {
                <div id="quoteModal" class="request-modal-overlay">
                    <div id="quoteToolContainer">
                        <RequestForm
                            key={session.generation}
                            preselected={session.preselected.clone()}
                            on_close={on_close}
                        />
                    </div>
                </div>
            }
        </ContextProvider<RequestFormHandle>>
    }
}

pub enum RequestMsg {
    SetName(String),
    SetAddress(String),
    SetService(String),
    SetMessage(String),
    FilesChosen(Vec<File>),
    PreviewLoaded { batch: u32, index: usize, url: Option<String> },
    Submit,
    UploadFinished { request: ValidRequest, image_urls: Vec<String> },
    Close,
}

#[derive(Properties, PartialEq)]
pub struct RequestFormProps {
    #[prop_or_default]
    pub preselected: Option<String>,
    pub on_close: Callback<()>,
}

pub struct RequestForm {
    step: Step,
    fields: RequestFields,
    files: Vec<File>,
    previews: Vec<Option<String>>,
    preview_batch: u32,
    feedback: Option<&'static str>,
    close_timer: Option<Timeout>,
}

impl RequestForm {
    fn handle(&mut self, ctx: &Context<Self>, event: FormEvent) {
        let (step, effect) = transition(mem::take(&mut self.step), event);
        self.step = step;

        match effect {
            Effect::None => {}
            Effect::ShowValidation => self.feedback = Some(VALIDATION_MESSAGE),
            Effect::Upload(request) => {
                self.feedback = None;
                let files = self.files.clone();
                ctx.link().send_future(async move {
                    let image_urls = upload_or_skip(&files).await;
                    RequestMsg::UploadFinished { request, image_urls }
                });
            }
            Effect::ShowReady => self.feedback = Some(READY_MESSAGE),
            Effect::Handoff { link } => {
                open_in_new_tab(&link);
                self.feedback = Some(HANDOFF_MESSAGE);
                let on_close = ctx.props().on_close.clone();
                self.close_timer = Some(Timeout::new(config::HANDOFF_CLOSE_DELAY_MS, move || {
                    on_close.emit(())
                }));
            }
        }
    }

    // Each selection replaces the previous previews; reads still in flight
    // for an older batch are dropped when they land.
    fn preview(&mut self, ctx: &Context<Self>) {
        self.preview_batch = self.preview_batch.wrapping_add(1);
        self.previews = vec![None; self.files.len()];

        let batch = self.preview_batch;
        for (index, file) in self.files.iter().cloned().enumerate() {
            ctx.link().send_future(async move {
                let url = match read_as_data_url(file).await {
                    Ok(url) => Some(url),
                    Err(e) => {
                        warn!("Could not read photo for preview: {:?}", e);
                        None
                    }
                };
                RequestMsg::PreviewLoaded { batch, index, url }
            });
        }
    }
}

impl Component for RequestForm {
    type Message = RequestMsg;
    type Properties = RequestFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let service = ctx
            .props()
            .preselected
            .as_deref()
            .and_then(preselect)
            .map(|s| s.title.to_string())
            .unwrap_or_default();

        Self {
            step: Step::AwaitingUpload,
            fields: RequestFields { service, ..RequestFields::default() },
            files: Vec::new(),
            previews: Vec::new(),
            preview_batch: 0,
            feedback: None,
            close_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RequestMsg::SetName(value) => self.fields.name = value,
            RequestMsg::SetAddress(value) => self.fields.address = value,
            RequestMsg::SetService(value) => self.fields.service = value,
            RequestMsg::SetMessage(value) => self.fields.message = value,
            RequestMsg::FilesChosen(files) => {
                self.files = cap_files(files);
                self.preview(ctx);
            }
            RequestMsg::PreviewLoaded { batch, index, url } => {
                if batch != self.preview_batch {
                    return false;
                }
                match self.previews.get_mut(index) {
                    Some(slot) => *slot = url,
                    None => return false,
                }
            }
            RequestMsg::Submit => self.handle(ctx, FormEvent::Submit(self.fields.clone())),
            RequestMsg::UploadFinished { request, image_urls } => {
                self.handle(ctx, FormEvent::UploadFinished { request, image_urls })
            }
            RequestMsg::Close => {
                self.close_timer = None;
                self.handle(ctx, FormEvent::Reset);
                ctx.props().on_close.emit(());
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            RequestMsg::Submit
        });

        let on_files = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let files = input
                .files()
                .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
                .unwrap_or_default();
            RequestMsg::FilesChosen(files)
        });

        html! {
            <div class="modal-content request-modal">
                <div class="modal-header">
                    <h2>{"Request a Service"}</h2>
                    <button class="close-modal" onclick={link.callback(|_| RequestMsg::Close)}>{"×"}</button>
                </div>

                <form id="serviceRequestForm" class="service-request-form" onsubmit={onsubmit}>
                    <div class="form-grid">
                        <label>
                            <span class="field-label">{"Full name"}</span>
                            <input
                                type="text"
                                name="clientName"
                                value={self.fields.name.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    RequestMsg::SetName(input.value())
                                })}
                            />
                        </label>

                        <label>
                            <span class="field-label">{"Address / Suburb"}</span>
                            <input
                                type="text"
                                name="clientAddress"
                                value={self.fields.address.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    RequestMsg::SetAddress(input.value())
                                })}
                            />
                        </label>

                        <label>
                            <span class="field-label">{"Service"}</span>
                            <select
                                id="serviceSelected"
                                name="serviceSelected"
                                onchange={link.callback(|e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    RequestMsg::SetService(select.value())
                                })}
                            >
                                <option value="" selected={self.fields.service.is_empty()}>{"Select a Service"}</option>
                                { for SERVICES.iter().map(|s| html! {
                                    <option value={s.title} selected={self.fields.service == s.title}>{s.title}</option>
                                }) }
                            </select>
                        </label>

                        <label class="file-label">
                            <span class="field-label">{format!("Upload photos (up to {})", config::MAX_UPLOAD_FILES)}</span>
                            <input type="file" id="requestFiles" accept="image/*" multiple={true} onchange={on_files} />
                        </label>

                        <label class="full-width">
                            <span class="field-label">{"Describe what you need"}</span>
                            <textarea
                                name="clientMessage"
                                rows="4"
                                value={self.fields.message.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                                    RequestMsg::SetMessage(input.value())
                                })}
                            />
                        </label>
                    </div>

                    <div id="thumbsRow" class="thumb-row">
                        { for self.previews.iter().enumerate().map(|(index, url)| html! {
                            <img key={index} class="thumb" src={url.clone()} alt="Selected photo" />
                        }) }
                    </div>

                    <div class="request-actions">
                        <button type="submit" class="btn btn-accent" id="requestSubmit" disabled={self.step.is_busy()}>
                            {self.step.action_label()}
                        </button>
                        <button type="button" id="requestCancel" class="btn" onclick={link.callback(|_| RequestMsg::Close)}>
                            {"Cancel"}
                        </button>
                    </div>

                    <div id="requestFeedback" class="request-feedback">
                        {self.feedback.unwrap_or_default()}
                    </div>
                </form>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(session: FormSession, action: SessionAction) -> FormSession {
        (*Rc::new(session).reduce(action)).clone()
    }

    #[test]
    fn every_open_is_a_new_generation() {
        let first = reduce(FormSession::default(), SessionAction::Open(None));
        let again = reduce(first.clone(), SessionAction::Open(Some("Roofing".into())));
        assert!(first.open && again.open);
        assert_ne!(first.generation, again.generation);
        assert_eq!(again.preselected.as_deref(), Some("Roofing"));
    }

    #[test]
    fn close_hides_without_new_generation() {
        let open = reduce(FormSession::default(), SessionAction::Open(None));
        let closed = reduce(open.clone(), SessionAction::Close);
        assert!(!closed.open);
        assert_eq!(closed.generation, open.generation);
    }
}
