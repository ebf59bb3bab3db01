//! The page-wide image viewer.
//!
//! [`GalleryModal`] owns the one [`ModalState`] of the page and publishes a
//! [`ModalHandle`] through context. Carousels and project cards only ever
//! call [`ModalHandle::open`]; navigation and closing are driven from the
//! overlay's own controls and the keyboard.

use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

use crate::dom::{lock_body_scroll, preload_image};
use crate::gallery::category::label_for;
use crate::gallery::manifest::{ImageDescriptor, ImageList};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    pub images: ImageList,
    pub index: usize,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalAction {
    Open { images: ImageList, start: usize },
    Next,
    Previous,
    Close,
    /// Raw `KeyboardEvent.key` from the global listener
    Key(String),
}

impl ModalState {
    pub fn current(&self) -> Option<&ImageDescriptor> {
        self.images.get(self.index)
    }

    fn offset(&self, delta: isize) -> Option<&ImageDescriptor> {
        let len = self.images.len() as isize;
        if len == 0 {
            return None;
        }
        let i = (self.index as isize + delta).rem_euclid(len) as usize;
        self.images.get(i)
    }

    /// Next state for `action`, or `None` when the action changes nothing.
    pub fn step(&self, action: ModalAction) -> Option<ModalState> {
        let len = self.images.len();
        match action {
            ModalAction::Open { images, start } => {
                if images.is_empty() {
                    return None;
                }
                let index = start.min(images.len() - 1);
                Some(ModalState { images, index, visible: true })
            }
            ModalAction::Next if len > 0 => Some(ModalState {
                index: (self.index + 1) % len,
                ..self.clone()
            }),
            ModalAction::Previous if len > 0 => Some(ModalState {
                index: (self.index + len - 1) % len,
                ..self.clone()
            }),
            ModalAction::Next | ModalAction::Previous => None,
            ModalAction::Close if self.visible => Some(ModalState {
                visible: false,
                ..self.clone()
            }),
            ModalAction::Close => None,
            ModalAction::Key(key) => {
                if !self.visible {
                    return None;
                }
                match key.as_str() {
                    "Escape" => self.step(ModalAction::Close),
                    "ArrowLeft" => self.step(ModalAction::Previous),
                    "ArrowRight" => self.step(ModalAction::Next),
                    _ => None,
                }
            }
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.step(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

/// What other components get to see of the modal.
#[derive(Clone, PartialEq)]
pub struct ModalHandle {
    dispatcher: UseReducerDispatcher<ModalState>,
}

impl ModalHandle {
    pub fn open(&self, images: ImageList, start: usize) {
        if images.is_empty() {
            warn!("Ignoring request to open the gallery with no images");
            return;
        }
        self.dispatcher.dispatch(ModalAction::Open { images, start });
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryModalProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(GalleryModal)]
pub fn gallery_modal(props: &GalleryModalProps) -> Html {
    let state = use_reducer(ModalState::default);
    let handle = ModalHandle { dispatcher: state.dispatcher() };

    // Registered once for the page lifetime, the reducer ignores keys while hidden
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(move |_| {
            let document = window().and_then(|w| w.document());
            let listener = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                dispatcher.dispatch(ModalAction::Key(e.key()));
            }) as Box<dyn FnMut(KeyboardEvent)>);

            match &document {
                Some(doc) => {
                    let _ = doc.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
                }
                None => warn!("No document, gallery keyboard navigation disabled"),
            }

            move || {
                if let Some(doc) = document {
                    let _ = doc.remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    {
        use_effect_with_deps(move |visible| {
            lock_body_scroll(*visible);
            || ()
        }, state.visible);
    }

    {
        let neighbours = if state.visible {
            (
                state.offset(-1).map(|d| d.modal.clone()),
                state.offset(1).map(|d| d.modal.clone()),
            )
        } else {
            (None, None)
        };
        use_effect_with_deps(move |(prev, next)| {
            preload_image(next.as_deref());
            preload_image(prev.as_deref());
            || ()
        }, neighbours);
    }

    let close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatcher.dispatch(ModalAction::Close);
        })
    };

    let on_backdrop = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                dispatcher.dispatch(ModalAction::Close);
            }
        })
    };

    let previous = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatcher.dispatch(ModalAction::Previous);
        })
    };

    let next = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatcher.dispatch(ModalAction::Next);
        })
    };

    let overlay = match state.current() {
        Some(image) if state.visible => {
            let total = state.images.len();
            html! {
                <div id="galleryImageModal" class="gallery-modal" onclick={on_backdrop}>
                    <button id="closeGalleryModal" class="gallery-modal-close" aria-label="Close" onclick={close}>
                        {"×"}
                    </button>
                    <button id="galleryModalLeft" class="gallery-modal-nav left" aria-label="Previous image" onclick={previous}>
                        {"←"}
                    </button>
                    <img
                        id="galleryModalImg"
                        src={image.modal.clone()}
                        alt={format!("{} - Image {}", label_for(&image.category), state.index + 1)}
                        data-current-index={state.index.to_string()}
                        onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    />
                    <button id="galleryModalRight" class="gallery-modal-nav right" aria-label="Next image" onclick={next}>
                        {"→"}
                    </button>
                    <div class="gallery-modal-counter">{format!("{} / {}", state.index + 1, total)}</div>
                </div>
            }
        }
        _ => html! {},
    };

    html! {
        <ContextProvider<ModalHandle> context={handle}>
            { for props.children.iter() }
            { overlay }
        </ContextProvider<ModalHandle>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::manifest::parse_manifest;

    fn list(n: usize) -> ImageList {
        let body: String = (0..n).map(|i| format!("img{}.jpg\n", i)).collect();
        Rc::new(parse_manifest("roofing", &body))
    }

    fn opened(n: usize, start: usize) -> ModalState {
        ModalState::default()
            .step(ModalAction::Open { images: list(n), start })
            .unwrap()
    }

    #[test]
    fn open_replaces_previous_state() {
        let first = opened(3, 2);
        let second = first
            .step(ModalAction::Open { images: list(5), start: 1 })
            .unwrap();
        assert_eq!(second.images.len(), 5);
        assert_eq!(second.index, 1);
        assert!(second.visible);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for start in 0..4 {
            let mut state = opened(4, start);
            for _ in 0..4 {
                state = state.step(ModalAction::Next).unwrap();
            }
            assert_eq!(state.index, start);
        }
    }

    #[test]
    fn previous_wraps_to_last() {
        let state = opened(3, 0).step(ModalAction::Previous).unwrap();
        assert_eq!(state.index, 2);
    }

    #[test]
    fn navigation_on_empty_state_is_a_noop() {
        let state = ModalState::default();
        assert_eq!(state.step(ModalAction::Next), None);
        assert_eq!(state.step(ModalAction::Previous), None);
        assert_eq!(state.step(ModalAction::Open { images: list(0), start: 0 }), None);
    }

    #[test]
    fn start_index_is_clamped() {
        assert_eq!(opened(3, 10).index, 2);
    }

    #[test]
    fn close_keeps_list_and_index() {
        let closed = opened(3, 1).step(ModalAction::Close).unwrap();
        assert!(!closed.visible);
        assert_eq!(closed.index, 1);
        assert_eq!(closed.images.len(), 3);
        assert_eq!(closed.step(ModalAction::Close), None);
    }

    #[test]
    fn keys_are_ignored_while_hidden() {
        let closed = opened(3, 1).step(ModalAction::Close).unwrap();
        for key in ["Escape", "ArrowLeft", "ArrowRight"] {
            assert_eq!(closed.step(ModalAction::Key(key.to_string())), None);
        }
    }

    #[test]
    fn keys_drive_the_visible_modal() {
        let state = opened(3, 1);
        assert_eq!(state.step(ModalAction::Key("ArrowRight".into())).unwrap().index, 2);
        assert_eq!(state.step(ModalAction::Key("ArrowLeft".into())).unwrap().index, 0);
        assert!(!state.step(ModalAction::Key("Escape".into())).unwrap().visible);
        assert_eq!(state.step(ModalAction::Key("Enter".into())), None);
    }

    #[test]
    fn neighbours_wrap_around() {
        let state = opened(3, 0);
        assert_eq!(state.offset(-1).unwrap().filename, "img2.jpg");
        assert_eq!(state.offset(1).unwrap().filename, "img1.jpg");
    }
}
