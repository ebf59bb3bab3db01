use gloo_timers::callback::Interval;
use log::{debug, warn};
use yew::context::ContextHandle;
use yew::prelude::*;

use crate::config;
use crate::dom::preload_image;
use crate::gallery::category::Category;
use crate::gallery::manifest::ImageList;
use crate::gallery::modal::ModalHandle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselCursor {
    index: usize,
    len: usize,
}

impl CarouselCursor {
    /// `None` for an empty list, there is nothing to point at.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerAction {
    /// Start a fresh interval, replacing any running one
    Arm,
    Clear,
    Keep,
}

/// Autoplay bookkeeping. `armed` mirrors whether an interval is running;
/// every transition returns what to do with the timer so a carousel never
/// holds more than one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Autoplay {
    enabled: bool,
    armed: bool,
    hovered: bool,
}

impl Autoplay {
    pub fn new(enabled: bool, image_count: usize) -> Self {
        Self {
            enabled: enabled && image_count > 1,
            armed: false,
            hovered: false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn start(&mut self) -> TimerAction {
        self.rearm()
    }

    pub fn pointer_enter(&mut self) -> TimerAction {
        self.hovered = true;
        if self.armed {
            self.armed = false;
            TimerAction::Clear
        } else {
            TimerAction::Keep
        }
    }

    pub fn pointer_leave(&mut self) -> TimerAction {
        self.hovered = false;
        self.rearm()
    }

    /// A button press restarts the interval so the next automatic step is a
    /// full period away from the manual one.
    pub fn manual_navigation(&mut self) -> TimerAction {
        if self.enabled && !self.hovered {
            self.armed = true;
            TimerAction::Arm
        } else {
            TimerAction::Keep
        }
    }

    fn rearm(&mut self) -> TimerAction {
        if self.enabled && !self.armed && !self.hovered {
            self.armed = true;
            TimerAction::Arm
        } else {
            TimerAction::Keep
        }
    }
}

pub enum CarouselMsg {
    Next,
    Previous,
    Tick,
    PointerEnter,
    PointerLeave,
    Activate,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub category: Category,
    pub images: ImageList,
    #[prop_or(true)]
    pub autoplay: bool,
    #[prop_or(true)]
    pub crossfade: bool,
}

/// Single-image viewport over one category. Renders nothing for an empty
/// list; callers show their own placeholder instead.
pub struct Carousel {
    cursor: Option<CarouselCursor>,
    autoplay: Autoplay,
    timer: Option<Interval>,
    modal: Option<ModalHandle>,
    _modal_listener: Option<ContextHandle<ModalHandle>>,
}

impl Carousel {
    fn reset(&mut self, ctx: &Context<Self>) {
        let images = &ctx.props().images;
        self.cursor = CarouselCursor::new(images.len());
        self.autoplay = Autoplay::new(ctx.props().autoplay, images.len());
        self.timer = None;
        let action = self.autoplay.start();
        self.apply(ctx, action);

        preload_image(images.get(1).map(|i| i.gallery.as_str()));
        preload_image(images.get(2).map(|i| i.gallery.as_str()));
    }

    fn apply(&mut self, ctx: &Context<Self>, action: TimerAction) {
        match action {
            TimerAction::Arm => {
                let link = ctx.link().clone();
                self.timer = Some(Interval::new(config::AUTOPLAY_INTERVAL_MS, move || {
                    link.send_message(CarouselMsg::Tick)
                }));
                debug!("Autoplay armed for {}", ctx.props().category.key);
            }
            TimerAction::Clear => {
                self.timer = None;
                debug!("Autoplay cleared for {}", ctx.props().category.key);
            }
            TimerAction::Keep => {}
        }
    }

    fn preload_following(&self, ctx: &Context<Self>) {
        if let Some(cursor) = self.cursor {
            let images = &ctx.props().images;
            let following = (cursor.index() + 1) % images.len();
            preload_image(images.get(following).map(|i| i.gallery.as_str()));
        }
    }
}

impl Component for Carousel {
    type Message = CarouselMsg;
    type Properties = CarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (modal, listener) = match ctx.link().context::<ModalHandle>(Callback::noop()) {
            Some((handle, listener)) => (Some(handle), Some(listener)),
            None => (None, None),
        };

        let mut carousel = Self {
            cursor: None,
            autoplay: Autoplay::new(false, 0),
            timer: None,
            modal,
            _modal_listener: listener,
        };
        carousel.reset(ctx);
        carousel
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().images != old_props.images || ctx.props().autoplay != old_props.autoplay {
            self.reset(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(cursor) = self.cursor.as_mut() else {
            return false;
        };

        match msg {
            CarouselMsg::Next => {
                cursor.next();
                let action = self.autoplay.manual_navigation();
                self.apply(ctx, action);
            }
            CarouselMsg::Previous => {
                cursor.previous();
                let action = self.autoplay.manual_navigation();
                self.apply(ctx, action);
            }
            CarouselMsg::Tick => cursor.next(),
            CarouselMsg::PointerEnter => {
                let action = self.autoplay.pointer_enter();
                self.apply(ctx, action);
                return false;
            }
            CarouselMsg::PointerLeave => {
                let action = self.autoplay.pointer_leave();
                self.apply(ctx, action);
                return false;
            }
            CarouselMsg::Activate => {
                let index = cursor.index();
                match &self.modal {
                    Some(modal) => modal.open(ctx.props().images.clone(), index),
                    None => warn!("Gallery modal is not mounted"),
                }
                return false;
            }
        }

        self.preload_following(ctx);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let Some(cursor) = self.cursor else {
            return html! {};
        };
        let Some(image) = props.images.get(cursor.index()) else {
            return html! {};
        };

        let link = ctx.link();
        let image_key = if props.crossfade { cursor.index().to_string() } else { "static".to_string() };

        html! {
            <div class="gallery-section" data-category={props.category.key}>
                <div class="carousel-title">{props.category.label}</div>
                <div
                    class="carousel-container"
                    data-current-index={cursor.index().to_string()}
                    onmouseenter={link.callback(|_| CarouselMsg::PointerEnter)}
                    onmouseleave={link.callback(|_| CarouselMsg::PointerLeave)}
                >
                    <div class="carousel-frame">
                        <img
                            key={image_key}
                            class={classes!("carousel-image", props.crossfade.then_some("crossfade"))}
                            src={image.gallery.clone()}
                            loading="lazy"
                            alt={format!("{} - {}", props.category.label, image.filename)}
                            onclick={link.callback(|_| CarouselMsg::Activate)}
                        />
                    </div>
                    if props.images.len() > 1 {
                        <>
                        <button
                            class="carousel-btn left"
                            aria-label="Previous image"
                            onclick={link.callback(|e: MouseEvent| {
                                e.stop_propagation();
                                CarouselMsg::Previous
                            })}
                        >
                            {"←"}
                        </button>
                        <button
                            class="carousel-btn right"
                            aria-label="Next image"
                            onclick={link.callback(|e: MouseEvent| {
                                e.stop_propagation();
                                CarouselMsg::Next
                            })}
                        >
                            {"→"}
                        </button>
                        </>
                    }
                    <div class="carousel-counter">{cursor.counter()}</div>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mirrors what Carousel::apply does to its timer slot
    struct TimerSlot {
        live: usize,
        created: usize,
    }

    impl TimerSlot {
        fn new() -> Self {
            Self { live: 0, created: 0 }
        }

        fn apply(&mut self, action: TimerAction) {
            match action {
                TimerAction::Arm => {
                    self.live = 1;
                    self.created += 1;
                }
                TimerAction::Clear => self.live = 0,
                TimerAction::Keep => {}
            }
        }
    }

    #[test]
    fn empty_list_has_no_cursor() {
        assert_eq!(CarouselCursor::new(0), None);
    }

    #[test]
    fn next_then_previous_round_trips() {
        for len in 1..5 {
            for start in 0..len {
                let mut cursor = CarouselCursor::new(len).unwrap();
                for _ in 0..start {
                    cursor.next();
                }
                let before = cursor.index();
                cursor.next();
                cursor.previous();
                assert_eq!(cursor.index(), before);
                cursor.previous();
                cursor.next();
                assert_eq!(cursor.index(), before);
            }
        }
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut cursor = CarouselCursor::new(3).unwrap();
        cursor.previous();
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.counter(), "3 / 3");
        cursor.next();
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.counter(), "1 / 3");
    }

    #[test]
    fn single_image_never_autoplays() {
        let mut autoplay = Autoplay::new(true, 1);
        assert_eq!(autoplay.start(), TimerAction::Keep);
        assert_eq!(autoplay.pointer_leave(), TimerAction::Keep);
        assert!(!autoplay.is_armed());
    }

    #[test]
    fn disabled_autoplay_stays_off() {
        let mut autoplay = Autoplay::new(false, 5);
        assert_eq!(autoplay.start(), TimerAction::Keep);
        assert_eq!(autoplay.manual_navigation(), TimerAction::Keep);
    }

    #[test]
    fn hover_clears_and_leave_rearms() {
        let mut autoplay = Autoplay::new(true, 3);
        assert_eq!(autoplay.start(), TimerAction::Arm);
        assert_eq!(autoplay.pointer_enter(), TimerAction::Clear);
        assert!(!autoplay.is_armed());
        assert_eq!(autoplay.pointer_leave(), TimerAction::Arm);
        assert!(autoplay.is_armed());
    }

    #[test]
    fn repeated_hover_events_never_stack_timers() {
        let mut autoplay = Autoplay::new(true, 4);
        let mut slot = TimerSlot::new();
        slot.apply(autoplay.start());

        for _ in 0..5 {
            slot.apply(autoplay.pointer_leave());
            slot.apply(autoplay.pointer_leave());
            assert!(slot.live <= 1);
            slot.apply(autoplay.pointer_enter());
            slot.apply(autoplay.pointer_enter());
            assert_eq!(slot.live, 0);
        }
        slot.apply(autoplay.pointer_leave());
        assert_eq!(slot.live, 1);
        assert_eq!(autoplay.is_armed(), slot.live == 1);
    }

    #[test]
    fn manual_navigation_restarts_but_not_while_hovered() {
        let mut autoplay = Autoplay::new(true, 4);
        let mut slot = TimerSlot::new();
        slot.apply(autoplay.start());
        slot.apply(autoplay.manual_navigation());
        assert_eq!(slot.live, 1);
        assert_eq!(slot.created, 2);

        slot.apply(autoplay.pointer_enter());
        assert_eq!(autoplay.manual_navigation(), TimerAction::Keep);
        assert_eq!(slot.live, 0);
    }
}
