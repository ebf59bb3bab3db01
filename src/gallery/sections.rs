use futures::future::join_all;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::error::FetchError;
use crate::gallery::carousel::Carousel;
use crate::gallery::category::{Category, CATEGORIES};
use crate::gallery::manifest::{try_load_images, ImageList};

#[derive(Clone, Debug, PartialEq)]
pub enum Section {
    Carousel { category: Category, images: ImageList },
    Empty(Category),
}

#[derive(Clone, Debug, PartialEq)]
pub enum GalleryView {
    Loading,
    /// Every category failed to load
    Unavailable,
    Sections(Vec<Section>),
}

/// One section per category, in the order given. Failed categories count
/// as empty unless all of them failed.
pub fn plan_sections(results: Vec<(Category, Result<ImageList, FetchError>)>) -> GalleryView {
    if !results.is_empty() && results.iter().all(|(_, r)| r.is_err()) {
        return GalleryView::Unavailable;
    }

    let sections = results
        .into_iter()
        .map(|(category, result)| match result {
            Ok(images) if !images.is_empty() => Section::Carousel { category, images },
            Ok(_) => Section::Empty(category),
            Err(e) => {
                warn!("Showing {} as empty: {}", category.key, e);
                Section::Empty(category)
            }
        })
        .collect();
    GalleryView::Sections(sections)
}

/// Loads every category concurrently; the page renders once the slowest
/// one has answered.
pub async fn load_all_sections() -> GalleryView {
    let results = join_all(CATEGORIES.iter().map(|category| async move {
        (*category, try_load_images(category.key).await)
    }))
    .await;
    plan_sections(results)
}

#[derive(Properties, PartialEq)]
pub struct GalleriesProps {
    #[prop_or(true)]
    pub autoplay: bool,
    #[prop_or(true)]
    pub crossfade: bool,
}

#[function_component(Galleries)]
pub fn galleries(props: &GalleriesProps) -> Html {
    let view = use_state(|| GalleryView::Loading);

    {
        let view = view.clone();
        use_effect_with_deps(move |_| {
            spawn_local(async move {
                let loaded = load_all_sections().await;
                if let GalleryView::Sections(sections) = &loaded {
                    info!("Rendering {} gallery sections", sections.len());
                }
                view.set(loaded);
            });
            || ()
        }, ());
    }

    let body = match &*view {
        GalleryView::Loading => html! {
            <div class="loading-galleries">{"Loading galleries..."}</div>
        },
        GalleryView::Unavailable => html! {
            <div class="error-loading">{"Error loading galleries. Please refresh."}</div>
        },
        GalleryView::Sections(sections) => html! {
            { for sections.iter().map(|section| match section {
                Section::Carousel { category, images } => html! {
                    <Carousel
                        key={category.key}
                        category={*category}
                        images={images.clone()}
                        autoplay={props.autoplay}
                        crossfade={props.crossfade}
                    />
                },
                Section::Empty(category) => html! {
                    <div key={category.key} class="gallery-section empty">
                        <div class="carousel-title">{category.label}</div>
                        <div class="empty-gallery">{"No images yet"}</div>
                    </div>
                },
            }) }
        },
    };

    html! {
        <div id="galleries" class="galleries">
            { body }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::gallery::manifest::parse_manifest;

    fn images(body: &str) -> ImageList {
        Rc::new(parse_manifest("roofing", body))
    }

    #[test]
    fn all_failures_make_the_grid_unavailable() {
        let results = CATEGORIES
            .iter()
            .map(|c| (*c, Err(FetchError::Status(404))))
            .collect();
        assert_eq!(plan_sections(results), GalleryView::Unavailable);
    }

    #[test]
    fn partial_failure_renders_empty_placeholders_in_order() {
        let results = vec![
            (CATEGORIES[0], Ok(images("a.jpg\nb.jpg"))),
            (CATEGORIES[1], Err(FetchError::Status(500))),
            (CATEGORIES[2], Ok(images(""))),
        ];
        let GalleryView::Sections(sections) = plan_sections(results) else {
            panic!("expected sections");
        };
        assert_eq!(sections.len(), 3);
        assert!(matches!(&sections[0], Section::Carousel { images, .. } if images.len() == 2));
        assert_eq!(sections[1], Section::Empty(CATEGORIES[1]));
        assert_eq!(sections[2], Section::Empty(CATEGORIES[2]));
    }

    #[test]
    fn all_empty_is_not_an_error() {
        let results = CATEGORIES.iter().map(|c| (*c, Ok(images("")))).collect();
        let GalleryView::Sections(sections) = plan_sections(results) else {
            panic!("expected sections");
        };
        assert!(sections.iter().all(|s| matches!(s, Section::Empty(_))));
    }
}
