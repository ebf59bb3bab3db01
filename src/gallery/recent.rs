use futures::future::join_all;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::gallery::category::{Category, CATEGORIES};
use crate::gallery::manifest::{load_images, ImageDescriptor, ImageList};
use crate::gallery::modal::ModalHandle;

/// One card of the panel: the first image of a category.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectCard {
    pub category: Category,
    pub cover: ImageDescriptor,
    pub total: usize,
}

impl ProjectCard {
    /// Empty categories get no card.
    pub fn from_images(category: Category, images: &ImageList) -> Option<Self> {
        images.first().map(|cover| Self {
            category,
            cover: cover.clone(),
            total: images.len(),
        })
    }

    pub fn count_label(&self) -> String {
        match self.total {
            1 => "1 image".to_string(),
            n => format!("{} images", n),
        }
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardViewProps {
    card: ProjectCard,
}

#[function_component(ProjectCardView)]
fn project_card_view(props: &ProjectCardViewProps) -> Html {
    let modal = use_context::<ModalHandle>();
    let card = &props.card;

    // Cards only hold the cover, so the full list is fetched on demand
    let onclick = {
        let key = card.category.key;
        Callback::from(move |_: MouseEvent| {
            let modal = modal.clone();
            spawn_local(async move {
                let images = load_images(key).await;
                match modal {
                    Some(modal) if !images.is_empty() => modal.open(images, 0),
                    Some(_) => warn!("No images to show for {}", key),
                    None => warn!("Gallery modal is not mounted"),
                }
            });
        })
    };

    html! {
        <div class="project-card" data-category={card.category.key} onclick={onclick}>
            <div class="project-carousel-title">{card.category.label}</div>
            <img
                src={card.cover.thumbnail.clone()}
                loading="lazy"
                alt={card.category.label}
                class="project-thumbnail"
            />
            <div class="project-image-count">{card.count_label()}</div>
        </div>
    }
}

#[function_component(RecentProjects)]
pub fn recent_projects() -> Html {
    let cards = use_state(|| None::<Vec<ProjectCard>>);

    {
        let cards = cards.clone();
        use_effect_with_deps(move |_| {
            spawn_local(async move {
                let loaded: Vec<ProjectCard> = join_all(CATEGORIES.iter().map(|category| async move {
                    let images = load_images(category.key).await;
                    ProjectCard::from_images(*category, &images)
                }))
                .await
                .into_iter()
                .flatten()
                .collect();
                info!("Loaded {} recent project cards", loaded.len());
                cards.set(Some(loaded));
            });
            || ()
        }, ());
    }

    let body = match &*cards {
        None => html! { <div class="loading-projects">{"Loading projects..."}</div> },
        Some(cards) if cards.is_empty() => html! {
            <div class="no-projects">{"No projects available yet."}</div>
        },
        Some(cards) => html! {
            { for cards.iter().map(|card| html! {
                <ProjectCardView key={card.category.key} card={card.clone()} />
            }) }
        },
    };

    html! {
        <div id="recentProjectsGrid" class="projects-grid">
            { body }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::gallery::manifest::parse_manifest;

    #[test]
    fn card_uses_first_image_and_counts_all() {
        let images = Rc::new(parse_manifest("painting", "first.jpg\nsecond.jpg\nthird.jpg"));
        let card = ProjectCard::from_images(CATEGORIES[2], &images).unwrap();
        assert_eq!(card.cover.filename, "first.jpg");
        assert_eq!(card.count_label(), "3 images");
    }

    #[test]
    fn single_image_label_is_singular() {
        let images = Rc::new(parse_manifest("painting", "only.jpg"));
        let card = ProjectCard::from_images(CATEGORIES[2], &images).unwrap();
        assert_eq!(card.count_label(), "1 image");
    }

    #[test]
    fn empty_category_has_no_card() {
        assert_eq!(ProjectCard::from_images(CATEGORIES[0], &Rc::new(Vec::new())), None);
    }
}
