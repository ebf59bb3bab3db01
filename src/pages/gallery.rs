use yew::prelude::*;

use crate::gallery::sections::Galleries;

#[function_component(GalleryPage)]
pub fn gallery_page() -> Html {
    html! {
        <div class="gallery-page">
            <section class="page-section">
                <h1>{"Project Gallery"}</h1>
                <p class="section-hint">{"Click any photo to view it full size."}</p>
                <Galleries autoplay={true} crossfade={true} />
            </section>
        </div>
    }
}
