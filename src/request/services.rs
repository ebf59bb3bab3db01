use yew::prelude::*;

use crate::request::form::RequestFormHandle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service { key: "roofing", title: "Roofing", icon: "fa-house-damage", description: "New roofs, repairs, waterproofing, inspections." },
    Service { key: "building", title: "Building", icon: "fa-building", description: "New homes, extensions, slabs, foundations." },
    Service { key: "renovations", title: "Renovations", icon: "fa-tools", description: "Bathrooms, kitchens, full interior remodeling." },
    Service { key: "cupboards_kitchens", title: "Cupboards & Kitchens", icon: "fa-kitchen-set", description: "Cabinetry, BICs, kitchen renovations." },
    Service { key: "painting", title: "Painting", icon: "fa-paint-roller", description: "Interior & exterior painting & coatings." },
    Service { key: "awnings", title: "Awnings", icon: "fa-umbrella-beach", description: "Patio covers, carports, shade structures." },
    Service { key: "waterproofing", title: "Waterproofing", icon: "fa-tint", description: "Torch-on, balcony sealing, damp-proofing." },
    Service { key: "ceilings", title: "Ceilings & Drywall", icon: "fa-border-all", description: "Ceilings, drywall partitions, PVC ceilings." },
    Service { key: "tiling", title: "Tiling & Flooring", icon: "fa-th", description: "Floor & wall tiles, vinyl, laminate." },
    Service { key: "paving", title: "Paving & Retaining Walls", icon: "fa-road", description: "Driveways, pathways, retaining walls." },
    Service { key: "plumbing", title: "Plumbing", icon: "fa-faucet", description: "Leaks, geysers, drainage, installations." },
    Service { key: "electrical", title: "Electrical", icon: "fa-bolt", description: "Lighting, DB boards, rewiring." },
    Service { key: "logcabins", title: "Log Cabins", icon: "fa-campground", description: "Cabins, cottages, timber structures." },
    Service { key: "newbuilding", title: "New Building", icon: "fa-house", description: "Flats, cottages, full project builds." },
    Service { key: "gutters", title: "Gutters & Downpipes", icon: "fa-water", description: "Seamless gutters, downpipes, stormwater." },
];

/// First service whose title contains `query`, ignoring case.
pub fn preselect(query: &str) -> Option<&'static Service> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    SERVICES.iter().find(|s| s.title.to_lowercase().contains(&query))
}

#[function_component(ServicesGrid)]
pub fn services_grid() -> Html {
    let request_form = use_context::<RequestFormHandle>();

    html! {
        <div id="servicesContainer" class="services-grid">
            { for SERVICES.iter().map(|service| {
                let onclick = {
                    let request_form = request_form.clone();
                    let title = service.title;
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        if let Some(form) = &request_form {
                            form.open(Some(title.to_string()));
                        }
                    })
                };
                html! {
                    <div key={service.key} class="service-button open-quote-modal" onclick={onclick}>
                        <div class="service-button-icon">
                            <i class={classes!("fas", service.icon)}></i>
                        </div>
                        <div class="service-button-info">
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preselect_matches_case_insensitively() {
        assert_eq!(preselect("roofing").map(|s| s.key), Some("roofing"));
        assert_eq!(preselect("KITCHENS").map(|s| s.key), Some("cupboards_kitchens"));
    }

    #[test]
    fn preselect_takes_first_partial_match() {
        // "Building" comes before "New Building"
        assert_eq!(preselect("building").map(|s| s.key), Some("building"));
    }

    #[test]
    fn empty_or_unknown_selects_nothing() {
        assert_eq!(preselect(""), None);
        assert_eq!(preselect("   "), None);
        assert_eq!(preselect("pool cleaning"), None);
    }
}
