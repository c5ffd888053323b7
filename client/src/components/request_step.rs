//! One generation step within the details panel.

use leptos::prelude::*;

use crate::util::details::{IndexedStep, StepSource};

#[component]
pub fn RequestStep(step: IndexedStep) -> impl IntoView {
    let IndexedStep { index, source, spec } = step;
    let heading = match source {
        StepSource::Image => format!("Image {index}"),
        StepSource::Video(video) => format!("Video {} · step {index}", video + 1),
    };
    let motion = spec
        .is_moving()
        .then(|| format!("velocity {:.2} / {:.2} / {:.2}", spec.x_velocity, spec.y_velocity, spec.z_velocity));
    let settings = format!(
        "{} iterations · {} initial · {} epochs{}",
        spec.iterations,
        spec.init_iterations,
        spec.epochs,
        if spec.upscale { " · upscaled" } else { "" }
    );

    view! {
        <li class="request-step">
            <h3 class="request-step__heading">{heading}</h3>
            <p class="request-step__texts">{spec.texts.join(" | ")}</p>
            {(!spec.styles.is_empty())
                .then(|| view! { <p class="request-step__styles">{spec.styles.join(", ")}</p> })}
            <p class="request-step__settings">{settings}</p>
            {motion.map(|m| view! { <p class="request-step__motion">{m}</p> })}
        </li>
    }
}
