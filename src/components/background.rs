use crate::configs::{ShapeKind, BACKGROUND_SHAPES};
use dioxus::prelude::*;

#[component]
pub fn Background() -> Element {
    let shapes = BACKGROUND_SHAPES.iter().enumerate().map(|(index, shape)| {
        let class = match shape.kind {
            ShapeKind::Circle => "shape shape-circle",
            ShapeKind::Square => "shape shape-square",
            ShapeKind::Triangle => "shape shape-triangle",
        };
        // Each shape loops on its own schedule: one second longer than the
        // previous one, starting 0.3s later.
        let duration = 8 + index;
        let delay = index as f32 * 0.3;
        let style = match shape.kind {
            ShapeKind::Triangle => format!(
                "left: {}; top: {}; animation-duration: {}s; animation-delay: {:.1}s;",
                shape.x, shape.y, duration, delay,
            ),
            _ => format!(
                "width: {}px; height: {}px; left: {}; top: {}; animation-duration: {}s; animation-delay: {:.1}s;",
                shape.size, shape.size, shape.x, shape.y, duration, delay,
            ),
        };

        rsx! {
            div { key: "{index}", class: class, style: style }
        }
    });

    rsx! {
        div { class: "backdrop", {shapes} }
    }
}
