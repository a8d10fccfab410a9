use yew::prelude::*;

use crate::scene::{ElementId, ElementProps, PlacedElement};

/// Name shown for an element in the layers list
pub fn layer_label(element: &PlacedElement) -> String {
    match element.props() {
        ElementProps::Text(text) => text.content.clone(),
        ElementProps::Image(_) | ElementProps::Shape(_) => {
            format!("{} {}", element.kind().label(), element.id().0)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LayersPanelProps {
    pub elements: Vec<PlacedElement>,
    pub selected: Option<ElementId>,
    pub on_select: Callback<ElementId>,
}

#[function_component(LayersPanel)]
pub fn layers_panel(props: &LayersPanelProps) -> Html {
    html! {
        <div class="w-56 flex-none bg-white border-r border-gray-300 p-4 overflow-y-auto">
            <h2 class="text-lg font-semibold pb-3 mb-4 border-b border-gray-200">{"Layers"}</h2>
            <div class="space-y-2">
                {
                    // topmost first
                    props.elements.iter().rev().map(|element| {
                        let id = element.id();
                        let is_selected = props.selected == Some(id);
                        let on_select = props.on_select.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.stop_propagation();
                            on_select.emit(id);
                        });

                        html! {
                            <div
                                key={id.0}
                                {onclick}
                                class={classes!(
                                    "flex",
                                    "items-center",
                                    "gap-2",
                                    "p-2",
                                    "rounded",
                                    "cursor-pointer",
                                    "border",
                                    "border-gray-200",
                                    "hover:bg-gray-100",
                                    "hover:border-gray-300",
                                    if is_selected { "bg-blue-100 border-blue-300" } else { "bg-white" }
                                )}
                            >
                                <span class="text-xs uppercase text-gray-400 w-12">{element.kind().tag()}</span>
                                <span class="text-sm truncate">{layer_label(element)}</span>
                            </div>
                        }
                    }).collect::<Html>()
                }
                if props.elements.is_empty() {
                    <p class="text-sm text-gray-500">{"Drag a tool onto the playground"}</p>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Document, ElementKind};
    use crate::types::Point;

    #[test]
    fn test_layer_labels() {
        let mut doc = Document::default();
        let text = doc.create(ElementKind::Text, Point::zero()).id();
        let shape = doc.create(ElementKind::Shape, Point::zero()).id();

        assert_eq!(layer_label(doc.get(text).unwrap()), "Text 1");
        assert_eq!(layer_label(doc.get(shape).unwrap()), "Shape 2");
    }
}
