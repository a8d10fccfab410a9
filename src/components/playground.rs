use web_sys::Element;
use yew::prelude::*;

use super::toolbar::TOOL_DATA_FORMAT;
use crate::scene::{reflow, ContentLayout, ElementId, ElementProps, PlacedElement};
use crate::types::Point;
use crate::utils::client_to_local;

#[derive(Properties, PartialEq)]
pub struct PlaygroundProps {
    pub elements: Vec<PlacedElement>,
    pub selected: Option<ElementId>,
    pub width: f64,
    pub height: f64,
    /// Ref to the surface; pointer positions are measured against it
    pub surface_ref: NodeRef,
    /// Tool tag and drop point
    pub on_drop: Callback<(String, Point)>,
    pub on_element_mousedown: Callback<(ElementId, Point)>,
    pub on_element_click: Callback<ElementId>,
}

/// The surface elements are dropped onto and dragged around.
#[function_component(Playground)]
pub fn playground(props: &PlaygroundProps) -> Html {
    let ondragover = Callback::from(|e: DragEvent| e.prevent_default());

    let ondrop = {
        let surface_ref = props.surface_ref.clone();
        let on_drop = props.on_drop.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            let Some(surface) = surface_ref.cast::<Element>() else {
                return;
            };
            let tag = e
                .data_transfer()
                .and_then(|transfer| transfer.get_data(TOOL_DATA_FORMAT).ok())
                .unwrap_or_default();
            if tag.is_empty() {
                return;
            }
            on_drop.emit((tag, client_to_local(&e, &surface)));
        })
    };

    let items = props.elements.iter().map(|element| {
        let id = element.id();
        let is_selected = props.selected == Some(id);

        let onmousedown = {
            let surface_ref = props.surface_ref.clone();
            let on_mousedown = props.on_element_mousedown.clone();
            Callback::from(move |e: MouseEvent| {
                // no native text selection or image ghost while dragging
                e.prevent_default();
                if let Some(surface) = surface_ref.cast::<Element>() {
                    on_mousedown.emit((id, client_to_local(&e, &surface)));
                }
            })
        };
        let onclick = {
            let on_click = props.on_element_click.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                on_click.emit(id);
            })
        };

        html! {
            <div
                key={id.0}
                class={item_classes(is_selected)}
                data-type={element.kind().tag()}
                style={format!(
                    "left: {}px; top: {}px; width: {}px; height: {}px;",
                    element.position.x, element.position.y, element.size.width, element.size.height
                )}
                {onmousedown}
                {onclick}
            >
                {render_content(element)}
            </div>
        }
    });

    html! {
        <div
            ref={props.surface_ref.clone()}
            class="playground relative overflow-hidden bg-white border border-gray-300"
            style={format!("width: {}px; height: {}px;", props.width, props.height)}
            {ondragover}
            {ondrop}
        >
            {for items}
        </div>
    }
}

/// Frame classes for a placed element; only the selected one carries `selected`.
fn item_classes(is_selected: bool) -> Classes {
    let mut classes = classes!("playground-item", "absolute", "cursor-move");
    if is_selected {
        classes.push(classes!("selected", "outline", "outline-2", "outline-blue-500"));
    }
    classes
}

fn render_content(element: &PlacedElement) -> Html {
    match (reflow(element), element.props()) {
        (ContentLayout::Fill(size), ElementProps::Text(text)) => html! {
            <p
                class="text-content m-0 overflow-hidden"
                style={format!("width: {}px; height: {}px; {}", size.width, size.height, text.css())}
            >
                {text.content.clone()}
            </p>
        },
        (ContentLayout::Fill(size), ElementProps::Image(image)) => html! {
            <img
                draggable="false"
                src={image.source_url.clone()}
                width={size.width.to_string()}
                height={size.height.to_string()}
            />
        },
        (
            ContentLayout::Vector {
                width,
                height,
                view_box,
                path_data,
                fill_color,
            },
            _,
        ) => html! {
            <svg width={width.to_string()} height={height.to_string()} viewBox={view_box}>
                <path d={path_data} fill={fill_color} />
            </svg>
        },
        (layout, props) => {
            log::warn!("no content for layout {:?} with {:?}", layout, props.kind());
            html! {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorState;

    fn marked(editor: &EditorState) -> Vec<ElementId> {
        editor
            .document()
            .elements()
            .iter()
            .map(PlacedElement::id)
            .filter(|id| item_classes(editor.selection().is_selected(*id)).contains("selected"))
            .collect()
    }

    #[test]
    fn test_only_latest_selection_is_marked() {
        let mut editor = EditorState::default();
        let a = editor.drop_tool("text", Point::zero()).unwrap();
        let b = editor.drop_tool("shape", Point::new(200.0, 0.0)).unwrap();

        editor.click_element(a).unwrap();
        assert_eq!(marked(&editor), vec![a]);

        editor.click_element(b).unwrap();
        assert_eq!(marked(&editor), vec![b]);

        editor.click_background();
        assert!(marked(&editor).is_empty());
    }

    #[test]
    fn test_unselected_frame_keeps_base_classes() {
        let classes = item_classes(false);
        assert!(classes.contains("playground-item"));
        assert!(!classes.contains("outline"));
    }
}
