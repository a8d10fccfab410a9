use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::scene::{ElementId, ElementProps, FontFamily, PlacedElement, PropertyKey, PropertyValue};

pub const EMPTY_MESSAGE: &str = "Select an element";

/// Editable control bound to one property.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldControl {
    Number(f64),
    Text(String),
    TextArea(String),
    Color(String),
    Select {
        options: Vec<&'static str>,
        selected: &'static str,
    },
    Checkbox(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelField {
    pub key: PropertyKey,
    pub label: &'static str,
    pub control: FieldControl,
}

impl PanelField {
    fn new(key: PropertyKey, label: &'static str, control: FieldControl) -> Self {
        Self { key, label, control }
    }
}

/// Fields shown for `element`: size first, then the kind-specific ones.
pub fn panel_fields(element: &PlacedElement) -> Vec<PanelField> {
    let mut fields = vec![
        PanelField::new(
            PropertyKey::Width,
            "Width",
            FieldControl::Number(element.size.width),
        ),
        PanelField::new(
            PropertyKey::Height,
            "Height",
            FieldControl::Number(element.size.height),
        ),
    ];

    match element.props() {
        ElementProps::Text(text) => {
            fields.push(PanelField::new(
                PropertyKey::Text,
                "Text",
                FieldControl::Text(text.content.clone()),
            ));
            fields.push(PanelField::new(
                PropertyKey::FontSize,
                "Font size",
                FieldControl::Number(text.font_size_px),
            ));
            fields.push(PanelField::new(
                PropertyKey::FontFamily,
                "Font family",
                FieldControl::Select {
                    options: FontFamily::ALL.iter().map(|f| f.name()).collect(),
                    selected: text.font_family.name(),
                },
            ));
            fields.push(PanelField::new(PropertyKey::Bold, "Bold", FieldControl::Checkbox(text.bold)));
            fields.push(PanelField::new(
                PropertyKey::Italic,
                "Italic",
                FieldControl::Checkbox(text.italic),
            ));
            fields.push(PanelField::new(
                PropertyKey::Underline,
                "Underline",
                FieldControl::Checkbox(text.underline),
            ));
        }
        ElementProps::Image(image) => {
            fields.push(PanelField::new(
                PropertyKey::Src,
                "Image src",
                FieldControl::Text(image.source_url.clone()),
            ));
        }
        ElementProps::Shape(shape) => {
            fields.push(PanelField::new(
                PropertyKey::Path,
                "SVG path",
                FieldControl::TextArea(shape.path_data.clone()),
            ));
            fields.push(PanelField::new(
                PropertyKey::Fill,
                "Fill",
                FieldControl::Color(shape.fill_color.clone()),
            ));
        }
    }

    fields
}

/// What the panel body shows for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    Empty(&'static str),
    Fields {
        element: ElementId,
        fields: Vec<PanelField>,
    },
}

impl PanelContent {
    pub fn for_selection(selected: Option<&PlacedElement>) -> Self {
        match selected {
            Some(element) => PanelContent::Fields {
                element: element.id(),
                fields: panel_fields(element),
            },
            None => PanelContent::Empty(EMPTY_MESSAGE),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PropertiesPanelProps {
    pub selected: Option<PlacedElement>,
    pub on_edit: Callback<(PropertyKey, PropertyValue)>,
    pub on_delete: Callback<()>,
}

#[function_component(PropertiesPanel)]
pub fn properties_panel(props: &PropertiesPanelProps) -> Html {
    // clicks inside the panel must not reach the background handler
    let onclick = Callback::from(|e: MouseEvent| e.stop_propagation());

    let body = match PanelContent::for_selection(props.selected.as_ref()) {
        PanelContent::Fields { element, fields } => {
            let on_delete = {
                let on_delete = props.on_delete.clone();
                Callback::from(move |_: MouseEvent| on_delete.emit(()))
            };

            html! {
                <div class="space-y-4" data-element-id={element.0.to_string()}>
                    {
                        fields
                            .into_iter()
                            .map(|field| render_field(field, &props.on_edit))
                            .collect::<Html>()
                    }
                    <div class="pt-2 border-t border-gray-200">
                        <button
                            id="deleteElement"
                            onclick={on_delete}
                            class="w-full px-3 py-1 bg-red-500 text-white rounded text-sm hover:bg-red-600"
                        >
                            {"Delete element"}
                        </button>
                    </div>
                </div>
            }
        }
        PanelContent::Empty(message) => html! {
            <p class="text-sm text-gray-500">{message}</p>
        },
    };

    html! {
        <div
            id="properties"
            {onclick}
            class="w-64 flex-none bg-white border-l border-gray-300 p-4 overflow-y-auto"
        >
            <h2 class="text-lg font-semibold pb-3 mb-4 border-b border-gray-200">{"Properties"}</h2>
            {body}
        </div>
    }
}

fn render_field(field: PanelField, on_edit: &Callback<(PropertyKey, PropertyValue)>) -> Html {
    let key = field.key;
    let label_class = "block text-sm font-medium text-gray-700 mb-1";
    let input_class = "w-full px-2 py-1 border border-gray-300 rounded text-sm bg-white text-gray-900";

    let on_text_input = {
        let on_edit = on_edit.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_edit.emit((key, PropertyValue::Text(input.value())));
            }
        })
    };

    match field.control {
        FieldControl::Number(value) => html! {
            <div key={key.as_str()}>
                <label class={label_class}>{field.label}</label>
                <input
                    type="number"
                    data-prop={key.as_str()}
                    value={value.to_string()}
                    oninput={on_text_input}
                    class={input_class}
                />
            </div>
        },
        FieldControl::Text(value) => html! {
            <div key={key.as_str()}>
                <label class={label_class}>{field.label}</label>
                <input
                    type="text"
                    data-prop={key.as_str()}
                    {value}
                    oninput={on_text_input}
                    class={input_class}
                />
            </div>
        },
        FieldControl::Color(value) => html! {
            <div key={key.as_str()}>
                <label class={label_class}>{field.label}</label>
                <input
                    type="color"
                    data-prop={key.as_str()}
                    {value}
                    oninput={on_text_input}
                    class="w-12 h-8 rounded border border-gray-300 bg-white cursor-pointer"
                />
            </div>
        },
        FieldControl::TextArea(value) => {
            let oninput = {
                let on_edit = on_edit.clone();
                Callback::from(move |e: InputEvent| {
                    if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                        on_edit.emit((key, PropertyValue::Text(area.value())));
                    }
                })
            };
            html! {
                <div key={key.as_str()}>
                    <label class={label_class}>{field.label}</label>
                    <textarea
                        data-prop={key.as_str()}
                        {value}
                        {oninput}
                        rows="3"
                        class={input_class}
                    />
                </div>
            }
        }
        FieldControl::Select { options, selected } => {
            let onchange = {
                let on_edit = on_edit.clone();
                Callback::from(move |e: Event| {
                    if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                        on_edit.emit((key, PropertyValue::Text(select.value())));
                    }
                })
            };
            html! {
                <div key={key.as_str()}>
                    <label class={label_class}>{field.label}</label>
                    <select data-prop={key.as_str()} {onchange} class={input_class}>
                        {
                            options.into_iter().map(|name| html! {
                                <option value={name} selected={name == selected}>{name}</option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>
            }
        }
        FieldControl::Checkbox(checked) => {
            let onchange = {
                let on_edit = on_edit.clone();
                Callback::from(move |e: Event| {
                    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                        on_edit.emit((key, PropertyValue::Flag(input.checked())));
                    }
                })
            };
            html! {
                <label key={key.as_str()} class="inline-flex items-center gap-1 mr-3 text-sm text-gray-700">
                    <input type="checkbox" data-prop={key.as_str()} {checked} {onchange} />
                    {field.label}
                </label>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorState;
    use crate::scene::{Document, ElementKind};
    use crate::types::Point;

    fn keys(fields: &[PanelField]) -> Vec<PropertyKey> {
        fields.iter().map(|f| f.key).collect()
    }

    #[test]
    fn test_text_fields() {
        let mut doc = Document::default();
        let id = doc.create(ElementKind::Text, Point::zero()).id();
        doc.set_property(id, PropertyKey::Italic, &PropertyValue::Flag(true))
            .unwrap();
        let fields = panel_fields(doc.get(id).unwrap());

        assert_eq!(
            keys(&fields),
            vec![
                PropertyKey::Width,
                PropertyKey::Height,
                PropertyKey::Text,
                PropertyKey::FontSize,
                PropertyKey::FontFamily,
                PropertyKey::Bold,
                PropertyKey::Italic,
                PropertyKey::Underline,
            ]
        );
        assert_eq!(fields[2].control, FieldControl::Text("Text 1".to_string()));
        assert_eq!(fields[6].control, FieldControl::Checkbox(true));
        assert_eq!(
            fields[4].control,
            FieldControl::Select {
                options: vec!["Arial", "Times New Roman", "Courier New"],
                selected: "Arial",
            }
        );
    }

    #[test]
    fn test_image_and_shape_fields() {
        let mut doc = Document::default();
        let image = doc.create(ElementKind::Image, Point::zero()).id();
        let shape = doc.create(ElementKind::Shape, Point::zero()).id();

        assert_eq!(
            keys(&panel_fields(doc.get(image).unwrap())),
            vec![PropertyKey::Width, PropertyKey::Height, PropertyKey::Src]
        );

        let shape_fields = panel_fields(doc.get(shape).unwrap());
        assert_eq!(
            keys(&shape_fields),
            vec![PropertyKey::Width, PropertyKey::Height, PropertyKey::Path, PropertyKey::Fill]
        );
        assert_eq!(shape_fields[3].control, FieldControl::Color("#000000".to_string()));
    }

    #[test]
    fn test_fields_follow_live_model() {
        let mut doc = Document::default();
        let id = doc.create(ElementKind::Text, Point::zero()).id();
        doc.set_property(id, PropertyKey::FontSize, &PropertyValue::text("31"))
            .unwrap();
        doc.set_property(id, PropertyKey::Height, &PropertyValue::text("42"))
            .unwrap();

        let fields = panel_fields(doc.get(id).unwrap());
        assert_eq!(fields[1].control, FieldControl::Number(42.0));
        assert_eq!(fields[3].control, FieldControl::Number(31.0));
    }

    #[test]
    fn test_panel_empties_after_delete() {
        let mut editor = EditorState::default();
        let id = editor.drop_tool("image", Point::zero()).unwrap();
        editor.click_element(id).unwrap();
        match PanelContent::for_selection(editor.selected()) {
            PanelContent::Fields { element, fields } => {
                assert_eq!(element, id);
                assert_eq!(fields.len(), 3);
            }
            other => panic!("unexpected {:?}", other),
        }

        editor.delete_selected().unwrap();
        assert_eq!(
            PanelContent::for_selection(editor.selected()),
            PanelContent::Empty(EMPTY_MESSAGE)
        );
    }
}
